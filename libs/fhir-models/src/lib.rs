//! Immutable FHIR R4 data models
//!
//! This crate provides the builder-constructed object model for FHIR
//! resources: deeply immutable value types with structural equality and a
//! generic pre-order visitor.
//!
//! # Module Organization
//!
//! - `types`: primitive wrappers, complex datatypes and coded values
//! - `resource`: generated resource types and the `Resource` union
//! - `visitor`: the traversal protocol external consumers implement
//! - `validation`: the checks `build()` implementations run
//! - `constraint`: declared invariants, evaluated by an external engine
//!
//! # Design Philosophy
//!
//! - **Builder-only construction**: every type pairs with a builder whose
//!   `build()` validates required fields, cardinalities and primitive
//!   grammars; an invalid graph is never observable.
//! - **Deep immutability**: built values never change, which makes them
//!   safe for unsynchronized concurrent reads and lets every value cache
//!   its structural hash at construction time.
//! - **Uniform traversal**: serializers, validators and indexers walk any
//!   resource through the [`visitor::Visitor`] hooks without per-type code.
//! - **No wire format**: parsing and serialization live in the layers that
//!   consume this model, driving builders and the visitor respectively.
//!
//! # Example
//!
//! ```rust
//! use stannum_models::resource::audit_event::{AuditEventAgent, AuditEventSource};
//! use stannum_models::resource::AuditEvent;
//! use stannum_models::types::{Boolean, Code, Coding, Instant, Reference, Uri};
//! use stannum_models::types::String as FhirString;
//!
//! # fn main() -> stannum_models::Result<()> {
//! let event = AuditEvent::builder()
//!     .type_(
//!         Coding::builder()
//!             .system(Uri::of("http://dicom.nema.org/resources/ontology/DCM")?)
//!             .code(Code::of("110100")?)
//!             .build()?,
//!     )
//!     .recorded(Instant::parse("2024-05-04T10:00:00Z")?)
//!     .agent(AuditEventAgent::builder().requestor(Boolean::of(true)).build()?)
//!     .source(
//!         AuditEventSource::builder()
//!             .observer(
//!                 Reference::builder()
//!                     .display(FhirString::of("audit service")?)
//!                     .build()?,
//!             )
//!             .build()?,
//!     )
//!     .build()?;
//!
//! assert_eq!(event.agent().len(), 1);
//!
//! // a built value round-trips through its builder unchanged
//! assert_eq!(event.to_builder().build()?, event);
//! # Ok(())
//! # }
//! ```

pub mod constraint;
pub mod element;
pub mod error;
pub mod resource;
pub mod types;
pub mod validation;
pub mod visitor;

// Re-export commonly used types
pub use constraint::{Constraint, ConstraintLevel};
pub use element::{BackboneElement, Element};
pub use error::{Error, Result};
pub use resource::{AuditEvent, Resource, Schedule};
pub use visitor::{CollectingVisitor, Node, Visitable, Visitor};
