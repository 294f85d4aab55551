//! FHIR datatypes
//!
//! - `primitive`: primitive element wrappers (value + id + extensions)
//! - `complex`: general-purpose datatypes built from primitives
//! - `code`: coded values with required bindings
//!
//! The primitive string type is exported as `String`; import it as
//! `String as FhirString` where the std type is also needed.

pub mod code;
pub mod complex;
pub mod primitive;

pub use complex::{
    CodeableConcept, CodeableConceptBuilder, Coding, CodingBuilder, Extension, ExtensionBuilder,
    ExtensionValue, Identifier, IdentifierBuilder, Meta, MetaBuilder, Narrative, NarrativeBuilder,
    Period, PeriodBuilder, Reference, ReferenceBuilder,
};
pub use primitive::{
    Base64Binary, Base64BinaryBuilder, Boolean, BooleanBuilder, Code, CodeBuilder, DateTime,
    DateTimeBuilder, Id, IdBuilder, Instant, InstantBuilder, Integer, IntegerBuilder, String,
    StringBuilder, Uri, UriBuilder, Xhtml, XhtmlBuilder,
};
