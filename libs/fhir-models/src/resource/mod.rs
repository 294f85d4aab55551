//! Generated resource types
//!
//! Each resource composes the resource-level attributes (logical id, meta,
//! implicitRules, language) and the domain-resource attributes (text,
//! contained, extension, modifierExtension) directly, the way the code
//! generator emits them. [`Resource`] is the closed union over all
//! concrete resource types, used for contained resources and for generic
//! consumers.

pub mod audit_event;
pub mod schedule;

pub use audit_event::AuditEvent;
pub use schedule::Schedule;

use crate::types::Meta;
use crate::visitor::{Node, Visitable, Visitor};

/// Any concrete resource type.
///
/// The code generator emits one variant per resource in the specification;
/// this build carries the exemplar subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    AuditEvent(AuditEvent),
    Schedule(Schedule),
}

impl Resource {
    /// Logical id of the resource, if assigned.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::AuditEvent(resource) => resource.id(),
            Resource::Schedule(resource) => resource.id(),
        }
    }

    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Resource::AuditEvent(resource) => resource.meta(),
            Resource::Schedule(resource) => resource.meta(),
        }
    }

    /// Schema name of the resource type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::AuditEvent(_) => "AuditEvent",
            Resource::Schedule(_) => "Schedule",
        }
    }
}

impl Visitable for Resource {
    fn node(&self) -> Node<'_> {
        match self {
            Resource::AuditEvent(resource) => resource.node(),
            Resource::Schedule(resource) => resource.node(),
        }
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        match self {
            Resource::AuditEvent(resource) => resource.accept(name, index, visitor),
            Resource::Schedule(resource) => resource.accept(name, index, visitor),
        }
    }
}

impl From<AuditEvent> for Resource {
    fn from(resource: AuditEvent) -> Self {
        Resource::AuditEvent(resource)
    }
}

impl From<Schedule> for Resource {
    fn from(resource: Schedule) -> Self {
        Resource::Schedule(resource)
    }
}
