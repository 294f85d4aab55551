//! Generic pre-order traversal over built object graphs
//!
//! External consumers (serializers, validators, search indexers) walk a
//! resource without per-type traversal code. Each visited node runs the
//! same strictly ordered protocol:
//!
//! ```text
//! if visitor.pre_visit(node) {
//!     visitor.visit_start(name, index, node);
//!     if visitor.visit(name, index, node) {
//!         // children, in schema declaration order
//!     }
//!     visitor.visit_end(name, index, node);
//!     visitor.post_visit(node);
//! }
//! ```
//!
//! The boolean returns of [`Visitor::pre_visit`] and [`Visitor::visit`] are
//! the only traversal controls: traversal itself never fails, and a visitor
//! that needs to report errors accumulates them in its own state.

use crate::resource::audit_event::{
    AuditEventAgent, AuditEventAgentNetwork, AuditEventEntity, AuditEventEntityDetail,
    AuditEventSource,
};
use crate::resource::{AuditEvent, Schedule};
use crate::types::code::{
    AuditEventAction, AuditEventAgentNetworkType, AuditEventOutcome, IdentifierUse,
    NarrativeStatus,
};
use crate::types::{
    Base64Binary, Boolean, Code, CodeableConcept, Coding, DateTime, Extension, Id, Identifier,
    Instant, Integer, Meta, Narrative, Period, Reference, String as FhirString, Uri, Xhtml,
};

/// A borrowed reference to any concrete node in the model tree.
///
/// The traversal dispatches on this closed union instead of per-type method
/// overloads; the code generator emits one variant per concrete type.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    // Primitive wrappers
    Base64Binary(&'a Base64Binary),
    Boolean(&'a Boolean),
    Code(&'a Code),
    DateTime(&'a DateTime),
    Id(&'a Id),
    Instant(&'a Instant),
    Integer(&'a Integer),
    String(&'a FhirString),
    Uri(&'a Uri),
    Xhtml(&'a Xhtml),
    // Coded values
    AuditEventAction(&'a AuditEventAction),
    AuditEventAgentNetworkType(&'a AuditEventAgentNetworkType),
    AuditEventOutcome(&'a AuditEventOutcome),
    IdentifierUse(&'a IdentifierUse),
    NarrativeStatus(&'a NarrativeStatus),
    // Complex types
    CodeableConcept(&'a CodeableConcept),
    Coding(&'a Coding),
    Extension(&'a Extension),
    Identifier(&'a Identifier),
    Meta(&'a Meta),
    Narrative(&'a Narrative),
    Period(&'a Period),
    Reference(&'a Reference),
    // Backbone elements
    AuditEventAgent(&'a AuditEventAgent),
    AuditEventAgentNetwork(&'a AuditEventAgentNetwork),
    AuditEventEntity(&'a AuditEventEntity),
    AuditEventEntityDetail(&'a AuditEventEntityDetail),
    AuditEventSource(&'a AuditEventSource),
    // Resources
    AuditEvent(&'a AuditEvent),
    Schedule(&'a Schedule),
}

impl<'a> Node<'a> {
    /// Schema name of the node's concrete type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Base64Binary(_) => "base64Binary",
            Node::Boolean(_) => "boolean",
            Node::Code(_) => "code",
            Node::DateTime(_) => "dateTime",
            Node::Id(_) => "id",
            Node::Instant(_) => "instant",
            Node::Integer(_) => "integer",
            Node::String(_) => "string",
            Node::Uri(_) => "uri",
            Node::Xhtml(_) => "xhtml",
            Node::AuditEventAction(_) => "AuditEventAction",
            Node::AuditEventAgentNetworkType(_) => "AuditEventAgentNetworkType",
            Node::AuditEventOutcome(_) => "AuditEventOutcome",
            Node::IdentifierUse(_) => "IdentifierUse",
            Node::NarrativeStatus(_) => "NarrativeStatus",
            Node::CodeableConcept(_) => "CodeableConcept",
            Node::Coding(_) => "Coding",
            Node::Extension(_) => "Extension",
            Node::Identifier(_) => "Identifier",
            Node::Meta(_) => "Meta",
            Node::Narrative(_) => "Narrative",
            Node::Period(_) => "Period",
            Node::Reference(_) => "Reference",
            Node::AuditEventAgent(_) => "AuditEvent.Agent",
            Node::AuditEventAgentNetwork(_) => "AuditEvent.Agent.Network",
            Node::AuditEventEntity(_) => "AuditEvent.Entity",
            Node::AuditEventEntityDetail(_) => "AuditEvent.Entity.Detail",
            Node::AuditEventSource(_) => "AuditEvent.Source",
            Node::AuditEvent(_) => "AuditEvent",
            Node::Schedule(_) => "Schedule",
        }
    }

    /// True for resource nodes, false for element nodes.
    pub fn is_resource(&self) -> bool {
        matches!(self, Node::AuditEvent(_) | Node::Schedule(_))
    }
}

/// Caller-supplied traversal hooks.
///
/// All hooks have default implementations, so a visitor only overrides what
/// it needs. The lifetime parameter lets a visitor retain the borrowed
/// nodes it is handed (see [`CollectingVisitor`]).
pub trait Visitor<'a> {
    /// Return false to skip this node and its entire subtree; no further
    /// hooks fire for it.
    fn pre_visit(&mut self, node: Node<'a>) -> bool {
        let _ = node;
        true
    }

    /// Announces entry, before type dispatch. Fires whenever `pre_visit`
    /// allowed entry.
    fn visit_start(&mut self, name: &str, index: Option<usize>, node: Node<'a>) {
        let _ = (name, index, node);
    }

    /// The type-dispatch point. Return false to skip the node's children;
    /// `visit_end` and `post_visit` still fire.
    fn visit(&mut self, name: &str, index: Option<usize>, node: Node<'a>) -> bool {
        let _ = (name, index, node);
        true
    }

    /// Mirrors `visit_start`.
    fn visit_end(&mut self, name: &str, index: Option<usize>, node: Node<'a>) {
        let _ = (name, index, node);
    }

    /// Mirrors `pre_visit`; fires last, for cleanup or aggregation.
    fn post_visit(&mut self, node: Node<'a>) {
        let _ = node;
    }
}

/// A node that can announce itself and its children to a [`Visitor`].
///
/// `index` is `None` for singleton fields and `Some(position)` for elements
/// of repeated fields; `name` is the schema-declared element name.
pub trait Visitable {
    fn node(&self) -> Node<'_>;

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>);
}

impl<T: Visitable> Visitable for Box<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        (**self).accept(name, index, visitor)
    }
}

/// Runs the per-node visit protocol; `children` announces the node's
/// children in schema declaration order.
pub(crate) fn visit_node<'a, F>(
    node: Node<'a>,
    name: &str,
    index: Option<usize>,
    visitor: &mut dyn Visitor<'a>,
    children: F,
) where
    F: FnOnce(&mut dyn Visitor<'a>),
{
    if !visitor.pre_visit(node) {
        return;
    }
    visitor.visit_start(name, index, node);
    if visitor.visit(name, index, node) {
        children(&mut *visitor);
    }
    visitor.visit_end(name, index, node);
    visitor.post_visit(node);
}

/// Announce an optional singleton field.
pub(crate) fn accept_opt<'a, T: Visitable>(
    field: &'a Option<T>,
    name: &str,
    visitor: &mut dyn Visitor<'a>,
) {
    if let Some(value) = field {
        value.accept(name, None, visitor);
    }
}

/// Announce every element of a repeated field, with its position.
pub(crate) fn accept_list<'a, T: Visitable>(
    items: &'a [T],
    name: &str,
    visitor: &mut dyn Visitor<'a>,
) {
    for (index, item) in items.iter().enumerate() {
        item.accept(name, Some(index), visitor);
    }
}

/// Collects every node admitted by `visit`, in pre-order.
#[derive(Debug, Default)]
pub struct CollectingVisitor<'a> {
    result: Vec<Node<'a>>,
}

impl<'a> CollectingVisitor<'a> {
    pub fn new() -> Self {
        Self { result: Vec::new() }
    }

    pub fn result(&self) -> &[Node<'a>] {
        &self.result
    }

    pub fn into_result(self) -> Vec<Node<'a>> {
        self.result
    }
}

impl<'a> Visitor<'a> for CollectingVisitor<'a> {
    fn visit(&mut self, _name: &str, _index: Option<usize>, node: Node<'a>) -> bool {
        self.result.push(node);
        true
    }
}
