//! Schedule resource
//!
//! A container for slots of time that may be available for booking
//! appointments.

use crate::constraint::Constraint;
use crate::element::structural_hash;
use crate::error::Result;
use crate::resource::Resource;
use crate::types::{
    Boolean, Code, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
    String as FhirString, Uri,
};
use crate::validation;
use crate::visitor::{accept_list, accept_opt, visit_node, Node, Visitable, Visitor};

/// A container for slots of time that may be available for booking
/// appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    active: Option<Boolean>,
    service_category: Vec<CodeableConcept>,
    service_type: Vec<CodeableConcept>,
    specialty: Vec<CodeableConcept>,
    actor: Vec<Reference>,
    planning_horizon: Option<Period>,
    comment: Option<FhirString>,
    hash: u64,
}

impl Schedule {
    /// Invariants declared on this type; Schedule declares none of its own.
    pub const CONSTRAINTS: &'static [Constraint] = &[];

    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::default()
    }

    /// Logical id of this artifact.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn implicit_rules(&self) -> Option<&Uri> {
        self.implicit_rules.as_ref()
    }

    pub fn language(&self) -> Option<&Code> {
        self.language.as_ref()
    }

    pub fn text(&self) -> Option<&Narrative> {
        self.text.as_ref()
    }

    pub fn contained(&self) -> &[Resource] {
        &self.contained
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    /// Whether this schedule is in active use.
    pub fn active(&self) -> Option<&Boolean> {
        self.active.as_ref()
    }

    pub fn service_category(&self) -> &[CodeableConcept] {
        &self.service_category
    }

    pub fn service_type(&self) -> &[CodeableConcept] {
        &self.service_type
    }

    pub fn specialty(&self) -> &[CodeableConcept] {
        &self.specialty
    }

    /// The resources the slots belong to. At least one.
    pub fn actor(&self) -> &[Reference] {
        &self.actor
    }

    /// The period of time the slots are intended to cover.
    pub fn planning_horizon(&self) -> Option<&Period> {
        self.planning_horizon.as_ref()
    }

    pub fn comment(&self) -> Option<&FhirString> {
        self.comment.as_ref()
    }

    pub fn to_builder(&self) -> ScheduleBuilder {
        ScheduleBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            text: self.text.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            active: self.active.clone(),
            service_category: self.service_category.clone(),
            service_type: self.service_type.clone(),
            specialty: self.specialty.clone(),
            actor: self.actor.clone(),
            planning_horizon: self.planning_horizon.clone(),
            comment: self.comment.clone(),
        }
    }
}

impl std::hash::Hash for Schedule {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Schedule {
    fn node(&self) -> Node<'_> {
        Node::Schedule(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Schedule(self), name, index, visitor, |v| {
            accept_opt(&self.meta, "meta", v);
            accept_opt(&self.implicit_rules, "implicitRules", v);
            accept_opt(&self.language, "language", v);
            accept_opt(&self.text, "text", v);
            accept_list(&self.contained, "contained", v);
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_list(&self.identifier, "identifier", v);
            accept_opt(&self.active, "active", v);
            accept_list(&self.service_category, "serviceCategory", v);
            accept_list(&self.service_type, "serviceType", v);
            accept_list(&self.specialty, "specialty", v);
            accept_list(&self.actor, "actor", v);
            accept_opt(&self.planning_horizon, "planningHorizon", v);
            accept_opt(&self.comment, "comment", v);
        });
    }
}

/// Builder for [`Schedule`].
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    active: Option<Boolean>,
    service_category: Vec<CodeableConcept>,
    service_type: Vec<CodeableConcept>,
    specialty: Vec<CodeableConcept>,
    actor: Vec<Reference>,
    planning_horizon: Option<Period>,
    comment: Option<FhirString>,
}

impl ScheduleBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn implicit_rules(mut self, implicit_rules: Uri) -> Self {
        self.implicit_rules = Some(implicit_rules);
        self
    }

    pub fn language(mut self, language: Code) -> Self {
        self.language = Some(language);
        self
    }

    pub fn text(mut self, text: Narrative) -> Self {
        self.text = Some(text);
        self
    }

    pub fn contained(mut self, contained: impl Into<Resource>) -> Self {
        self.contained.push(contained.into());
        self
    }

    pub fn set_contained(mut self, contained: Vec<Resource>) -> Self {
        self.contained = contained;
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.extension = extension;
        self
    }

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.modifier_extension = modifier_extension;
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn set_identifier(mut self, identifier: Vec<Identifier>) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn active(mut self, active: Boolean) -> Self {
        self.active = Some(active);
        self
    }

    pub fn service_category(mut self, service_category: CodeableConcept) -> Self {
        self.service_category.push(service_category);
        self
    }

    pub fn set_service_category(mut self, service_category: Vec<CodeableConcept>) -> Self {
        self.service_category = service_category;
        self
    }

    pub fn service_type(mut self, service_type: CodeableConcept) -> Self {
        self.service_type.push(service_type);
        self
    }

    pub fn set_service_type(mut self, service_type: Vec<CodeableConcept>) -> Self {
        self.service_type = service_type;
        self
    }

    pub fn specialty(mut self, specialty: CodeableConcept) -> Self {
        self.specialty.push(specialty);
        self
    }

    pub fn set_specialty(mut self, specialty: Vec<CodeableConcept>) -> Self {
        self.specialty = specialty;
        self
    }

    pub fn actor(mut self, actor: Reference) -> Self {
        self.actor.push(actor);
        self
    }

    pub fn set_actor(mut self, actor: Vec<Reference>) -> Self {
        self.actor = actor;
        self
    }

    pub fn planning_horizon(mut self, planning_horizon: Period) -> Self {
        self.planning_horizon = Some(planning_horizon);
        self
    }

    pub fn comment(mut self, comment: FhirString) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn build(self) -> Result<Schedule> {
        if let Some(id) = &self.id {
            validation::check_id(id, "Schedule.id")?;
        }
        let actor = validation::non_empty(self.actor, "actor")?;
        Ok(Schedule {
            hash: structural_hash(&(
                (
                    &self.id,
                    &self.meta,
                    &self.implicit_rules,
                    &self.language,
                    &self.text,
                    &self.contained,
                    &self.extension,
                    &self.modifier_extension,
                ),
                (
                    &self.identifier,
                    &self.active,
                    &self.service_category,
                    &self.service_type,
                    &self.specialty,
                    &actor,
                    &self.planning_horizon,
                    &self.comment,
                ),
            )),
            id: self.id,
            meta: self.meta,
            implicit_rules: self.implicit_rules,
            language: self.language,
            text: self.text,
            contained: self.contained,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            identifier: self.identifier,
            active: self.active,
            service_category: self.service_category,
            service_type: self.service_type,
            specialty: self.specialty,
            actor,
            planning_horizon: self.planning_horizon,
            comment: self.comment,
        })
    }
}
