//! AuditEvent resource
//!
//! A record of an event made for purposes of maintaining a security log.
//! Typical uses include detection of intrusion attempts and monitoring for
//! inappropriate usage.

use crate::constraint::{Constraint, ConstraintLevel};
use crate::element::{structural_hash, BackboneElement, Element};
use crate::error::Result;
use crate::resource::Resource;
use crate::types::code::{
    AuditEventAction, AuditEventAgentNetworkType, AuditEventOutcome,
};
use crate::types::{
    Base64Binary, Boolean, Code, CodeableConcept, Coding, Extension, Instant, Meta, Narrative,
    Period, Reference, String as FhirString, Uri,
};
use crate::validation;
use crate::visitor::{accept_list, accept_opt, visit_node, Node, Visitable, Visitor};

/// A record of an event, with the actors involved, the reporting source and
/// the data touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Coding,
    subtype: Vec<Coding>,
    action: Option<AuditEventAction>,
    period: Option<Period>,
    recorded: Instant,
    outcome: Option<AuditEventOutcome>,
    outcome_desc: Option<FhirString>,
    purpose_of_event: Vec<CodeableConcept>,
    agent: Vec<AuditEventAgent>,
    source: AuditEventSource,
    entity: Vec<AuditEventEntity>,
    hash: u64,
}

impl AuditEvent {
    /// Invariants declared on this type, evaluated by an external engine.
    pub const CONSTRAINTS: &'static [Constraint] = &[
        Constraint {
            id: "sev-1",
            level: ConstraintLevel::Rule,
            location: "AuditEvent.entity",
            description: "Either a name or a query (NOT both)",
            expression: "name.empty() or query.empty()",
        },
        Constraint {
            id: "auditEvent-2",
            level: ConstraintLevel::Warning,
            location: "(base)",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/audit-event-type",
            expression: "type.exists() and type.memberOf('http://hl7.org/fhir/ValueSet/audit-event-type', 'extensible')",
        },
        Constraint {
            id: "auditEvent-3",
            level: ConstraintLevel::Warning,
            location: "(base)",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/audit-event-sub-type",
            expression: "subtype.exists() implies (subtype.all(memberOf('http://hl7.org/fhir/ValueSet/audit-event-sub-type', 'extensible')))",
        },
        Constraint {
            id: "auditEvent-4",
            level: ConstraintLevel::Warning,
            location: "(base)",
            description: "SHALL, if possible, contain a code from value set http://terminology.hl7.org/ValueSet/v3-PurposeOfUse",
            expression: "purposeOfEvent.exists() implies (purposeOfEvent.all(memberOf('http://terminology.hl7.org/ValueSet/v3-PurposeOfUse', 'extensible')))",
        },
        Constraint {
            id: "auditEvent-5",
            level: ConstraintLevel::Warning,
            location: "agent.type",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/participation-role-type",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/participation-role-type', 'extensible')",
        },
        Constraint {
            id: "auditEvent-6",
            level: ConstraintLevel::Warning,
            location: "agent.media",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/dicm-405-mediatype",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/dicm-405-mediatype', 'extensible')",
        },
        Constraint {
            id: "auditEvent-7",
            level: ConstraintLevel::Warning,
            location: "agent.purposeOfUse",
            description: "SHALL, if possible, contain a code from value set http://terminology.hl7.org/ValueSet/v3-PurposeOfUse",
            expression: "$this.memberOf('http://terminology.hl7.org/ValueSet/v3-PurposeOfUse', 'extensible')",
        },
        Constraint {
            id: "auditEvent-8",
            level: ConstraintLevel::Warning,
            location: "source.type",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/audit-source-type",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/audit-source-type', 'extensible')",
        },
        Constraint {
            id: "auditEvent-9",
            level: ConstraintLevel::Warning,
            location: "entity.type",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/audit-entity-type",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/audit-entity-type', 'extensible')",
        },
        Constraint {
            id: "auditEvent-10",
            level: ConstraintLevel::Warning,
            location: "entity.role",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/object-role",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/object-role', 'extensible')",
        },
        Constraint {
            id: "auditEvent-11",
            level: ConstraintLevel::Warning,
            location: "entity.lifecycle",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/object-lifecycle-events",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/object-lifecycle-events', 'extensible')",
        },
        Constraint {
            id: "auditEvent-12",
            level: ConstraintLevel::Warning,
            location: "entity.securityLabel",
            description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/security-labels",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/security-labels', 'extensible')",
        },
    ];

    pub fn builder() -> AuditEventBuilder {
        AuditEventBuilder::default()
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

    /// Resources contained inline; they have no independent identity
    /// outside this resource.
    pub fn contained(&self) -> &[Resource] {
        &self.contained
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    /// Identifier for a family of the event; identifies the performed
    /// function.
    pub fn type_(&self) -> &Coding {
        &self.type_
    }

    /// Identifier for the category of event.
    pub fn subtype(&self) -> &[Coding] {
        &self.subtype
    }

    pub fn action(&self) -> Option<AuditEventAction> {
        self.action
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    /// The time when the event was recorded.
    pub fn recorded(&self) -> &Instant {
        &self.recorded
    }

    pub fn outcome(&self) -> Option<AuditEventOutcome> {
        self.outcome
    }

    pub fn outcome_desc(&self) -> Option<&FhirString> {
        self.outcome_desc.as_ref()
    }

    pub fn purpose_of_event(&self) -> &[CodeableConcept] {
        &self.purpose_of_event
    }

    /// Actors taking an active role in the event. At least one.
    pub fn agent(&self) -> &[AuditEventAgent] {
        &self.agent
    }

    /// The system that reported the event.
    pub fn source(&self) -> &AuditEventSource {
        &self.source
    }

    /// Data or objects accessed during the event.
    pub fn entity(&self) -> &[AuditEventEntity] {
        &self.entity
    }

    pub fn to_builder(&self) -> AuditEventBuilder {
        AuditEventBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            text: self.text.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            type_: Some(self.type_.clone()),
            subtype: self.subtype.clone(),
            action: self.action,
            period: self.period.clone(),
            recorded: Some(self.recorded.clone()),
            outcome: self.outcome,
            outcome_desc: self.outcome_desc.clone(),
            purpose_of_event: self.purpose_of_event.clone(),
            agent: self.agent.clone(),
            source: Some(self.source.clone()),
            entity: self.entity.clone(),
        }
    }
}

impl std::hash::Hash for AuditEvent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEvent {
    fn node(&self) -> Node<'_> {
        Node::AuditEvent(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEvent(self), name, index, visitor, |v| {
            accept_opt(&self.meta, "meta", v);
            accept_opt(&self.implicit_rules, "implicitRules", v);
            accept_opt(&self.language, "language", v);
            accept_opt(&self.text, "text", v);
            accept_list(&self.contained, "contained", v);
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            self.type_.accept("type", None, v);
            accept_list(&self.subtype, "subtype", v);
            accept_opt(&self.action, "action", v);
            accept_opt(&self.period, "period", v);
            self.recorded.accept("recorded", None, v);
            accept_opt(&self.outcome, "outcome", v);
            accept_opt(&self.outcome_desc, "outcomeDesc", v);
            accept_list(&self.purpose_of_event, "purposeOfEvent", v);
            accept_list(&self.agent, "agent", v);
            self.source.accept("source", None, v);
            accept_list(&self.entity, "entity", v);
        });
    }
}

/// Builder for [`AuditEvent`].
#[derive(Debug, Default)]
pub struct AuditEventBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Option<Coding>,
    subtype: Vec<Coding>,
    action: Option<AuditEventAction>,
    period: Option<Period>,
    recorded: Option<Instant>,
    outcome: Option<AuditEventOutcome>,
    outcome_desc: Option<FhirString>,
    purpose_of_event: Vec<CodeableConcept>,
    agent: Vec<AuditEventAgent>,
    source: Option<AuditEventSource>,
    entity: Vec<AuditEventEntity>,
}

impl AuditEventBuilder {
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

    pub fn type_(mut self, type_: Coding) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn subtype(mut self, subtype: Coding) -> Self {
        self.subtype.push(subtype);
        self
    }

    pub fn set_subtype(mut self, subtype: Vec<Coding>) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn action(mut self, action: AuditEventAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn recorded(mut self, recorded: Instant) -> Self {
        self.recorded = Some(recorded);
        self
    }

    pub fn outcome(mut self, outcome: AuditEventOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn outcome_desc(mut self, outcome_desc: FhirString) -> Self {
        self.outcome_desc = Some(outcome_desc);
        self
    }

    pub fn purpose_of_event(mut self, purpose_of_event: CodeableConcept) -> Self {
        self.purpose_of_event.push(purpose_of_event);
        self
    }

    pub fn set_purpose_of_event(mut self, purpose_of_event: Vec<CodeableConcept>) -> Self {
        self.purpose_of_event = purpose_of_event;
        self
    }

    pub fn agent(mut self, agent: AuditEventAgent) -> Self {
        self.agent.push(agent);
        self
    }

    pub fn set_agent(mut self, agent: Vec<AuditEventAgent>) -> Self {
        self.agent = agent;
        self
    }

    pub fn source(mut self, source: AuditEventSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn entity(mut self, entity: AuditEventEntity) -> Self {
        self.entity.push(entity);
        self
    }

    pub fn set_entity(mut self, entity: Vec<AuditEventEntity>) -> Self {
        self.entity = entity;
        self
    }

    pub fn build(self) -> Result<AuditEvent> {
        if let Some(id) = &self.id {
            validation::check_id(id, "AuditEvent.id")?;
        }
        let type_ = validation::required(self.type_, "type")?;
        let recorded = validation::required(self.recorded, "recorded")?;
        let agent = validation::non_empty(self.agent, "agent")?;
        let source = validation::required(self.source, "source")?;
        Ok(AuditEvent {
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
                    &type_,
                    &self.subtype,
                    &self.action,
                    &self.period,
                    &recorded,
                    &self.outcome,
                    &self.outcome_desc,
                    &self.purpose_of_event,
                    &agent,
                    &source,
                    &self.entity,
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
            type_,
            subtype: self.subtype,
            action: self.action,
            period: self.period,
            recorded,
            outcome: self.outcome,
            outcome_desc: self.outcome_desc,
            purpose_of_event: self.purpose_of_event,
            agent,
            source,
            entity: self.entity,
        })
    }
}

/// An actor taking an active role in the event or activity that is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventAgent {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Option<CodeableConcept>,
    role: Vec<CodeableConcept>,
    who: Option<Reference>,
    alt_id: Option<FhirString>,
    name: Option<FhirString>,
    requestor: Boolean,
    location: Option<Reference>,
    policy: Vec<Uri>,
    media: Option<Coding>,
    network: Option<AuditEventAgentNetwork>,
    purpose_of_use: Vec<CodeableConcept>,
    hash: u64,
}

impl AuditEventAgent {
    pub fn builder() -> AuditEventAgentBuilder {
        AuditEventAgentBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn role(&self) -> &[CodeableConcept] {
        &self.role
    }

    pub fn who(&self) -> Option<&Reference> {
        self.who.as_ref()
    }

    pub fn alt_id(&self) -> Option<&FhirString> {
        self.alt_id.as_ref()
    }

    pub fn name(&self) -> Option<&FhirString> {
        self.name.as_ref()
    }

    /// Whether the agent is the initiator of the event.
    pub fn requestor(&self) -> &Boolean {
        &self.requestor
    }

    pub fn location(&self) -> Option<&Reference> {
        self.location.as_ref()
    }

    pub fn policy(&self) -> &[Uri] {
        &self.policy
    }

    pub fn media(&self) -> Option<&Coding> {
        self.media.as_ref()
    }

    pub fn network(&self) -> Option<&AuditEventAgentNetwork> {
        self.network.as_ref()
    }

    pub fn purpose_of_use(&self) -> &[CodeableConcept] {
        &self.purpose_of_use
    }

    pub fn to_builder(&self) -> AuditEventAgentBuilder {
        AuditEventAgentBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            type_: self.type_.clone(),
            role: self.role.clone(),
            who: self.who.clone(),
            alt_id: self.alt_id.clone(),
            name: self.name.clone(),
            requestor: Some(self.requestor.clone()),
            location: self.location.clone(),
            policy: self.policy.clone(),
            media: self.media.clone(),
            network: self.network.clone(),
            purpose_of_use: self.purpose_of_use.clone(),
        }
    }
}

impl Element for AuditEventAgent {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
            || self.type_.is_some()
            || !self.role.is_empty()
            || self.who.is_some()
            || self.alt_id.is_some()
            || self.name.is_some()
            || self.location.is_some()
            || !self.policy.is_empty()
            || self.media.is_some()
            || self.network.is_some()
            || !self.purpose_of_use.is_empty()
    }
}

impl BackboneElement for AuditEventAgent {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl std::hash::Hash for AuditEventAgent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEventAgent {
    fn node(&self) -> Node<'_> {
        Node::AuditEventAgent(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventAgent(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_opt(&self.type_, "type", v);
            accept_list(&self.role, "role", v);
            accept_opt(&self.who, "who", v);
            accept_opt(&self.alt_id, "altId", v);
            accept_opt(&self.name, "name", v);
            self.requestor.accept("requestor", None, v);
            accept_opt(&self.location, "location", v);
            accept_list(&self.policy, "policy", v);
            accept_opt(&self.media, "media", v);
            accept_opt(&self.network, "network", v);
            accept_list(&self.purpose_of_use, "purposeOfUse", v);
        });
    }
}

/// Builder for [`AuditEventAgent`].
#[derive(Debug, Default)]
pub struct AuditEventAgentBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Option<CodeableConcept>,
    role: Vec<CodeableConcept>,
    who: Option<Reference>,
    alt_id: Option<FhirString>,
    name: Option<FhirString>,
    requestor: Option<Boolean>,
    location: Option<Reference>,
    policy: Vec<Uri>,
    media: Option<Coding>,
    network: Option<AuditEventAgentNetwork>,
    purpose_of_use: Vec<CodeableConcept>,
}

impl AuditEventAgentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn role(mut self, role: CodeableConcept) -> Self {
        self.role.push(role);
        self
    }

    pub fn set_role(mut self, role: Vec<CodeableConcept>) -> Self {
        self.role = role;
        self
    }

    pub fn who(mut self, who: Reference) -> Self {
        self.who = Some(who);
        self
    }

    pub fn alt_id(mut self, alt_id: FhirString) -> Self {
        self.alt_id = Some(alt_id);
        self
    }

    pub fn name(mut self, name: FhirString) -> Self {
        self.name = Some(name);
        self
    }

    pub fn requestor(mut self, requestor: Boolean) -> Self {
        self.requestor = Some(requestor);
        self
    }

    pub fn location(mut self, location: Reference) -> Self {
        self.location = Some(location);
        self
    }

    pub fn policy(mut self, policy: Uri) -> Self {
        self.policy.push(policy);
        self
    }

    pub fn set_policy(mut self, policy: Vec<Uri>) -> Self {
        self.policy = policy;
        self
    }

    pub fn media(mut self, media: Coding) -> Self {
        self.media = Some(media);
        self
    }

    pub fn network(mut self, network: AuditEventAgentNetwork) -> Self {
        self.network = Some(network);
        self
    }

    pub fn purpose_of_use(mut self, purpose_of_use: CodeableConcept) -> Self {
        self.purpose_of_use.push(purpose_of_use);
        self
    }

    pub fn set_purpose_of_use(mut self, purpose_of_use: Vec<CodeableConcept>) -> Self {
        self.purpose_of_use = purpose_of_use;
        self
    }

    pub fn build(self) -> Result<AuditEventAgent> {
        let requestor = validation::required(self.requestor, "requestor")?;
        let agent = AuditEventAgent {
            hash: structural_hash(&(
                (&self.id, &self.extension, &self.modifier_extension),
                (
                    &self.type_,
                    &self.role,
                    &self.who,
                    &self.alt_id,
                    &self.name,
                    &requestor,
                    &self.location,
                    &self.policy,
                    &self.media,
                    &self.network,
                    &self.purpose_of_use,
                ),
            )),
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            type_: self.type_,
            role: self.role,
            who: self.who,
            alt_id: self.alt_id,
            name: self.name,
            requestor,
            location: self.location,
            policy: self.policy,
            media: self.media,
            network: self.network,
            purpose_of_use: self.purpose_of_use,
        };
        validation::require_value_or_children("AuditEvent.Agent", &agent)?;
        Ok(agent)
    }
}

/// Logical network location for application activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventAgentNetwork {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    address: Option<FhirString>,
    type_: Option<AuditEventAgentNetworkType>,
    hash: u64,
}

impl AuditEventAgentNetwork {
    pub fn builder() -> AuditEventAgentNetworkBuilder {
        AuditEventAgentNetworkBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn address(&self) -> Option<&FhirString> {
        self.address.as_ref()
    }

    pub fn type_(&self) -> Option<AuditEventAgentNetworkType> {
        self.type_
    }

    pub fn to_builder(&self) -> AuditEventAgentNetworkBuilder {
        AuditEventAgentNetworkBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            address: self.address.clone(),
            type_: self.type_,
        }
    }
}

impl Element for AuditEventAgentNetwork {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
            || self.address.is_some()
            || self.type_.is_some()
    }
}

impl BackboneElement for AuditEventAgentNetwork {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl std::hash::Hash for AuditEventAgentNetwork {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEventAgentNetwork {
    fn node(&self) -> Node<'_> {
        Node::AuditEventAgentNetwork(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventAgentNetwork(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_opt(&self.address, "address", v);
            accept_opt(&self.type_, "type", v);
        });
    }
}

/// Builder for [`AuditEventAgentNetwork`].
#[derive(Debug, Default)]
pub struct AuditEventAgentNetworkBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    address: Option<FhirString>,
    type_: Option<AuditEventAgentNetworkType>,
}

impl AuditEventAgentNetworkBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn address(mut self, address: FhirString) -> Self {
        self.address = Some(address);
        self
    }

    pub fn type_(mut self, type_: AuditEventAgentNetworkType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn build(self) -> Result<AuditEventAgentNetwork> {
        let network = AuditEventAgentNetwork {
            hash: structural_hash(&(
                (&self.id, &self.extension, &self.modifier_extension),
                (&self.address, &self.type_),
            )),
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            address: self.address,
            type_: self.type_,
        };
        validation::require_value_or_children("AuditEvent.Agent.Network", &network)?;
        Ok(network)
    }
}

/// The system that is reporting the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventSource {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    site: Option<FhirString>,
    observer: Reference,
    type_: Vec<Coding>,
    hash: u64,
}

impl AuditEventSource {
    pub fn builder() -> AuditEventSourceBuilder {
        AuditEventSourceBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn site(&self) -> Option<&FhirString> {
        self.site.as_ref()
    }

    /// Identifier of the source where the event was detected.
    pub fn observer(&self) -> &Reference {
        &self.observer
    }

    pub fn type_(&self) -> &[Coding] {
        &self.type_
    }

    pub fn to_builder(&self) -> AuditEventSourceBuilder {
        AuditEventSourceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            site: self.site.clone(),
            observer: Some(self.observer.clone()),
            type_: self.type_.clone(),
        }
    }
}

impl Element for AuditEventSource {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
            || self.site.is_some()
            || !self.type_.is_empty()
    }
}

impl BackboneElement for AuditEventSource {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl std::hash::Hash for AuditEventSource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEventSource {
    fn node(&self) -> Node<'_> {
        Node::AuditEventSource(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventSource(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_opt(&self.site, "site", v);
            self.observer.accept("observer", None, v);
            accept_list(&self.type_, "type", v);
        });
    }
}

/// Builder for [`AuditEventSource`].
#[derive(Debug, Default)]
pub struct AuditEventSourceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    site: Option<FhirString>,
    observer: Option<Reference>,
    type_: Vec<Coding>,
}

impl AuditEventSourceBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn site(mut self, site: FhirString) -> Self {
        self.site = Some(site);
        self
    }

    pub fn observer(mut self, observer: Reference) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn type_(mut self, type_: Coding) -> Self {
        self.type_.push(type_);
        self
    }

    pub fn set_type_(mut self, type_: Vec<Coding>) -> Self {
        self.type_ = type_;
        self
    }

    pub fn build(self) -> Result<AuditEventSource> {
        let observer = validation::required(self.observer, "observer")?;
        let source = AuditEventSource {
            hash: structural_hash(&(
                (&self.id, &self.extension, &self.modifier_extension),
                (&self.site, &observer, &self.type_),
            )),
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            site: self.site,
            observer,
            type_: self.type_,
        };
        validation::require_value_or_children("AuditEvent.Source", &source)?;
        Ok(source)
    }
}

/// A specific instance of data or objects that was accessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventEntity {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    what: Option<Reference>,
    type_: Option<Coding>,
    role: Option<Coding>,
    lifecycle: Option<Coding>,
    security_label: Vec<Coding>,
    name: Option<FhirString>,
    description: Option<FhirString>,
    query: Option<Base64Binary>,
    detail: Vec<AuditEventEntityDetail>,
    hash: u64,
}

impl AuditEventEntity {
    pub fn builder() -> AuditEventEntityBuilder {
        AuditEventEntityBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn what(&self) -> Option<&Reference> {
        self.what.as_ref()
    }

    pub fn type_(&self) -> Option<&Coding> {
        self.type_.as_ref()
    }

    pub fn role(&self) -> Option<&Coding> {
        self.role.as_ref()
    }

    pub fn lifecycle(&self) -> Option<&Coding> {
        self.lifecycle.as_ref()
    }

    pub fn security_label(&self) -> &[Coding] {
        &self.security_label
    }

    pub fn name(&self) -> Option<&FhirString> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&FhirString> {
        self.description.as_ref()
    }

    /// The query parameters for a query-type entity. Per sev-1, name and
    /// query are mutually exclusive.
    pub fn query(&self) -> Option<&Base64Binary> {
        self.query.as_ref()
    }

    pub fn detail(&self) -> &[AuditEventEntityDetail] {
        &self.detail
    }

    pub fn to_builder(&self) -> AuditEventEntityBuilder {
        AuditEventEntityBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            what: self.what.clone(),
            type_: self.type_.clone(),
            role: self.role.clone(),
            lifecycle: self.lifecycle.clone(),
            security_label: self.security_label.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            query: self.query.clone(),
            detail: self.detail.clone(),
        }
    }
}

impl Element for AuditEventEntity {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
            || self.what.is_some()
            || self.type_.is_some()
            || self.role.is_some()
            || self.lifecycle.is_some()
            || !self.security_label.is_empty()
            || self.name.is_some()
            || self.description.is_some()
            || self.query.is_some()
            || !self.detail.is_empty()
    }
}

impl BackboneElement for AuditEventEntity {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl std::hash::Hash for AuditEventEntity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEventEntity {
    fn node(&self) -> Node<'_> {
        Node::AuditEventEntity(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventEntity(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_opt(&self.what, "what", v);
            accept_opt(&self.type_, "type", v);
            accept_opt(&self.role, "role", v);
            accept_opt(&self.lifecycle, "lifecycle", v);
            accept_list(&self.security_label, "securityLabel", v);
            accept_opt(&self.name, "name", v);
            accept_opt(&self.description, "description", v);
            accept_opt(&self.query, "query", v);
            accept_list(&self.detail, "detail", v);
        });
    }
}

/// Builder for [`AuditEventEntity`].
#[derive(Debug, Default)]
pub struct AuditEventEntityBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    what: Option<Reference>,
    type_: Option<Coding>,
    role: Option<Coding>,
    lifecycle: Option<Coding>,
    security_label: Vec<Coding>,
    name: Option<FhirString>,
    description: Option<FhirString>,
    query: Option<Base64Binary>,
    detail: Vec<AuditEventEntityDetail>,
}

impl AuditEventEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn what(mut self, what: Reference) -> Self {
        self.what = Some(what);
        self
    }

    pub fn type_(mut self, type_: Coding) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn role(mut self, role: Coding) -> Self {
        self.role = Some(role);
        self
    }

    pub fn lifecycle(mut self, lifecycle: Coding) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn security_label(mut self, security_label: Coding) -> Self {
        self.security_label.push(security_label);
        self
    }

    pub fn set_security_label(mut self, security_label: Vec<Coding>) -> Self {
        self.security_label = security_label;
        self
    }

    pub fn name(mut self, name: FhirString) -> Self {
        self.name = Some(name);
        self
    }

    pub fn description(mut self, description: FhirString) -> Self {
        self.description = Some(description);
        self
    }

    pub fn query(mut self, query: Base64Binary) -> Self {
        self.query = Some(query);
        self
    }

    pub fn detail(mut self, detail: AuditEventEntityDetail) -> Self {
        self.detail.push(detail);
        self
    }

    pub fn set_detail(mut self, detail: Vec<AuditEventEntityDetail>) -> Self {
        self.detail = detail;
        self
    }

    pub fn build(self) -> Result<AuditEventEntity> {
        let entity = AuditEventEntity {
            hash: structural_hash(&(
                (&self.id, &self.extension, &self.modifier_extension),
                (
                    &self.what,
                    &self.type_,
                    &self.role,
                    &self.lifecycle,
                    &self.security_label,
                    &self.name,
                    &self.description,
                    &self.query,
                    &self.detail,
                ),
            )),
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            what: self.what,
            type_: self.type_,
            role: self.role,
            lifecycle: self.lifecycle,
            security_label: self.security_label,
            name: self.name,
            description: self.description,
            query: self.query,
            detail: self.detail,
        };
        validation::require_value_or_children("AuditEvent.Entity", &entity)?;
        Ok(entity)
    }
}

/// Tagged property describing an entity, with a string or binary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventEntityDetail {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: FhirString,
    value: AuditEventEntityDetailValue,
    hash: u64,
}

impl AuditEventEntityDetail {
    pub fn builder() -> AuditEventEntityDetailBuilder {
        AuditEventEntityDetailBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    /// Name of the property.
    pub fn type_(&self) -> &FhirString {
        &self.type_
    }

    /// Property value: exactly one of string or base64Binary.
    pub fn value(&self) -> &AuditEventEntityDetailValue {
        &self.value
    }

    pub fn to_builder(&self) -> AuditEventEntityDetailBuilder {
        AuditEventEntityDetailBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            type_: Some(self.type_.clone()),
            value: Some(self.value.clone()),
        }
    }
}

impl Element for AuditEventEntityDetail {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        // type and value are always present
        true
    }
}

impl BackboneElement for AuditEventEntityDetail {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl std::hash::Hash for AuditEventEntityDetail {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for AuditEventEntityDetail {
    fn node(&self) -> Node<'_> {
        Node::AuditEventEntityDetail(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventEntityDetail(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            self.type_.accept("type", None, v);
            self.value.accept("value", None, v);
        });
    }
}

/// The closed set of types a detail value may take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuditEventEntityDetailValue {
    String(FhirString),
    Base64Binary(Base64Binary),
}

impl Visitable for AuditEventEntityDetailValue {
    fn node(&self) -> Node<'_> {
        match self {
            AuditEventEntityDetailValue::String(value) => value.node(),
            AuditEventEntityDetailValue::Base64Binary(value) => value.node(),
        }
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        match self {
            AuditEventEntityDetailValue::String(value) => value.accept(name, index, visitor),
            AuditEventEntityDetailValue::Base64Binary(value) => value.accept(name, index, visitor),
        }
    }
}

impl From<FhirString> for AuditEventEntityDetailValue {
    fn from(value: FhirString) -> Self {
        AuditEventEntityDetailValue::String(value)
    }
}

impl From<Base64Binary> for AuditEventEntityDetailValue {
    fn from(value: Base64Binary) -> Self {
        AuditEventEntityDetailValue::Base64Binary(value)
    }
}

/// Builder for [`AuditEventEntityDetail`].
#[derive(Debug, Default)]
pub struct AuditEventEntityDetailBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Option<FhirString>,
    value: Option<AuditEventEntityDetailValue>,
}

impl AuditEventEntityDetailBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn type_(mut self, type_: FhirString) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn value(mut self, value: impl Into<AuditEventEntityDetailValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<AuditEventEntityDetail> {
        let type_ = validation::required(self.type_, "type")?;
        let value = validation::required(self.value, "value")?;
        Ok(AuditEventEntityDetail {
            hash: structural_hash(&(
                (&self.id, &self.extension, &self.modifier_extension),
                (&type_, &value),
            )),
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            type_,
            value,
        })
    }
}
