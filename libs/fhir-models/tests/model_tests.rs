use stannum_models::resource::audit_event::{
    AuditEventAgent, AuditEventAgentNetwork, AuditEventEntity, AuditEventEntityDetail,
    AuditEventEntityDetailValue, AuditEventSource,
};
use stannum_models::resource::{AuditEvent, Resource, Schedule};
use stannum_models::types::code::{AuditEventAction, NarrativeStatus};
use stannum_models::types::String as FhirString;
use stannum_models::types::{
    Base64Binary, Boolean, Code, Coding, Extension, Instant, Narrative, Reference, Uri, Xhtml,
};
use stannum_models::{CollectingVisitor, ConstraintLevel, Error, Node, Visitable, Visitor};

fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
    use std::hash::Hasher;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::hash::Hash::hash(value, &mut hasher);
    hasher.finish()
}

fn dicom_coding(code: &str) -> Coding {
    Coding::builder()
        .system(Uri::of("http://dicom.nema.org/resources/ontology/DCM").unwrap())
        .code(Code::of(code).unwrap())
        .build()
        .unwrap()
}

fn observer() -> Reference {
    Reference::builder()
        .reference(FhirString::of("Device/audit-logger").unwrap())
        .build()
        .unwrap()
}

fn requestor_agent() -> AuditEventAgent {
    AuditEventAgent::builder()
        .requestor(Boolean::of(true))
        .build()
        .unwrap()
}

fn sample_audit_event() -> AuditEvent {
    AuditEvent::builder()
        .type_(dicom_coding("110100"))
        .recorded(Instant::parse("2024-05-04T10:00:00Z").unwrap())
        .agent(requestor_agent())
        .source(AuditEventSource::builder().observer(observer()).build().unwrap())
        .build()
        .unwrap()
}

fn sample_schedule() -> Schedule {
    Schedule::builder()
        .actor(
            Reference::builder()
                .reference(FhirString::of("Practitioner/123").unwrap())
                .build()
                .unwrap(),
        )
        .comment(FhirString::of("weekday mornings only").unwrap())
        .build()
        .unwrap()
}

// --- construction-time validation ---

#[test]
fn audit_event_builds_with_only_required_fields() {
    let event = sample_audit_event();

    assert_eq!(event.agent().len(), 1);
    assert_eq!(event.agent()[0].requestor().value(), Some(true));
    assert_eq!(
        event.type_().code().and_then(|c| c.value()),
        Some("110100")
    );
    assert!(event.action().is_none());
    assert!(event.entity().is_empty());
}

#[test]
fn missing_required_field_names_the_field() {
    let err = AuditEvent::builder()
        .recorded(Instant::parse("2024-05-04T10:00:00Z").unwrap())
        .agent(requestor_agent())
        .source(AuditEventSource::builder().observer(observer()).build().unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(ref field) if field == "type"));

    let err = AuditEventAgent::builder()
        .name(FhirString::of("without requestor flag").unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(ref field) if field == "requestor"));

    let err = Narrative::builder()
        .status(NarrativeStatus::Generated)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(ref field) if field == "div"));
}

#[test]
fn empty_required_list_names_the_field() {
    // the concrete scenario: everything present except any agent
    let err = AuditEvent::builder()
        .type_(dicom_coding("110100"))
        .recorded(Instant::parse("2024-05-04T10:00:00Z").unwrap())
        .source(AuditEventSource::builder().observer(observer()).build().unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::EmptyList(ref field) if field == "agent"));

    let err = Schedule::builder().build().unwrap_err();
    assert!(matches!(err, Error::EmptyList(ref field) if field == "actor"));

    // one element satisfies the lower bound
    assert_eq!(sample_schedule().actor().len(), 1);
}

#[test]
fn resource_id_grammar_is_enforced() {
    let err = AuditEvent::builder()
        .id("not a valid id!")
        .type_(dicom_coding("110100"))
        .recorded(Instant::parse("2024-05-04T10:00:00Z").unwrap())
        .agent(requestor_agent())
        .source(AuditEventSource::builder().observer(observer()).build().unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "AuditEvent.id"));

    let event = sample_audit_event().to_builder().id("example-01.A").build().unwrap();
    assert_eq!(event.id(), Some("example-01.A"));
}

#[test]
fn choice_value_is_exactly_one_of_the_allowed_types() {
    let detail = AuditEventEntityDetail::builder()
        .type_(FhirString::of("requested uri").unwrap())
        .value(FhirString::of("/fhir/Patient?name=smith").unwrap())
        .build()
        .unwrap();
    match detail.value() {
        AuditEventEntityDetailValue::String(value) => {
            assert_eq!(value.value(), Some("/fhir/Patient?name=smith"));
        }
        other => panic!("expected string value, got {other:?}"),
    }

    let detail = AuditEventEntityDetail::builder()
        .type_(FhirString::of("query digest").unwrap())
        .value(Base64Binary::of(vec![0xde, 0xad, 0xbe, 0xef]))
        .build()
        .unwrap();
    assert!(matches!(
        detail.value(),
        AuditEventEntityDetailValue::Base64Binary(_)
    ));

    // the value itself is required
    let err = AuditEventEntityDetail::builder()
        .type_(FhirString::of("incomplete").unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(ref field) if field == "value"));
}

#[test]
fn empty_backbone_element_is_rejected() {
    let err = AuditEventAgentNetwork::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingValueOrChildren(_)));

    // any single field makes it valid
    let network = AuditEventAgentNetwork::builder()
        .address(FhirString::of("10.0.0.1").unwrap())
        .build()
        .unwrap();
    assert!(network.type_().is_none());

    // an extension alone also counts
    let network = AuditEventAgentNetwork::builder()
        .extension(
            Extension::builder()
                .url("http://example.org/fhir/StructureDefinition/zone")
                .value(FhirString::of("dmz").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(network.address().is_none());
}

#[test]
fn empty_primitive_is_rejected() {
    assert!(matches!(
        Boolean::builder().build().unwrap_err(),
        Error::MissingValueOrChildren(_)
    ));
    assert!(matches!(
        Coding::builder().build().unwrap_err(),
        Error::MissingValueOrChildren(_)
    ));

    // a valueless primitive carrying an extension is legal
    let data_absent = FhirString::builder()
        .extension(
            Extension::builder()
                .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
                .value(Code::of("unknown").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(data_absent.value(), None);
    assert_eq!(data_absent.extension().len(), 1);
}

#[test]
fn extension_requires_url_and_content() {
    let err = Extension::builder()
        .value(Boolean::of(true))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(ref field) if field == "url"));

    // a bare url with neither value nor nested extensions is an empty leaf
    let err = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/flag")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingValueOrChildren(_)));

    let nested = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/outer")
        .extension(
            Extension::builder()
                .url("inner")
                .value(Boolean::of(false))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(nested.value().is_none());
}

#[test]
fn primitive_grammars_are_enforced() {
    assert!(Code::of("active").is_ok());
    assert!(Code::of("two  spaces").is_err());
    assert!(Uri::of("http://example.org/fhir").is_ok());
    assert!(Uri::of("has space").is_err());
    assert!(stannum_models::types::Id::of("ok-1.2").is_ok());
    assert!(stannum_models::types::Id::of("no_underscores").is_err());
    assert!(stannum_models::types::DateTime::of("2024-05").is_ok());
    assert!(stannum_models::types::DateTime::of("2024-05-04T10:00:00").is_err());
    assert!(FhirString::of("   ").is_err());
    assert!(Instant::parse("2024-05-04T10:00:00Z").is_ok());
    assert!(Instant::parse("2024-05-04").is_err());
}

// --- evolve and structural equality ---

#[test]
fn builder_round_trip_is_identity() {
    let event = sample_audit_event();
    let rebuilt = event.to_builder().build().unwrap();
    assert_eq!(rebuilt, event);
    assert_eq!(hash_of(&rebuilt), hash_of(&event));

    let schedule = sample_schedule();
    let rebuilt = schedule.to_builder().build().unwrap();
    assert_eq!(rebuilt, schedule);
    assert_eq!(hash_of(&rebuilt), hash_of(&schedule));
}

#[test]
fn evolve_produces_an_independent_value() {
    let schedule = sample_schedule();
    let evolved = schedule
        .to_builder()
        .comment(FhirString::of("weekends only").unwrap())
        .build()
        .unwrap();

    assert_ne!(evolved, schedule);
    assert_eq!(schedule.comment().unwrap().value(), Some("weekday mornings only"));
    assert_eq!(evolved.comment().unwrap().value(), Some("weekends only"));
    // unchanged substructure is preserved
    assert_eq!(evolved.actor(), schedule.actor());
}

#[test]
fn structural_equality_covers_every_field() {
    let first = sample_audit_event();
    let second = sample_audit_event();
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));

    // a deeply nested difference breaks equality
    let detail = AuditEventEntityDetail::builder()
        .type_(FhirString::of("query").unwrap())
        .value(FhirString::of("name=smith").unwrap())
        .build()
        .unwrap();
    let with_entity = first
        .to_builder()
        .entity(AuditEventEntity::builder().detail(detail).build().unwrap())
        .build()
        .unwrap();
    assert_ne!(with_entity, second);
    assert_ne!(hash_of(&with_entity), hash_of(&second));

    let changed_action = second.to_builder().action(AuditEventAction::Read).build().unwrap();
    assert_ne!(changed_action, first);
}

#[test]
fn list_setters_append_and_replace() {
    let builder = AuditEvent::builder()
        .type_(dicom_coding("110100"))
        .recorded(Instant::parse("2024-05-04T10:00:00Z").unwrap())
        .source(AuditEventSource::builder().observer(observer()).build().unwrap())
        .agent(requestor_agent())
        .agent(
            AuditEventAgent::builder()
                .requestor(Boolean::of(false))
                .build()
                .unwrap(),
        );
    let event = builder.build().unwrap();
    assert_eq!(event.agent().len(), 2);

    // the replace form discards what was appended
    let replaced = event
        .to_builder()
        .set_agent(vec![requestor_agent()])
        .build()
        .unwrap();
    assert_eq!(replaced.agent().len(), 1);
}

// --- traversal ---

#[derive(Default)]
struct TraceVisitor {
    visits: Vec<(String, Option<usize>, &'static str)>,
    starts: usize,
    ends: usize,
    posts: usize,
    skip_children_of: Option<&'static str>,
    skip_subtree_of: Option<&'static str>,
}

impl<'a> Visitor<'a> for TraceVisitor {
    fn pre_visit(&mut self, node: Node<'a>) -> bool {
        self.skip_subtree_of != Some(node.type_name())
    }

    fn visit_start(&mut self, name: &str, index: Option<usize>, node: Node<'a>) {
        self.starts += 1;
        self.visits.push((name.to_string(), index, node.type_name()));
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, node: Node<'a>) -> bool {
        self.skip_children_of != Some(node.type_name())
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: Node<'a>) {
        self.ends += 1;
    }

    fn post_visit(&mut self, _node: Node<'a>) {
        self.posts += 1;
    }
}

#[test]
fn traversal_visits_every_populated_field_in_declaration_order() {
    let event = sample_audit_event();
    let mut visitor = TraceVisitor::default();
    event.accept("AuditEvent", None, &mut visitor);

    let expected: Vec<(String, Option<usize>, &'static str)> = vec![
        ("AuditEvent".to_string(), None, "AuditEvent"),
        ("type".to_string(), None, "Coding"),
        ("system".to_string(), None, "uri"),
        ("code".to_string(), None, "code"),
        ("recorded".to_string(), None, "instant"),
        ("agent".to_string(), Some(0), "AuditEvent.Agent"),
        ("requestor".to_string(), None, "boolean"),
        ("source".to_string(), None, "AuditEvent.Source"),
        ("observer".to_string(), None, "Reference"),
        ("reference".to_string(), None, "string"),
    ];
    assert_eq!(visitor.visits, expected);
    assert_eq!(visitor.starts, visitor.ends);
    assert_eq!(visitor.starts, visitor.posts);
}

#[test]
fn repeated_fields_are_visited_with_positions() {
    let event = sample_audit_event()
        .to_builder()
        .subtype(dicom_coding("110120"))
        .subtype(dicom_coding("110121"))
        .subtype(dicom_coding("110122"))
        .build()
        .unwrap();

    let mut visitor = TraceVisitor::default();
    event.accept("AuditEvent", None, &mut visitor);

    let subtype_indices: Vec<Option<usize>> = visitor
        .visits
        .iter()
        .filter(|(name, _, _)| name == "subtype")
        .map(|(_, index, _)| *index)
        .collect();
    assert_eq!(subtype_indices, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn returning_false_from_visit_suppresses_children_only() {
    let event = sample_audit_event();

    let mut visitor = TraceVisitor {
        skip_children_of: Some("AuditEvent.Source"),
        ..TraceVisitor::default()
    };
    event.accept("AuditEvent", None, &mut visitor);

    // the source node itself is announced, its observer is not
    assert!(visitor.visits.iter().any(|(name, _, _)| name == "source"));
    assert!(!visitor.visits.iter().any(|(name, _, _)| name == "observer"));
    // end hooks still fired for the suppressed node
    assert_eq!(visitor.starts, visitor.ends);
    assert_eq!(visitor.starts, visitor.posts);
}

#[test]
fn returning_false_from_pre_visit_skips_the_whole_subtree() {
    let event = sample_audit_event();

    let mut visitor = TraceVisitor {
        skip_subtree_of: Some("AuditEvent.Source"),
        ..TraceVisitor::default()
    };
    event.accept("AuditEvent", None, &mut visitor);

    // neither the source node nor any of its hooks fire
    assert!(!visitor.visits.iter().any(|(name, _, _)| name == "source"));
    assert_eq!(visitor.starts, visitor.ends);
    assert_eq!(visitor.starts, visitor.posts);
}

#[derive(Default)]
struct PathVisitor {
    stack: Vec<String>,
    paths: Vec<String>,
}

impl<'a> Visitor<'a> for PathVisitor {
    fn visit_start(&mut self, name: &str, index: Option<usize>, _node: Node<'a>) {
        let segment = match index {
            Some(position) => format!("{name}[{position}]"),
            None => name.to_string(),
        };
        self.stack.push(segment);
        self.paths.push(self.stack.join("."));
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: Node<'a>) {
        self.stack.pop();
    }
}

#[test]
fn paths_can_be_reconstructed_from_names_and_indices() {
    let detail = AuditEventEntityDetail::builder()
        .type_(FhirString::of("query").unwrap())
        .value(FhirString::of("name=smith").unwrap())
        .build()
        .unwrap();
    let event = sample_audit_event()
        .to_builder()
        .entity(
            AuditEventEntity::builder()
                .name(FhirString::of("search").unwrap())
                .build()
                .unwrap(),
        )
        .entity(AuditEventEntity::builder().detail(detail).build().unwrap())
        .build()
        .unwrap();

    let mut visitor = PathVisitor::default();
    event.accept("AuditEvent", None, &mut visitor);

    assert!(visitor.paths.contains(&"AuditEvent.entity[0].name".to_string()));
    assert!(visitor
        .paths
        .contains(&"AuditEvent.entity[1].detail[0].value".to_string()));
    assert!(visitor.stack.is_empty());
}

#[test]
fn collecting_visitor_collects_pre_order() {
    let event = sample_audit_event();
    let mut collector = CollectingVisitor::new();
    event.accept("AuditEvent", None, &mut collector);

    let nodes = collector.into_result();
    assert_eq!(nodes.len(), 10);
    assert!(nodes[0].is_resource());
    assert_eq!(nodes[0].type_name(), "AuditEvent");
    assert!(!nodes[1].is_resource());

    let codings = nodes
        .iter()
        .filter(|node| matches!(node, Node::Coding(_)))
        .count();
    assert_eq!(codings, 1);
}

// --- resource union and metadata ---

#[test]
fn contained_resources_are_traversed() {
    let schedule = sample_schedule();
    let event = sample_audit_event()
        .to_builder()
        .contained(schedule)
        .build()
        .unwrap();

    assert_eq!(event.contained().len(), 1);
    assert_eq!(event.contained()[0].type_name(), "Schedule");

    let mut visitor = TraceVisitor::default();
    event.accept("AuditEvent", None, &mut visitor);
    assert!(visitor
        .visits
        .iter()
        .any(|(name, index, type_name)| name == "contained"
            && *index == Some(0)
            && *type_name == "Schedule"));
}

#[test]
fn resource_union_exposes_common_accessors() {
    let resource: Resource = sample_schedule().to_builder().id("sched-1").build().unwrap().into();
    assert_eq!(resource.id(), Some("sched-1"));
    assert_eq!(resource.type_name(), "Schedule");
    assert!(resource.meta().is_none());
}

#[test]
fn declared_constraints_are_carried_as_metadata() {
    let sev_1 = AuditEvent::CONSTRAINTS
        .iter()
        .find(|constraint| constraint.id == "sev-1")
        .expect("sev-1 must be declared");
    assert_eq!(sev_1.level, ConstraintLevel::Rule);
    assert_eq!(sev_1.location, "AuditEvent.entity");
    assert_eq!(sev_1.expression, "name.empty() or query.empty()");

    let warnings = AuditEvent::CONSTRAINTS
        .iter()
        .filter(|constraint| constraint.level == ConstraintLevel::Warning)
        .count();
    assert_eq!(warnings, AuditEvent::CONSTRAINTS.len() - 1);

    assert!(Schedule::CONSTRAINTS.is_empty());
}

#[test]
fn narrative_and_text_round_trip() {
    let narrative = Narrative::builder()
        .status(NarrativeStatus::Generated)
        .div(Xhtml::of("<div xmlns=\"http://www.w3.org/1999/xhtml\">recorded</div>").unwrap())
        .build()
        .unwrap();
    let event = sample_audit_event().to_builder().text(narrative.clone()).build().unwrap();

    assert_eq!(event.text(), Some(&narrative));
    assert_eq!(event.text().unwrap().status(), NarrativeStatus::Generated);

    let rebuilt = event.to_builder().build().unwrap();
    assert_eq!(rebuilt, event);
}
