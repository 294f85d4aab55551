//! Complex datatypes
//!
//! General-purpose datatypes reused across resources. Like all elements
//! they are built through their paired builders, validate on `build()` and
//! are deeply immutable afterwards.

use crate::element::{structural_hash, Element};
use crate::error::Result;
use crate::types::code::{IdentifierUse, NarrativeStatus};
use crate::types::primitive::{
    Base64Binary, Boolean, Code, DateTime, Id, Instant, Integer, String as FhirString, Uri, Xhtml,
};
use crate::validation;
use crate::visitor::{accept_list, accept_opt, visit_node, Node, Visitable, Visitor};

/// Optional extra content that may be attached to any element, keyed by a
/// URI and carrying exactly one typed value (or nested extensions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    id: Option<String>,
    extension: Vec<Extension>,
    url: String,
    value: Option<ExtensionValue>,
    hash: u64,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    /// Source of the definition for the extension code.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> Option<&ExtensionValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

impl Element for Extension {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty() || self.value.is_some()
    }
}

impl std::hash::Hash for Extension {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Extension {
    fn node(&self) -> Node<'_> {
        Node::Extension(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Extension(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.value, "value", v);
        });
    }
}

/// Builder for [`Extension`].
#[derive(Debug, Default)]
pub struct ExtensionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    url: Option<String>,
    value: Option<ExtensionValue>,
}

impl ExtensionBuilder {
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: impl Into<ExtensionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Extension> {
        let url = validation::required(self.url, "url")?;
        validation::check_uri(&url, "Extension.url")?;
        let extension = Extension {
            hash: structural_hash(&(&self.id, &self.extension, &url, &self.value)),
            id: self.id,
            extension: self.extension,
            url,
            value: self.value,
        };
        validation::require_value_or_children("Extension", &extension)?;
        Ok(extension)
    }
}

/// The closed set of types an [`Extension`] value may take.
///
/// The full specification allows around fifty; the generator emits the
/// variants for the types present in this model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtensionValue {
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Code(Code),
    DateTime(DateTime),
    Instant(Instant),
    Integer(Integer),
    String(FhirString),
    Uri(Uri),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Identifier(Identifier),
    Period(Period),
    Reference(Reference),
}

impl Visitable for ExtensionValue {
    fn node(&self) -> Node<'_> {
        match self {
            ExtensionValue::Base64Binary(value) => value.node(),
            ExtensionValue::Boolean(value) => value.node(),
            ExtensionValue::Code(value) => value.node(),
            ExtensionValue::DateTime(value) => value.node(),
            ExtensionValue::Instant(value) => value.node(),
            ExtensionValue::Integer(value) => value.node(),
            ExtensionValue::String(value) => value.node(),
            ExtensionValue::Uri(value) => value.node(),
            ExtensionValue::CodeableConcept(value) => value.node(),
            ExtensionValue::Coding(value) => value.node(),
            ExtensionValue::Identifier(value) => value.node(),
            ExtensionValue::Period(value) => value.node(),
            ExtensionValue::Reference(value) => value.node(),
        }
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        match self {
            ExtensionValue::Base64Binary(value) => value.accept(name, index, visitor),
            ExtensionValue::Boolean(value) => value.accept(name, index, visitor),
            ExtensionValue::Code(value) => value.accept(name, index, visitor),
            ExtensionValue::DateTime(value) => value.accept(name, index, visitor),
            ExtensionValue::Instant(value) => value.accept(name, index, visitor),
            ExtensionValue::Integer(value) => value.accept(name, index, visitor),
            ExtensionValue::String(value) => value.accept(name, index, visitor),
            ExtensionValue::Uri(value) => value.accept(name, index, visitor),
            ExtensionValue::CodeableConcept(value) => value.accept(name, index, visitor),
            ExtensionValue::Coding(value) => value.accept(name, index, visitor),
            ExtensionValue::Identifier(value) => value.accept(name, index, visitor),
            ExtensionValue::Period(value) => value.accept(name, index, visitor),
            ExtensionValue::Reference(value) => value.accept(name, index, visitor),
        }
    }
}

impl From<Base64Binary> for ExtensionValue {
    fn from(value: Base64Binary) -> Self {
        ExtensionValue::Base64Binary(value)
    }
}

impl From<Boolean> for ExtensionValue {
    fn from(value: Boolean) -> Self {
        ExtensionValue::Boolean(value)
    }
}

impl From<Code> for ExtensionValue {
    fn from(value: Code) -> Self {
        ExtensionValue::Code(value)
    }
}

impl From<DateTime> for ExtensionValue {
    fn from(value: DateTime) -> Self {
        ExtensionValue::DateTime(value)
    }
}

impl From<Instant> for ExtensionValue {
    fn from(value: Instant) -> Self {
        ExtensionValue::Instant(value)
    }
}

impl From<Integer> for ExtensionValue {
    fn from(value: Integer) -> Self {
        ExtensionValue::Integer(value)
    }
}

impl From<FhirString> for ExtensionValue {
    fn from(value: FhirString) -> Self {
        ExtensionValue::String(value)
    }
}

impl From<Uri> for ExtensionValue {
    fn from(value: Uri) -> Self {
        ExtensionValue::Uri(value)
    }
}

impl From<CodeableConcept> for ExtensionValue {
    fn from(value: CodeableConcept) -> Self {
        ExtensionValue::CodeableConcept(value)
    }
}

impl From<Coding> for ExtensionValue {
    fn from(value: Coding) -> Self {
        ExtensionValue::Coding(value)
    }
}

impl From<Identifier> for ExtensionValue {
    fn from(value: Identifier) -> Self {
        ExtensionValue::Identifier(value)
    }
}

impl From<Period> for ExtensionValue {
    fn from(value: Period) -> Self {
        ExtensionValue::Period(value)
    }
}

impl From<Reference> for ExtensionValue {
    fn from(value: Reference) -> Self {
        ExtensionValue::Reference(value)
    }
}

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coding {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
    hash: u64,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn user_selected(&self) -> Option<&Boolean> {
        self.user_selected.as_ref()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }
}

impl Element for Coding {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }
}

impl std::hash::Hash for Coding {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Coding {
    fn node(&self) -> Node<'_> {
        Node::Coding(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Coding(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.system, "system", v);
            accept_opt(&self.version, "version", v);
            accept_opt(&self.code, "code", v);
            accept_opt(&self.display, "display", v);
            accept_opt(&self.user_selected, "userSelected", v);
        });
    }
}

/// Builder for [`Coding`].
#[derive(Debug, Default)]
pub struct CodingBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl CodingBuilder {
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

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn version(mut self, version: FhirString) -> Self {
        self.version = Some(version);
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn user_selected(mut self, user_selected: Boolean) -> Self {
        self.user_selected = Some(user_selected);
        self
    }

    pub fn build(self) -> Result<Coding> {
        let coding = Coding {
            hash: structural_hash(&(
                &self.id,
                &self.extension,
                &self.system,
                &self.version,
                &self.code,
                &self.display,
                &self.user_selected,
            )),
            id: self.id,
            extension: self.extension,
            system: self.system,
            version: self.version,
            code: self.code,
            display: self.display,
            user_selected: self.user_selected,
        };
        validation::require_value_or_children("Coding", &coding)?;
        Ok(coding)
    }
}

/// A concept that may be defined by one or more formal codings and/or free
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeableConcept {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<FhirString>,
    hash: u64,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        }
    }
}

impl Element for CodeableConcept {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || !self.coding.is_empty()
            || self.text.is_some()
    }
}

impl std::hash::Hash for CodeableConcept {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for CodeableConcept {
    fn node(&self) -> Node<'_> {
        Node::CodeableConcept(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::CodeableConcept(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.coding, "coding", v);
            accept_opt(&self.text, "text", v);
        });
    }
}

/// Builder for [`CodeableConcept`].
#[derive(Debug, Default)]
pub struct CodeableConceptBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, coding: Coding) -> Self {
        self.coding.push(coding);
        self
    }

    pub fn set_coding(mut self, coding: Vec<Coding>) -> Self {
        self.coding = coding;
        self
    }

    pub fn text(mut self, text: FhirString) -> Self {
        self.text = Some(text);
        self
    }

    pub fn build(self) -> Result<CodeableConcept> {
        let concept = CodeableConcept {
            hash: structural_hash(&(&self.id, &self.extension, &self.coding, &self.text)),
            id: self.id,
            extension: self.extension,
            coding: self.coding,
            text: self.text,
        };
        validation::require_value_or_children("CodeableConcept", &concept)?;
        Ok(concept)
    }
}

/// A time period defined by a start and end date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
    hash: u64,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl Element for Period {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || self.start.is_some()
            || self.end.is_some()
    }
}

impl std::hash::Hash for Period {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Period {
    fn node(&self) -> Node<'_> {
        Node::Period(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Period(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.start, "start", v);
            accept_opt(&self.end, "end", v);
        });
    }
}

/// Builder for [`Period`].
#[derive(Debug, Default)]
pub struct PeriodBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
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

    pub fn start(mut self, start: DateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn build(self) -> Result<Period> {
        let period = Period {
            hash: structural_hash(&(&self.id, &self.extension, &self.start, &self.end)),
            id: self.id,
            extension: self.extension,
            start: self.start,
            end: self.end,
        };
        validation::require_value_or_children("Period", &period)?;
        Ok(period)
    }
}

/// An identifier intended for computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    id: Option<String>,
    extension: Vec<Extension>,
    use_: Option<IdentifierUse>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
    hash: u64,
}

impl Identifier {
    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn use_(&self) -> Option<IdentifierUse> {
        self.use_
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_deref()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            use_: self.use_,
            type_: self.type_.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
            assigner: self.assigner.clone(),
        }
    }
}

impl Element for Identifier {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || self.use_.is_some()
            || self.type_.is_some()
            || self.system.is_some()
            || self.value.is_some()
            || self.period.is_some()
            || self.assigner.is_some()
    }
}

impl std::hash::Hash for Identifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Identifier {
    fn node(&self) -> Node<'_> {
        Node::Identifier(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Identifier(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.use_, "use", v);
            accept_opt(&self.type_, "type", v);
            accept_opt(&self.system, "system", v);
            accept_opt(&self.value, "value", v);
            accept_opt(&self.period, "period", v);
            accept_opt(&self.assigner, "assigner", v);
        });
    }
}

/// Builder for [`Identifier`].
#[derive(Debug, Default)]
pub struct IdentifierBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    use_: Option<IdentifierUse>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl IdentifierBuilder {
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

    pub fn use_(mut self, use_: IdentifierUse) -> Self {
        self.use_ = Some(use_);
        self
    }

    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn value(mut self, value: FhirString) -> Self {
        self.value = Some(value);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.assigner = Some(Box::new(assigner));
        self
    }

    pub fn build(self) -> Result<Identifier> {
        let identifier = Identifier {
            hash: structural_hash(&(
                &self.id,
                &self.extension,
                &self.use_,
                &self.type_,
                &self.system,
                &self.value,
                &self.period,
                &self.assigner,
            )),
            id: self.id,
            extension: self.extension,
            use_: self.use_,
            type_: self.type_,
            system: self.system,
            value: self.value,
            period: self.period,
            assigner: self.assigner,
        };
        validation::require_value_or_children("Identifier", &identifier)?;
        Ok(identifier)
    }
}

/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<FhirString>,
    type_: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<FhirString>,
    hash: u64,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    /// Literal reference: relative, internal or absolute URL.
    pub fn reference(&self) -> Option<&FhirString> {
        self.reference.as_ref()
    }

    pub fn type_(&self) -> Option<&Uri> {
        self.type_.as_ref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_deref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }
}

impl Element for Reference {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || self.reference.is_some()
            || self.type_.is_some()
            || self.identifier.is_some()
            || self.display.is_some()
    }
}

impl std::hash::Hash for Reference {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Reference {
    fn node(&self) -> Node<'_> {
        Node::Reference(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Reference(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.reference, "reference", v);
            accept_opt(&self.type_, "type", v);
            accept_opt(&self.identifier, "identifier", v);
            accept_opt(&self.display, "display", v);
        });
    }
}

/// Builder for [`Reference`].
#[derive(Debug, Default)]
pub struct ReferenceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<FhirString>,
    type_: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<FhirString>,
}

impl ReferenceBuilder {
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

    pub fn reference(mut self, reference: FhirString) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn type_(mut self, type_: Uri) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(Box::new(identifier));
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn build(self) -> Result<Reference> {
        let reference = Reference {
            hash: structural_hash(&(
                &self.id,
                &self.extension,
                &self.reference,
                &self.type_,
                &self.identifier,
                &self.display,
            )),
            id: self.id,
            extension: self.extension,
            reference: self.reference,
            type_: self.type_,
            identifier: self.identifier,
            display: self.display,
        };
        validation::require_value_or_children("Reference", &reference)?;
        Ok(reference)
    }
}

/// Metadata about a resource: version, provenance, tags and profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Uri>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
    hash: u64,
}

impl Meta {
    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn version_id(&self) -> Option<&Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&Instant> {
        self.last_updated.as_ref()
    }

    pub fn source(&self) -> Option<&Uri> {
        self.source.as_ref()
    }

    pub fn profile(&self) -> &[Uri] {
        &self.profile
    }

    pub fn security(&self) -> &[Coding] {
        &self.security
    }

    pub fn tag(&self) -> &[Coding] {
        &self.tag
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            source: self.source.clone(),
            profile: self.profile.clone(),
            security: self.security.clone(),
            tag: self.tag.clone(),
        }
    }
}

impl Element for Meta {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        self.id.is_some()
            || !self.extension.is_empty()
            || self.version_id.is_some()
            || self.last_updated.is_some()
            || self.source.is_some()
            || !self.profile.is_empty()
            || !self.security.is_empty()
            || !self.tag.is_empty()
    }
}

impl std::hash::Hash for Meta {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Meta {
    fn node(&self) -> Node<'_> {
        Node::Meta(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Meta(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_opt(&self.version_id, "versionId", v);
            accept_opt(&self.last_updated, "lastUpdated", v);
            accept_opt(&self.source, "source", v);
            accept_list(&self.profile, "profile", v);
            accept_list(&self.security, "security", v);
            accept_list(&self.tag, "tag", v);
        });
    }
}

/// Builder for [`Meta`].
#[derive(Debug, Default)]
pub struct MetaBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Uri>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl MetaBuilder {
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

    pub fn version_id(mut self, version_id: Id) -> Self {
        self.version_id = Some(version_id);
        self
    }

    pub fn last_updated(mut self, last_updated: Instant) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn source(mut self, source: Uri) -> Self {
        self.source = Some(source);
        self
    }

    pub fn profile(mut self, profile: Uri) -> Self {
        self.profile.push(profile);
        self
    }

    pub fn set_profile(mut self, profile: Vec<Uri>) -> Self {
        self.profile = profile;
        self
    }

    pub fn security(mut self, security: Coding) -> Self {
        self.security.push(security);
        self
    }

    pub fn set_security(mut self, security: Vec<Coding>) -> Self {
        self.security = security;
        self
    }

    pub fn tag(mut self, tag: Coding) -> Self {
        self.tag.push(tag);
        self
    }

    pub fn set_tag(mut self, tag: Vec<Coding>) -> Self {
        self.tag = tag;
        self
    }

    pub fn build(self) -> Result<Meta> {
        let meta = Meta {
            hash: structural_hash(&(
                &self.id,
                &self.extension,
                &self.version_id,
                &self.last_updated,
                &self.source,
                &self.profile,
                &self.security,
                &self.tag,
            )),
            id: self.id,
            extension: self.extension,
            version_id: self.version_id,
            last_updated: self.last_updated,
            source: self.source,
            profile: self.profile,
            security: self.security,
            tag: self.tag,
        };
        validation::require_value_or_children("Meta", &meta)?;
        Ok(meta)
    }
}

/// A human-readable summary of the resource, with a generation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    id: Option<String>,
    extension: Vec<Extension>,
    status: NarrativeStatus,
    div: Xhtml,
    hash: u64,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn status(&self) -> NarrativeStatus {
        self.status
    }

    pub fn div(&self) -> &Xhtml {
        &self.div
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            status: Some(self.status),
            div: Some(self.div.clone()),
        }
    }
}

impl Element for Narrative {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_children(&self) -> bool {
        // status and div are always present
        true
    }
}

impl std::hash::Hash for Narrative {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Narrative {
    fn node(&self) -> Node<'_> {
        Node::Narrative(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Narrative(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            self.status.accept("status", None, v);
            self.div.accept("div", None, v);
        });
    }
}

/// Builder for [`Narrative`].
#[derive(Debug, Default)]
pub struct NarrativeBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    status: Option<NarrativeStatus>,
    div: Option<Xhtml>,
}

impl NarrativeBuilder {
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

    pub fn status(mut self, status: NarrativeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn div(mut self, div: Xhtml) -> Self {
        self.div = Some(div);
        self
    }

    pub fn build(self) -> Result<Narrative> {
        let status = validation::required(self.status, "status")?;
        let div = validation::required(self.div, "div")?;
        Ok(Narrative {
            hash: structural_hash(&(&self.id, &self.extension, &status, &div)),
            id: self.id,
            extension: self.extension,
            status,
            div,
        })
    }
}
