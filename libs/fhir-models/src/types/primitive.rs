//! Primitive element wrappers
//!
//! Every FHIR primitive is an element: besides its scalar value it can
//! carry an element id and extensions, and it may legally have no value at
//! all as long as it has children (the data-absent pattern). The scalar is
//! therefore always `Option`, and the ele-1 rule is enforced in `build()`.

use crate::element::{structural_hash, Element};
use crate::error::{Error, Result};
use crate::types::complex::Extension;
use crate::validation;
use crate::visitor::{accept_list, visit_node, Node, Visitable, Visitor};
use chrono::{DateTime as ChronoDateTime, FixedOffset};

/// Value of "true" or "false".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boolean {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<bool>,
    hash: u64,
}

impl Boolean {
    pub fn builder() -> BooleanBuilder {
        BooleanBuilder::default()
    }

    pub fn of(value: bool) -> Self {
        Self::builder()
            .value(value)
            .build()
            .expect("boolean with a value always builds")
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub fn to_builder(&self) -> BooleanBuilder {
        BooleanBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
        }
    }
}

impl Element for Boolean {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Boolean {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Boolean {
    fn node(&self) -> Node<'_> {
        Node::Boolean(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Boolean(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Boolean`].
#[derive(Debug, Default)]
pub struct BooleanBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<bool>,
}

impl BooleanBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Result<Boolean> {
        let boolean = Boolean {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("boolean", &boolean)?;
        Ok(boolean)
    }
}

/// A whole number in the range -2^31 to 2^31 - 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<i32>,
    hash: u64,
}

impl Integer {
    pub fn builder() -> IntegerBuilder {
        IntegerBuilder::default()
    }

    pub fn of(value: i32) -> Self {
        Self::builder()
            .value(value)
            .build()
            .expect("integer with a value always builds")
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn to_builder(&self) -> IntegerBuilder {
        IntegerBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
        }
    }
}

impl Element for Integer {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Integer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Integer {
    fn node(&self) -> Node<'_> {
        Node::Integer(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Integer(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Integer`].
#[derive(Debug, Default)]
pub struct IntegerBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<i32>,
}

impl IntegerBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Result<Integer> {
        let integer = Integer {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("integer", &integer)?;
        Ok(integer)
    }
}

/// A sequence of Unicode characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct String {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
    hash: u64,
}

impl String {
    pub fn builder() -> StringBuilder {
        StringBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> StringBuilder {
        StringBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for String {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for String {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for String {
    fn node(&self) -> Node<'_> {
        Node::String(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::String(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`String`].
#[derive(Debug, Default)]
pub struct StringBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
}

impl StringBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<String> {
        if let Some(value) = &self.value {
            validation::check_string(value, "string")?;
        }
        let string = String {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("string", &string)?;
        Ok(string)
    }
}

/// A string restricted to the code grammar: no leading or trailing
/// whitespace, single internal spaces only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
    hash: u64,
}

impl Code {
    pub fn builder() -> CodeBuilder {
        CodeBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> CodeBuilder {
        CodeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for Code {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Code {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Code {
    fn node(&self) -> Node<'_> {
        Node::Code(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Code(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Code`].
#[derive(Debug, Default)]
pub struct CodeBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
}

impl CodeBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Code> {
        if let Some(value) = &self.value {
            validation::check_code(value, "code")?;
        }
        let code = Code {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("code", &code)?;
        Ok(code)
    }
}

/// Any combination of letters, numerals, `-` and `.`, up to 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
    hash: u64,
}

impl Id {
    pub fn builder() -> IdBuilder {
        IdBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> IdBuilder {
        IdBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for Id {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Id {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Id {
    fn node(&self) -> Node<'_> {
        Node::Id(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Id(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Id`].
#[derive(Debug, Default)]
pub struct IdBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
}

impl IdBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Id> {
        if let Some(value) = &self.value {
            validation::check_id(value, "id")?;
        }
        let id_value = Id {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("id", &id_value)?;
        Ok(id_value)
    }
}

/// String of characters used to identify a name or a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
    hash: u64,
}

impl Uri {
    pub fn builder() -> UriBuilder {
        UriBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> UriBuilder {
        UriBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for Uri {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Uri {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Uri {
    fn node(&self) -> Node<'_> {
        Node::Uri(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Uri(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Uri`].
#[derive(Debug, Default)]
pub struct UriBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
}

impl UriBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Uri> {
        if let Some(value) = &self.value {
            validation::check_uri(value, "uri")?;
        }
        let uri = Uri {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("uri", &uri)?;
        Ok(uri)
    }
}

/// An instant in time, known at least to the second, with a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instant {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<ChronoDateTime<FixedOffset>>,
    hash: u64,
}

impl Instant {
    pub fn builder() -> InstantBuilder {
        InstantBuilder::default()
    }

    pub fn of(value: ChronoDateTime<FixedOffset>) -> Self {
        Self::builder()
            .value(value)
            .build()
            .expect("instant with a value always builds")
    }

    /// Parse an RFC 3339 / FHIR instant lexical form.
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = ChronoDateTime::parse_from_rfc3339(value).map_err(|err| Error::InvalidValue {
            field: "instant".to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self::of(parsed))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<ChronoDateTime<FixedOffset>> {
        self.value
    }

    pub fn to_builder(&self) -> InstantBuilder {
        InstantBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
        }
    }
}

impl Element for Instant {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Instant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Instant {
    fn node(&self) -> Node<'_> {
        Node::Instant(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Instant(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Instant`].
#[derive(Debug, Default)]
pub struct InstantBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<ChronoDateTime<FixedOffset>>,
}

impl InstantBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: ChronoDateTime<FixedOffset>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Result<Instant> {
        let instant = Instant {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("instant", &instant)?;
        Ok(instant)
    }
}

/// A date, date-time or partial date as used in human communication.
///
/// Partial precision makes the lexical form the value space; the value is
/// stored as its validated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
    hash: u64,
}

impl DateTime {
    pub fn builder() -> DateTimeBuilder {
        DateTimeBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> DateTimeBuilder {
        DateTimeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for DateTime {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for DateTime {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for DateTime {
    fn node(&self) -> Node<'_> {
        Node::DateTime(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::DateTime(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`DateTime`].
#[derive(Debug, Default)]
pub struct DateTimeBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<std::string::String>,
}

impl DateTimeBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DateTime> {
        if let Some(value) = &self.value {
            validation::check_date_time(value, "dateTime")?;
        }
        let date_time = DateTime {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("dateTime", &date_time)?;
        Ok(date_time)
    }
}

/// A stream of bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Binary {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<Vec<u8>>,
    hash: u64,
}

impl Base64Binary {
    pub fn builder() -> Base64BinaryBuilder {
        Base64BinaryBuilder::default()
    }

    pub fn of(value: impl Into<Vec<u8>>) -> Self {
        Self::builder()
            .value(value)
            .build()
            .expect("base64Binary with a value always builds")
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn to_builder(&self) -> Base64BinaryBuilder {
        Base64BinaryBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Element for Base64Binary {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::hash::Hash for Base64Binary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Base64Binary {
    fn node(&self) -> Node<'_> {
        Node::Base64Binary(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Base64Binary(self), name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
        });
    }
}

/// Builder for [`Base64Binary`].
#[derive(Debug, Default)]
pub struct Base64BinaryBuilder {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<Vec<u8>>,
}

impl Base64BinaryBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
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

    pub fn value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Base64Binary> {
        let base64_binary = Base64Binary {
            hash: structural_hash(&(&self.id, &self.extension, &self.value)),
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::require_value_or_children("base64Binary", &base64_binary)?;
        Ok(base64_binary)
    }
}

/// XHTML narrative content. Unlike other elements, xhtml carries no
/// extensions and its value is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xhtml {
    id: Option<std::string::String>,
    value: std::string::String,
    hash: u64,
}

impl Xhtml {
    pub fn builder() -> XhtmlBuilder {
        XhtmlBuilder::default()
    }

    pub fn of(value: impl Into<std::string::String>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_builder(&self) -> XhtmlBuilder {
        XhtmlBuilder {
            id: self.id.clone(),
            value: Some(self.value.clone()),
        }
    }
}

impl Element for Xhtml {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &[]
    }

    fn has_value(&self) -> bool {
        true
    }
}

impl std::hash::Hash for Xhtml {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Visitable for Xhtml {
    fn node(&self) -> Node<'_> {
        Node::Xhtml(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::Xhtml(self), name, index, visitor, |_| {});
    }
}

/// Builder for [`Xhtml`].
#[derive(Debug, Default)]
pub struct XhtmlBuilder {
    id: Option<std::string::String>,
    value: Option<std::string::String>,
}

impl XhtmlBuilder {
    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<std::string::String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Xhtml> {
        let value = validation::required(self.value, "value")?;
        validation::check_string(&value, "xhtml")?;
        Ok(Xhtml {
            hash: structural_hash(&(&self.id, &value)),
            id: self.id,
            value,
        })
    }
}
