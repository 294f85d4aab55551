//! Coded values with required bindings
//!
//! Codes whose value set binding is `required` are closed enums: an
//! out-of-set code is unrepresentable. Each carries the wire code in
//! `as_str` and parses through `FromStr`.

use crate::error::{Error, Result};
use crate::visitor::{visit_node, Node, Visitable, Visitor};
use std::fmt;
use std::str::FromStr;

fn unknown_code(field: &str, value: &str) -> Error {
    Error::InvalidValue {
        field: field.to_string(),
        reason: format!("unknown code '{value}'"),
    }
}

/// Indicator for type of action performed during the event that generated
/// the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditEventAction {
    /// C
    Create,
    /// R
    Read,
    /// U
    Update,
    /// D
    Delete,
    /// E
    Execute,
}

impl AuditEventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventAction::Create => "C",
            AuditEventAction::Read => "R",
            AuditEventAction::Update => "U",
            AuditEventAction::Delete => "D",
            AuditEventAction::Execute => "E",
        }
    }
}

impl fmt::Display for AuditEventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEventAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(AuditEventAction::Create),
            "R" => Ok(AuditEventAction::Read),
            "U" => Ok(AuditEventAction::Update),
            "D" => Ok(AuditEventAction::Delete),
            "E" => Ok(AuditEventAction::Execute),
            _ => Err(unknown_code("AuditEventAction", s)),
        }
    }
}

impl Visitable for AuditEventAction {
    fn node(&self) -> Node<'_> {
        Node::AuditEventAction(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventAction(self), name, index, visitor, |_| {});
    }
}

/// Indicates whether the event succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditEventOutcome {
    /// 0
    Success,
    /// 4
    MinorFailure,
    /// 8
    SeriousFailure,
    /// 12
    MajorFailure,
}

impl AuditEventOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventOutcome::Success => "0",
            AuditEventOutcome::MinorFailure => "4",
            AuditEventOutcome::SeriousFailure => "8",
            AuditEventOutcome::MajorFailure => "12",
        }
    }
}

impl fmt::Display for AuditEventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEventOutcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0" => Ok(AuditEventOutcome::Success),
            "4" => Ok(AuditEventOutcome::MinorFailure),
            "8" => Ok(AuditEventOutcome::SeriousFailure),
            "12" => Ok(AuditEventOutcome::MajorFailure),
            _ => Err(unknown_code("AuditEventOutcome", s)),
        }
    }
}

impl Visitable for AuditEventOutcome {
    fn node(&self) -> Node<'_> {
        Node::AuditEventOutcome(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::AuditEventOutcome(self), name, index, visitor, |_| {});
    }
}

/// The type of network access point that originated the audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditEventAgentNetworkType {
    /// 1
    MachineName,
    /// 2
    IpAddress,
    /// 3
    TelephoneNumber,
    /// 4
    EmailAddress,
    /// 5
    Uri,
}

impl AuditEventAgentNetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventAgentNetworkType::MachineName => "1",
            AuditEventAgentNetworkType::IpAddress => "2",
            AuditEventAgentNetworkType::TelephoneNumber => "3",
            AuditEventAgentNetworkType::EmailAddress => "4",
            AuditEventAgentNetworkType::Uri => "5",
        }
    }
}

impl fmt::Display for AuditEventAgentNetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEventAgentNetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(AuditEventAgentNetworkType::MachineName),
            "2" => Ok(AuditEventAgentNetworkType::IpAddress),
            "3" => Ok(AuditEventAgentNetworkType::TelephoneNumber),
            "4" => Ok(AuditEventAgentNetworkType::EmailAddress),
            "5" => Ok(AuditEventAgentNetworkType::Uri),
            _ => Err(unknown_code("AuditEventAgentNetworkType", s)),
        }
    }
}

impl Visitable for AuditEventAgentNetworkType {
    fn node(&self) -> Node<'_> {
        Node::AuditEventAgentNetworkType(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(
            Node::AuditEventAgentNetworkType(self),
            name,
            index,
            visitor,
            |_| {},
        );
    }
}

/// The status of a narrative's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

impl NarrativeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeStatus::Generated => "generated",
            NarrativeStatus::Extensions => "extensions",
            NarrativeStatus::Additional => "additional",
            NarrativeStatus::Empty => "empty",
        }
    }
}

impl fmt::Display for NarrativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NarrativeStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "generated" => Ok(NarrativeStatus::Generated),
            "extensions" => Ok(NarrativeStatus::Extensions),
            "additional" => Ok(NarrativeStatus::Additional),
            "empty" => Ok(NarrativeStatus::Empty),
            _ => Err(unknown_code("NarrativeStatus", s)),
        }
    }
}

impl Visitable for NarrativeStatus {
    fn node(&self) -> Node<'_> {
        Node::NarrativeStatus(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::NarrativeStatus(self), name, index, visitor, |_| {});
    }
}

/// The purpose of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

impl IdentifierUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierUse::Usual => "usual",
            IdentifierUse::Official => "official",
            IdentifierUse::Temp => "temp",
            IdentifierUse::Secondary => "secondary",
            IdentifierUse::Old => "old",
        }
    }
}

impl fmt::Display for IdentifierUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierUse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "usual" => Ok(IdentifierUse::Usual),
            "official" => Ok(IdentifierUse::Official),
            "temp" => Ok(IdentifierUse::Temp),
            "secondary" => Ok(IdentifierUse::Secondary),
            "old" => Ok(IdentifierUse::Old),
            _ => Err(unknown_code("IdentifierUse", s)),
        }
    }
}

impl Visitable for IdentifierUse {
    fn node(&self) -> Node<'_> {
        Node::IdentifierUse(self)
    }

    fn accept<'a>(&'a self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor<'a>) {
        visit_node(Node::IdentifierUse(self), name, index, visitor, |_| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_codes() {
        for action in [
            AuditEventAction::Create,
            AuditEventAction::Read,
            AuditEventAction::Update,
            AuditEventAction::Delete,
            AuditEventAction::Execute,
        ] {
            assert_eq!(action.as_str().parse::<AuditEventAction>().unwrap(), action);
        }
        assert_eq!("12".parse::<AuditEventOutcome>().unwrap(), AuditEventOutcome::MajorFailure);
        assert_eq!("5".parse::<AuditEventAgentNetworkType>().unwrap(), AuditEventAgentNetworkType::Uri);
        assert_eq!("generated".parse::<NarrativeStatus>().unwrap(), NarrativeStatus::Generated);
        assert_eq!("official".parse::<IdentifierUse>().unwrap(), IdentifierUse::Official);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = "X".parse::<AuditEventAction>().unwrap_err();
        assert!(err.to_string().contains("unknown code 'X'"));
        assert!("1".parse::<AuditEventOutcome>().is_err());
        assert!("READ".parse::<AuditEventAction>().is_err());
    }
}
