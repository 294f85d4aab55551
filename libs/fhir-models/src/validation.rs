//! Build-time validation support
//!
//! Pure checks invoked from `build()` implementations, in schema declaration
//! order. A failed check aborts construction, so an invalid object graph can
//! never be observed by calling code.

use crate::element::Element;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Maximum accepted character count for string values (1 MiB of characters).
const MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Maximum accepted length for logical ids.
const MAX_ID_LENGTH: usize = 64;

/// Unwrap a required field, or fail naming it.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::MissingField(field.to_string()))
}

/// Pass through a repeating field whose cardinality lower bound is 1,
/// or fail naming it.
pub fn non_empty<T>(values: Vec<T>, field: &str) -> Result<Vec<T>> {
    if values.is_empty() {
        return Err(Error::EmptyList(field.to_string()));
    }
    Ok(values)
}

/// ele-1: every element must carry a primitive value or populated children.
///
/// Called after all fields of an element are assembled; `type_name` is the
/// schema name used in the failure message.
pub fn require_value_or_children<T: Element>(type_name: &str, element: &T) -> Result<()> {
    if element.has_value() || element.has_children() {
        Ok(())
    } else {
        Err(Error::MissingValueOrChildren(type_name.to_string()))
    }
}

/// FHIR `string`: at least one non-whitespace character, no whitespace other
/// than space, tab, CR and LF, no other control characters below U+0020.
pub fn check_string(value: &str, field: &str) -> Result<()> {
    let mut non_whitespace = 0usize;
    let mut length = 0usize;
    for ch in value.chars() {
        length += 1;
        if ch.is_whitespace() {
            if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                return Err(invalid(field, "whitespace other than space, tab, CR and LF"));
            }
        } else {
            if (ch as u32) < 0x20 {
                return Err(invalid(field, "control character below U+0020"));
            }
            non_whitespace += 1;
        }
    }
    if length > MAX_STRING_LENGTH {
        return Err(invalid(field, "value longer than 1048576 characters"));
    }
    if non_whitespace == 0 {
        return Err(invalid(field, "must contain at least one non-whitespace character"));
    }
    Ok(())
}

/// FHIR `code`: no leading or trailing whitespace, and no whitespace in the
/// contents other than single spaces.
pub fn check_code(value: &str, field: &str) -> Result<()> {
    check_string(value, field)?;
    if value.starts_with(' ') || value.ends_with(' ') {
        return Err(invalid(field, "must not have leading or trailing whitespace"));
    }
    let mut previous_is_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(invalid(field, "must not contain whitespace other than single spaces"));
            }
            if previous_is_space {
                return Err(invalid(field, "must not contain consecutive spaces"));
            }
            previous_is_space = true;
        } else {
            previous_is_space = false;
        }
    }
    Ok(())
}

/// FHIR `id`: letters, numerals, `-` and `.`, 1 to 64 characters.
pub fn check_id(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(invalid(field, "must not be longer than 64 characters"));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
    {
        return Err(invalid(field, "must match [A-Za-z0-9\\-\\.]{1,64}"));
    }
    Ok(())
}

/// FHIR `uri`: non-empty, no whitespace.
pub fn check_uri(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if value.contains(char::is_whitespace) {
        return Err(invalid(field, "must not contain whitespace"));
    }
    Ok(())
}

/// FHIR `dateTime` lexical form: partial precision is allowed, a timezone is
/// required once a time of day is present.
pub fn check_date_time(value: &str, field: &str) -> Result<()> {
    static DATE_TIME_RE: OnceLock<Regex> = OnceLock::new();
    let re = DATE_TIME_RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
        )
        .expect("dateTime regex must compile")
    });
    if re.is_match(value) {
        Ok(())
    } else {
        Err(invalid(field, "is not a valid FHIR dateTime"))
    }
}

fn invalid(field: &str, reason: &str) -> Error {
    Error::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_names_the_field() {
        let err = required(None::<u8>, "type").unwrap_err();
        assert!(err.to_string().contains("'type'"));
        assert_eq!(required(Some(1u8), "type").unwrap(), 1);
    }

    #[test]
    fn test_non_empty_names_the_field() {
        let err = non_empty(Vec::<u8>::new(), "agent").unwrap_err();
        assert!(err.to_string().contains("'agent'"));
        assert_eq!(non_empty(vec![1u8], "agent").unwrap(), vec![1]);
    }

    #[test]
    fn test_check_string() {
        assert!(check_string("hello world", "string").is_ok());
        assert!(check_string("line\nbreak\ttab", "string").is_ok());
        assert!(check_string("", "string").is_err());
        assert!(check_string("   ", "string").is_err());
        assert!(check_string("bell\u{0007}", "string").is_err());
        assert!(check_string("nbsp\u{00a0}here", "string").is_err());
    }

    #[test]
    fn test_check_code() {
        assert!(check_code("active", "code").is_ok());
        assert!(check_code("two words", "code").is_ok());
        assert!(check_code(" leading", "code").is_err());
        assert!(check_code("trailing ", "code").is_err());
        assert!(check_code("double  space", "code").is_err());
        assert!(check_code("tab\tinside", "code").is_err());
    }

    #[test]
    fn test_check_id() {
        assert!(check_id("abc-123.DEF", "id").is_ok());
        assert!(check_id("", "id").is_err());
        assert!(check_id("bad id", "id").is_err());
        assert!(check_id("under_score", "id").is_err());
        assert!(check_id(&"a".repeat(64), "id").is_ok());
        assert!(check_id(&"a".repeat(65), "id").is_err());
    }

    #[test]
    fn test_check_uri() {
        assert!(check_uri("http://hl7.org/fhir/ValueSet/audit-event-type", "uri").is_ok());
        assert!(check_uri("urn:ietf:bcp:47", "uri").is_ok());
        assert!(check_uri("", "uri").is_err());
        assert!(check_uri("has space", "uri").is_err());
    }

    #[test]
    fn test_check_date_time() {
        assert!(check_date_time("2024", "dateTime").is_ok());
        assert!(check_date_time("2024-05", "dateTime").is_ok());
        assert!(check_date_time("2024-05-04", "dateTime").is_ok());
        assert!(check_date_time("2024-05-04T10:30:00Z", "dateTime").is_ok());
        assert!(check_date_time("2024-05-04T10:30:00.123+02:00", "dateTime").is_ok());
        // time of day requires a timezone
        assert!(check_date_time("2024-05-04T10:30:00", "dateTime").is_err());
        assert!(check_date_time("2024-13-01", "dateTime").is_err());
        assert!(check_date_time("24-05-04", "dateTime").is_err());
        assert!(check_date_time("not a date", "dateTime").is_err());
    }
}
