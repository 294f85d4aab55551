//! Error types for FHIR models

use thiserror::Error;

/// Errors raised while building model values.
///
/// Every variant is a construction-time failure: `build()` either returns a
/// fully valid, immutable value or one of these. A partially built value is
/// never observable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required field: '{0}'")]
    MissingField(String),

    #[error("Required repeating field is empty: '{0}'")]
    EmptyList(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The ele-1 rule: all FHIR elements must have a @value or children.
    #[error("{0} must have a value or children")]
    MissingValueOrChildren(String),
}

pub type Result<T> = std::result::Result<T, Error>;
