use thiserror::Error;

/// A payload that cannot be mapped into points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Response is missing the '{key}' key")]
    MissingKey { key: &'static str },

    #[error("Expected '{key}' to be {expected}, found {found}")]
    UnexpectedType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Malformed value '{value}' for field '{field}', expected {expected}")]
    MalformedTimestamp {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
