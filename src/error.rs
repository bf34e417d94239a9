use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed coordinate '{input}': {issue}")]
    MalformedCoordinate {
        input: String,
        issue: CoordinateIssue,
    },

    #[error("Malformed location pair '{input}': {reason}")]
    MalformedLocationPair { input: String, reason: String },

    #[error("Malformed row: expected {expected} fields, found {found}")]
    MalformedRow { expected: usize, found: usize },

    #[error("Row has an empty site identifier")]
    EmptyIdentifier,

    #[error("Duplicate site identifier '{0}'")]
    DuplicateIdentifier(String),

    #[error("Invalid body radius: {0} km (must be finite and greater than zero)")]
    InvalidRadius(f64),
}

/// What exactly went wrong inside a coordinate string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateIssue {
    #[error("not a decimal or degrees/minutes/seconds value")]
    UnrecognisedFormat,

    #[error("expected degrees, minutes and optional seconds, found {count} fields")]
    UnexpectedFieldCount { count: usize },

    #[error("field {position} ('{field}') is not a number")]
    InvalidField { field: String, position: usize },

    #[error("{component} is out of range, got {value}")]
    OutOfRange {
        component: &'static str,
        value: f64,
    },

    #[error("a leading minus sign cannot be combined with a compass direction")]
    ConflictingSign,

    #[error("value is not finite")]
    NonFinite,
}

impl SiteError {
    pub(crate) fn coordinate(input: &str, issue: CoordinateIssue) -> Self {
        SiteError::MalformedCoordinate {
            input: input.to_string(),
            issue,
        }
    }

    pub(crate) fn location_pair(input: &str, reason: impl Into<String>) -> Self {
        SiteError::MalformedLocationPair {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
