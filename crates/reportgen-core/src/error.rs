//! Report error types.
//!
//! These errors represent defects in the loaded records. They are raised at
//! the point of detection and never retried, since the data is static.

use std::fmt;

use thiserror::Error;

/// The kind of record a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Student,
    Assessment,
    Question,
    Option,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Student => write!(f, "student"),
            RecordKind::Assessment => write!(f, "assessment"),
            RecordKind::Question => write!(f, "question"),
            RecordKind::Option => write!(f, "option"),
        }
    }
}

/// Errors that can occur while generating a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A referenced id has no matching record.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// A completion timestamp does not match `DD/MM/YYYY HH:MM:SS`.
    #[error("malformed completion date '{value}': {reason}")]
    MalformedDate { value: String, reason: String },
}

impl ReportError {
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        ReportError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn malformed_date(value: impl Into<String>, reason: impl fmt::Display) -> Self {
        ReportError::MalformedDate {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if this error is a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound { .. })
    }
}
