// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use refstat::CoreError;
use refstat_domain::DomainError;
use refstat_ingest::IngestError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A filter criterion could not be interpreted.
    InvalidCriteria {
        /// The criterion that was rejected.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The uploaded CSV could not be used.
    InvalidCsvFormat {
        /// The reason the CSV is invalid.
        reason: String,
    },
    /// No match records are loaded.
    NoData,
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCriteria { field, message } => {
                write!(f, "Invalid criteria for '{field}': {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::NoData => write!(f, "No match records are loaded"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCriteria { field, reason } => Self::InvalidCriteria {
                field: field.to_string(),
                message: reason,
            },
            DomainError::DateParseError { .. } => Self::InvalidInput {
                field: String::from("date"),
                message: err.to_string(),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCriteria(domain) => Self::from(domain),
            CoreError::InvalidDateRange { .. } => Self::DomainRuleViolation {
                rule: String::from("date_range"),
                message: err.to_string(),
            },
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Io { .. } => Self::Internal {
                message: err.to_string(),
            },
            IngestError::Csv(source) => Self::InvalidCsvFormat {
                reason: source.to_string(),
            },
            IngestError::MissingColumns { .. } => Self::InvalidCsvFormat {
                reason: err.to_string(),
            },
        }
    }
}
