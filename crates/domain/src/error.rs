// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building criteria or running a filter cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A filter criterion could not be interpreted.
    InvalidCriteria {
        /// The criterion that was rejected (e.g. `start_date`).
        field: &'static str,
        /// Description of the problem.
        reason: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCriteria { field, reason } => {
                write!(f, "Invalid criteria for '{field}': {reason}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
