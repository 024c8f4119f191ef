// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use refstat_domain::DomainError;
use time::Date;

/// Errors that can occur during a statistics run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The criteria could not be interpreted.
    InvalidCriteria(DomainError),
    /// The period start lies after the period end.
    InvalidDateRange {
        /// The requested first day of the period.
        start_date: Date,
        /// The requested last day of the period.
        end_date: Date,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCriteria(err) => write!(f, "{err}"),
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => write!(
                f,
                "Start date {start_date} must be on or before end date {end_date}"
            ),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCriteria(err) => Some(err),
            Self::InvalidDateRange { .. } => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidCriteria(err)
    }
}
