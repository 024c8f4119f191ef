// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod report;

#[cfg(test)]
mod tests;

use refstat_domain::{
    FilterCriteria, MatchDataset, MatchRecord, PeriodSummary, RefereeStatRow, aggregate,
    summarize,
};

// Re-export public types and functions
pub use error::CoreError;
pub use report::StatisticsReport;

/// Validates that the period is not reversed.
///
/// The filter engine itself accepts reversed bounds (and selects nothing);
/// this is the check interactive callers run before a statistics cycle.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateRange` if `start_date` is after `end_date`.
pub fn validate_date_range(criteria: &FilterCriteria) -> Result<(), CoreError> {
    if criteria.start_date > criteria.end_date {
        return Err(CoreError::InvalidDateRange {
            start_date: criteria.start_date,
            end_date: criteria.end_date,
        });
    }
    Ok(())
}

/// Runs one filter cycle over a dataset.
///
/// The dataset is filtered once; the leaderboard and the summary are both
/// computed from that same filtered sequence.
///
/// # Arguments
///
/// * `dataset` - The loaded records
/// * `criteria` - Period, categorical restrictions and leaderboard threshold
///
/// # Returns
///
/// * `Ok(StatisticsReport)`, possibly empty
/// * `Err(CoreError)` if the criteria are unusable
///
/// # Errors
///
/// Returns an error if the period is reversed.
pub fn compute_statistics(
    dataset: &MatchDataset,
    criteria: &FilterCriteria,
) -> Result<StatisticsReport, CoreError> {
    validate_date_range(criteria)?;

    let filtered: Vec<MatchRecord> = dataset.filter(criteria);
    let leaderboard: Vec<RefereeStatRow> = aggregate(&filtered, criteria.min_matches);
    let summary: PeriodSummary = summarize(&filtered);

    Ok(StatisticsReport {
        criteria: criteria.clone(),
        filtered,
        leaderboard,
        summary,
        dropped_rows: dataset.dropped_rows(),
    })
}

/// Parses textual bounds and runs one filter cycle.
///
/// # Errors
///
/// Returns `CoreError::InvalidCriteria` if a bound is not a date, or
/// `CoreError::InvalidDateRange` if the period is reversed.
pub fn compute_statistics_for_period(
    dataset: &MatchDataset,
    start_date: &str,
    end_date: &str,
    min_matches: Option<u32>,
) -> Result<StatisticsReport, CoreError> {
    let mut criteria: FilterCriteria = FilterCriteria::from_date_strings(start_date, end_date)?;
    criteria.min_matches = min_matches;
    compute_statistics(dataset, &criteria)
}
