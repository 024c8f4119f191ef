// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use refstat_domain::{PeriodSummary, RefereeStatRow};

/// Number of leaderboard rows returned when a request does not say.
pub const DEFAULT_TOP_N: usize = 20;

/// API request for referee statistics over a period.
///
/// Every field is optional. Missing date bounds default to the earliest and
/// latest loaded record. Categorical values accept a single value, a
/// comma-separated list, or the `Alla`/`All` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatisticsRequest {
    /// First day of the period (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last day of the period (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// Sport restriction.
    pub sport: Option<String>,
    /// District restriction.
    pub district: Option<String>,
    /// Series restriction.
    pub series: Option<String>,
    /// Minimum summed matches to appear in the leaderboard.
    pub min_matches: Option<u32>,
    /// Maximum number of leaderboard rows to return.
    pub top_n: Option<usize>,
}

/// Matches played on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DailyTotal {
    /// The day (`YYYY-MM-DD`).
    pub date: String,
    /// Sum of matches over the day's filtered records.
    pub matches: u64,
}

/// API response for referee statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatisticsResponse {
    /// First day of the period.
    pub period_start: String,
    /// Last day of the period.
    pub period_end: String,
    /// Headline figures over every filtered record.
    pub summary: PeriodSummary,
    /// The top of the leaderboard.
    pub rows: Vec<RefereeStatRow>,
    /// Number of referees in the full leaderboard (after `min_matches`).
    pub total_ranked: usize,
    /// Matches per day over the filtered records, oldest first.
    pub timeline: Vec<DailyTotal>,
    /// Source rows dropped at load time for an unparseable date.
    pub dropped_rows: usize,
}

/// API response describing the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetInfoResponse {
    /// Number of loaded records.
    pub record_count: usize,
    /// Source rows dropped for an unparseable date.
    pub dropped_rows: usize,
    /// Earliest record date, if any.
    pub first_date: Option<String>,
    /// Latest record date, if any.
    pub last_date: Option<String>,
    /// Distinct sports, or `None` when the dataset has no sport column.
    pub sports: Option<Vec<String>>,
    /// Distinct districts, or `None` when the dataset has no district column.
    pub districts: Option<Vec<String>>,
    /// Distinct series, or `None` when the dataset has no series column.
    pub series: Option<Vec<String>>,
}

/// A row excluded while loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RejectedRowInfo {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// Why the row was excluded.
    pub reason: String,
}

/// API response for a dataset upload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetLoadResponse {
    /// The newly loaded dataset.
    pub dataset: DatasetInfoResponse,
    /// Rows excluded for an unusable referee or match count.
    pub rejected_rows: Vec<RejectedRowInfo>,
}

/// A rendered leaderboard export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested download file name.
    pub file_name: String,
    /// The CSV document.
    pub content: String,
}
