// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for dataset loading and statistics queries.

use refstat::{StatisticsReport, compute_statistics};
use refstat_domain::{
    CategoryFilter, Dimension, FilterCriteria, MatchDataset, RefereeStatRow, parse_bound,
};
use refstat_ingest::{LoadedDataset, load_dataset_from_str};
use time::Date;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::export::{export_file_name, leaderboard_csv};
use crate::request_response::{
    CsvExport, DEFAULT_TOP_N, DatasetInfoResponse, DatasetLoadResponse, RejectedRowInfo,
    StatisticsRequest, StatisticsResponse,
};
use crate::timeline::daily_totals;

/// Interprets a categorical request value.
///
/// The value is a comma-separated list. An item may itself contain commas
/// when it names a value in `known`; the longest such match wins. Any
/// sentinel in the list, or a list with nothing but blanks, lifts the
/// restriction.
fn parse_category(value: Option<&str>, known: &[String]) -> CategoryFilter {
    let Some(raw) = value else {
        return CategoryFilter::Any;
    };

    let pieces: Vec<&str> = raw.split(',').collect();
    let mut values: Vec<String> = Vec::new();
    let mut start: usize = 0;

    while start < pieces.len() {
        let end: usize = (start + 2..=pieces.len())
            .rev()
            .find(|&end| {
                let candidate: String = pieces[start..end].join(",");
                known.iter().any(|k| k == candidate.trim())
            })
            .unwrap_or(start + 1);

        let joined: String = pieces[start..end].join(",");
        let item: &str = joined.trim();
        if !item.is_empty() {
            values.push(item.to_string());
        }
        start = end;
    }

    CategoryFilter::one_of(values)
}

/// Builds the restriction for one dimension, matching against the dataset's
/// own values.
fn category_filter(
    dataset: &MatchDataset,
    dimension: Dimension,
    value: Option<&str>,
) -> CategoryFilter {
    let known: Vec<String> = dataset.distinct_values(dimension).unwrap_or_default();
    parse_category(value, &known)
}

/// Resolves one period bound, falling back to the dataset span.
fn resolve_bound(
    field: &'static str,
    value: Option<&str>,
    fallback: Option<Date>,
) -> Result<Date, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Ok(parse_bound(field, v)?),
        None => fallback.ok_or(ApiError::NoData),
    }
}

/// Builds filter criteria from a statistics request.
///
/// # Arguments
///
/// * `dataset` - The loaded dataset, used for default date bounds
/// * `request` - The statistics request
///
/// # Errors
///
/// Returns an error if:
/// - A date bound is not a date
/// - A date bound is missing and the dataset is empty
pub fn build_criteria(
    dataset: &MatchDataset,
    request: &StatisticsRequest,
) -> Result<FilterCriteria, ApiError> {
    let span: Option<(Date, Date)> = dataset.date_span();

    let start_date: Date = resolve_bound(
        "start_date",
        request.start_date.as_deref(),
        span.map(|(first, _)| first),
    )?;
    let end_date: Date = resolve_bound(
        "end_date",
        request.end_date.as_deref(),
        span.map(|(_, last)| last),
    )?;

    let mut criteria: FilterCriteria = FilterCriteria::new(start_date, end_date);
    for dimension in Dimension::ALL {
        let value: Option<&str> = match dimension {
            Dimension::Sport => request.sport.as_deref(),
            Dimension::District => request.district.as_deref(),
            Dimension::Series => request.series.as_deref(),
        };
        criteria = criteria.with_category(dimension, category_filter(dataset, dimension, value));
    }
    criteria.min_matches = request.min_matches;

    Ok(criteria)
}

/// Resolves the number of leaderboard rows to return.
fn resolve_top_n(request: &StatisticsRequest) -> Result<usize, ApiError> {
    match request.top_n {
        None => Ok(DEFAULT_TOP_N),
        Some(0) => Err(ApiError::InvalidInput {
            field: String::from("top_n"),
            message: String::from("must be at least 1"),
        }),
        Some(n) => Ok(n),
    }
}

/// Runs one filter cycle and keeps the top of the leaderboard.
fn run_report(
    dataset: &MatchDataset,
    request: &StatisticsRequest,
) -> Result<(StatisticsReport, Vec<RefereeStatRow>), ApiError> {
    let criteria: FilterCriteria = build_criteria(dataset, request)?;
    let top_n: usize = resolve_top_n(request)?;

    let report: StatisticsReport = compute_statistics(dataset, &criteria)?;

    debug!(
        start_date = %criteria.start_date,
        end_date = %criteria.end_date,
        filtered = report.filtered.len(),
        ranked = report.leaderboard.len(),
        below_threshold = report.below_threshold(),
        "Computed referee statistics"
    );

    let rows: Vec<RefereeStatRow> = report.leaderboard.iter().take(top_n).cloned().collect();
    Ok((report, rows))
}

/// Computes referee statistics for a request.
///
/// # Arguments
///
/// * `dataset` - The loaded dataset
/// * `request` - Period, categorical restrictions, threshold and row limit
///
/// # Returns
///
/// * `Ok(StatisticsResponse)`, possibly with no rows
/// * `Err(ApiError)` if the request is unusable
///
/// # Errors
///
/// Returns an error if:
/// - A date bound is not a date
/// - The period is reversed
/// - `top_n` is zero
/// - A date bound is missing and no records are loaded
pub fn get_statistics(
    dataset: &MatchDataset,
    request: &StatisticsRequest,
) -> Result<StatisticsResponse, ApiError> {
    let (report, rows) = run_report(dataset, request)?;

    Ok(StatisticsResponse {
        period_start: report.criteria.start_date.to_string(),
        period_end: report.criteria.end_date.to_string(),
        timeline: daily_totals(&report.filtered),
        total_ranked: report.leaderboard.len(),
        summary: report.summary,
        rows,
        dropped_rows: report.dropped_rows,
    })
}

/// Describes the loaded dataset for populating filter selectors.
#[must_use]
pub fn dataset_info(dataset: &MatchDataset) -> DatasetInfoResponse {
    let span: Option<(Date, Date)> = dataset.date_span();

    DatasetInfoResponse {
        record_count: dataset.len(),
        dropped_rows: dataset.dropped_rows(),
        first_date: span.map(|(first, _)| first.to_string()),
        last_date: span.map(|(_, last)| last.to_string()),
        sports: dataset.distinct_values(Dimension::Sport),
        districts: dataset.distinct_values(Dimension::District),
        series: dataset.distinct_values(Dimension::Series),
    }
}

/// Parses an uploaded CSV document into a new dataset.
///
/// The caller replaces its current dataset with the returned one.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row is unreadable or a
/// required column is missing.
pub fn load_dataset(csv_content: &str) -> Result<(MatchDataset, DatasetLoadResponse), ApiError> {
    let loaded: LoadedDataset = load_dataset_from_str(csv_content)?;

    info!(
        records = loaded.dataset.len(),
        dropped_rows = loaded.dataset.dropped_rows(),
        rejected_rows = loaded.rejected_rows.len(),
        "Replacing dataset from upload"
    );

    let response: DatasetLoadResponse = DatasetLoadResponse {
        dataset: dataset_info(&loaded.dataset),
        rejected_rows: loaded
            .rejected_rows
            .into_iter()
            .map(|r| RejectedRowInfo {
                row_number: r.row_number,
                reason: r.reason,
            })
            .collect(),
    };

    Ok((loaded.dataset, response))
}

/// Renders the displayed leaderboard as a CSV download.
///
/// # Errors
///
/// Returns the same errors as [`get_statistics`], or `ApiError::Internal`
/// if the CSV cannot be written.
pub fn export_statistics_csv(
    dataset: &MatchDataset,
    request: &StatisticsRequest,
) -> Result<CsvExport, ApiError> {
    let (report, rows) = run_report(dataset, request)?;

    Ok(CsvExport {
        file_name: export_file_name(report.criteria.start_date, report.criteria.end_date),
        content: leaderboard_csv(&rows)?,
    })
}
