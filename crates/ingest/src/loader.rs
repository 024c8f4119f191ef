// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV loading for match records.
//!
//! Loading never fails because of an individual row. A row ends up in one of
//! three places:
//! - the dataset, when every field parses
//! - the dropped-row count, when its date is empty or unparseable
//! - the rejected-row list, when the referee or match count is unusable or
//!   the CSV row itself is malformed

use csv::StringRecord;
use refstat_domain::{Dimension, MatchDataset, MatchRecord, Referee, parse_match_date};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::columns::{ColumnMap, MATCHES_COLUMN, REFEREE_COLUMN};
use crate::error::IngestError;

/// A source row that was excluded for a reason other than its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// Why the row was excluded.
    pub reason: String,
}

/// The outcome of loading a CSV source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDataset {
    /// The records, with the count of rows dropped for their date.
    pub dataset: MatchDataset,
    /// Rows excluded for an unusable referee or match count.
    pub rejected_rows: Vec<RejectedRow>,
}

enum RowOutcome {
    Record(MatchRecord),
    UnparseableDate,
    Rejected(String),
}

fn cell<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn parse_row(record: &StringRecord, columns: &ColumnMap) -> RowOutcome {
    let Ok(date) = parse_match_date(cell(record, columns.date())) else {
        return RowOutcome::UnparseableDate;
    };

    let referee: &str = cell(record, columns.referee());
    if referee.trim().is_empty() {
        return RowOutcome::Rejected(format!(
            "{REFEREE_COLUMN}: required field is missing or empty"
        ));
    }

    let raw_count: &str = cell(record, columns.matches()).trim();
    let Ok(match_count) = raw_count.parse::<u32>() else {
        return RowOutcome::Rejected(format!(
            "{MATCHES_COLUMN}: invalid match count '{raw_count}'"
        ));
    };

    let mut parsed: MatchRecord = MatchRecord::new(date, Referee::new(referee), match_count);
    for dimension in Dimension::ALL {
        if let Some(idx) = columns.category(dimension) {
            let value: &str = cell(record, idx).trim();
            if !value.is_empty() {
                parsed = parsed.with_category(dimension, value);
            }
        }
    }

    RowOutcome::Record(parsed)
}

/// Loads match records from any CSV reader.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or a required column
/// is missing.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<LoadedDataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: StringRecord = reader.headers()?.clone();
    let columns: ColumnMap = ColumnMap::from_headers(&headers)?;

    let mut records: Vec<MatchRecord> = Vec::new();
    let mut dropped_rows: usize = 0;
    let mut rejected_rows: Vec<RejectedRow> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!(row_number, error = %e, "Rejected malformed CSV row");
                rejected_rows.push(RejectedRow {
                    row_number,
                    reason: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &columns) {
            RowOutcome::Record(parsed) => records.push(parsed),
            RowOutcome::UnparseableDate => dropped_rows += 1,
            RowOutcome::Rejected(reason) => {
                debug!(row_number, %reason, "Rejected CSV row");
                rejected_rows.push(RejectedRow { row_number, reason });
            }
        }
    }

    info!(
        records = records.len(),
        dropped_rows,
        rejected_rows = rejected_rows.len(),
        "Loaded match records"
    );

    Ok(LoadedDataset {
        dataset: MatchDataset::new(records, columns.dimensions(), dropped_rows),
        rejected_rows,
    })
}

/// Loads match records from CSV text.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or a required column
/// is missing.
pub fn load_dataset_from_str(csv_content: &str) -> Result<LoadedDataset, IngestError> {
    load_dataset_from_reader(csv_content.as_bytes())
}

/// Loads match records from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the header row cannot be
/// read, or a required column is missing.
pub fn load_dataset_from_path(path: impl AsRef<Path>) -> Result<LoadedDataset, IngestError> {
    let path: &Path = path.as_ref();
    info!(path = %path.display(), "Loading match records");

    let file: std::fs::File = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_dataset_from_reader(std::io::BufReader::new(file))
}
