// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leaderboard export as CSV.

use refstat_domain::RefereeStatRow;
use time::Date;

use crate::error::ApiError;

/// Column headers of the exported leaderboard.
pub const EXPORT_HEADERS: [&str; 3] = ["Rank", "Domare", "Matcher"];

/// Returns the download file name for a period's leaderboard.
#[must_use]
pub fn export_file_name(start_date: Date, end_date: Date) -> String {
    format!("domarstatistik_{start_date}_till_{end_date}.csv")
}

/// Renders leaderboard rows as CSV.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn leaderboard_csv(rows: &[RefereeStatRow]) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let write_err = |e: csv::Error| ApiError::Internal {
        message: format!("Failed to write CSV: {e}"),
    };

    writer.write_record(EXPORT_HEADERS).map_err(write_err)?;
    for row in rows {
        writer
            .write_record([
                row.rank.to_string(),
                row.referee.clone(),
                row.total_matches.to_string(),
            ])
            .map_err(write_err)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to flush CSV: {e}"),
    })?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV output is not UTF-8: {e}"),
    })
}
