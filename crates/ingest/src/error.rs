// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for dataset loading.

use std::path::PathBuf;

/// Errors that prevent a dataset from being loaded at all.
///
/// Problems confined to individual rows are not errors; they are reported
/// through `LoadedDataset` instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The source file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),
    /// One or more required columns are missing.
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        /// The canonical names of the missing columns.
        missing: Vec<&'static str>,
    },
}
