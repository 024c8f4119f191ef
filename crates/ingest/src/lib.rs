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

mod columns;
mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use columns::{ColumnMap, DATE_COLUMN, MATCHES_COLUMN, REFEREE_COLUMN};
pub use error::IngestError;
pub use loader::{
    LoadedDataset, RejectedRow, load_dataset_from_path, load_dataset_from_reader,
    load_dataset_from_str,
};
