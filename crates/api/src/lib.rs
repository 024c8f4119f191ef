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
mod export;
mod handlers;
mod request_response;
mod timeline;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use export::{EXPORT_HEADERS, export_file_name, leaderboard_csv};
pub use handlers::{
    build_criteria, dataset_info, export_statistics_csv, get_statistics, load_dataset,
};
pub use request_response::{
    CsvExport, DEFAULT_TOP_N, DailyTotal, DatasetInfoResponse, DatasetLoadResponse,
    RejectedRowInfo, StatisticsRequest, StatisticsResponse,
};
pub use timeline::daily_totals;
