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

mod aggregation;
mod criteria;
mod dates;
mod error;
mod filter;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{RefereeStatRow, RefereeTotal, aggregate, referee_totals};
pub use criteria::{ALL_SENTINELS, CategoryFilter, FilterCriteria, is_all_sentinel, parse_bound};
pub use dates::parse_match_date;
pub use error::DomainError;
pub use filter::filter_records;
pub use summary::{MostActive, PeriodSummary, summarize};
pub use types::{Dimension, DimensionSet, MatchDataset, MatchRecord, Referee};
