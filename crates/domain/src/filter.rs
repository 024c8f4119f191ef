// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record selection by period and categorical criteria.
//!
//! ## Rules
//!
//! A record is kept when all of the following hold:
//! 1. `start_date <= record.date <= end_date` (both ends inclusive)
//! 2. For each active categorical criterion on a column the dataset carries,
//!    the record's value is one of the allowed values
//!
//! A criterion on a column the dataset does not carry is ignored rather than
//! producing an empty result.
//!
//! The leaderboard threshold (`min_matches`) is not applied here. It gates a
//! referee's summed total, which only exists after aggregation.

use crate::criteria::FilterCriteria;
use crate::types::{Dimension, DimensionSet, MatchRecord};

/// Selects the records matching `criteria`.
///
/// # Arguments
///
/// * `records` - The full record sequence
/// * `dimensions` - Optional columns present in the source dataset
/// * `criteria` - Period and categorical restrictions
///
/// # Returns
///
/// The matching records in their original order. An empty result is valid.
#[must_use]
pub fn filter_records(
    records: &[MatchRecord],
    dimensions: DimensionSet,
    criteria: &FilterCriteria,
) -> Vec<MatchRecord> {
    let active: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(|d| dimensions.contains(*d) && criteria.category(*d).is_active())
        .collect();

    records
        .iter()
        .filter(|record| criteria.covers(record.date))
        .filter(|record| {
            active
                .iter()
                .all(|d| criteria.category(*d).admits(record.category(*d)))
        })
        .cloned()
        .collect()
}
