// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Referee leaderboard computation.
//!
//! ## Ordering Rules (Authoritative)
//!
//! Referees are ordered by:
//! 1. Summed match count over the filtered records (highest first)
//! 2. Tie breaker: position of the referee's first record in the input
//!    (earliest first)
//!
//! ## Invariants
//!
//! - Referees are grouped by exact identifier; no case or whitespace folding
//! - Ranks are 1-based and sequential, ties never share a rank
//! - The same input always yields the same ranking

use crate::types::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A referee's summed match count, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefereeTotal {
    /// The referee identifier.
    pub referee: String,
    /// Sum of `match_count` over the referee's records.
    pub total_matches: u64,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeStatRow {
    /// The 1-based position in the leaderboard.
    pub rank: usize,
    /// The referee identifier.
    pub referee: String,
    /// Sum of matches over the filtered period.
    pub total_matches: u64,
}

/// Groups records by referee and sums their match counts.
///
/// The result lists each referee once, in the order of the referee's first
/// record in `records`.
#[must_use]
pub fn referee_totals(records: &[MatchRecord]) -> Vec<RefereeTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<RefereeTotal> = Vec::new();

    for record in records {
        let referee: &str = record.referee.value();
        if let Some(&slot) = index.get(referee) {
            totals[slot].total_matches += u64::from(record.match_count);
        } else {
            index.insert(referee, totals.len());
            totals.push(RefereeTotal {
                referee: referee.to_string(),
                total_matches: u64::from(record.match_count),
            });
        }
    }

    totals
}

/// Computes the ranked leaderboard for a set of filtered records.
///
/// # Arguments
///
/// * `records` - Records already selected by the filter engine
/// * `min_matches` - Referees whose total is below this are left out
///   (`None` and `Some(0)` keep everyone)
///
/// # Returns
///
/// Rows sorted by total (highest first), with rank 1 first. Empty input
/// yields an empty leaderboard.
#[must_use]
pub fn aggregate(records: &[MatchRecord], min_matches: Option<u32>) -> Vec<RefereeStatRow> {
    let threshold: u64 = u64::from(min_matches.unwrap_or(0));

    let mut totals: Vec<RefereeTotal> = referee_totals(records)
        .into_iter()
        .filter(|t| t.total_matches >= threshold)
        .collect();

    // Stable: equal totals keep first-appearance order
    totals.sort_by(|a, b| b.total_matches.cmp(&a.total_matches));

    totals
        .into_iter()
        .enumerate()
        .map(|(index, total)| RefereeStatRow {
            rank: index + 1,
            referee: total.referee,
            total_matches: total.total_matches,
        })
        .collect()
}
