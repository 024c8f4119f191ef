// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregation::{RefereeTotal, referee_totals};
use crate::types::MatchRecord;
use serde::{Deserialize, Serialize};

/// The referee with the highest summed total in a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostActive {
    /// The referee identifier.
    pub referee: String,
    /// The referee's summed match count.
    pub match_count: u64,
}

/// Headline figures for a filtered period.
///
/// Computed over every filtered record; the leaderboard threshold does not
/// apply here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of matches over the period.
    pub total_matches: u64,
    /// Number of distinct referees.
    pub total_referees: usize,
    /// `total_matches / total_referees`, or `0.0` with no referees.
    pub average_matches_per_referee: f64,
    /// The most active referee, or `None` when the period has no records.
    pub most_active: Option<MostActive>,
}

impl PeriodSummary {
    /// Returns whether the period contained no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.most_active.is_none()
    }
}

/// Computes the headline figures for a set of filtered records.
///
/// Ties for most active are resolved the same way as leaderboard ties: the
/// referee whose first record appears earliest wins.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[MatchRecord]) -> PeriodSummary {
    let totals: Vec<RefereeTotal> = referee_totals(records);

    let total_matches: u64 = totals.iter().map(|t| t.total_matches).sum();
    let total_referees: usize = totals.len();

    let average_matches_per_referee: f64 = if total_referees == 0 {
        0.0
    } else {
        total_matches as f64 / total_referees as f64
    };

    let mut most_active: Option<&RefereeTotal> = None;
    for total in &totals {
        // Strictly greater: an equal later total never displaces an earlier one
        if most_active.is_none_or(|best| total.total_matches > best.total_matches) {
            most_active = Some(total);
        }
    }

    PeriodSummary {
        total_matches,
        total_referees,
        average_matches_per_referee,
        most_active: most_active.map(|t| MostActive {
            referee: t.referee.clone(),
            match_count: t.total_matches,
        }),
    }
}
