// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use refstat_domain::{FilterCriteria, MatchRecord, PeriodSummary, RefereeStatRow, referee_totals};

/// The complete result of one filter cycle.
///
/// Nothing in a report is updated incrementally; a new set of criteria
/// always produces a new report.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    /// The criteria the report was computed for.
    pub criteria: FilterCriteria,
    /// The records that passed the filter, in source order.
    ///
    /// Exposed for consumers that bucket by day (timelines, charts).
    pub filtered: Vec<MatchRecord>,
    /// The ranked leaderboard, after the `min_matches` threshold.
    pub leaderboard: Vec<RefereeStatRow>,
    /// Headline figures over every filtered record.
    pub summary: PeriodSummary,
    /// Source rows dropped at load time for an unparseable date.
    pub dropped_rows: usize,
}

impl StatisticsReport {
    /// Returns whether the period matched no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Returns the summed referee totals before the `min_matches` threshold.
    ///
    /// Always equal to `summary.total_matches`.
    #[must_use]
    pub fn unthresholded_total(&self) -> u64 {
        referee_totals(&self.filtered)
            .iter()
            .map(|t| t.total_matches)
            .sum()
    }

    /// Returns the number of referees cut from the leaderboard by the
    /// `min_matches` threshold.
    #[must_use]
    pub fn below_threshold(&self) -> usize {
        self.summary
            .total_referees
            .saturating_sub(self.leaderboard.len())
    }
}
