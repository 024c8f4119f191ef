// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-component properties of one filter cycle.

use super::helpers::{record, season, tie_scenario};
use crate::{
    DimensionSet, FilterCriteria, MatchRecord, PeriodSummary, RefereeStatRow, aggregate,
    filter_records, summarize,
};
use time::Date;
use time::macros::date;

fn fixtures() -> Vec<Vec<MatchRecord>> {
    vec![Vec::new(), tie_scenario(), season()]
}

fn whole_year() -> FilterCriteria {
    FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31))
}

#[test]
fn test_filter_then_aggregate_is_idempotent() {
    for records in fixtures() {
        for min_matches in [None, Some(0), Some(3), Some(6)] {
            let first: Vec<RefereeStatRow> = aggregate(
                &filter_records(&records, DimensionSet::all(), &whole_year()),
                min_matches,
            );
            let second: Vec<RefereeStatRow> = aggregate(
                &filter_records(&records, DimensionSet::all(), &whole_year()),
                min_matches,
            );
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_totals_are_monotonically_non_increasing() {
    for records in fixtures() {
        let rows: Vec<RefereeStatRow> = aggregate(&records, None);
        for pair in rows.windows(2) {
            assert!(pair[0].total_matches >= pair[1].total_matches);
            assert_eq!(pair[0].rank + 1, pair[1].rank);
        }
    }
}

#[test]
fn test_leaderboard_conserves_summary_total() {
    for records in fixtures() {
        let filtered: Vec<MatchRecord> =
            filter_records(&records, DimensionSet::all(), &whole_year());
        let rows: Vec<RefereeStatRow> = aggregate(&filtered, None);
        let summary: PeriodSummary = summarize(&filtered);

        let leaderboard_total: u64 = rows.iter().map(|r| r.total_matches).sum();
        assert_eq!(leaderboard_total, summary.total_matches);
        assert_eq!(rows.len(), summary.total_referees);
    }
}

#[test]
fn test_summary_ignores_leaderboard_threshold() {
    let filtered: Vec<MatchRecord> = filter_records(&season(), DimensionSet::all(), &whole_year());
    let thresholded: Vec<RefereeStatRow> = aggregate(&filtered, Some(7));
    let summary: PeriodSummary = summarize(&filtered);

    assert_eq!(thresholded.len(), 1);
    assert_eq!(summary.total_referees, 3);
    assert_eq!(summary.total_matches, 19);
}

#[test]
fn test_rank_one_matches_most_active() {
    for records in fixtures() {
        let rows: Vec<RefereeStatRow> = aggregate(&records, None);
        let summary: PeriodSummary = summarize(&records);

        assert_eq!(
            rows.first().map(|r| (r.referee.clone(), r.total_matches)),
            summary.most_active.map(|m| (m.referee, m.match_count))
        );
    }
}

#[test]
fn test_threshold_removes_exactly_rows_below_it() {
    let all: Vec<RefereeStatRow> = aggregate(&season(), None);
    for threshold in 0..=8_u32 {
        let kept: Vec<RefereeStatRow> = aggregate(&season(), Some(threshold));
        let expected: Vec<&str> = all
            .iter()
            .filter(|r| r.total_matches >= u64::from(threshold))
            .map(|r| r.referee.as_str())
            .collect();
        let actual: Vec<&str> = kept.iter().map(|r| r.referee.as_str()).collect();
        assert_eq!(actual, expected, "threshold {threshold}");
    }
}

#[test]
fn test_one_day_outside_either_bound_is_excluded() {
    let start: Date = date!(2024 - 06 - 10);
    let end: Date = date!(2024 - 06 - 20);
    let records: Vec<MatchRecord> = vec![
        record(start.previous_day().unwrap(), "before", 1),
        record(start, "start", 1),
        record(end, "end", 1),
        record(end.next_day().unwrap(), "after", 1),
    ];

    let filtered: Vec<MatchRecord> =
        filter_records(&records, DimensionSet::none(), &FilterCriteria::new(start, end));
    let names: Vec<&str> = filtered.iter().map(|r| r.referee.value()).collect();
    assert_eq!(names, vec!["start", "end"]);
}

#[test]
fn test_full_cycle_scenario() {
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 01 - 03));
    let filtered: Vec<MatchRecord> =
        filter_records(&tie_scenario(), DimensionSet::none(), &criteria);

    let rows: Vec<RefereeStatRow> = aggregate(&filtered, criteria.min_matches);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].rank, rows[0].referee.as_str(), rows[0].total_matches), (1, "A", 5));
    assert_eq!((rows[1].rank, rows[1].referee.as_str(), rows[1].total_matches), (2, "B", 5));

    let summary: PeriodSummary = summarize(&filtered);
    assert_eq!(summary.total_matches, 10);
    assert_eq!(summary.total_referees, 2);
    assert!((summary.average_matches_per_referee - 5.0).abs() < f64::EPSILON);
    let most_active = summary.most_active.unwrap();
    assert_eq!(most_active.referee, "A");
    assert_eq!(most_active.match_count, 5);
}
