// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_dataset;
use crate::{CoreError, StatisticsReport, compute_statistics, compute_statistics_for_period};
use refstat_domain::{
    CategoryFilter, Dimension, DomainError, FilterCriteria, MatchDataset, MostActive,
};
use time::macros::date;

#[test]
fn test_january_report() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 01 - 31));

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();

    assert_eq!(report.filtered.len(), 4);
    let ranking: Vec<(usize, &str, u64)> = report
        .leaderboard
        .iter()
        .map(|r| (r.rank, r.referee.as_str(), r.total_matches))
        .collect();
    assert_eq!(ranking, vec![(1, "A", 5), (2, "B", 5), (3, "C", 1)]);

    assert_eq!(report.summary.total_matches, 11);
    assert_eq!(report.summary.total_referees, 3);
    assert_eq!(
        report.summary.most_active,
        Some(MostActive {
            referee: String::from("A"),
            match_count: 5,
        })
    );
    assert_eq!(report.dropped_rows, 2);
}

#[test]
fn test_threshold_only_affects_leaderboard() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria =
        FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31)).with_min_matches(5);

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();

    let names: Vec<&str> = report.leaderboard.iter().map(|r| r.referee.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let criteria: FilterCriteria = criteria.with_min_matches(6);
    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    assert!(report.leaderboard.is_empty());
    assert_eq!(report.summary.total_referees, 3);
    assert_eq!(report.summary.total_matches, 15);
    assert_eq!(report.below_threshold(), 3);
}

#[test]
fn test_unthresholded_total_conserves_summary_total() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria =
        FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31)).with_min_matches(6);

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    let ranked_total: u64 = report.leaderboard.iter().map(|r| r.total_matches).sum();

    assert_eq!(ranked_total, 0);
    assert_eq!(report.unthresholded_total(), 15);
    assert_eq!(report.unthresholded_total(), report.summary.total_matches);

    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31));
    let unfiltered: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    let ranked_total: u64 = unfiltered.leaderboard.iter().map(|r| r.total_matches).sum();
    assert_eq!(ranked_total, unfiltered.unthresholded_total());
}

#[test]
fn test_sport_filter_flows_through() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31))
        .with_category(Dimension::Sport, CategoryFilter::from_value(Some("Fotboll")));

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    assert_eq!(report.leaderboard.len(), 1);
    assert_eq!(report.leaderboard[0].referee, "C");
    assert_eq!(report.leaderboard[0].total_matches, 5);
}

#[test]
fn test_district_filter_on_dataset_without_district_is_ignored() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31))
        .with_category(Dimension::District, CategoryFilter::from_value(Some("Västsvenska")));

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    assert_eq!(report.filtered.len(), dataset.len());
}

#[test]
fn test_empty_period_is_not_an_error() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria = FilterCriteria::new(date!(2023 - 01 - 01), date!(2023 - 12 - 31));

    let report: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    assert!(report.is_empty());
    assert!(report.leaderboard.is_empty());
    assert_eq!(report.summary.total_referees, 0);
    assert_eq!(report.summary.most_active, None);
}

#[test]
fn test_empty_dataset_is_not_an_error() {
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31));
    let report: StatisticsReport = compute_statistics(&MatchDataset::default(), &criteria).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.dropped_rows, 0);
}

#[test]
fn test_reversed_range_halts_the_run() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria = FilterCriteria::new(date!(2024 - 12 - 31), date!(2024 - 01 - 01));

    let result: Result<StatisticsReport, CoreError> = compute_statistics(&dataset, &criteria);
    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dataset: MatchDataset = create_test_dataset();
    let criteria: FilterCriteria =
        FilterCriteria::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31)).with_min_matches(2);

    let first: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    let second: StatisticsReport = compute_statistics(&dataset, &criteria).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_textual_bounds() {
    let dataset: MatchDataset = create_test_dataset();
    let report: StatisticsReport =
        compute_statistics_for_period(&dataset, "2024-02-01", "2024-02-29", None).unwrap();
    assert_eq!(report.summary.total_matches, 4);
}

#[test]
fn test_unparseable_textual_bound_is_invalid_criteria() {
    let dataset: MatchDataset = create_test_dataset();
    let result: Result<StatisticsReport, CoreError> =
        compute_statistics_for_period(&dataset, "2024-02-01", "end of month", None);

    assert!(matches!(
        result,
        Err(CoreError::InvalidCriteria(DomainError::InvalidCriteria {
            field: "end_date",
            ..
        }))
    ));
}
