// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Dimension, MatchRecord, Referee};
use time::Date;
use time::macros::date;

pub fn record(date: Date, referee: &str, match_count: u32) -> MatchRecord {
    MatchRecord::new(date, Referee::new(referee), match_count)
}

pub fn categorised(
    date: Date,
    referee: &str,
    match_count: u32,
    sport: &str,
    district: &str,
) -> MatchRecord {
    record(date, referee, match_count)
        .with_category(Dimension::Sport, sport)
        .with_category(Dimension::District, district)
}

/// A tied pair: A (3 + 2) first appears before B (5).
pub fn tie_scenario() -> Vec<MatchRecord> {
    vec![
        record(date!(2024 - 01 - 01), "A", 3),
        record(date!(2024 - 01 - 02), "A", 2),
        record(date!(2024 - 01 - 03), "B", 5),
    ]
}

/// A mixed sport/district season spanning two months.
pub fn season() -> Vec<MatchRecord> {
    vec![
        categorised(date!(2024 - 09 - 01), "Anna Berg", 2, "Innebandy", "Västsvenska"),
        categorised(date!(2024 - 09 - 01), "Erik Lund", 1, "Innebandy", "Stockholm"),
        categorised(date!(2024 - 09 - 08), "Anna Berg", 3, "Fotboll", "Västsvenska"),
        categorised(date!(2024 - 09 - 15), "Karin Ek", 4, "Innebandy", "Västsvenska"),
        categorised(date!(2024 - 10 - 01), "Erik Lund", 6, "Fotboll", "Stockholm"),
        categorised(date!(2024 - 10 - 20), "Anna Berg", 1, "Innebandy", "Västsvenska"),
        categorised(date!(2024 - 10 - 31), "Karin Ek", 2, "Fotboll", "Stockholm"),
    ]
}
