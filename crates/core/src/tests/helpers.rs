// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use refstat_domain::{Dimension, DimensionSet, MatchDataset, MatchRecord, Referee};
use time::Date;
use time::macros::date;

fn record(date: Date, referee: &str, match_count: u32, sport: &str) -> MatchRecord {
    MatchRecord::new(date, Referee::new(referee), match_count).with_category(Dimension::Sport, sport)
}

/// A small dataset with a sport column and two dropped rows.
pub fn create_test_dataset() -> MatchDataset {
    MatchDataset::new(
        vec![
            record(date!(2024 - 01 - 01), "A", 3, "Innebandy"),
            record(date!(2024 - 01 - 02), "A", 2, "Innebandy"),
            record(date!(2024 - 01 - 03), "B", 5, "Innebandy"),
            record(date!(2024 - 01 - 03), "C", 1, "Fotboll"),
            record(date!(2024 - 02 - 10), "C", 4, "Fotboll"),
        ],
        DimensionSet::none().with(Dimension::Sport),
        2,
    )
}
