// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use refstat_domain::MatchRecord;
use std::collections::BTreeMap;
use time::Date;

use crate::request_response::DailyTotal;

/// Sums match counts per calendar day, oldest day first.
///
/// Days without records are omitted.
#[must_use]
pub fn daily_totals(records: &[MatchRecord]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<Date, u64> = BTreeMap::new();
    for record in records {
        *by_day.entry(record.date).or_insert(0) += u64::from(record.match_count);
    }

    by_day
        .into_iter()
        .map(|(date, matches)| DailyTotal {
            date: date.to_string(),
            matches,
        })
        .collect()
}
