// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use refstat_domain::MatchDataset;

use crate::{StatisticsRequest, load_dataset};

/// A winter schedule with one undated row and one row without a referee.
///
/// Totals: Erik Lund 6, Karin Ek 6, Anna Berg 4.
pub const WINTER_CSV: &str = "\
Date,Domare,Matcher,Sport,District
2024-01-05,Anna Berg,3,Innebandy,Stockholm
2024-01-05,Erik Lund,2,Fotboll,Västsvenska
2024-01-12,Erik Lund,4,Innebandy,Stockholm
2024-02-02,Karin Ek,6,Fotboll,Stockholm
2024-02-09,Anna Berg,1,Innebandy,Västsvenska
not-a-date,Ghost,9,Fotboll,Stockholm
2024-02-10,,3,Fotboll,Stockholm
";

/// Category cells with stray whitespace and embedded commas.
pub const SERIES_CSV: &str = "\
Date,Domare,Matcher,Sport,District,Serie
2024-03-02,Anna Berg,2, Innebandy,Stockholm,\"Div 1, Norr\"
2024-03-02,Erik Lund,3,Fotboll ,\"Skåne, Halland\",Div 2
2024-03-09,Karin Ek,1,Innebandy,Stockholm,\"Div 1, Norr\"
";

pub fn create_test_dataset() -> MatchDataset {
    load_dataset(WINTER_CSV).unwrap().0
}

pub fn request_for_period(start_date: &str, end_date: &str) -> StatisticsRequest {
    StatisticsRequest {
        start_date: Some(start_date.to_string()),
        end_date: Some(end_date.to_string()),
        ..StatisticsRequest::default()
    }
}
