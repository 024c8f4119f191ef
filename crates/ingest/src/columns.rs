// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Header recognition.
//!
//! Exports from the federation systems use Swedish column names, hand-made
//! files tend to use English ones. Both are accepted, case-insensitively.

use csv::StringRecord;
use refstat_domain::{Dimension, DimensionSet};

use crate::error::IngestError;

/// A column the loader knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Referee,
    Matches,
    Category(Dimension),
}

/// Accepted header spellings, already normalized.
const ALIASES: &[(&str, Column)] = &[
    ("date", Column::Date),
    ("datum", Column::Date),
    ("domare", Column::Referee),
    ("referee", Column::Referee),
    ("matcher", Column::Matches),
    ("matches", Column::Matches),
    ("sport", Column::Category(Dimension::Sport)),
    ("idrott", Column::Category(Dimension::Sport)),
    ("district", Column::Category(Dimension::District)),
    ("förbund", Column::Category(Dimension::District)),
    ("serie", Column::Category(Dimension::Series)),
    ("series", Column::Category(Dimension::Series)),
];

/// Canonical names reported when a required column is missing.
pub const DATE_COLUMN: &str = "Date";
/// Canonical name of the referee column.
pub const REFEREE_COLUMN: &str = "Domare";
/// Canonical name of the match count column.
pub const MATCHES_COLUMN: &str = "Matcher";

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn lookup(header: &str) -> Option<Column> {
    let normalized: String = normalize_header(header);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, column)| *column)
}

/// Positions of the recognised columns in a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    date: usize,
    referee: usize,
    matches: usize,
    sport: Option<usize>,
    district: Option<usize>,
    series: Option<usize>,
}

impl ColumnMap {
    /// Maps a header row to column positions.
    ///
    /// When a column appears under two spellings, the leftmost wins.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::MissingColumns` if the date, referee or match
    /// count column is absent.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let mut date: Option<usize> = None;
        let mut referee: Option<usize> = None;
        let mut matches: Option<usize> = None;
        let mut sport: Option<usize> = None;
        let mut district: Option<usize> = None;
        let mut series: Option<usize> = None;

        for (idx, header) in headers.iter().enumerate() {
            let slot: &mut Option<usize> = match lookup(header) {
                Some(Column::Date) => &mut date,
                Some(Column::Referee) => &mut referee,
                Some(Column::Matches) => &mut matches,
                Some(Column::Category(Dimension::Sport)) => &mut sport,
                Some(Column::Category(Dimension::District)) => &mut district,
                Some(Column::Category(Dimension::Series)) => &mut series,
                None => continue,
            };
            slot.get_or_insert(idx);
        }

        match (date, referee, matches) {
            (Some(date), Some(referee), Some(matches)) => Ok(Self {
                date,
                referee,
                matches,
                sport,
                district,
                series,
            }),
            _ => {
                let missing: Vec<&'static str> = [
                    (date, DATE_COLUMN),
                    (referee, REFEREE_COLUMN),
                    (matches, MATCHES_COLUMN),
                ]
                .into_iter()
                .filter(|(position, _)| position.is_none())
                .map(|(_, name)| name)
                .collect();
                Err(IngestError::MissingColumns { missing })
            }
        }
    }

    /// Position of the date column.
    #[must_use]
    pub const fn date(&self) -> usize {
        self.date
    }

    /// Position of the referee column.
    #[must_use]
    pub const fn referee(&self) -> usize {
        self.referee
    }

    /// Position of the match count column.
    #[must_use]
    pub const fn matches(&self) -> usize {
        self.matches
    }

    /// Position of an optional categorical column, if present.
    #[must_use]
    pub const fn category(&self, dimension: Dimension) -> Option<usize> {
        match dimension {
            Dimension::Sport => self.sport,
            Dimension::District => self.district,
            Dimension::Series => self.series,
        }
    }

    /// The optional columns present in the file.
    #[must_use]
    pub fn dimensions(&self) -> DimensionSet {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.category(*d).is_some())
            .fold(DimensionSet::none(), DimensionSet::with)
    }
}
