// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::criteria::FilterCriteria;
use crate::filter::filter_records;
use std::collections::BTreeSet;
use time::Date;

/// Represents a referee identifier.
///
/// Referees are compared exactly as supplied. Two spellings that differ only
/// in case or surrounding whitespace are two different referees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Referee {
    /// The identifier as it appears in the source data.
    value: String,
}

impl Referee {
    /// Creates a new `Referee`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier, stored verbatim
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Referee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// An optional categorical column a dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Sport (`Sport` / `Idrott`).
    Sport,
    /// District or association (`District` / `Förbund`).
    District,
    /// Series (`Serie`).
    Series,
}

impl Dimension {
    /// Every categorical dimension, in display order.
    pub const ALL: [Self; 3] = [Self::Sport, Self::District, Self::Series];

    /// Returns the lowercase name used in requests and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::District => "district",
            Self::Series => "series",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of optional categorical columns present in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionSet {
    sport: bool,
    district: bool,
    series: bool,
}

impl DimensionSet {
    /// A set with no optional columns.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            sport: false,
            district: false,
            series: false,
        }
    }

    /// A set with every optional column.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            sport: true,
            district: true,
            series: true,
        }
    }

    /// Returns a copy of this set with `dimension` added.
    #[must_use]
    pub const fn with(mut self, dimension: Dimension) -> Self {
        match dimension {
            Dimension::Sport => self.sport = true,
            Dimension::District => self.district = true,
            Dimension::Series => self.series = true,
        }
        self
    }

    /// Returns whether the dataset carries `dimension`.
    #[must_use]
    pub const fn contains(self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Sport => self.sport,
            Dimension::District => self.district,
            Dimension::Series => self.series,
        }
    }
}

/// One input row: a batch of matches officiated by a referee on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The calendar day the matches were played.
    pub date: Date,
    /// Who officiated.
    pub referee: Referee,
    /// Number of matches in this batch.
    pub match_count: u32,
    /// The sport, if the dataset records it.
    pub sport: Option<String>,
    /// The district or association, if the dataset records it.
    pub district: Option<String>,
    /// The series, if the dataset records it.
    pub series: Option<String>,
}

impl MatchRecord {
    /// Creates a record with no categorical values.
    #[must_use]
    pub fn new(date: Date, referee: Referee, match_count: u32) -> Self {
        Self {
            date,
            referee,
            match_count,
            sport: None,
            district: None,
            series: None,
        }
    }

    /// Returns a copy of this record with the given categorical value set.
    #[must_use]
    pub fn with_category(mut self, dimension: Dimension, value: &str) -> Self {
        let slot: &mut Option<String> = match dimension {
            Dimension::Sport => &mut self.sport,
            Dimension::District => &mut self.district,
            Dimension::Series => &mut self.series,
        };
        *slot = Some(value.to_string());
        self
    }

    /// Returns the record's value for `dimension`, if any.
    #[must_use]
    pub fn category(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Sport => self.sport.as_deref(),
            Dimension::District => self.district.as_deref(),
            Dimension::Series => self.series.as_deref(),
        }
    }
}

/// A fully materialised, immutable set of match records.
///
/// Besides the records this carries which optional columns the source
/// provided and how many source rows were dropped for having an
/// unparseable date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchDataset {
    records: Vec<MatchRecord>,
    dimensions: DimensionSet,
    dropped_rows: usize,
}

impl MatchDataset {
    /// Creates a new dataset.
    ///
    /// # Arguments
    ///
    /// * `records` - The parsed records, in source order
    /// * `dimensions` - The optional columns present in the source
    /// * `dropped_rows` - Rows discarded because their date was unparseable
    #[must_use]
    pub const fn new(
        records: Vec<MatchRecord>,
        dimensions: DimensionSet,
        dropped_rows: usize,
    ) -> Self {
        Self {
            records,
            dimensions,
            dropped_rows,
        }
    }

    /// Returns the records in source order.
    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Returns the optional columns present in the source.
    #[must_use]
    pub const fn dimensions(&self) -> DimensionSet {
        self.dimensions
    }

    /// Returns the number of source rows dropped for an unparseable date.
    #[must_use]
    pub const fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the earliest and latest record dates, or `None` when empty.
    #[must_use]
    pub fn date_span(&self) -> Option<(Date, Date)> {
        let first: Date = self.records.iter().map(|r| r.date).min()?;
        let last: Date = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Returns the sorted distinct values of `dimension`.
    ///
    /// Returns `None` when the dataset does not carry the column at all.
    #[must_use]
    pub fn distinct_values(&self, dimension: Dimension) -> Option<Vec<String>> {
        if !self.dimensions.contains(dimension) {
            return None;
        }

        let values: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.category(dimension))
            .collect();

        Some(values.into_iter().map(String::from).collect())
    }

    /// Runs the filter engine over this dataset.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<MatchRecord> {
        filter_records(&self.records, self.dimensions, criteria)
    }
}
