// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::parse_match_date;
use crate::error::DomainError;
use crate::types::Dimension;
use std::collections::BTreeSet;
use time::Date;

/// Values meaning "no restriction" when supplied for a categorical filter.
///
/// `Alla` is what the legacy interface sends; matching is case-insensitive.
pub const ALL_SENTINELS: &[&str] = &["Alla", "All"];

/// Returns whether `value` is empty or one of the "all" sentinels.
#[must_use]
pub fn is_all_sentinel(value: &str) -> bool {
    let trimmed: &str = value.trim();
    trimmed.is_empty()
        || ALL_SENTINELS
            .iter()
            .any(|sentinel| sentinel.eq_ignore_ascii_case(trimmed))
}

/// A restriction on one categorical dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only records whose value is a member of this set.
    OneOf(BTreeSet<String>),
}

impl CategoryFilter {
    /// Builds a filter from a single optional value.
    ///
    /// `None`, an empty string and the "all" sentinels yield `Any`.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if !is_all_sentinel(v) => Self::OneOf(BTreeSet::from([v.to_string()])),
            _ => Self::Any,
        }
    }

    /// Builds a set filter.
    ///
    /// An empty set, or one containing an "all" sentinel, imposes no
    /// restriction.
    #[must_use]
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() || set.iter().any(|v| is_all_sentinel(v)) {
            Self::Any
        } else {
            Self::OneOf(set)
        }
    }

    /// Returns whether this filter restricts anything.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::OneOf(_))
    }

    /// Returns whether a record carrying `value` passes this filter.
    ///
    /// A record with no value never passes an active filter.
    #[must_use]
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(allowed) => value.is_some_and(|v| allowed.contains(v)),
        }
    }
}

/// Selection criteria for one statistics run.
///
/// Both date bounds are inclusive. Ordering of the bounds is not checked
/// here; callers that need it use `refstat::validate_date_range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// First day of the period.
    pub start_date: Date,
    /// Last day of the period.
    pub end_date: Date,
    /// Sport restriction.
    pub sport: CategoryFilter,
    /// District restriction.
    pub district: CategoryFilter,
    /// Series restriction.
    pub series: CategoryFilter,
    /// Minimum summed matches a referee needs to appear in the leaderboard.
    pub min_matches: Option<u32>,
}

impl FilterCriteria {
    /// Creates criteria covering `[start_date, end_date]` with no other
    /// restriction.
    #[must_use]
    pub const fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
            sport: CategoryFilter::Any,
            district: CategoryFilter::Any,
            series: CategoryFilter::Any,
            min_matches: None,
        }
    }

    /// Creates criteria from textual date bounds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCriteria` if either bound is not a date.
    pub fn from_date_strings(start_date: &str, end_date: &str) -> Result<Self, DomainError> {
        let start: Date = parse_bound("start_date", start_date)?;
        let end: Date = parse_bound("end_date", end_date)?;
        Ok(Self::new(start, end))
    }

    /// Returns a copy with the restriction for `dimension` replaced.
    #[must_use]
    pub fn with_category(mut self, dimension: Dimension, filter: CategoryFilter) -> Self {
        match dimension {
            Dimension::Sport => self.sport = filter,
            Dimension::District => self.district = filter,
            Dimension::Series => self.series = filter,
        }
        self
    }

    /// Returns a copy with the leaderboard threshold set.
    #[must_use]
    pub const fn with_min_matches(mut self, min_matches: u32) -> Self {
        self.min_matches = Some(min_matches);
        self
    }

    /// Returns the restriction for `dimension`.
    #[must_use]
    pub const fn category(&self, dimension: Dimension) -> &CategoryFilter {
        match dimension {
            Dimension::Sport => &self.sport,
            Dimension::District => &self.district,
            Dimension::Series => &self.series,
        }
    }

    /// Returns whether `date` falls inside the period.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Parses one textual period bound.
///
/// # Errors
///
/// Returns `DomainError::InvalidCriteria` naming `field` if `value` is not a
/// date.
pub fn parse_bound(field: &'static str, value: &str) -> Result<Date, DomainError> {
    parse_match_date(value).map_err(|e| DomainError::InvalidCriteria {
        field,
        reason: e.to_string(),
    })
}
