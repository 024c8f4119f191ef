// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date parsing for match records and filter bounds.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const SLASH_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]/[month]/[day]");
const UNPADDED_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month padding:none]-[day padding:none]");
const UNPADDED_SLASH_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]/[month padding:none]/[day padding:none]");

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`, with or without zero padding on the
/// month and day (`2024-3-1`). A timestamp whose date part is followed by `T`
/// or a space (e.g. `2024-03-01 18:30:00`) is reduced to its calendar day;
/// records are never compared below day precision.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value is empty or is not a
/// valid calendar date in one of the accepted forms.
pub fn parse_match_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::DateParseError {
            date_string: value.to_string(),
            error: String::from("empty value"),
        });
    }

    let date_part: &str = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);

    Date::parse(date_part, ISO_DATE)
        .or_else(|_| Date::parse(date_part, SLASH_DATE))
        .or_else(|_| Date::parse(date_part, UNPADDED_DATE))
        .or_else(|_| Date::parse(date_part, UNPADDED_SLASH_DATE))
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_parses_iso_date() {
        assert_eq!(parse_match_date("2024-01-31").unwrap(), date!(2024 - 01 - 31));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_parses_slash_date() {
        assert_eq!(parse_match_date("2024/02/29").unwrap(), date!(2024 - 02 - 29));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_timestamp_is_truncated_to_day() {
        assert_eq!(
            parse_match_date("2024-03-01 18:30:00").unwrap(),
            date!(2024 - 03 - 01)
        );
        assert_eq!(
            parse_match_date("2024-03-01T23:59:59").unwrap(),
            date!(2024 - 03 - 01)
        );
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_parses_unpadded_dates() {
        assert_eq!(parse_match_date("2024-3-1").unwrap(), date!(2024 - 03 - 01));
        assert_eq!(parse_match_date("2024/3/15").unwrap(), date!(2024 - 03 - 15));
        assert_eq!(
            parse_match_date("2024-3-1 18:30:00").unwrap(),
            date!(2024 - 03 - 01)
        );
    }

    #[test]
    fn test_rejects_unpadded_impossible_day() {
        assert!(parse_match_date("2023-2-29").is_err());
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_match_date("  2023-12-24 ").unwrap(), date!(2023 - 12 - 24));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_match_date("not a date"),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_rejects_impossible_day() {
        assert!(parse_match_date("2023-02-29").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        let result: Result<Date, DomainError> = parse_match_date("   ");
        assert!(matches!(
            result,
            Err(DomainError::DateParseError { ref error, .. }) if error == "empty value"
        ));
    }
}
