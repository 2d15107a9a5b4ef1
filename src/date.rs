//! Due-date parsing and validation

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DateError {
    /// The text is not shaped like `YYYY-MM-DD`
    #[error("date {0:?} is not in YYYY-MM-DD format")]
    InvalidFormat(String),
    /// Digits in the right places, but not an actual calendar date (e.g. `2023-02-30`)
    #[error("date {0:?} does not exist in the calendar")]
    OutOfRange(String),
}

/// Parse a due date in strict `YYYY-MM-DD` form.
///
/// Note that `chrono`'s own `parse_from_str` accepts unpadded fields such as
/// `2024-1-1`, so the shape is checked by hand before chrono validates the
/// calendar date (month range, day-of-month, leap years).
pub fn parse_due_date(text: &str) -> Result<NaiveDate, DateError> {
    let bytes = text.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(|b| b.is_ascii_digit());
    if bytes.len() != 10
        || bytes[4] != b'-'
        || bytes[7] != b'-'
        || !digits(0..4) || !digits(5..7) || !digits(8..10)
    {
        return Err(DateError::InvalidFormat(text.to_string()));
    }

    // These cannot fail anymore, every field is pure ASCII digits
    let year: i32 = text[0..4].parse().map_err(|_| DateError::InvalidFormat(text.to_string()))?;
    let month: u32 = text[5..7].parse().map_err(|_| DateError::InvalidFormat(text.to_string()))?;
    let day: u32 = text[8..10].parse().map_err(|_| DateError::InvalidFormat(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::OutOfRange(text.to_string()))
}

/// Tell whether `text` is a valid due date.
///
/// This never fails or panics, whatever the input: malformed text merely
/// yields `false`.
pub fn is_valid_date(text: &str) -> bool {
    parse_due_date(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_dates() {
        assert!(is_valid_date("2024-01-01"));
        assert!(is_valid_date("1999-12-31"));
        assert_eq!(
            parse_due_date("2024-03-05"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
        );
    }

    #[test]
    fn leap_years() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(is_valid_date("2000-02-29"));
        assert!(!is_valid_date("1900-02-29"));
    }

    #[test]
    fn rejects_impossible_components() {
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2023-02-30"));
        assert!(!is_valid_date("2024-04-31"));
        assert_eq!(
            parse_due_date("2023-02-30"),
            Err(DateError::OutOfRange("2023-02-30".to_string())),
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("tomorrow"));
        assert!(!is_valid_date("2024/01/01"));
        assert!(!is_valid_date("01-01-2024"));
        assert!(!is_valid_date("2024-1-1"));
        assert!(!is_valid_date("2024-01-01 "));
        assert!(!is_valid_date("2024-01-0a"));
        assert_eq!(
            parse_due_date("2024-1-1"),
            Err(DateError::InvalidFormat("2024-1-1".to_string())),
        );
    }
}
