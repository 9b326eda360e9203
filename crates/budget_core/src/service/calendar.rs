//! Calendar-aware day arithmetic for assignment scheduling.
//!
//! # Responsibility
//! - Derive buffer/execution days from a final day budget.
//! - Count business days in an inclusive date range, optionally excluding
//!   holidays, and project end dates forward from a start date.
//!
//! # Invariants
//! - Derived day counts are never negative.
//! - Ranges are inclusive of both endpoints; a reversed range counts zero days.
//! - Holiday membership is by calendar date only.

use crate::model::holiday::HolidaySet;
use chrono::{Datelike, NaiveDate, Weekday};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const DATE_KEY_LEN: usize = 10;
/// Upper bound for end-date projection, roughly 380 years of weekdays.
pub const MAX_PROJECTED_BUSINESS_DAYS: i64 = 100_000;

/// Errors from calendar input parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Input does not start with a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Projection exceeds `MAX_PROJECTED_BUSINESS_DAYS` or the calendar range.
    OutOfRange { business_days: i64 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::OutOfRange { business_days } => write!(
                f,
                "cannot project {business_days} business days; limit is {MAX_PROJECTED_BUSINESS_DAYS}"
            ),
        }
    }
}

impl Error for CalendarError {}

/// Contingency days left after execution, clamped at zero.
pub fn calculate_buffer_days(final_days: i64, execution_days: i64) -> i64 {
    final_days.saturating_sub(execution_days).max(0)
}

/// Execution days left after buffer, clamped at zero.
pub fn calculate_execution_days(final_days: i64, buffer_days: i64) -> i64 {
    final_days.saturating_sub(buffer_days).max(0)
}

/// Counts Monday-Friday dates in `[start, end]`.
pub fn calculate_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    count_days(start, end, is_weekday)
}

/// Counts Monday-Friday dates in `[start, end]` that are not holidays.
pub fn calculate_business_days_excluding_holidays(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &[NaiveDate],
) -> u32 {
    let holidays: HolidaySet = holidays.iter().copied().collect();
    count_days(start, end, |date| is_business_day(date, &holidays))
}

/// Returns the date of the `business_days`-th business day counted from
/// `start` inclusive.
///
/// Non-positive `business_days` returns `start` unchanged. A weekend or
/// holiday `start` does not count; counting begins at the next business day.
///
/// # Errors
/// - `OutOfRange` when `business_days` exceeds `MAX_PROJECTED_BUSINESS_DAYS`
///   or the count would run past the last representable date.
pub fn calculate_end_date(
    start: NaiveDate,
    business_days: i64,
    holidays: &HolidaySet,
) -> Result<NaiveDate, CalendarError> {
    if business_days <= 0 {
        return Ok(start);
    }
    if business_days > MAX_PROJECTED_BUSINESS_DAYS {
        return Err(CalendarError::OutOfRange { business_days });
    }

    let mut remaining = business_days;
    for date in start.iter_days() {
        if is_business_day(date, holidays) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(date);
            }
        }
    }
    Err(CalendarError::OutOfRange { business_days })
}

/// Returns whether `date` is a weekday not present in `holidays`.
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    is_weekday(date) && !holidays.contains(&date)
}

/// Normalizes an ISO date or date-time string to its calendar date.
///
/// Only the leading `YYYY-MM-DD` is read; any time and offset suffix is
/// ignored, so `2025-09-01T23:30:00Z` and `2025-09-01` share one key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = value.trim();
    let key = trimmed
        .get(..DATE_KEY_LEN)
        .ok_or_else(|| CalendarError::InvalidDate(trimmed.to_string()))?;
    if let Some(separator) = trimmed[DATE_KEY_LEN..].chars().next() {
        if separator != 'T' && separator != ' ' {
            return Err(CalendarError::InvalidDate(trimmed.to_string()));
        }
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(trimmed.to_string()))
}

/// Renders the `YYYY-MM-DD` key of a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn count_days(start: NaiveDate, end: NaiveDate, include: impl Fn(NaiveDate) -> bool) -> u32 {
    if end < start {
        return 0;
    }
    let mut count = 0;
    for date in start.iter_days() {
        if date > end {
            break;
        }
        if include(date) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::{
        calculate_end_date, date_key, parse_date_key, CalendarError, MAX_PROJECTED_BUSINESS_DAYS,
    };
    use crate::model::holiday::HolidaySet;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn parse_date_key_drops_time_component() {
        assert_eq!(
            parse_date_key("2025-09-01T23:30:00Z").unwrap(),
            date(2025, 9, 1)
        );
        assert_eq!(parse_date_key(" 2025-09-01 ").unwrap(), date(2025, 9, 1));
        assert_eq!(
            parse_date_key("2025-09-01 08:00").unwrap(),
            date(2025, 9, 1)
        );
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert!(matches!(
            parse_date_key("2025-9-1"),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(parse_date_key("2025-02-30").is_err());
        assert!(parse_date_key("2025-09-011").is_err());
        assert!(parse_date_key("").is_err());
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(date(2026, 1, 5)), "2026-01-05");
    }

    #[test]
    fn end_date_skips_weekend_start() {
        // 2025-09-06 is a Saturday.
        let end = calculate_end_date(date(2025, 9, 6), 1, &HolidaySet::new()).unwrap();
        assert_eq!(end, date(2025, 9, 8));
    }

    #[test]
    fn end_date_with_zero_days_is_start() {
        let start = date(2025, 9, 3);
        assert_eq!(calculate_end_date(start, 0, &HolidaySet::new()), Ok(start));
        assert_eq!(calculate_end_date(start, -4, &HolidaySet::new()), Ok(start));
    }

    #[test]
    fn end_date_rejects_counts_past_the_limit() {
        let start = date(2025, 9, 1);
        for days in [MAX_PROJECTED_BUSINESS_DAYS + 1, i64::MAX] {
            assert_eq!(
                calculate_end_date(start, days, &HolidaySet::new()),
                Err(CalendarError::OutOfRange {
                    business_days: days
                })
            );
        }

        let end = calculate_end_date(start, MAX_PROJECTED_BUSINESS_DAYS, &HolidaySet::new())
            .expect("limit itself is projectable");
        assert!(end > start);
    }

    #[test]
    fn end_date_reports_running_off_the_calendar() {
        let err = calculate_end_date(NaiveDate::MAX, 10, &HolidaySet::new()).unwrap_err();
        assert_eq!(err, CalendarError::OutOfRange { business_days: 10 });
    }
}
