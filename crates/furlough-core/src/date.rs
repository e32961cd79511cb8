//! Calendar date utilities.
//!
//! All dates are local calendar days ([`jiff::civil::Date`]); there is no
//! time-of-day or time zone component anywhere in the planner. Dates are keyed
//! and persisted in the canonical `YYYY-MM-DD` form produced by
//! [`format_date`], and [`parse_date`] accepts exactly that form.

use jiff::{
    civil::{Date, Weekday},
    Zoned,
};

use crate::error::{PlannerError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when the text is not exactly ten
/// characters of the form `YYYY-MM-DD` or does not name a real Gregorian day.
pub fn parse_date(text: &str) -> Result<Date> {
    let invalid = |reason: &str| {
        PlannerError::invalid_input("date").with_reason(format!("'{text}' {reason}"))
    };

    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid("is not in YYYY-MM-DD format"));
    }
    let all_digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !all_digits {
        return Err(invalid("is not in YYYY-MM-DD format"));
    }

    let year: i16 = text[0..4].parse().map_err(|_| invalid("has an invalid year"))?;
    let month: i8 = text[5..7].parse().map_err(|_| invalid("has an invalid month"))?;
    let day: i8 = text[8..10].parse().map_err(|_| invalid("has an invalid day"))?;

    Date::new(year, month, day).map_err(|e| invalid(&format!("is not a calendar date: {e}")))
}

/// Returns today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Weekday index of a date, `0` = Sunday through `6` = Saturday.
pub fn weekday_index(date: Date) -> u8 {
    weekday_to_index(date.weekday())
}

/// Index of a weekday, `0` = Sunday through `6` = Saturday.
pub fn weekday_to_index(weekday: Weekday) -> u8 {
    weekday.to_sunday_zero_offset().unsigned_abs()
}

/// Converts a weekday index (`0` = Sunday .. `6` = Saturday) into a [`Weekday`].
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` for indices above 6.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    i8::try_from(index)
        .ok()
        .and_then(|offset| Weekday::from_sunday_zero_offset(offset).ok())
        .ok_or_else(|| {
            PlannerError::invalid_input("reducedHoursDay")
                .with_reason(format!("weekday index {index} is outside 0-6"))
        })
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[usize::from(weekday_to_index(weekday))]
}

/// True iff the date falls on a Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Week number of `date` counted from `anchor`, where the anchor's own week
/// is week 1.
///
/// Computed as `floor(days_between / 7) + 1`, so dates before the anchor give
/// week numbers of zero or below.
pub fn week_number(date: Date, anchor: Date) -> i64 {
    let days = date.duration_since(anchor).as_secs() / SECONDS_PER_DAY;
    days.div_euclid(7) + 1
}

/// Number of days in the given month (`month` is 1-based).
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when the year/month pair is out of range.
pub fn days_in_month(year: i16, month: i8) -> Result<i8> {
    Ok(first_of_month(year, month)?.days_in_month())
}

/// Weekday index (`0` = Sunday) of the first day of the given month.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when the year/month pair is out of range.
pub fn first_weekday_of_month(year: i16, month: i8) -> Result<u8> {
    Ok(weekday_index(first_of_month(year, month)?))
}

/// English name of a 1-based month, or `"?"` when out of range.
pub fn month_name(month: i8) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or("?")
}

/// Steps `(year, month)` forward by `offset` months, wrapping into later years.
pub fn month_offset(year: i16, month: i8, offset: i8) -> (i16, i8) {
    let zero_based = i16::from(month - 1) + i16::from(offset);
    let year = year + zero_based.div_euclid(12);
    // rem_euclid(12) is always within 0..12
    let month = i8::try_from(zero_based.rem_euclid(12)).unwrap_or(0) + 1;
    (year, month)
}

fn first_of_month(year: i16, month: i8) -> Result<Date> {
    Date::new(year, month, 1).map_err(|e| {
        PlannerError::invalid_input("month")
            .with_reason(format!("{year}-{month:02} is out of range: {e}"))
    })
}
