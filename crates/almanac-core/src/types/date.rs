//! Calendar date type.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{AlmanacError, AlmanacResult};

/// A whole calendar day with no time-of-day and no timezone.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Holiday dates that
/// carry a timezone are [`ZonedDate`](super::ZonedDate) values wrapping this type.
///
/// # Example
///
/// ```rust
/// use almanac_core::types::Date;
///
/// let date = Date::from_ymd(2024, 3, 31).unwrap();
/// assert_eq!(date.add_days(1).to_string(), "2024-04-01");
/// assert_eq!(date.weekday_index(), 0); // Sunday
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the date does not exist
    /// (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AlmanacResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AlmanacError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AlmanacError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    ///
    /// Clamps to chrono's earliest or latest supported day when the result
    /// would leave that range. Use [`checked_add_days`](Self::checked_add_days)
    /// to detect the overflow instead.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        match self.checked_add_days(days) {
            Ok(date) => date,
            Err(_) if days < 0 => Date(NaiveDate::MIN),
            Err(_) => Date(NaiveDate::MAX),
        }
    }

    /// Subtracts a number of days from the date, clamping like
    /// [`add_days`](Self::add_days).
    #[must_use]
    pub fn sub_days(&self, days: i64) -> Self {
        self.add_days(days.checked_neg().unwrap_or(i64::MAX))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the result is outside chrono's
    /// supported range.
    pub fn checked_add_days(&self, days: i64) -> AlmanacResult<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                AlmanacError::invalid_date(format!("{self} {days:+} days is out of range"))
            })
    }

    /// Subtracts a number of days from the date.
    ///
    /// # Errors
    ///
    /// Same as [`checked_add_days`](Self::checked_add_days).
    pub fn checked_sub_days(&self, days: i64) -> AlmanacResult<Self> {
        let negated = days.checked_neg().ok_or_else(|| {
            AlmanacError::invalid_date(format!("{self} minus {days} days is out of range"))
        })?;
        self.checked_add_days(negated)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the day of week as 0 = Sunday .. 6 = Saturday.
    #[must_use]
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the date as the `YYYY-MM-DD` string used for day equivalence.
    #[must_use]
    pub fn ymd_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.sub_days(days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Number of days in a month, or 0 for a month outside 1-12.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
