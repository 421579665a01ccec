//! Calendar day attached to a named timezone.

use chrono::{DateTime, TimeZone, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Date;
use crate::error::AlmanacResult;

/// A whole calendar day in a provider's timezone.
///
/// The timezone only matters when converting to an instant
/// ([`start_of_day`](Self::start_of_day)). Equality, ordering and hashing look
/// at the calendar day alone, so `2024-01-01 Europe/London` equals
/// `2024-01-01 Asia/Tokyo`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZonedDate {
    date: Date,
    timezone: Tz,
}

impl ZonedDate {
    /// Attaches a timezone to a calendar day.
    #[must_use]
    pub fn new(date: Date, timezone: Tz) -> Self {
        Self { date, timezone }
    }

    /// Builds a zoned date from its components.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if month or day are out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32, timezone: Tz) -> AlmanacResult<Self> {
        Ok(Self::new(Date::from_ymd(year, month, day)?, timezone))
    }

    /// The calendar day.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The attached timezone.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns a new zoned date `days` later, same timezone.
    ///
    /// Clamps like [`Date::add_days`].
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self::new(self.date.add_days(days), self.timezone)
    }

    /// Returns a new zoned date `days` later, or an error past the
    /// supported range.
    ///
    /// # Errors
    ///
    /// See [`Date::checked_add_days`].
    pub fn checked_add_days(&self, days: i64) -> AlmanacResult<Self> {
        Ok(Self::new(self.date.checked_add_days(days)?, self.timezone))
    }

    /// Returns a new zoned date `days` earlier, same timezone.
    #[must_use]
    pub fn sub_days(&self, days: i64) -> Self {
        Self::new(self.date.sub_days(days), self.timezone)
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the day of week as 0 = Sunday .. 6 = Saturday.
    #[must_use]
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday_index()
    }

    /// Midnight at the start of this day in the attached timezone.
    ///
    /// Returns `None` only when midnight does not exist locally (a DST gap
    /// at 00:00); the earliest valid instant is used for ambiguous midnights.
    #[must_use]
    pub fn start_of_day(&self) -> Option<DateTime<Tz>> {
        let midnight = self.date.as_naive_date().and_hms_opt(0, 0, 0)?;
        self.timezone.from_local_datetime(&midnight).earliest()
    }
}

impl PartialEq for ZonedDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for ZonedDate {}

impl PartialOrd for ZonedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for ZonedDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl From<ZonedDate> for Date {
    fn from(zoned: ZonedDate) -> Self {
        zoned.date
    }
}

impl From<&ZonedDate> for Date {
    fn from(zoned: &ZonedDate) -> Self {
        zoned.date
    }
}

impl fmt::Display for ZonedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.timezone.name())
    }
}
