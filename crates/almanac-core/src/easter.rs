//! Easter computation and the movable feasts derived from it.
//!
//! Every movable feast is a fixed day offset from Easter Sunday of the same
//! year. Two anchors are supported: the Gregorian (Western) Easter and the
//! Orthodox Easter, which is computed in the Julian calendar and converted to
//! a Gregorian date.

use chrono_tz::Tz;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{Date, ZonedDate};

/// Smallest year accepted by the Easter algorithms.
pub const MIN_EASTER_YEAR: i32 = 1;
/// Largest year accepted by the Easter algorithms.
pub const MAX_EASTER_YEAR: i32 = 9999;

/// Which church calendar the Easter anchor follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasterCalendar {
    /// Western churches, Gregorian computus.
    Gregorian,
    /// Eastern Orthodox churches, Julian computus shown as a Gregorian date.
    Orthodox,
}

fn check_year(year: i32) -> AlmanacResult<()> {
    if (MIN_EASTER_YEAR..=MAX_EASTER_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(AlmanacError::invalid_date(format!(
            "Easter is only computed for years {MIN_EASTER_YEAR}..={MAX_EASTER_YEAR}, got {year}"
        )))
    }
}

/// Easter Sunday using the Anonymous Gregorian algorithm.
///
/// The Gregorian calendar is applied proleptically to years before 1583.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` for years outside 1..=9999.
#[allow(clippy::many_single_char_names)]
pub fn easter_gregorian(year: i32) -> AlmanacResult<Date> {
    check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32)
}

/// Orthodox Easter Sunday (Meeus' Julian algorithm), as a Gregorian date.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` for years outside 1..=9999.
#[allow(clippy::many_single_char_names)]
pub fn easter_orthodox(year: i32) -> AlmanacResult<Date> {
    check_year(year)?;

    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = ((d + e + 114) % 31) + 1;

    // Julian calendar date; shift by the century drift to the Gregorian one.
    // Easter is always after the Julian leap day, so the year's drift applies.
    let drift = i64::from(year / 100 - year / 400 - 2);
    let julian_as_gregorian = Date::from_ymd(year, month as u32, day as u32)?;
    Ok(julian_as_gregorian.add_days(drift))
}

/// Easter Sunday for the given church calendar.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` for years outside 1..=9999.
pub fn easter(year: i32, calendar: EasterCalendar) -> AlmanacResult<Date> {
    match calendar {
        EasterCalendar::Gregorian => easter_gregorian(year),
        EasterCalendar::Orthodox => easter_orthodox(year),
    }
}

/// Named feasts defined as an offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovableFeast {
    /// Monday before Ash Wednesday (Carnival), also Orthodox Clean Monday.
    CarnivalMonday,
    /// Shrove Tuesday.
    CarnivalTuesday,
    /// First day of Lent.
    AshWednesday,
    /// Thursday of Holy Week.
    MaundyThursday,
    /// Friday of Holy Week.
    GoodFriday,
    /// Saturday of Holy Week.
    HolySaturday,
    /// The anchor itself.
    EasterSunday,
    /// Day after Easter Sunday.
    EasterMonday,
    /// Ascension Thursday.
    Ascension,
    /// Whit Sunday.
    Pentecost,
    /// Whit Monday.
    PentecostMonday,
    /// Corpus Christi Thursday.
    CorpusChristi,
}

impl MovableFeast {
    /// Day offset from Easter Sunday.
    pub const fn offset_days(self) -> i64 {
        match self {
            MovableFeast::CarnivalMonday => -48,
            MovableFeast::CarnivalTuesday => -47,
            MovableFeast::AshWednesday => -46,
            MovableFeast::MaundyThursday => -3,
            MovableFeast::GoodFriday => -2,
            MovableFeast::HolySaturday => -1,
            MovableFeast::EasterSunday => 0,
            MovableFeast::EasterMonday => 1,
            MovableFeast::Ascension => 39,
            MovableFeast::Pentecost => 49,
            MovableFeast::PentecostMonday => 50,
            MovableFeast::CorpusChristi => 60,
        }
    }
}

/// Memoizing calculator for Easter anchors.
///
/// The anchor is computed once per (year, calendar, timezone) and reused for
/// every feast derived from it.
#[derive(Debug, Default)]
pub struct FeastCalculator {
    anchors: DashMap<(i32, EasterCalendar, Tz), ZonedDate>,
}

impl FeastCalculator {
    /// Creates an empty calculator.
    pub fn new() -> Self {
        Self {
            anchors: DashMap::new(),
        }
    }

    /// Easter Sunday in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` for years outside 1..=9999.
    pub fn anchor(
        &self,
        year: i32,
        calendar: EasterCalendar,
        timezone: Tz,
    ) -> AlmanacResult<ZonedDate> {
        let key = (year, calendar, timezone);
        if let Some(anchor) = self.anchors.get(&key) {
            return Ok(*anchor);
        }

        let anchor = ZonedDate::new(easter(year, calendar)?, timezone);
        self.anchors.insert(key, anchor);
        Ok(anchor)
    }

    /// A movable feast date in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` for years outside 1..=9999.
    pub fn feast(
        &self,
        feast: MovableFeast,
        year: i32,
        calendar: EasterCalendar,
        timezone: Tz,
    ) -> AlmanacResult<ZonedDate> {
        Ok(self
            .anchor(year, calendar, timezone)?
            .add_days(feast.offset_days()))
    }

    /// Number of memoized anchors.
    pub fn cached_anchors(&self) -> usize {
        self.anchors.len()
    }
}
