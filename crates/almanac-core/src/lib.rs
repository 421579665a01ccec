//! # Almanac Core
//!
//! The date-rule engine shared by every Almanac holiday provider.
//!
//! This crate provides:
//!
//! - **Types**: `Date`, `ZonedDate` (a calendar day with an IANA timezone)
//!   and `WeekendType`
//! - **Arithmetic**: nth/last weekday of a month, strict and inclusive
//!   relative weekdays, and a concurrent timezone cache
//! - **Movable feasts**: Gregorian and Orthodox Easter with memoized anchors
//! - **Holidays**: the `Holiday` value, localized names and the ordered
//!   `HolidayCollection`
//! - **Rules**: substitute holiday policies and the bridge-day scan
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::prelude::*;
//! use chrono_tz::Europe::London;
//!
//! let calc = FeastCalculator::new();
//! let good_friday = calc
//!     .feast(MovableFeast::GoodFriday, 2024, EasterCalendar::Gregorian, London)
//!     .unwrap();
//! assert_eq!(good_friday.date(), Date::from_ymd(2024, 3, 29).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]

pub mod arithmetic;
pub mod bridge;
pub mod collection;
pub mod easter;
pub mod error;
pub mod holiday;
pub mod locale;
pub mod substitution;
pub mod translations;
pub mod types;
pub mod tz;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::arithmetic::{
        last_weekday_of_month, make_date, next_or_same_weekday, next_weekday,
        nth_weekday_of_month, previous_or_same_weekday, previous_weekday,
    };
    pub use crate::bridge::bridge_days;
    pub use crate::collection::{HolidayCollection, HolidaySelection};
    pub use crate::easter::{EasterCalendar, FeastCalculator, MovableFeast};
    pub use crate::error::{AlmanacError, AlmanacResult};
    pub use crate::holiday::{Holiday, HolidayType};
    pub use crate::substitution::{CollisionRule, ShiftRule, SubstitutionPolicy};
    pub use crate::translations::{Names, Translations};
    pub use crate::types::{Date, WeekendType, ZonedDate};
    pub use crate::tz::TimezoneCache;
}

pub use error::{AlmanacError, AlmanacResult};
