//! # Almanac
//!
//! Public holidays for countries and regions: fixed and movable feasts,
//! substitute days, bridge days and working-day navigation.
//!
//! This crate ties together:
//!
//! - [`almanac_core`]: dates, Easter, holiday collections and substitution rules
//! - [`almanac_providers`]: the country and region providers
//! - [`almanac_config`]: per-provider settings loaded from JSON or TOML
//!
//! ## Example
//!
//! ```rust
//! use almanac::prelude::*;
//!
//! let holidays = almanac::compute_holidays("Argentina", 2024, "en").unwrap();
//! let independence = holidays.require("independenceDay").unwrap();
//! assert_eq!(independence.day(), Date::from_ymd(2024, 7, 9).unwrap());
//!
//! for holiday in holidays.official() {
//!     println!("{} {}", holiday.day(), holiday.name());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

mod almanac;

pub use almanac::{Almanac, SUPPORTED_YEARS};

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;

/// Computes holidays with the process-wide default [`Almanac`].
///
/// See [`Almanac::compute_holidays`].
pub fn compute_holidays(
    provider_id: &str,
    year: i32,
    locale: &str,
) -> AlmanacResult<HolidayCollection> {
    Almanac::global().compute_holidays(provider_id, year, locale)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Almanac;
    pub use almanac_config::{ConfigFormat, ConfigManager, ProviderSettings};
    pub use almanac_core::prelude::*;
    pub use almanac_providers::prelude::*;
}
