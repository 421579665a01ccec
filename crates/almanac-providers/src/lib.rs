//! # Almanac Providers
//!
//! Country and region holiday providers built on `almanac-core`.
//!
//! - [`provider`]: the [`Provider`] trait and [`ProviderContext`]
//! - [`christian`], [`common`]: holiday definitions shared between countries
//! - [`countries`]: Argentina, Germany (and Bavaria), Greece, Japan, the
//!   United Kingdom (and Scotland), the USA
//! - [`registry`]: lookup by identifier or ISO 3166 code
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::easter::FeastCalculator;
//! use almanac_core::translations::Translations;
//! use almanac_providers::prelude::*;
//!
//! let feasts = FeastCalculator::new();
//! let ctx = ProviderContext::new(
//!     2022,
//!     "en_GB",
//!     chrono_tz::Europe::London,
//!     Translations::builtin(),
//!     &feasts,
//! );
//! let holidays = UnitedKingdom.compute(&ctx).unwrap();
//! assert!(holidays.contains("substituteHoliday:christmasDay"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)]

pub mod christian;
pub mod common;
pub mod countries;
pub mod provider;
pub mod registry;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::countries::{
        Argentina, Bavaria, Germany, Greece, Japan, Scotland, UnitedKingdom, Usa,
    };
    pub use crate::provider::{Provider, ProviderContext};
    pub use crate::registry::ProviderRegistry;
}

pub use provider::{Provider, ProviderContext};
pub use registry::ProviderRegistry;
