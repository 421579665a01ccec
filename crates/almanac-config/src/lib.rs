//! Almanac Configuration Layer
//!
//! Validated per-provider settings for the Almanac holiday library.
//!
//! # Features
//!
//! - **Provider settings**: timezone and weekend overrides, a default display
//!   locale, and holiday keys to drop from computed collections
//! - **Validation**: timezones must be IANA names, locales must be supported
//! - **File formats**: JSON and TOML, chosen by file extension
//! - **Thread safety**: `ConfigManager` can be shared between threads
//!
//! # Example
//!
//! ```rust
//! use almanac_config::{ConfigManager, ProviderSettings};
//! use almanac_core::types::WeekendType;
//!
//! let manager = ConfigManager::new();
//! manager
//!     .register(
//!         ProviderSettings::new("Japan")
//!             .with_locale("ja")
//!             .with_weekend(WeekendType::SundayOnly),
//!     )
//!     .unwrap();
//!
//! assert_eq!(manager.locale_for("Japan"), "ja");
//! assert_eq!(manager.locale_for("USA"), "en_US");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod manager;
pub mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use manager::{ConfigFormat, ConfigManager};
pub use settings::{AlmanacConfig, ProviderSettings};
