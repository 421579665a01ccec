//! Error types for the Almanac library.
//!
//! Every fallible operation in the core returns [`AlmanacResult`]. Read-only
//! lookups that may simply find nothing return `Option` instead of an error.

use thiserror::Error;

/// A specialized Result type for Almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// The main error type for Almanac operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// Malformed or out-of-range calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An argument was rejected (inverted range, blank key, ...).
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// The requested locale is not in the supported set.
    #[error("Unknown locale: {locale}")]
    UnknownLocale {
        /// The rejected locale tag.
        locale: String,
    },

    /// No provider is registered under the given identifier.
    #[error("Unknown provider: {provider_id}")]
    UnknownProvider {
        /// The rejected provider identifier.
        provider_id: String,
    },

    /// The timezone name is not a known IANA identifier.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The rejected timezone name.
        name: String,
    },

    /// A holiday key was required but is not present.
    #[error("Holiday not found: {key}")]
    NotFound {
        /// The missing holiday key.
        key: String,
    },

    /// A rule could not complete; indicates a defect in the calling provider.
    #[error("Internal error: {reason}")]
    Internal {
        /// Description of the failure.
        reason: String,
    },
}

impl AlmanacError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an unknown locale error.
    #[must_use]
    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Creates an unknown provider error.
    #[must_use]
    pub fn unknown_provider(provider_id: impl Into<String>) -> Self {
        Self::UnknownProvider {
            provider_id: provider_id.into(),
        }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }
}
