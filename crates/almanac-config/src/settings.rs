//! Configuration models.

use std::collections::HashSet;

use almanac_core::collection::HolidayCollection;
use almanac_core::holiday::SUBSTITUTE_PREFIX;
use almanac_core::locale::{self, DEFAULT_LOCALE};
use almanac_core::tz::{self, TimezoneCache};
use almanac_core::types::WeekendType;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConfigResult, Validate, ValidationError};

// =============================================================================
// PROVIDER SETTINGS
// =============================================================================

/// Per-provider overrides applied after a provider computes its holidays.
///
/// # Example
///
/// ```rust
/// use almanac_config::{ProviderSettings, Validate};
/// use almanac_core::types::WeekendType;
///
/// let settings = ProviderSettings::new("Japan")
///     .with_weekend(WeekendType::SundayOnly)
///     .disable("bridgeDay1");
/// assert!(settings.is_valid());
/// assert!(settings.is_disabled("bridgeDay1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider identifier (`"Japan"`) or ISO 3166 code (`"JP"`) these
    /// settings belong to.
    pub provider: String,

    /// IANA timezone replacing the provider's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Weekend rule replacing the provider's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend: Option<WeekendType>,

    /// Display locale used when the caller does not pass one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Holiday keys removed from computed collections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_holidays: Vec<String>,
}

impl ProviderSettings {
    /// Creates empty settings for a provider.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            timezone: None,
            weekend: None,
            locale: None,
            disabled_holidays: Vec::new(),
        }
    }

    /// Sets the timezone override.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the weekend override.
    #[must_use]
    pub fn with_weekend(mut self, weekend: WeekendType) -> Self {
        self.weekend = Some(weekend);
        self
    }

    /// Sets the default display locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Disables a holiday key.
    #[must_use]
    pub fn disable(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.disabled_holidays.contains(&key) {
            self.disabled_holidays.push(key);
        }
        self
    }

    /// Returns true if the key is disabled.
    pub fn is_disabled(&self, key: &str) -> bool {
        self.disabled_holidays.iter().any(|k| k == key)
    }

    /// Resolves the timezone override, if any.
    pub fn resolve_timezone(&self, cache: &TimezoneCache) -> ConfigResult<Option<Tz>> {
        match self.timezone {
            Some(ref name) => Ok(Some(cache.resolve(name)?)),
            None => Ok(None),
        }
    }

    /// Applies the overrides to a computed collection.
    ///
    /// Disabled holidays are removed together with their substitutes.
    /// Returns the number of removed holidays.
    pub fn apply(&self, collection: &mut HolidayCollection) -> usize {
        if let Some(weekend) = self.weekend {
            collection.set_weekend(weekend);
        }

        let mut removed = 0;
        for key in &self.disabled_holidays {
            let substitute = format!("{SUBSTITUTE_PREFIX}{key}");
            for k in [key.as_str(), substitute.as_str()] {
                if collection.remove(k).is_some() {
                    trace!(provider = %self.provider, key = k, "disabled holiday removed");
                    removed += 1;
                }
            }
        }
        removed
    }
}

impl Validate for ProviderSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.provider.trim().is_empty() {
            errors.push(ValidationError::new("provider", "Provider cannot be empty"));
        }

        if let Some(ref name) = self.timezone {
            if !tz::is_known(name) {
                errors.push(ValidationError::with_rule(
                    "timezone",
                    format!("Unknown timezone '{name}'"),
                    "iana_timezone",
                ));
            }
        }

        if let Some(ref tag) = self.locale {
            if !locale::is_supported(tag) {
                errors.push(ValidationError::with_rule(
                    "locale",
                    format!("Unsupported locale '{tag}'"),
                    "supported_locale",
                ));
            }
        }

        if self.disabled_holidays.iter().any(|k| k.trim().is_empty()) {
            errors.push(ValidationError::new(
                "disabled_holidays",
                "Holiday keys cannot be empty",
            ));
        }

        errors
    }
}

// =============================================================================
// ALMANAC CONFIG
// =============================================================================

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// A complete configuration document.
///
/// In TOML, provider settings are an array of tables:
///
/// ```toml
/// default_locale = "en_GB"
///
/// [[providers]]
/// provider = "UnitedKingdom"
/// disabled_holidays = ["mayDay"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacConfig {
    /// Locale used when neither caller nor provider settings name one.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Per-provider settings.
    #[serde(default)]
    pub providers: Vec<ProviderSettings>,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            providers: Vec::new(),
        }
    }
}

impl AlmanacConfig {
    /// Settings for a provider, if present.
    pub fn provider(&self, id: &str) -> Option<&ProviderSettings> {
        self.providers.iter().find(|p| p.provider == id)
    }
}

impl Validate for AlmanacConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !locale::is_supported(&self.default_locale) {
            errors.push(ValidationError::with_rule(
                "default_locale",
                format!("Unsupported locale '{}'", self.default_locale),
                "supported_locale",
            ));
        }

        let mut seen = HashSet::new();
        for (i, settings) in self.providers.iter().enumerate() {
            if !seen.insert(settings.provider.as_str()) {
                errors.push(ValidationError::with_rule(
                    format!("providers[{i}].provider"),
                    format!("Duplicate settings for '{}'", settings.provider),
                    "unique_provider",
                ));
            }
            errors.extend(settings.validate().into_iter().map(|e| ValidationError {
                field: format!("providers[{i}].{}", e.field),
                ..e
            }));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::holiday::{Holiday, HolidayType};
    use almanac_core::translations::Names;
    use almanac_core::types::ZonedDate;
    use chrono_tz::Asia::Tokyo;

    fn collection() -> HolidayCollection {
        let mut c = HolidayCollection::new("Japan", 2020, Tokyo, "en", WeekendType::SaturdaySunday);
        let day = |m, d| ZonedDate::from_ymd(2020, m, d, Tokyo).unwrap();
        let constitution =
            Holiday::new("constitutionDay", Names::new(), day(5, 3), "en", HolidayType::Official)
                .unwrap();
        c.add(Holiday::substitute(&constitution, day(5, 6)));
        c.add(constitution);
        let childrens =
            Holiday::new("childrensDay", Names::new(), day(5, 5), "en", HolidayType::Official)
                .unwrap();
        c.add(childrens);
        c
    }

    #[test]
    fn test_disabled_holiday_takes_its_substitute() {
        let mut c = collection();
        let settings = ProviderSettings::new("Japan").disable("constitutionDay");
        assert_eq!(settings.apply(&mut c), 2);
        assert_eq!(c.keys(), vec!["childrensDay"]);
    }

    #[test]
    fn test_weekend_override() {
        let mut c = collection();
        ProviderSettings::new("Japan")
            .with_weekend(WeekendType::SundayOnly)
            .apply(&mut c);
        assert_eq!(c.weekend(), WeekendType::SundayOnly);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_disable_is_idempotent() {
        let settings = ProviderSettings::new("Japan").disable("a").disable("a");
        assert_eq!(settings.disabled_holidays, vec!["a".to_string()]);
    }

    #[test]
    fn test_provider_settings_validation() {
        let settings = ProviderSettings::new(" ")
            .with_timezone("Mars/Olympus_Mons")
            .with_locale("xx_YY")
            .disable("");
        let fields: Vec<_> = settings.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["provider", "timezone", "locale", "disabled_holidays"]);
    }

    #[test]
    fn test_validation_leaves_timezone_caches_alone() {
        let settings = ProviderSettings::new("NZ").with_timezone("Pacific/Chatham");
        assert!(settings.is_valid());
        assert!(!TimezoneCache::global().contains("Pacific/Chatham"));

        let cache = TimezoneCache::new();
        assert_eq!(
            settings.resolve_timezone(&cache).unwrap(),
            Some(chrono_tz::Pacific::Chatham)
        );
        assert!(cache.contains("Pacific/Chatham"));
        assert!(!TimezoneCache::global().contains("Pacific/Chatham"));
    }

    #[test]
    fn test_resolve_timezone() {
        let cache = TimezoneCache::new();
        assert_eq!(ProviderSettings::new("USA").resolve_timezone(&cache).unwrap(), None);
        let settings = ProviderSettings::new("USA").with_timezone("America/Chicago");
        assert_eq!(
            settings.resolve_timezone(&cache).unwrap(),
            Some(chrono_tz::America::Chicago)
        );
    }

    #[test]
    fn test_config_validation_prefixes_fields() {
        let config = AlmanacConfig {
            default_locale: "en".to_string(),
            providers: vec![
                ProviderSettings::new("Japan"),
                ProviderSettings::new("Japan").with_locale("qq"),
            ],
        };
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["providers[1].provider", "providers[1].locale"]);
        assert!(AlmanacConfig::default().is_valid());
    }
}
