//! Configuration manager.
//!
//! Keeps validated provider settings in memory and loads or saves them as
//! JSON or TOML documents.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::{AlmanacConfig, ProviderSettings};

// =============================================================================
// CONFIG FORMAT
// =============================================================================

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl ConfigFormat {
    /// Picks a format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses a document.
    pub fn parse(self, content: &str) -> ConfigResult<AlmanacConfig> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Renders a document.
    pub fn render(self, config: &AlmanacConfig) -> ConfigResult<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(config)?),
            Self::Toml => Ok(toml::to_string_pretty(config)?),
        }
    }
}

// =============================================================================
// CONFIGURATION MANAGER
// =============================================================================

/// Central configuration manager.
///
/// Every stored value has passed validation. Reads and writes may happen
/// from several threads.
///
/// # Example
///
/// ```rust
/// use almanac_config::{ConfigFormat, ConfigManager, ProviderSettings};
///
/// let manager = ConfigManager::new();
/// manager
///     .load_str(
///         r#"
///         default_locale = "en_GB"
///
///         [[providers]]
///         provider = "UnitedKingdom"
///         disabled_holidays = ["mayDay"]
///         "#,
///         ConfigFormat::Toml,
///     )
///     .unwrap();
///
/// assert_eq!(manager.default_locale(), "en_GB");
/// assert!(manager.get("UnitedKingdom").unwrap().is_disabled("mayDay"));
///
/// // Invalid settings are rejected
/// let bad = ProviderSettings::new("USA").with_timezone("America/Atlantis");
/// assert!(manager.register(bad).is_err());
/// ```
#[derive(Debug)]
pub struct ConfigManager {
    default_locale: RwLock<String>,
    providers: RwLock<HashMap<String, ProviderSettings>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Creates a manager with no provider settings.
    pub fn new() -> Self {
        let defaults = AlmanacConfig::default();
        Self {
            default_locale: RwLock::new(defaults.default_locale),
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a manager holding a validated configuration.
    pub fn from_config(config: AlmanacConfig) -> ConfigResult<Self> {
        let manager = Self::new();
        manager.apply(config)?;
        Ok(manager)
    }

    /// Validates a configuration and merges it in.
    ///
    /// Provider settings replace existing settings for the same provider.
    /// Nothing is changed if validation fails. Returns the number of
    /// provider settings merged.
    pub fn apply(&self, config: AlmanacConfig) -> ConfigResult<usize> {
        config.validate_or_error()?;

        let count = config.providers.len();
        *self.default_locale.write() = config.default_locale;
        let mut providers = self.providers.write();
        for settings in config.providers {
            providers.insert(settings.provider.clone(), settings);
        }
        Ok(count)
    }

    /// Parses, validates and merges a document.
    pub fn load_str(&self, content: &str, format: ConfigFormat) -> ConfigResult<usize> {
        let count = self.apply(format.parse(content)?)?;
        info!(?format, providers = count, "configuration loaded");
        Ok(count)
    }

    /// Loads a `.json` or `.toml` file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> ConfigResult<usize> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let count = self.apply(format.parse(&content)?)?;
        info!(path = %path.display(), providers = count, "configuration file loaded");
        Ok(count)
    }

    /// Writes the current configuration to a `.json` or `.toml` file.
    pub fn save_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let rendered = ConfigFormat::from_path(path)?.render(&self.snapshot())?;
        fs::write(path, rendered)?;
        info!(path = %path.display(), "configuration file saved");
        Ok(())
    }

    /// Registers settings for one provider.
    pub fn register(&self, settings: ProviderSettings) -> ConfigResult<()> {
        settings.validate_or_error()?;
        debug!(provider = %settings.provider, "provider settings registered");
        self.providers
            .write()
            .insert(settings.provider.clone(), settings);
        Ok(())
    }

    /// Settings for a provider, if any.
    pub fn get(&self, provider: &str) -> Option<ProviderSettings> {
        self.providers.read().get(provider).cloned()
    }

    /// Settings for a provider that must exist.
    pub fn require(&self, provider: &str) -> ConfigResult<ProviderSettings> {
        self.get(provider).ok_or_else(|| ConfigError::NotFound {
            key: provider.to_string(),
        })
    }

    /// Removes a provider's settings. Returns true if they existed.
    pub fn remove(&self, provider: &str) -> bool {
        self.providers.write().remove(provider).is_some()
    }

    /// Providers with settings, sorted.
    pub fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.read().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// The fallback display locale.
    pub fn default_locale(&self) -> String {
        self.default_locale.read().clone()
    }

    /// Changes the fallback display locale.
    pub fn set_default_locale(&self, locale: impl Into<String>) -> ConfigResult<()> {
        let locale = locale.into();
        if !almanac_core::locale::is_supported(&locale) {
            return Err(ConfigError::Validation {
                field: "default_locale".to_string(),
                message: format!("Unsupported locale '{locale}'"),
            });
        }
        *self.default_locale.write() = locale;
        Ok(())
    }

    /// Display locale for a provider: its own setting, else the default.
    pub fn locale_for(&self, provider: &str) -> String {
        self.providers
            .read()
            .get(provider)
            .and_then(|s| s.locale.clone())
            .unwrap_or_else(|| self.default_locale())
    }

    /// The current configuration as a document, providers sorted by id.
    pub fn snapshot(&self) -> AlmanacConfig {
        let mut providers: Vec<ProviderSettings> =
            self.providers.read().values().cloned().collect();
        providers.sort_by(|a, b| a.provider.cmp(&b.provider));
        AlmanacConfig {
            default_locale: self.default_locale(),
            providers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::types::WeekendType;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.TOML")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("b.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.yaml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_register_and_get() {
        let manager = ConfigManager::new();
        manager
            .register(ProviderSettings::new("Japan").with_weekend(WeekendType::SundayOnly))
            .unwrap();
        assert_eq!(manager.get("Japan").unwrap().weekend, Some(WeekendType::SundayOnly));
        assert!(manager.get("Greece").is_none());
        assert!(matches!(manager.require("Greece"), Err(ConfigError::NotFound { .. })));
        assert!(manager.remove("Japan"));
        assert!(!manager.remove("Japan"));
    }

    #[test]
    fn test_locale_fallback() {
        let manager = ConfigManager::new();
        assert_eq!(manager.locale_for("Greece"), "en_US");
        manager
            .register(ProviderSettings::new("Greece").with_locale("el_GR"))
            .unwrap();
        manager.set_default_locale("de").unwrap();
        assert_eq!(manager.locale_for("Greece"), "el_GR");
        assert_eq!(manager.locale_for("Germany"), "de");
        assert!(manager.set_default_locale("tlh").is_err());
        assert_eq!(manager.default_locale(), "de");
    }

    #[test]
    fn test_invalid_document_leaves_state_untouched() {
        let manager = ConfigManager::new();
        let json = r#"{
            "default_locale": "fr",
            "providers": [
                { "provider": "Japan", "timezone": "Asia/Atlantis" },
                { "provider": "USA", "locale": "zz" }
            ]
        }"#;
        match manager.load_str(json, ConfigFormat::Json) {
            Err(ConfigError::MultipleValidationErrors(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(manager.default_locale(), "en_US");
        assert!(manager.provider_ids().is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.load_str("providers = [", ConfigFormat::Toml),
            Err(ConfigError::Deserialization(_))
        ));
        assert!(matches!(
            manager.load_str("{", ConfigFormat::Json),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let manager = ConfigManager::new();
        manager.register(ProviderSettings::new("USA")).unwrap();
        manager.register(ProviderSettings::new("Argentina")).unwrap();
        let ids: Vec<_> = manager.snapshot().providers.into_iter().map(|p| p.provider).collect();
        assert_eq!(ids, vec!["Argentina", "USA"]);
        assert_eq!(manager.provider_ids(), vec!["Argentina", "USA"]);
    }
}
