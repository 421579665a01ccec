//! The `Almanac` entry point.

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{Arc, OnceLock};

use almanac_config::{ConfigManager, ProviderSettings};
use almanac_core::collection::HolidayCollection;
use almanac_core::easter::FeastCalculator;
use almanac_core::error::{AlmanacError, AlmanacResult};
use almanac_core::holiday::Holiday;
use almanac_core::locale::ensure_supported;
use almanac_core::translations::Translations;
use almanac_core::tz::TimezoneCache;
use almanac_core::types::Date;
use almanac_providers::{Provider, ProviderContext, ProviderRegistry};
use tracing::{debug, trace};

/// Years `compute_holidays` accepts.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1000..=9999;

static GLOBAL_ALMANAC: OnceLock<Almanac> = OnceLock::new();

/// Holiday computation for every registered provider.
///
/// Owns the provider registry, the timezone and Easter caches, the name
/// translations and the configuration. All methods take `&self`; an
/// `Almanac` can be shared between threads.
///
/// # Example
///
/// ```rust
/// use almanac::Almanac;
/// use almanac::prelude::Date;
///
/// let almanac = Almanac::new();
/// let holidays = almanac.compute_holidays("UnitedKingdom", 2022, "en_GB").unwrap();
/// let substitute = holidays.substitute_of("christmasDay").unwrap();
/// assert_eq!(substitute.day(), Date::from_ymd(2022, 12, 27).unwrap());
///
/// // Christmas Eve 2022 is a Saturday; the next working day skips the
/// // weekend and both Christmas holidays.
/// let next = almanac
///     .next_working_day("UnitedKingdom", Date::from_ymd(2022, 12, 24).unwrap(), 1)
///     .unwrap();
/// assert_eq!(next, Date::from_ymd(2022, 12, 28).unwrap());
/// ```
pub struct Almanac {
    registry: ProviderRegistry,
    timezones: Arc<TimezoneCache>,
    feasts: FeastCalculator,
    translations: Translations,
    config: ConfigManager,
}

impl fmt::Debug for Almanac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Almanac")
            .field("providers", &self.registry.ids())
            .field("cached_timezones", &self.timezones.len())
            .field("cached_anchors", &self.feasts.cached_anchors())
            .finish_non_exhaustive()
    }
}

impl Default for Almanac {
    fn default() -> Self {
        Self::new()
    }
}

impl Almanac {
    /// Creates an almanac with the built-in providers and names and an
    /// empty configuration.
    pub fn new() -> Self {
        Self {
            registry: ProviderRegistry::builtin(),
            timezones: Arc::new(TimezoneCache::new()),
            feasts: FeastCalculator::new(),
            translations: Translations::builtin().clone(),
            config: ConfigManager::new(),
        }
    }

    /// The process-wide default almanac.
    pub fn global() -> &'static Almanac {
        GLOBAL_ALMANAC.get_or_init(Almanac::new)
    }

    /// Replaces the provider registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Shares a timezone cache with other almanacs.
    #[must_use]
    pub fn with_timezones(mut self, timezones: Arc<TimezoneCache>) -> Self {
        self.timezones = timezones;
        self
    }

    /// Layers extra names over the built-in translations.
    #[must_use]
    pub fn with_translations(mut self, translations: &Translations) -> Self {
        self.translations.merge(translations);
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConfigManager) -> Self {
        self.config = config;
        self
    }

    /// Adds or replaces a provider.
    pub fn register(&mut self, provider: impl Provider + 'static) {
        self.registry.register(provider);
    }

    /// The provider registry.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The configuration; settings registered here apply to later calls.
    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    /// Identifiers of every registered provider, sorted.
    pub fn providers(&self) -> Vec<&'static str> {
        self.registry.ids()
    }

    /// Computes the holidays of one provider for one year.
    ///
    /// `provider_id` may be a provider identifier (`"UnitedKingdom/Scotland"`)
    /// or an ISO 3166 code (`"GB-SCT"`). Settings registered under either the
    /// identifier or the ISO code are applied to the result, the identifier
    /// taking precedence.
    ///
    /// # Errors
    ///
    /// - `InvalidDate` if the year is outside [`SUPPORTED_YEARS`]
    /// - `UnknownLocale` if the locale is not supported
    /// - `UnknownProvider` if nothing is registered under `provider_id`
    pub fn compute_holidays(
        &self,
        provider_id: &str,
        year: i32,
        locale: &str,
    ) -> AlmanacResult<HolidayCollection> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(AlmanacError::invalid_date(format!(
                "year {year} outside {}..={}",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }
        ensure_supported(locale)?;
        let provider = self.registry.get(provider_id)?;
        let settings = self.settings_for(provider.as_ref());

        let tz_name = settings
            .as_ref()
            .and_then(|s| s.timezone.as_deref())
            .unwrap_or(provider.timezone());
        let timezone = self.timezones.resolve(tz_name)?;

        let ctx = ProviderContext::new(year, locale, timezone, &self.translations, &self.feasts)
            .with_calendar(provider.easter_calendar());
        let mut holidays = provider.compute(&ctx)?;

        if let Some(settings) = settings {
            let removed = settings.apply(&mut holidays);
            trace!(provider = provider.id(), removed, "provider settings applied");
        }

        debug!(
            provider = provider.id(),
            year,
            locale,
            count = holidays.len(),
            "compute_holidays"
        );
        Ok(holidays)
    }

    /// Computes holidays in the locale configured for the provider.
    pub fn compute_holidays_default_locale(
        &self,
        provider_id: &str,
        year: i32,
    ) -> AlmanacResult<HolidayCollection> {
        let provider = self.registry.get(provider_id)?;
        let locale = self.locale_for(provider.as_ref());
        self.compute_holidays(provider_id, year, &locale)
    }

    /// Settings registered under the provider's identifier, else under its
    /// ISO code.
    fn settings_for(&self, provider: &dyn Provider) -> Option<ProviderSettings> {
        self.config
            .get(provider.id())
            .or_else(|| self.config.get(provider.iso_code()))
    }

    fn locale_for(&self, provider: &dyn Provider) -> String {
        self.settings_for(provider)
            .and_then(|s| s.locale)
            .unwrap_or_else(|| self.config.default_locale())
    }

    /// Returns true if `date` is neither a weekend day nor a holiday of the
    /// provider.
    pub fn is_working_day(&self, provider_id: &str, date: Date) -> AlmanacResult<bool> {
        YearCache::new(self, provider_id)?.is_working_day(date)
    }

    /// The `n`-th working day strictly after `date`, crossing into later
    /// years as needed. `n == 0` returns `date` unchanged.
    ///
    /// # Errors
    ///
    /// Fails like [`compute_holidays`](Self::compute_holidays) when the walk
    /// leaves the supported years.
    pub fn next_working_day(&self, provider_id: &str, date: Date, n: u32) -> AlmanacResult<Date> {
        self.walk_working_days(provider_id, date, n, 1)
    }

    /// The `n`-th working day strictly before `date`, crossing into earlier
    /// years as needed. `n == 0` returns `date` unchanged.
    pub fn previous_working_day(
        &self,
        provider_id: &str,
        date: Date,
        n: u32,
    ) -> AlmanacResult<Date> {
        self.walk_working_days(provider_id, date, n, -1)
    }

    fn walk_working_days(
        &self,
        provider_id: &str,
        date: Date,
        n: u32,
        step: i64,
    ) -> AlmanacResult<Date> {
        let mut years = YearCache::new(self, provider_id)?;
        let mut current = date;
        let mut remaining = n;
        while remaining > 0 {
            current = current.checked_add_days(step)?;
            if years.is_working_day(current)? {
                remaining -= 1;
            }
        }
        Ok(current)
    }

    /// The holiday with the same key in the year after `year`, if the
    /// provider observes it then.
    pub fn next_occurrence(
        &self,
        provider_id: &str,
        key: &str,
        year: i32,
        locale: &str,
    ) -> AlmanacResult<Option<Holiday>> {
        self.occurrence(provider_id, key, year + 1, locale)
    }

    /// The holiday with the same key in the year before `year`, if the
    /// provider observed it then.
    pub fn previous_occurrence(
        &self,
        provider_id: &str,
        key: &str,
        year: i32,
        locale: &str,
    ) -> AlmanacResult<Option<Holiday>> {
        self.occurrence(provider_id, key, year - 1, locale)
    }

    fn occurrence(
        &self,
        provider_id: &str,
        key: &str,
        year: i32,
        locale: &str,
    ) -> AlmanacResult<Option<Holiday>> {
        let holidays = self.compute_holidays(provider_id, year, locale)?;
        Ok(holidays.get(key)?.cloned())
    }
}

/// Per-call memo of computed years used by the working-day walks.
struct YearCache<'a> {
    almanac: &'a Almanac,
    provider: &'static str,
    locale: String,
    years: HashMap<i32, HolidayCollection>,
}

impl<'a> YearCache<'a> {
    fn new(almanac: &'a Almanac, provider_id: &str) -> AlmanacResult<Self> {
        let provider = almanac.registry.get(provider_id)?;
        Ok(Self {
            almanac,
            provider: provider.id(),
            locale: almanac.locale_for(provider.as_ref()),
            years: HashMap::new(),
        })
    }

    fn year(&mut self, year: i32) -> AlmanacResult<&HolidayCollection> {
        if !self.years.contains_key(&year) {
            let holidays = self
                .almanac
                .compute_holidays(self.provider, year, &self.locale)?;
            self.years.insert(year, holidays);
        }
        self.years
            .get(&year)
            .ok_or_else(|| AlmanacError::internal(format!("year {year} missing from cache")))
    }

    fn is_working_day(&mut self, date: Date) -> AlmanacResult<bool> {
        let year = date.year();
        if !self.year(year)?.is_working_day(date) {
            return Ok(false);
        }
        // substitutes of the previous year's holidays can land in January
        if date.month() == 1 && SUPPORTED_YEARS.contains(&(year - 1)) {
            return Ok(!self.year(year - 1)?.is_holiday(date));
        }
        Ok(true)
    }
}
