//! The provider trait and the per-computation context.

use std::fmt;

use almanac_core::arithmetic::{last_weekday_of_month, make_date, nth_weekday_of_month};
use almanac_core::collection::HolidayCollection;
use almanac_core::easter::{EasterCalendar, FeastCalculator, MovableFeast};
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::{Holiday, HolidayType};
use almanac_core::translations::Translations;
use almanac_core::types::{WeekendType, ZonedDate};
use chrono::Weekday;
use chrono_tz::Tz;

/// Inline provider-specific names, as `(locale, name)` pairs.
pub type NameOverrides<'n> = &'n [(&'n str, &'n str)];

/// A country or region holiday provider.
///
/// Providers are stateless: everything a computation needs arrives through
/// the [`ProviderContext`]. Region providers delegate to their parent's
/// `compute` and edit the returned collection.
pub trait Provider: Send + Sync + fmt::Debug {
    /// Registry identifier, e.g. `"UnitedKingdom/Scotland"`.
    fn id(&self) -> &'static str;

    /// ISO 3166 code, e.g. `"GB-SCT"`.
    fn iso_code(&self) -> &'static str;

    /// IANA timezone name the holidays are observed in.
    fn timezone(&self) -> &'static str;

    /// Weekend days of the provider.
    fn weekend(&self) -> WeekendType {
        WeekendType::SaturdaySunday
    }

    /// Easter computus used for movable feasts.
    fn easter_calendar(&self) -> EasterCalendar {
        EasterCalendar::Gregorian
    }

    /// Computes all holidays for the context's year.
    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection>;
}

/// Everything one provider computation needs.
///
/// Holds borrowed translations and the shared feast calculator; the context
/// itself is cheap to build per call.
#[derive(Debug, Clone, Copy)]
pub struct ProviderContext<'a> {
    year: i32,
    locale: &'a str,
    timezone: Tz,
    calendar: EasterCalendar,
    translations: &'a Translations,
    feasts: &'a FeastCalculator,
}

impl<'a> ProviderContext<'a> {
    /// Creates a context using the Gregorian Easter.
    pub fn new(
        year: i32,
        locale: &'a str,
        timezone: Tz,
        translations: &'a Translations,
        feasts: &'a FeastCalculator,
    ) -> Self {
        Self {
            year,
            locale,
            timezone,
            calendar: EasterCalendar::Gregorian,
            translations,
            feasts,
        }
    }

    /// Returns a copy using another Easter computus.
    #[must_use]
    pub fn with_calendar(self, calendar: EasterCalendar) -> Self {
        Self { calendar, ..self }
    }

    /// Year being computed.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Display locale.
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// Observance timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Easter computus.
    pub fn calendar(&self) -> EasterCalendar {
        self.calendar
    }

    /// Name table.
    pub fn translations(&self) -> &'a Translations {
        self.translations
    }

    /// Shared Easter memo.
    pub fn feasts(&self) -> &'a FeastCalculator {
        self.feasts
    }

    /// An empty collection for `provider`.
    pub fn collection(&self, provider: &dyn Provider) -> HolidayCollection {
        HolidayCollection::new(
            provider.id(),
            self.year,
            self.timezone,
            self.locale,
            provider.weekend(),
        )
    }

    /// A day of the current year.
    pub fn date(&self, month: u32, day: u32) -> AlmanacResult<ZonedDate> {
        make_date(self.year, month, day, self.timezone)
    }

    /// The nth weekday of a month in the current year.
    pub fn nth_weekday(&self, month: u32, weekday: Weekday, n: u32) -> AlmanacResult<ZonedDate> {
        nth_weekday_of_month(self.year, month, weekday, n, self.timezone)
    }

    /// The last weekday of a month in the current year.
    pub fn last_weekday(&self, month: u32, weekday: Weekday) -> AlmanacResult<ZonedDate> {
        last_weekday_of_month(self.year, month, weekday, self.timezone)
    }

    /// A movable feast of the current year under the context's computus.
    pub fn feast_date(&self, feast: MovableFeast) -> AlmanacResult<ZonedDate> {
        self.feasts
            .feast(feast, self.year, self.calendar, self.timezone)
    }

    /// Builds a holiday on `date`, merging built-in names with `names`.
    pub fn holiday(
        &self,
        key: &str,
        date: ZonedDate,
        names: NameOverrides<'_>,
        holiday_type: HolidayType,
    ) -> AlmanacResult<Holiday> {
        let names = self.translations.names_for(key, names);
        Holiday::new(key, names, date, self.locale, holiday_type)
    }

    /// A holiday on a fixed month and day.
    pub fn fixed(
        &self,
        key: &str,
        month: u32,
        day: u32,
        names: NameOverrides<'_>,
        holiday_type: HolidayType,
    ) -> AlmanacResult<Holiday> {
        self.holiday(key, self.date(month, day)?, names, holiday_type)
    }

    /// A holiday at a movable feast.
    pub fn feast(
        &self,
        key: &str,
        feast: MovableFeast,
        names: NameOverrides<'_>,
        holiday_type: HolidayType,
    ) -> AlmanacResult<Holiday> {
        self.holiday(key, self.feast_date(feast)?, names, holiday_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::types::Date;
    use chrono_tz::Europe::Berlin;

    #[test]
    fn test_context_builders() {
        let feasts = FeastCalculator::new();
        let ctx = ProviderContext::new(2024, "de", Berlin, Translations::builtin(), &feasts);

        let h = ctx
            .feast("goodFriday", MovableFeast::GoodFriday, &[], HolidayType::Official)
            .unwrap();
        assert_eq!(h.day(), Date::from_ymd(2024, 3, 29).unwrap());
        assert_eq!(h.name(), "Karfreitag");

        let names = [("de", "Tag der Deutschen Einheit")];
        let unity = ctx
            .fixed("germanUnityDay", 10, 3, &names, HolidayType::Official)
            .unwrap();
        assert_eq!(unity.name(), "Tag der Deutschen Einheit");
        assert_eq!(unity.name_in("en"), "German Unity Day");

        assert!(ctx.fixed("x", 2, 30, &[], HolidayType::Official).is_err());
    }

    #[test]
    fn test_orthodox_context() {
        let feasts = FeastCalculator::new();
        let ctx = ProviderContext::new(2024, "el", Berlin, Translations::builtin(), &feasts)
            .with_calendar(EasterCalendar::Orthodox);
        let easter = ctx.feast_date(MovableFeast::EasterSunday).unwrap();
        assert_eq!(easter.date(), Date::from_ymd(2024, 5, 5).unwrap());
    }
}
