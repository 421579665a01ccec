//! Ordered, key-unique holiday collections.

use std::collections::HashSet;

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{AlmanacError, AlmanacResult};
use crate::holiday::{Holiday, HolidayType};
use crate::types::{Date, WeekendType};

/// All holidays of one provider for one year.
///
/// Iteration is always chronological. At most one holiday exists per key;
/// adding a holiday with an existing key replaces the old entry.
///
/// # Example
///
/// ```rust
/// use almanac_core::collection::HolidayCollection;
/// use almanac_core::holiday::{Holiday, HolidayType};
/// use almanac_core::translations::Names;
/// use almanac_core::types::{Date, WeekendType, ZonedDate};
/// use chrono_tz::Europe::Berlin;
///
/// let weekend = WeekendType::SaturdaySunday;
/// let mut holidays = HolidayCollection::new("Germany", 2024, Berlin, "de", weekend);
/// let christmas = ZonedDate::from_ymd(2024, 12, 25, Berlin).unwrap();
/// let new_year = ZonedDate::from_ymd(2024, 1, 1, Berlin).unwrap();
/// for (key, date) in [("christmasDay", christmas), ("newYearsDay", new_year)] {
///     holidays.add(Holiday::new(key, Names::new(), date, "de", HolidayType::Official).unwrap());
/// }
///
/// assert_eq!(holidays.keys(), vec!["newYearsDay", "christmasDay"]);
/// assert!(holidays.is_holiday(Date::from_ymd(2024, 12, 25).unwrap()));
/// assert!(!holidays.is_working_day(Date::from_ymd(2024, 12, 28).unwrap())); // Saturday
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct HolidayCollection {
    provider: String,
    year: i32,
    timezone: Tz,
    locale: String,
    weekend: WeekendType,
    holidays: Vec<Holiday>,
}

impl HolidayCollection {
    /// Creates an empty collection.
    pub fn new(
        provider: impl Into<String>,
        year: i32,
        timezone: Tz,
        locale: impl Into<String>,
        weekend: WeekendType,
    ) -> Self {
        Self {
            provider: provider.into(),
            year,
            timezone,
            locale: locale.into(),
            weekend,
            holidays: Vec::new(),
        }
    }

    /// Provider identifier the collection was computed for.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Relabels the collection, used by region providers that start from
    /// their parent's holidays.
    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.provider = provider.into();
    }

    /// Year the collection was computed for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Provider timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Display locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Weekend rule used by [`is_working_day`](Self::is_working_day).
    pub fn weekend(&self) -> WeekendType {
        self.weekend
    }

    /// Replaces the weekend rule.
    pub fn set_weekend(&mut self, weekend: WeekendType) {
        self.weekend = weekend;
    }

    /// Inserts a holiday, replacing any holiday with the same key.
    ///
    /// Holidays sharing a date are kept after the ones already present.
    pub fn add(&mut self, holiday: Holiday) {
        self.holidays.retain(|h| h.key() != holiday.key());
        let at = self
            .holidays
            .partition_point(|h| h.date() <= holiday.date());
        self.holidays.insert(at, holiday);
    }

    /// Removes a holiday by key; absent keys are ignored.
    pub fn remove(&mut self, key: &str) -> Option<Holiday> {
        let idx = self.holidays.iter().position(|h| h.key() == key)?;
        Some(self.holidays.remove(idx))
    }

    /// Looks up a holiday by key.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` for a blank key.
    pub fn get(&self, key: &str) -> AlmanacResult<Option<&Holiday>> {
        if key.trim().is_empty() {
            return Err(AlmanacError::invalid_argument("holiday key must not be blank"));
        }
        Ok(self.holidays.iter().find(|h| h.key() == key))
    }

    /// Looks up a holiday that must exist.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::NotFound` if no holiday has this key.
    pub fn require(&self, key: &str) -> AlmanacResult<&Holiday> {
        self.get(key)?.ok_or_else(|| AlmanacError::not_found(key))
    }

    /// Returns true if a holiday with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.holidays.iter().any(|h| h.key() == key)
    }

    /// All holidays, chronologically.
    pub fn all(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Iterates holidays chronologically.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    /// Number of entries, substitutes included.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Keys in chronological order.
    pub fn keys(&self) -> Vec<&str> {
        self.holidays.iter().map(Holiday::key).collect()
    }

    /// Display names in chronological order.
    pub fn names(&self) -> Vec<String> {
        self.holidays.iter().map(Holiday::name).collect()
    }

    /// Calendar days in chronological order (may repeat).
    pub fn dates(&self) -> Vec<Date> {
        self.holidays.iter().map(Holiday::day).collect()
    }

    /// Returns true if any holiday falls on the given calendar day.
    pub fn is_holiday(&self, date: impl Into<Date>) -> bool {
        let day = date.into();
        self.holidays.iter().any(|h| h.day() == day)
    }

    /// Returns true if the day is a weekend day for this provider.
    pub fn is_weekend_day(&self, date: impl Into<Date>) -> bool {
        self.weekend.is_weekend(date.into().weekday())
    }

    /// Returns true if the day is neither a holiday nor a weekend day.
    pub fn is_working_day(&self, date: impl Into<Date>) -> bool {
        let day = date.into();
        !self.is_holiday(day) && !self.is_weekend_day(day)
    }

    /// Holidays between two days.
    ///
    /// With `inclusive` the boundary days are included.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if `start` is after `end`.
    pub fn between(
        &self,
        start: impl Into<Date>,
        end: impl Into<Date>,
        inclusive: bool,
    ) -> AlmanacResult<HolidaySelection<'_>> {
        let (start, end) = (start.into(), end.into());
        if start > end {
            return Err(AlmanacError::invalid_argument(format!(
                "range start {start} is after end {end}"
            )));
        }
        Ok(self.select(|h| {
            let d = h.day();
            if inclusive {
                start <= d && d <= end
            } else {
                start < d && d < end
            }
        }))
    }

    /// All holidays on a calendar day.
    pub fn on(&self, date: impl Into<Date>) -> HolidaySelection<'_> {
        let day = date.into();
        self.select(|h| h.day() == day)
    }

    /// Holidays of one type.
    pub fn of_type(&self, holiday_type: HolidayType) -> HolidaySelection<'_> {
        self.select(|h| h.holiday_type() == holiday_type)
    }

    /// Official holidays.
    pub fn official(&self) -> HolidaySelection<'_> {
        self.of_type(HolidayType::Official)
    }

    /// Bank holidays.
    pub fn bank(&self) -> HolidaySelection<'_> {
        self.of_type(HolidayType::Bank)
    }

    /// Observances.
    pub fn observance(&self) -> HolidaySelection<'_> {
        self.of_type(HolidayType::Observance)
    }

    /// Seasonal markers.
    pub fn seasonal(&self) -> HolidaySelection<'_> {
        self.of_type(HolidayType::Season)
    }

    /// Holidays of type `Other`.
    pub fn other(&self) -> HolidaySelection<'_> {
        self.of_type(HolidayType::Other)
    }

    /// Holidays matching a predicate, chronologically.
    pub fn select<F>(&self, predicate: F) -> HolidaySelection<'_>
    where
        F: Fn(&Holiday) -> bool,
    {
        HolidaySelection {
            items: self.holidays.iter().filter(|h| predicate(h)).collect(),
        }
    }

    /// The substitute emitted for `key`, if any.
    pub fn substitute_of(&self, key: &str) -> Option<&Holiday> {
        self.holidays
            .iter()
            .find(|h| h.substituted_key() == Some(key))
    }

    /// Number of underlying holidays; a substitute and its original count once.
    pub fn distinct_count(&self) -> usize {
        distinct_count(self.holidays.iter())
    }
}

impl<'a> IntoIterator for &'a HolidayCollection {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

fn distinct_count<'a>(holidays: impl Iterator<Item = &'a Holiday>) -> usize {
    holidays.map(Holiday::base_key).collect::<HashSet<_>>().len()
}

/// A chronological subset of a collection.
#[derive(Debug, Clone)]
pub struct HolidaySelection<'a> {
    items: Vec<&'a Holiday>,
}

impl<'a> HolidaySelection<'a> {
    /// Iterates the selected holidays.
    pub fn iter(&self) -> impl Iterator<Item = &'a Holiday> + '_ {
        self.items.iter().copied()
    }

    /// Number of selected entries, substitutes included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keys of the selected holidays.
    pub fn keys(&self) -> Vec<&'a str> {
        self.items.iter().map(|h| h.key()).collect()
    }

    /// Number of underlying holidays among the selection.
    pub fn distinct_count(&self) -> usize {
        distinct_count(self.items.iter().copied())
    }

    /// Returns the selected holidays.
    pub fn into_vec(self) -> Vec<&'a Holiday> {
        self.items
    }
}

impl<'a> IntoIterator for HolidaySelection<'a> {
    type Item = &'a Holiday;
    type IntoIter = std::vec::IntoIter<&'a Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translations::Names;
    use crate::types::ZonedDate;
    use chrono_tz::Europe::London;

    fn holiday(key: &str, m: u32, d: u32, t: HolidayType) -> Holiday {
        let date = ZonedDate::from_ymd(2022, m, d, London).unwrap();
        Holiday::new(key, Names::new(), date, "en_GB", t).unwrap()
    }

    fn date(m: u32, d: u32) -> Date {
        Date::from_ymd(2022, m, d).unwrap()
    }

    fn sample() -> HolidayCollection {
        let mut c =
            HolidayCollection::new("Test", 2022, London, "en_GB", WeekendType::SaturdaySunday);
        c.add(holiday("christmasDay", 12, 25, HolidayType::Official));
        c.add(holiday("newYearsDay", 1, 1, HolidayType::Bank));
        c.add(holiday("goodFriday", 4, 15, HolidayType::Official));
        c.add(holiday("secondChristmasDay", 12, 26, HolidayType::Bank));
        c
    }

    #[test]
    fn test_add_keeps_chronological_order() {
        let c = sample();
        assert_eq!(
            c.keys(),
            vec!["newYearsDay", "goodFriday", "christmasDay", "secondChristmasDay"]
        );
    }

    #[test]
    fn test_add_replaces_same_key() {
        let mut c = sample();
        c.add(holiday("goodFriday", 4, 14, HolidayType::Observance));
        assert_eq!(c.len(), 4);
        let gf = c.get("goodFriday").unwrap().unwrap();
        assert_eq!(gf.day(), date(4, 14));
        assert_eq!(gf.holiday_type(), HolidayType::Observance);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut c = sample();
        assert!(c.remove("easterMonday").is_none());
        assert_eq!(c.len(), 4);
        assert!(c.remove("goodFriday").is_some());
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_get_blank_key() {
        let c = sample();
        assert!(matches!(c.get(""), Err(AlmanacError::InvalidArgument { .. })));
        assert_eq!(c.get("unknown").unwrap(), None);
        assert_eq!(c.require("unknown").unwrap_err(), AlmanacError::not_found("unknown"));
    }

    #[test]
    fn test_working_day() {
        let c = sample();
        assert!(!c.is_working_day(date(4, 15))); // Good Friday
        assert!(!c.is_working_day(date(4, 16))); // Saturday
        assert!(c.is_working_day(date(4, 19))); // Tuesday
        assert!(c.is_holiday(ZonedDate::from_ymd(2022, 12, 25, chrono_tz::Asia::Tokyo).unwrap()));
    }

    #[test]
    fn test_custom_weekend() {
        let mut c = sample();
        c.set_weekend(WeekendType::FridaySaturday);
        assert!(!c.is_working_day(date(4, 22))); // Friday
        assert!(c.is_working_day(date(4, 24))); // Sunday
    }

    #[test]
    fn test_between() {
        let c = sample();
        let all = c.between(date(1, 1), date(12, 26), true).unwrap();
        assert_eq!(all.len(), 4);
        let inner = c.between(date(1, 1), date(12, 26), false).unwrap();
        assert_eq!(inner.keys(), vec!["goodFriday", "christmasDay"]);
        assert!(matches!(
            c.between(date(12, 26), date(1, 1), true),
            Err(AlmanacError::InvalidArgument { .. })
        ));
        // empty range is allowed
        assert!(c.between(date(5, 1), date(5, 1), false).unwrap().is_empty());
    }

    #[test]
    fn test_on_multiple() {
        let mut c = sample();
        c.add(holiday("bankHoliday", 12, 25, HolidayType::Bank));
        let on = c.on(date(12, 25));
        assert_eq!(on.keys(), vec!["christmasDay", "bankHoliday"]);
        assert!(c.on(date(7, 4)).is_empty());
    }

    #[test]
    fn test_type_filters() {
        let c = sample();
        assert_eq!(c.official().len(), 2);
        assert_eq!(c.bank().keys(), vec!["newYearsDay", "secondChristmasDay"]);
        assert!(c.observance().is_empty());
        assert!(c.seasonal().is_empty());
        assert!(c.other().is_empty());
    }

    #[test]
    fn test_distinct_count_collapses_substitutes() {
        let mut c = sample();
        let christmas = c.require("christmasDay").unwrap().clone();
        c.add(Holiday::substitute(&christmas, christmas.date().add_days(2)));
        assert_eq!(c.len(), 5);
        assert_eq!(c.distinct_count(), 4);
        assert_eq!(c.official().distinct_count(), 2);
        assert_eq!(
            c.substitute_of("christmasDay").map(Holiday::day),
            Some(date(12, 27))
        );
    }
}
