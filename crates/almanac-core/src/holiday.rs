//! The holiday value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AlmanacError, AlmanacResult};
use crate::locale;
use crate::translations::Names;
use crate::types::{Date, ZonedDate};

/// Prefix of the key given to substitute holidays.
pub const SUBSTITUTE_PREFIX: &str = "substituteHoliday:";

/// Legal or cultural weight of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// Public holiday established by law; offices and schools close.
    #[default]
    Official,
    /// Commemorated but not a day off.
    Observance,
    /// Astronomical or seasonal marker (solstices, equinoxes).
    Season,
    /// Day off for banks and, often, most businesses.
    Bank,
    /// Anything else (regional or religious days without legal status).
    Other,
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HolidayType::Official => "Official",
            HolidayType::Observance => "Observance",
            HolidayType::Season => "Season",
            HolidayType::Bank => "Bank",
            HolidayType::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// One concrete holiday occurrence.
///
/// Holidays are immutable; a collection replaces an entry to change it.
///
/// # Example
///
/// ```rust
/// use almanac_core::holiday::{Holiday, HolidayType};
/// use almanac_core::types::ZonedDate;
/// use almanac_core::translations::Names;
/// use chrono_tz::America::Argentina::Buenos_Aires;
///
/// let date = ZonedDate::from_ymd(2024, 7, 9, Buenos_Aires).unwrap();
/// let mut names = Names::new();
/// names.insert("es".into(), "Día de la Independencia".into());
/// let h = Holiday::new("independenceDay", names, date, "es_AR", HolidayType::Official).unwrap();
/// assert_eq!(h.name(), "Día de la Independencia");
/// assert_eq!(h.name_in("fr"), "Independence Day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    key: String,
    names: Names,
    date: ZonedDate,
    #[serde(rename = "type")]
    holiday_type: HolidayType,
    display_locale: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    substituted_key: Option<String>,
}

impl Holiday {
    /// Creates a holiday.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` for a blank key and
    /// `AlmanacError::UnknownLocale` for an unsupported display locale.
    pub fn new(
        key: impl Into<String>,
        names: Names,
        date: ZonedDate,
        display_locale: &str,
        holiday_type: HolidayType,
    ) -> AlmanacResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AlmanacError::invalid_argument("holiday key must not be blank"));
        }
        locale::ensure_supported(display_locale)?;

        Ok(Self {
            key,
            names,
            date,
            holiday_type,
            display_locale: display_locale.to_string(),
            substituted_key: None,
        })
    }

    /// Creates the substitute of `original` on `date`.
    ///
    /// The key is `substituteHoliday:<original key>` and every name of the
    /// original is wrapped in that language's substitute pattern.
    pub fn substitute(original: &Holiday, date: ZonedDate) -> Self {
        let mut names = Names::new();
        for (tag, name) in &original.names {
            names.insert(
                tag.clone(),
                locale::substitute_pattern(tag).replace("{0}", name),
            );
        }
        if names.is_empty() {
            names.insert(
                "en".to_string(),
                locale::substitute_pattern("en").replace("{0}", &original.name_in("en")),
            );
        }

        Self {
            key: format!("{SUBSTITUTE_PREFIX}{}", original.key),
            names,
            date,
            holiday_type: original.holiday_type,
            display_locale: original.display_locale.clone(),
            substituted_key: Some(original.key.clone()),
        }
    }

    /// Returns a copy moved to another date.
    #[must_use]
    pub fn with_date(&self, date: ZonedDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// The unique key within a collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All localized names.
    pub fn names(&self) -> &Names {
        &self.names
    }

    /// The zoned date.
    pub fn date(&self) -> ZonedDate {
        self.date
    }

    /// The calendar day.
    pub fn day(&self) -> Date {
        self.date.date()
    }

    /// The holiday type.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// The locale used by [`name`](Self::name).
    pub fn display_locale(&self) -> &str {
        &self.display_locale
    }

    /// Key of the holiday this one substitutes, if it is a substitute.
    pub fn substituted_key(&self) -> Option<&str> {
        self.substituted_key.as_deref()
    }

    /// Returns true for substitute holidays.
    pub fn is_substitute(&self) -> bool {
        self.substituted_key.is_some()
    }

    /// Key of the underlying holiday: the substituted key for substitutes,
    /// the own key otherwise.
    pub fn base_key(&self) -> &str {
        self.substituted_key.as_deref().unwrap_or(&self.key)
    }

    /// Name in the display locale.
    pub fn name(&self) -> String {
        self.name_in(&self.display_locale)
    }

    /// Name in `locale`, falling back through the language and English,
    /// and finally to a name derived from the key.
    pub fn name_in(&self, locale: &str) -> String {
        locale::fallback_chain(locale)
            .into_iter()
            .find_map(|tag| self.names.get(tag))
            .cloned()
            .unwrap_or_else(|| locale::default_name(&self.key))
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date.date(), self.name(), self.holiday_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::London;

    fn names(entries: &[(&str, &str)]) -> Names {
        entries
            .iter()
            .map(|(l, n)| (l.to_string(), n.to_string()))
            .collect()
    }

    fn christmas() -> Holiday {
        Holiday::new(
            "christmasDay",
            names(&[("en", "Christmas"), ("en_GB", "Christmas Day")]),
            ZonedDate::from_ymd(2022, 12, 25, London).unwrap(),
            "en_GB",
            HolidayType::Official,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_key_rejected() {
        let date = ZonedDate::from_ymd(2022, 1, 1, London).unwrap();
        let err = Holiday::new("  ", Names::new(), date, "en", HolidayType::Bank).unwrap_err();
        assert!(matches!(err, AlmanacError::InvalidArgument { .. }));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let date = ZonedDate::from_ymd(2022, 1, 1, London).unwrap();
        let err = Holiday::new("x", Names::new(), date, "zz_ZZ", HolidayType::Bank).unwrap_err();
        assert_eq!(err, AlmanacError::unknown_locale("zz_ZZ"));
    }

    #[test]
    fn test_name_fallback() {
        let h = christmas();
        assert_eq!(h.name(), "Christmas Day");
        assert_eq!(h.name_in("en_US"), "Christmas");
        assert_eq!(h.name_in("de"), "Christmas");

        let date = ZonedDate::from_ymd(2022, 6, 3, London).unwrap();
        let key = "platinumJubileeBankHoliday";
        let bare = Holiday::new(key, Names::new(), date, "en", HolidayType::Bank).unwrap();
        assert_eq!(bare.name(), "Platinum Jubilee Bank Holiday");
    }

    #[test]
    fn test_substitute_links_original() {
        let original = christmas();
        let sub = Holiday::substitute(&original, original.date().add_days(2));
        assert_eq!(sub.key(), "substituteHoliday:christmasDay");
        assert_eq!(sub.substituted_key(), Some("christmasDay"));
        assert_eq!(sub.base_key(), "christmasDay");
        assert_eq!(sub.day().to_string(), "2022-12-27");
        assert_eq!(sub.name(), "Christmas Day observed");
        assert_eq!(sub.holiday_type(), HolidayType::Official);
        assert!(!original.is_substitute());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(christmas()).unwrap();
        assert_eq!(json["key"], "christmasDay");
        assert_eq!(json["type"], "official");
        assert_eq!(json["date"]["date"], "2022-12-25");
        assert!(json.get("substituted_key").is_none());
    }
}
