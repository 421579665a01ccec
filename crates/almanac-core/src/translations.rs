//! Localized holiday names.
//!
//! Loading translation files is left to callers. This module only defines
//! the table shape (`key → locale → name`) and ships names for the holiday
//! keys shared between providers.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

/// Localized names of one holiday, keyed by locale tag.
pub type Names = BTreeMap<String, String>;

static BUILTIN: Lazy<Translations> = Lazy::new(|| {
    let mut t = Translations::new();
    for (key, entries) in BUILTIN_NAMES {
        for (locale, name) in *entries {
            t.insert(key, locale, name);
        }
    }
    t
});

/// A table of localized holiday names.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    names: HashMap<String, Names>,
}

impl Translations {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in names for shared holiday keys.
    pub fn builtin() -> &'static Translations {
        &BUILTIN
    }

    /// Adds or replaces one name.
    pub fn insert(&mut self, key: &str, locale: &str, name: &str) {
        self.names
            .entry(key.to_string())
            .or_default()
            .insert(locale.to_string(), name.to_string());
    }

    /// All names recorded for a key.
    pub fn lookup(&self, key: &str) -> Option<&Names> {
        self.names.get(key)
    }

    /// Merges another table into this one; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Translations) {
        for (key, names) in &other.names {
            let entry = self.names.entry(key.clone()).or_default();
            for (locale, name) in names {
                entry.insert(locale.clone(), name.clone());
            }
        }
    }

    /// Names for a key with provider-specific names layered on top.
    pub fn names_for(&self, key: &str, overrides: &[(&str, &str)]) -> Names {
        let mut names = self.lookup(key).cloned().unwrap_or_default();
        for (locale, name) in overrides {
            names.insert((*locale).to_string(), (*name).to_string());
        }
        names
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

type Entry = (&'static str, &'static [(&'static str, &'static str)]);

const BUILTIN_NAMES: &[Entry] = &[
    (
        "newYearsDay",
        &[
            ("en", "New Year's Day"),
            ("de", "Neujahr"),
            ("es", "Año Nuevo"),
            ("el", "Πρωτοχρονιά"),
            ("ja", "元日"),
            ("fr", "Jour de l'An"),
            ("nl", "Nieuwjaarsdag"),
        ],
    ),
    (
        "epiphany",
        &[
            ("en", "Epiphany"),
            ("de", "Heilige Drei Könige"),
            ("es", "Día de Reyes"),
            ("el", "Θεοφάνια"),
        ],
    ),
    (
        "carnivalMonday",
        &[
            ("en", "Carnival Monday"),
            ("de", "Rosenmontag"),
            ("es", "Lunes de Carnaval"),
        ],
    ),
    (
        "carnivalTuesday",
        &[
            ("en", "Carnival Tuesday"),
            ("de", "Faschingsdienstag"),
            ("es", "Martes de Carnaval"),
        ],
    ),
    (
        "goodFriday",
        &[
            ("en", "Good Friday"),
            ("de", "Karfreitag"),
            ("es", "Viernes Santo"),
            ("el", "Μεγάλη Παρασκευή"),
        ],
    ),
    (
        "easter",
        &[
            ("en", "Easter Sunday"),
            ("de", "Ostersonntag"),
            ("es", "Domingo de Pascua"),
            ("el", "Κυριακή του Πάσχα"),
        ],
    ),
    (
        "easterMonday",
        &[
            ("en", "Easter Monday"),
            ("de", "Ostermontag"),
            ("es", "Lunes de Pascua"),
            ("el", "Δευτέρα του Πάσχα"),
        ],
    ),
    (
        "ascensionDay",
        &[
            ("en", "Ascension Day"),
            ("de", "Christi Himmelfahrt"),
            ("es", "Ascensión"),
        ],
    ),
    (
        "pentecost",
        &[
            ("en", "Whitsunday"),
            ("de", "Pfingstsonntag"),
            ("es", "Pentecostés"),
            ("el", "Πεντηκοστή"),
        ],
    ),
    (
        "pentecostMonday",
        &[
            ("en", "Whit Monday"),
            ("de", "Pfingstmontag"),
            ("es", "Lunes de Pentecostés"),
            ("el", "Αγίου Πνεύματος"),
        ],
    ),
    (
        "corpusChristi",
        &[
            ("en", "Corpus Christi"),
            ("de", "Fronleichnam"),
            ("es", "Corpus Christi"),
        ],
    ),
    (
        "assumptionOfMary",
        &[
            ("en", "Assumption of Mary"),
            ("de", "Mariä Himmelfahrt"),
            ("es", "Asunción de la Virgen"),
            ("el", "Κοίμηση της Θεοτόκου"),
        ],
    ),
    ("reformationDay", &[("en", "Reformation Day"), ("de", "Reformationstag")]),
    (
        "allSaintsDay",
        &[
            ("en", "All Saints' Day"),
            ("de", "Allerheiligen"),
            ("es", "Todos los Santos"),
        ],
    ),
    (
        "immaculateConception",
        &[
            ("en", "Immaculate Conception"),
            ("de", "Mariä Empfängnis"),
            ("es", "Inmaculada Concepción"),
        ],
    ),
    (
        "christmasDay",
        &[
            ("en", "Christmas"),
            ("en_GB", "Christmas Day"),
            ("de", "1. Weihnachtsfeiertag"),
            ("es", "Navidad"),
            ("el", "Χριστούγεννα"),
        ],
    ),
    (
        "secondChristmasDay",
        &[
            ("en", "Second Christmas Day"),
            ("en_GB", "Boxing Day"),
            ("de", "2. Weihnachtsfeiertag"),
            ("el", "Σύναξη της Θεοτόκου"),
        ],
    ),
    (
        "internationalWorkersDay",
        &[
            ("en", "International Workers' Day"),
            ("en_US", "International Workers' Day"),
            ("de", "Tag der Arbeit"),
            ("es", "Día del Trabajador"),
            ("el", "Εργατική Πρωτομαγιά"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_shared_keys() {
        let t = Translations::builtin();
        let names = t.lookup("goodFriday").unwrap();
        assert_eq!(names.get("de").map(String::as_str), Some("Karfreitag"));
        assert!(t.lookup("independenceDay").is_none());
    }

    #[test]
    fn test_names_for_layers_overrides() {
        let t = Translations::builtin();
        let names = t.names_for("christmasDay", &[("es_AR", "Navidad (AR)")]);
        assert_eq!(names.get("es_AR").map(String::as_str), Some("Navidad (AR)"));
        assert_eq!(names.get("en").map(String::as_str), Some("Christmas"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Translations::new();
        base.insert("flagDay", "en", "Flag Day");
        let mut other = Translations::new();
        other.insert("flagDay", "en", "National Flag Day");
        other.insert("flagDay", "es", "Día de la Bandera");
        base.merge(&other);
        let names = base.lookup("flagDay").unwrap();
        assert_eq!(names["en"], "National Flag Day");
        assert_eq!(names.len(), 2);
    }
}
