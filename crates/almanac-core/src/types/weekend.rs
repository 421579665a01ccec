//! Weekend definitions.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Which days of the week a provider treats as the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendType {
    /// Saturday and Sunday (most countries)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (parts of the Middle East)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Sunday only
    SundayOnly,
    /// No weekend days
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            WeekendType::SundayOnly => matches!(weekday, Weekday::Sun),
            WeekendType::None => false,
        }
    }

    /// The weekend days, Sunday-first.
    pub fn days(&self) -> Vec<Weekday> {
        [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
        .into_iter()
        .filter(|&d| self.is_weekend(d))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_sets() {
        assert!(WeekendType::SaturdaySunday.is_weekend(Weekday::Sun));
        assert!(!WeekendType::SaturdaySunday.is_weekend(Weekday::Fri));
        assert!(WeekendType::FridaySaturday.is_weekend(Weekday::Fri));
        assert!(!WeekendType::FridaySaturday.is_weekend(Weekday::Sun));
        assert_eq!(WeekendType::ThursdayFriday.days(), vec![Weekday::Thu, Weekday::Fri]);
        assert_eq!(WeekendType::SundayOnly.days(), vec![Weekday::Sun]);
        assert!(WeekendType::None.days().is_empty());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WeekendType::FridaySaturday).unwrap();
        assert_eq!(json, "\"friday_saturday\"");
    }
}
