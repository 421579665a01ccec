//! Pairwise scan for single days enclosed by two holidays.

use crate::collection::HolidayCollection;
use crate::types::Date;

/// Iterator over bridge candidates of a collection.
///
/// Consecutive holiday dates (substitutes excluded) that are exactly two days
/// apart enclose one candidate day. A candidate that is itself a holiday of
/// any kind is skipped. Providers apply their own extra conditions, such as
/// excluding Sundays.
///
/// # Example
///
/// ```rust
/// use almanac_core::bridge::bridge_days;
/// use almanac_core::collection::HolidayCollection;
/// use almanac_core::holiday::{Holiday, HolidayType};
/// use almanac_core::translations::Names;
/// use almanac_core::types::{Date, WeekendType, ZonedDate};
/// use chrono_tz::Asia::Tokyo;
///
/// let mut c = HolidayCollection::new("Japan", 2019, Tokyo, "ja", WeekendType::SaturdaySunday);
/// for (key, m, d) in [("showaDay", 4, 29), ("enthronementDay", 5, 1)] {
///     let date = ZonedDate::from_ymd(2019, m, d, Tokyo).unwrap();
///     c.add(Holiday::new(key, Names::new(), date, "ja", HolidayType::Official).unwrap());
/// }
/// let gaps: Vec<Date> = bridge_days(&c).collect();
/// assert_eq!(gaps, vec![Date::from_ymd(2019, 4, 30).unwrap()]);
/// ```
#[derive(Debug, Clone)]
pub struct BridgeDays<'a> {
    collection: &'a HolidayCollection,
    days: Vec<Date>,
    pos: usize,
}

/// Starts a bridge scan over `collection`.
pub fn bridge_days(collection: &HolidayCollection) -> BridgeDays<'_> {
    let mut days: Vec<Date> = collection
        .iter()
        .filter(|h| !h.is_substitute())
        .map(|h| h.day())
        .collect();
    days.dedup();

    BridgeDays {
        collection,
        days,
        pos: 0,
    }
}

impl Iterator for BridgeDays<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while self.pos + 1 < self.days.len() {
            let (prev, next) = (self.days[self.pos], self.days[self.pos + 1]);
            self.pos += 1;

            if prev.days_between(&next) == 2 {
                let gap = prev.add_days(1);
                if !self.collection.is_holiday(gap) {
                    return Some(gap);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{Holiday, HolidayType};
    use crate::translations::Names;
    use crate::types::{WeekendType, ZonedDate};
    use chrono_tz::Asia::Tokyo;

    fn collection(days: &[(u32, u32)]) -> HolidayCollection {
        let mut c = HolidayCollection::new("Japan", 2019, Tokyo, "ja", WeekendType::SaturdaySunday);
        for (i, (m, d)) in days.iter().enumerate() {
            let date = ZonedDate::from_ymd(2019, *m, *d, Tokyo).unwrap();
            let key = format!("h{i}");
            c.add(Holiday::new(key, Names::new(), date, "ja", HolidayType::Official).unwrap());
        }
        c
    }

    fn ymd(m: u32, d: u32) -> Date {
        Date::from_ymd(2019, m, d).unwrap()
    }

    #[test]
    fn test_golden_week_2019() {
        let c = collection(&[(4, 29), (5, 1), (5, 3), (5, 4), (5, 5)]);
        let gaps: Vec<Date> = bridge_days(&c).collect();
        assert_eq!(gaps, vec![ymd(4, 30), ymd(5, 2)]);
    }

    #[test]
    fn test_no_gap() {
        let c = collection(&[(1, 1), (1, 14), (2, 11)]);
        assert_eq!(bridge_days(&c).count(), 0);
        assert_eq!(bridge_days(&collection(&[])).count(), 0);
    }

    #[test]
    fn test_same_day_entries_collapse() {
        let c = collection(&[(9, 21), (9, 21), (9, 23)]);
        assert_eq!(bridge_days(&c).collect::<Vec<_>>(), vec![ymd(9, 22)]);
    }

    #[test]
    fn test_substitute_in_gap_blocks_bridge() {
        let mut c = collection(&[(5, 3), (5, 5)]);
        let original = c.require("h0").unwrap().clone();
        c.add(Holiday::substitute(&original, original.date().add_days(1)));
        assert_eq!(bridge_days(&c).count(), 0);
    }
}
