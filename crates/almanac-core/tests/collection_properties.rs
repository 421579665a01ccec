//! Property-based tests for holiday collection invariants.
//!
//! - Iteration is chronological
//! - Keys are unique
//! - Working days are exactly the non-holiday, non-weekend days
//! - Range filters honour their bounds
//! - Substitutes never land on another holiday when skipping forward

use almanac_core::prelude::*;
use chrono::Weekday;
use chrono_tz::Europe::Berlin;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// (key index, day of year) pairs; key indices repeat on purpose.
fn entries() -> impl Strategy<Value = Vec<(u8, u32)>> {
    prop::collection::vec((0u8..40, 1u32..=365), 0..60)
}

fn build(entries: &[(u8, u32)]) -> HolidayCollection {
    let mut c = HolidayCollection::new("Prop", 2023, Berlin, "de", WeekendType::SaturdaySunday);
    for (key, ordinal) in entries {
        let date = Date::from_ymd(2023, 1, 1).unwrap().add_days(i64::from(*ordinal) - 1);
        let holiday = Holiday::new(
            format!("holiday{key}"),
            Names::new(),
            ZonedDate::new(date, Berlin),
            "de",
            HolidayType::Official,
        )
        .unwrap();
        c.add(holiday);
    }
    c
}

fn day(ordinal: u32) -> Date {
    Date::from_ymd(2023, 1, 1).unwrap().add_days(i64::from(ordinal) - 1)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn iteration_is_chronological(entries in entries()) {
        let c = build(&entries);
        let dates = c.dates();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn keys_are_unique(entries in entries()) {
        let c = build(&entries);
        let mut keys = c.keys();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    #[test]
    fn last_insert_wins(entries in entries()) {
        let c = build(&entries);
        for (key, _) in &entries {
            let last = entries.iter().rev().find(|(k, _)| k == key).map(|(_, o)| *o);
            let found = c.require(&format!("holiday{key}")).unwrap();
            prop_assert_eq!(Some(found.day()), last.map(day));
        }
    }

    #[test]
    fn working_day_rule(entries in entries(), probe in 1u32..=365) {
        let c = build(&entries);
        let d = day(probe);
        let weekend = matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        prop_assert_eq!(c.is_working_day(d), !c.is_holiday(d) && !weekend);
    }

    #[test]
    fn between_honours_bounds(
        entries in entries(),
        a in 1u32..=365,
        b in 1u32..=365,
        inclusive in any::<bool>()
    ) {
        let c = build(&entries);
        let (start, end) = (day(a.min(b)), day(a.max(b)));
        let selected = c.between(start, end, inclusive).unwrap();
        for h in selected.iter() {
            if inclusive {
                prop_assert!(start <= h.day() && h.day() <= end);
            } else {
                prop_assert!(start < h.day() && h.day() < end);
            }
        }
        let expected = c
            .iter()
            .filter(|h| {
                if inclusive {
                    start <= h.day() && h.day() <= end
                } else {
                    start < h.day() && h.day() < end
                }
            })
            .count();
        prop_assert_eq!(selected.len(), expected);
    }

    #[test]
    fn inverted_range_is_rejected(a in 1u32..=364, delta in 1u32..30) {
        let c = build(&[]);
        let start = day((a + delta).min(365));
        let end = day(a);
        prop_assume!(start > end);
        let rejected = matches!(
            c.between(start, end, true),
            Err(AlmanacError::InvalidArgument { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn skip_forward_substitutes_never_collide(entries in entries()) {
        let mut c = build(&entries);
        let policy = SubstitutionPolicy::new([Weekday::Sun], ShiftRule::FixedDays(1))
            .with_collision(CollisionRule::SkipForward);
        policy.apply(&mut c).unwrap();

        for sub in c.iter().filter(|h| h.is_substitute()) {
            prop_assert_eq!(c.on(sub.day()).len(), 1);
            let original = c.require(sub.base_key()).unwrap();
            prop_assert_eq!(original.date().weekday(), Weekday::Sun);
            prop_assert!(sub.day() > original.day());
        }
        let sundays = c
            .iter()
            .filter(|h| !h.is_substitute() && h.date().weekday() == Weekday::Sun)
            .count();
        prop_assert_eq!(c.len() - c.distinct_count(), sundays);
    }
}
