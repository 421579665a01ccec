//! Greece.

use almanac_core::collection::HolidayCollection;
use almanac_core::easter::{EasterCalendar, MovableFeast};
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use tracing::debug;

use crate::provider::{Provider, ProviderContext};
use crate::{christian, common};

/// Greek holidays. Movable feasts follow the Orthodox Easter.
///
/// ## Holidays
///
/// - New Year's Day, Epiphany, Clean Monday
/// - Independence Day / Annunciation (March 25, since 1838)
/// - Good Friday, Easter Sunday, Easter Monday, Whit Monday
/// - Labour Day, Assumption of Mary
/// - Ohi Day (October 28, since 1940)
/// - Christmas Day, Synaxis of the Theotokos (December 26)
///
/// The Three Holy Hierarchs (January 30) and Polytechnic uprising day
/// (November 17, since 1974) are school holidays, typed `Other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greece;

impl Provider for Greece {
    fn id(&self) -> &'static str {
        "Greece"
    }

    fn iso_code(&self) -> &'static str {
        "GR"
    }

    fn timezone(&self) -> &'static str {
        "Europe/Athens"
    }

    fn easter_calendar(&self) -> EasterCalendar {
        EasterCalendar::Orthodox
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let ctx = &ctx.with_calendar(EasterCalendar::Orthodox);
        let year = ctx.year();
        let mut holidays = ctx.collection(self);

        holidays.add(common::new_years_day(ctx, HolidayType::Official)?);
        holidays.add(christian::epiphany(ctx, HolidayType::Official)?);
        holidays.add(ctx.feast(
            "cleanMonday",
            MovableFeast::CarnivalMonday,
            &[("en", "Clean Monday"), ("el", "Καθαρά Δευτέρα")],
            HolidayType::Official,
        )?);
        holidays.add(christian::good_friday(ctx, HolidayType::Official)?);
        holidays.add(christian::easter(ctx, HolidayType::Official)?);
        holidays.add(christian::easter_monday(ctx, HolidayType::Official)?);
        holidays.add(common::international_workers_day(ctx, HolidayType::Official)?);
        holidays.add(christian::pentecost_monday(ctx, HolidayType::Official)?);
        holidays.add(christian::assumption_of_mary(ctx, HolidayType::Official)?);
        holidays.add(christian::christmas_day(ctx, HolidayType::Official)?);
        holidays.add(christian::second_christmas_day(ctx, HolidayType::Official)?);
        holidays.add(ctx.fixed(
            "threeHolyHierarchs",
            1,
            30,
            &[("en", "The Three Holy Hierarchs"), ("el", "Τριών Ιεραρχών")],
            HolidayType::Other,
        )?);

        if year >= 1838 {
            holidays.add(ctx.fixed(
                "independenceDay",
                3,
                25,
                &[("en", "Independence Day"), ("el", "Εικοστή Πέμπτη Μαρτίου")],
                HolidayType::Official,
            )?);
        }
        if year >= 1940 {
            holidays.add(ctx.fixed(
                "ohiDay",
                10,
                28,
                &[("en", "Ohi Day"), ("el", "Επέτειος του Όχι")],
                HolidayType::Official,
            )?);
        }
        if year >= 1974 {
            holidays.add(ctx.fixed(
                "polytechnio",
                11,
                17,
                &[("en", "Polytechnic"), ("el", "Πολυτεχνείο")],
                HolidayType::Other,
            )?);
        }

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::easter::FeastCalculator;
    use almanac_core::translations::Translations;
    use almanac_core::types::Date;
    use chrono_tz::Europe::Athens;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_orthodox_feasts_2024() {
        let feasts = FeastCalculator::new();
        // a Gregorian context is switched to the Orthodox computus
        let ctx = ProviderContext::new(2024, "el", Athens, Translations::builtin(), &feasts);
        let c = Greece.compute(&ctx).unwrap();

        assert_eq!(c.require("easter").unwrap().day(), ymd(2024, 5, 5));
        assert_eq!(c.require("goodFriday").unwrap().day(), ymd(2024, 5, 3));
        assert_eq!(c.require("cleanMonday").unwrap().day(), ymd(2024, 3, 18));
        assert_eq!(c.require("pentecostMonday").unwrap().day(), ymd(2024, 6, 24));
        assert_eq!(c.require("ohiDay").unwrap().name(), "Επέτειος του Όχι");
        assert_eq!(c.other().len(), 2);
    }

    #[test]
    fn test_easter_coincides_2025() {
        let feasts = FeastCalculator::new();
        let ctx = ProviderContext::new(2025, "en", Athens, Translations::builtin(), &feasts);
        let c = Greece.compute(&ctx).unwrap();
        assert_eq!(c.require("easter").unwrap().day(), ymd(2025, 4, 20));
        assert!(!c.contains("substituteHoliday:easter"));
    }
}
