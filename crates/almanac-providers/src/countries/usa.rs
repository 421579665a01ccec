//! United States of America (federal holidays).

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use almanac_core::substitution::{ShiftRule, SubstitutionPolicy};
use chrono::Weekday;
use tracing::debug;

use crate::provider::{Provider, ProviderContext};
use crate::{christian, common};

/// Federal holidays observed on the nearest weekday.
const NEAREST_WEEKDAY_OBSERVED: &[&str] =
    &["independenceDay", "veteransDay", "christmasDay", "juneteenth"];

/// US federal holidays.
///
/// ## Holidays
///
/// - New Year's Day (observed Monday when on a Sunday)
/// - Martin Luther King Jr. Day (3rd Monday in January, since 1986)
/// - Washington's Birthday (3rd Monday in February since 1971, Feb 22 before)
/// - Memorial Day (last Monday in May since 1968, May 30 before)
/// - Juneteenth (June 19, since 2021)
/// - Independence Day (July 4)
/// - Labor Day (1st Monday in September, since 1887)
/// - Columbus Day (2nd Monday in October since 1970, Oct 12 from 1937)
/// - Veterans Day (November 11, since 1919 as Armistice Day)
/// - Thanksgiving Day (4th Thursday in November, since 1863)
/// - Christmas Day
///
/// Independence Day, Veterans Day, Juneteenth and Christmas are observed on
/// the Friday before when on a Saturday and the Monday after when on a
/// Sunday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usa;

impl Usa {
    fn observed(holidays: &mut HolidayCollection) -> AlmanacResult<()> {
        SubstitutionPolicy::new([Weekday::Sun], ShiftRule::FixedDays(1))
            .apply_to(holidays, &["newYearsDay"])?;
        SubstitutionPolicy::new([Weekday::Sat], ShiftRule::FixedDays(-1))
            .apply_to(holidays, NEAREST_WEEKDAY_OBSERVED)?;
        SubstitutionPolicy::new([Weekday::Sun], ShiftRule::FixedDays(1))
            .apply_to(holidays, NEAREST_WEEKDAY_OBSERVED)?;
        Ok(())
    }
}

impl Provider for Usa {
    fn id(&self) -> &'static str {
        "USA"
    }

    fn iso_code(&self) -> &'static str {
        "US"
    }

    fn timezone(&self) -> &'static str {
        "America/New_York"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let year = ctx.year();
        let mut holidays = ctx.collection(self);
        if year < 1776 {
            return Ok(holidays);
        }
        let official = HolidayType::Official;

        holidays.add(common::new_years_day(ctx, official)?);
        holidays.add(christian::christmas_day(ctx, official)?);
        holidays.add(ctx.fixed(
            "independenceDay",
            7,
            4,
            &[("en", "Independence Day")],
            official,
        )?);

        if year >= 1986 {
            let date = ctx.nth_weekday(1, Weekday::Mon, 3)?;
            holidays.add(ctx.holiday(
                "martinLutherKingDay",
                date,
                &[("en", "Dr. Martin Luther King Jr's Birthday")],
                official,
            )?);
        }

        if year >= 1879 {
            let date = if year >= 1971 {
                ctx.nth_weekday(2, Weekday::Mon, 3)?
            } else {
                ctx.date(2, 22)?
            };
            holidays.add(ctx.holiday(
                "washingtonsBirthday",
                date,
                &[("en", "Washington's Birthday")],
                official,
            )?);
        }

        if year >= 1865 {
            let date = if year >= 1968 {
                ctx.last_weekday(5, Weekday::Mon)?
            } else {
                ctx.date(5, 30)?
            };
            holidays.add(ctx.holiday("memorialDay", date, &[("en", "Memorial Day")], official)?);
        }

        if year >= 2021 {
            holidays.add(ctx.fixed(
                "juneteenth",
                6,
                19,
                &[("en", "Juneteenth National Independence Day")],
                official,
            )?);
        }

        if year >= 1887 {
            let date = ctx.nth_weekday(9, Weekday::Mon, 1)?;
            holidays.add(ctx.holiday("labourDay", date, &[("en", "Labor Day")], official)?);
        }

        if year >= 1937 {
            let date = if year >= 1970 {
                ctx.nth_weekday(10, Weekday::Mon, 2)?
            } else {
                ctx.date(10, 12)?
            };
            holidays.add(ctx.holiday("columbusDay", date, &[("en", "Columbus Day")], official)?);
        }

        if year >= 1919 {
            let name = if year >= 1954 { "Veterans Day" } else { "Armistice Day" };
            holidays.add(ctx.fixed("veteransDay", 11, 11, &[("en", name)], official)?);
        }

        if year >= 1863 {
            let date = ctx.nth_weekday(11, Weekday::Thu, 4)?;
            holidays.add(ctx.holiday(
                "thanksgivingDay",
                date,
                &[("en", "Thanksgiving Day")],
                official,
            )?);
        }

        Self::observed(&mut holidays)?;

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}
