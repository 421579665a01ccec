//! Argentina.

use almanac_core::arithmetic::{next_weekday, previous_weekday};
use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use almanac_core::types::ZonedDate;
use chrono::Weekday;
use tracing::debug;

use crate::provider::{Provider, ProviderContext};
use crate::{christian, common};

/// Year from which the movable holidays follow the Monday rule.
const MOVABLE_HOLIDAYS_SINCE: i32 = 2017;

/// Argentine national holidays.
///
/// ## Holidays
///
/// - New Year's Day, Carnival Monday and Tuesday
/// - Day of Remembrance for Truth and Justice (March 24, since 2006)
/// - Malvinas Day (April 2, since 1982), Good Friday
/// - Labour Day, May Revolution (May 25, since 1810)
/// - Güemes Day (June 17, since 2016), Flag Day (June 20, since 1938)
/// - Independence Day (July 9, since 1816)
/// - San Martín Day (August 17, since 1850)
/// - Day of Respect for Cultural Diversity (October 12, since 1917)
/// - National Sovereignty Day (November 20, since 2010)
/// - Immaculate Conception, Christmas
///
/// Since 2017 the Güemes, San Martín, cultural diversity and sovereignty
/// days move to the Monday before when they fall on a Tuesday or Wednesday,
/// and to the Monday after when they fall on a Thursday or Friday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argentina;

/// Applies the Monday rule for movable holidays.
fn movable(date: ZonedDate) -> ZonedDate {
    match date.weekday() {
        Weekday::Tue | Weekday::Wed => previous_weekday(date, Weekday::Mon),
        Weekday::Thu | Weekday::Fri => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

impl Argentina {
    fn movable_holiday(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
        key: &str,
        month: u32,
        day: u32,
        names: &[(&str, &str)],
    ) -> AlmanacResult<()> {
        let mut date = ctx.date(month, day)?;
        if ctx.year() >= MOVABLE_HOLIDAYS_SINCE {
            date = movable(date);
        }
        holidays.add(ctx.holiday(key, date, names, HolidayType::Official)?);
        Ok(())
    }
}

impl Provider for Argentina {
    fn id(&self) -> &'static str {
        "Argentina"
    }

    fn iso_code(&self) -> &'static str {
        "AR"
    }

    fn timezone(&self) -> &'static str {
        "America/Argentina/Buenos_Aires"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let year = ctx.year();
        let mut holidays = ctx.collection(self);

        holidays.add(common::new_years_day(ctx, HolidayType::Official)?);
        holidays.add(christian::carnival_monday(ctx, HolidayType::Official)?);
        holidays.add(christian::carnival_tuesday(ctx, HolidayType::Official)?);
        holidays.add(christian::good_friday(ctx, HolidayType::Official)?);
        holidays.add(common::international_workers_day(ctx, HolidayType::Official)?);
        holidays.add(christian::christmas_day(ctx, HolidayType::Official)?);

        if year >= 2006 {
            holidays.add(ctx.fixed(
                "remembranceDay",
                3,
                24,
                &[
                    ("en", "Day of Remembrance for Truth and Justice"),
                    ("es", "Día Nacional de la Memoria por la Verdad y la Justicia"),
                ],
                HolidayType::Official,
            )?);
        }

        if year >= 1982 {
            holidays.add(ctx.fixed(
                "malvinasDay",
                4,
                2,
                &[
                    ("en", "Day of the Veterans and Fallen of the Malvinas War"),
                    ("es", "Día del Veterano y de los Caídos en la Guerra de Malvinas"),
                ],
                HolidayType::Official,
            )?);
        }

        if year >= 1810 {
            holidays.add(ctx.fixed(
                "mayRevolution",
                5,
                25,
                &[("en", "May Revolution"), ("es", "Día de la Revolución de Mayo")],
                HolidayType::Official,
            )?);
        }

        if year >= 2016 {
            Self::movable_holiday(
                ctx,
                &mut holidays,
                "generalMartinMiguelDeGuemesDay",
                6,
                17,
                &[
                    ("en", "Anniversary of the Passing of General Martín Miguel de Güemes"),
                    ("es", "Paso a la Inmortalidad del General Martín Miguel de Güemes"),
                ],
            )?;
        }

        if year >= 1938 {
            holidays.add(ctx.fixed(
                "flagDay",
                6,
                20,
                &[
                    ("en", "General Manuel Belgrano Memorial Day"),
                    ("es", "Paso a la Inmortalidad del General Manuel Belgrano"),
                ],
                HolidayType::Official,
            )?);
        }

        if year >= 1816 {
            holidays.add(ctx.fixed(
                "independenceDay",
                7,
                9,
                &[("en", "Independence Day"), ("es", "Día de la Independencia")],
                HolidayType::Official,
            )?);
        }

        if year >= 1850 {
            Self::movable_holiday(
                ctx,
                &mut holidays,
                "generalJoseSanMartinDay",
                8,
                17,
                &[
                    ("en", "General José de San Martín Memorial Day"),
                    ("es", "Paso a la Inmortalidad del General José de San Martín"),
                ],
            )?;
        }

        if year >= 1917 {
            Self::movable_holiday(
                ctx,
                &mut holidays,
                "raceDay",
                10,
                12,
                &[
                    ("en", "Day of Respect for Cultural Diversity"),
                    ("es", "Día del Respeto a la Diversidad Cultural"),
                ],
            )?;
        }

        if year >= 2010 {
            Self::movable_holiday(
                ctx,
                &mut holidays,
                "nationalSovereigntyDay",
                11,
                20,
                &[("en", "National Sovereignty Day"), ("es", "Día de la Soberanía Nacional")],
            )?;
        }

        if year >= 1900 {
            holidays.add(christian::immaculate_conception(ctx, HolidayType::Official)?);
        }

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}
