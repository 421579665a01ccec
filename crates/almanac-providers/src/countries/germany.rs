//! Germany.

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use tracing::debug;

use crate::provider::{Provider, ProviderContext};
use crate::{christian, common};

/// German nationwide holidays.
///
/// ## Holidays
///
/// - New Year's Day, Good Friday, Easter Monday
/// - Labour Day (since 1933), Ascension Day, Whit Monday
/// - German Unity Day (October 3, since 1990)
/// - Christmas Day and Boxing Day
///
/// Easter Sunday and Whitsunday are listed as observances. Reformation Day
/// was a nationwide holiday once, in 2017.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl Provider for Germany {
    fn id(&self) -> &'static str {
        "Germany"
    }

    fn iso_code(&self) -> &'static str {
        "DE"
    }

    fn timezone(&self) -> &'static str {
        "Europe/Berlin"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let year = ctx.year();
        let mut holidays = ctx.collection(self);

        holidays.add(common::new_years_day(ctx, HolidayType::Official)?);
        holidays.add(christian::good_friday(ctx, HolidayType::Official)?);
        holidays.add(christian::easter(ctx, HolidayType::Observance)?);
        holidays.add(christian::easter_monday(ctx, HolidayType::Official)?);
        holidays.add(christian::ascension_day(ctx, HolidayType::Official)?);
        holidays.add(christian::pentecost(ctx, HolidayType::Observance)?);
        holidays.add(christian::pentecost_monday(ctx, HolidayType::Official)?);
        holidays.add(christian::christmas_day(ctx, HolidayType::Official)?);
        holidays.add(christian::second_christmas_day(ctx, HolidayType::Official)?);

        if year >= 1933 {
            holidays.add(common::international_workers_day(ctx, HolidayType::Official)?);
        }
        if year >= 1990 {
            holidays.add(ctx.fixed(
                "germanUnityDay",
                10,
                3,
                &[("en", "Day of German Unity"), ("de", "Tag der Deutschen Einheit")],
                HolidayType::Official,
            )?);
        }
        if year == 2017 {
            holidays.add(christian::reformation_day(ctx, HolidayType::Official)?);
        }

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}
