//! United Kingdom, Scotland.

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::{Holiday, HolidayType, SUBSTITUTE_PREFIX};
use almanac_core::substitution::{ShiftRule, SubstitutionPolicy};
use almanac_core::types::Date;
use chrono::Weekday;
use tracing::debug;

use super::united_kingdom::{UnitedKingdom, BANK_HOLIDAYS_SINCE};
use crate::provider::{Provider, ProviderContext};

/// Scottish bank holidays.
///
/// Starts from the England and Wales holidays, then:
///
/// - drops Easter Monday
/// - moves the Summer Bank Holiday to the 1st Monday in August
/// - adds January 2; both New Year days move two days on if on a weekend
/// - adds St Andrew's Day (since 2007, next Monday if on a weekend)
#[derive(Debug, Clone, Copy, Default)]
pub struct Scotland;

impl Scotland {
    fn new_year(ctx: &ProviderContext<'_>, holidays: &mut HolidayCollection) -> AlmanacResult<()> {
        holidays.remove(&format!("{SUBSTITUTE_PREFIX}newYearsDay"));
        if ctx.year() < BANK_HOLIDAYS_SINCE {
            return Ok(());
        }

        if !holidays.contains("newYearsDay") {
            holidays.add(crate::common::new_years_day(ctx, HolidayType::Bank)?);
        }
        holidays.add(ctx.fixed(
            "secondNewYearsDay",
            1,
            2,
            &[("en", "2nd January"), ("gd", "Dàrna latha na bliadhna")],
            HolidayType::Bank,
        )?);

        if ctx.year() >= 1974 {
            SubstitutionPolicy::new([Weekday::Sat, Weekday::Sun], ShiftRule::FixedDays(2))
                .apply_to(holidays, &["newYearsDay", "secondNewYearsDay"])?;
        }
        Ok(())
    }

    fn summer_bank_holiday(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let Some(summer) = holidays.remove("summerBankHoliday") else {
            return Ok(());
        };
        let first_monday = ctx.nth_weekday(8, Weekday::Mon, 1)?;
        holidays.add(summer.with_date(first_monday));
        Ok(())
    }

    fn st_andrews_day(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        if ctx.year() < 2007 {
            return Ok(());
        }
        let st_andrew: Holiday = ctx.fixed(
            "stAndrewsDay",
            11,
            30,
            &[("en", "St. Andrew's Day"), ("gd", "Là Naomh Anndrais")],
            HolidayType::Bank,
        )?;
        holidays.add(st_andrew);
        SubstitutionPolicy::new(
            [Weekday::Sat, Weekday::Sun],
            ShiftRule::NextWeekday(Weekday::Mon),
        )
        .effective_from(Date::from_ymd(2007, 1, 1)?)
        .apply_to(holidays, &["stAndrewsDay"])?;
        Ok(())
    }
}

impl Provider for Scotland {
    fn id(&self) -> &'static str {
        "UnitedKingdom/Scotland"
    }

    fn iso_code(&self) -> &'static str {
        "GB-SCT"
    }

    fn timezone(&self) -> &'static str {
        "Europe/London"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let mut holidays = UnitedKingdom.compute(ctx)?;
        holidays.set_provider(self.id());

        holidays.remove("easterMonday");
        Self::new_year(ctx, &mut holidays)?;
        Self::summer_bank_holiday(ctx, &mut holidays)?;
        Self::st_andrews_day(ctx, &mut holidays)?;

        debug!(
            provider = self.id(),
            year = ctx.year(),
            count = holidays.len(),
            "holidays computed"
        );
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::easter::FeastCalculator;
    use almanac_core::translations::Translations;
    use chrono_tz::Europe::London;

    fn compute(year: i32) -> HolidayCollection {
        let feasts = FeastCalculator::new();
        let ctx = ProviderContext::new(year, "en_GB", London, Translations::builtin(), &feasts);
        Scotland.compute(&ctx).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_differs_from_england() {
        let c = compute(2024);
        assert_eq!(c.provider(), "UnitedKingdom/Scotland");
        assert!(!c.contains("easterMonday"));
        assert!(c.contains("goodFriday"));
        assert_eq!(c.require("summerBankHoliday").unwrap().day(), ymd(2024, 8, 5));
        assert_eq!(c.require("secondNewYearsDay").unwrap().day(), ymd(2024, 1, 2));
        assert_eq!(c.require("stAndrewsDay").unwrap().day(), ymd(2024, 11, 30));
        // November 30, 2024 is a Saturday
        assert_eq!(c.substitute_of("stAndrewsDay").unwrap().day(), ymd(2024, 12, 2));
    }

    #[test]
    fn test_new_year_weekend() {
        // Saturday and Sunday
        let c = compute(2022);
        assert_eq!(c.substitute_of("newYearsDay").unwrap().day(), ymd(2022, 1, 3));
        assert_eq!(c.substitute_of("secondNewYearsDay").unwrap().day(), ymd(2022, 1, 4));

        // Sunday and Monday
        let c = compute(2023);
        assert_eq!(c.substitute_of("newYearsDay").unwrap().day(), ymd(2023, 1, 3));
        assert!(c.substitute_of("secondNewYearsDay").is_none());
    }

    #[test]
    fn test_no_st_andrews_before_2007() {
        assert!(!compute(2006).contains("stAndrewsDay"));
    }
}
