//! United Kingdom (England and Wales).

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use almanac_core::substitution::{ShiftRule, SubstitutionPolicy};
use almanac_core::types::Date;
use chrono::Weekday;
use tracing::debug;

use crate::provider::{Provider, ProviderContext};
use crate::{christian, common};

/// Bank holidays exist since the Bank Holidays Act 1871.
pub(crate) const BANK_HOLIDAYS_SINCE: i32 = 1871;

/// Christmas and Boxing Day on a weekend move two days on.
pub(crate) fn christmas_policy() -> AlmanacResult<SubstitutionPolicy> {
    Ok(
        SubstitutionPolicy::new([Weekday::Sat, Weekday::Sun], ShiftRule::FixedDays(2))
            .effective_from(Date::from_ymd(1971, 1, 1)?),
    )
}

/// UK bank holidays for England and Wales.
///
/// ## Holidays
///
/// - New Year's Day (since 1974, next Monday if on a weekend)
/// - Good Friday, Easter Monday
/// - Early May Bank Holiday (1st Monday in May, since 1978)
/// - Spring Bank Holiday (last Monday in May, since 1971; Whit Monday before)
/// - Summer Bank Holiday (last Monday in August; 1st Monday before 1965)
/// - Christmas Day and Boxing Day (substitute two days on if on a weekend)
///
/// One-off bank holidays for royal events are included in their years.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl UnitedKingdom {
    fn early_may_bank_holiday(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let year = ctx.year();
        if year < 1978 {
            return Ok(());
        }
        let date = match year {
            // VE Day anniversaries
            1995 | 2020 => ctx.date(5, 8)?,
            _ => ctx.nth_weekday(5, Weekday::Mon, 1)?,
        };
        holidays.add(ctx.holiday(
            "mayDayBankHoliday",
            date,
            &[("en", "May Day Bank Holiday")],
            HolidayType::Bank,
        )?);
        Ok(())
    }

    fn spring_bank_holiday(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let year = ctx.year();
        if year < 1971 {
            holidays.add(christian::pentecost_monday(ctx, HolidayType::Bank)?);
            return Ok(());
        }
        let date = match year {
            // moved for the royal jubilees
            1977 => ctx.date(6, 6)?,
            2002 | 2012 => ctx.date(6, 4)?,
            2022 => ctx.date(6, 2)?,
            _ => ctx.last_weekday(5, Weekday::Mon)?,
        };
        holidays.add(ctx.holiday(
            "springBankHoliday",
            date,
            &[("en", "Spring Bank Holiday")],
            HolidayType::Bank,
        )?);
        Ok(())
    }

    fn summer_bank_holiday(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let date = if ctx.year() < 1965 {
            ctx.nth_weekday(8, Weekday::Mon, 1)?
        } else {
            ctx.last_weekday(8, Weekday::Mon)?
        };
        holidays.add(ctx.holiday(
            "summerBankHoliday",
            date,
            &[("en", "August Bank Holiday")],
            HolidayType::Bank,
        )?);
        Ok(())
    }

    fn one_off_holidays(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let specials: &[(&str, u32, u32, &str)] = match ctx.year() {
            1977 => &[("queensSilverJubilee", 6, 7, "Queen Elizabeth II Silver Jubilee")],
            1981 => &[("royalWedding", 7, 29, "Wedding of Charles and Diana")],
            1999 => &[("millenniumCelebrations", 12, 31, "Millennium Celebrations")],
            2002 => &[("queensGoldenJubilee", 6, 3, "Queen Elizabeth II Golden Jubilee")],
            2011 => &[("royalWedding", 4, 29, "Wedding of William and Catherine")],
            2012 => &[("queensDiamondJubilee", 6, 5, "Queen Elizabeth II Diamond Jubilee")],
            2022 => &[
                ("queensPlatinumJubilee", 6, 3, "Queen Elizabeth II Platinum Jubilee"),
                ("queenElizabethFuneral", 9, 19, "State Funeral of Queen Elizabeth II"),
            ],
            2023 => &[("kingCharlesCoronation", 5, 8, "Coronation of King Charles III")],
            _ => &[],
        };
        for &(key, month, day, name) in specials {
            holidays.add(ctx.fixed(key, month, day, &[("en", name)], HolidayType::Bank)?);
        }
        Ok(())
    }
}

impl Provider for UnitedKingdom {
    fn id(&self) -> &'static str {
        "UnitedKingdom"
    }

    fn iso_code(&self) -> &'static str {
        "GB"
    }

    fn timezone(&self) -> &'static str {
        "Europe/London"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let year = ctx.year();
        let mut holidays = ctx.collection(self);
        if year < BANK_HOLIDAYS_SINCE {
            return Ok(holidays);
        }

        holidays.add(christian::good_friday(ctx, HolidayType::Official)?);
        holidays.add(christian::easter_monday(ctx, HolidayType::Bank)?);
        holidays.add(christian::christmas_day(ctx, HolidayType::Official)?);
        holidays.add(christian::second_christmas_day(ctx, HolidayType::Bank)?);

        Self::early_may_bank_holiday(ctx, &mut holidays)?;
        Self::spring_bank_holiday(ctx, &mut holidays)?;
        Self::summer_bank_holiday(ctx, &mut holidays)?;
        Self::one_off_holidays(ctx, &mut holidays)?;

        if year >= 1974 {
            holidays.add(common::new_years_day(ctx, HolidayType::Bank)?);
            SubstitutionPolicy::new(
                [Weekday::Sat, Weekday::Sun],
                ShiftRule::NextWeekday(Weekday::Mon),
            )
            .apply_to(&mut holidays, &["newYearsDay"])?;
        }
        christmas_policy()?.apply_to(&mut holidays, &["christmasDay", "secondChristmasDay"])?;

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}
