//! Christian holidays shared between providers.
//!
//! Each function builds one holiday of the context's year. Movable feasts
//! follow the context's Easter computus, so the same function yields the
//! Orthodox date for an Orthodox provider.

use almanac_core::easter::MovableFeast;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::{Holiday, HolidayType};

use crate::provider::ProviderContext;

/// Epiphany, January 6.
pub fn epiphany(ctx: &ProviderContext<'_>, holiday_type: HolidayType) -> AlmanacResult<Holiday> {
    ctx.fixed("epiphany", 1, 6, &[], holiday_type)
}

/// Carnival Monday, 48 days before Easter.
pub fn carnival_monday(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("carnivalMonday", MovableFeast::CarnivalMonday, &[], holiday_type)
}

/// Carnival Tuesday, 47 days before Easter.
pub fn carnival_tuesday(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("carnivalTuesday", MovableFeast::CarnivalTuesday, &[], holiday_type)
}

/// Good Friday.
pub fn good_friday(ctx: &ProviderContext<'_>, holiday_type: HolidayType) -> AlmanacResult<Holiday> {
    ctx.feast("goodFriday", MovableFeast::GoodFriday, &[], holiday_type)
}

/// Easter Sunday.
pub fn easter(ctx: &ProviderContext<'_>, holiday_type: HolidayType) -> AlmanacResult<Holiday> {
    ctx.feast("easter", MovableFeast::EasterSunday, &[], holiday_type)
}

/// Easter Monday.
pub fn easter_monday(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("easterMonday", MovableFeast::EasterMonday, &[], holiday_type)
}

/// Ascension Day, 39 days after Easter.
pub fn ascension_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("ascensionDay", MovableFeast::Ascension, &[], holiday_type)
}

/// Pentecost (Whitsunday).
pub fn pentecost(ctx: &ProviderContext<'_>, holiday_type: HolidayType) -> AlmanacResult<Holiday> {
    ctx.feast("pentecost", MovableFeast::Pentecost, &[], holiday_type)
}

/// Pentecost Monday (Whit Monday).
pub fn pentecost_monday(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("pentecostMonday", MovableFeast::PentecostMonday, &[], holiday_type)
}

/// Corpus Christi, 60 days after Easter.
pub fn corpus_christi(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.feast("corpusChristi", MovableFeast::CorpusChristi, &[], holiday_type)
}

/// Assumption of Mary, August 15.
pub fn assumption_of_mary(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("assumptionOfMary", 8, 15, &[], holiday_type)
}

/// Reformation Day, October 31.
pub fn reformation_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("reformationDay", 10, 31, &[], holiday_type)
}

/// All Saints' Day, November 1.
pub fn all_saints_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("allSaintsDay", 11, 1, &[], holiday_type)
}

/// Immaculate Conception, December 8.
pub fn immaculate_conception(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("immaculateConception", 12, 8, &[], holiday_type)
}

/// Christmas Day, December 25.
pub fn christmas_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("christmasDay", 12, 25, &[], holiday_type)
}

/// Second Christmas Day (Boxing Day), December 26.
pub fn second_christmas_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("secondChristmasDay", 12, 26, &[], holiday_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::easter::{EasterCalendar, FeastCalculator};
    use almanac_core::translations::Translations;
    use almanac_core::types::Date;
    use chrono_tz::Europe::Athens;

    #[test]
    fn test_follows_context_computus() {
        let feasts = FeastCalculator::new();
        let west = ProviderContext::new(2023, "en", Athens, Translations::builtin(), &feasts);
        let east = west.with_calendar(EasterCalendar::Orthodox);

        let gf_west = good_friday(&west, HolidayType::Official).unwrap();
        let gf_east = good_friday(&east, HolidayType::Official).unwrap();
        assert_eq!(gf_west.day(), Date::from_ymd(2023, 4, 7).unwrap());
        assert_eq!(gf_east.day(), Date::from_ymd(2023, 4, 14).unwrap());
        assert_eq!(feasts.cached_anchors(), 2);
    }

    #[test]
    fn test_localized_names() {
        let feasts = FeastCalculator::new();
        let ctx = ProviderContext::new(2023, "en_GB", Athens, Translations::builtin(), &feasts);
        assert_eq!(second_christmas_day(&ctx, HolidayType::Bank).unwrap().name(), "Boxing Day");
        assert_eq!(christmas_day(&ctx, HolidayType::Official).unwrap().name(), "Christmas Day");
        assert_eq!(pentecost_monday(&ctx, HolidayType::Official).unwrap().name(), "Whit Monday");
    }
}
