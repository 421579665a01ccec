//! Secular holidays shared between providers.

use almanac_core::error::AlmanacResult;
use almanac_core::holiday::{Holiday, HolidayType};

use crate::provider::ProviderContext;

/// New Year's Day, January 1.
pub fn new_years_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("newYearsDay", 1, 1, &[], holiday_type)
}

/// International Workers' Day, May 1.
pub fn international_workers_day(
    ctx: &ProviderContext<'_>,
    holiday_type: HolidayType,
) -> AlmanacResult<Holiday> {
    ctx.fixed("internationalWorkersDay", 5, 1, &[], holiday_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::easter::FeastCalculator;
    use almanac_core::translations::Translations;
    use chrono_tz::America::Argentina::Buenos_Aires;

    #[test]
    fn test_shared_names() {
        let feasts = FeastCalculator::new();
        let ctx =
            ProviderContext::new(2024, "es_AR", Buenos_Aires, Translations::builtin(), &feasts);
        let h = international_workers_day(&ctx, HolidayType::Official).unwrap();
        assert_eq!(h.name(), "Día del Trabajador");
        assert_eq!(h.day().to_string(), "2024-05-01");
        assert_eq!(new_years_day(&ctx, HolidayType::Official).unwrap().name(), "Año Nuevo");
    }
}
