//! Germany, Bavaria.

use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use tracing::debug;

use super::germany::Germany;
use crate::christian;
use crate::provider::{Provider, ProviderContext};

/// Bavarian holidays: the nationwide ones plus Epiphany, Corpus Christi and
/// All Saints' Day. Assumption Day is only observed in predominantly Catholic
/// communities and is typed `Other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bavaria;

impl Provider for Bavaria {
    fn id(&self) -> &'static str {
        "Germany/Bavaria"
    }

    fn iso_code(&self) -> &'static str {
        "DE-BY"
    }

    fn timezone(&self) -> &'static str {
        "Europe/Berlin"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let mut holidays = Germany.compute(ctx)?;
        holidays.set_provider(self.id());

        holidays.add(christian::epiphany(ctx, HolidayType::Official)?);
        holidays.add(christian::corpus_christi(ctx, HolidayType::Official)?);
        holidays.add(christian::all_saints_day(ctx, HolidayType::Official)?);
        holidays.add(christian::assumption_of_mary(ctx, HolidayType::Other)?);

        debug!(
            provider = self.id(),
            year = ctx.year(),
            count = holidays.len(),
            "holidays computed"
        );
        Ok(holidays)
    }
}
