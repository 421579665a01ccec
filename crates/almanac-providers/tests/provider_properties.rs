//! Properties every built-in provider must satisfy.

use almanac_core::easter::FeastCalculator;
use almanac_core::holiday::SUBSTITUTE_PREFIX;
use almanac_core::translations::Translations;
use almanac_core::tz::TimezoneCache;
use almanac_providers::prelude::*;
use proptest::prelude::*;

fn compute(id: &str, year: i32, locale: &str) -> almanac_core::collection::HolidayCollection {
    let registry = ProviderRegistry::global();
    let provider = registry.get(id).unwrap();
    let tz = TimezoneCache::global().resolve(provider.timezone()).unwrap();
    let feasts = FeastCalculator::new();
    let ctx = ProviderContext::new(year, locale, tz, Translations::builtin(), &feasts)
        .with_calendar(provider.easter_calendar());
    provider.compute(&ctx).unwrap()
}

fn provider_ids() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ProviderRegistry::global().ids())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn holidays_are_chronological(id in provider_ids(), year in 1900i32..2100) {
        let c = compute(id, year, "en");
        let dates = c.dates();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn holidays_fall_in_or_next_to_the_year(id in provider_ids(), year in 1900i32..2100) {
        let c = compute(id, year, "en");
        for h in c.iter() {
            let y = h.day().year();
            // substitutes of year-end holidays may spill into the next year
            prop_assert!(y == year || (h.is_substitute() && y == year + 1));
        }
    }

    #[test]
    fn compute_is_deterministic(id in provider_ids(), year in 1900i32..2100) {
        let a = compute(id, year, "en");
        let b = compute(id, year, "en");
        prop_assert_eq!(a.all(), b.all());
    }

    #[test]
    fn substitutes_link_to_present_originals(id in provider_ids(), year in 1950i32..2100) {
        let c = compute(id, year, "en");
        for sub in c.iter().filter(|h| h.is_substitute()) {
            let original = sub.substituted_key().unwrap();
            prop_assert!(c.contains(original));
            prop_assert_eq!(sub.key(), format!("{SUBSTITUTE_PREFIX}{original}"));
            prop_assert_eq!(sub.holiday_type(), c.require(original).unwrap().holiday_type());
        }
    }
}

#[test]
fn every_provider_names_every_holiday() {
    for id in ProviderRegistry::global().ids() {
        let c = compute(id, 2024, "en");
        assert!(!c.is_empty(), "{id}");
        for h in c.iter() {
            assert!(!h.name().is_empty(), "{id}: {}", h.key());
        }
    }
}

#[test]
fn region_ids_resolve_by_iso_code() {
    let registry = ProviderRegistry::global();
    for provider in registry.iter() {
        assert_eq!(registry.get(provider.iso_code()).unwrap().id(), provider.id());
    }
}
