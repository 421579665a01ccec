//! Benchmarks for holiday computation.
//!
//! Run with: cargo bench -p almanac

use std::hint::black_box;

use almanac::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// COMPUTE HOLIDAYS
// =============================================================================

fn bench_compute_holidays(c: &mut Criterion) {
    let almanac = Almanac::new();
    let mut group = c.benchmark_group("compute_holidays");

    for id in almanac.providers() {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, id| {
            b.iter(|| almanac.compute_holidays(black_box(id), black_box(2024), "en"));
        });
    }

    group.finish();
}

fn bench_year_range(c: &mut Criterion) {
    let almanac = Almanac::new();
    let mut group = c.benchmark_group("year_range");
    group.throughput(Throughput::Elements(100));

    for id in ["Japan", "UnitedKingdom"] {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, id| {
            b.iter(|| {
                for year in 1950..2050 {
                    let _ = black_box(almanac.compute_holidays(id, year, "en"));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// WORKING DAYS
// =============================================================================

fn bench_working_days(c: &mut Criterion) {
    let almanac = Almanac::new();
    let start = Date::from_ymd(2024, 12, 20).unwrap();

    c.bench_function("next_working_day_20", |b| {
        b.iter(|| almanac.next_working_day("UnitedKingdom", black_box(start), black_box(20)));
    });
}

criterion_group!(benches, bench_compute_holidays, bench_year_range, bench_working_days);
criterion_main!(benches);
