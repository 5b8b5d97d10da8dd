//! Benchmarks for the weekly aggregation
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitfusion::metrics::*;

struct Workout(Timestamp);

impl WorkoutEvent for Workout {
    fn created_at(&self) -> Timestamp {
        self.0
    }
}

struct Water(DateKey, f64);

impl WaterEntry for Water {
    fn date(&self) -> DateKey {
        self.0
    }

    fn amount_liters(&self) -> f64 {
        self.1
    }
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
}

fn create_records(count: usize) -> (Vec<Workout>, Vec<Water>) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    let workouts = (0..count)
        .map(|i| {
            let at = start + Duration::minutes(i as i64 * 97);
            Workout(Timestamp::Zoned(at.fixed_offset()))
        })
        .collect();
    let water = (0..count)
        .map(|i| {
            let day = reference_day() - Duration::days((i % 60) as i64);
            Water(DateKey::new(day), 0.25 + (i % 4) as f64 * 0.1)
        })
        .collect();
    (workouts, water)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_by_day");
    let keys = last_n_days(DEFAULT_WINDOW_DAYS, reference_day());

    for size in [100, 1000, 10000] {
        let (workouts, water) = create_records(size);
        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| aggregate_by_day_in(&Utc, black_box(&keys), &workouts, &water))
        });
    }

    group.finish();
}

fn bench_window(c: &mut Criterion) {
    c.bench_function("last_n_days_30", |b| {
        b.iter(|| last_n_days(black_box(30), reference_day()))
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("body_metrics_derive", |b| {
        let body = BodyMetrics::new(82.5, Height::Centimeters(181.0), 44.0, Gender::Female);
        b.iter(|| black_box(body).derive())
    });
}

criterion_group!(benches, bench_aggregate, bench_window, bench_classify);
criterion_main!(benches);
