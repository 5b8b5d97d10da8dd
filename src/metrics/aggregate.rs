//! Per-day aggregation of workouts and water intake
//!
//! Records are grouped by day key first, so the cost is linear in
//! `days + records`. Missing data produces zero-valued buckets.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

use super::window::{DateKey, Timestamp};

/// Anything that happened at a point in time and counts as one workout
pub trait WorkoutEvent {
    fn created_at(&self) -> Timestamp;
}

/// Anything that records an amount of water drunk on a calendar day
pub trait WaterEntry {
    fn date(&self) -> DateKey;
    fn amount_liters(&self) -> f64;
}

/// One calendar day of aggregated activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub key: DateKey,
    pub workouts_count: u32,
    pub water_liters: f64,
}

impl DayBucket {
    pub fn empty(key: DateKey) -> Self {
        Self {
            key,
            workouts_count: 0,
            water_liters: 0.0,
        }
    }
}

/// Totals over a sequence of buckets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WindowTotals {
    pub workouts: u32,
    pub water_liters: f64,
    /// Days with at least one workout
    pub active_days: u32,
}

impl WindowTotals {
    pub fn from_buckets(buckets: &[DayBucket]) -> Self {
        buckets.iter().fold(Self::default(), |mut totals, bucket| {
            totals.workouts += bucket.workouts_count;
            totals.water_liters += bucket.water_liters;
            if bucket.workouts_count > 0 {
                totals.active_days += 1;
            }
            totals
        })
    }
}

/// Aggregate workouts and water per requested day, bucketing timestamps
/// by the local-device calendar day.
pub fn aggregate_by_day<W, R>(date_keys: &[DateKey], workouts: &[W], water: &[R]) -> Vec<DayBucket>
where
    W: WorkoutEvent,
    R: WaterEntry,
{
    aggregate_by_day_in(&Local, date_keys, workouts, water)
}

/// Like [`aggregate_by_day`], with zoned timestamps truncated to days in `tz`.
///
/// Exactly one bucket is produced per entry of `date_keys`, in the same
/// order. Records on days not listed are ignored.
pub fn aggregate_by_day_in<Tz, W, R>(
    tz: &Tz,
    date_keys: &[DateKey],
    workouts: &[W],
    water: &[R],
) -> Vec<DayBucket>
where
    Tz: TimeZone,
    W: WorkoutEvent,
    R: WaterEntry,
{
    let mut workout_counts: HashMap<DateKey, u32> = HashMap::new();
    for event in workouts {
        *workout_counts
            .entry(event.created_at().day_in(tz))
            .or_insert(0) += 1;
    }

    let mut water_amounts: HashMap<DateKey, Vec<f64>> = HashMap::new();
    for entry in water {
        water_amounts
            .entry(entry.date())
            .or_default()
            .push(entry.amount_liters());
    }

    date_keys
        .iter()
        .map(|key| DayBucket {
            key: *key,
            workouts_count: workout_counts.get(key).copied().unwrap_or(0),
            water_liters: water_amounts
                .get(key)
                .map(|amounts| order_independent_sum(amounts))
                .unwrap_or(0.0),
        })
        .collect()
}

/// Sum in ascending order so the result does not depend on input order.
fn order_independent_sum(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().sum()
}
