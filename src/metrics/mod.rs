//! Metrics Derivation
//!
//! Pure functions that turn raw body measurements and activity records into
//! the derived values shown on the dashboard and health forms.
//!
//! ## Components
//!
//! - **convert**: BMI arithmetic, liter/milliliter scaling
//! - **classify**: BMI category and age group
//! - **window**: calendar-day keys and the rolling 7-day window
//! - **aggregate**: per-day workout counts and water sums
//!
//! Nothing in this module performs I/O, holds state, or panics on bad input;
//! values that cannot be computed come back as `None`.

mod aggregate;
mod classify;
mod convert;
mod window;

pub use aggregate::{
    aggregate_by_day, aggregate_by_day_in, DayBucket, WaterEntry, WindowTotals, WorkoutEvent,
};
pub use classify::{
    classify_age, classify_bmi, AgeGroup, BmiCategory, BodyMetrics, DerivedMetrics, Gender,
};
pub use convert::{
    compute_bmi, compute_bmi_with, liters_from_milliliters, milliliters_from_liters,
    parse_measurement, round_to, Height,
};
pub use window::{
    days_through, last_n_days, today, DateKey, Timestamp, DATE_KEY_FORMAT, DEFAULT_WINDOW_DAYS,
};
