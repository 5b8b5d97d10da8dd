//! Unit conversions
//!
//! BMI arithmetic and liter/milliliter scaling. Nothing here rounds;
//! presentation code calls [`round_to`] when it needs a display value.

use serde::{Deserialize, Serialize};

/// Milliliters per liter
const ML_PER_LITER: f64 = 1000.0;

/// Centimeters per meter
const CM_PER_METER: f64 = 100.0;

/// A body height in either of the units the forms accept
///
/// The workout form takes meters, the diet form centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Height {
    Centimeters(f64),
    Meters(f64),
}

impl Height {
    /// Height in meters
    pub fn to_meters(self) -> f64 {
        match self {
            Height::Centimeters(cm) => cm / CM_PER_METER,
            Height::Meters(m) => m,
        }
    }

    /// Height in centimeters
    pub fn to_centimeters(self) -> f64 {
        match self {
            Height::Centimeters(cm) => cm,
            Height::Meters(m) => m * CM_PER_METER,
        }
    }
}

/// Compute BMI from weight in kilograms and height in centimeters.
///
/// Returns `None` when either input is non-finite or not strictly positive.
///
/// ```
/// use fitfusion::metrics::compute_bmi;
///
/// let bmi = compute_bmi(70.0, 175.0).unwrap();
/// assert!((bmi - 22.857).abs() < 0.001);
/// assert_eq!(compute_bmi(70.0, 0.0), None);
/// ```
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    compute_bmi_with(weight_kg, Height::Centimeters(height_cm))
}

/// Compute BMI from weight in kilograms and a height in either unit.
pub fn compute_bmi_with(weight_kg: f64, height: Height) -> Option<f64> {
    let height_m = height.to_meters();
    if !is_positive(weight_kg) || !is_positive(height_m) {
        return None;
    }
    let bmi = weight_kg / (height_m * height_m);
    bmi.is_finite().then_some(bmi)
}

/// Convert milliliters to liters
pub fn liters_from_milliliters(ml: f64) -> f64 {
    ml / ML_PER_LITER
}

/// Convert liters to milliliters
pub fn milliliters_from_liters(liters: f64) -> f64 {
    liters * ML_PER_LITER
}

/// Parse a numeric form field.
///
/// Blank, non-numeric, NaN and infinite inputs give `None`.
pub fn parse_measurement(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Round for display (`decimals` places, half away from zero)
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
