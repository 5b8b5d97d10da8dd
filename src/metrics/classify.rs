//! BMI and age classification
//!
//! Thresholds are half-open and lower-inclusive: a value sitting exactly on
//! a boundary belongs to the upper category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::convert::{compute_bmi_with, Height};

/// BMI category, ordered from lowest to highest BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Severe Thinness")]
    SevereThinness,
    #[serde(rename = "Moderate Thinness")]
    ModerateThinness,
    #[serde(rename = "Mild Thinness")]
    MildThinness,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
    #[serde(rename = "Severe Obese")]
    SevereObese,
}

/// Lower bounds of every category above `SevereThinness`, ascending
const BMI_THRESHOLDS: [(f64, BmiCategory); 6] = [
    (16.0, BmiCategory::ModerateThinness),
    (17.0, BmiCategory::MildThinness),
    (18.5, BmiCategory::Normal),
    (25.0, BmiCategory::Overweight),
    (30.0, BmiCategory::Obese),
    (35.0, BmiCategory::SevereObese),
];

impl BmiCategory {
    /// All categories in ascending BMI order
    pub fn all() -> &'static [BmiCategory] {
        &[
            BmiCategory::SevereThinness,
            BmiCategory::ModerateThinness,
            BmiCategory::MildThinness,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
            BmiCategory::SevereObese,
        ]
    }

    /// Label shown to users and sent to the backend
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::SevereThinness => "Severe Thinness",
            BmiCategory::ModerateThinness => "Moderate Thinness",
            BmiCategory::MildThinness => "Mild Thinness",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::SevereObese => "Severe Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a BMI value.
///
/// Every real number (including the infinities) maps to exactly one
/// category. Only NaN is unclassifiable.
pub fn classify_bmi(bmi: f64) -> Option<BmiCategory> {
    if bmi.is_nan() {
        return None;
    }

    let mut category = BmiCategory::SevereThinness;
    for (lower, next) in BMI_THRESHOLDS {
        if bmi < lower {
            break;
        }
        category = next;
    }
    Some(category)
}

/// Coarse age bracket used by the workout plan generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Young => "Young",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an age in years: under 30 is Young, under 50 Adult, else Senior.
///
/// Ages are not range-checked; only NaN yields `None`.
pub fn classify_age(age: f64) -> Option<AgeGroup> {
    if age.is_nan() {
        None
    } else if age < 30.0 {
        Some(AgeGroup::Young)
    } else if age < 50.0 {
        Some(AgeGroup::Adult)
    } else {
        Some(AgeGroup::Senior)
    }
}

/// Biological sex as the plan generators expect it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Raw body measurements as entered on a health form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height: Height,
    pub age: f64,
    pub gender: Gender,
}

/// Values derived from [`BodyMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub age_group: Option<AgeGroup>,
}

impl BodyMetrics {
    pub fn new(weight_kg: f64, height: Height, age: f64, gender: Gender) -> Self {
        Self {
            weight_kg,
            height,
            age,
            gender,
        }
    }

    /// Recompute BMI, BMI category and age group from the current fields.
    pub fn derive(&self) -> DerivedMetrics {
        let bmi = compute_bmi_with(self.weight_kg, self.height);
        DerivedMetrics {
            bmi,
            bmi_category: bmi.and_then(classify_bmi),
            age_group: classify_age(self.age),
        }
    }
}
