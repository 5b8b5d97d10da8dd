//! Data Transfer Objects
//!
//! Typed records exchanged with the FitFusion backend. JSON is parsed into
//! these types once, at the client boundary, so the metrics code never sees
//! loosely shaped data. Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::metrics::{
    classify_bmi, compute_bmi_with, round_to, BodyMetrics, DateKey, Height, Timestamp, WaterEntry,
    WorkoutEvent,
};
use crate::validation::FieldError;

// ============================================
// COMMON
// ============================================

/// Backend record identifier
///
/// Most endpoints use numeric ids, some return strings; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecordId(n.to_string()),
            Raw::Text(s) => RecordId(s),
        })
    }
}

/// `null` and missing amounts count as zero
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Error body returned by the backend on failure
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the body, if any
    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

// ============================================
// AUTH & PROFILE DTOs
// ============================================

/// Login or registration request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Display name, only sent on registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Password change request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

// ============================================
// WATER DTOs
// ============================================

/// Water consumed on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterRecord {
    pub id: RecordId,
    pub date: DateKey,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub amount_liters: f64,
    #[serde(default)]
    pub goal_liters: Option<f64>,
}

impl WaterEntry for WaterRecord {
    fn date(&self) -> DateKey {
        self.date
    }

    fn amount_liters(&self) -> f64 {
        self.amount_liters
    }
}

/// Create/update body for a water record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterPayload {
    pub amount_liters: f64,
    pub goal_liters: f64,
    pub date: DateKey,
}

// ============================================
// WORKOUT DTOs
// ============================================

/// A generated workout plan stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: RecordId,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub predicted_plan: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub plan_json: Option<Value>,
}

impl WorkoutEvent for WorkoutRecord {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// Input to the workout plan generator
///
/// Field names are the generator's own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlanRequest {
    #[serde(rename = "Weight")]
    pub weight: f64,
    /// Height in meters
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "BMIcase")]
    pub bmi_case: String,
    #[serde(rename = "AgeGroup")]
    pub age_group: String,
}

impl WorkoutPlanRequest {
    /// Build from body measurements; fails when BMI or age group is unavailable.
    ///
    /// `BMIcase` is classified from the same one-decimal `BMI` that is sent,
    /// so the two fields always agree.
    pub fn from_body(body: &BodyMetrics) -> Result<Self, FieldError> {
        let derived = body.derive();
        let bmi = derived.bmi.map(|bmi| round_to(bmi, 1));
        let (bmi, category) = bmi
            .zip(bmi.and_then(classify_bmi))
            .ok_or_else(|| FieldError::new("bmi", "Weight and height must be positive numbers"))?;
        let age_group = derived
            .age_group
            .ok_or_else(|| FieldError::new("age", "Age must be a number"))?;

        Ok(Self {
            weight: body.weight_kg,
            height: body.height.to_meters(),
            bmi,
            gender: body.gender.to_string(),
            age: body.age.trunc() as i64,
            bmi_case: category.to_string(),
            age_group: age_group.to_string(),
        })
    }
}

/// User-defined workout routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWorkout {
    pub id: RecordId,
    pub workout_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(rename = "type", default)]
    pub workout_type: Option<String>,
}

/// Create/update body for a custom workout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWorkoutPayload {
    pub workout_name: String,
    pub description: String,
    pub sets: u32,
    pub reps: u32,
    pub exercise_name: String,
    #[serde(rename = "type")]
    pub workout_type: String,
}

// ============================================
// DIET DTOs
// ============================================

/// A stored diet plan; its contents are generator-defined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Optional lifestyle inputs for the diet generator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietPreferences {
    pub disease_type: String,
    pub physical_activity_level: String,
    pub daily_caloric_intake: Option<f64>,
    pub dietary_restrictions: String,
    pub allergies: String,
    pub preferred_cuisine: String,
    pub weekly_exercise_hours: Option<f64>,
}

/// Default daily calories when the form leaves the field blank
pub const DEFAULT_DAILY_CALORIES: f64 = 2200.0;

/// Default weekly exercise hours when the form leaves the field blank
pub const DEFAULT_WEEKLY_EXERCISE_HOURS: f64 = 3.0;

/// Input to the diet plan generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlanRequest {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Weight_kg")]
    pub weight_kg: f64,
    #[serde(rename = "Height_cm")]
    pub height_cm: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Disease_Type")]
    pub disease_type: String,
    #[serde(rename = "Physical_Activity_Level")]
    pub physical_activity_level: String,
    #[serde(rename = "Daily_Caloric_Intake")]
    pub daily_caloric_intake: f64,
    #[serde(rename = "Dietary_Restrictions")]
    pub dietary_restrictions: String,
    #[serde(rename = "Allergies")]
    pub allergies: String,
    #[serde(rename = "Preferred_Cuisine")]
    pub preferred_cuisine: String,
    #[serde(rename = "Weekly_Exercise_Hours")]
    pub weekly_exercise_hours: f64,
}

impl DietPlanRequest {
    pub fn from_body(body: &BodyMetrics, prefs: DietPreferences) -> Result<Self, FieldError> {
        let height_cm = body.height.to_centimeters();
        let bmi = compute_bmi_with(body.weight_kg, Height::Centimeters(height_cm))
            .ok_or_else(|| FieldError::new("bmi", "Weight and height must be positive numbers"))?;

        Ok(Self {
            age: body.age,
            gender: body.gender.to_string(),
            weight_kg: body.weight_kg,
            height_cm,
            bmi: round_to(bmi, 1),
            disease_type: prefs.disease_type,
            physical_activity_level: prefs.physical_activity_level,
            daily_caloric_intake: prefs.daily_caloric_intake.unwrap_or(DEFAULT_DAILY_CALORIES),
            dietary_restrictions: prefs.dietary_restrictions,
            allergies: prefs.allergies,
            preferred_cuisine: prefs.preferred_cuisine,
            weekly_exercise_hours: prefs
                .weekly_exercise_hours
                .unwrap_or(DEFAULT_WEEKLY_EXERCISE_HOURS),
        })
    }
}

// ============================================
// GOAL DTOs
// ============================================

/// Goal progress state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Pending => write!(f, "pending"),
            GoalStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A fitness goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,
    pub goal_type: String,
    pub target_value: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_value: f64,
    #[serde(default)]
    pub deadline: Option<DateKey>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub created_date: Option<DateKey>,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }

    /// Progress toward the target in percent, capped at 100.
    /// `None` when the target is not positive.
    pub fn progress_percent(&self) -> Option<f64> {
        if self.target_value > 0.0 {
            Some((self.current_value / self.target_value * 100.0).clamp(0.0, 100.0))
        } else {
            None
        }
    }
}

/// Create body for a goal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub deadline: Option<DateKey>,
    pub status: GoalStatus,
    pub created_date: DateKey,
}

impl NewGoal {
    pub fn new(goal_type: impl Into<String>, target_value: f64, created_date: DateKey) -> Self {
        Self {
            goal_type: goal_type.into(),
            target_value,
            current_value: 0.0,
            deadline: None,
            status: GoalStatus::Pending,
            created_date,
        }
    }

    pub fn deadline(mut self, deadline: DateKey) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

// ============================================
// SHOPPING LIST DTOs
// ============================================

/// Shopping list (cart) entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: RecordId,
    pub item_name: String,
    #[serde(default)]
    pub quantity: u32,
}

/// Create/update body for a shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItemPayload {
    pub item_name: String,
    pub quantity: u32,
}

// ============================================
// GENERATED PLANS
// ============================================

/// Pull the plan out of a generator response.
///
/// Workout responses nest it under `workout.planJson` or `plan`; diet
/// responses use `plan` or `diet`. Anything else is the plan itself.
pub fn extract_plan(response: Value) -> Value {
    if let Some(plan) = response
        .get("workout")
        .and_then(|w| w.get("planJson"))
        .filter(|p| !p.is_null())
    {
        return plan.clone();
    }
    for key in ["plan", "diet"] {
        if let Some(plan) = response.get(key).filter(|p| !p.is_null()) {
            return plan.clone();
        }
    }
    response
}
