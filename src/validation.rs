//! Form checks
//!
//! Presence and format checks run before anything is sent to the backend.
//! Plausibility of values is the backend's business, not ours.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::metrics::parse_measurement;

/// Characters that count as "special" in a signup password
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// A problem with one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// At least eight characters with upper, lower, digit and one of `@$!%*?&`
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required."));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Invalid email format."));
    }
}

/// Check a login form
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    if password.trim().is_empty() {
        errors.push(FieldError::new("password", "Password is required."));
    }
    errors
}

/// Check a signup form
pub fn validate_signup(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required."));
    }
    check_email(email, &mut errors);
    if password.trim().is_empty() {
        errors.push(FieldError::new("password", "Password is required."));
    } else if !is_strong_password(password) {
        errors.push(FieldError::new(
            "password",
            "Password must have at least 8 chars, 1 uppercase, 1 lowercase, 1 number & 1 special symbol.",
        ));
    }
    errors
}

/// Check a profile update
pub fn validate_profile(name: &str, email: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required."));
    }
    check_email(email, &mut errors);
    errors
}

/// Check a password change
pub fn validate_password_change(old: &str, new: &str, confirm: &str) -> Vec<FieldError> {
    if old.is_empty() || new.is_empty() || confirm.is_empty() {
        return vec![FieldError::new("password", "All password fields are required!")];
    }

    let mut errors = Vec::new();
    if new.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "new_password",
            "New password must be at least 8 characters long!",
        ));
    }
    if new != confirm {
        errors.push(FieldError::new("confirm_password", "New passwords do not match!"));
    }
    errors
}

/// Check a new goal; returns the parsed target on success
pub fn validate_goal(goal_type: &str, target: &str) -> Result<f64, Vec<FieldError>> {
    let mut errors = Vec::new();
    if goal_type.trim().is_empty() {
        errors.push(FieldError::new("goal_type", "Goal type is required"));
    }
    let parsed = parse_measurement(target);
    if parsed.is_none() {
        errors.push(FieldError::new("target_value", "Target must be a number"));
    }
    match parsed {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(errors),
    }
}

/// Check a shopping list entry
pub fn validate_shopping_item(name: &str, quantity: i64) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("item_name", "Enter valid name and quantity"));
    }
    if quantity < 1 {
        errors.push(FieldError::new("quantity", "Enter valid name and quantity"));
    }
    errors
}

/// Check a custom workout
pub fn validate_custom_workout(
    workout_name: &str,
    exercise_name: &str,
    sets: Option<u32>,
    reps: Option<u32>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if workout_name.trim().is_empty() {
        errors.push(FieldError::new("workout_name", "Workout name is required"));
    }
    if exercise_name.trim().is_empty() {
        errors.push(FieldError::new("exercise_name", "Exercise name is required"));
    }
    if sets.is_none() {
        errors.push(FieldError::new("sets", "Sets are required"));
    }
    if reps.is_none() {
        errors.push(FieldError::new("reps", "Reps are required"));
    }
    errors
}
