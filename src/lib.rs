//! # FitFusion
//!
//! Client library for the FitFusion fitness tracker: body metrics, the weekly
//! activity window, and a typed client for the FitFusion backend.
//!
//! ## Features
//!
//! - **Body metrics**: BMI, BMI category and age group from raw measurements
//! - **Weekly window**: per-day workout counts and water totals over the last 7 days
//! - **Backend client**: auth, workouts, diet plans, water, goals and shopping list
//! - **Water tracker**: daily intake against a goal, persisted one record per day
//!
//! ## Modules
//!
//! - [`metrics`]: Pure derivation functions
//! - [`api`]: REST client, DTOs and session storage
//! - [`dashboard`]: Stat cards and the weekly chart
//! - [`water`]: Daily water tracker
//! - [`exercises`]: Built-in exercise library
//! - [`validation`]: Form validation rules
//!
//! ## Quick Start
//!
//! ```rust
//! use fitfusion::metrics::*;
//!
//! let body = BodyMetrics::new(70.0, Height::Centimeters(175.0), 34.0, Gender::Male);
//! let derived = body.derive();
//!
//! assert_eq!(derived.bmi_category, Some(BmiCategory::Normal));
//! assert_eq!(derived.age_group, Some(AgeGroup::Adult));
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let week = last_n_days(7, today);
//! assert_eq!(week.first().map(|d| d.to_string()), Some("2024-03-05".to_string()));
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod exercises;
pub mod metrics;
pub mod notify;
pub mod validation;
pub mod water;

// Re-export top-level types for convenience
pub use metrics::{
    aggregate_by_day, classify_age, classify_bmi, compute_bmi, last_n_days, AgeGroup,
    BmiCategory, BodyMetrics, DateKey, DayBucket, Gender, Height, Timestamp,
};

pub use api::{ApiError, ApiResult, ClientConfig, FitnessClient, Session, SessionStore};

pub use dashboard::{ChartPoint, Dashboard, DashboardRecords, DashboardStats, StatCard};

pub use water::{IntakeChange, WaterTracker};

pub use exercises::{Difficulty, Exercise, ExerciseFilter};

pub use notify::{Notice, NoticeLevel, Notifier, TerminalNotifier};

pub use config::{Config, ConfigError, LoggingConfig};

pub use validation::FieldError;
