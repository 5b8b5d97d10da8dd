//! FitFusion backend API
//!
//! Typed client for the FitFusion REST backend.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /api/auth/register` - Create an account
//! - `POST /api/auth/login` - Sign in, returns a bearer token
//! - `GET /api/auth/me` - Profile of the signed-in user
//! - `PATCH /api/auth/update` - Change profile or password
//!
//! ## Workouts
//! - `GET /api/workout/user` - Generated workout plans
//! - `POST /api/workout/generate` - Generate a plan
//! - `GET /get` - Custom workouts
//! - `POST /api/custom/add`, `PATCH /api/custom/update/:id`, `DELETE /api/custom/delete/:id`
//!
//! ## Diet
//! - `GET /api/diet/all` - Stored diet plans
//! - `POST /api/diet/generate` - Generate a plan
//!
//! ## Water
//! - `GET /api/water/list[?date=]` - Water records
//! - `POST /api/water/add`, `PATCH /api/water/update/:id`
//!
//! ## Shopping list
//! - `GET /api/cart/all`
//! - `POST /api/cart/add`, `PATCH /api/cart/update/:id`, `DELETE /api/cart/delete/:id`
//!
//! ## Goals
//! - `GET /api/goals[?date=]`, `POST /api/goals`
//! - `PATCH /api/goals/:id`, `DELETE /api/goals/:id`
//!
//! # Example
//!
//! ```rust,no_run
//! use fitfusion::api::{ClientConfig, Credentials, FitnessClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FitnessClient::new(ClientConfig::default())?;
//!     let session = client
//!         .login(&Credentials::login("jo@example.com", "Secret#123"))
//!         .await?;
//!
//!     let goals = client.list_goals(&session, None).await?;
//!     println!("{} goals", goals.len());
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;

mod client;
mod session;

pub use client::{ClientConfig, FitnessClient};
pub use dto::{
    extract_plan, Credentials, CustomWorkout, CustomWorkoutPayload, DietPlan, DietPlanRequest,
    DietPreferences, Goal, GoalStatus, NewGoal, PasswordChange, RecordId, ShoppingItem,
    ShoppingItemPayload, UserProfile, WaterPayload, WaterRecord, WorkoutPlanRequest,
    WorkoutRecord,
};
pub use error::{ApiError, ApiResult};
pub use session::{Session, SessionError, SessionStore};
