//! FitFusion REST API Client
//!
//! HTTP client for the FitFusion backend. Every authenticated call takes
//! the caller's [`Session`] explicitly; the client itself holds no user state.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::dto::*;
use super::error::{ApiError, ApiResult};
use super::session::Session;
use crate::config::BackendConfig;
use crate::metrics::DateKey;

/// Connection settings for [`FitnessClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. "https://health4-lmzi.onrender.com"
    pub base_url: String,
    /// Plan generator service, pinged before generating a workout plan
    pub plan_service_url: Option<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from(&BackendConfig::default())
    }
}

impl From<&BackendConfig> for ClientConfig {
    fn from(config: &BackendConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            plan_service_url: config.plan_service_url.clone(),
            request_timeout_ms: config.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// FitFusion backend client
#[derive(Debug, Clone)]
pub struct FitnessClient {
    client: Client,
    config: ClientConfig,
}

impl FitnessClient {
    /// Create a client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client for `base_url` with default settings
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url: String = base_url.into();
        Self::new(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..ClientConfig::default()
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ============================================
    // Auth & profile
    // ============================================

    /// Create an account. The user signs in separately afterwards.
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/api/auth/register", None)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_auth_status(status, &body));
        }

        tracing::info!(email = %credentials.email, "Account registered");
        Ok(())
    }

    /// Sign in and obtain a session
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        let response = self
            .request(Method::POST, "/api/auth/login", None)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::from_auth_status(status, &body));
        }

        let parsed: LoginResponse = if body.trim().is_empty() {
            LoginResponse { token: None }
        } else {
            serde_json::from_str(&body)?
        };

        match parsed.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::info!(email = %credentials.email, "Signed in");
                Ok(Session::new(token))
            }
            None => Err(ApiError::MissingToken),
        }
    }

    /// Profile of the signed-in user
    pub async fn me(&self, session: &Session) -> ApiResult<UserProfile> {
        self.get_json(session, "/api/auth/me", &[]).await
    }

    /// Change name and email
    pub async fn update_profile(&self, session: &Session, profile: &UserProfile) -> ApiResult<()> {
        self.send_ignoring_body(Method::PATCH, session, "/api/auth/update", profile)
            .await
    }

    /// Change password
    pub async fn change_password(&self, session: &Session, change: &PasswordChange) -> ApiResult<()> {
        self.send_ignoring_body(Method::PATCH, session, "/api/auth/update", change)
            .await
    }

    // ============================================
    // Workouts
    // ============================================

    /// Generated workout plans of the signed-in user
    pub async fn list_workouts(&self, session: &Session) -> ApiResult<Vec<WorkoutRecord>> {
        self.get_list(session, "/api/workout/user", &[]).await
    }

    /// Ping the plan generator so it is awake before a generate call.
    /// Failures are logged and otherwise ignored.
    pub async fn warm_up_plan_service(&self) {
        let Some(url) = self.config.plan_service_url.as_deref() else {
            return;
        };

        match self.client.get(url).send().await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "Plan service warm-up")
            }
            Err(e) => tracing::warn!(error = %e, "Plan service might still be waking up"),
        }
    }

    /// Generate a workout plan; returns the plan document
    pub async fn generate_workout_plan(
        &self,
        session: &Session,
        request: &WorkoutPlanRequest,
    ) -> ApiResult<Value> {
        self.warm_up_plan_service().await;

        let response: Value = self
            .send_json(Method::POST, session, "/api/workout/generate", request)
            .await?;
        Ok(extract_plan(response))
    }

    /// User-defined workouts
    pub async fn list_custom_workouts(&self, session: &Session) -> ApiResult<Vec<CustomWorkout>> {
        self.get_list(session, "/get", &[]).await
    }

    pub async fn add_custom_workout(
        &self,
        session: &Session,
        payload: &CustomWorkoutPayload,
    ) -> ApiResult<CustomWorkout> {
        self.send_json(Method::POST, session, "/api/custom/add", payload)
            .await
    }

    pub async fn update_custom_workout(
        &self,
        session: &Session,
        id: &RecordId,
        payload: &CustomWorkoutPayload,
    ) -> ApiResult<CustomWorkout> {
        let path = format!("/api/custom/update/{}", id);
        self.send_json(Method::PATCH, session, &path, payload).await
    }

    pub async fn delete_custom_workout(&self, session: &Session, id: &RecordId) -> ApiResult<()> {
        self.delete(session, &format!("/api/custom/delete/{}", id))
            .await
    }

    // ============================================
    // Diet
    // ============================================

    /// Stored diet plans
    pub async fn list_diet_plans(&self, session: &Session) -> ApiResult<Vec<DietPlan>> {
        self.get_list(session, "/api/diet/all", &[]).await
    }

    /// Generate a diet plan; returns the plan document
    pub async fn generate_diet_plan(
        &self,
        session: &Session,
        request: &DietPlanRequest,
    ) -> ApiResult<Value> {
        let response: Value = self
            .send_json(Method::POST, session, "/api/diet/generate", request)
            .await?;
        Ok(extract_plan(response))
    }

    // ============================================
    // Water
    // ============================================

    /// Water records, optionally restricted to one day
    pub async fn list_water(
        &self,
        session: &Session,
        date: Option<DateKey>,
    ) -> ApiResult<Vec<WaterRecord>> {
        let query = date_query(date);
        self.get_list(session, "/api/water/list", &query).await
    }

    pub async fn add_water(&self, session: &Session, payload: &WaterPayload) -> ApiResult<WaterRecord> {
        self.send_json(Method::POST, session, "/api/water/add", payload)
            .await
    }

    pub async fn update_water(
        &self,
        session: &Session,
        id: &RecordId,
        payload: &WaterPayload,
    ) -> ApiResult<WaterRecord> {
        let path = format!("/api/water/update/{}", id);
        self.send_json(Method::PATCH, session, &path, payload).await
    }

    /// Update the day's record if it exists, create it otherwise
    pub async fn save_water(
        &self,
        session: &Session,
        id: Option<&RecordId>,
        payload: &WaterPayload,
    ) -> ApiResult<WaterRecord> {
        match id {
            Some(id) => self.update_water(session, id, payload).await,
            None => self.add_water(session, payload).await,
        }
    }

    // ============================================
    // Shopping list
    // ============================================

    pub async fn list_cart(&self, session: &Session) -> ApiResult<Vec<ShoppingItem>> {
        self.get_list(session, "/api/cart/all", &[]).await
    }

    pub async fn add_cart_item(
        &self,
        session: &Session,
        payload: &ShoppingItemPayload,
    ) -> ApiResult<ShoppingItem> {
        self.send_json(Method::POST, session, "/api/cart/add", payload)
            .await
    }

    pub async fn update_cart_item(
        &self,
        session: &Session,
        id: &RecordId,
        payload: &ShoppingItemPayload,
    ) -> ApiResult<ShoppingItem> {
        let path = format!("/api/cart/update/{}", id);
        self.send_json(Method::PATCH, session, &path, payload).await
    }

    pub async fn delete_cart_item(&self, session: &Session, id: &RecordId) -> ApiResult<()> {
        self.delete(session, &format!("/api/cart/delete/{}", id))
            .await
    }

    // ============================================
    // Goals
    // ============================================

    /// Goals, optionally restricted to those created on one day
    pub async fn list_goals(&self, session: &Session, date: Option<DateKey>) -> ApiResult<Vec<Goal>> {
        let query = date_query(date);
        self.get_list(session, "/api/goals", &query).await
    }

    pub async fn create_goal(&self, session: &Session, goal: &NewGoal) -> ApiResult<Goal> {
        self.send_json(Method::POST, session, "/api/goals", goal).await
    }

    pub async fn update_goal(&self, session: &Session, goal: &Goal) -> ApiResult<Goal> {
        let path = format!("/api/goals/{}", goal.id);
        self.send_json(Method::PATCH, session, &path, goal).await
    }

    pub async fn delete_goal(&self, session: &Session, id: &RecordId) -> ApiResult<()> {
        self.delete(session, &format!("/api/goals/{}", id)).await
    }

    // ============================================
    // Request plumbing
    // ============================================

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, %url, "Sending request");

        let builder = self.client.request(method, url);
        match session {
            Some(session) => builder.header(reqwest::header::AUTHORIZATION, session.bearer()),
            None => builder,
        }
    }

    /// Send and turn non-success statuses into errors
    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(ApiError::from_send)?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Backend returned an error");
            Err(err)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, path, Some(session)).query(query);
        let response = self.execute(builder).await?;
        decode(response).await
    }

    /// Fetch a collection. A body that is not a JSON array counts as empty.
    async fn get_list<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Vec<T>> {
        let value: Value = self.get_json(session, path, query).await?;
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            other => {
                tracing::debug!(path, kind = json_kind(&other), "Expected a list, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(method, path, Some(session)).json(body);
        let response = self.execute(builder).await?;
        decode(response).await
    }

    async fn send_ignoring_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let builder = self.request(method, path, Some(session)).json(body);
        self.execute(builder).await?;
        Ok(())
    }

    async fn delete(&self, session: &Session, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, path, Some(session));
        self.execute(builder).await?;
        Ok(())
    }
}

fn date_query(date: Option<DateKey>) -> Vec<(&'static str, String)> {
    date.map(|d| vec![("date", d.to_string())]).unwrap_or_default()
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response.text().await.map_err(ApiError::from_send)?;
    serde_json::from_str(&text).map_err(ApiError::from)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
