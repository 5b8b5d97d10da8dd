use chrono::NaiveDate;
use fitfusion::api::{
    ApiError, ClientConfig, Credentials, FitnessClient, GoalStatus, Session, ShoppingItemPayload,
    WorkoutPlanRequest,
};
use fitfusion::metrics::{BodyMetrics, DateKey, Gender, Height};
use fitfusion::water::WaterTracker;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FitnessClient {
    FitnessClient::new(ClientConfig {
        base_url: server.uri(),
        plan_service_url: None,
        request_timeout_ms: 5_000,
    })
    .unwrap()
}

fn session() -> Session {
    Session::new("tok-123")
}

#[tokio::test]
async fn login_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "jo@example.com", "password": "Secret#123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .login(&Credentials::login("jo@example.com", "Secret#123"))
        .await
        .unwrap();
    assert_eq!(session.token(), "abc");
}

#[tokio::test]
async fn login_without_token_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "jo"})))
        .mount(&server)
        .await;

    let res = client_for(&server)
        .login(&Credentials::login("jo@example.com", "Secret#123"))
        .await;
    assert!(matches!(res, Err(ApiError::MissingToken)));
}

#[tokio::test]
async fn login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let res = client_for(&server)
        .login(&Credentials::login("jo@example.com", "wrong"))
        .await;
    assert!(matches!(res, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn register_email_taken() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Jo",
            "email": "jo@example.com",
            "password": "Secret#123"
        })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Email already exists"})),
        )
        .mount(&server)
        .await;

    let res = client_for(&server)
        .register(&Credentials::signup("Jo", "jo@example.com", "Secret#123"))
        .await;
    assert!(matches!(res, Err(ApiError::EmailTaken)));
}

#[tokio::test]
async fn requests_carry_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(query_param("date", "2024-03-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "goalType": "Run km",
                "targetValue": 50.0,
                "currentValue": 50.0,
                "status": "completed",
                "createdDate": "2024-03-10"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let date: DateKey = "2024-03-10".parse().unwrap();
    let goals = client_for(&server)
        .list_goals(&session(), Some(date))
        .await
        .unwrap();

    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].status, GoalStatus::Completed);
}

#[tokio::test]
async fn non_array_list_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cart/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "no items"})))
        .mount(&server)
        .await;

    let items = client_for(&server).list_cart(&session()).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn expired_session_needs_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).me(&session()).await.unwrap_err();
    assert!(err.needs_login());
}

#[tokio::test]
async fn server_error_keeps_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let payload = ShoppingItemPayload {
        item_name: "Oats".to_string(),
        quantity: 2,
    };
    let err = client_for(&server)
        .add_cart_item(&session(), &payload)
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn water_tracker_creates_then_updates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/water/list"))
        .and(query_param("date", "2024-03-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/water/add"))
        .and(body_json(json!({
            "amountLiters": 0.5,
            "goalLiters": 2.0,
            "date": "2024-03-10"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "date": "2024-03-10",
            "amountLiters": 0.5,
            "goalLiters": 2.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/water/update/12"))
        .and(body_json(json!({
            "amountLiters": 0.75,
            "goalLiters": 2.0,
            "date": "2024-03-10"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "date": "2024-03-10",
            "amountLiters": 0.75,
            "goalLiters": 2.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = session();
    let day: DateKey = "2024-03-10".parse().unwrap();

    let mut tracker = WaterTracker::load(&client, &session, day, 2000).await.unwrap();
    assert_eq!(tracker.intake_ml(), 0);
    assert!(tracker.record_id().is_none());

    tracker.add(500);
    tracker.save(&client, &session).await.unwrap();
    assert_eq!(tracker.record_id().map(|id| id.as_str()), Some("12"));

    tracker.add(250);
    tracker.save(&client, &session).await.unwrap();
}

#[tokio::test]
async fn dashboard_loads_all_records() {
    let server = MockServer::start().await;

    let routes = [
        (
            "/api/workout/user",
            json!([
                {"id": 1, "createdAt": "2024-03-11T09:00:00"},
                {"id": 2, "createdAt": "2024-03-11T18:30:00.250"},
                {"id": 3, "createdAt": "2024-03-08T07:00:00"}
            ]),
        ),
        ("/api/diet/all", json!([{"id": 4, "Recommended_Meal_Plan": "Balanced"}])),
        (
            "/api/water/list",
            json!([
                {"id": 5, "date": "2024-03-10", "amountLiters": 0.5},
                {"id": 6, "date": "2024-03-10", "amountLiters": 0.3},
                {"id": 7, "date": "2024-02-01", "amountLiters": 1.0}
            ]),
        ),
        ("/api/cart/all", json!([{"id": 8, "itemName": "Oats", "quantity": 1}])),
        (
            "/api/goals",
            json!([
                {"id": 9, "goalType": "Steps", "targetValue": 10000, "status": "completed"},
                {"id": 10, "goalType": "Sleep", "targetValue": 8, "status": "pending"}
            ]),
        ),
    ];

    for (route, body) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    let dashboard = client_for(&server)
        .load_dashboard(&session(), today)
        .await
        .unwrap();

    let values: Vec<String> = dashboard
        .stats
        .cards()
        .into_iter()
        .map(|c| c.value)
        .collect();
    assert_eq!(values, vec!["3", "1", "1.8 L", "1", "1/2"]);

    let chart = dashboard.chart();
    let labels: Vec<&str> = chart.iter().map(|p| p.day.as_str()).collect();
    assert_eq!(
        labels,
        vec!["03-05", "03-06", "03-07", "03-08", "03-09", "03-10", "03-11"]
    );
    assert_eq!(chart[3].workouts, 1);
    assert_eq!(chart[6].workouts, 2);
    assert!((chart[5].water - 0.8).abs() < 1e-9);
    assert_eq!(chart[0].workouts, 0);
    assert_eq!(chart[0].water, 0.0);
}

#[tokio::test]
async fn dashboard_fails_when_any_fetch_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    let res = client_for(&server).load_dashboard(&session(), today).await;
    assert!(matches!(res, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn generate_workout_plan_wakes_service_and_extracts_plan() {
    let server = MockServer::start().await;
    let plan_service = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&plan_service)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/workout/generate"))
        .and(body_json(json!({
            "Weight": 70.0,
            "Height": 1.75,
            "BMI": 22.9,
            "Gender": "Male",
            "Age": 29,
            "BMIcase": "Normal",
            "AgeGroup": "Young"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workout": {"id": 3, "planJson": {"day1": ["Squats", "Plank"]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FitnessClient::new(ClientConfig {
        base_url: server.uri(),
        plan_service_url: Some(plan_service.uri()),
        request_timeout_ms: 5_000,
    })
    .unwrap();

    let body = BodyMetrics::new(70.0, Height::Meters(1.75), 29.0, Gender::Male);
    let request = WorkoutPlanRequest::from_body(&body).unwrap();
    let plan = client
        .generate_workout_plan(&session(), &request)
        .await
        .unwrap();

    assert_eq!(plan, json!({"day1": ["Squats", "Plank"]}));
}

#[tokio::test]
async fn unreachable_backend_is_unavailable() {
    let client = FitnessClient::new(ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        plan_service_url: None,
        request_timeout_ms: 2_000,
    })
    .unwrap();

    let err = client.list_workouts(&session()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unavailable | ApiError::Timeout));
}
