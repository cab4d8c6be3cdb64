//! System surface: status endpoint, scanner journal, embedded UI fallback.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lbcwatch::api::AppState;
use lbcwatch::config::Config;
use lbcwatch::entities::logs;
use sea_orm::{EntityTrait, Set};
use std::sync::Arc;
use tower::ServiceExt;

const TEST_PASSWORD: &str = "sesame-ouvre-toi";

async fn spawn_app() -> (Arc<AppState>, Router) {
    let db_path =
        std::env::temp_dir().join(format!("lbcwatch-system-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.auth.password = TEST_PASSWORD.to_string();

    let state = lbcwatch::api::create_app_state(config)
        .await
        .expect("failed to create app state");
    let router = lbcwatch::api::router(state.clone());
    (state, router)
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(format!(r#"{{"password":"{TEST_PASSWORD}"}}"#)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .expect("login should establish a session")
}

async fn json_body(response: axum::http::Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// The scanner writes journal rows out-of-band; reproduce that here.
async fn seed_log(state: &AppState, message: &str, level: &str, created_at: &str) {
    let model = logs::ActiveModel {
        message: Set(message.to_string()),
        level: Set(level.to_string()),
        created_at: Set(created_at.to_string()),
        ..Default::default()
    };
    logs::Entity::insert(model)
        .exec(&state.store.conn)
        .await
        .expect("failed to seed log");
}

#[tokio::test]
async fn test_system_status_reports_version_and_scanner() {
    let (_state, app) = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/system/status")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["data"]["timezone"], "Europe/Paris");
    assert_eq!(body["data"]["scanner"]["status"], "inactive");
}

#[tokio::test]
async fn test_system_logs_returns_latest_first() {
    let (state, app) = spawn_app().await;
    let cookie = login(&app).await;

    seed_log(&state, "Démarrage du scanner", "SYSTEM", "2026-01-01 08:00:00").await;
    seed_log(&state, "Scan: Vélo Toulouse", "INFO", "2026-01-01 08:01:00").await;
    seed_log(&state, "3 news: Vélo Toulouse", "SUCCESS", "2026-01-01 08:02:00").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/system/logs?limit=2")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["message"], "3 news: Vélo Toulouse");
    assert_eq!(entries[0]["level"], "SUCCESS");
    assert_eq!(entries[1]["message"], "Scan: Vélo Toulouse");
}

#[tokio::test]
async fn test_ui_assets_are_served_without_auth() {
    let (_state, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    // Unknown paths fall back to the single page.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/some/client/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
