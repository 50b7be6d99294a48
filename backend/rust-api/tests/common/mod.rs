#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use quizrh_api::{config::Config, create_router, db, services::AppState};

/// Builds the real router wired to a fresh in-memory SQLite database.
///
/// The pool is capped at a single connection so every query in a test sees
/// the same `:memory:` database.
pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory test database");
    db::init_schema(&pool)
        .await
        .expect("Failed to create test schema");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        max_db_connections: 1,
    };

    let app_state = Arc::new(AppState::new(config, pool));

    create_router(app_state)
}

/// Drives one request through the app and returns status plus parsed body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Creates a user and returns its id.
pub async fn seed_usuario(app: &Router, nome: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/usuarios",
        Some(serde_json::json!({ "nome": nome, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

/// Creates a question (with no category) and returns its id.
pub async fn seed_pergunta(app: &Router, texto: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/perguntas",
        Some(serde_json::json!({ "texto": texto, "dificuldade": "facil" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}
