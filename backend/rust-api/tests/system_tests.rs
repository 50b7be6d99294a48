mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_check_reports_success_and_timestamp() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API Quiz RH está funcionando!");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_envelope_404() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(&app, "GET", "/api/nao-existe", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Rota não encontrada");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "API Quiz RH");
}
