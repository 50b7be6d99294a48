mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn seed_resultado(app: &axum::Router, usuario_id: i64, pontuacao: i64, total: i64) -> i64 {
    let (status, body) = common::send(
        app,
        "POST",
        "/api/resultados",
        Some(json!({ "usuario_id": usuario_id, "pontuacao": pontuacao, "total_perguntas": total })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_and_get_resultado() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;
    let id = seed_resultado(&app, ana, 8, 10).await;

    let (status, body) = common::send(&app, "GET", &format!("/api/resultados/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pontuacao"], 8);
    assert_eq!(body["data"]["total_perguntas"], 10);
    assert_eq!(body["data"]["usuario_nome"], "Ana");
}

#[tokio::test]
async fn score_above_total_is_rejected() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/resultados",
        Some(json!({ "usuario_id": ana, "pontuacao": 11, "total_perguntas": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Pontuação não pode ser maior que o total de perguntas"
    );

    let (_, body) = common::send(&app, "GET", "/api/resultados", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn zero_score_is_valid() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/resultados",
        Some(json!({ "usuario_id": ana, "pontuacao": 0, "total_perguntas": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["pontuacao"], 0);
}

#[tokio::test]
async fn missing_pontuacao_is_rejected() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/resultados",
        Some(json!({ "usuario_id": ana, "total_perguntas": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Pontuação é obrigatória");
}

#[tokio::test]
async fn top_scores_break_ties_by_oldest_first() {
    let app = common::create_test_app().await;
    let bia = common::seed_usuario(&app, "Bia", "bia@example.com").await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;
    let carlos = common::seed_usuario(&app, "Carlos", "carlos@example.com").await;

    // Bia scores 8 first, Ana ties later, Carlos trails with 5.
    seed_resultado(&app, bia, 8, 10).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    seed_resultado(&app, ana, 8, 10).await;
    seed_resultado(&app, carlos, 5, 10).await;

    let (status, body) =
        common::send(&app, "GET", "/api/resultados/top-scores?limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    let top = body["data"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["usuario_nome"], "Bia");
    assert_eq!(top[1]["usuario_nome"], "Ana");
}

#[tokio::test]
async fn top_scores_rejects_non_positive_limit() {
    let app = common::create_test_app().await;

    let (status, body) =
        common::send(&app, "GET", "/api/resultados/top-scores?limit=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Limite deve ser um número inteiro positivo");
}

#[tokio::test]
async fn estatisticas_on_empty_table() {
    let app = common::create_test_app().await;

    let (status, body) =
        common::send(&app, "GET", "/api/resultados/estatisticas", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_resultados"], 0);
    assert_eq!(body["data"]["total_usuarios"], 0);
    assert!(body["data"]["media_pontuacao"].is_null());
    assert!(body["data"]["maior_pontuacao"].is_null());
    assert!(body["data"]["menor_pontuacao"].is_null());
}

#[tokio::test]
async fn estatisticas_aggregate_all_results() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;
    let bia = common::seed_usuario(&app, "Bia", "bia@example.com").await;

    seed_resultado(&app, ana, 8, 10).await;
    seed_resultado(&app, ana, 6, 10).await;
    seed_resultado(&app, bia, 10, 10).await;

    let (status, body) =
        common::send(&app, "GET", "/api/resultados/estatisticas", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_resultados"], 3);
    assert_eq!(body["data"]["media_pontuacao"], 8.0);
    assert_eq!(body["data"]["maior_pontuacao"], 10);
    assert_eq!(body["data"]["menor_pontuacao"], 6);
    assert_eq!(body["data"]["total_usuarios"], 2);
}

#[tokio::test]
async fn delete_by_usuario_removes_all_their_results() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;
    let bia = common::seed_usuario(&app, "Bia", "bia@example.com").await;

    seed_resultado(&app, ana, 8, 10).await;
    seed_resultado(&app, ana, 6, 10).await;
    seed_resultado(&app, bia, 5, 10).await;

    let (status, body) =
        common::send(&app, "DELETE", &format!("/api/resultados/usuario/{}", ana), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = common::send(&app, "GET", "/api/resultados", None).await;
    let restantes = body["data"].as_array().unwrap();
    assert_eq!(restantes.len(), 1);
    assert_eq!(restantes[0]["usuario_nome"], "Bia");
}

#[tokio::test]
async fn update_resultado_revalidates_score() {
    let app = common::create_test_app().await;
    let ana = common::seed_usuario(&app, "Ana", "ana@example.com").await;
    let id = seed_resultado(&app, ana, 8, 10).await;

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/resultados/{}", id),
        Some(json!({ "usuario_id": ana, "pontuacao": 12, "total_perguntas": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Pontuação não pode ser maior que o total de perguntas"
    );

    let (_, body) = common::send(&app, "GET", &format!("/api/resultados/{}", id), None).await;
    assert_eq!(body["data"]["pontuacao"], 8);
}

#[tokio::test]
async fn delete_missing_resultado_returns_404() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(&app, "DELETE", "/api/resultados/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resultado não encontrado");
}
