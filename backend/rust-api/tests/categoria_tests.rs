mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_get_categoria() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/categorias",
        Some(json!({ "nome": "Gestão de Pessoas", "descricao": "Perguntas sobre RH" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["nome"], "Gestão de Pessoas");
    assert!(body["data"]["id"].as_i64().unwrap() >= 1);
    assert!(body["data"]["created_at"].is_string());

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, body) =
        common::send(&app, "GET", &format!("/api/categorias/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["descricao"], "Perguntas sobre RH");
}

#[tokio::test]
async fn create_without_nome_is_rejected() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/categorias",
        Some(json!({ "descricao": "sem nome" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Nome da categoria é obrigatório");

    let (_, body) = common::send(&app, "GET", "/api/categorias", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_nome_is_rejected() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/categorias",
        Some(json!({ "nome": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nome da categoria é obrigatório");
}

#[tokio::test]
async fn list_is_ordered_newest_first() {
    let app = common::create_test_app().await;

    for nome in ["Primeira", "Segunda", "Terceira"] {
        let (status, _) = common::send(
            &app,
            "POST",
            "/api/categorias",
            Some(json!({ "nome": nome })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (status, body) = common::send(&app, "GET", "/api/categorias", None).await;

    assert_eq!(status, StatusCode::OK);
    let nomes: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["nome"].as_str().unwrap())
        .collect();
    assert_eq!(nomes, vec!["Terceira", "Segunda", "Primeira"]);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = common::create_test_app().await;

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/categorias",
        Some(json!({ "nome": "Antiga", "descricao": "antes" })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/categorias/{}", id),
        Some(json!({ "nome": "Nova" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nome"], "Nova");
    // Full replace: descricao omitted in the payload clears the column
    assert!(body["data"]["descricao"].is_null());
}

#[tokio::test]
async fn update_missing_categoria_returns_404() {
    let app = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        "PUT",
        "/api/categorias/9999",
        Some(json!({ "nome": "Qualquer" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Categoria não encontrada");
}

#[tokio::test]
async fn delete_returns_removed_row_and_404_when_absent() {
    let app = common::create_test_app().await;

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/categorias",
        Some(json!({ "nome": "Descartável" })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) =
        common::send(&app, "DELETE", &format!("/api/categorias/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nome"], "Descartável");

    let (status, body) =
        common::send(&app, "DELETE", &format!("/api/categorias/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
