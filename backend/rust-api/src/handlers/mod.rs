use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

pub mod categorias;
pub mod perguntas;
pub mod respostas;
pub mod resultados;
pub mod usuarios;

/// `{success: true, data, message}` wrapper every successful response uses.
pub(crate) fn envelope<T: Serialize>(data: T, message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "data": data,
        "message": message,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Sistema",
    responses((status = 200, description = "API funcionando normalmente"))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "API Quiz RH está funcionando!",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Router-level 404, distinct from entity-level not-found errors.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Rota não encontrada",
        })),
    )
}
