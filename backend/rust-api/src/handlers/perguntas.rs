use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use super::envelope;
use crate::{
    error::Result,
    models::PerguntaInput,
    services::{pergunta_service::PerguntaService, AppState},
};

#[utoipa::path(
    get,
    path = "/api/perguntas",
    tag = "Perguntas",
    responses((status = 200, description = "Perguntas listadas com sucesso"))
)]
pub async fn listar(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let perguntas = service.list().await?;

    Ok(envelope(perguntas, "Perguntas listadas com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/perguntas/{id}",
    tag = "Perguntas",
    params(("id" = i64, Path, description = "ID da pergunta")),
    responses(
        (status = 200, description = "Pergunta encontrada"),
        (status = 404, description = "Pergunta não encontrada")
    )
)]
pub async fn buscar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let pergunta = service.get(id).await?;

    Ok(envelope(pergunta, "Pergunta encontrada com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/perguntas/categoria/{categoria_id}",
    tag = "Perguntas",
    params(("categoria_id" = i64, Path, description = "ID da categoria")),
    responses((status = 200, description = "Perguntas da categoria listadas com sucesso"))
)]
pub async fn buscar_por_categoria(
    State(state): State<Arc<AppState>>,
    Path(categoria_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let perguntas = service.list_by_categoria(categoria_id).await?;

    Ok(envelope(
        perguntas,
        "Perguntas da categoria listadas com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/perguntas/dificuldade/{dificuldade}",
    tag = "Perguntas",
    params(("dificuldade" = String, Path, description = "facil, medio ou dificil")),
    responses((status = 200, description = "Perguntas listadas com sucesso"))
)]
pub async fn buscar_por_dificuldade(
    State(state): State<Arc<AppState>>,
    Path(dificuldade): Path<String>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let perguntas = service.list_by_dificuldade(&dificuldade).await?;

    let message = format!("Perguntas de dificuldade {} listadas com sucesso", dificuldade);
    Ok(envelope(perguntas, &message))
}

#[utoipa::path(
    post,
    path = "/api/perguntas",
    tag = "Perguntas",
    request_body = PerguntaInput,
    responses(
        (status = 201, description = "Pergunta criada com sucesso"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PerguntaInput>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let pergunta = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(pergunta, "Pergunta criada com sucesso"),
    ))
}

#[utoipa::path(
    put,
    path = "/api/perguntas/{id}",
    tag = "Perguntas",
    params(("id" = i64, Path, description = "ID da pergunta")),
    request_body = PerguntaInput,
    responses(
        (status = 200, description = "Pergunta atualizada com sucesso"),
        (status = 404, description = "Pergunta não encontrada")
    )
)]
pub async fn atualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<PerguntaInput>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let pergunta = service.update(id, input).await?;

    Ok(envelope(pergunta, "Pergunta atualizada com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/perguntas/{id}",
    tag = "Perguntas",
    params(("id" = i64, Path, description = "ID da pergunta")),
    responses(
        (status = 200, description = "Pergunta deletada com sucesso"),
        (status = 404, description = "Pergunta não encontrada")
    )
)]
pub async fn deletar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = PerguntaService::new(state.db.clone());
    let pergunta = service.delete(id).await?;

    Ok(envelope(pergunta, "Pergunta deletada com sucesso"))
}
