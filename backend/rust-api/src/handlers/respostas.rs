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
    models::{RespostaInput, RespostasMultiplasInput},
    services::{resposta_service::RespostaService, AppState},
};

#[utoipa::path(
    get,
    path = "/api/respostas",
    tag = "Respostas",
    responses((status = 200, description = "Respostas listadas com sucesso"))
)]
pub async fn listar(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let respostas = service.list().await?;

    Ok(envelope(respostas, "Respostas listadas com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/respostas/{id}",
    tag = "Respostas",
    params(("id" = i64, Path, description = "ID da resposta")),
    responses(
        (status = 200, description = "Resposta encontrada"),
        (status = 404, description = "Resposta não encontrada")
    )
)]
pub async fn buscar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let resposta = service.get(id).await?;

    Ok(envelope(resposta, "Resposta encontrada com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/respostas/pergunta/{pergunta_id}",
    tag = "Respostas",
    params(("pergunta_id" = i64, Path, description = "ID da pergunta")),
    responses((status = 200, description = "Respostas da pergunta listadas com sucesso"))
)]
pub async fn buscar_por_pergunta(
    State(state): State<Arc<AppState>>,
    Path(pergunta_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let respostas = service.list_by_pergunta(pergunta_id).await?;

    Ok(envelope(
        respostas,
        "Respostas da pergunta listadas com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/respostas/pergunta/{pergunta_id}/correta",
    tag = "Respostas",
    params(("pergunta_id" = i64, Path, description = "ID da pergunta")),
    responses(
        (status = 200, description = "Resposta correta encontrada"),
        (status = 404, description = "Resposta correta não encontrada")
    )
)]
pub async fn buscar_correta(
    State(state): State<Arc<AppState>>,
    Path(pergunta_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let resposta = service.correta_by_pergunta(pergunta_id).await?;

    Ok(envelope(resposta, "Resposta correta encontrada com sucesso"))
}

#[utoipa::path(
    post,
    path = "/api/respostas",
    tag = "Respostas",
    request_body = RespostaInput,
    responses(
        (status = 201, description = "Resposta criada com sucesso"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RespostaInput>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let resposta = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(resposta, "Resposta criada com sucesso"),
    ))
}

/// Atomic batch: either every answer in the payload is created or none is.
#[utoipa::path(
    post,
    path = "/api/respostas/multiple",
    tag = "Respostas",
    request_body = RespostasMultiplasInput,
    responses(
        (status = 201, description = "Respostas criadas com sucesso"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_multiplas(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RespostasMultiplasInput>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let respostas = service.create_multiple(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(respostas, "Respostas criadas com sucesso"),
    ))
}

#[utoipa::path(
    put,
    path = "/api/respostas/{id}",
    tag = "Respostas",
    params(("id" = i64, Path, description = "ID da resposta")),
    request_body = RespostaInput,
    responses(
        (status = 200, description = "Resposta atualizada com sucesso"),
        (status = 404, description = "Resposta não encontrada")
    )
)]
pub async fn atualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<RespostaInput>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let resposta = service.update(id, input).await?;

    Ok(envelope(resposta, "Resposta atualizada com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/respostas/{id}",
    tag = "Respostas",
    params(("id" = i64, Path, description = "ID da resposta")),
    responses(
        (status = 200, description = "Resposta deletada com sucesso"),
        (status = 404, description = "Resposta não encontrada")
    )
)]
pub async fn deletar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let resposta = service.delete(id).await?;

    Ok(envelope(resposta, "Resposta deletada com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/respostas/pergunta/{pergunta_id}",
    tag = "Respostas",
    params(("pergunta_id" = i64, Path, description = "ID da pergunta")),
    responses((status = 200, description = "Respostas da pergunta deletadas com sucesso"))
)]
pub async fn deletar_por_pergunta(
    State(state): State<Arc<AppState>>,
    Path(pergunta_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = RespostaService::new(state.db.clone());
    let respostas = service.delete_by_pergunta(pergunta_id).await?;

    Ok(envelope(
        respostas,
        "Respostas da pergunta deletadas com sucesso",
    ))
}
