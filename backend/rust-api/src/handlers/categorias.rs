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
    models::CategoriaInput,
    services::{categoria_service::CategoriaService, AppState},
};

#[utoipa::path(
    get,
    path = "/api/categorias",
    tag = "Categorias",
    responses((status = 200, description = "Categorias listadas com sucesso"))
)]
pub async fn listar(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = CategoriaService::new(state.db.clone());
    let categorias = service.list().await?;

    Ok(envelope(categorias, "Categorias listadas com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria encontrada"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn buscar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = CategoriaService::new(state.db.clone());
    let categoria = service.get(id).await?;

    Ok(envelope(categoria, "Categoria encontrada com sucesso"))
}

#[utoipa::path(
    post,
    path = "/api/categorias",
    tag = "Categorias",
    request_body = CategoriaInput,
    responses(
        (status = 201, description = "Categoria criada com sucesso"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CategoriaInput>,
) -> Result<impl IntoResponse> {
    let service = CategoriaService::new(state.db.clone());
    let categoria = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(categoria, "Categoria criada com sucesso"),
    ))
}

#[utoipa::path(
    put,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    request_body = CategoriaInput,
    responses(
        (status = 200, description = "Categoria atualizada com sucesso"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn atualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<CategoriaInput>,
) -> Result<impl IntoResponse> {
    let service = CategoriaService::new(state.db.clone());
    let categoria = service.update(id, input).await?;

    Ok(envelope(categoria, "Categoria atualizada com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria deletada com sucesso"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn deletar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = CategoriaService::new(state.db.clone());
    let categoria = service.delete(id).await?;

    Ok(envelope(categoria, "Categoria deletada com sucesso"))
}
