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
    models::UsuarioInput,
    services::{usuario_service::UsuarioService, AppState},
};

#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Usuários",
    responses((status = 200, description = "Usuários listados com sucesso"))
)]
pub async fn listar(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuarios = service.list().await?;

    Ok(envelope(usuarios, "Usuários listados com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn buscar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuario = service.get(id).await?;

    Ok(envelope(usuario, "Usuário encontrado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/email/{email}",
    tag = "Usuários",
    params(("email" = String, Path, description = "Email do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn buscar_por_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuario = service.get_by_email(&email).await?;

    Ok(envelope(usuario, "Usuário encontrado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/{id}/resultados",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses((status = 200, description = "Resultados do usuário listados com sucesso"))
)]
pub async fn buscar_resultados(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let resultados = service.resultados(id).await?;

    Ok(envelope(
        resultados,
        "Resultados do usuário listados com sucesso",
    ))
}

#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Usuários",
    request_body = UsuarioInput,
    responses(
        (status = 201, description = "Usuário criado com sucesso"),
        (status = 400, description = "Dados inválidos ou email já cadastrado")
    )
)]
pub async fn criar(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UsuarioInput>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuario = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(usuario, "Usuário criado com sucesso"),
    ))
}

#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    request_body = UsuarioInput,
    responses(
        (status = 200, description = "Usuário atualizado com sucesso"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn atualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<UsuarioInput>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuario = service.update(id, input).await?;

    Ok(envelope(usuario, "Usuário atualizado com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário deletado com sucesso"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn deletar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = UsuarioService::new(state.db.clone());
    let usuario = service.delete(id).await?;

    Ok(envelope(usuario, "Usuário deletado com sucesso"))
}
