use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use super::envelope;
use crate::{
    error::Result,
    models::{ResultadoInput, TopScoresQuery},
    services::{resultado_service::ResultadoService, AppState},
};

#[utoipa::path(
    get,
    path = "/api/resultados",
    tag = "Resultados",
    responses((status = 200, description = "Resultados listados com sucesso"))
)]
pub async fn listar(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultados = service.list().await?;

    Ok(envelope(resultados, "Resultados listados com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/resultados/{id}",
    tag = "Resultados",
    params(("id" = i64, Path, description = "ID do resultado")),
    responses(
        (status = 200, description = "Resultado encontrado"),
        (status = 404, description = "Resultado não encontrado")
    )
)]
pub async fn buscar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultado = service.get(id).await?;

    Ok(envelope(resultado, "Resultado encontrado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/resultados/usuario/{usuario_id}",
    tag = "Resultados",
    params(("usuario_id" = i64, Path, description = "ID do usuário")),
    responses((status = 200, description = "Resultados do usuário listados com sucesso"))
)]
pub async fn buscar_por_usuario(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultados = service.list_by_usuario(usuario_id).await?;

    Ok(envelope(
        resultados,
        "Resultados do usuário listados com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/resultados/top-scores",
    tag = "Resultados",
    params(TopScoresQuery),
    responses(
        (status = 200, description = "Melhores pontuações listadas com sucesso"),
        (status = 400, description = "Limite inválido")
    )
)]
pub async fn top_scores(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopScoresQuery>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultados = service.top_scores(query.limit).await?;

    Ok(envelope(
        resultados,
        "Melhores pontuações listadas com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/resultados/estatisticas",
    tag = "Resultados",
    responses((status = 200, description = "Estatísticas calculadas com sucesso"))
)]
pub async fn estatisticas(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let estatisticas = service.estatisticas().await?;

    Ok(envelope(estatisticas, "Estatísticas calculadas com sucesso"))
}

#[utoipa::path(
    post,
    path = "/api/resultados",
    tag = "Resultados",
    request_body = ResultadoInput,
    responses(
        (status = 201, description = "Resultado criado com sucesso"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ResultadoInput>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultado = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        envelope(resultado, "Resultado criado com sucesso"),
    ))
}

#[utoipa::path(
    put,
    path = "/api/resultados/{id}",
    tag = "Resultados",
    params(("id" = i64, Path, description = "ID do resultado")),
    request_body = ResultadoInput,
    responses(
        (status = 200, description = "Resultado atualizado com sucesso"),
        (status = 404, description = "Resultado não encontrado")
    )
)]
pub async fn atualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<ResultadoInput>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultado = service.update(id, input).await?;

    Ok(envelope(resultado, "Resultado atualizado com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/resultados/{id}",
    tag = "Resultados",
    params(("id" = i64, Path, description = "ID do resultado")),
    responses(
        (status = 200, description = "Resultado deletado com sucesso"),
        (status = 404, description = "Resultado não encontrado")
    )
)]
pub async fn deletar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultado = service.delete(id).await?;

    Ok(envelope(resultado, "Resultado deletado com sucesso"))
}

#[utoipa::path(
    delete,
    path = "/api/resultados/usuario/{usuario_id}",
    tag = "Resultados",
    params(("usuario_id" = i64, Path, description = "ID do usuário")),
    responses((status = 200, description = "Resultados do usuário deletados com sucesso"))
)]
pub async fn deletar_por_usuario(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = ResultadoService::new(state.db.clone());
    let resultados = service.delete_by_usuario(usuario_id).await?;

    Ok(envelope(
        resultados,
        "Resultados do usuário deletados com sucesso",
    ))
}
