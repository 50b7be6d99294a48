use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::{Redirect, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use services::AppState;

// Mirrors the original 10mb JSON body limit
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Security headers applied to every response (helmet equivalent)
async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    response
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any); // TODO: restrict to specific origins in production

    Router::new()
        .route("/health", get(handlers::health_check))
        // Interactive API documentation
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api", get(|| async { Redirect::to("/api-docs") }))
        .nest("/api/categorias", categorias_routes())
        .nest("/api/perguntas", perguntas_routes())
        .nest("/api/respostas", respostas_routes())
        .nest("/api/usuarios", usuarios_routes())
        .nest("/api/resultados", resultados_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            middlewares::rate_limit::rate_limit_middleware,
        ))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(
            middlewares::trace::request_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn categorias_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::categorias::listar).post(handlers::categorias::criar),
        )
        .route(
            "/{id}",
            get(handlers::categorias::buscar)
                .put(handlers::categorias::atualizar)
                .delete(handlers::categorias::deletar),
        )
}

fn perguntas_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::perguntas::listar).post(handlers::perguntas::criar),
        )
        .route(
            "/categoria/{categoria_id}",
            get(handlers::perguntas::buscar_por_categoria),
        )
        .route(
            "/dificuldade/{dificuldade}",
            get(handlers::perguntas::buscar_por_dificuldade),
        )
        .route(
            "/{id}",
            get(handlers::perguntas::buscar)
                .put(handlers::perguntas::atualizar)
                .delete(handlers::perguntas::deletar),
        )
}

fn respostas_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::respostas::listar).post(handlers::respostas::criar),
        )
        .route("/multiple", post(handlers::respostas::criar_multiplas))
        .route(
            "/pergunta/{pergunta_id}",
            get(handlers::respostas::buscar_por_pergunta)
                .delete(handlers::respostas::deletar_por_pergunta),
        )
        .route(
            "/pergunta/{pergunta_id}/correta",
            get(handlers::respostas::buscar_correta),
        )
        .route(
            "/{id}",
            get(handlers::respostas::buscar)
                .put(handlers::respostas::atualizar)
                .delete(handlers::respostas::deletar),
        )
}

fn usuarios_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::usuarios::listar).post(handlers::usuarios::criar),
        )
        .route("/email/{email}", get(handlers::usuarios::buscar_por_email))
        .route(
            "/{id}/resultados",
            get(handlers::usuarios::buscar_resultados),
        )
        .route(
            "/{id}",
            get(handlers::usuarios::buscar)
                .put(handlers::usuarios::atualizar)
                .delete(handlers::usuarios::deletar),
        )
}

fn resultados_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::resultados::listar).post(handlers::resultados::criar),
        )
        .route("/top-scores", get(handlers::resultados::top_scores))
        .route("/estatisticas", get(handlers::resultados::estatisticas))
        .route(
            "/usuario/{usuario_id}",
            get(handlers::resultados::buscar_por_usuario)
                .delete(handlers::resultados::deletar_por_usuario),
        )
        .route(
            "/{id}",
            get(handlers::resultados::buscar)
                .put(handlers::resultados::atualizar)
                .delete(handlers::resultados::deletar),
        )
}
