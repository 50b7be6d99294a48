use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizrh_api::{config::Config, create_router, db, services::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizrh_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QuizRH API");

    let config = Config::load()?;
    tracing::info!(
        "Configuration loaded for environment: {:?}",
        std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
    );

    let pool = db::connect(&config.database_url, config.max_db_connections).await?;
    db::init_schema(&pool).await?;
    tracing::info!("Database connected, schema ensured");

    let app_state = Arc::new(AppState::new(config.clone(), pool));
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // ConnectInfo backs the per-IP rate limiter when no proxy headers are set
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
