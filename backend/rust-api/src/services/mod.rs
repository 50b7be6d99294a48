use sqlx::sqlite::SqlitePool;

use crate::config::Config;
use crate::middlewares::rate_limit::RateLimiter;

/// Shared per-process state. The pool is the only durable-state owner;
/// services hold no caches of their own.
pub struct AppState {
    pub config: Config,
    pub db: SqlitePool,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: Config, db: SqlitePool) -> Self {
        Self {
            config,
            db,
            rate_limiter: RateLimiter::default(),
        }
    }
}

pub mod categoria_service;
pub mod pergunta_service;
pub mod resposta_service;
pub mod resultado_service;
pub mod usuario_service;
