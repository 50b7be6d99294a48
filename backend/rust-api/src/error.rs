use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for every request-handling failure. Validation is checked
/// before any store access; database failures propagate untouched and are
/// converted into the response envelope at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Validation failed: {}", msg);
            }
            AppError::NotFound(msg) => {
                tracing::info!("Resource not found: {}", msg);
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
            }
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Flattens validator output into the first per-field message so clients get
/// a single actionable sentence, matching the handwritten checks elsewhere.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Campo inválido: {}", field))
                })
            })
            .next()
            .unwrap_or_else(|| "Dados de entrada inválidos".to_string());

        AppError::Validation(message)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_error_keeps_underlying_text() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Erro de banco de dados:"));
    }
}
