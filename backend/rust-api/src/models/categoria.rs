use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Row from the `categorias` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Categoria {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload. Full replace on update, no partial patch.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoriaInput {
    #[validate(
        required(message = "Nome da categoria é obrigatório"),
        length(min = 1, message = "Nome da categoria é obrigatório")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}
