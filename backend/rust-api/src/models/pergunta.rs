use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Accepted difficulty levels, stored verbatim in the `dificuldade` column.
pub const DIFICULDADES: [&str; 3] = ["facil", "medio", "dificil"];

/// Row from the `perguntas` table. `categoria_nome` is denormalized from the
/// LEFT JOIN on reads and absent on insert/update returns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pergunta {
    pub id: i64,
    pub categoria_id: Option<i64>,
    pub texto: String,
    pub dificuldade: String,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    pub categoria_nome: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PerguntaInput {
    pub categoria_id: Option<i64>,
    #[validate(
        required(message = "Texto da pergunta é obrigatório"),
        length(min = 1, message = "Texto da pergunta é obrigatório")
    )]
    pub texto: Option<String>,
    /// Must be one of `facil`, `medio`, `dificil`; checked in the service so
    /// the error message lists the accepted values.
    pub dificuldade: Option<String>,
}
