use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Row from the `resultados_quiz` table, with the owner's display name
/// denormalized on reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultadoQuiz {
    pub id: i64,
    pub usuario_id: i64,
    pub pontuacao: i64,
    pub total_perguntas: i64,
    pub data_quiz: DateTime<Utc>,
    #[sqlx(default)]
    pub usuario_nome: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResultadoInput {
    #[validate(required(message = "ID do usuário é obrigatório"))]
    pub usuario_id: Option<i64>,
    /// Zero is a valid score; only absence is rejected here. The
    /// score-vs-total cross check lives in the service.
    #[validate(required(message = "Pontuação é obrigatória"))]
    pub pontuacao: Option<i64>,
    #[validate(
        required(message = "Total de perguntas é obrigatório"),
        range(min = 1, message = "Total de perguntas é obrigatório")
    )]
    pub total_perguntas: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopScoresQuery {
    /// Maximum number of rows to return (default 10, must be positive).
    pub limit: Option<i64>,
}

/// Point-in-time aggregate over the whole `resultados_quiz` table. The three
/// SQL aggregates are null when the table is empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Estatisticas {
    pub total_resultados: i64,
    pub media_pontuacao: Option<f64>,
    pub maior_pontuacao: Option<i64>,
    pub menor_pontuacao: Option<i64>,
    pub total_usuarios: i64,
}
