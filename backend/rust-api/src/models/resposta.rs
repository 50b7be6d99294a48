use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Row from the `respostas` table, with the owning question's text
/// denormalized on reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resposta {
    pub id: i64,
    pub pergunta_id: i64,
    pub texto: String,
    pub correta: bool,
    #[sqlx(default)]
    pub pergunta_texto: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RespostaInput {
    #[validate(required(message = "ID da pergunta é obrigatório"))]
    pub pergunta_id: Option<i64>,
    #[validate(
        required(message = "Texto da resposta é obrigatório"),
        length(min = 1, message = "Texto da resposta é obrigatório")
    )]
    pub texto: Option<String>,
    pub correta: Option<bool>,
}

/// One element of the atomic batch insert.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RespostaItem {
    pub texto: Option<String>,
    pub correta: Option<bool>,
}

/// Payload of `POST /api/respostas/multiple`. The list itself and each
/// element's `texto` are validated before any transaction is opened.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RespostasMultiplasInput {
    #[validate(required(message = "ID da pergunta é obrigatório"))]
    pub pergunta_id: Option<i64>,
    pub respostas: Option<Vec<RespostaItem>>,
}
