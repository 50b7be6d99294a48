use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

lazy_static! {
    /// Basic shape check: local-part "@" domain "." tld, no whitespace.
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Row from the `usuarios` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UsuarioInput {
    #[validate(
        required(message = "Nome do usuário é obrigatório"),
        length(min = 1, message = "Nome do usuário é obrigatório")
    )]
    pub nome: Option<String>,
    #[validate(
        required(message = "Email do usuário é obrigatório"),
        length(min = 1, message = "Email do usuário é obrigatório"),
        regex(path = *EMAIL_REGEX, message = "Formato de email inválido")
    )]
    pub email: Option<String>,
}
