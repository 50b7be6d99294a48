use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{ResultadoQuiz, Usuario, UsuarioInput};

pub struct UsuarioService {
    db: SqlitePool,
}

impl UsuarioService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Usuario>> {
        let usuarios =
            sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios ORDER BY created_at DESC")
                .fetch_all(&self.db)
                .await?;

        Ok(usuarios)
    }

    pub async fn get(&self, id: i64) -> Result<Usuario> {
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Usuario> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))
    }

    /// Quiz results belonging to one user, newest first.
    pub async fn resultados(&self, usuario_id: i64) -> Result<Vec<ResultadoQuiz>> {
        let resultados = sqlx::query_as::<_, ResultadoQuiz>(
            r#"
            SELECT rq.*, u.nome AS usuario_nome
            FROM resultados_quiz rq
            LEFT JOIN usuarios u ON rq.usuario_id = u.id
            WHERE rq.usuario_id = ?
            ORDER BY rq.data_quiz DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.db)
        .await?;

        Ok(resultados)
    }

    pub async fn create(&self, input: UsuarioInput) -> Result<Usuario> {
        input.validate()?;
        let email = input.email.unwrap_or_default();

        // Lookup-before-insert keeps the original error message; the UNIQUE
        // column closes the race a concurrent duplicate would otherwise win.
        if self.find_by_email(&email).await?.is_some() {
            return Err(AppError::Validation("Email já cadastrado".to_string()));
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nome, email, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(input.nome.unwrap_or_default())
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(usuario)
    }

    pub async fn update(&self, id: i64, input: UsuarioInput) -> Result<Usuario> {
        self.get(id).await?;
        input.validate()?;
        let email = input.email.unwrap_or_default();

        // Updating to the user's own unchanged email is allowed
        if let Some(existente) = self.find_by_email(&email).await? {
            if existente.id != id {
                return Err(AppError::Validation(
                    "Email já cadastrado por outro usuário".to_string(),
                ));
            }
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET nome = ?, email = ? WHERE id = ? RETURNING *",
        )
        .bind(input.nome.unwrap_or_default())
        .bind(email)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(usuario)
    }

    pub async fn delete(&self, id: i64) -> Result<Usuario> {
        sqlx::query_as::<_, Usuario>("DELETE FROM usuarios WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(usuario)
    }
}
