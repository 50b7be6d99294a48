use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Categoria, CategoriaInput};

pub struct CategoriaService {
    db: SqlitePool,
}

impl CategoriaService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Categoria>> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT * FROM categorias ORDER BY created_at DESC")
                .fetch_all(&self.db)
                .await?;

        Ok(categorias)
    }

    pub async fn get(&self, id: i64) -> Result<Categoria> {
        sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))
    }

    pub async fn create(&self, input: CategoriaInput) -> Result<Categoria> {
        input.validate()?;

        let categoria = sqlx::query_as::<_, Categoria>(
            "INSERT INTO categorias (nome, descricao, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(input.nome.unwrap_or_default())
        .bind(input.descricao)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(categoria)
    }

    pub async fn update(&self, id: i64, input: CategoriaInput) -> Result<Categoria> {
        // Existence first so a bad payload against a missing row still 404s
        self.get(id).await?;
        input.validate()?;

        let categoria = sqlx::query_as::<_, Categoria>(
            "UPDATE categorias SET nome = ?, descricao = ? WHERE id = ? RETURNING *",
        )
        .bind(input.nome.unwrap_or_default())
        .bind(input.descricao)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(categoria)
    }

    pub async fn delete(&self, id: i64) -> Result<Categoria> {
        sqlx::query_as::<_, Categoria>("DELETE FROM categorias WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))
    }
}
