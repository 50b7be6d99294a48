use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::pergunta::DIFICULDADES;
use crate::models::{Pergunta, PerguntaInput};

const SELECT_COM_CATEGORIA: &str = r#"
    SELECT p.*, c.nome AS categoria_nome
    FROM perguntas p
    LEFT JOIN categorias c ON p.categoria_id = c.id
"#;

pub struct PerguntaService {
    db: SqlitePool,
}

impl PerguntaService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Pergunta>> {
        let perguntas = sqlx::query_as::<_, Pergunta>(&format!(
            "{SELECT_COM_CATEGORIA} ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(perguntas)
    }

    pub async fn get(&self, id: i64) -> Result<Pergunta> {
        sqlx::query_as::<_, Pergunta>(&format!("{SELECT_COM_CATEGORIA} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Pergunta não encontrada".to_string()))
    }

    pub async fn list_by_categoria(&self, categoria_id: i64) -> Result<Vec<Pergunta>> {
        let perguntas = sqlx::query_as::<_, Pergunta>(&format!(
            "{SELECT_COM_CATEGORIA} WHERE p.categoria_id = ? ORDER BY p.created_at DESC"
        ))
        .bind(categoria_id)
        .fetch_all(&self.db)
        .await?;

        Ok(perguntas)
    }

    pub async fn list_by_dificuldade(&self, dificuldade: &str) -> Result<Vec<Pergunta>> {
        let perguntas = sqlx::query_as::<_, Pergunta>(&format!(
            "{SELECT_COM_CATEGORIA} WHERE p.dificuldade = ? ORDER BY p.created_at DESC"
        ))
        .bind(dificuldade)
        .fetch_all(&self.db)
        .await?;

        Ok(perguntas)
    }

    pub async fn create(&self, input: PerguntaInput) -> Result<Pergunta> {
        input.validate()?;
        let dificuldade = validar_dificuldade(input.dificuldade.as_deref())?;

        let pergunta = sqlx::query_as::<_, Pergunta>(
            "INSERT INTO perguntas (categoria_id, texto, dificuldade, created_at) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(input.categoria_id)
        .bind(input.texto.unwrap_or_default())
        .bind(dificuldade)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(pergunta)
    }

    pub async fn update(&self, id: i64, input: PerguntaInput) -> Result<Pergunta> {
        self.get(id).await?;
        input.validate()?;
        let dificuldade = validar_dificuldade(input.dificuldade.as_deref())?;

        let pergunta = sqlx::query_as::<_, Pergunta>(
            "UPDATE perguntas SET categoria_id = ?, texto = ?, dificuldade = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(input.categoria_id)
        .bind(input.texto.unwrap_or_default())
        .bind(dificuldade)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(pergunta)
    }

    pub async fn delete(&self, id: i64) -> Result<Pergunta> {
        sqlx::query_as::<_, Pergunta>("DELETE FROM perguntas WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Pergunta não encontrada".to_string()))
    }
}

fn validar_dificuldade(dificuldade: Option<&str>) -> Result<String> {
    match dificuldade {
        Some(d) if DIFICULDADES.contains(&d) => Ok(d.to_string()),
        _ => Err(AppError::Validation(
            "Dificuldade deve ser: facil, medio ou dificil".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dificuldade_accepts_the_three_levels() {
        for d in ["facil", "medio", "dificil"] {
            assert_eq!(validar_dificuldade(Some(d)).unwrap(), d);
        }
    }

    #[test]
    fn dificuldade_rejects_anything_else() {
        assert!(validar_dificuldade(Some("hard")).is_err());
        assert!(validar_dificuldade(Some("")).is_err());
        assert!(validar_dificuldade(None).is_err());
    }
}
