use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Resposta, RespostaInput, RespostasMultiplasInput};

const SELECT_COM_PERGUNTA: &str = r#"
    SELECT r.*, p.texto AS pergunta_texto
    FROM respostas r
    LEFT JOIN perguntas p ON r.pergunta_id = p.id
"#;

pub struct RespostaService {
    db: SqlitePool,
}

impl RespostaService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Resposta>> {
        let respostas =
            sqlx::query_as::<_, Resposta>(&format!("{SELECT_COM_PERGUNTA} ORDER BY r.id"))
                .fetch_all(&self.db)
                .await?;

        Ok(respostas)
    }

    pub async fn get(&self, id: i64) -> Result<Resposta> {
        sqlx::query_as::<_, Resposta>(&format!("{SELECT_COM_PERGUNTA} WHERE r.id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Resposta não encontrada".to_string()))
    }

    pub async fn list_by_pergunta(&self, pergunta_id: i64) -> Result<Vec<Resposta>> {
        let respostas = sqlx::query_as::<_, Resposta>(&format!(
            "{SELECT_COM_PERGUNTA} WHERE r.pergunta_id = ? ORDER BY r.id"
        ))
        .bind(pergunta_id)
        .fetch_all(&self.db)
        .await?;

        Ok(respostas)
    }

    pub async fn correta_by_pergunta(&self, pergunta_id: i64) -> Result<Resposta> {
        sqlx::query_as::<_, Resposta>(&format!(
            "{SELECT_COM_PERGUNTA} WHERE r.pergunta_id = ? AND r.correta = 1"
        ))
        .bind(pergunta_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Resposta correta não encontrada".to_string()))
    }

    pub async fn create(&self, input: RespostaInput) -> Result<Resposta> {
        input.validate()?;

        let resposta = sqlx::query_as::<_, Resposta>(
            "INSERT INTO respostas (pergunta_id, texto, correta) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(input.pergunta_id)
        .bind(input.texto.unwrap_or_default())
        .bind(input.correta.unwrap_or(false))
        .fetch_one(&self.db)
        .await?;

        Ok(resposta)
    }

    /// Persists a whole answer batch for one question as a single unit.
    ///
    /// Input is validated before the transaction is opened. Inside the
    /// transaction each insert runs in input order; the first failure
    /// propagates out and the uncommitted transaction rolls back on drop,
    /// so readers never observe a partial batch.
    pub async fn create_multiple(&self, input: RespostasMultiplasInput) -> Result<Vec<Resposta>> {
        input.validate()?;
        let pergunta_id = input.pergunta_id.unwrap_or_default();

        let itens = match input.respostas {
            Some(itens) if !itens.is_empty() => itens,
            _ => {
                return Err(AppError::Validation(
                    "Lista de respostas é obrigatória".to_string(),
                ))
            }
        };

        let mut valores = Vec::with_capacity(itens.len());
        for item in &itens {
            match item.texto.as_deref().filter(|t| !t.is_empty()) {
                Some(texto) => valores.push((texto.to_string(), item.correta.unwrap_or(false))),
                None => {
                    return Err(AppError::Validation(
                        "Texto da resposta é obrigatório".to_string(),
                    ))
                }
            }
        }

        let mut tx = self.db.begin().await?;

        let mut criadas = Vec::with_capacity(valores.len());
        for (texto, correta) in valores {
            let resposta = sqlx::query_as::<_, Resposta>(
                "INSERT INTO respostas (pergunta_id, texto, correta) VALUES (?, ?, ?) RETURNING *",
            )
            .bind(pergunta_id)
            .bind(texto)
            .bind(correta)
            .fetch_one(&mut *tx)
            .await?;
            criadas.push(resposta);
        }

        tx.commit().await?;

        Ok(criadas)
    }

    pub async fn update(&self, id: i64, input: RespostaInput) -> Result<Resposta> {
        self.get(id).await?;
        input.validate()?;

        let resposta = sqlx::query_as::<_, Resposta>(
            "UPDATE respostas SET pergunta_id = ?, texto = ?, correta = ? WHERE id = ? RETURNING *",
        )
        .bind(input.pergunta_id)
        .bind(input.texto.unwrap_or_default())
        .bind(input.correta.unwrap_or(false))
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(resposta)
    }

    pub async fn delete(&self, id: i64) -> Result<Resposta> {
        sqlx::query_as::<_, Resposta>("DELETE FROM respostas WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Resposta não encontrada".to_string()))
    }

    /// Removes every answer of a question, returning the removed rows.
    /// An unknown question yields an empty list, not an error.
    pub async fn delete_by_pergunta(&self, pergunta_id: i64) -> Result<Vec<Resposta>> {
        let removidas = sqlx::query_as::<_, Resposta>(
            "DELETE FROM respostas WHERE pergunta_id = ? RETURNING *",
        )
        .bind(pergunta_id)
        .fetch_all(&self.db)
        .await?;

        Ok(removidas)
    }
}
