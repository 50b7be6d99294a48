use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Estatisticas, ResultadoInput, ResultadoQuiz};

const SELECT_COM_USUARIO: &str = r#"
    SELECT rq.*, u.nome AS usuario_nome
    FROM resultados_quiz rq
    LEFT JOIN usuarios u ON rq.usuario_id = u.id
"#;

pub struct ResultadoService {
    db: SqlitePool,
}

impl ResultadoService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ResultadoQuiz>> {
        let resultados = sqlx::query_as::<_, ResultadoQuiz>(&format!(
            "{SELECT_COM_USUARIO} ORDER BY rq.data_quiz DESC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(resultados)
    }

    pub async fn get(&self, id: i64) -> Result<ResultadoQuiz> {
        sqlx::query_as::<_, ResultadoQuiz>(&format!("{SELECT_COM_USUARIO} WHERE rq.id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Resultado não encontrado".to_string()))
    }

    pub async fn list_by_usuario(&self, usuario_id: i64) -> Result<Vec<ResultadoQuiz>> {
        let resultados = sqlx::query_as::<_, ResultadoQuiz>(&format!(
            "{SELECT_COM_USUARIO} WHERE rq.usuario_id = ? ORDER BY rq.data_quiz DESC"
        ))
        .bind(usuario_id)
        .fetch_all(&self.db)
        .await?;

        Ok(resultados)
    }

    /// Highest scores first; on a score tie the earlier result ranks higher.
    pub async fn top_scores(&self, limit: Option<i64>) -> Result<Vec<ResultadoQuiz>> {
        let limit = limit.unwrap_or(10);
        if limit <= 0 {
            return Err(AppError::Validation(
                "Limite deve ser um número inteiro positivo".to_string(),
            ));
        }

        let resultados = sqlx::query_as::<_, ResultadoQuiz>(&format!(
            "{SELECT_COM_USUARIO} ORDER BY rq.pontuacao DESC, rq.data_quiz ASC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(resultados)
    }

    /// One aggregate pass over the whole table. On an empty table the
    /// average/max/min come back null and both counts are zero.
    pub async fn estatisticas(&self) -> Result<Estatisticas> {
        let estatisticas = sqlx::query_as::<_, Estatisticas>(
            r#"
            SELECT
                COUNT(*) AS total_resultados,
                AVG(pontuacao) AS media_pontuacao,
                MAX(pontuacao) AS maior_pontuacao,
                MIN(pontuacao) AS menor_pontuacao,
                COUNT(DISTINCT usuario_id) AS total_usuarios
            FROM resultados_quiz
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        Ok(estatisticas)
    }

    pub async fn create(&self, input: ResultadoInput) -> Result<ResultadoQuiz> {
        let (usuario_id, pontuacao, total_perguntas) = validar(&input)?;

        let resultado = sqlx::query_as::<_, ResultadoQuiz>(
            "INSERT INTO resultados_quiz (usuario_id, pontuacao, total_perguntas, data_quiz) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(usuario_id)
        .bind(pontuacao)
        .bind(total_perguntas)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(resultado)
    }

    pub async fn update(&self, id: i64, input: ResultadoInput) -> Result<ResultadoQuiz> {
        self.get(id).await?;
        let (usuario_id, pontuacao, total_perguntas) = validar(&input)?;

        let resultado = sqlx::query_as::<_, ResultadoQuiz>(
            "UPDATE resultados_quiz SET usuario_id = ?, pontuacao = ?, total_perguntas = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(usuario_id)
        .bind(pontuacao)
        .bind(total_perguntas)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(resultado)
    }

    pub async fn delete(&self, id: i64) -> Result<ResultadoQuiz> {
        sqlx::query_as::<_, ResultadoQuiz>("DELETE FROM resultados_quiz WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Resultado não encontrado".to_string()))
    }

    pub async fn delete_by_usuario(&self, usuario_id: i64) -> Result<Vec<ResultadoQuiz>> {
        let removidos = sqlx::query_as::<_, ResultadoQuiz>(
            "DELETE FROM resultados_quiz WHERE usuario_id = ? RETURNING *",
        )
        .bind(usuario_id)
        .fetch_all(&self.db)
        .await?;

        Ok(removidos)
    }
}

fn validar(input: &ResultadoInput) -> Result<(i64, i64, i64)> {
    input.validate()?;

    let usuario_id = input.usuario_id.unwrap_or_default();
    let pontuacao = input.pontuacao.unwrap_or_default();
    let total_perguntas = input.total_perguntas.unwrap_or_default();

    if pontuacao > total_perguntas {
        return Err(AppError::Validation(
            "Pontuação não pode ser maior que o total de perguntas".to_string(),
        ));
    }

    Ok((usuario_id, pontuacao, total_perguntas))
}
