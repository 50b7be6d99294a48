use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use crate::error::Result;

/// Establishes the bounded connection pool every repository goes through.
///
/// The pool is the single owner of durable state: services borrow a
/// connection per operation and sqlx returns it to the pool on every exit
/// path, including early returns and errors.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Creates the five quiz tables if they do not exist yet.
///
/// `usuarios.email` carries a UNIQUE constraint in addition to the
/// lookup-before-insert check in the service layer, so a concurrent
/// duplicate registration fails at the store instead of slipping through.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categorias (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            descricao TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS perguntas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            categoria_id INTEGER,
            texto TEXT NOT NULL,
            dificuldade TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (categoria_id) REFERENCES categorias (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS respostas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pergunta_id INTEGER NOT NULL,
            texto TEXT NOT NULL,
            correta INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (pergunta_id) REFERENCES perguntas (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resultados_quiz (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            usuario_id INTEGER NOT NULL,
            pontuacao INTEGER NOT NULL,
            total_perguntas INTEGER NOT NULL,
            data_quiz TEXT NOT NULL,
            FOREIGN KEY (usuario_id) REFERENCES usuarios (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
