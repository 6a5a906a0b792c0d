use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id       BIGSERIAL PRIMARY KEY,
        name     VARCHAR(100) NOT NULL,
        surname  VARCHAR(100) NOT NULL,
        email    VARCHAR(100) NOT NULL UNIQUE,
        password VARCHAR(100) NOT NULL,
        city     VARCHAR(100)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS blogs (
        id         BIGSERIAL PRIMARY KEY,
        title      VARCHAR(255) NOT NULL,
        content    TEXT NOT NULL,
        author     VARCHAR(100) NOT NULL,
        image      VARCHAR(255),
        created_at VARCHAR(100)
    )
    "#,
];

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")
}

/// Creates the `users` and `blogs` tables when they are missing.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    for statement in SCHEMA.iter().copied() {
        sqlx::query(statement)
            .execute(db)
            .await
            .context("create schema")?;
    }
    tracing::debug!("schema ready");
    Ok(())
}
