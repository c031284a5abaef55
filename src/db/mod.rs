/// Database access layer
///
/// This module provides:
/// - Connection pooling over the runtime-selected backend (SQLite or
///   PostgreSQL, see `config::DatabaseBackend`)
/// - Schema bootstrap for the `posts` table
/// - Repository functions and startup seed data
use crate::config::{DatabaseBackend, DatabaseConfig};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub mod post_repo;
pub mod seed;

/// Build a connection pool for the configured backend.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Create the `posts` table if it does not exist yet.
///
/// The DDL differs per backend only in the auto-increment primary key
/// spelling; columns and constraints are identical.
pub async fn ensure_schema(pool: &AnyPool, backend: DatabaseBackend) -> Result<(), sqlx::Error> {
    let ddl = match backend {
        DatabaseBackend::Sqlite => {
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                slug TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                content TEXT NOT NULL,
                image_url TEXT,
                likes INTEGER NOT NULL DEFAULT 0
            )
            "#
        }
        DatabaseBackend::Postgres => {
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id BIGSERIAL PRIMARY KEY,
                slug VARCHAR(200) NOT NULL UNIQUE,
                title VARCHAR(200) NOT NULL,
                author VARCHAR(100) NOT NULL,
                content TEXT NOT NULL,
                image_url VARCHAR(200),
                likes BIGINT NOT NULL DEFAULT 0
            )
            "#
        }
    };

    sqlx::query(ddl).execute(pool).await?;

    Ok(())
}
