/// Configuration management for the blog service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Which storage backend a database URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseBackend {
    /// Local file-backed store (SQLite)
    Sqlite,
    /// Remote server-backed store (PostgreSQL)
    Postgres,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Backend kind, classified from the URL scheme
    pub backend: DatabaseBackend,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Default local database file, used when `DATABASE_URL` is absent.
const DEFAULT_SQLITE_URL: &str = "sqlite://blog.db?mode=rwc";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("BLOG_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "*".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: {
                let mut database = resolve_database(std::env::var("DATABASE_URL").ok());
                if let Some(max) = std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                {
                    database.max_connections = max;
                }
                database
            },
        })
    }
}

/// Resolve the database configuration from an optional `DATABASE_URL` value.
///
/// The single recognized switch: when the variable is absent the service uses
/// the local file-backed SQLite store; when present the URL is used verbatim
/// and the backend kind is classified from its scheme. There is no other
/// behavioral divergence between the two backends.
pub fn resolve_database(url: Option<String>) -> DatabaseConfig {
    let url = url.unwrap_or_else(|| DEFAULT_SQLITE_URL.to_string());
    let backend = if url.starts_with("sqlite") {
        DatabaseBackend::Sqlite
    } else {
        DatabaseBackend::Postgres
    };

    DatabaseConfig {
        url,
        backend,
        max_connections: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_url_selects_local_sqlite_file() {
        let cfg = resolve_database(None);
        assert_eq!(cfg.backend, DatabaseBackend::Sqlite);
        assert_eq!(cfg.url, DEFAULT_SQLITE_URL);
    }

    #[test]
    fn postgres_url_selects_remote_backend() {
        let cfg = resolve_database(Some("postgresql://localhost/blog".to_string()));
        assert_eq!(cfg.backend, DatabaseBackend::Postgres);
        assert_eq!(cfg.url, "postgresql://localhost/blog");
    }

    #[test]
    fn explicit_sqlite_url_stays_local() {
        let cfg = resolve_database(Some("sqlite://other.db".to_string()));
        assert_eq!(cfg.backend, DatabaseBackend::Sqlite);
    }
}
