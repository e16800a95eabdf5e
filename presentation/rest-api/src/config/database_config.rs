use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: pool default)
    /// - MIGRATIONS_PATH: migration directory (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .map(|value| parse_max_connections(&value))
            .transpose()?;
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

fn parse_max_connections(value: &str) -> anyhow::Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) | Err(_) => anyhow::bail!("DATABASE_MAX_CONNECTIONS must be a positive integer"),
        Ok(n) => Ok(n),
    }
}

/// Connects the pool and applies pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max_connections) = settings.max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;

    Ok(pool)
}
