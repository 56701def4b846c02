use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize the catalog database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: when set, sqlx migrations in this directory run at startup
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or migrations fail
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max_connections) = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
    {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config)
        .await
        .context("could not connect to the catalog database")?;

    if let Ok(path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &path)
            .await
            .with_context(|| format!("could not run migrations from {path}"))?;
    }

    Ok(pool)
}
