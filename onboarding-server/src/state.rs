//! Application state

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// The pool is the only process-wide resource; every request checks out
/// its own connection for the duration of one transaction.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl AppState {
    /// Connect the pool and apply pending migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::with_pool(pool, config))
    }

    /// Build state around an existing pool
    pub fn with_pool(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        }
    }
}
