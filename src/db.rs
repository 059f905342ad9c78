//! Connection pool setup.

use crate::error::AppError;
use crate::settings::Settings;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Outcome of [`connect`]: the pool is always usable, `connected` says whether the first
/// connection succeeded.
pub struct Connection {
    pub pool: PgPool,
    pub connected: bool,
}

fn pool_options(settings: &Settings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
}

/// Connect to PostgreSQL. When the server is unreachable the error is logged and a lazy pool
/// is returned instead, so the HTTP server can still start and answer 500 until the database
/// comes back. Only a malformed `DATABASE_URL` is fatal.
pub async fn connect(settings: &Settings) -> Result<Connection, AppError> {
    match pool_options(settings).connect(&settings.database_url).await {
        Ok(pool) => {
            tracing::info!("database connected");
            Ok(Connection { pool, connected: true })
        }
        Err(e) => {
            tracing::error!(error = %e, "error connecting to database");
            let pool = pool_options(settings).connect_lazy(&settings.database_url)?;
            Ok(Connection { pool, connected: false })
        }
    }
}
