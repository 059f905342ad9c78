//! Apply the products DDL. Idempotent: the table is created only when missing.

use crate::error::AppError;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

/// Create the `products` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL CHECK (price > 0 AND price < 'Infinity'),
            availability BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        PRODUCTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS {0}_price_idx ON {0} (price)",
        PRODUCTS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    tracing::info!(table = PRODUCTS_TABLE, "schema ready");
    Ok(())
}
