use super::ProductStore;
use crate::error::AppError;
use crate::migration::PRODUCTS_TABLE;
use crate::model::{ListQuery, NewProduct, Product, ProductChanges, ProductSummary};
use async_trait::async_trait;
use sqlx::PgPool;

const PRODUCT_COLUMNS: &str = "id, name, price, availability, created_at, updated_at";

/// PostgreSQL-backed store over the `products` table.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_key(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", PRODUCT_COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self, query: ListQuery) -> Result<Vec<ProductSummary>, AppError> {
        let sql = format!(
            "SELECT name, price, availability FROM {} ORDER BY price ASC LIMIT $1",
            PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, limit = query.limit, "query");
        let rows = sqlx::query_as::<_, ProductSummary>(&sql)
            .bind(i64::from(query.limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, price, availability) VALUES ($1, $2, $3) RETURNING {}",
            PRODUCTS_TABLE, PRODUCT_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %fields.name, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&fields.name)
            .bind(fields.price)
            .bind(fields.availability)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, fields: ProductChanges) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, price = $3, availability = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            PRODUCTS_TABLE, PRODUCT_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&fields.name)
            .bind(fields.price)
            .bind(fields.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE {} SET availability = NOT availability, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            PRODUCTS_TABLE, PRODUCT_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
