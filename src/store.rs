//! Persistence boundary for product rows.
//!
//! Every write is one statement keyed by id, so an update, toggle or delete either hits an
//! existing row or reports that it is gone; there is no read-then-write window.

mod memory;
mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

use crate::error::AppError;
use crate::model::{ListQuery, NewProduct, Product, ProductChanges, ProductSummary};
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_key(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Rows ordered by price ascending, at most `query.limit` of them.
    async fn find_all(&self, query: ListQuery) -> Result<Vec<ProductSummary>, AppError>;

    async fn create(&self, fields: NewProduct) -> Result<Product, AppError>;

    /// Replace name, price and availability. `None` when no row has this id.
    async fn update(&self, id: i64, fields: ProductChanges) -> Result<Option<Product>, AppError>;

    /// Flip availability in place. `None` when no row has this id.
    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trip to the backing storage, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
