use super::ProductStore;
use crate::error::AppError;
use crate::model::{ListQuery, NewProduct, Product, ProductChanges, ProductSummary};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store for tests and database-less runs. Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_key(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self, query: ListQuery) -> Result<Vec<ProductSummary>, AppError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<&Product> = inner.rows.values().collect();
        rows.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(rows
            .into_iter()
            .take(query.limit as usize)
            .map(ProductSummary::from)
            .collect())
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: inner.last_id,
            name: fields.name,
            price: fields.price,
            availability: fields.availability,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(product.id, product.clone());
        tracing::debug!(id = product.id, "created product in memory");
        Ok(product)
    }

    async fn update(&self, id: i64, fields: ProductChanges) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|p| {
            p.name = fields.name;
            p.price = fields.price;
            p.availability = fields.availability;
            p.updated_at = Utc::now();
            p.clone()
        }))
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|p| {
            p.availability = !p.availability;
            p.updated_at = Utc::now();
            p.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64) -> NewProduct {
        NewProduct { name: name.into(), price, availability: true }
    }

    #[tokio::test]
    async fn list_orders_by_price_and_caps_rows() {
        let store = InMemoryProductStore::new();
        store.create(new_product("Monitor", 300.0)).await.unwrap();
        store.create(new_product("Mouse", 60.0)).await.unwrap();
        store.create(new_product("Keyboard", 90.0)).await.unwrap();

        let rows = store.find_all(ListQuery { limit: 2 }).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Mouse", "Keyboard"]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryProductStore::new();
        let first = store.create(new_product("Mouse", 60.0)).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());
        assert!(!store.delete(first.id).await.unwrap());
        let second = store.create(new_product("Mouse", 60.0)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn concurrent_toggles_are_not_lost() {
        let store = InMemoryProductStore::new();
        let id = store.create(new_product("Mouse", 60.0)).await.unwrap().id;

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.toggle_availability(id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let after = store.find_by_key(id).await.unwrap().unwrap();
        assert!(after.availability);
    }

    #[tokio::test]
    async fn writes_on_missing_rows_report_none() {
        let store = InMemoryProductStore::new();
        let changes = ProductChanges { name: "x".into(), price: 1.0, availability: false };
        assert!(store.update(7, changes).await.unwrap().is_none());
        assert!(store.toggle_availability(7).await.unwrap().is_none());
    }
}
