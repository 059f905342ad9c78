//! Product API: REST backend for a single product resource over PostgreSQL.

pub mod db;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;
pub mod validation;

pub use docs::ApiDoc;
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use model::{ListQuery, NewProduct, Product, ProductChanges, ProductSummary};
pub use routes::{app, common_routes, product_routes};
pub use settings::{Settings, StoreKind};
pub use state::AppState;
pub use store::{InMemoryProductStore, PgProductStore, ProductStore};
