//! Server binary: loads settings from the environment (and `.env`), connects storage,
//! ensures the products table exists and serves the API.

use product_api::{
    app, db, ensure_schema, InMemoryProductStore, PgProductStore, ProductStore, Settings, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store: Arc<dyn ProductStore> = match settings.store {
        StoreKind::Postgres => {
            let conn = db::connect(&settings).await?;
            if conn.connected {
                if let Err(e) = ensure_schema(&conn.pool).await {
                    tracing::error!(error = %e, "failed to create products table");
                }
            }
            Arc::new(PgProductStore::new(conn.pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory product store; data is lost on exit");
            Arc::new(InMemoryProductStore::new())
        }
    };

    let router = app(store, &settings);
    let listener = TcpListener::bind(settings.bind_address()).await?;
    tracing::info!("REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
