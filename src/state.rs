//! Shared application state for product routes.

use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    /// Row cap for the product listing.
    pub page_size: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, page_size: u32) -> Self {
        Self { store, page_size }
    }
}
