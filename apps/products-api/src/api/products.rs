//! Products API routes

use axum::Router;
use domain_products::{PgProductStore, ProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let store = PgProductStore::new(state.db.clone());
    let service = ProductService::new(ProductRepository::new(store));
    handlers::router(service)
}
