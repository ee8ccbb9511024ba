//! Products Domain
//!
//! Product catalog CRUD where every operation reports its outcome as an
//! [`Envelope`] (`OK`, `NOT_FOUND`, `ERROR`, `EXISTS`) instead of an error.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, Envelope → status code
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, identity assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Failure boundary, check-then-act update/delete
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Raw persistence (trait + Postgres/in-memory)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     InMemoryProductStore, ProductRepository, ProductService,
//! };
//!
//! let repository = ProductRepository::new(InMemoryProductStore::new());
//! let service = ProductService::new(repository);
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod envelope;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use envelope::{Envelope, StatusKind};
pub use models::{ArticleNumberRequest, CreateProduct, Product, ProductQuery};
pub use postgres::PgProductStore;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::{InMemoryProductStore, ProductStore};
