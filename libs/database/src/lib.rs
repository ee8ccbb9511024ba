//! Database library providing the PostgreSQL connector and shared error types
//!
//! # Features
//!
//! - `config` - Load [`postgres::PostgresConfig`] with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(PostgresConfig::new(url)).await?;
//! postgres::run_migrations::<Migrator>(&db, "products_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
