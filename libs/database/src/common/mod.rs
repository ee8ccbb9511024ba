//! Error types shared by every database consumer

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
