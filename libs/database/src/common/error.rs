/// Unified database error type
///
/// Store implementations (SeaORM-backed or in-memory) report failures through
/// this type so callers handle one error surface.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL errors raised by SeaORM
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Generic(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_err_converts_into_postgres_variant() {
        let err: DatabaseError = sea_orm::DbErr::Custom("connection refused".to_string()).into();
        assert!(matches!(err, DatabaseError::Postgres(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_generic_error_message() {
        let err = DatabaseError::Generic("duplicate key".to_string());
        assert_eq!(err.to_string(), "Database error: duplicate key");
    }
}
