//! Domain error taxonomy.
//!
//! `Constraint` is internal to the persistence layer: the managers translate
//! it before it reaches a caller. Everything else maps directly to an HTTP
//! status at the API boundary.

use thiserror::Error;

/// Domain errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, Error>;
