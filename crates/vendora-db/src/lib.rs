//! # Vendora DB
//!
//! Connection pool construction and the typed error every store query maps
//! into.
//!
//! Query code converts `sqlx::Error` into [`StoreError`] so callers match on
//! `UniqueViolation` / `NotFound` instead of comparing driver error codes.
//!
//! # Example
//!
//! ```ignore
//! use vendora_db::{StoreError, init_db_pool};
//!
//! let pool = init_db_pool(&config.database).await?;
//!
//! let result = sqlx::query("INSERT INTO users (username, password) VALUES ($1, $2)")
//!     .bind("alice")
//!     .bind(hash)
//!     .execute(&pool)
//!     .await
//!     .map_err(StoreError::from);
//!
//! if let Err(StoreError::UniqueViolation { .. }) = result {
//!     // username already taken
//! }
//! ```

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use vendora_config::DatabaseConfig;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Errors surfaced by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert or update collided with a unique constraint.
    #[error("unique constraint violated{}", .constraint.as_deref().map(|c| format!(": {c}")).unwrap_or_default())]
    UniqueViolation { constraint: Option<String> },

    /// The statement matched no row.
    #[error("row not found")]
    NotFound,

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::UniqueViolation {
                    constraint: db_err.constraint().map(str::to_string),
                }
            }
            other => StoreError::Database(other),
        }
    }
}

/// Opens the PostgreSQL pool described by `config`.
///
/// Called once during startup; the pool is cheaply cloneable and lives in the
/// application state for the rest of the process.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}
