use thiserror::Error;

/// Errors raised by the document store.
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
