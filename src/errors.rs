//! Unified error type for the store's data-access layer.
//!
//! Storage failures surface as [`Error::Database`]; every other variant is a
//! domain rule rejected before anything is written.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Email is required")]
    MissingEmail,

    #[error("Quantity is not specified for line item")]
    MissingQuantity,

    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i32 },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: String },

    #[error("Rating must be between 1 and 5, got {rating}")]
    InvalidRating { rating: i16 },

    #[error("User {user_id} already reviewed book {book_id}")]
    DuplicateReview { user_id: String, book_id: String },

    #[error("Basket is empty")]
    EmptyBasket,

    #[error("Order {order_id} has a settled payment and can no longer change")]
    OrderFinalized { order_id: String },

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Maps a unique-constraint violation to [`Error::Conflict`], passing other
    /// database errors through unchanged.
    pub(crate) fn from_unique_violation(err: DbErr, what: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict {
                message: format!("{what} already exists ({detail})"),
            },
            _ => Self::Database(err),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
