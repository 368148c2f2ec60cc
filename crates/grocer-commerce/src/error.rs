//! Grocer error types.

use thiserror::Error;

/// Errors that can occur in grocery store operations.
///
/// Every failure is local and non-fatal: lookups that can simply miss return
/// `Option` instead, and nothing here aborts the session.
#[derive(Error, Debug)]
pub enum GrocerError {
    /// Quantity must be at least one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Undo requested with an empty history.
    #[error("No actions to undo")]
    NothingToUndo,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GrocerError {
    fn from(e: serde_json::Error) -> Self {
        GrocerError::Serialization(e.to_string())
    }
}
