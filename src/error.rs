//! Error types for ordering operations

use thiserror::Error;

/// Errors surfaced to the frontend. Display strings are the user-visible
/// notification text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Placing an order with nothing in the cart
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Selecting a category the catalog does not have
    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),
}
