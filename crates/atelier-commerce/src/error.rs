//! Commerce error types.

use thiserror::Error;

/// Errors raised while building storefront payloads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Quantity outside the accepted range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}
