//! Page error types.

use atelier_commerce::CommerceError;
use atelier_data::FetchError;
use thiserror::Error;

/// Errors raised while serving the product page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdpError {
    /// A product or cart service call failed.
    #[error("service call failed: {0}")]
    Fetch(#[from] FetchError),

    /// The product service answered without a product.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// The route carried an unusable product id.
    #[error("invalid product id: {0:?}")]
    InvalidProductId(String),

    /// The cart line could not be built.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl PdpError {
    /// Check if this error should be shown as "Product not found."
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PdpError::ProductNotFound(_) | PdpError::InvalidProductId(_) | PdpError::Fetch(_)
        )
    }
}

/// Result alias for page operations.
pub type Result<T> = std::result::Result<T, PdpError>;
