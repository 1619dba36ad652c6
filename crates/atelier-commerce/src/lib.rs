//! Storefront domain types.
//!
//! This crate holds the wire shapes shared by the storefront workloads:
//!
//! - **Ids**: newtype identifiers (`ProductId`, `UserId`)
//! - **Catalog**: the `Product` record served by the product service
//! - **Cart**: `CartItem` and the add-to-cart request/response bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_commerce::prelude::*;
//!
//! let product: Product = serde_json::from_str(body)?;
//! let item = CartItem::for_product(&product, VariantChoice::new("M", "Lavender", 1))?;
//! let request = AddToCartRequest::single(UserId::new("u-1"), item);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{AddToCartRequest, AddToCartResponse, CartItem, VariantChoice};
    pub use crate::catalog::{DetailField, Product, StockStatus, DETAIL_FIELDS};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
}
