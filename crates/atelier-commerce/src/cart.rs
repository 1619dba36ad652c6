//! Cart submission payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, UserId};

/// Most units a single submission may carry.
pub const MAX_QUANTITY: i64 = 10;

/// Size, color and quantity picked for a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantChoice {
    pub size: String,
    pub color: String,
    pub quantity: i64,
}

impl VariantChoice {
    /// Create a new variant choice.
    pub fn new(size: impl Into<String>, color: impl Into<String>, quantity: i64) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            quantity,
        }
    }
}

/// A single cart line, built fresh for each submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub size: String,
    pub color: String,
    pub quantity: i64,
    pub image: String,
    pub title: String,
    pub price: f64,
}

impl CartItem {
    /// Build the cart line for a product and the chosen variant.
    pub fn for_product(product: &Product, choice: VariantChoice) -> Result<Self, CommerceError> {
        if choice.quantity < 1 || choice.quantity > MAX_QUANTITY {
            return Err(CommerceError::InvalidQuantity(choice.quantity));
        }

        Ok(Self {
            id: product.id.clone(),
            size: choice.size,
            color: choice.color,
            quantity: choice.quantity,
            image: product.first_image().unwrap_or_default().to_string(),
            title: product.name.clone(),
            price: product.price,
        })
    }
}

/// Body of the add-to-cart request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub items: Vec<CartItem>,
}

impl AddToCartRequest {
    /// Request carrying one cart line.
    pub fn single(user_id: UserId, item: CartItem) -> Self {
        Self {
            user_id,
            product_id: item.id.clone(),
            items: vec![item],
        }
    }
}

/// Response of the add-to-cart endpoint.
///
/// Only the presence of a `cart` payload matters; anything else is treated
/// as a failed submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddToCartResponse {
    #[serde(default)]
    pub cart: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AddToCartResponse {
    /// True when the service returned a usable cart.
    pub fn is_success(&self) -> bool {
        match &self.cart {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }
}
