//! Page configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Product detail page configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdpConfig {
    /// Remote services.
    #[serde(default)]
    pub services: ServicesConfig,

    /// Page presentation and routes.
    #[serde(default)]
    pub page: PageConfig,

    /// Variant used when the shopper has not picked one.
    #[serde(default)]
    pub cart: CartDefaults,

    /// Session lookup.
    #[serde(default)]
    pub session: SessionConfig,
}

impl PdpConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML config")
    }
}

/// Product and cart service endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL shared by both services.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Product lookup path; `{id}` is replaced by the product id.
    #[serde(default = "default_product_path")]
    pub product_path: String,

    /// Add-to-cart path.
    #[serde(default = "default_cart_path")]
    pub cart_path: String,
}

impl ServicesConfig {
    /// Product lookup path for an id.
    pub fn product_path_for(&self, id: &str) -> String {
        self.product_path.replace("{id}", id)
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            product_path: default_product_path(),
            cart_path: default_cart_path(),
        }
    }
}

fn default_base_url() -> String {
    "https://abhinasv-s-backend.onrender.com".to_string()
}

fn default_product_path() -> String {
    "/api/product/getproduct/{id}".to_string()
}

fn default_cart_path() -> String {
    "/api/cart/addtocart".to_string()
}

/// Presentation settings and in-app routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Main image shown before the product has loaded.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Height of the fixed header, subtracted when scrolling the page into view.
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,

    /// Where shoppers without a session are sent.
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Where shoppers land after a successful add-to-cart.
    #[serde(default = "default_cart_route")]
    pub cart_route: String,

    /// Added to the price to show the struck-through "was" price.
    #[serde(default = "default_compare_at_markup")]
    pub compare_at_markup: f64,

    /// Gift wrapping surcharge.
    #[serde(default = "default_gift_wrap_price")]
    pub gift_wrap_price: f64,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl PageConfig {
    /// Format an amount with the currency symbol.
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            header_offset: default_header_offset(),
            login_route: default_login_route(),
            cart_route: default_cart_route(),
            compare_at_markup: default_compare_at_markup(),
            gift_wrap_price: default_gift_wrap_price(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_placeholder_image() -> String {
    "https://rukminim2.flixcart.com/image/832/832/xif0q/sweatshirt/a/a/r/xl-lavender-abhinavs-best-of-world-original-imah75prsgfbrsxf.jpeg?q=70&crop=false".to_string()
}

fn default_header_offset() -> f64 {
    50.0
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_cart_route() -> String {
    "/cart".to_string()
}

fn default_compare_at_markup() -> f64 {
    500.0
}

fn default_gift_wrap_price() -> f64 {
    30.0
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// Fallback variant for cart submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDefaults {
    #[serde(default = "default_size")]
    pub size: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl Default for CartDefaults {
    fn default() -> Self {
        Self {
            size: default_size(),
            color: default_color(),
            quantity: default_quantity(),
        }
    }
}

fn default_size() -> String {
    "M".to_string()
}

fn default_color() -> String {
    "Lavender".to_string()
}

fn default_quantity() -> i64 {
    1
}

/// Session cookie settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie holding the signed-in user id.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "user_id".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let bundled = PdpConfig::from_toml_str(include_str!("../pdp.toml")).unwrap();
        assert_eq!(bundled, PdpConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = PdpConfig::from_toml_str(
            r#"
            [services]
            base_url = "http://localhost:4000"

            [cart]
            size = "L"
            "#,
        )
        .unwrap();

        assert_eq!(config.services.base_url, "http://localhost:4000");
        assert_eq!(config.services.cart_path, "/api/cart/addtocart");
        assert_eq!(config.cart.size, "L");
        assert_eq!(config.cart.color, "Lavender");
        assert_eq!(config.page.header_offset, 50.0);
    }

    #[test]
    fn test_product_path_template() {
        let services = ServicesConfig::default();
        assert_eq!(
            services.product_path_for("abc123"),
            "/api/product/getproduct/abc123"
        );
    }

    #[test]
    fn test_format_price() {
        let page = PageConfig::default();
        assert_eq!(page.format_price(999.0), "₹999");
        assert_eq!(page.format_price(1499.5), "₹1499.5");
    }

    #[test]
    fn test_invalid_toml() {
        let err = PdpConfig::from_toml_str("[page]\nheader_offset = \"tall\"").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse TOML config");
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
    }
}
