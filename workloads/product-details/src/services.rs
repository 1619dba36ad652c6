//! Product and cart service clients.

use async_trait::async_trait;

use atelier_commerce::prelude::*;
use atelier_data::FetchClient;

use crate::config::ServicesConfig;
use crate::error::{PdpError, Result};

/// Looks up products.
#[async_trait(?Send)]
pub trait ProductService {
    /// Fetch one product. A missing product is an error.
    async fn fetch_product(&self, id: &ProductId) -> Result<Product>;
}

/// Accepts cart submissions.
#[async_trait(?Send)]
pub trait CartService {
    /// Submit cart lines and return the service's answer.
    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<AddToCartResponse>;
}

/// Product service over HTTP.
#[derive(Clone)]
pub struct HttpProductService {
    client: FetchClient,
    config: ServicesConfig,
}

impl HttpProductService {
    pub fn new(client: FetchClient, config: ServicesConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl ProductService for HttpProductService {
    async fn fetch_product(&self, id: &ProductId) -> Result<Product> {
        let response = self
            .client
            .get(self.config.product_path_for(id.as_str()))
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?;

        // The service answers `null` for unknown ids.
        let product: Option<Product> = response.json()?;
        product.ok_or_else(|| PdpError::ProductNotFound(id.to_string()))
    }
}

/// Cart service over HTTP.
#[derive(Clone)]
pub struct HttpCartService {
    client: FetchClient,
    config: ServicesConfig,
}

impl HttpCartService {
    pub fn new(client: FetchClient, config: ServicesConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl CartService for HttpCartService {
    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<AddToCartResponse> {
        let response = self
            .client
            .post(self.config.cart_path.as_str())
            .json(request)?
            .accept("application/json")
            .send()
            .await?;

        // Failures carry a JSON message too; the caller decides on `cart`.
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_data::mock::MockTransport;
    use atelier_data::{FetchError, Method};
    use futures::executor::block_on;
    use std::rc::Rc;

    const PRODUCT_URL: &str = "https://api.test/api/product/getproduct/abc123";
    const CART_URL: &str = "https://api.test/api/cart/addtocart";

    fn services_config() -> ServicesConfig {
        ServicesConfig {
            base_url: "https://api.test".to_string(),
            ..ServicesConfig::default()
        }
    }

    fn product_service(mock: &Rc<MockTransport>) -> HttpProductService {
        let config = services_config();
        let client = FetchClient::new(mock.clone()).with_base_url(config.base_url.clone());
        HttpProductService::new(client, config)
    }

    fn cart_service(mock: &Rc<MockTransport>) -> HttpCartService {
        let config = services_config();
        let client = FetchClient::new(mock.clone()).with_base_url(config.base_url.clone());
        HttpCartService::new(client, config)
    }

    // === Product Service Tests ===

    #[test]
    fn test_fetch_product() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Get,
            PRODUCT_URL,
            200,
            r#"{"_id": "abc123", "name": "Hoodie", "price": 999, "images": ["u1", "u2"],
                "color": ["Lavender"], "size": ["M", "L"], "details": {"fabric": "Cotton"}}"#,
        ));

        let product = block_on(product_service(&mock).fetch_product(&ProductId::new("abc123"))).unwrap();
        assert_eq!(product.name, "Hoodie");
        assert_eq!(product.images, vec!["u1", "u2"]);
        assert_eq!(product.detail("fabric"), "Cotton");

        let sent = &mock.requests()[0];
        assert_eq!(sent.headers().get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_fetch_product_null_body() {
        let mock = Rc::new(MockTransport::new().with_json(Method::Get, PRODUCT_URL, 200, "null"));
        let err = block_on(product_service(&mock).fetch_product(&ProductId::new("abc123"))).unwrap_err();
        assert_eq!(err, PdpError::ProductNotFound("abc123".to_string()));
    }

    #[test]
    fn test_fetch_product_http_error() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Get,
            PRODUCT_URL,
            500,
            r#"{"message": "boom"}"#,
        ));
        let err = block_on(product_service(&mock).fetch_product(&ProductId::new("abc123"))).unwrap_err();
        assert!(matches!(err, PdpError::Fetch(FetchError::HttpError { status: 500, .. })));
    }

    #[test]
    fn test_fetch_product_malformed_body() {
        let mock = Rc::new(MockTransport::new().with_json(Method::Get, PRODUCT_URL, 200, "<html>"));
        let err = block_on(product_service(&mock).fetch_product(&ProductId::new("abc123"))).unwrap_err();
        assert!(matches!(err, PdpError::Fetch(FetchError::ParseError(_))));
    }

    #[test]
    fn test_fetch_product_network_error() {
        let mock = Rc::new(MockTransport::new().with_error(
            Method::Get,
            PRODUCT_URL,
            FetchError::RequestError("connection reset".to_string()),
        ));
        let err = block_on(product_service(&mock).fetch_product(&ProductId::new("abc123"))).unwrap_err();
        assert!(err.is_not_found());
    }

    // === Cart Service Tests ===

    #[test]
    fn test_add_to_cart_posts_json() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Post,
            CART_URL,
            201,
            r#"{"cart": {"items": [{"id": "abc123"}]}}"#,
        ));

        let mut product = Product::new("abc123", "Hoodie");
        product.price = 999.0;
        let item = CartItem::for_product(&product, VariantChoice::new("M", "Lavender", 1)).unwrap();
        let request = AddToCartRequest::single(UserId::new("u-1"), item);

        let response = block_on(cart_service(&mock).add_to_cart(&request)).unwrap();
        assert!(response.is_success());

        let sent = &mock.requests()[0];
        assert_eq!(sent.method(), Method::Post);
        assert_eq!(
            sent.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let body = sent.body_json().unwrap();
        assert_eq!(body["userId"], "u-1");
        assert_eq!(body["items"][0]["title"], "Hoodie");
    }

    #[test]
    fn test_add_to_cart_error_status_still_parsed() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Post,
            CART_URL,
            400,
            r#"{"message": "Invalid user"}"#,
        ));
        let request = AddToCartRequest {
            user_id: UserId::new("u-1"),
            product_id: ProductId::new("abc123"),
            items: Vec::new(),
        };

        let response = block_on(cart_service(&mock).add_to_cart(&request)).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Invalid user"));
    }
}
