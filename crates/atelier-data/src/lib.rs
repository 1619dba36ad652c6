//! HTTP client utilities for storefront workloads.
//!
//! A small builder API over a pluggable [`HttpTransport`]. On `wasm32` the
//! Spin host performs the request; tests swap in the recording
//! `MockTransport` (feature `mock`).
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_data::FetchClient;
//!
//! let client = FetchClient::spin().with_base_url("https://api.example.com");
//!
//! let product: Product = client
//!     .get("/api/product/getproduct/abc123")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;
mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::collections::BTreeMap;
use std::rc::Rc;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::HttpTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;

/// HTTP client for making outbound requests.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Rc<dyn HttpTransport>,
    base_url: Option<String>,
    default_headers: BTreeMap<String, String>,
}

impl FetchClient {
    /// Create a client over the given transport.
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: BTreeMap::new(),
        }
    }

    /// Client backed by the Spin outbound HTTP host.
    #[cfg(target_arch = "wasm32")]
    pub fn spin() -> Self {
        Self::new(Rc::new(SpinTransport))
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            transport: Rc::clone(&self.transport),
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    transport: Rc<dyn HttpTransport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpTransport, Method, Response};
}
