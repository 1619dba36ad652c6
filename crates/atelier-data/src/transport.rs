//! Transports that put requests on the wire.

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a prepared request and returns the raw response.
///
/// Workloads run on a single-threaded executor, so transports are not
/// required to be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use crate::Method;
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match request.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
        };

        let mut builder = Request::builder();
        builder.method(method).uri(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(status, headers, response.into_body()))
    }
}
