//! In-memory transport for tests.
//!
//! Routes are matched on method and exact URL. Every request is recorded,
//! matched or not, so tests can assert that nothing was sent.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::{FetchError, HttpTransport, Method, RequestBuilder, Response};

struct MockRoute {
    method: Method,
    url: String,
    reply: Result<Response, FetchError>,
}

/// Recording transport with canned replies.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<MockRoute>>,
    requests: RefCell<Vec<RequestBuilder>>,
}

impl MockTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method url` with a JSON body.
    pub fn with_json(self, method: Method, url: impl Into<String>, status: u16, body: &str) -> Self {
        self.with_reply(method, url, Ok(Response::json_body(status, body.as_bytes().to_vec())))
    }

    /// Answer `method url` with a transport error.
    pub fn with_error(self, method: Method, url: impl Into<String>, error: FetchError) -> Self {
        self.with_reply(method, url, Err(error))
    }

    /// Answer `method url` with an arbitrary result.
    pub fn with_reply(
        self,
        method: Method,
        url: impl Into<String>,
        reply: Result<Response, FetchError>,
    ) -> Self {
        self.routes.borrow_mut().push(MockRoute {
            method,
            url: url.into(),
            reply,
        });
        self
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        self.requests.borrow().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let reply = self
            .routes
            .borrow()
            .iter()
            .find(|route| route.method == request.method && route.url == request.url)
            .map(|route| route.reply.clone());

        let missing = format!("no mock route for {} {}", request.method, request.url);
        self.requests.borrow_mut().push(request);

        reply.unwrap_or(Err(FetchError::RequestError(missing)))
    }
}
