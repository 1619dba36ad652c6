//! Request handling, independent of the Spin host.
//!
//! The Spin component in `server` converts the host request into a
//! [`PageRequest`], calls [`handle_request`] and writes the [`PageResponse`]
//! back. Keeping the host types out of here lets the whole flow run in
//! native tests against a mock transport.

use std::rc::Rc;

use atelier_data::{FetchClient, Method};
use atelier_observability::StructuredLogger;
use atelier_session::CookieSessionProvider;

use crate::config::PdpConfig;
use crate::controller::{PageServices, ProductDetailsPage};
use crate::effects::{NoticeBoard, RecordingNavigator, ScriptViewport};
use crate::page::{page_title, render_document};
use crate::routes::{query_of, Endpoint, PageQuery};
use crate::sections::render_not_found;
use crate::services::{HttpCartService, HttpProductService};
use crate::state::LoadStatus;

/// Header carrying a one-off notice for the next view.
pub const NOTICE_HEADER: &str = "x-storefront-notice";

const HTML: &str = "text/html; charset=utf-8";

/// An inbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub method: Method,
    /// Path including the query string.
    pub path: String,
    /// Raw `Cookie` header.
    pub cookie: Option<String>,
    pub body: Vec<u8>,
}

impl PageRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            cookie: None,
            body: Vec::new(),
        }
    }

    /// Form post with a `application/x-www-form-urlencoded` body.
    pub fn post_form(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            cookie: None,
            body: body.into().into_bytes(),
        }
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}

/// An outbound response.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PageResponse {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), HTML.to_string())],
            body,
        }
    }

    fn redirect(location: String) -> Self {
        Self {
            status: 303,
            headers: vec![("location".to_string(), location)],
            body: String::new(),
        }
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve one request.
pub async fn handle_request(
    request: &PageRequest,
    config: Rc<PdpConfig>,
    client: FetchClient,
    logger: StructuredLogger,
) -> PageResponse {
    logger
        .info_builder("Product page request")
        .field("method", request.method.as_str())
        .field("path", request.path.as_str())
        .emit();

    let response = match (Endpoint::match_path(&request.path), request.method) {
        (Some(Endpoint::ProductPage(id)), Method::Get) => {
            let query = PageQuery::parse(query_of(&request.path));
            let Wiring { page, viewport, .. } = wire(request, &config, client, logger.clone());

            page.mount(id).await;
            page.replay(&query);

            let state = page.state();
            let status = if matches!(state.status(), LoadStatus::NotFound) { 404 } else { 200 };
            let script = viewport.script();
            PageResponse::html(
                status,
                render_document(&page_title(&state), &page.render(), script.as_deref()),
            )
        }
        (Some(Endpoint::AddToCart(id)), Method::Post) => {
            let form = PageQuery::parse(&String::from_utf8_lossy(&request.body));
            let Wiring {
                page,
                navigator,
                notices,
                ..
            } = wire(request, &config, client, logger.clone());

            page.mount(id.clone()).await;
            page.replay(&form);
            let outcome = page.add_to_cart().await;

            logger
                .info_builder("Add to cart handled")
                .field("product_id", id.as_str())
                .field("outcome", format!("{:?}", outcome))
                .emit();

            let location = match navigator.last() {
                Some(route) => route.path(&config.page),
                None => PageQuery::from_state(&page.state()).href(&id),
            };
            let mut response = PageResponse::redirect(location);
            if let Some(notice) = notices.messages().into_iter().next() {
                response = response.with_header(NOTICE_HEADER, notice);
            }
            response
        }
        (Some(Endpoint::ProductPage(_)), _) => method_not_allowed("GET"),
        (Some(Endpoint::AddToCart(_)), _) => method_not_allowed("POST"),
        (None, _) => {
            logger
                .warn_builder("No product route for path")
                .field("path", request.path.as_str())
                .emit();
            not_found()
        }
    };

    logger
        .info_builder("Product page response")
        .field_i64("status", i64::from(response.status))
        .emit();

    response.with_header("x-request-id", logger.request_id().as_str())
}

struct Wiring {
    page: ProductDetailsPage,
    navigator: Rc<RecordingNavigator>,
    notices: Rc<NoticeBoard>,
    viewport: Rc<ScriptViewport>,
}

fn wire(
    request: &PageRequest,
    config: &Rc<PdpConfig>,
    client: FetchClient,
    logger: StructuredLogger,
) -> Wiring {
    let client = client.with_base_url(config.services.base_url.clone());
    let navigator = Rc::new(RecordingNavigator::new());
    let notices = Rc::new(NoticeBoard::new());
    let viewport = Rc::new(ScriptViewport::new());

    let services = PageServices {
        products: Rc::new(HttpProductService::new(client.clone(), config.services.clone())),
        cart: Rc::new(HttpCartService::new(client, config.services.clone())),
        session: Rc::new(CookieSessionProvider::from_header(
            request.cookie.as_deref(),
            &config.session.cookie_name,
        )),
        navigator: navigator.clone(),
        notifier: notices.clone(),
        viewport: viewport.clone(),
    };

    Wiring {
        page: ProductDetailsPage::new(Rc::clone(config), services, logger),
        navigator,
        notices,
        viewport,
    }
}

fn not_found() -> PageResponse {
    let body = format!(r#"<div id="pdp-root" class="pdp">{}</div>"#, render_not_found());
    PageResponse::html(404, render_document("Product not found | Atelier", &body, None))
}

fn method_not_allowed(allow: &str) -> PageResponse {
    PageResponse {
        status: 405,
        headers: vec![("allow".to_string(), allow.to_string())],
        body: String::new(),
    }
}
