//! Spin HTTP component.

use std::rc::Rc;

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use atelier_data::{FetchClient, Method};
use atelier_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};

use crate::config::PdpConfig;
use crate::handler::{handle_request, PageRequest, PageResponse};

/// Configuration bundled into the component.
const BUNDLED_CONFIG: &str = include_str!("../pdp.toml");

/// Main HTTP handler for the product detail page.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let request_id = RequestId::generate();

    let logger = StructuredLogger::new(request_id)
        .with_workload("product-details")
        .with_route(&path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let config = match PdpConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => Rc::new(config),
        Err(e) => {
            logger
                .error_builder("Bundled config is invalid")
                .field("error", format!("{:#}", e))
                .emit();
            PdpConfig::default().into()
        }
    };

    let method = match req.method() {
        SpinMethod::Get => Method::Get,
        SpinMethod::Post => Method::Post,
        SpinMethod::Put => Method::Put,
        SpinMethod::Delete => Method::Delete,
        _ => {
            let response = PageResponse {
                status: 405,
                headers: vec![("allow".to_string(), "GET, POST".to_string())],
                body: String::new(),
            };
            send_response(response, response_out, &logger).await;
            return;
        }
    };

    let cookie = req
        .headers()
        .get(&"cookie".to_string())
        .into_iter()
        .next()
        .map(|value| String::from_utf8_lossy(&value).into_owned());

    let body = if method == Method::Post {
        match req.into_body().await {
            Ok(body) => body,
            Err(e) => {
                logger
                    .warn_builder("Failed to read request body")
                    .field("error", format!("{:?}", e))
                    .emit();
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let request = PageRequest {
        method,
        path,
        cookie,
        body,
    };

    let response = handle_request(&request, config, FetchClient::spin(), logger.clone()).await;
    send_response(response, response_out, &logger).await;
}

async fn send_response(response: PageResponse, response_out: ResponseOutparam, logger: &StructuredLogger) {
    let header_list: Vec<(String, Vec<u8>)> = response
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone().into_bytes()))
        .collect();

    let headers = match Fields::from_list(&header_list) {
        Ok(headers) => headers,
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            Fields::new()
        }
    };

    let outgoing = OutgoingResponse::new(headers);
    if outgoing.set_status_code(response.status).is_err() {
        logger.error("Invalid response status");
    }

    let mut body = outgoing.take_body();
    response_out.set(outgoing);

    if let Err(e) = body.send(response.body.into_bytes()).await {
        logger
            .error_builder("Failed to write response body")
            .field("error", format!("{:?}", e))
            .emit();
    }
}
