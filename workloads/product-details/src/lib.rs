//! Storefront product detail page.
//!
//! Fetches a product by id, renders its gallery, price and variants, and
//! submits add-to-cart requests:
//! - `ProductDetailsState` holds the view state and its transitions
//! - `ProductDetailsPage` drives it against injected services and effects
//! - `sections` and `page` render the state to HTML
//! - `handler` serves `GET /product/{id}` and `POST /product/{id}/cart`;
//!   on `wasm32` the Spin component in `server` forwards to it

pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod handler;
pub mod page;
pub mod routes;
pub mod sections;
pub mod services;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod server;

pub use config::PdpConfig;
pub use controller::{CartOutcome, PageServices, ProductDetailsPage, ADDED_TO_CART_MESSAGE};
pub use error::PdpError;
pub use handler::{handle_request, PageRequest, PageResponse};
pub use routes::{Endpoint, PageQuery, Route};
pub use state::{LoadStatus, ProductDetailsState, Section, Selection};
