//! Shopper identity for storefront workloads.
//!
//! Pages never read identity from globals; they ask a [`SessionProvider`].
//! The server wires a cookie-backed provider, tests wire a static one.

mod error;
mod provider;
mod session;

pub use error::SessionError;
pub use provider::{CookieSessionProvider, SessionProvider, StaticSessionProvider};
pub use session::Session;
