//! Structured request logging for storefront workloads.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `StructuredLogger` - Structured logging with request context, emitted
//!   through `tracing`

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::*;
