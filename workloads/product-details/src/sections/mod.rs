//! Section renderers for the product detail page.

mod accordion;
mod actions;
mod gallery;
mod perks;
mod status;
mod summary;
mod variants;

pub use accordion::*;
pub use actions::*;
pub use gallery::*;
pub use perks::*;
pub use status::*;
pub use summary::*;
pub use variants::*;

/// Escape text for HTML bodies and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
