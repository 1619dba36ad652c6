//! Loading and not-found views.

/// Spinner shown until the product fetch settles.
pub fn render_loading() -> String {
    r#"<div class="pdp-status" data-state="loading">
    <div class="pdp-spinner" role="status" aria-label="Loading"></div>
</div>"#
        .to_string()
}

/// Shown when the product could not be loaded.
pub fn render_not_found() -> String {
    r#"<div class="pdp-status" data-state="not-found">
    <p class="pdp-status-text">Product not found.</p>
</div>"#
        .to_string()
}
