//! Page assembly.

use crate::config::PdpConfig;
use crate::routes::PageQuery;
use crate::sections::*;
use crate::state::{LoadStatus, ProductDetailsState};

/// Render the page body for a state.
pub fn render_page(state: &ProductDetailsState, config: &PdpConfig) -> String {
    let content = match state.status() {
        LoadStatus::Loading => render_loading(),
        LoadStatus::NotFound => render_not_found(),
        LoadStatus::Loaded(product) => {
            let query = PageQuery::from_state(state);
            format!(
                r#"<div class="pdp-grid">
    <div class="pdp-col">
        {gallery}
    </div>
    <div class="pdp-col">
        {summary}
        {buy_box}
        {accordions}
    </div>
</div>"#,
                gallery = render_gallery(product, state.main_image(), &query),
                summary = render_summary(product, &config.page),
                buy_box = render_buy_box(product, state.selection(), state.cart_loading(), &config.page),
                accordions = render_accordions(product, state.open_section(), &query)
            )
        }
    };

    format!(r#"<div id="pdp-root" class="pdp">{}</div>"#, content)
}

/// Document title for a state.
pub fn page_title(state: &ProductDetailsState) -> String {
    match state.status() {
        LoadStatus::Loaded(product) if !product.name.is_empty() => format!("{} | Atelier", product.name),
        LoadStatus::NotFound => "Product not found | Atelier".to_string(),
        _ => "Atelier".to_string(),
    }
}

/// Wrap a page body in a full HTML document.
pub fn render_document(title: &str, body: &str, script: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{body}
{script}
</body>
</html>"#,
        title = escape_html(title),
        styles = PDP_STYLES,
        body = body,
        script = script.unwrap_or_default()
    )
}

/// CSS styles for the page.
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: Georgia, 'Times New Roman', serif; margin: 0; background: #f7f3ee; color: #1f2937; }
.pdp { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
.pdp-grid { display: flex; flex-wrap: wrap; gap: 2rem; }
.pdp-col { flex: 1 1 420px; }

/* Gallery */
.pdp-main-image { width: 100%; height: auto; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.12); }
.pdp-gallery-strip { display: flex; gap: 1rem; padding: 1rem 0; justify-content: center; overflow-x: auto; }
.pdp-thumb { width: 64px; height: 64px; object-fit: cover; border-radius: 6px; opacity: 0.6; transition: opacity 0.3s; }
.pdp-thumb:hover, .pdp-thumb--active { opacity: 1; }

/* Summary */
.pdp-name { font-size: 1.9rem; margin: 0 0 0.5rem; }
.pdp-price { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.pdp-price-current { font-size: 1.5rem; font-weight: 600; }
.pdp-price-was { color: #6b7280; text-decoration: line-through; }
.pdp-stock { display: inline-block; font-size: 0.875rem; padding: 0.25rem 0.75rem; border-radius: 4px; margin-bottom: 1rem; }
.stock-in { background: #dcfce7; color: #166534; }
.stock-out { background: #fee2e2; color: #991b1b; }
.pdp-description { color: #374151; margin-bottom: 1.5rem; }

/* Buy box */
.pdp-picker { margin-bottom: 1.5rem; }
.pdp-picker-title { font-size: 1.1rem; font-weight: 600; margin: 0 0 0.5rem; display: block; }
.pdp-color-select { width: 10rem; padding: 0.75rem; font-size: 1rem; background: transparent; }
.pdp-sizes { display: flex; gap: 1rem; }
.pdp-size input { display: none; }
.pdp-size-chip { width: 2.5rem; height: 2.5rem; display: flex; align-items: center; justify-content: center; border: 1px solid #9ca3af; border-radius: 50%; background: #fff; cursor: pointer; }
.pdp-size input:checked + .pdp-size-chip { background: #1f2937; color: #fff; }
.pdp-qty { width: 5rem; padding: 0.5rem; }
.pdp-perks { list-style: none; padding: 0; margin: 1.5rem 0; }
.pdp-perk { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; color: #374151; }
.pdp-perk-icon { width: 20px; height: 20px; border-radius: 50%; }
.perk-delivery .pdp-perk-icon { background: #16a34a; }
.perk-no-cod .pdp-perk-icon { background: #dc2626; }
.perk-exchange .pdp-perk-icon { background: #2563eb; }
.pdp-gift { display: flex; align-items: center; gap: 0.5rem; margin: 1rem 0 0.75rem; }
.pdp-gift-price { font-weight: 600; }
.pdp-actions { display: flex; gap: 1rem; }
.pdp-btn { flex: 1; padding: 0.75rem; font-size: 1.1rem; font-weight: 600; border: none; border-radius: 8px; cursor: pointer; }
.pdp-btn--cart { background: #e6ff87; color: #000; }
.pdp-btn--cart:hover { background: #bac68f; }
.pdp-btn--cart[disabled] { opacity: 0.6; cursor: wait; }
.pdp-btn--wishlist { background: #ef4444; color: #fff; }

/* Accordions */
.pdp-accordion { margin-top: 1rem; }
.pdp-accordion-toggle { display: flex; justify-content: space-between; width: 16rem; padding: 0.75rem 0; font-size: 1.1rem; font-weight: 600; color: #1f2937; text-decoration: none; }
.pdp-chevron::after { margin-left: 0.5rem; }
.pdp-chevron--down::after { content: "\25BE"; }
.pdp-chevron--up::after { content: "\25B4"; }
.pdp-accordion-body { padding: 0.75rem 1rem; color: #374151; }

/* Loading/Error States */
.pdp-status { display: flex; justify-content: center; align-items: center; min-height: 100vh; }
.pdp-status-text { color: #6b7280; }
.pdp-spinner { width: 3rem; height: 3rem; border: 4px solid #e5e7eb; border-top-color: #1f2937; border-radius: 50%; animation: pdp-spin 0.8s linear infinite; }
@keyframes pdp-spin { to { transform: rotate(360deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_commerce::prelude::*;

    fn loaded_state() -> ProductDetailsState {
        let mut product = Product::new("abc123", "Lavender Hoodie");
        product.price = 999.0;
        product.stock = 2;
        product.images = vec!["u1".to_string(), "u2".to_string()];
        product.sizes = vec!["M".to_string()];
        product.colors = vec!["Lavender".to_string()];

        let mut state = ProductDetailsState::new("placeholder.jpg");
        let ticket = state.begin_load(ProductId::new("abc123"));
        state.finish_load(ticket, Some(product));
        state
    }

    #[test]
    fn test_loading_page() {
        let state = ProductDetailsState::new("placeholder.jpg");
        let html = render_page(&state, &PdpConfig::default());
        assert!(html.contains(r#"data-state="loading""#));
        assert_eq!(page_title(&state), "Atelier");
    }

    #[test]
    fn test_not_found_page() {
        let mut state = ProductDetailsState::new("placeholder.jpg");
        let ticket = state.begin_load(ProductId::new("missing"));
        state.finish_load(ticket, None);

        let html = render_page(&state, &PdpConfig::default());
        assert!(html.contains("Product not found."));
        assert!(!html.contains("pdp-buy"));
    }

    #[test]
    fn test_loaded_page_layout() {
        let state = loaded_state();
        let html = render_page(&state, &PdpConfig::default());

        assert!(html.starts_with(r#"<div id="pdp-root" class="pdp">"#));
        assert!(html.contains(r#"<img src="u1" alt="Product""#));
        assert!(html.contains("₹1499"));
        assert!(html.contains("Add to Cart"));
        assert!(html.contains("Return &amp; Exchange Policy"));
        assert_eq!(page_title(&state), "Lavender Hoodie | Atelier");
    }

    #[test]
    fn test_document_wraps_body_and_script() {
        let doc = render_document("A & B", "<main></main>", Some("<script></script>"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<main></main>\n<script></script>"));
    }
}
