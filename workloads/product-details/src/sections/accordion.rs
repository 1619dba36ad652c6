//! Collapsible "Product Details" and "Return & Exchange Policy" blocks.
//!
//! Only the open block renders its body. Toggles are links that replay the
//! toggle on the next request.

use atelier_commerce::prelude::*;

use super::escape_html;
use crate::routes::PageQuery;
use crate::state::Section;

/// Return policy shown in the policy block.
pub const RETURN_POLICY: &str = "The brand does not accept returns, but replacements are possible subject to availability. Please initiate replacements from the 'My Orders' section in the App within 2 days of Delivery. The product must be in its original condition with all tags attached.";

/// Render both blocks.
pub fn render_accordions(product: &Product, open: Option<Section>, query: &PageQuery) -> String {
    Section::ALL
        .iter()
        .map(|&section| render_accordion(product, section, open == Some(section), query))
        .collect()
}

fn render_accordion(product: &Product, section: Section, is_open: bool, query: &PageQuery) -> String {
    let body = if is_open {
        format!(
            r#"<div class="pdp-accordion-body">{}</div>"#,
            match section {
                Section::ProductDetails => render_detail_fields(product),
                Section::ReturnPolicy => escape_html(RETURN_POLICY),
            }
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="pdp-accordion" data-section="{key}">
    <a href="{href}" class="pdp-accordion-toggle" aria-expanded="{is_open}"><span>{title}</span><span class="pdp-chevron {chevron}" aria-hidden="true"></span></a>
    {body}
</div>"#,
        key = section.key(),
        href = escape_html(&query.toggled(section).href(&product.id)),
        is_open = is_open,
        title = escape_html(section.title()),
        chevron = if is_open { "pdp-chevron--up" } else { "pdp-chevron--down" },
        body = body
    )
}

fn render_detail_fields(product: &Product) -> String {
    DETAIL_FIELDS
        .iter()
        .map(|field| {
            format!(
                r#"<p><strong>{label}:- </strong> {value}</p>"#,
                label = field.label,
                value = escape_html(&product.detail(field.key))
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        let mut product = Product::new("abc123", "Hoodie");
        product.details.insert("fabric".to_string(), json!("Cotton"));
        product.details.insert("pockets".to_string(), json!(2));
        product
    }

    #[test]
    fn test_closed_blocks_have_no_body() {
        let html = render_accordions(&product(), None, &PageQuery::default());
        assert!(html.contains("Product Details"));
        assert!(html.contains("Return &amp; Exchange Policy"));
        assert!(!html.contains("pdp-accordion-body"));
        assert!(html.contains(r#"href="/product/abc123?section=productDetails""#));
    }

    #[test]
    fn test_open_details_lists_every_field() {
        let query = PageQuery::default().toggled(Section::ProductDetails);
        let html = render_accordions(&product(), Some(Section::ProductDetails), &query);

        assert_eq!(html.matches("<p><strong>").count(), DETAIL_FIELDS.len());
        assert!(html.contains("Cotton"));
        assert!(html.contains("2</p>"));
        assert!(!html.contains("replacements"));
        // The open block's toggle closes it.
        assert!(html.contains(r#"href="/product/abc123" class="pdp-accordion-toggle" aria-expanded="true""#));
    }

    #[test]
    fn test_open_policy() {
        let html = render_accordions(&product(), Some(Section::ReturnPolicy), &PageQuery::default());
        assert!(html.contains("within 2 days of Delivery"));
        assert!(!html.contains("<p><strong>"));
    }
}
