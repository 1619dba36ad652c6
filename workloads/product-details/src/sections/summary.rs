//! Name, price, stock badge and description.

use atelier_commerce::prelude::Product;

use super::escape_html;
use crate::config::PageConfig;

/// Render the product summary.
pub fn render_summary(product: &Product, page: &PageConfig) -> String {
    let stock = product.stock_status();

    format!(
        r#"<div class="pdp-summary">
    <h2 class="pdp-name">{name}</h2>
    <div class="pdp-price">
        <span class="pdp-price-current">{price}</span>
        <span class="pdp-price-was">{was}</span>
    </div>
    <span class="pdp-stock {stock_class}">{stock_label}</span>
    <p class="pdp-description">{description}</p>
</div>"#,
        name = escape_html(&product.name),
        price = escape_html(&page.format_price(product.price)),
        was = escape_html(&page.format_price(product.compare_at_price(page.compare_at_markup))),
        stock_class = stock.css_class(),
        stock_label = stock.label(),
        description = escape_html(&product.description)
    )
}
