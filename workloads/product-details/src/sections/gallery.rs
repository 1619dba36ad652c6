//! Main image and thumbnail strip.

use atelier_commerce::prelude::Product;

use super::escape_html;
use crate::routes::PageQuery;

/// Render the gallery. Each thumbnail links to the page with that image shown.
pub fn render_gallery(product: &Product, main_image: &str, query: &PageQuery) -> String {
    let thumbnails: String = product
        .images
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let class = if url == main_image {
                "pdp-thumb pdp-thumb--active"
            } else {
                "pdp-thumb"
            };
            format!(
                r#"<a href="{href}" class="pdp-gallery-link"><img src="{src}" alt="Thumbnail {n}" class="{class}"></a>"#,
                href = escape_html(&query.with_image(index).href(&product.id)),
                src = escape_html(url),
                n = index + 1,
                class = class
            )
        })
        .collect();

    format!(
        r#"<div class="pdp-gallery">
    <img src="{main}" alt="Product" class="pdp-main-image">
    <div class="pdp-gallery-strip">{thumbnails}</div>
</div>"#,
        main = escape_html(main_image),
        thumbnails = thumbnails
    )
}
