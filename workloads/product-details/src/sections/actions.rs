//! Buy box: the add-to-cart form and the wishlist control.

use atelier_commerce::prelude::Product;

use super::{escape_html, render_color_picker, render_perks, render_quantity_picker, render_size_picker};
use crate::config::PageConfig;
use crate::routes::cart_action_path;
use crate::state::Selection;

/// Render the gift wrapping option.
pub fn render_gift_wrap(selection: &Selection, page: &PageConfig) -> String {
    let checked = if selection.gift_wrap { " checked" } else { "" };
    format!(
        r#"<div class="pdp-gift">
    <label for="pdp-gift" class="pdp-gift-label">Gift Wrapping available for an extra <span class="pdp-gift-price">{price}</span>.</label>
    <input type="checkbox" id="pdp-gift" name="gift" value="1"{checked}>
</div>"#,
        price = escape_html(&page.format_price(page.gift_wrap_price)),
        checked = checked
    )
}

/// Render the buy box. The form posts the selection to the add-to-cart endpoint.
pub fn render_buy_box(
    product: &Product,
    selection: &Selection,
    cart_loading: bool,
    page: &PageConfig,
) -> String {
    let (cart_label, cart_disabled) = if cart_loading {
        ("Adding...", " disabled")
    } else {
        ("Add to Cart", "")
    };

    format!(
        r#"<form method="post" action="{action}" class="pdp-buy">
    {colors}
    {sizes}
    {quantity}
    {perks}
    {gift}
    <div class="pdp-actions">
        <button type="submit" class="pdp-btn pdp-btn--cart"{cart_disabled}>{cart_label}</button>
        <button type="button" class="pdp-btn pdp-btn--wishlist">Add to Wishlist</button>
    </div>
</form>"#,
        action = escape_html(&cart_action_path(&product.id)),
        colors = render_color_picker(product, selection),
        sizes = render_size_picker(product, selection),
        quantity = render_quantity_picker(selection),
        perks = render_perks(),
        gift = render_gift_wrap(selection, page),
        cart_disabled = cart_disabled,
        cart_label = cart_label
    )
}
