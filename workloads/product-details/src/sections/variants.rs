//! Color, size and quantity pickers.
//!
//! The pickers are plain form controls inside the add-to-cart form, so the
//! submitted body carries the shopper's selection.

use atelier_commerce::cart::MAX_QUANTITY;
use atelier_commerce::prelude::Product;

use super::escape_html;
use crate::state::Selection;

/// Render the color dropdown. A disabled prompt is selected until a color is.
pub fn render_color_picker(product: &Product, selection: &Selection) -> String {
    let prompt_selected = if selection.color.is_none() { " selected" } else { "" };

    let options: String = product
        .colors
        .iter()
        .map(|color| {
            let selected = if selection.color.as_deref() == Some(color.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = escape_html(color),
                selected = selected
            )
        })
        .collect();

    format!(
        r#"<div class="pdp-picker">
    <h3 class="pdp-picker-title">Color:</h3>
    <select name="color" class="pdp-color-select">
        <option value="" disabled{prompt_selected}>Select color</option>{options}
    </select>
</div>"#,
        prompt_selected = prompt_selected,
        options = options
    )
}

/// Render the size chips as radio buttons.
pub fn render_size_picker(product: &Product, selection: &Selection) -> String {
    let chips: String = product
        .sizes
        .iter()
        .map(|size| {
            let checked = if selection.size.as_deref() == Some(size.as_str()) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label class="pdp-size"><input type="radio" name="size" value="{value}"{checked}><span class="pdp-size-chip">{value}</span></label>"#,
                value = escape_html(size),
                checked = checked
            )
        })
        .collect();

    format!(
        r#"<div class="pdp-picker">
    <h3 class="pdp-picker-title">Size:</h3>
    <div class="pdp-sizes">{}</div>
</div>"#,
        chips
    )
}

/// Render the quantity input.
pub fn render_quantity_picker(selection: &Selection) -> String {
    format!(
        r#"<div class="pdp-picker">
    <label class="pdp-picker-title" for="pdp-qty">Quantity:</label>
    <input id="pdp-qty" type="number" name="qty" min="1" max="{max}" value="{value}" class="pdp-qty">
</div>"#,
        max = MAX_QUANTITY,
        value = selection.quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        let mut product = Product::new("abc123", "Hoodie");
        product.colors = vec!["Lavender".to_string(), "Black".to_string()];
        product.sizes = vec!["M".to_string(), "L".to_string()];
        product
    }

    // === Color Picker Tests ===

    #[test]
    fn test_color_prompt_selected_by_default() {
        let html = render_color_picker(&product(), &Selection::default());
        assert!(html.contains(r#"<option value="" disabled selected>Select color</option>"#));
        assert!(html.contains(r#"<option value="Black">Black</option>"#));
    }

    #[test]
    fn test_selected_color_marked() {
        let selection = Selection {
            color: Some("Black".to_string()),
            ..Selection::default()
        };
        let html = render_color_picker(&product(), &selection);
        assert!(html.contains(r#"<option value="" disabled>Select color</option>"#));
        assert!(html.contains(r#"<option value="Black" selected>Black</option>"#));
    }

    // === Size Picker Tests ===

    #[test]
    fn test_size_radios() {
        let selection = Selection {
            size: Some("L".to_string()),
            ..Selection::default()
        };
        let html = render_size_picker(&product(), &selection);
        assert_eq!(html.matches(r#"type="radio" name="size""#).count(), 2);
        assert!(html.contains(r#"value="L" checked"#));
        assert!(!html.contains(r#"value="M" checked"#));
    }

    #[test]
    fn test_quantity_bounds() {
        let html = render_quantity_picker(&Selection::default());
        assert!(html.contains(r#"min="1" max="10" value="1""#));
    }
}
