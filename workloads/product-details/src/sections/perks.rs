//! Delivery and exchange perks.

/// Icon class and text of each perk, in display order.
pub const PERKS: [(&str, &str); 3] = [
    ("perk-delivery", "Free Delivery Available"),
    ("perk-no-cod", "No Cash on Delivery"),
    ("perk-exchange", "2-Day Size Exchange Only"),
];

/// Render the perks list.
pub fn render_perks() -> String {
    let items: String = PERKS
        .iter()
        .map(|(class, text)| {
            format!(
                r#"<li class="pdp-perk {class}"><span class="pdp-perk-icon" aria-hidden="true"></span>{text}</li>"#,
                class = class,
                text = text
            )
        })
        .collect();

    format!(r#"<ul class="pdp-perks">{}</ul>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_perks_rendered() {
        let html = render_perks();
        for (_, text) in PERKS {
            assert!(html.contains(text));
        }
    }
}
