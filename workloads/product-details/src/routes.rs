//! Routes the page reads from and navigates to.
//!
//! Interactive transitions are replayable from the query string so the
//! server-rendered page can link to every state it can reach:
//!
//! | key       | transition             |
//! |-----------|------------------------|
//! | `section` | open an accordion      |
//! | `image`   | select a thumbnail     |
//! | `size`    | select a size          |
//! | `color`   | select a color         |
//! | `qty`     | set the quantity       |
//! | `gift`    | enable gift wrapping   |

use atelier_commerce::ProductId;
use url::form_urlencoded;

use crate::config::PageConfig;
use crate::error::{PdpError, Result};
use crate::state::{ProductDetailsState, Section};

/// Path prefix of product pages.
pub const PRODUCT_PREFIX: &str = "/product/";

/// Longest accepted product id.
const MAX_PRODUCT_ID_LEN: usize = 64;

/// In-app destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Product(ProductId),
    Cart,
    Login,
}

impl Route {
    /// Path for this route.
    pub fn path(&self, page: &PageConfig) -> String {
        match self {
            Route::Product(id) => product_path(id),
            Route::Cart => page.cart_route.clone(),
            Route::Login => page.login_route.clone(),
        }
    }
}

/// Requests the page component answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /product/{id}`
    ProductPage(ProductId),
    /// `POST /product/{id}/cart`
    AddToCart(ProductId),
}

impl Endpoint {
    /// Match a request path (query string allowed) to an endpoint.
    ///
    /// Returns `None` for foreign paths and malformed ids.
    pub fn match_path(path: &str) -> Option<Self> {
        let rest = path.split('?').next()?.strip_prefix(PRODUCT_PREFIX)?;
        let mut segments = rest.trim_end_matches('/').split('/');

        let id = parse_product_id(segments.next()?).ok()?;
        match (segments.next(), segments.next()) {
            (None, _) => Some(Endpoint::ProductPage(id)),
            (Some("cart"), None) => Some(Endpoint::AddToCart(id)),
            _ => None,
        }
    }

    /// Product the request is about.
    pub fn product_id(&self) -> &ProductId {
        match self {
            Endpoint::ProductPage(id) | Endpoint::AddToCart(id) => id,
        }
    }
}

/// Validate a raw path segment as a product id.
pub fn parse_product_id(raw: &str) -> Result<ProductId> {
    let well_formed = !raw.is_empty()
        && raw.len() <= MAX_PRODUCT_ID_LEN
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(ProductId::new(raw))
    } else {
        Err(PdpError::InvalidProductId(raw.to_string()))
    }
}

/// Path of a product page.
pub fn product_path(id: &ProductId) -> String {
    format!("{}{}", PRODUCT_PREFIX, id)
}

/// Path the add-to-cart form posts to.
pub fn cart_action_path(id: &ProductId) -> String {
    format!("{}{}/cart", PRODUCT_PREFIX, id)
}

/// Query string of a request path, without the `?`.
pub fn query_of(path: &str) -> &str {
    path.split_once('?').map(|(_, q)| q).unwrap_or("")
}

/// Replayable page transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub section: Option<Section>,
    pub image: Option<usize>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<i64>,
    pub gift: bool,
}

impl PageQuery {
    /// Parse a query string or form body. Unknown keys and bad values are skipped.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "section" => parsed.section = Section::from_key(&value),
                "image" => parsed.image = value.parse().ok(),
                "size" if !value.is_empty() => parsed.size = Some(value.into_owned()),
                "color" if !value.is_empty() => parsed.color = Some(value.into_owned()),
                "qty" => parsed.quantity = value.parse().ok(),
                "gift" => parsed.gift = matches!(value.as_ref(), "1" | "true" | "on"),
                _ => {}
            }
        }
        parsed
    }

    /// Capture the replayable parts of a page state.
    pub fn from_state(state: &ProductDetailsState) -> Self {
        let selection = state.selection();
        let image = state.product().and_then(|p| {
            p.images
                .iter()
                .position(|url| url == state.main_image())
                .filter(|&i| i > 0)
        });

        Self {
            section: state.open_section(),
            image,
            size: selection.size.clone(),
            color: selection.color.clone(),
            quantity: (selection.quantity != 1).then_some(selection.quantity),
            gift: selection.gift_wrap,
        }
    }

    /// Copy with `section` toggled the way the accordion toggles it.
    pub fn toggled(&self, section: Section) -> Self {
        let mut next = self.clone();
        next.section = if self.section == Some(section) {
            None
        } else {
            Some(section)
        };
        next
    }

    /// Copy showing the image at `index`.
    pub fn with_image(&self, index: usize) -> Self {
        Self {
            image: Some(index),
            ..self.clone()
        }
    }

    /// Encode as a query string, without the `?`. Empty when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(section) = self.section {
            serializer.append_pair("section", section.key());
        }
        if let Some(image) = self.image {
            serializer.append_pair("image", &image.to_string());
        }
        if let Some(size) = &self.size {
            serializer.append_pair("size", size);
        }
        if let Some(color) = &self.color {
            serializer.append_pair("color", color);
        }
        if let Some(quantity) = self.quantity {
            serializer.append_pair("qty", &quantity.to_string());
        }
        if self.gift {
            serializer.append_pair("gift", "1");
        }
        serializer.finish()
    }

    /// Link to the product page in this state.
    pub fn href(&self, id: &ProductId) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            product_path(id)
        } else {
            format!("{}?{}", product_path(id), query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_commerce::prelude::Product;

    // === Endpoint Tests ===

    #[test]
    fn test_match_product_page() {
        assert_eq!(
            Endpoint::match_path("/product/abc123"),
            Some(Endpoint::ProductPage(ProductId::new("abc123")))
        );
        assert_eq!(
            Endpoint::match_path("/product/abc123/?section=returnPolicy"),
            Some(Endpoint::ProductPage(ProductId::new("abc123")))
        );
    }

    #[test]
    fn test_match_add_to_cart() {
        let endpoint = Endpoint::match_path("/product/abc123/cart").unwrap();
        assert_eq!(endpoint, Endpoint::AddToCart(ProductId::new("abc123")));
        assert_eq!(endpoint.product_id().as_str(), "abc123");
    }

    #[test]
    fn test_match_rejects_foreign_and_malformed() {
        assert_eq!(Endpoint::match_path("/cart"), None);
        assert_eq!(Endpoint::match_path("/product/"), None);
        assert_eq!(Endpoint::match_path("/product/a%20b"), None);
        assert_eq!(Endpoint::match_path("/product/abc/reviews"), None);
    }

    #[test]
    fn test_parse_product_id() {
        assert!(parse_product_id("64f1c2ab-9_x").is_ok());
        assert_eq!(
            parse_product_id("<b>"),
            Err(PdpError::InvalidProductId("<b>".to_string()))
        );
    }

    #[test]
    fn test_route_paths() {
        let page = PageConfig::default();
        assert_eq!(Route::Cart.path(&page), "/cart");
        assert_eq!(Route::Login.path(&page), "/login");
        assert_eq!(Route::Product(ProductId::new("p1")).path(&page), "/product/p1");
        assert_eq!(cart_action_path(&ProductId::new("p1")), "/product/p1/cart");
    }

    // === Query Tests ===

    #[test]
    fn test_parse_query() {
        let query = PageQuery::parse("section=productDetails&image=1&size=L&color=Deep+Black&qty=2&gift=on");
        assert_eq!(query.section, Some(Section::ProductDetails));
        assert_eq!(query.image, Some(1));
        assert_eq!(query.size.as_deref(), Some("L"));
        assert_eq!(query.color.as_deref(), Some("Deep Black"));
        assert_eq!(query.quantity, Some(2));
        assert!(query.gift);
    }

    #[test]
    fn test_parse_query_skips_junk() {
        let query = PageQuery::parse("?section=shipping&image=x&qty=&size=&utm=1");
        assert_eq!(query, PageQuery::default());
        assert_eq!(PageQuery::parse(""), PageQuery::default());
    }

    #[test]
    fn test_query_string_encoding() {
        let query = PageQuery {
            color: Some("Deep Black".to_string()),
            ..PageQuery::default()
        }
        .toggled(Section::ReturnPolicy);

        assert_eq!(query.to_query_string(), "section=returnPolicy&color=Deep+Black");
        assert_eq!(
            query.toggled(Section::ReturnPolicy).href(&ProductId::new("p1")),
            "/product/p1?color=Deep+Black"
        );
    }

    #[test]
    fn test_from_state_tracks_image_and_selection() {
        let mut product = Product::new("abc123", "Hoodie");
        product.images = vec!["u1".to_string(), "u2".to_string()];
        product.sizes = vec!["L".to_string()];

        let mut state = ProductDetailsState::new("placeholder");
        let ticket = state.begin_load(ProductId::new("abc123"));
        state.finish_load(ticket, Some(product));
        assert_eq!(PageQuery::from_state(&state), PageQuery::default());

        state.select_thumbnail("u2");
        state.select_size("L");
        state.toggle_section(Section::ProductDetails);

        let query = PageQuery::from_state(&state);
        assert_eq!(query.image, Some(1));
        assert_eq!(query.size.as_deref(), Some("L"));
        assert_eq!(query.section, Some(Section::ProductDetails));
    }
}
