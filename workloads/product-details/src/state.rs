//! View state for the product detail page.
//!
//! Every transition the page supports is a method here; the controller only
//! sequences them around network calls.

use atelier_commerce::cart::MAX_QUANTITY;
use atelier_commerce::prelude::*;

use crate::config::CartDefaults;

/// Where the product fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded(Product),
    NotFound,
}

/// Collapsible blocks under the buy box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ProductDetails,
    ReturnPolicy,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 2] = [Section::ProductDetails, Section::ReturnPolicy];

    /// Key used in links and markup.
    pub fn key(&self) -> &'static str {
        match self {
            Section::ProductDetails => "productDetails",
            Section::ReturnPolicy => "returnPolicy",
        }
    }

    /// Parse a section key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "productDetails" => Some(Section::ProductDetails),
            "returnPolicy" => Some(Section::ReturnPolicy),
            _ => None,
        }
    }

    /// Heading shown on the toggle.
    pub fn title(&self) -> &'static str {
        match self {
            Section::ProductDetails => "Product Details",
            Section::ReturnPolicy => "Return & Exchange Policy",
        }
    }
}

/// Variant and extras picked by the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
    pub gift_wrap: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            quantity: 1,
            gift_wrap: false,
        }
    }
}

/// Identifies one product load; results carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State owned by one mounted product page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailsState {
    product_id: Option<ProductId>,
    status: LoadStatus,
    main_image: String,
    open_section: Option<Section>,
    cart_loading: bool,
    selection: Selection,
    initial_selection: Selection,
    generation: u64,
    torn_down: bool,
}

impl ProductDetailsState {
    /// Fresh state; the page counts as loading until the first fetch settles.
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            product_id: None,
            status: LoadStatus::Loading,
            main_image: placeholder_image.into(),
            open_section: None,
            cart_loading: false,
            selection: Selection::default(),
            initial_selection: Selection::default(),
            generation: 0,
            torn_down: false,
        }
    }

    /// Start every selection at the configured cart quantity.
    pub fn with_cart_defaults(mut self, defaults: &CartDefaults) -> Self {
        self.initial_selection.quantity = defaults.quantity.clamp(1, MAX_QUANTITY);
        self.selection = self.initial_selection.clone();
        self
    }

    // --- accessors ---

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The loaded product, if the fetch succeeded.
    pub fn product(&self) -> Option<&Product> {
        match &self.status {
            LoadStatus::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    pub fn open_section(&self) -> Option<Section> {
        self.open_section
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.open_section == Some(section)
    }

    pub fn cart_loading(&self) -> bool {
        self.cart_loading
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // --- product load ---

    /// Enter `Loading` for `product_id` and hand out the ticket for this load.
    pub fn begin_load(&mut self, product_id: ProductId) -> LoadTicket {
        self.generation += 1;
        if self.product_id.as_ref() != Some(&product_id) {
            self.selection = self.initial_selection.clone();
        }
        self.product_id = Some(product_id);
        self.status = LoadStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Settle a load. Returns false when the result was stale and dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, product: Option<Product>) -> bool {
        if self.torn_down || ticket.0 != self.generation {
            return false;
        }

        self.status = match product {
            Some(product) => {
                if let Some(first) = product.first_image() {
                    self.main_image = first.to_string();
                }
                LoadStatus::Loaded(product)
            }
            None => LoadStatus::NotFound,
        };
        true
    }

    // --- local transitions ---

    /// Open `section`, or close it when it is already open.
    pub fn toggle_section(&mut self, section: Section) {
        self.open_section = if self.open_section == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Show `url` as the main image.
    pub fn select_thumbnail(&mut self, url: impl Into<String>) {
        self.main_image = url.into();
    }

    /// Show the product image at `index`. Returns false when out of range.
    pub fn select_image_at(&mut self, index: usize) -> bool {
        let Some(url) = self.product().and_then(|p| p.image_at(index)).map(str::to_string) else {
            return false;
        };
        self.main_image = url;
        true
    }

    /// Pick a size offered by the loaded product.
    pub fn select_size(&mut self, size: &str) -> bool {
        if !self.product().is_some_and(|p| p.offers_size(size)) {
            return false;
        }
        self.selection.size = Some(size.to_string());
        true
    }

    /// Pick a color offered by the loaded product.
    pub fn select_color(&mut self, color: &str) -> bool {
        if !self.product().is_some_and(|p| p.offers_color(color)) {
            return false;
        }
        self.selection.color = Some(color.to_string());
        true
    }

    /// Set the quantity, rejecting values outside `1..=MAX_QUANTITY`.
    pub fn set_quantity(&mut self, quantity: i64) -> bool {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return false;
        }
        self.selection.quantity = quantity;
        true
    }

    pub fn set_gift_wrap(&mut self, enabled: bool) {
        self.selection.gift_wrap = enabled;
    }

    /// The variant to submit, falling back to `defaults` for unpicked parts.
    pub fn variant_choice(&self, defaults: &CartDefaults) -> VariantChoice {
        VariantChoice::new(
            self.selection.size.clone().unwrap_or_else(|| defaults.size.clone()),
            self.selection.color.clone().unwrap_or_else(|| defaults.color.clone()),
            self.selection.quantity,
        )
    }

    // --- cart submission ---

    /// Mark a submission in flight. False if one already is, or after teardown.
    pub fn begin_cart(&mut self) -> bool {
        if self.torn_down || self.cart_loading {
            return false;
        }
        self.cart_loading = true;
        true
    }

    pub fn finish_cart(&mut self) {
        if !self.torn_down {
            self.cart_loading = false;
        }
    }

    // --- lifecycle ---

    /// Freeze the state; later results are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "placeholder.jpg";

    fn hoodie() -> Product {
        let mut product = Product::new("abc123", "Lavender Hoodie");
        product.images = vec!["u1".to_string(), "u2".to_string()];
        product.sizes = vec!["S".to_string(), "M".to_string(), "L".to_string()];
        product.colors = vec!["Lavender".to_string(), "Black".to_string()];
        product
    }

    fn loaded() -> ProductDetailsState {
        let mut state = ProductDetailsState::new(PLACEHOLDER);
        let ticket = state.begin_load(ProductId::new("abc123"));
        assert!(state.finish_load(ticket, Some(hoodie())));
        state
    }

    // === Load Tests ===

    #[test]
    fn test_initial_state_is_loading_with_placeholder() {
        let state = ProductDetailsState::new(PLACEHOLDER);
        assert!(state.is_loading());
        assert_eq!(state.main_image(), PLACEHOLDER);
        assert_eq!(state.open_section(), None);
        assert!(!state.cart_loading());
    }

    #[test]
    fn test_successful_load_shows_first_image() {
        let state = loaded();
        assert!(!state.is_loading());
        assert_eq!(state.main_image(), "u1");
        assert_eq!(state.product().unwrap().name, "Lavender Hoodie");
    }

    #[test]
    fn test_failed_load_is_not_found() {
        let mut state = ProductDetailsState::new(PLACEHOLDER);
        let ticket = state.begin_load(ProductId::new("missing"));
        state.finish_load(ticket, None);

        assert_eq!(state.status(), &LoadStatus::NotFound);
        assert!(!state.is_loading());
        assert!(state.product().is_none());
    }

    #[test]
    fn test_product_without_images_keeps_placeholder() {
        let mut state = ProductDetailsState::new(PLACEHOLDER);
        let ticket = state.begin_load(ProductId::new("plain"));
        state.finish_load(ticket, Some(Product::new("plain", "Plain Tee")));
        assert_eq!(state.main_image(), PLACEHOLDER);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut state = ProductDetailsState::new(PLACEHOLDER);
        let first = state.begin_load(ProductId::new("a"));
        let second = state.begin_load(ProductId::new("abc123"));

        assert!(!state.finish_load(first, None));
        assert!(state.is_loading());

        assert!(state.finish_load(second, Some(hoodie())));
        assert_eq!(state.main_image(), "u1");
    }

    #[test]
    fn test_teardown_drops_results() {
        let mut state = ProductDetailsState::new(PLACEHOLDER);
        let ticket = state.begin_load(ProductId::new("abc123"));
        state.teardown();

        assert!(!state.finish_load(ticket, Some(hoodie())));
        assert!(state.product().is_none());
        assert!(!state.begin_cart());
    }

    #[test]
    fn test_route_change_resets_selection() {
        let mut state = loaded();
        state.select_size("L");
        state.begin_load(ProductId::new("other"));
        assert_eq!(state.selection(), &Selection::default());
    }

    // === Section Toggle Tests ===

    #[test]
    fn test_toggle_open_close_open() {
        let mut state = loaded();
        state.toggle_section(Section::ProductDetails);
        assert!(state.is_open(Section::ProductDetails));
        state.toggle_section(Section::ProductDetails);
        assert_eq!(state.open_section(), None);
        state.toggle_section(Section::ProductDetails);
        assert!(state.is_open(Section::ProductDetails));
    }

    #[test]
    fn test_sections_are_mutually_exclusive() {
        let mut state = loaded();
        state.toggle_section(Section::ProductDetails);
        state.toggle_section(Section::ReturnPolicy);
        assert!(state.is_open(Section::ReturnPolicy));
        assert!(!state.is_open(Section::ProductDetails));
    }

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("shipping"), None);
    }

    // === Thumbnail Tests ===

    #[test]
    fn test_thumbnail_click_sets_main_image() {
        let mut state = loaded();
        state.select_thumbnail("u2");
        assert_eq!(state.main_image(), "u2");

        // Not validated against the product's images.
        state.select_thumbnail("elsewhere.jpg");
        assert_eq!(state.main_image(), "elsewhere.jpg");
    }

    #[test]
    fn test_select_image_by_index() {
        let mut state = loaded();
        assert!(state.select_image_at(1));
        assert_eq!(state.main_image(), "u2");
        assert!(!state.select_image_at(5));
        assert_eq!(state.main_image(), "u2");
    }

    // === Selection Tests ===

    #[test]
    fn test_variant_choice_prefers_selection() {
        let mut state = loaded();
        let defaults = CartDefaults::default();
        assert_eq!(state.variant_choice(&defaults), VariantChoice::new("M", "Lavender", 1));

        assert!(state.select_size("L"));
        assert!(state.select_color("Black"));
        assert!(state.set_quantity(2));
        assert_eq!(state.variant_choice(&defaults), VariantChoice::new("L", "Black", 2));
    }

    #[test]
    fn test_configured_quantity_seeds_selection() {
        let defaults = CartDefaults {
            quantity: 3,
            ..CartDefaults::default()
        };
        let mut state = ProductDetailsState::new(PLACEHOLDER).with_cart_defaults(&defaults);
        let ticket = state.begin_load(ProductId::from("abc123"));
        state.finish_load(ticket, Some(hoodie()));
        assert_eq!(state.variant_choice(&defaults), VariantChoice::new("M", "Lavender", 3));

        assert!(state.set_quantity(5));
        state.begin_load(ProductId::from("def456"));
        assert_eq!(state.selection().quantity, 3);
    }

    #[test]
    fn test_configured_quantity_is_clamped() {
        let defaults = CartDefaults {
            quantity: 40,
            ..CartDefaults::default()
        };
        let state = ProductDetailsState::new(PLACEHOLDER).with_cart_defaults(&defaults);
        assert_eq!(state.selection().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_selection_rejects_unknown_options() {
        let mut state = loaded();
        assert!(!state.select_size("XXL"));
        assert!(!state.select_color("Teal"));
        assert!(!state.set_quantity(0));
        assert_eq!(state.selection(), &Selection::default());
    }

    // === Cart Flag Tests ===

    #[test]
    fn test_cart_flag_blocks_double_submit() {
        let mut state = loaded();
        assert!(state.begin_cart());
        assert!(!state.begin_cart());
        state.finish_cart();
        assert!(!state.cart_loading());
    }
}
