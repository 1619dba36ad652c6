//! Product detail page controller.
//!
//! Owns the view state and sequences the two network operations around it.
//! State lives in a `RefCell` and is never borrowed across an `.await`; both
//! operations run under abort handles so `unmount` and newer loads can cut
//! them off.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};

use atelier_commerce::prelude::*;
use atelier_observability::StructuredLogger;
use atelier_session::SessionProvider;

use crate::config::PdpConfig;
use crate::effects::{Navigator, Notifier, Viewport};
use crate::page;
use crate::routes::{PageQuery, Route};
use crate::services::{CartService, ProductService};
use crate::state::{ProductDetailsState, Section};

/// Shown after a successful add-to-cart.
pub const ADDED_TO_CART_MESSAGE: &str = "Product added to cart successfully!";

/// Capabilities the page is wired with.
#[derive(Clone)]
pub struct PageServices {
    pub products: Rc<dyn ProductService>,
    pub cart: Rc<dyn CartService>,
    pub session: Rc<dyn SessionProvider>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub viewport: Rc<dyn Viewport>,
}

/// How an add-to-cart attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart service accepted the item; the shopper was sent to the cart.
    Added,
    /// Nobody is signed in; the shopper was sent to login.
    LoginRequired,
    /// The service refused or could not be reached.
    Failed,
    /// Nothing to do: no product, a submission already in flight, or torn down.
    Ignored,
}

/// One mounted product detail page.
pub struct ProductDetailsPage {
    config: Rc<PdpConfig>,
    services: PageServices,
    logger: StructuredLogger,
    state: RefCell<ProductDetailsState>,
    load_abort: RefCell<Option<AbortHandle>>,
    cart_abort: RefCell<Option<AbortHandle>>,
    scrolled: Cell<bool>,
}

impl ProductDetailsPage {
    pub fn new(config: Rc<PdpConfig>, services: PageServices, logger: StructuredLogger) -> Self {
        let state = ProductDetailsState::new(config.page.placeholder_image.clone())
            .with_cart_defaults(&config.cart);
        Self {
            config,
            services,
            logger,
            state: RefCell::new(state),
            load_abort: RefCell::new(None),
            cart_abort: RefCell::new(None),
            scrolled: Cell::new(false),
        }
    }

    /// Current view state.
    pub fn state(&self) -> Ref<'_, ProductDetailsState> {
        self.state.borrow()
    }

    /// Owned copy of the current view state.
    pub fn snapshot(&self) -> ProductDetailsState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &PdpConfig {
        &self.config
    }

    // --- lifecycle ---

    /// Scroll the page into view (once per mount) and load the product.
    pub async fn mount(&self, product_id: ProductId) {
        if self.state.borrow().is_torn_down() {
            return;
        }

        if !self.scrolled.replace(true) {
            self.services
                .viewport
                .scroll_to_page_top(self.config.page.header_offset);
        }

        self.load(product_id).await;
    }

    /// React to the route's product id changing. Same id is a no-op.
    pub async fn route_changed(&self, product_id: ProductId) {
        if self.state.borrow().product_id() == Some(&product_id) {
            return;
        }
        self.load(product_id).await;
    }

    /// Fetch a product, superseding any load in flight.
    pub async fn load(&self, product_id: ProductId) {
        if self.state.borrow().is_torn_down() {
            return;
        }

        let ticket = self.state.borrow_mut().begin_load(product_id.clone());
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.load_abort.replace(Some(handle)) {
            previous.abort();
        }

        self.logger
            .info_builder("Product fetch started")
            .field("product_id", product_id.as_str())
            .emit();

        let fetch = self.services.products.fetch_product(&product_id);
        let Ok(result) = Abortable::new(fetch, registration).await else {
            self.logger
                .debug_builder("Product fetch aborted")
                .field("product_id", product_id.as_str())
                .emit();
            return;
        };

        let product = match result {
            Ok(product) => {
                self.logger
                    .info_builder("Product fetch succeeded")
                    .field("product_id", product_id.as_str())
                    .field_i64("images", product.images.len() as i64)
                    .emit();
                Some(product)
            }
            Err(e) => {
                self.logger
                    .warn_builder("Product fetch failed")
                    .field("product_id", product_id.as_str())
                    .field("error", e.to_string())
                    .emit();
                None
            }
        };

        if !self.state.borrow_mut().finish_load(ticket, product) {
            self.logger
                .debug_builder("Stale product result ignored")
                .field("product_id", product_id.as_str())
                .emit();
        }
    }

    /// Abort in-flight work and freeze the state.
    pub fn unmount(&self) {
        for slot in [&self.load_abort, &self.cart_abort] {
            if let Some(handle) = slot.borrow_mut().take() {
                handle.abort();
            }
        }
        self.state.borrow_mut().teardown();
        self.logger.debug("Page unmounted");
    }

    // --- cart ---

    /// Submit the loaded product with the current selection.
    pub async fn add_to_cart(&self) -> CartOutcome {
        let (product, choice) = {
            let state = self.state.borrow();
            if state.is_torn_down() || state.cart_loading() {
                return CartOutcome::Ignored;
            }
            let Some(product) = state.product().cloned() else {
                return CartOutcome::Ignored;
            };
            (product, state.variant_choice(&self.config.cart))
        };

        let Some(user_id) = self.services.session.current_user() else {
            self.logger
                .info_builder("Add to cart requires login")
                .field("product_id", product.id.as_str())
                .emit();
            self.services.navigator.navigate(Route::Login);
            return CartOutcome::LoginRequired;
        };

        let item = match CartItem::for_product(&product, choice) {
            Ok(item) => item,
            Err(e) => {
                self.logger
                    .error_builder("Add to cart failed")
                    .field("product_id", product.id.as_str())
                    .field("error", e.to_string())
                    .emit();
                return CartOutcome::Failed;
            }
        };
        let request = AddToCartRequest::single(user_id, item);

        if !self.state.borrow_mut().begin_cart() {
            return CartOutcome::Ignored;
        }
        let (handle, registration) = AbortHandle::new_pair();
        *self.cart_abort.borrow_mut() = Some(handle);

        let submit = self.services.cart.add_to_cart(&request);
        let result = Abortable::new(submit, registration).await;
        self.state.borrow_mut().finish_cart();

        match result {
            Err(_aborted) => {
                self.logger.debug("Add to cart aborted");
                CartOutcome::Ignored
            }
            Ok(Ok(response)) if response.is_success() => {
                self.logger
                    .info_builder("Product added to cart")
                    .field("product_id", request.product_id.as_str())
                    .field_i64("quantity", request.items[0].quantity)
                    .emit();
                self.services.notifier.notify(ADDED_TO_CART_MESSAGE);
                self.services.navigator.navigate(Route::Cart);
                CartOutcome::Added
            }
            Ok(Ok(response)) => {
                self.logger
                    .warn_builder("Add to cart failed")
                    .field("product_id", request.product_id.as_str())
                    .field("error", response.message.unwrap_or_default())
                    .emit();
                CartOutcome::Failed
            }
            Ok(Err(e)) => {
                self.logger
                    .error_builder("Add to cart failed")
                    .field("product_id", request.product_id.as_str())
                    .field("error", e.to_string())
                    .emit();
                CartOutcome::Failed
            }
        }
    }

    /// Wishlists are not offered yet; the control only records the click.
    pub fn add_to_wishlist(&self) {
        let state = self.state.borrow();
        self.logger
            .info_builder("Wishlist not available")
            .field(
                "product_id",
                state.product_id().map(ProductId::as_str).unwrap_or_default(),
            )
            .emit();
    }

    // --- local transitions ---

    pub fn toggle_section(&self, section: Section) {
        self.state.borrow_mut().toggle_section(section);
    }

    pub fn select_thumbnail(&self, url: &str) {
        self.state.borrow_mut().select_thumbnail(url);
    }

    pub fn select_image_at(&self, index: usize) -> bool {
        self.state.borrow_mut().select_image_at(index)
    }

    pub fn select_size(&self, size: &str) -> bool {
        self.state.borrow_mut().select_size(size)
    }

    pub fn select_color(&self, color: &str) -> bool {
        self.state.borrow_mut().select_color(color)
    }

    pub fn set_quantity(&self, quantity: i64) -> bool {
        self.state.borrow_mut().set_quantity(quantity)
    }

    pub fn toggle_gift_wrap(&self) {
        let mut state = self.state.borrow_mut();
        let enabled = !state.selection().gift_wrap;
        state.set_gift_wrap(enabled);
    }

    /// Apply transitions carried by a link or form.
    pub fn replay(&self, query: &PageQuery) {
        if let Some(section) = query.section {
            self.toggle_section(section);
        }
        if let Some(index) = query.image {
            self.select_image_at(index);
        }
        if let Some(size) = &query.size {
            self.select_size(size);
        }
        if let Some(color) = &query.color {
            self.select_color(color);
        }
        if let Some(quantity) = query.quantity {
            self.set_quantity(quantity);
        }
        if query.gift {
            self.state.borrow_mut().set_gift_wrap(true);
        }
    }

    /// Render the page body for the current state.
    pub fn render(&self) -> String {
        page::render_page(&self.state.borrow(), &self.config)
    }
}
