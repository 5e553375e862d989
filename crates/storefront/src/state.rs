//! Application state for one storefront page.
//!
//! `AppState` is what the page's event handlers hold: it owns the cart
//! store (with its HTML view), the catalog with the active category filter,
//! and the order composer. Nothing here is global; the host constructs one
//! and passes it to its handlers.

use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::order::{OrderComposer, OrderLink};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::view::HtmlCartView;

/// Storage chosen at runtime from configuration.
pub type DynStore = Box<dyn KeyValueStore>;

/// State behind one storefront page.
pub struct AppState<S = DynStore> {
    config: StorefrontConfig,
    catalog: Catalog,
    filter: CategoryFilter,
    store: CartStore<S, HtmlCartView>,
    composer: OrderComposer,
}

impl AppState<DynStore> {
    /// Create state with storage picked by `config.storage_path`: a
    /// [`JsonFileStore`] when set, a [`MemoryStore`] otherwise.
    #[must_use]
    pub fn from_config(config: StorefrontConfig, catalog: Catalog) -> Self {
        let storage: DynStore = match &config.storage_path {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        };
        Self::new(config, catalog, storage)
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Create state over `storage`, restoring any saved cart.
    pub fn new(config: StorefrontConfig, catalog: Catalog, storage: S) -> Self {
        let view = HtmlCartView::from_config(&config);
        let store = CartStore::open(storage, config.storage_key.clone(), view);
        let composer = OrderComposer::from_config(&config);

        tracing::info!(
            products = catalog.products().len(),
            cart_lines = store.items().len(),
            "Storefront state ready"
        );

        Self {
            config,
            catalog,
            filter: CategoryFilter::All,
            store,
            composer,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S, HtmlCartView> {
        &self.store
    }

    /// Get a mutable reference to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S, HtmlCartView> {
        &mut self.store
    }

    /// Get a reference to the cart view.
    #[must_use]
    pub const fn view(&self) -> &HtmlCartView {
        self.store.view()
    }

    /// Get a mutable reference to the cart view.
    pub const fn view_mut(&mut self) -> &mut HtmlCartView {
        self.store.view_mut()
    }

    /// "Add to cart" on a product card.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NotFound` if the id is not in the catalog.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<()> {
        let product = self.catalog.require(product_id)?;
        self.store.add_product(product);
        Ok(())
    }

    /// Add a product that is not necessarily in the catalog.
    pub fn add_product(&mut self, product: &Product) {
        self.store.add_product(product);
    }

    /// Remove button in the cart sidebar. Unknown ids leave the cart unchanged.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        self.store.remove_item(product_id)
    }

    /// Cart icon or close button.
    pub const fn toggle_cart(&mut self) {
        self.store.view_mut().sidebar_mut().toggle();
    }

    /// Click anywhere on the page; closes the sidebar when outside it.
    pub const fn page_click(&mut self, in_sidebar: bool, on_cart_icon: bool) -> bool {
        self.store
            .view_mut()
            .sidebar_mut()
            .click_outside(in_sidebar, on_cart_icon)
    }

    /// "Order now": build the messaging link for the current cart.
    ///
    /// An empty cart is refused with a toast and an `EmptyCart` error; the
    /// host opens nothing.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Order` if the cart is empty or the link
    /// cannot be built.
    #[instrument(skip(self))]
    pub fn place_order(&mut self) -> Result<OrderLink> {
        match self.composer.order_link(self.store.cart()) {
            Ok(link) => {
                tracing::info!(
                    lines = self.store.items().len(),
                    total = self.store.total_amount().amount(),
                    "Order link built"
                );
                Ok(link)
            }
            Err(e) => {
                let err = StorefrontError::from(e);
                tracing::debug!("Order refused: {err}");
                self.store.view_mut().toast(err.user_message());
                Err(err)
            }
        }
    }

    /// Category filter button.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!(filter = %filter, "Category filter changed");
        self.filter = filter;
    }

    /// The active category filter.
    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Products shown under the active filter.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.visible(&self.filter)
    }
}
