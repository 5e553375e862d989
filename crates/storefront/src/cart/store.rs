//! The cart store.

use renu_core::{Cart, LineItem, Price, ProductId};
use tracing::instrument;

use super::{CartEvent, CartView};
use crate::catalog::Product;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Sole owner of the cart.
///
/// Every mutation is written through to `storage` under `key` and then
/// rendered by `view`. A failed write is logged and the in-memory cart
/// keeps the change; the shopper's click is never lost to a storage error.
#[derive(Debug)]
pub struct CartStore<S, V = ()> {
    cart: Cart,
    storage: S,
    key: String,
    view: V,
}

impl<S: KeyValueStore, V: CartView> CartStore<S, V> {
    /// Create a store with an empty cart. Nothing is read from storage.
    pub fn new(storage: S, key: impl Into<String>, view: V) -> Self {
        Self {
            cart: Cart::new(),
            storage,
            key: key.into(),
            view,
        }
    }

    /// Create a store and load the saved cart, then render it.
    ///
    /// A storage read failure is logged and the cart starts empty.
    pub fn open(storage: S, key: impl Into<String>, view: V) -> Self {
        let mut store = Self::new(storage, key, view);
        if let Err(e) = store.restore() {
            tracing::error!(key = %store.key, "Failed to read saved cart: {e}");
            store.signal(&CartEvent::Restored);
        }
        store
    }

    /// Add one unit of a product.
    ///
    /// An existing line with the same `id` gets one more unit and keeps its
    /// original name, price and image. A new id is appended with quantity 1.
    pub fn add_item(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        image: impl Into<String>,
    ) {
        self.add_line_item(LineItem::new(id, name, unit_price, image));
    }

    /// Add one unit of a catalog product.
    pub fn add_product(&mut self, product: &Product) {
        self.add_line_item(product.line_item());
    }

    /// Add one unit of `item`; see [`CartStore::add_item`].
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub fn add_line_item(&mut self, item: LineItem) {
        let line = self.cart.add(item).clone();
        tracing::debug!(quantity = line.quantity.get(), "Added to cart");
        self.save();
        self.signal(&CartEvent::Added { item: line });
    }

    /// Remove the line for `id`, then save and render.
    ///
    /// An unknown id leaves the cart as it is but is still saved and
    /// rendered (as [`CartEvent::Refreshed`]). Returns whether a line was
    /// removed.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &str) -> bool {
        let (event, found) = match self.cart.remove(id) {
            Some(item) => {
                tracing::debug!("Removed from cart");
                (CartEvent::Removed { item }, true)
            }
            None => {
                tracing::debug!("Not in cart");
                (CartEvent::Refreshed, false)
            }
        };
        self.save();
        self.signal(&event);
        found
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("Cart cleared");
        self.save();
        self.signal(&CartEvent::Cleared);
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `unit_price * quantity`, computed on every call.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        self.cart.total_amount()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The whole cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Storage key the cart is saved under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attached view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the attached view.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the whole cart under the store's key, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.cart)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Replace the cart with the saved one and render it.
    ///
    /// No saved value leaves the cart empty. A value that does not parse as a
    /// cart (bad JSON, missing fields, zero quantity) is logged and also
    /// leaves the cart empty; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend cannot be read.
    pub fn restore(&mut self) -> Result<()> {
        let saved = self.storage.get(&self.key)?;
        self.cart = match saved {
            None => Cart::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %self.key, "Discarding unreadable saved cart: {e}");
                Cart::new()
            }),
        };
        tracing::debug!(lines = self.cart.len(), "Cart restored");
        self.signal(&CartEvent::Restored);
        Ok(())
    }

    /// Take the store apart, returning the storage and view.
    pub fn into_parts(self) -> (S, V) {
        (self.storage, self.view)
    }

    fn save(&mut self) {
        if let Err(e) = self.persist() {
            tracing::error!(key = %self.key, "Failed to save cart: {e}");
        }
    }

    fn signal(&mut self, event: &CartEvent) {
        self.view.render(&self.cart, event);
    }
}
