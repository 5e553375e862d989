//! Cart state and its view contract.
//!
//! [`CartStore`] is the only owner of the cart. After every change it writes
//! the cart to storage and calls [`CartView::render`] with the new state and
//! the [`CartEvent`] that caused it. Views only ever see `&Cart`.

mod store;

use renu_core::{Cart, LineItem};

pub use store::CartStore;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart was loaded from storage (possibly empty).
    Restored,
    /// One unit was added; `item` is the line after the add.
    Added { item: LineItem },
    /// A line was removed.
    Removed { item: LineItem },
    /// Every line was removed.
    Cleared,
    /// Nothing changed, e.g. a remove for an id that is not in the cart.
    Refreshed,
}

/// Something that re-renders when the cart changes.
pub trait CartView {
    /// Called after each cart change with the current state.
    fn render(&mut self, cart: &Cart, event: &CartEvent);
}

/// No view attached.
impl CartView for () {
    fn render(&mut self, _cart: &Cart, _event: &CartEvent) {}
}

impl<V: CartView + ?Sized> CartView for Box<V> {
    fn render(&mut self, cart: &Cart, event: &CartEvent) {
        (**self).render(cart, event);
    }
}

impl<V: CartView + ?Sized> CartView for &mut V {
    fn render(&mut self, cart: &Cart, event: &CartEvent) {
        (**self).render(cart, event);
    }
}
