//! Ordered collection of cart line items.

use serde::{Deserialize, Serialize};

use crate::{LineItem, Price, ProductId, Quantity};

/// The cart: line items in insertion order, keyed by product id.
///
/// ## Invariants
///
/// - At most one [`LineItem`] per [`ProductId`].
/// - Every line holds at least one unit (enforced by [`crate::Quantity`]).
/// - A line's name, price and image are fixed by the first add; later adds
///   of the same id only bump the quantity.
///
/// Deserializing goes through [`Cart::from_items`], so a stored sequence that
/// repeats an id is merged rather than breaking the first invariant.
///
/// ```
/// use renu_core::{Cart, LineItem, Price};
///
/// let mut cart = Cart::new();
/// cart.add(LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg"));
/// cart.add(LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg"));
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.total_quantity(), 2);
/// assert_eq!(cart.total_amount(), Price::new(3000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from a sequence, merging repeated ids into the first
    /// occurrence (quantities are summed).
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            match cart.position(&item.id) {
                Some(index) => {
                    if let Some(existing) = cart.items.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of `item`.
    ///
    /// If a line with the same id exists its quantity goes up by one and the
    /// incoming name, price and image are ignored. Otherwise `item` is
    /// appended with a quantity of one.
    ///
    /// Returns the line as it stands after the add.
    #[allow(clippy::indexing_slicing)] // index comes from `position` or the push just above
    pub fn add(&mut self, item: LineItem) -> &LineItem {
        let index = if let Some(index) = self.position(&item.id) {
            let existing = &mut self.items[index];
            existing.quantity = existing.quantity.incremented();
            index
        } else {
            self.items.push(LineItem {
                quantity: Quantity::ONE,
                ..item
            });
            self.items.len() - 1
        };
        &self.items[index]
    }

    /// Remove the line with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id.as_str() == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line quantities; 0 for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `unit_price * quantity` over all lines; zero for an empty cart.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
