//! Cart line item.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId, Quantity};

/// One product in the cart together with how many units were added.
///
/// Serialized field order is `id, name, unitPrice, image, quantity`. The
/// legacy field name `price` is accepted when reading so carts saved by the
/// previous storefront script still restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, fixed when the product was first added.
    #[serde(alias = "price")]
    pub unit_price: Price,
    /// Image reference, passed through to the view untouched.
    pub image: String,
    /// Units of this product in the cart.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a line item holding a single unit.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image: image.into(),
            quantity: Quantity::ONE,
        }
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_one() {
        let item = LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg");
        assert_eq!(item.quantity, Quantity::ONE);
        assert_eq!(item.subtotal(), Price::new(1500));
    }

    #[test]
    fn test_serialized_field_order() {
        let item = LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"p1","name":"Lamp","unitPrice":1500,"image":"lamp.jpg","quantity":1}"#
        );
    }

    #[test]
    fn test_deserialize_legacy_price_field() {
        let json = r#"{"id":"p2","name":"Vase","price":2500,"image":"vase.jpg","quantity":3}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit_price, Price::new(2500));
        assert_eq!(item.quantity.get(), 3);
        assert_eq!(item.subtotal(), Price::new(7500));
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let json = r#"{"id":"p2","name":"Vase","image":"vase.jpg","quantity":1}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }
}
