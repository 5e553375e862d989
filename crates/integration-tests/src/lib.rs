//! Integration tests for the RENU storefront cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p renu-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Store behaviour across add/remove/reload
//! - `order_handoff` - Order text and link for real carts
//!
//! This crate also holds the shared fixtures below.

use renu_core::Price;
use renu_storefront::catalog::{Catalog, Product};

/// Catalog used across scenarios: two lighting products and a vase.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        product("p1", "Lamp", 1500, "lamp.jpg", "lighting"),
        product("p2", "Vase", 2500, "vase.jpg", "decor"),
        product("p3", "Lantern", 3200, "lantern.jpg", "lighting"),
    ])
}

/// Build a product fixture.
#[must_use]
pub fn product(id: &str, name: &str, price: i64, image: &str, category: &str) -> Product {
    Product {
        id: id.into(),
        name: name.to_string(),
        price: Price::new(price),
        image: image.to_string(),
        category: category.into(),
    }
}
