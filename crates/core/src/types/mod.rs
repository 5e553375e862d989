//! Core types for the RENU storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod line_item;
pub mod price;
pub mod quantity;

pub use cart::Cart;
pub use id::*;
pub use line_item::LineItem;
pub use price::{DEFAULT_CURRENCY_SYMBOL, Price};
pub use quantity::{Quantity, QuantityError};
