//! RENU Core - Shared types library.
//!
//! This crate provides the types used across the RENU storefront components:
//! - `storefront` - Cart store, views, order composition and catalog
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and their pure operations - no storage,
//! no rendering, no messaging. Cart mutation rules (merge on add, remove by
//! id, totals) live on [`Cart`] so every host applies them the same way.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices and quantities, plus
//!   [`LineItem`] and [`Cart`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
