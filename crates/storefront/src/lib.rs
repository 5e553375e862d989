//! RENU Storefront cart library.
//!
//! This crate provides the cart behind the storefront page as a library,
//! allowing it to be tested and embedded in whatever drives the page.
//!
//! # Architecture
//!
//! - [`cart::CartStore`] owns the cart, writes it through to a
//!   [`storage::KeyValueStore`] after every change and re-renders a
//!   [`cart::CartView`]
//! - [`view::HtmlCartView`] renders the sidebar with askama templates
//! - [`order::OrderComposer`] turns the cart into a `wa.me` order link
//! - [`catalog`] filters the product grid by category
//! - [`state::AppState`] wires everything from [`config::StorefrontConfig`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod order;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod view;
