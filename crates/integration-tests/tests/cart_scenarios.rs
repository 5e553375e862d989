//! Integration tests for cart behaviour across page loads.
//!
//! These tests drive `AppState` and `CartStore` the way the storefront page
//! does and check what ends up in storage and on screen.

use renu_core::Price;
use renu_integration_tests::sample_catalog;
use renu_storefront::cart::{CartEvent, CartStore, CartView};
use renu_storefront::config::StorefrontConfig;
use renu_storefront::state::AppState;
use renu_storefront::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use serde_json::Value;

/// Counts renders and remembers the last event.
#[derive(Default)]
struct CountingView {
    renders: usize,
    last: Option<CartEvent>,
}

impl CartView for CountingView {
    fn render(&mut self, _cart: &renu_core::Cart, event: &CartEvent) {
        self.renders += 1;
        self.last = Some(event.clone());
    }
}

// =============================================================================
// Store Scenarios
// =============================================================================

#[test]
fn test_lamp_then_vase_scenario() {
    let mut store = CartStore::new(MemoryStore::new(), "cart", CountingView::default());

    store.add_item("p1", "Lamp", Price::new(1500), "lamp.jpg");
    assert_eq!(store.total_item_count(), 1);
    assert_eq!(store.total_amount(), Price::new(1500));

    store.add_item("p1", "Lamp", Price::new(1500), "lamp.jpg");
    store.add_item("p2", "Vase", Price::new(2500), "vase.jpg");
    let lines: Vec<(&str, u32)> = store
        .items()
        .iter()
        .map(|i| (i.id.as_str(), i.quantity.get()))
        .collect();
    assert_eq!(lines, [("p1", 2), ("p2", 1)]);
    assert_eq!(store.total_amount(), Price::new(5500));

    store.remove_item("p1");
    let lines: Vec<(&str, u32)> = store
        .items()
        .iter()
        .map(|i| (i.id.as_str(), i.quantity.get()))
        .collect();
    assert_eq!(lines, [("p2", 1)]);
    assert_eq!(store.total_item_count(), 1);
    assert_eq!(store.view().renders, 4);
}

#[test]
fn test_totals_track_arbitrary_sequence() {
    let mut store = CartStore::new(MemoryStore::new(), "cart", ());
    let ops: [(&str, bool); 9] = [
        ("a", true),
        ("b", true),
        ("a", true),
        ("c", true),
        ("b", false),
        ("a", true),
        ("b", true),
        ("c", false),
        ("zz", false),
    ];

    for (id, add) in ops {
        if add {
            store.add_item(id, id.to_uppercase(), Price::new(100), "");
        } else {
            store.remove_item(id);
        }
        let sum: u64 = store
            .items()
            .iter()
            .map(|i| u64::from(i.quantity.get()))
            .sum();
        assert_eq!(store.total_item_count(), sum);
        assert_eq!(store.total_amount(), Price::new(100 * i64::try_from(sum).unwrap_or(0)));
    }

    assert!(store.cart().get("c").is_none());
    assert_eq!(store.cart().get("a").map(|i| i.quantity.get()), Some(3));
    assert_eq!(store.cart().get("b").map(|i| i.quantity.get()), Some(1));
}

#[test]
fn test_saved_blob_shape() {
    let mut store = CartStore::new(MemoryStore::new(), "cart", ());
    store.add_item("p1", "Lamp", Price::new(1500), "lamp.jpg");

    let raw = store
        .storage()
        .get("cart")
        .expect("memory store never fails")
        .expect("cart saved");
    let value: Value = serde_json::from_str(&raw).expect("valid JSON");
    let first = value
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .expect("array of objects");

    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    for key in ["id", "name", "unitPrice", "image", "quantity"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert!(raw.find("\"id\"") < raw.find("\"quantity\""));
}

// =============================================================================
// Page Reload Scenarios
// =============================================================================

#[test]
fn test_cart_survives_reload_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("local-storage.json");

    let expected = {
        let mut store = CartStore::open(JsonFileStore::new(&path), "cart", ());
        store.add_item("p2", "Vase", Price::new(2500), "vase.jpg");
        store.add_item("p1", "Lamp", Price::new(1500), "lamp.jpg");
        store.add_item("p2", "Vase", Price::new(2500), "vase.jpg");
        store.items().to_vec()
    };

    let reloaded = CartStore::open(JsonFileStore::new(&path), "cart", CountingView::default());
    assert_eq!(reloaded.items(), expected.as_slice());
    assert_eq!(reloaded.view().last, Some(CartEvent::Restored));
}

#[test]
fn test_corrupt_storage_file_is_repaired_by_next_change() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("local-storage.json");
    std::fs::write(&path, "garbage").expect("write");

    let mut store = CartStore::open(JsonFileStore::new(&path), "cart", ());
    assert!(store.items().is_empty());
    store.add_item("p1", "Lamp", Price::new(1500), "lamp.jpg");

    let reloaded = CartStore::open(JsonFileStore::new(&path), "cart", ());
    assert_eq!(reloaded.total_item_count(), 1);
    assert_eq!(reloaded.items(), store.items());
}

#[test]
fn test_tampered_blob_starts_empty() {
    let storage = MemoryStore::with_entries([("cart", r#"[{"id": 42}]"#)]);
    let state = AppState::new(StorefrontConfig::default(), sample_catalog(), storage);

    assert!(state.cart().items().is_empty());
    assert!(state.view().fragments().items.contains("Your cart is empty"));
}

#[test]
fn test_blob_from_previous_script_restores() {
    let legacy = r#"[
        {"id":"p1","name":"Lamp","price":1500,"image":"lamp.jpg","quantity":2},
        {"id":"p2","name":"Vase","price":2500,"image":"vase.jpg","quantity":1}
    ]"#;
    let storage = MemoryStore::with_entries([("cart", legacy)]);
    let state = AppState::new(StorefrontConfig::default(), sample_catalog(), storage);

    assert_eq!(state.cart().total_item_count(), 3);
    assert_eq!(state.cart().total_amount(), Price::new(5500));
    assert!(state.view().fragments().total.contains("Rs. 5,500"));
}

#[test]
fn test_custom_storage_key() {
    let config = StorefrontConfig {
        storage_key: "renu-cart".to_string(),
        ..StorefrontConfig::default()
    };
    let mut state = AppState::new(config, sample_catalog(), MemoryStore::new());
    state.add_to_cart("p3").expect("p3 in catalog");

    assert!(state.cart().storage().get("renu-cart").expect("get").is_some());
    assert!(state.cart().storage().get("cart").expect("get").is_none());
}

// =============================================================================
// Catalog Scenarios
// =============================================================================

#[test]
fn test_filter_does_not_touch_cart() {
    let mut state = AppState::new(
        StorefrontConfig::default(),
        sample_catalog(),
        MemoryStore::new(),
    );
    state.add_to_cart("p2").expect("p2 in catalog");

    state.set_filter("lighting".parse().expect("infallible"));
    let visible: Vec<&str> = state.visible_products().map(|p| p.name.as_str()).collect();
    assert_eq!(visible, ["Lamp", "Lantern"]);
    assert_eq!(state.cart().total_item_count(), 1);

    state.set_filter("all".parse().expect("infallible"));
    assert_eq!(state.visible_products().count(), 3);
}
