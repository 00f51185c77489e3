//! End-to-end cart flow: configure a product from the detail page, mutate
//! the cart, and survive a reload through the persistence backend.

#![allow(clippy::unwrap_used)]

use optique_core::{FrameColorId, LensTypeId};
use optique_integration_tests::{init_tracing, sample_catalog};
use optique_storefront::cart::{CartItem, CartStore, MemoryStorage};
use optique_storefront::config::StorefrontConfig;

#[test]
fn configure_and_add_from_detail_page() {
    init_tracing();
    let catalog = sample_catalog();
    let detail = catalog.product_detail("ray-001").unwrap();

    let config = StorefrontConfig::default();
    let mut cart = CartStore::open(MemoryStorage::new(), config.cart_storage_key);

    // First add: default color, solar lenses carry a surcharge.
    let item = CartItem::configure(
        &detail,
        None,
        Some(&LensTypeId::new("solaire")),
        1,
    )
    .unwrap();
    assert_eq!(item.id.as_str(), "ray-001-noir-solaire");
    assert_eq!(item.price, 300_000);
    cart.add(item.clone()).unwrap();

    // Same configuration again merges into one line.
    cart.add(item).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_items(), 2);

    // A different color is a distinct line on the same product.
    let other = CartItem::configure(
        &detail,
        Some(&FrameColorId::new("ecaille")),
        Some(&LensTypeId::new("standard")),
        1,
    )
    .unwrap();
    cart.add(other).unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_price(), 2 * 300_000 + 250_000);
}

#[test]
fn cart_survives_reload() {
    let catalog = sample_catalog();
    let detail = catalog.product_detail("ray-001").unwrap();

    // Clones of MemoryStorage share the same backing map, so dropping the
    // cart and reopening against the same storage models a page reload.
    let storage = MemoryStorage::new();
    let (expected_total, expected_items) = {
        let mut cart = CartStore::open(storage.clone(), "cart");
        let item = CartItem::configure(&detail, None, None, 2).unwrap();
        cart.add(item).unwrap();
        (cart.total_price(), cart.items().to_vec())
    };

    let rehydrated = CartStore::open(storage, "cart");
    assert_eq!(rehydrated.items(), expected_items);
    assert_eq!(rehydrated.total_price(), expected_total);
}

#[test]
fn quantity_lifecycle() {
    let catalog = sample_catalog();
    let detail = catalog.product_detail("car-001").unwrap();

    let mut cart = CartStore::open(MemoryStorage::new(), "cart");
    let item = CartItem::configure(&detail, None, None, 1).unwrap();
    let line_id = item.id.clone();
    cart.add(item).unwrap();

    cart.update_quantity(&line_id, 4).unwrap();
    assert_eq!(cart.total_items(), 4);
    assert_eq!(cart.total_price(), 4 * 900_000);

    // Driving quantity to zero removes the line entirely.
    cart.update_quantity(&line_id, 0).unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);

    cart.clear().unwrap();
    assert_eq!(cart.total_price(), 0);
}
