//! Integration tests for Optique.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p optique-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_pipeline` - Envelope to listing pipeline: normalize, filter,
//!   sort, paginate
//! - `cart_flow` - Detail page to cart: configure, mutate, persist, rehydrate
//!
//! The fixture catalog below deliberately mirrors the messiness of the real
//! source data: string-typed prices and booleans, a legacy currency token,
//! missing names, negative prices, and incomplete configuration entries.

use optique_storefront::catalog::Catalog;
use serde_json::json;

/// Initialize tracing for a test binary. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small catalog with the field-type drift seen in the production data.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        json!({
            "success": true,
            "count": 6,
            "data": [
                {"id": "ray-001", "name": "Wayfarer", "brand": "Ray-Ban", "price": 250_000,
                 "currency": "MGA", "thumbnail": "/images/ray-001.jpg", "isAvailable": true,
                 "rating": {"value": 4.6, "count": 18}},
                {"id": "ray-002", "name": "Aviator Classic", "brand": "Ray-Ban", "price": "300000",
                 "currency": "MGA", "thumbnail": "/images/ray-002.jpg", "isAvailable": "true"},
                {"id": "car-001", "name": null, "brand": "Cartier", "price": 900_000,
                 "currency": "EURO", "thumbnail": "", "isAvailable": true,
                 "rating": {"value": 4.9, "count": 3}},
                {"id": "per-001", "name": "PO3019S", "brand": "Persol", "price": -420_000,
                 "currency": "MGA", "thumbnail": "", "isAvailable": true},
                {"id": "per-002", "name": "Épuisée", "brand": "Persol", "price": 380_000,
                 "currency": "MGA", "thumbnail": "", "isAvailable": "false"},
                {"id": "gen-001", "name": "Prix cassé", "brand": "Générique", "price": "gratuit",
                 "currency": "MGA", "thumbnail": "", "isAvailable": true},
            ],
        }),
        json!({
            "success": true,
            "data": {
                "ray-001": {
                    "id": "ray-001",
                    "name": "Wayfarer",
                    "brand": "Ray-Ban",
                    "description": "La monture iconique depuis 1956.",
                    "price": 250_000,
                    "currency": "MGA",
                    "materials": ["Acétate", 42, "Acier"],
                    "dimensions": {"width": 150, "height": "47", "bridge": 22},
                    "configurations": {
                        "frameColors": [
                            {"id": "noir", "label": "Noir", "hex": "#1a1a1a"},
                            {"id": "ecaille", "label": "Écaille", "hex": "#8b5a2b"},
                            {"id": "casse", "label": "Sans hex"},
                        ],
                        "lensTypes": [
                            {"id": "standard", "label": "Standard", "price": 0},
                            {"id": "solaire", "label": "Solaire", "price": "50000"},
                            {"label": "Sans id", "price": 10_000},
                        ],
                    },
                    "threeD": {
                        "modelUrl": "/models/ray-001.glb",
                        "scale": 1.4,
                        "camera": {"position": {"x": 0, "y": 0.3, "z": 2.0}, "fov": 40},
                    },
                },
                "car-001": {
                    "id": "car-001",
                    "brand": "Cartier",
                    "price": 900_000,
                    "currency": "EURO",
                    "dimensions": {"width": "large"},
                    "configurations": {
                        "frameColors": [{"id": "or", "label": "Or", "hex": "#d4af37"}],
                        "lensTypes": [{"id": "standard", "label": "Standard", "price": 0}],
                    },
                },
            },
        }),
    )
}
