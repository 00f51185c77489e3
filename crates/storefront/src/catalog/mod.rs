//! Product catalog: normalization and querying of static catalog data.
//!
//! The catalog is backed by two JSON response envelopes shipped with the
//! site: a product list (`{ success, data: [...] }`) and a detail map
//! (`{ success, data: { id: {...} } }`). Loading the bytes is the caller's
//! concern; the [`Catalog`] holds the already-deserialized envelopes and
//! derives well-typed views fresh on every call, so a normalization fix never
//! needs a cache flush.

pub mod normalize;
pub mod query;
pub mod types;

pub use query::{ProductFilter, SortDirection, SortKey, filter_and_sort, page_count, paginate};
pub use types::{
    Camera, Configurations, Dimensions, FrameColor, LensType, Product, ProductDetail,
    ProductRating, ThreeD,
};

use serde_json::Value;

/// The product catalog, backed by the two raw response envelopes.
#[derive(Debug, Clone)]
pub struct Catalog {
    list: Value,
    details: Value,
}

impl Catalog {
    /// Create a catalog from the already-deserialized list and detail
    /// response envelopes.
    #[must_use]
    pub const fn new(list: Value, details: Value) -> Self {
        Self { list, details }
    }

    /// Parse a catalog from the two raw JSON documents.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error when either document is not valid
    /// JSON. Envelope-level problems (wrong `success` flag, wrong `data`
    /// shape) are not errors; they surface later as empty results.
    pub fn from_json(list: &str, details: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::from_str(list)?,
            serde_json::from_str(details)?,
        ))
    }

    /// Raw records of the list envelope, or an empty slice when the envelope
    /// is malformed.
    fn list_records(&self) -> &[Value] {
        if !normalize::boolean(self.list.get("success")) {
            tracing::warn!("product list envelope is not successful, listing empty");
            return &[];
        }
        match self.list.get("data").and_then(Value::as_array) {
            Some(records) => records,
            None => {
                tracing::warn!("product list envelope has no data array, listing empty");
                &[]
            }
        }
    }

    /// Detail map of the detail envelope, when well-formed.
    fn detail_map(&self) -> Option<&serde_json::Map<String, Value>> {
        if !normalize::boolean(self.details.get("success")) {
            tracing::warn!("product detail envelope is not successful");
            return None;
        }
        let map = self.details.get("data").and_then(Value::as_object);
        if map.is_none() {
            tracing::warn!("product detail envelope has no data object");
        }
        map
    }

    /// All purchasable products, normalized.
    ///
    /// Listing consumers never see unavailable or zero-priced records; those
    /// stay in the raw data but are filtered out here.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.list_records()
            .iter()
            .map(normalize::product)
            .filter(|p| p.price > 0 && p.is_available)
            .collect()
    }

    /// The first `limit` purchasable products, for the home page strip.
    #[must_use]
    pub fn featured_products(&self, limit: usize) -> Vec<Product> {
        let mut products = self.products();
        products.truncate(limit);
        products
    }

    /// Look up one purchasable product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|p| p.id.as_str() == id)
    }

    /// Look up the full detail record for a product.
    ///
    /// Returns `None` for unknown ids and for detail records too malformed to
    /// address (no id of their own).
    #[must_use]
    pub fn product_detail(&self, id: &str) -> Option<ProductDetail> {
        let raw = self.detail_map()?.get(id)?;
        normalize::product_detail(raw)
    }

    /// Every id present in the detail map, in map order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        self.detail_map()
            .map_or_else(Vec::new, |map| map.keys().cloned().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::new(
            json!({
                "success": true,
                "count": 4,
                "data": [
                    {"id": "ray-001", "name": "Wayfarer", "brand": "Ray-Ban",
                     "price": 250_000, "currency": "MGA", "thumbnail": "", "isAvailable": true},
                    {"id": "ray-002", "name": "Aviator", "brand": "Ray-Ban",
                     "price": "300000", "currency": "MGA", "thumbnail": "", "isAvailable": "true"},
                    {"id": "car-001", "name": "Épuisée", "brand": "Cartier",
                     "price": 900_000, "currency": "MGA", "thumbnail": "", "isAvailable": false},
                    {"id": "per-001", "name": "Gratuite?", "brand": "Persol",
                     "price": 0, "currency": "MGA", "thumbnail": "", "isAvailable": true},
                ],
            }),
            json!({
                "success": true,
                "data": {
                    "ray-001": {
                        "id": "ray-001", "name": "Wayfarer", "brand": "Ray-Ban",
                        "price": 250_000,
                        "configurations": {
                            "frameColors": [{"id": "noir", "label": "Noir", "hex": "#000"}],
                            "lensTypes": [{"id": "standard", "label": "Standard", "price": 0}],
                        },
                    },
                },
            }),
        )
    }

    #[test]
    fn test_products_exclude_unavailable_and_unpriced() {
        let products = catalog().products();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.is_available && p.price > 0));
    }

    #[test]
    fn test_featured_products_respects_limit() {
        assert_eq!(catalog().featured_products(1).len(), 1);
        assert_eq!(catalog().featured_products(10).len(), 2);
    }

    #[test]
    fn test_product_lookup() {
        let c = catalog();
        assert!(c.product("ray-001").is_some());
        // Unavailable products are not addressable via the listing surface.
        assert!(c.product("car-001").is_none());
        assert!(c.product("inconnu").is_none());
    }

    #[test]
    fn test_product_detail_lookup() {
        let c = catalog();
        let detail = c.product_detail("ray-001").unwrap();
        assert_eq!(detail.name, "Wayfarer");
        assert!(c.product_detail("inconnu").is_none());
    }

    #[test]
    fn test_product_ids() {
        assert_eq!(catalog().product_ids(), vec!["ray-001"]);
    }

    #[test]
    fn test_malformed_envelope_yields_empty() {
        let c = Catalog::new(json!({"success": false, "data": []}), json!({}));
        assert!(c.products().is_empty());
        assert!(c.product_ids().is_empty());
        assert!(c.product_detail("ray-001").is_none());

        let c = Catalog::new(json!({"success": true, "data": "oops"}), json!(null));
        assert!(c.products().is_empty());
    }

    #[test]
    fn test_from_json() {
        let c = Catalog::from_json(
            r#"{"success": true, "data": [{"id": "x", "price": 10, "isAvailable": true}]}"#,
            r#"{"success": true, "data": {}}"#,
        )
        .unwrap();
        assert_eq!(c.products().len(), 1);
        assert!(Catalog::from_json("not json", "{}").is_err());
    }
}
