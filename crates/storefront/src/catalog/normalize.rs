//! Per-field normalization of raw catalog records.
//!
//! The source catalog is hand-maintained JSON with inconsistent field types:
//! prices appear as numbers or strings, availability as booleans or the
//! strings `"true"`/`"false"`, and nested objects are frequently incomplete.
//! Every rule here applies to one field independently and never fails the
//! whole record; a field that cannot be coerced gets a documented fallback.

use optique_core::{FrameColorId, LensTypeId, ProductId};
use serde_json::Value;
use uuid::Uuid;

use super::types::{
    Camera, Configurations, Dimensions, FrameColor, LensType, Product, ProductDetail,
    ProductRating, ThreeD,
};

/// Description shown when a record has none.
pub const DESCRIPTION_FALLBACK: &str = "Aucune description disponible.";

/// Currency used when a record has none.
pub const CURRENCY_FALLBACK: &str = "MGA";

// =============================================================================
// Field Normalizers
// =============================================================================

/// Normalize a raw price value to a non-negative integer.
///
/// Numeric strings are parsed as integers (a string that fails to parse is 0).
/// Native numbers are taken as-is when positive and by absolute value when
/// negative. The result is always >= 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn price(raw: Option<&Value>) -> u64 {
    match raw {
        Some(Value::String(s)) => s.trim().parse::<i64>().map_or(0, |v| v.max(0).unsigned_abs()),
        Some(Value::Number(n)) => {
            let v = n.as_f64().unwrap_or(0.0).abs();
            if v.is_finite() { v as u64 } else { 0 }
        }
        _ => 0,
    }
}

/// Normalize a currency code.
///
/// The legacy token `"EURO"` left over from an earlier catalog export is
/// rewritten to `"EUR"`. A missing or non-string value becomes `"MGA"`.
#[must_use]
pub fn currency(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) if s == "EURO" => "EUR".to_owned(),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => CURRENCY_FALLBACK.to_owned(),
    }
}

/// Normalize a string field: trim, and substitute `fallback` when the value
/// is missing, not a string, or blank.
#[must_use]
pub fn string_or(raw: Option<&Value>, fallback: &str) -> String {
    match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
        _ => fallback.to_owned(),
    }
}

/// Normalize a boolean field.
///
/// Native booleans pass through. Strings are true only for case-insensitive
/// `"true"`. Anything else is coerced by truthiness (null and 0 are false,
/// non-empty structures are true).
#[must_use]
pub fn boolean(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) != 0.0,
        Some(Value::Array(_) | Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

/// Coerce a JSON value to `f64`, falling back when missing, non-numeric,
/// or zero (mirroring the `|| fallback` idiom of the source data pipeline).
fn float_or(raw: Option<&Value>, fallback: f64) -> f64 {
    let coerced = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match coerced {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => fallback,
    }
}

/// Coerce one dimension subfield to a positive millimeter count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dimension(raw: Option<&Value>) -> Option<u32> {
    let v = match raw {
        Some(Value::Number(n)) => n.as_f64()?,
        Some(Value::String(s)) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if v.is_finite() && v > 0.0 {
        Some(v as u32)
    } else {
        None
    }
}

/// Normalize a dimensions object.
///
/// A missing or malformed object, or any subfield that fails numeric
/// coercion, yields the catalog-wide 140x50x18 mm defaults.
#[must_use]
pub fn dimensions(raw: Option<&Value>) -> Dimensions {
    let Some(obj) = raw.and_then(Value::as_object) else {
        return Dimensions::DEFAULT;
    };
    match (
        dimension(obj.get("width")),
        dimension(obj.get("height")),
        dimension(obj.get("bridge")),
    ) {
        (Some(width), Some(height), Some(bridge)) => Dimensions {
            width,
            height,
            bridge,
        },
        _ => Dimensions::DEFAULT,
    }
}

// =============================================================================
// Nested Collections
// =============================================================================

/// Keep only string entries of a materials array; anything else is empty.
fn materials(raw: Option<&Value>) -> Vec<String> {
    raw.and_then(Value::as_array).map_or_else(Vec::new, |arr| {
        arr.iter()
            .filter_map(|m| m.as_str().map(str::to_owned))
            .collect()
    })
}

/// Normalize the frame color list. Entries missing an id or hex are dropped;
/// a missing label falls back to the id.
fn frame_colors(raw: Option<&Value>) -> Vec<FrameColor> {
    raw.and_then(Value::as_array).map_or_else(Vec::new, |arr| {
        arr.iter()
            .filter_map(|c| {
                let id = non_empty_str(c.get("id"))?;
                let hex = non_empty_str(c.get("hex"))?;
                Some(FrameColor {
                    label: string_or(c.get("label"), id),
                    id: FrameColorId::new(id),
                    hex: hex.to_owned(),
                })
            })
            .collect()
    })
}

/// Normalize the lens type list. Entries missing an id are dropped; a missing
/// label falls back to the id and the surcharge defaults to 0.
fn lens_types(raw: Option<&Value>) -> Vec<LensType> {
    raw.and_then(Value::as_array).map_or_else(Vec::new, |arr| {
        arr.iter()
            .filter_map(|l| {
                let id = non_empty_str(l.get("id"))?;
                Some(LensType {
                    label: string_or(l.get("label"), id),
                    id: LensTypeId::new(id),
                    price: price(l.get("price")),
                })
            })
            .collect()
    })
}

/// Normalize the 3D metadata block. Included only when a non-empty model URL
/// is present; every numeric subfield defaults independently.
fn three_d(raw: Option<&Value>) -> Option<ThreeD> {
    let obj = raw.and_then(Value::as_object)?;
    let model_url = non_empty_str(obj.get("modelUrl"))?;
    let camera = obj.get("camera");
    let position = camera.and_then(|c| c.get("position"));
    Some(ThreeD {
        model_url: model_url.to_owned(),
        scale: float_or(obj.get("scale"), 1.0),
        camera: Camera {
            x: float_or(position.and_then(|p| p.get("x")), 0.0),
            y: float_or(position.and_then(|p| p.get("y")), 0.2),
            z: float_or(position.and_then(|p| p.get("z")), 2.5),
            fov: float_or(camera.and_then(|c| c.get("fov")), 45.0),
        },
    })
}

/// Parse the rating block into a [`ProductRating`].
///
/// Only returned when there are actual reviews, so unrated products carry no
/// rating rather than a zero one.
fn rating(raw: Option<&Value>) -> Option<ProductRating> {
    let obj = raw.and_then(Value::as_object)?;
    let value = float_or(obj.get("value"), 0.0);
    let count = price(obj.get("count"));
    if count == 0 {
        return None;
    }
    Some(ProductRating { value, count })
}

fn non_empty_str(raw: Option<&Value>) -> Option<&str> {
    raw.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Record Normalizers
// =============================================================================

/// Normalize a raw list record into a [`Product`].
///
/// Never fails: a record without an id gets a unique `unknown-` placeholder
/// so it cannot collide with a real product.
#[must_use]
pub fn product(raw: &Value) -> Product {
    let brand = string_or(raw.get("brand"), "Collection");
    let name_fallback = format!("{} Monture", string_or(raw.get("brand"), "Générique"));
    let original_price = match price(raw.get("originalPrice")) {
        0 => None,
        p => Some(p),
    };
    Product {
        id: ProductId::new(string_or(
            raw.get("id"),
            &format!("unknown-{}", Uuid::new_v4()),
        )),
        name: string_or(raw.get("name"), &name_fallback),
        brand,
        price: price(raw.get("price")),
        currency: currency(raw.get("currency")),
        thumbnail: string_or(raw.get("thumbnail"), ""),
        is_available: boolean(raw.get("isAvailable")),
        category: string_or(raw.get("category"), "Montures"),
        original_price,
        rating: rating(raw.get("rating")),
    }
}

/// Normalize a raw detail record into a [`ProductDetail`].
///
/// Returns `None` when the record has no usable id, since a detail page
/// cannot be addressed without one.
#[must_use]
pub fn product_detail(raw: &Value) -> Option<ProductDetail> {
    let id = non_empty_str(raw.get("id"))?;
    let configurations = raw.get("configurations");
    Some(ProductDetail {
        id: ProductId::new(id),
        name: string_or(raw.get("name"), "Monture sans nom"),
        brand: string_or(raw.get("brand"), "Inconnu"),
        description: string_or(raw.get("description"), DESCRIPTION_FALLBACK),
        price: price(raw.get("price")),
        currency: currency(raw.get("currency")),
        materials: materials(raw.get("materials")),
        dimensions: dimensions(raw.get("dimensions")),
        configurations: Configurations {
            frame_colors: frame_colors(configurations.and_then(|c| c.get("frameColors"))),
            lens_types: lens_types(configurations.and_then(|c| c.get("lensTypes"))),
        },
        three_d: three_d(raw.get("threeD")),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_numeric_string() {
        assert_eq!(price(Some(&json!("120000"))), 120_000);
        assert_eq!(price(Some(&json!("  4500 "))), 4500);
    }

    #[test]
    fn test_price_unparseable_string_is_zero() {
        assert_eq!(price(Some(&json!("abc"))), 0);
        assert_eq!(price(Some(&json!(""))), 0);
    }

    #[test]
    fn test_price_negative_number_uses_absolute_value() {
        assert_eq!(price(Some(&json!(-350))), 350);
    }

    #[test]
    fn test_price_negative_string_clamps_to_zero() {
        assert_eq!(price(Some(&json!("-350"))), 0);
    }

    #[test]
    fn test_price_missing_or_wrong_type_is_zero() {
        assert_eq!(price(None), 0);
        assert_eq!(price(Some(&json!(null))), 0);
        assert_eq!(price(Some(&json!(true))), 0);
    }

    #[test]
    fn test_currency_legacy_token() {
        assert_eq!(currency(Some(&json!("EURO"))), "EUR");
        assert_eq!(currency(Some(&json!("EUR"))), "EUR");
    }

    #[test]
    fn test_currency_fallback() {
        assert_eq!(currency(None), "MGA");
        assert_eq!(currency(Some(&json!(null))), "MGA");
        assert_eq!(currency(Some(&json!(""))), "MGA");
    }

    #[test]
    fn test_string_or_trims_and_falls_back() {
        assert_eq!(string_or(Some(&json!("  Aviator  ")), "x"), "Aviator");
        assert_eq!(string_or(Some(&json!("   ")), "x"), "x");
        assert_eq!(string_or(Some(&json!(42)), "x"), "x");
        assert_eq!(string_or(None, "x"), "x");
    }

    #[test]
    fn test_boolean_coercion() {
        assert!(boolean(Some(&json!(true))));
        assert!(!boolean(Some(&json!(false))));
        assert!(boolean(Some(&json!("true"))));
        assert!(boolean(Some(&json!("TRUE"))));
        assert!(!boolean(Some(&json!("yes"))));
        assert!(!boolean(Some(&json!(0))));
        assert!(boolean(Some(&json!(1))));
        assert!(!boolean(Some(&json!(null))));
        assert!(!boolean(None));
    }

    #[test]
    fn test_dimensions_defaults() {
        assert_eq!(dimensions(None), Dimensions::DEFAULT);
        assert_eq!(dimensions(Some(&json!("140mm"))), Dimensions::DEFAULT);
        // One bad subfield fails the whole object back to defaults.
        assert_eq!(
            dimensions(Some(&json!({"width": 145, "height": "oops", "bridge": 20}))),
            Dimensions::DEFAULT
        );
    }

    #[test]
    fn test_dimensions_valid() {
        let d = dimensions(Some(&json!({"width": 145, "height": "52", "bridge": 20})));
        assert_eq!(
            d,
            Dimensions {
                width: 145,
                height: 52,
                bridge: 20
            }
        );
    }

    #[test]
    fn test_product_full_normalization() {
        let p = product(&json!({
            "id": "ray-001",
            "name": "  Wayfarer  ",
            "brand": "Ray-Ban",
            "price": "250000",
            "currency": "EURO",
            "thumbnail": "/images/ray-001.jpg",
            "isAvailable": "true",
        }));
        assert_eq!(p.id.as_str(), "ray-001");
        assert_eq!(p.name, "Wayfarer");
        assert_eq!(p.price, 250_000);
        assert_eq!(p.currency, "EUR");
        assert!(p.is_available);
        assert_eq!(p.category, "Montures");
        assert!(p.rating.is_none());
    }

    #[test]
    fn test_product_name_falls_back_to_brand_monture() {
        let p = product(&json!({"id": "x", "brand": "Persol"}));
        assert_eq!(p.name, "Persol Monture");

        let p = product(&json!({"id": "x"}));
        assert_eq!(p.name, "Générique Monture");
        assert_eq!(p.brand, "Collection");
    }

    #[test]
    fn test_product_without_id_gets_unique_placeholder() {
        let a = product(&json!({"name": "Sans ID"}));
        let b = product(&json!({"name": "Sans ID"}));
        assert!(a.id.as_str().starts_with("unknown-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_rating_requires_reviews() {
        let p = product(&json!({"id": "x", "rating": {"value": 4.5, "count": 12}}));
        let r = p.rating.unwrap();
        assert!((r.value - 4.5).abs() < f64::EPSILON);
        assert_eq!(r.count, 12);

        let p = product(&json!({"id": "x", "rating": {"value": 4.5, "count": 0}}));
        assert!(p.rating.is_none());
    }

    #[test]
    fn test_detail_requires_id() {
        assert!(product_detail(&json!({"name": "Orpheline"})).is_none());
        assert!(product_detail(&json!({"id": ""})).is_none());
    }

    #[test]
    fn test_detail_drops_incomplete_options() {
        let d = product_detail(&json!({
            "id": "ray-001",
            "configurations": {
                "frameColors": [
                    {"id": "noir", "label": "Noir", "hex": "#000"},
                    {"id": "sans-hex", "label": "Cassé"},
                    {"label": "Sans id", "hex": "#fff"},
                ],
                "lensTypes": [
                    {"id": "standard", "label": "Standard", "price": 0},
                    {"label": "Sans id", "price": 100},
                ],
            },
        }))
        .unwrap();
        assert_eq!(d.configurations.frame_colors.len(), 1);
        assert_eq!(d.configurations.frame_colors[0].id.as_str(), "noir");
        assert_eq!(d.configurations.lens_types.len(), 1);
    }

    #[test]
    fn test_detail_non_array_collections_are_empty() {
        let d = product_detail(&json!({
            "id": "ray-001",
            "materials": "Acétate",
            "configurations": {"frameColors": 7, "lensTypes": null},
        }))
        .unwrap();
        assert!(d.materials.is_empty());
        assert!(d.configurations.frame_colors.is_empty());
        assert!(d.configurations.lens_types.is_empty());
    }

    #[test]
    fn test_three_d_requires_model_url() {
        let d = product_detail(&json!({
            "id": "x",
            "threeD": {"scale": 2.0},
        }))
        .unwrap();
        assert!(d.three_d.is_none());

        let d = product_detail(&json!({
            "id": "x",
            "threeD": {"modelUrl": "/models/x.glb"},
        }))
        .unwrap();
        let t = d.three_d.unwrap();
        assert_eq!(t.model_url, "/models/x.glb");
        assert!((t.scale - 1.0).abs() < f64::EPSILON);
        assert!((t.camera.y - 0.2).abs() < f64::EPSILON);
        assert!((t.camera.fov - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detail_description_fallback() {
        let d = product_detail(&json!({"id": "x", "description": "  "})).unwrap();
        assert_eq!(d.description, DESCRIPTION_FALLBACK);
    }
}
