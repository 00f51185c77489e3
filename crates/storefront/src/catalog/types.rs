//! Domain types for the product catalog.
//!
//! These types provide a clean, ergonomic API separate from the raw catalog
//! records, which arrive as loosely-typed JSON with inconsistent field types.

use optique_core::{FrameColorId, LensTypeId, ProductId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Rating Types
// =============================================================================

/// Product rating sourced from the catalog record.
///
/// Only present when there is at least one review, so a missing rating means
/// "no reviews yet" rather than "zero stars".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    /// Average rating value (e.g., 4.5 on a 5-point scale).
    pub value: f64,
    /// Total number of reviews.
    pub count: u64,
}

// =============================================================================
// Product Types
// =============================================================================

/// Catalog summary of a product, as shown on listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ID, unique across the product list.
    pub id: ProductId,
    /// Display name. Never empty; falls back to `"{brand} Monture"`.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Price in the currency's minor-unit-less integer form.
    pub price: u64,
    /// Currency code (default `"MGA"`).
    pub currency: String,
    /// Thumbnail URL, possibly empty.
    pub thumbnail: String,
    /// Whether the product can currently be purchased.
    pub is_available: bool,
    /// Merchandising category (default `"Montures"`).
    pub category: String,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<u64>,
    /// Stored review rating, when the product has reviews.
    pub rating: Option<ProductRating>,
}

// =============================================================================
// Product Detail Types
// =============================================================================

/// Frame dimensions in millimeters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Total frame width.
    pub width: u32,
    /// Lens height.
    pub height: u32,
    /// Bridge width.
    pub bridge: u32,
}

impl Dimensions {
    /// Catalog-wide defaults used when a record carries no usable dimensions.
    pub const DEFAULT: Self = Self {
        width: 140,
        height: 50,
        bridge: 18,
    };
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A frame color the product can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameColor {
    /// Option ID, referenced by cart line IDs.
    pub id: FrameColorId,
    /// Display label (e.g., "Noir mat").
    pub label: String,
    /// CSS hex color for the swatch.
    pub hex: String,
}

/// A lens type the product can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensType {
    /// Option ID, referenced by cart line IDs.
    pub id: LensTypeId,
    /// Display label (e.g., "Verres solaires").
    pub label: String,
    /// Surcharge added to the base price when this lens is selected.
    pub price: u64,
}

/// The configuration options offered on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configurations {
    /// Available frame colors. Entries missing an id or hex are dropped.
    pub frame_colors: Vec<FrameColor>,
    /// Available lens types. Entries missing an id are dropped.
    pub lens_types: Vec<LensType>,
}

/// Camera placement for the 3D viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Camera position.
    pub x: f64,
    /// Camera position.
    pub y: f64,
    /// Camera position.
    pub z: f64,
    /// Field of view in degrees.
    pub fov: f64,
}

/// 3D model metadata, present only when the record carries a model URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreeD {
    /// URL of the glTF/GLB model.
    pub model_url: String,
    /// Uniform scale applied to the model.
    pub scale: f64,
    /// Initial camera placement.
    pub camera: Camera,
}

/// Full product record backing the detail/configurator page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// Catalog ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Marketing description. Never empty; falls back to a fixed placeholder.
    pub description: String,
    /// Base price before any lens surcharge.
    pub price: u64,
    /// Currency code.
    pub currency: String,
    /// Frame materials (e.g., "Acétate", "Titane").
    pub materials: Vec<String>,
    /// Frame dimensions in millimeters.
    pub dimensions: Dimensions,
    /// Selectable configuration options.
    pub configurations: Configurations,
    /// 3D viewer metadata, when a model exists.
    pub three_d: Option<ThreeD>,
}
