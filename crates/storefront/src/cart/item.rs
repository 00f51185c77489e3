//! Cart line items and their configuration from a product detail.

use optique_core::{CartLineId, FrameColorId, LensTypeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{FrameColor, LensType, ProductDetail};

/// Errors raised while configuring a product into a cart line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigureError {
    /// The product offers no frame colors, so no line can be built.
    #[error("product {product} offers no frame colors")]
    NoFrameColors {
        /// Product being configured.
        product: String,
    },
    /// The product offers no lens types, so no line can be built.
    #[error("product {product} offers no lens types")]
    NoLensTypes {
        /// Product being configured.
        product: String,
    },
    /// The selected frame color is not offered on this product.
    #[error("unknown frame color: {0}")]
    UnknownFrameColor(String),
    /// The selected lens type is not offered on this product.
    #[error("unknown lens type: {0}")]
    UnknownLensType(String),
    /// A line must carry at least one unit.
    #[error("quantity must be positive")]
    ZeroQuantity,
}

/// One line of the cart.
///
/// The id is composite (product plus selected options), so two different
/// configurations of the same frame are two distinct lines. Price is computed
/// when the line is created and never recomputed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Composite line id.
    pub id: CartLineId,
    /// Display name, including the selected color label.
    pub name: String,
    /// Unit price frozen at add-time: base price plus lens surcharge.
    pub price: u64,
    /// Number of units, always positive.
    pub quantity: u32,
    /// Currency code, copied from the product.
    pub currency: String,
    /// Selected frame color label, for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartItem {
    /// Build a line from a product detail and the shopper's selections.
    ///
    /// A selection of `None` defaults to the first offered option, matching
    /// the configurator's initial state.
    ///
    /// # Errors
    ///
    /// Fails when the product offers no colors or no lenses, when a selected
    /// option id is not offered, or when `quantity` is zero.
    pub fn configure(
        detail: &ProductDetail,
        color: Option<&FrameColorId>,
        lens: Option<&LensTypeId>,
        quantity: u32,
    ) -> Result<Self, ConfigureError> {
        if quantity == 0 {
            return Err(ConfigureError::ZeroQuantity);
        }

        let color = resolve_color(detail, color)?;
        let lens = resolve_lens(detail, lens)?;

        Ok(Self {
            id: CartLineId::compose(&detail.id, &color.id, &lens.id),
            name: format!("{} — {}", detail.name, color.label),
            price: detail.price + lens.price,
            quantity,
            currency: detail.currency.clone(),
            color: Some(color.label.clone()),
        })
    }
}

fn resolve_color<'a>(
    detail: &'a ProductDetail,
    selected: Option<&FrameColorId>,
) -> Result<&'a FrameColor, ConfigureError> {
    let offered = &detail.configurations.frame_colors;
    match selected {
        Some(id) => offered
            .iter()
            .find(|c| c.id == *id)
            .ok_or_else(|| ConfigureError::UnknownFrameColor(id.to_string())),
        None => offered.first().ok_or_else(|| ConfigureError::NoFrameColors {
            product: detail.id.to_string(),
        }),
    }
}

fn resolve_lens<'a>(
    detail: &'a ProductDetail,
    selected: Option<&LensTypeId>,
) -> Result<&'a LensType, ConfigureError> {
    let offered = &detail.configurations.lens_types;
    match selected {
        Some(id) => offered
            .iter()
            .find(|l| l.id == *id)
            .ok_or_else(|| ConfigureError::UnknownLensType(id.to_string())),
        None => offered.first().ok_or_else(|| ConfigureError::NoLensTypes {
            product: detail.id.to_string(),
        }),
    }
}
