//! Pure query operations over the normalized catalog.
//!
//! Filtering, sorting, pagination, and facet extraction are all side-effect
//! free functions over a slice of [`Product`]. The surrounding UI owns the
//! criteria state; this module owns the semantics.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::Product;

// =============================================================================
// Filter
// =============================================================================

/// Conjunction of listing filter criteria.
///
/// Every unset criterion passes, so `ProductFilter::default()` matches
/// everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match on name or brand.
    pub search: Option<String>,
    /// Exact brand match.
    pub brand: Option<String>,
    /// Category membership; empty means no category restriction.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Upper price bound (inclusive).
    pub price_max: Option<u64>,
}

impl ProductFilter {
    /// Whether `product` passes every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let needle = search.trim().to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(brand) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            if product.brand != brand {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Sort
// =============================================================================

/// Field a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-folded name order.
    #[default]
    Name,
    /// Numeric price order.
    Price,
    /// Stored review rating order; unrated products sort lowest.
    Rating,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Rating => {
            let value = |p: &Product| p.rating.as_ref().map_or(0.0, |r| r.value);
            value(a).total_cmp(&value(b))
        }
    }
}

/// Filter then sort the catalog in one pass.
///
/// The sort is stable: products that compare equal keep their catalog order,
/// in both directions.
#[must_use]
pub fn filter_and_sort(
    products: &[Product],
    filter: &ProductFilter,
    key: SortKey,
    direction: SortDirection,
) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    result.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b, key),
        SortDirection::Desc => compare(b, a, key),
    });
    result
}

// =============================================================================
// Pagination
// =============================================================================

/// Return the 1-indexed `page` of `items`, `page_size` items per page.
///
/// A page past the end yields an empty slice rather than an error, as does a
/// zero page size or page number.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Total number of pages needed for `item_count` items at `page_size` each.
#[must_use]
pub const fn page_count(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

// =============================================================================
// Facets
// =============================================================================

/// Unique brand names in the listing, sorted.
#[must_use]
pub fn brands(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = products.iter().map(|p| p.brand.clone()).collect();
    out.sort();
    out.dedup();
    out
}

/// Unique category names in the listing, sorted.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    out.sort();
    out.dedup();
    out
}

/// Highest listed price, for seeding the price-range slider.
#[must_use]
pub fn max_price(products: &[Product]) -> u64 {
    products.iter().map(|p| p.price).max().unwrap_or(0)
}
