//! Editable menu state
//!
//! These types are both the in-memory working copy and the persisted JSON
//! shape (`itemId`, `name`, `sizes[{sizeId, sizeName, price, enabled, previousPrice}]`).

use serde::{Deserialize, Serialize};

pub type ItemId = u32;
pub type SizeId = u32;

/// Pricing and availability of one size of one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeState {
    pub size_id: SizeId,
    pub size_name: String,
    pub price: f64,
    pub enabled: bool,

    /// Price restored on re-enable; only read at that moment.
    /// Older saved data may omit it.
    #[serde(default)]
    pub previous_price: f64,
}

/// One item with a size entry per catalog size, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemState {
    pub item_id: ItemId,
    pub name: String,
    pub sizes: Vec<SizeState>,
}

impl MenuItemState {
    pub fn size(&self, size_id: SizeId) -> Option<&SizeState> {
        self.sizes.iter().find(|s| s.size_id == size_id)
    }

    /// Number of sizes currently offered
    pub fn enabled_count(&self) -> usize {
        self.sizes.iter().filter(|s| s.enabled).count()
    }

    /// True when `other` has the same item id and the same size ids in the same order
    pub fn same_shape(&self, other: &MenuItemState) -> bool {
        self.item_id == other.item_id
            && self.sizes.len() == other.sizes.len()
            && self
                .sizes
                .iter()
                .zip(&other.sizes)
                .all(|(a, b)| a.size_id == b.size_id)
    }
}

/// Normalize operator-typed price text to a number.
///
/// Anything that does not parse to a finite number becomes 0.
pub fn parse_price_input(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Render a price the way the editor displays it
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
