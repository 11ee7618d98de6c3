//! Pure state transitions
//!
//! Each function takes the current item list and returns the next one. The
//! input is never modified; unknown ids return an unchanged copy.

use crate::models::{ItemId, MenuItemState, SizeId, SizeState};

/// Apply `f` to one size of one item, copying everything else
fn map_size<F>(
    items: &[MenuItemState],
    item_id: ItemId,
    size_id: SizeId,
    f: F,
) -> Vec<MenuItemState>
where
    F: Fn(&SizeState) -> SizeState,
{
    items
        .iter()
        .map(|item| {
            if item.item_id != item_id {
                return item.clone();
            }
            MenuItemState {
                sizes: item
                    .sizes
                    .iter()
                    .map(|size| {
                        if size.size_id == size_id {
                            f(size)
                        } else {
                            size.clone()
                        }
                    })
                    .collect(),
                ..item.clone()
            }
        })
        .collect()
}

/// Flip a size between offered and withdrawn.
///
/// Disabling parks the live price in `previous_price` and zeroes the price.
/// Enabling restores `previous_price` and clears it. A price edited while
/// disabled is discarded on re-enable.
pub fn toggle_size(
    items: &[MenuItemState],
    item_id: ItemId,
    size_id: SizeId,
) -> Vec<MenuItemState> {
    map_size(items, item_id, size_id, |size| {
        if size.enabled {
            SizeState {
                enabled: false,
                previous_price: size.price,
                price: 0.0,
                ..size.clone()
            }
        } else {
            SizeState {
                enabled: true,
                price: finite_or_zero(size.previous_price),
                previous_price: 0.0,
                ..size.clone()
            }
        }
    })
}

// NaN and infinities cannot be saved as JSON numbers; they become 0.
fn finite_or_zero(price: f64) -> f64 {
    if price.is_finite() {
        price
    } else {
        0.0
    }
}

/// Set the price of one size. Enablement and `previous_price` are untouched.
///
/// A non-finite `price` is stored as 0.
pub fn set_price(
    items: &[MenuItemState],
    item_id: ItemId,
    size_id: SizeId,
    price: f64,
) -> Vec<MenuItemState> {
    let price = finite_or_zero(price);
    map_size(items, item_id, size_id, |size| SizeState {
        price,
        ..size.clone()
    })
}

/// Replace one item with its entry from `initial`
pub fn undo(
    items: &[MenuItemState],
    initial: &[MenuItemState],
    item_id: ItemId,
) -> Vec<MenuItemState> {
    let Some(original) = initial.iter().find(|i| i.item_id == item_id) else {
        return items.to_vec();
    };

    items
        .iter()
        .map(|item| {
            if item.item_id == item_id {
                original.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}
