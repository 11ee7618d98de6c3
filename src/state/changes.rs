use crate::models::{ItemId, MenuItemState};

/// Whether `item` differs from its initial entry.
///
/// Compares every field of every size, `previous_price` included. An item
/// with no initial entry counts as changed.
pub fn has_changes(initial: &[MenuItemState], item: &MenuItemState) -> bool {
    match initial.iter().find(|i| i.item_id == item.item_id) {
        Some(original) => original != item,
        None => true,
    }
}

/// Ids of all items in `current` that differ from `initial`
pub fn changed_items(initial: &[MenuItemState], current: &[MenuItemState]) -> Vec<ItemId> {
    current
        .iter()
        .filter(|item| has_changes(initial, item))
        .map(|item| item.item_id)
        .collect()
}
