//! MenuEngine - owns the initial snapshot, the working copy and the selection

use super::{changes, transitions};
use crate::models::{ItemId, MenuItemState, SizeId};

/// A state change delivered to observers after it has been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateEvent<'a> {
    /// The working copy was replaced
    ItemsChanged(&'a [MenuItemState]),
    /// The expanded item changed
    SelectionChanged(Option<ItemId>),
}

/// Receives every state change made through a `MenuEngine`
pub trait StateObserver {
    fn on_change(&mut self, event: &StateEvent<'_>);
}

/// Menu state engine
///
/// All edits go through `toggle_size`, `set_price`, `undo` and `reset_all`.
/// Each one computes the next item list with a pure transition, swaps it in,
/// then notifies observers. The engine does no I/O of its own.
pub struct MenuEngine {
    initial: Vec<MenuItemState>,
    current: Vec<MenuItemState>,
    active_item: Option<ItemId>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl MenuEngine {
    /// Start from the initial snapshot with nothing selected
    pub fn new(initial: Vec<MenuItemState>) -> Self {
        let current = initial.clone();
        Self::restore(initial, current, None)
    }

    /// Start from previously saved state
    pub fn restore(
        initial: Vec<MenuItemState>,
        current: Vec<MenuItemState>,
        active_item: Option<ItemId>,
    ) -> Self {
        Self {
            initial,
            current,
            active_item,
            observers: Vec::new(),
        }
    }

    /// Register an observer for all later changes
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// The undo baseline (read-only)
    pub fn initial(&self) -> &[MenuItemState] {
        &self.initial
    }

    /// The working copy (read-only)
    pub fn items(&self) -> &[MenuItemState] {
        &self.current
    }

    pub fn item(&self, item_id: ItemId) -> Option<&MenuItemState> {
        self.current.iter().find(|i| i.item_id == item_id)
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.active_item
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Withdraw or re-offer a size
    pub fn toggle_size(&mut self, item_id: ItemId, size_id: SizeId) -> &[MenuItemState] {
        tracing::debug!(item_id, size_id, "toggle size");
        let next = transitions::toggle_size(&self.current, item_id, size_id);
        self.replace_items(next)
    }

    /// Set a size's price; a non-finite `price` is stored as 0
    pub fn set_price(&mut self, item_id: ItemId, size_id: SizeId, price: f64) -> &[MenuItemState] {
        tracing::debug!(item_id, size_id, price, "set price");
        let next = transitions::set_price(&self.current, item_id, size_id, price);
        self.replace_items(next)
    }

    /// Revert one item to its initial entry
    pub fn undo(&mut self, item_id: ItemId) -> &[MenuItemState] {
        tracing::debug!(item_id, "undo item");
        let next = transitions::undo(&self.current, &self.initial, item_id);
        self.replace_items(next)
    }

    /// Revert every item to the initial snapshot
    pub fn reset_all(&mut self) -> &[MenuItemState] {
        tracing::debug!("reset all items");
        let next = self.initial.clone();
        self.replace_items(next)
    }

    fn replace_items(&mut self, next: Vec<MenuItemState>) -> &[MenuItemState] {
        self.current = next;
        let event = StateEvent::ItemsChanged(&self.current);
        for observer in &mut self.observers {
            observer.on_change(&event);
        }
        &self.current
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Expand an item, or collapse it if it is already expanded
    pub fn set_active_item(&mut self, item_id: ItemId) -> Option<ItemId> {
        let next = if self.active_item == Some(item_id) {
            None
        } else {
            Some(item_id)
        };
        self.replace_selection(next)
    }

    /// Collapse whatever is expanded
    pub fn clear_selection(&mut self) -> Option<ItemId> {
        self.replace_selection(None)
    }

    fn replace_selection(&mut self, next: Option<ItemId>) -> Option<ItemId> {
        tracing::debug!(?next, "selection");
        self.active_item = next;
        let event = StateEvent::SelectionChanged(next);
        for observer in &mut self.observers {
            observer.on_change(&event);
        }
        next
    }

    // =========================================================================
    // Change detection
    // =========================================================================

    /// Whether `item` differs from its initial entry
    pub fn has_changes(&self, item: &MenuItemState) -> bool {
        changes::has_changes(&self.initial, item)
    }

    /// Ids of all items with unsaved-to-catalog edits
    pub fn changed_items(&self) -> Vec<ItemId> {
        changes::changed_items(&self.initial, &self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Seen {
        Items(usize),
        Selection(Option<ItemId>),
    }

    struct Recorder(Rc<RefCell<Vec<Seen>>>);

    impl StateObserver for Recorder {
        fn on_change(&mut self, event: &StateEvent<'_>) {
            let seen = match event {
                StateEvent::ItemsChanged(items) => Seen::Items(items.len()),
                StateEvent::SelectionChanged(id) => Seen::Selection(*id),
            };
            self.0.borrow_mut().push(seen);
        }
    }

    fn engine() -> MenuEngine {
        MenuEngine::new(Catalog::builtin().initial_state())
    }

    #[test]
    fn test_new_engine_matches_snapshot() {
        let engine = engine();
        assert_eq!(engine.items(), engine.initial());
        assert_eq!(engine.active_item(), None);
        assert!(engine.changed_items().is_empty());
    }

    #[test]
    fn test_margherita_walkthrough() {
        let mut engine = engine();

        engine.toggle_size(0, 0);
        let small = engine.item(0).unwrap().size(0).unwrap().clone();
        assert!(!small.enabled);
        assert_eq!(small.price, 0.0);
        assert_eq!(small.previous_price, 3.99);

        engine.set_price(0, 1, 6.50);
        assert_eq!(engine.item(0).unwrap().size(1).unwrap().price, 6.50);
        assert!(engine.has_changes(engine.item(0).unwrap()));

        engine.toggle_size(0, 0);
        let item = engine.item(0).unwrap();
        assert!(item.size(0).unwrap().enabled);
        assert_eq!(item.size(0).unwrap().price, 3.99);
        assert_eq!(item.size(0).unwrap().previous_price, 0.0);
        assert_eq!(item.size(1).unwrap().price, 6.50);
        assert!(engine.has_changes(item));

        engine.undo(0);
        let item = engine.item(0).unwrap();
        let prices: Vec<f64> = item.sizes.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![3.99, 5.99, 7.99]);
        assert!(item.sizes.iter().all(|s| s.enabled));
        assert!(!engine.has_changes(item));
    }

    #[test]
    fn test_undo_leaves_other_items() {
        let mut engine = engine();
        engine.set_price(0, 0, 1.0);
        engine.set_price(1, 0, 2.0);

        engine.undo(0);
        assert_eq!(engine.changed_items(), vec![1]);
    }

    #[test]
    fn test_reset_all() {
        let mut engine = engine();
        engine.toggle_size(0, 1);
        engine.set_price(1, 2, 0.5);

        engine.reset_all();
        assert_eq!(engine.items(), engine.initial());
    }

    #[test]
    fn test_selection_toggles() {
        let mut engine = engine();

        assert_eq!(engine.set_active_item(0), Some(0));
        assert_eq!(engine.set_active_item(1), Some(1));
        assert_eq!(engine.active_item(), Some(1));
        assert_eq!(engine.set_active_item(1), None);
        assert_eq!(engine.active_item(), None);
    }

    #[test]
    fn test_observers_see_every_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = engine();
        engine.subscribe(Box::new(Recorder(Rc::clone(&log))));

        engine.toggle_size(0, 0);
        engine.set_active_item(1);
        engine.set_price(9, 9, 1.0);
        engine.clear_selection();

        assert_eq!(
            *log.borrow(),
            vec![
                Seen::Items(2),
                Seen::Selection(Some(1)),
                Seen::Items(2),
                Seen::Selection(None),
            ]
        );
    }

    #[test]
    fn test_initial_snapshot_never_changes() {
        let mut engine = engine();
        let snapshot = engine.initial().to_vec();

        engine.toggle_size(0, 0);
        engine.set_price(1, 1, 0.0);
        engine.undo(0);
        engine.reset_all();

        assert_eq!(engine.initial(), snapshot.as_slice());
    }
}
