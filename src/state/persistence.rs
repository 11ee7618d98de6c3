//! Saved state in a key-value store
//!
//! Two keys are used:
//! - `menuItems`: the working copy as a JSON array
//! - `activeItemId`: decimal id of the expanded item, absent when none
//!
//! Reads never fail: anything missing, unparseable or shaped differently from
//! the catalog falls back. Writes are logged and swallowed on failure.

use super::engine::{MenuEngine, StateEvent, StateObserver};
use crate::models::{ItemId, MenuItemState};
use crate::store::KeyValueStore;

pub const MENU_ITEMS_KEY: &str = "menuItems";
pub const ACTIVE_ITEM_KEY: &str = "activeItemId";

/// Persistence adapter over any `KeyValueStore`
pub struct MenuPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> MenuPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved working copy, or `fallback` if there is none usable
    pub fn load_state(&self, fallback: Vec<MenuItemState>) -> Vec<MenuItemState> {
        let raw = match self.store.get(MENU_ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                tracing::warn!("Failed to read saved menu state: {}", e);
                return fallback;
            }
        };

        let saved: Vec<MenuItemState> = match serde_json::from_str(&raw) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Ignoring unparseable saved menu state: {}", e);
                return fallback;
            }
        };

        if !matches_shape(&saved, &fallback) {
            tracing::warn!("Ignoring saved menu state that does not match the catalog");
            return fallback;
        }

        saved
    }

    /// Write the working copy
    pub fn save_state(&mut self, state: &[MenuItemState]) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize menu state: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(MENU_ITEMS_KEY, &json) {
            tracing::warn!("Failed to save menu state: {}", e);
        }
    }

    /// Saved selection, or `None` if absent or unreadable
    pub fn load_active_selection(&self) -> Option<ItemId> {
        match self.store.get(ACTIVE_ITEM_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<ItemId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!("Ignoring invalid saved selection {:?}: {}", raw, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read saved selection: {}", e);
                None
            }
        }
    }

    /// Write the selection; `None` removes the key
    pub fn save_active_selection(&mut self, item_id: Option<ItemId>) {
        let result = match item_id {
            Some(id) => self.store.set(ACTIVE_ITEM_KEY, &id.to_string()),
            None => self.store.remove(ACTIVE_ITEM_KEY),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to save selection: {}", e);
        }
    }
}

impl<S: KeyValueStore + 'static> MenuPersistence<S> {
    /// Build an engine from saved state and keep it saved
    ///
    /// `initial` is both the undo baseline and the fallback working copy. A
    /// saved selection naming an item outside `initial` is dropped.
    pub fn restore_engine(self, initial: Vec<MenuItemState>) -> MenuEngine {
        let current = self.load_state(initial.clone());
        let active_item = self
            .load_active_selection()
            .filter(|id| initial.iter().any(|item| item.item_id == *id));

        let mut engine = MenuEngine::restore(initial, current, active_item);
        engine.subscribe(Box::new(self));
        engine
    }
}

impl<S: KeyValueStore> StateObserver for MenuPersistence<S> {
    fn on_change(&mut self, event: &StateEvent<'_>) {
        match event {
            StateEvent::ItemsChanged(items) => self.save_state(items),
            StateEvent::SelectionChanged(item_id) => self.save_active_selection(*item_id),
        }
    }
}

/// Same item ids in order, each with the same size ids in order
fn matches_shape(saved: &[MenuItemState], expected: &[MenuItemState]) -> bool {
    saved.len() == expected.len()
        && saved
            .iter()
            .zip(expected)
            .all(|(s, e)| s.same_shape(e))
}
