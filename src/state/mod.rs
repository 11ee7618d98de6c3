//! Menu State Module
//!
//! Handles the editable menu state, including:
//! - Pure transitions (toggle, price edit, undo)
//! - Change detection against the initial snapshot
//! - The engine that owns both snapshots and the selection
//! - Persistence as an engine observer

pub mod changes;
mod engine;
mod persistence;
pub mod transitions;

pub use changes::{changed_items, has_changes};
pub use engine::{MenuEngine, StateEvent, StateObserver};
pub use persistence::{MenuPersistence, ACTIVE_ITEM_KEY, MENU_ITEMS_KEY};
