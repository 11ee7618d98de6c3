// Menuprice - per-size menu pricing editor
// Toggle sizes, edit prices, revert items to catalog values; edits persist across runs

pub mod cli;
pub mod models;
pub mod state;
pub mod store;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Catalog, MenuConfig, MenuItemState, SizeState};
pub use state::{MenuEngine, MenuPersistence, StateEvent, StateObserver};
pub use store::{FileStore, KeyValueStore, MemoryStore};
