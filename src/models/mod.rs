pub mod catalog;
pub mod config;
pub mod menu;

pub use catalog::{build_initial_state, Catalog, CatalogItem, CatalogPrice, CatalogSize};
pub use config::{DisplayConfig, MenuConfig, CONFIG_FILE};
pub use menu::{format_price, parse_price_input, ItemId, MenuItemState, SizeId, SizeState};
