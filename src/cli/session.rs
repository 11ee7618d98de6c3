//! Opening an editing session from config

use crate::models::{Catalog, MenuConfig, MenuItemState};
use crate::state::{MenuEngine, MenuPersistence};
use crate::store::FileStore;
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Everything a command needs: effective config, catalog and a live engine
pub struct Session {
    pub config: MenuConfig,
    pub catalog: Catalog,
    pub engine: MenuEngine,
}

/// Resolve the config file: explicit path, else `menuprice.toml` in the working directory
pub fn load_config(config_path: Option<&Path>) -> Result<MenuConfig> {
    match config_path {
        Some(path) => MenuConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let root = std::env::current_dir()?;
            MenuConfig::load(&root).context("Failed to load menuprice.toml")
        }
    }
}

/// Catalog named by config, or the built-in one
pub fn load_catalog(config: &MenuConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::builtin()),
    }
}

impl Session {
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;
        Self::with_config(config)
    }

    pub fn with_config(config: MenuConfig) -> Result<Self> {
        if !config.display.colors {
            colored::control::set_override(false);
        }

        let catalog = load_catalog(&config)?;
        let store = FileStore::open(&config.store_path).with_context(|| {
            format!("Failed to open store {}", config.store_path.display())
        })?;
        tracing::debug!(store = %config.store_path.display(), "opened store");

        let engine = MenuPersistence::new(store).restore_engine(catalog.initial_state());

        Ok(Self {
            config,
            catalog,
            engine,
        })
    }

    /// Look up an item in the working copy, failing with a readable message
    pub fn require_item(&self, item_id: u32) -> Result<&MenuItemState> {
        self.engine
            .item(item_id)
            .ok_or_else(|| anyhow::anyhow!("Item {} is not in the catalog", item_id))
    }
}
