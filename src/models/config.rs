use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "menuprice.toml";

/// Display settings for the terminal editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_colors")]
    pub colors: bool,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_colors() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Menuprice configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Key-value store file holding saved edits
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// JSON catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("menuprice"))
        .unwrap_or_else(|| PathBuf::from(".menuprice"))
        .join("store.json")
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            catalog_path: None,
            display: DisplayConfig::default(),
        }
    }
}

impl MenuConfig {
    /// Load config from `menuprice.toml` under `root`, or defaults if absent
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        Self::load_from(&root.join(CONFIG_FILE))
    }

    /// Load config from an explicit file, or defaults if absent
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: MenuConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to `menuprice.toml` under `root`
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        let config_path = root.join(CONFIG_FILE);
        std::fs::create_dir_all(root)?;

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }
}
