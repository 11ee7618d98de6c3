use super::session::load_config;
use crate::models::MenuConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print the effective config, or write the defaults with `init`
pub fn run(config_path: Option<&Path>, init: bool) -> Result<()> {
    if init {
        let root = std::env::current_dir()?;
        let path = MenuConfig::default().save(&root)?;
        println!("{}", format!("✓ Wrote {}", path.display()).green());
        return Ok(());
    }

    let config = load_config(config_path)?;
    match config_path {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: {} (working directory)", crate::models::CONFIG_FILE),
    }
    println!();
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
