use super::session::Session;
use crate::models::{format_price, parse_price_input, Catalog, ItemId, MenuItemState, SizeId};
use crate::Result;
use anyhow::bail;
use colored::Colorize;
use std::path::Path;

/// Render the accordion: every item, the active one expanded
pub fn render_menu(session: &Session) -> String {
    let engine = &session.engine;
    let currency = &session.config.display.currency_symbol;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "🍕 Pizza".cyan().bold()));

    for item in engine.items() {
        let expanded = engine.active_item() == Some(item.item_id);
        let arrow = if expanded { "▾" } else { "▸" };
        let name = if expanded {
            item.name.bold().to_string()
        } else {
            item.name.clone()
        };

        out.push_str(&format!(
            "  {} [{}] {}  {}",
            arrow,
            item.item_id,
            name,
            format!("{}/{} sizes", item.enabled_count(), item.sizes.len()).bright_black()
        ));
        if engine.has_changes(item) {
            out.push_str(&format!("  {}", "↺ modified".yellow()));
        }
        out.push('\n');

        if expanded {
            out.push_str(&render_sizes(item, &session.catalog, currency));
        }
    }

    out
}

fn render_sizes(item: &MenuItemState, catalog: &Catalog, currency: &str) -> String {
    let mut out = String::new();
    for size in &item.sizes {
        let check = if size.enabled { "[x]" } else { "[ ]" };
        let price = format!("{} {}", currency, format_price(size.price));
        let line = format!(
            "      {} [{}] {:<8} {}",
            check, size.size_id, size.size_name, price
        );
        if size.enabled {
            out.push_str(&line);
            let listed = catalog.price_for(item.item_id, size.size_id).unwrap_or(0.0);
            if listed != size.price {
                let note = format!("(catalog {})", format_price(listed));
                out.push_str(&format!(" {}", note.bright_black()));
            }
        } else {
            out.push_str(&format!("{} {}", line.bright_black(), "(disabled)".bright_black()));
        }
        out.push('\n');
    }
    out
}

pub fn show(config_path: Option<&Path>, json: bool) -> Result<()> {
    let session = Session::open(config_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.engine.items())?);
    } else {
        print!("{}", render_menu(&session));
    }

    Ok(())
}

pub fn select(config_path: Option<&Path>, item_id: ItemId) -> Result<()> {
    let mut session = Session::open(config_path)?;
    session.require_item(item_id)?;

    match session.engine.set_active_item(item_id) {
        Some(id) => println!("{}", format!("▾ Expanded item {}", id).cyan()),
        None => println!("{}", format!("▸ Collapsed item {}", item_id).cyan()),
    }
    print!("{}", render_menu(&session));
    Ok(())
}

pub fn toggle(config_path: Option<&Path>, item_id: ItemId, size_id: SizeId) -> Result<()> {
    let mut session = Session::open(config_path)?;
    require_size(&session, item_id, size_id)?;

    session.engine.toggle_size(item_id, size_id);
    let size = session.require_item(item_id)?.size(size_id);

    if let Some(size) = size {
        if size.enabled {
            println!(
                "{}",
                format!("✓ {} enabled at {}", size.size_name, format_price(size.price)).green()
            );
        } else {
            println!("{}", format!("✗ {} disabled", size.size_name).yellow());
        }
    }
    Ok(())
}

pub fn price(
    config_path: Option<&Path>,
    item_id: ItemId,
    size_id: SizeId,
    text: &str,
) -> Result<()> {
    let mut session = Session::open(config_path)?;
    require_size(&session, item_id, size_id)?;

    let value = parse_price_input(text);
    session.engine.set_price(item_id, size_id, value);

    println!(
        "{}",
        format!(
            "✓ Price set to {} {}",
            session.config.display.currency_symbol,
            format_price(value)
        )
        .green()
    );
    Ok(())
}

pub fn undo(config_path: Option<&Path>, item_id: ItemId) -> Result<()> {
    let mut session = Session::open(config_path)?;
    let item = session.require_item(item_id)?;

    if !session.engine.has_changes(item) {
        println!("{}", format!("Item {} has no changes", item_id).bright_black());
        return Ok(());
    }

    session.engine.undo(item_id);
    println!("{}", format!("↺ Reverted item {} to catalog values", item_id).green());
    Ok(())
}

pub fn reset(config_path: Option<&Path>) -> Result<()> {
    let mut session = Session::open(config_path)?;

    session.engine.reset_all();
    session.engine.clear_selection();
    println!("{}", "↺ All items reverted to catalog values".green());
    Ok(())
}

pub fn status(config_path: Option<&Path>, item_id: ItemId) -> Result<()> {
    let session = Session::open(config_path)?;
    let item = session.require_item(item_id)?;

    if session.engine.has_changes(item) {
        println!("{}", format!("{}: modified", item.name).yellow());
    } else {
        println!("{}", format!("{}: matches catalog", item.name).green());
    }
    Ok(())
}

fn require_size(session: &Session, item_id: ItemId, size_id: SizeId) -> Result<()> {
    let item = session.require_item(item_id)?;
    if item.size(size_id).is_none() {
        bail!("Size {} is not in the catalog", size_id);
    }
    Ok(())
}
