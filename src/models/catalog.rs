//! Catalog reference data
//!
//! The catalog is the static source of truth for which items and sizes exist
//! and what they cost out of the box. It is read once at startup and never
//! written back.

use super::menu::{ItemId, MenuItemState, SizeId, SizeState};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A menu item (e.g. a pizza)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub item_id: ItemId,
    pub name: String,
}

/// A size every item is offered in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSize {
    pub size_id: SizeId,
    pub name: String,
}

/// Reference price for one (item, size) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPrice {
    pub item_id: ItemId,
    pub size_id: SizeId,
    pub price: f64,
}

/// The three reference lists as supplied at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub sizes: Vec<CatalogSize>,
    #[serde(default)]
    pub prices: Vec<CatalogPrice>,
}

impl Catalog {
    /// The pizza catalog shipped with the binary
    pub fn builtin() -> Self {
        let items = vec![
            CatalogItem {
                item_id: 0,
                name: "Margherita".to_string(),
            },
            CatalogItem {
                item_id: 1,
                name: "Pepperoni".to_string(),
            },
        ];

        let sizes = ["Small", "Medium", "Large"]
            .iter()
            .enumerate()
            .map(|(id, name)| CatalogSize {
                size_id: id as SizeId,
                name: name.to_string(),
            })
            .collect();

        let table: [(ItemId, SizeId, f64); 6] = [
            (0, 0, 3.99),
            (0, 1, 5.99),
            (0, 2, 7.99),
            (1, 0, 4.42),
            (1, 1, 6.52),
            (1, 2, 8.62),
        ];
        let prices = table
            .iter()
            .map(|&(item_id, size_id, price)| CatalogPrice {
                item_id,
                size_id,
                price,
            })
            .collect();

        Self {
            items,
            sizes,
            prices,
        }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    /// Reference price for a pair, if the catalog lists one
    pub fn price_for(&self, item_id: ItemId, size_id: SizeId) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.item_id == item_id && p.size_id == size_id)
            .map(|p| p.price)
    }

    pub fn item_name(&self, item_id: ItemId) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.item_id == item_id)
            .map(|i| i.name.as_str())
    }

    pub fn size_name(&self, size_id: SizeId) -> Option<&str> {
        self.sizes
            .iter()
            .find(|s| s.size_id == size_id)
            .map(|s| s.name.as_str())
    }

    /// Build the initial snapshot for this catalog
    pub fn initial_state(&self) -> Vec<MenuItemState> {
        build_initial_state(&self.items, &self.sizes, &self.prices)
    }
}

/// Combine the reference lists into one state entry per item.
///
/// Sizes follow catalog order. A pair without a listed price starts at 0.
/// Fresh state is always enabled with nothing to restore.
pub fn build_initial_state(
    items: &[CatalogItem],
    sizes: &[CatalogSize],
    prices: &[CatalogPrice],
) -> Vec<MenuItemState> {
    items
        .iter()
        .map(|item| {
            let item_prices: Vec<&CatalogPrice> =
                prices.iter().filter(|p| p.item_id == item.item_id).collect();

            MenuItemState {
                item_id: item.item_id,
                name: item.name.clone(),
                sizes: sizes
                    .iter()
                    .map(|size| {
                        let price = item_prices
                            .iter()
                            .find(|p| p.size_id == size.size_id)
                            .map_or(0.0, |p| p.price);
                        SizeState {
                            size_id: size.size_id,
                            size_name: size.name.clone(),
                            price,
                            enabled: true,
                            previous_price: 0.0,
                        }
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_initial_state() {
        let state = Catalog::builtin().initial_state();

        assert_eq!(state.len(), 2);
        assert_eq!(state[0].name, "Margherita");
        let prices: Vec<f64> = state[0].sizes.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![3.99, 5.99, 7.99]);
        let names: Vec<&str> = state[1].sizes.iter().map(|s| s.size_name.as_str()).collect();
        assert_eq!(names, vec!["Small", "Medium", "Large"]);
    }

    #[test]
    fn test_every_size_enabled_with_no_previous_price() {
        for item in Catalog::builtin().initial_state() {
            for size in &item.sizes {
                assert!(size.enabled);
                assert_eq!(size.previous_price, 0.0);
            }
        }
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let mut catalog = Catalog::builtin();
        catalog.prices.retain(|p| !(p.item_id == 1 && p.size_id == 2));

        let state = catalog.initial_state();
        assert_eq!(state[1].sizes[2].price, 0.0);
        assert_eq!(state[1].sizes[1].price, 6.52);
    }

    #[test]
    fn test_sizes_follow_catalog_order_not_price_order() {
        let items = vec![CatalogItem {
            item_id: 7,
            name: "Funghi".to_string(),
        }];
        let sizes = vec![
            CatalogSize {
                size_id: 2,
                name: "Large".to_string(),
            },
            CatalogSize {
                size_id: 0,
                name: "Small".to_string(),
            },
        ];
        let prices = vec![
            CatalogPrice {
                item_id: 7,
                size_id: 0,
                price: 4.0,
            },
            CatalogPrice {
                item_id: 7,
                size_id: 2,
                price: 9.0,
            },
        ];

        let state = build_initial_state(&items, &sizes, &prices);
        assert_eq!(state[0].sizes[0].size_id, 2);
        assert_eq!(state[0].sizes[0].price, 9.0);
        assert_eq!(state[0].sizes[1].size_id, 0);
        assert_eq!(state[0].sizes[1].price, 4.0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.initial_state(), catalog.initial_state());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.item_name(1), Some("Pepperoni"));
        assert_eq!(catalog.size_name(1), Some("Medium"));
        assert_eq!(catalog.price_for(0, 2), Some(7.99));
        assert_eq!(catalog.price_for(5, 0), None);
    }

    #[test]
    fn test_load_catalog_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "items": [{"itemId": 3, "name": "Hawaii"}],
                "sizes": [{"sizeId": 0, "name": "Regular"}],
                "prices": [{"itemId": 3, "sizeId": 0, "price": 9.5}]
            }"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.item_name(3), Some("Hawaii"));
        assert_eq!(catalog.initial_state()[0].sizes[0].price, 9.5);
    }

    #[test]
    fn test_load_catalog_rejects_garbage() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Catalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog"));
    }
}
