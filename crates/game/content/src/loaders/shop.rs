//! Shop inventory loader.

use std::path::Path;

use game_core::Item;
use serde::{Deserialize, Serialize};

use crate::catalog::ShopCatalog;
use crate::loaders::{LoadResult, ensure_unique_names, read_file};

/// Shop inventory structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopFile {
    pub items: Vec<Item>,
}

/// Loader for the shop inventory from RON files.
pub struct ShopLoader;

impl ShopLoader {
    pub fn load(path: &Path) -> LoadResult<ShopCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a shop file. Items are always offered unworn.
    pub fn parse(content: &str) -> LoadResult<ShopCatalog> {
        let file: ShopFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop RON: {}", e))?;

        ensure_unique_names("shop", file.items.iter().map(|i| i.name.as_str()))?;
        let items = file
            .items
            .into_iter()
            .map(|mut item| {
                item.worn = false;
                item
            })
            .collect();
        Ok(ShopCatalog::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EquipSlot, ItemKind};

    #[test]
    fn stats_and_slot_default_when_absent() {
        let shop = ShopLoader::parse(
            r#"(items: [
                (name: "Helmet", kind: Armor, price: 30, slot: Some(Head),
                 stats: (defense: Some(2))),
                (name: "Potion", kind: Consumable, price: 10, worn: true),
            ])"#,
        )
        .unwrap();

        let helmet = shop.get(0).unwrap();
        assert_eq!(helmet.kind, ItemKind::Armor);
        assert_eq!(helmet.slot, Some(EquipSlot::Head));
        assert_eq!(helmet.defense_bonus(), 2);
        assert_eq!(helmet.stats.damage, None);

        let potion = shop.get(1).unwrap();
        assert!(!potion.is_equippable());
        assert!(!potion.worn);
        assert_eq!(shop.affordable(15).count(), 1);
    }
}
