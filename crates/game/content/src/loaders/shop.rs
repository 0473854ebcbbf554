//! Shop catalog loader.

use std::path::Path;

use game_core::ShopListing;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Shop catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub items: Vec<ShopListing>,
}

/// Loader for the shop catalog from RON files.
pub struct ShopLoader;

impl ShopLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ShopListing>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ShopListing>> {
        let catalog: ShopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpriced_listings_cost_one() {
        let items = ShopLoader::parse(
            r#"(items: [
                (name: "Heal Potion", price: 30),
                (name: "Pokeball"),
            ])"#,
        )
        .unwrap();

        assert_eq!(
            items,
            vec![
                ShopListing::new("Heal Potion", 30),
                ShopListing::new("Pokeball", 1)
            ]
        );
    }
}
