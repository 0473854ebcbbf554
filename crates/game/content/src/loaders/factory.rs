//! Content factory for loading everything under one data directory.

use std::path::{Path, PathBuf};

use game_core::{CollisionMap, GameConfig, Shop, SpeciesTable, TrainerRoster};

use crate::loaders::{
    ConfigLoader, LoadResult, MapLoader, SaveData, ShopLoader, SpeciesLoader, TrainerLoader,
    read_file,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── species.ron        (or species.json)
/// ├── trainers.ron
/// ├── shop.ron
/// ├── new_game.json      (starting party and bag)
/// └── maps/
///     ├── town.ron
///     └── route1.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load the species database, preferring `species.ron` over `species.json`.
    pub fn load_species(&self) -> LoadResult<SpeciesTable> {
        let ron_path = self.data_dir.join("species.ron");
        if ron_path.exists() {
            return SpeciesLoader::load(&ron_path);
        }
        SpeciesLoader::load(&self.data_dir.join("species.json"))
    }

    /// Load trainer rosters from `trainers.ron`.
    pub fn load_trainers(&self) -> LoadResult<TrainerRoster> {
        TrainerLoader::load(&self.data_dir.join("trainers.ron"))
    }

    /// Load the shop from `shop.ron`, priced in the configured currency.
    pub fn load_shop(&self, config: &GameConfig) -> LoadResult<Shop> {
        let listings = ShopLoader::load(&self.data_dir.join("shop.ron"))?;
        Ok(Shop::new(listings, config.items.currency_item.clone()))
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<CollisionMap> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load the starting party and inventory from `new_game.json`.
    pub fn load_new_game(&self) -> LoadResult<SaveData> {
        let path = self.data_dir.join("new_game.json");
        let json = read_file(&path)?;
        serde_json::from_str(&json)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SpeciesOracle;
    use tempfile::TempDir;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_minimal_data_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("species.json"),
            r#"{ "sproutkit": { "name": "Sproutkit", "type": "grass" } }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("shop.ron"), r#"(items: [(name: "Pokeball", price: 20)])"#)
            .unwrap();
        std::fs::create_dir(dir.path().join("maps")).unwrap();
        std::fs::write(
            dir.path().join("maps").join("town.ron"),
            r#"(name: "town", rows: ["..", ".#"])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();

        assert_eq!(config, GameConfig::default());
        assert_eq!(factory.load_species().unwrap().all_definitions().len(), 1);
        assert_eq!(factory.load_shop(&config).unwrap().price("Pokeball"), Some(20));
        assert_eq!(factory.load_map("town").unwrap().name(), "town");
        assert!(factory.load_trainers().is_err());
    }
}
