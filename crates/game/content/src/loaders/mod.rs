//! Content loaders for reading game data from files.

pub mod config;
pub mod factory;
pub mod map;
pub mod save;
pub mod shop;
pub mod species;
pub mod trainers;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;
pub use save::{SaveData, SaveLoader};
pub use shop::ShopLoader;
pub use species::SpeciesLoader;
pub use trainers::TrainerLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// True when `path` ends in `.json` (case-insensitive).
pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
