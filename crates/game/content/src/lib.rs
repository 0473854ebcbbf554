//! Authored content and save files.
//!
//! Loaders read RON/TOML/JSON from a data directory and hand back `game-core`
//! types:
//! - Species database (RON, or a flat JSON map)
//! - Trainer rosters (RON)
//! - Shop catalog (RON)
//! - Collision maps (RON, ASCII rows)
//! - Game configuration (TOML)
//! - Player saves (JSON)
//!
//! Content is consumed through the oracle traits and never mutated here.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, SaveData, SaveLoader, ShopLoader,
    SpeciesLoader, TrainerLoader,
};
