//! Deterministic rules for a tile-based creature-collecting RPG.
//!
//! `game-core` holds the creature model, battle state machine, grid
//! pathfinder and encounter selection. It performs no I/O: authored data
//! arrives through the oracle traits in [`env`], and persisted records live in
//! [`state`]. Battles are driven through [`battle::BattleEngine`], one
//! `update(delta)` per frame.
pub mod battle;
pub mod combat;
pub mod config;
pub mod creature;
pub mod encounter;
pub mod env;
pub mod error;
pub mod navigation;
pub mod shop;
pub mod state;

pub use battle::{
    BattleAction, BattleEngine, BattleError, BattleExit, BattleItem, BattleKind, BattlePhase,
    BattleSession, BattleSignal, EnemyPhase,
};
pub use combat::{DamageModifier, DamageRoll, calculate_damage};
pub use config::{BattleTimings, EncounterRules, GameConfig, ItemRules, SearchLimits};
pub use creature::{Creature, CreatureSnapshot, DerivedStats, StatChange};
pub use encounter::{EncounterError, EncounterGenerator, EncounterTable};
pub use env::{
    CollisionMap, ElementType, EvolutionRule, MapDimensions, MapOracle, PcgRng, RngOracle,
    SpeciesDefinition, SpeciesId, SpeciesOracle, SpeciesTable, TrainerDefinition, TrainerMember,
    TrainerOracle, TrainerRoster,
};
pub use error::{ErrorSeverity, GameError};
pub use navigation::{NavigationRoute, find_path};
pub use shop::{Shop, ShopError, ShopListing};
pub use state::{CreatureRecord, Inventory, InventoryError, ItemStack, Party, Position};
