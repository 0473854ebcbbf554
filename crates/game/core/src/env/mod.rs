//! Read-only authored data.
//!
//! Oracles expose the species database, trainer rosters, collision maps and
//! the deterministic RNG. Loaders in `game-content` produce the concrete
//! tables; rules in this crate only see the traits.
mod map;
mod rng;
mod species;
mod trainers;

pub use map::{CollisionMap, MapDimensions, MapOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use species::{
    ElementType, EvolutionRule, SpeciesDefinition, SpeciesId, SpeciesOracle, SpeciesTable,
};
pub use trainers::{TrainerDefinition, TrainerMember, TrainerOracle, TrainerRoster};
