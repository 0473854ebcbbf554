//! Creature model: derived stats, leveling and evolution.
//!
//! A [`Creature`] is built from a persisted
//! [`CreatureRecord`](crate::state::CreatureRecord) plus an injected
//! [`SpeciesOracle`](crate::env::SpeciesOracle), and serializes back to the same
//! record shape.
mod instance;
pub mod stats;

pub use instance::{Creature, CreatureSnapshot, StatBoosts};
pub use stats::{DerivedStats, StatChange};
