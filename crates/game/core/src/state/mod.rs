//! Long-lived, persisted player state.
//!
//! The party and inventory outlive any single battle. They are the shared
//! mutable records that the battle engine writes back to at checkpoints and
//! that the rest of the game reads between frames.
mod inventory;
mod party;
mod position;

pub use inventory::{Inventory, InventoryError, ItemStack};
pub use party::{CreatureRecord, Party};
pub use position::Position;
