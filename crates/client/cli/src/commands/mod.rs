//! Subcommand implementations.

mod battle;
mod encounters;
mod heal;
mod navigate;
mod shop;
mod status;
mod train;

pub use battle::Battle;
pub use encounters::Encounters;
pub use heal::Heal;
pub use navigate::Navigate;
pub use shop::ShopCommand;
pub use status::{Reset, Status};
pub use train::Train;

use game_core::creature::stats;
use game_core::{Creature, CreatureRecord, CreatureSnapshot, SpeciesOracle};

/// One-line health display: `Sproutkit Lv.5 [grass] HP 30/72 ATK 13 DEF 13`.
pub(crate) fn describe(snapshot: &CreatureSnapshot) -> String {
    format!(
        "{} Lv.{} [{}] HP {}/{} ATK {} DEF {}",
        snapshot.name,
        snapshot.level,
        snapshot.element,
        snapshot.hp,
        snapshot.max_hp,
        snapshot.attack,
        snapshot.defense
    )
}

/// Party line for a stored record, built the way a battle would build it.
pub(crate) fn describe_record(record: &CreatureRecord, species: &impl SpeciesOracle) -> String {
    let creature = Creature::create(record, species);
    format!(
        "{} EXP {}/{}",
        describe(&creature.snapshot()),
        creature.exp(),
        stats::exp_threshold(creature.level())
    )
}
