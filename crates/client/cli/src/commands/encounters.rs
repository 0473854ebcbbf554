//! Preview wild encounter rolls without fighting them.

use anyhow::Result;
use clap::Args;
use game_core::encounter::ensure_party_ready;
use game_core::env::compute_seed;
use game_core::{Creature, EncounterGenerator, EncounterTable, PcgRng};

use super::describe;
use crate::game::GameContext;

/// Context tag separating preview rolls from the battle roll for the same seed.
const PREVIEW_ROLL: u32 = 2;

#[derive(Args, Debug)]
pub struct Encounters {
    /// Number of encounters to roll
    #[arg(default_value_t = 5)]
    count: u64,
}

impl Encounters {
    pub fn execute(self, game: &GameContext) -> Result<()> {
        if let Err(error) = ensure_party_ready(&game.save.party) {
            println!("{}", error);
        }

        let table = EncounterTable::from_species(&game.species);
        println!(
            "{} species, levels {}..={} (seed {})",
            table.len(),
            game.config.encounter.min_level,
            game.config.encounter.max_level,
            game.seed
        );

        let generator = EncounterGenerator::new(table, game.config.encounter, PcgRng);
        for step in 0..self.count {
            let record = generator.roll_wild(compute_seed(game.seed, step, PREVIEW_ROLL))?;
            let creature = Creature::create(&record, &game.species);
            println!("{:>3}. {}", step + 1, describe(&creature.snapshot()));
        }
        Ok(())
    }
}
