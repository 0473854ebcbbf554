//! Award experience to a party member outside of battle.

use anyhow::{Context, Result};
use clap::Args;
use game_core::Creature;

use super::describe_record;
use crate::game::GameContext;

#[derive(Args, Debug)]
pub struct Train {
    /// Experience points to award
    amount: u32,

    /// Party slot (0-based)
    #[arg(long, default_value_t = 0)]
    slot: usize,
}

impl Train {
    pub fn execute(self, game: &mut GameContext) -> Result<()> {
        let record = game
            .save
            .party
            .get_mut(self.slot)
            .with_context(|| format!("no party member in slot {}", self.slot))?;

        let mut creature = Creature::create(record, &game.species);
        for line in creature.gain_experience(self.amount, &game.species) {
            println!("{}", line);
        }
        creature.write_back(record);

        println!("{}", describe_record(record, &game.species));
        game.persist()
    }
}
