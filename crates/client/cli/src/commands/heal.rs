//! Visit the nurse.

use anyhow::Result;
use clap::Args;

use super::describe_record;
use crate::game::GameContext;

#[derive(Args, Debug)]
pub struct Heal;

impl Heal {
    pub fn execute(self, game: &mut GameContext) -> Result<()> {
        let message = game.save.party.heal_all(&game.species);
        println!("{}", message);
        for record in game.save.party.members() {
            println!("  {}", describe_record(record, &game.species));
        }
        game.persist()
    }
}
