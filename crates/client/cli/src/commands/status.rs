//! Inspect or discard the current save.

use anyhow::Result;
use clap::Args;

use super::describe_record;
use crate::game::GameContext;

#[derive(Args, Debug)]
pub struct Status {
    /// Also list every session with a save file
    #[arg(long)]
    sessions: bool,
}

impl Status {
    pub fn execute(self, game: &GameContext) -> Result<()> {
        println!("Party:");
        if game.save.party.is_empty() {
            println!("  (empty)");
        }
        for (slot, record) in game.save.party.members().iter().enumerate() {
            println!("  {}: {}", slot, describe_record(record, &game.species));
        }

        println!("Bag:");
        for stack in game.save.inventory.items() {
            println!("  {} x{}", stack.name, stack.count);
        }

        if self.sessions {
            println!("Sessions:");
            for session in game.sessions()? {
                println!("  {}", session);
            }
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct Reset;

impl Reset {
    pub fn execute(self, game: &GameContext) -> Result<()> {
        game.reset()?;
        println!("Save deleted; the next command starts a new game.");
        Ok(())
    }
}
