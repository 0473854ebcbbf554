//! Scripted battle against a wild creature or a trainer.

use anyhow::{Context, Result, bail};
use clap::Args;
use game_core::encounter::{ensure_party_ready, trainer_opponent};
use game_core::{
    BattleAction, BattleEngine, BattleExit, BattleKind, BattlePhase, BattleSession, CreatureRecord,
    EncounterGenerator, EncounterTable, GameError, PcgRng, SpeciesId, SpeciesOracle,
    TrainerOracle,
};
use tracing::{info, warn};

use super::describe;
use crate::game::GameContext;

#[derive(Args, Debug)]
pub struct Battle {
    /// Challenge a trainer by id instead of meeting a wild creature
    #[arg(long)]
    trainer: Option<String>,

    /// Wild species id (default: rolled from the encounter table)
    #[arg(long, conflicts_with = "trainer")]
    species: Option<String>,

    /// Level of the wild creature when `--species` is given
    #[arg(long, default_value_t = CreatureRecord::DEFAULT_LEVEL)]
    level: u32,

    /// Player commands in order: fight, catch, switch, heal, strength, defense, run.
    /// Once the script runs out the player keeps choosing `fight`.
    #[arg(value_delimiter = ',', value_parser = parse_action)]
    actions: Vec<BattleAction>,

    /// Simulated frame length in seconds
    #[arg(long, default_value_t = 0.25)]
    frame: f32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 10_000)]
    max_frames: usize,

    /// Do not write the result to the save file
    #[arg(long)]
    dry_run: bool,
}

impl Battle {
    pub fn execute(self, game: &mut GameContext) -> Result<()> {
        if self.frame <= 0.0 {
            bail!("--frame must be positive");
        }
        ensure_party_ready(&game.save.party)?;

        let (kind, opponent) = self.opponent(game)?;
        let mut session = BattleSession::start(
            &game.save.party,
            &game.species,
            &opponent,
            kind,
            &game.config,
        );

        if let Some(player) = session.player_snapshot() {
            println!("You:   {}", describe(&player));
        }
        println!("Enemy: {}", describe(&session.opponent_snapshot()));

        let mut printed = 0;
        print_new_lines(&session, &mut printed);

        let mut script = self.actions.into_iter();
        let mut outcome = None;

        for _ in 0..self.max_frames {
            let phase = session.phase();
            let mut engine = BattleEngine::new(
                &mut session,
                &mut game.save.party,
                &mut game.save.inventory,
                &game.species,
            );

            let signal = if phase == BattlePhase::PlayerTurn {
                let action = script.next().unwrap_or(BattleAction::Fight);
                println!("> {}", action);
                match engine.execute(action) {
                    Ok(signal) => Some(signal),
                    Err(error) if error.severity().is_internal() => return Err(error.into()),
                    Err(error) => {
                        warn!("{} rejected ({})", action, error.error_code());
                        None
                    }
                }
            } else {
                Some(engine.update(self.frame))
            };

            print_new_lines(&session, &mut printed);

            if let Some(exit) = signal.and_then(|signal| signal.exit()) {
                outcome = Some(exit);
                break;
            }
        }

        let Some(exit) = outcome else {
            bail!(
                "battle still in {} after {} frames",
                session.phase(),
                self.max_frames
            );
        };

        println!("Battle over: {}", exit_label(exit));
        if let Some(player) = session.player_snapshot() {
            println!("You:   {}", describe(&player));
        }
        println!("Enemy: {}", describe(&session.opponent_snapshot()));

        if self.dry_run {
            info!("Dry run, save left untouched");
            return Ok(());
        }
        game.persist()
    }

    fn opponent(&self, game: &GameContext) -> Result<(BattleKind, CreatureRecord)> {
        if let Some(id) = &self.trainer {
            let roster = game.trainers()?;
            let trainer = roster
                .trainer(id)
                .with_context(|| format!("unknown trainer '{}'", id))?;
            return Ok((BattleKind::Trainer, trainer_opponent(&trainer)?));
        }

        if let Some(id) = &self.species {
            let id = SpeciesId::new(id.as_str());
            if game.species.definition(&id).is_none() {
                warn!("Species '{}' not in database, using placeholder", id);
            }
            return Ok((BattleKind::Wild, CreatureRecord::at_full_health(id, self.level)));
        }

        let generator = EncounterGenerator::new(
            EncounterTable::from_species(&game.species),
            game.config.encounter,
            PcgRng,
        );
        Ok((BattleKind::Wild, generator.roll_wild(game.seed)?))
    }
}

fn parse_action(raw: &str) -> Result<BattleAction, String> {
    raw.parse()
        .map_err(|_| format!("unknown battle command '{}'", raw))
}

fn print_new_lines(session: &BattleSession, printed: &mut usize) {
    for line in session.log().iter().skip(*printed) {
        println!("  {}", line);
    }
    *printed = session.log().len();
}

fn exit_label(exit: BattleExit) -> &'static str {
    match exit {
        BattleExit::Won => "victory",
        BattleExit::Lost => "defeat",
        BattleExit::Fled => "got away",
    }
}
