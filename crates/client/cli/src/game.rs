//! Loaded content plus the player's save for one CLI invocation.

use anyhow::{Context, Result};
use game_content::{ContentFactory, SaveData, SaveLoader};
use game_core::{GameConfig, Shop, SpeciesTable, TrainerRoster};
use tracing::info;

use crate::config::CliConfig;
use crate::dirs;

pub struct GameContext {
    pub factory: ContentFactory,
    pub config: GameConfig,
    pub species: SpeciesTable,
    pub save: SaveData,
    pub seed: u64,
    saves: SaveLoader,
    session_id: String,
}

impl GameContext {
    /// Loads content from the data dir and the session's save file, falling
    /// back to `new_game.json` for a fresh session.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(cli.data_dir());
        let config = factory.load_config()?;
        let species = factory
            .load_species()
            .with_context(|| format!("no species in {}", factory.data_dir().display()))?;

        let saves = SaveLoader::new(dirs::save_dir(cli))?;
        let session_id = cli.session_id().to_string();
        let save = match saves.load(&session_id)? {
            Some(save) => {
                info!("Resumed session '{}'", session_id);
                save
            }
            None => {
                info!("Starting new game for session '{}'", session_id);
                factory.load_new_game()?
            }
        };

        Ok(Self {
            factory,
            config,
            species,
            save,
            seed: cli.seed_or_now(),
            saves,
            session_id,
        })
    }

    pub fn trainers(&self) -> Result<TrainerRoster> {
        self.factory.load_trainers()
    }

    pub fn shop(&self) -> Result<Shop> {
        self.factory.load_shop(&self.config)
    }

    pub fn persist(&self) -> Result<()> {
        self.saves.save(&self.session_id, &self.save)?;
        info!("Saved to {}", self.saves.save_path(&self.session_id).display());
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.saves.delete(&self.session_id)
    }

    pub fn sessions(&self) -> Result<Vec<String>> {
        self.saves.list_sessions()
    }
}
