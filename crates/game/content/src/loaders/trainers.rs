//! Trainer roster loader.

use std::path::Path;

use game_core::TrainerRoster;

use crate::loaders::{LoadResult, read_file};

/// Loader for trainer rosters from RON files, keyed by trainer id.
pub struct TrainerLoader;

impl TrainerLoader {
    pub fn load(path: &Path) -> LoadResult<TrainerRoster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)?;
        tracing::info!("Loaded {} trainers from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn parse(content: &str) -> LoadResult<TrainerRoster> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse trainers RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CreatureRecord, TrainerOracle};

    #[test]
    fn parses_trainer_teams() {
        let roster = TrainerLoader::parse(
            r#"{
                "joey": (
                    name: "Youngster Joey",
                    team: [
                        (species_id: "emberpup", level: 8),
                        (species_id: "sproutkit", level: 10),
                    ],
                ),
            }"#,
        )
        .unwrap();

        let joey = roster.trainer("joey").unwrap();
        assert_eq!(joey.name, "Youngster Joey");
        assert_eq!(joey.lead(), Some(CreatureRecord::at_full_health("emberpup", 8)));
        assert_eq!(roster.trainer_ids(), vec!["joey".to_string()]);
        assert!(roster.trainer("nobody").is_none());
    }
}
