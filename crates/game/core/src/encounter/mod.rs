//! Wild and trainer encounter setup.
//!
//! Wild levels are drawn uniformly from [`EncounterRules`]; species are then
//! filtered so that evolved forms only show up at or above their evolution
//! level.
mod table;

pub use table::EncounterTable;

use tracing::{debug, info};

use crate::config::EncounterRules;
use crate::env::{RngOracle, TrainerDefinition, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CreatureRecord, Party};

const LEVEL_ROLL: u32 = 0;
const SPECIES_ROLL: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("You have no energy to battle! Please heal!")]
    PartyExhausted,

    #[error("species database is empty")]
    NoSpecies,

    #[error("trainer {name} has no team")]
    EmptyTeam { name: String },
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PartyExhausted => ErrorSeverity::Recoverable,
            Self::NoSpecies | Self::EmptyTeam { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PartyExhausted => "ENCOUNTER_PARTY_EXHAUSTED",
            Self::NoSpecies => "ENCOUNTER_NO_SPECIES",
            Self::EmptyTeam { .. } => "ENCOUNTER_EMPTY_TEAM",
        }
    }
}

/// Refuses any battle while every party member has fainted.
pub fn ensure_party_ready(party: &Party) -> Result<(), EncounterError> {
    if party.is_team_alive() {
        Ok(())
    } else {
        Err(EncounterError::PartyExhausted)
    }
}

/// Opponent record for a trainer battle: the first team member at full HP.
pub fn trainer_opponent(trainer: &TrainerDefinition) -> Result<CreatureRecord, EncounterError> {
    info!("Fighting against {}", trainer.name);
    trainer.lead().ok_or_else(|| EncounterError::EmptyTeam {
        name: trainer.name.clone(),
    })
}

/// Rolls wild encounters from an [`EncounterTable`].
#[derive(Clone, Debug)]
pub struct EncounterGenerator<R> {
    table: EncounterTable,
    rules: EncounterRules,
    rng: R,
}

impl<R: RngOracle> EncounterGenerator<R> {
    pub fn new(table: EncounterTable, rules: EncounterRules, rng: R) -> Self {
        Self { table, rules, rng }
    }

    pub fn table(&self) -> &EncounterTable {
        &self.table
    }

    /// Draws a level, then a species eligible at that level.
    ///
    /// The same seed always yields the same record. The creature has exp 0 and
    /// full HP.
    pub fn roll_wild(&self, seed: u64) -> Result<CreatureRecord, EncounterError> {
        let (min, max) = (self.rules.min_level, self.rules.max_level.max(self.rules.min_level));
        let level = self
            .rng
            .range(compute_seed(seed, 0, LEVEL_ROLL), min, max)
            .max(1);

        let candidates = self.table.eligible(level);
        let index = self
            .rng
            .pick(compute_seed(seed, 0, SPECIES_ROLL), candidates.len())
            .ok_or(EncounterError::NoSpecies)?;
        let species_id = candidates[index].clone();

        debug!(
            "Wild roll: level {}, {} candidates, picked {}",
            level,
            candidates.len(),
            species_id
        );
        Ok(CreatureRecord::at_full_health(species_id, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ElementType, PcgRng, SpeciesDefinition, SpeciesTable, TrainerMember};

    fn generator(rules: EncounterRules) -> EncounterGenerator<PcgRng> {
        let species = SpeciesTable::new()
            .with(
                "sproutkit",
                SpeciesDefinition::new("Sproutkit", ElementType::Grass, 50, 10, 10)
                    .with_evolution(16, "bloomcat"),
            )
            .with(
                "bloomcat",
                SpeciesDefinition::new("Bloomcat", ElementType::Grass, 80, 18, 16),
            );
        EncounterGenerator::new(EncounterTable::from_species(&species), rules, PcgRng)
    }

    #[test]
    fn rolls_are_reproducible() {
        let generator = generator(EncounterRules::default());
        for seed in 0..20 {
            assert_eq!(generator.roll_wild(seed), generator.roll_wild(seed));
        }
    }

    #[test]
    fn rolled_level_stays_in_range() {
        let generator = generator(EncounterRules::default());
        for seed in 0..200 {
            let record = generator.roll_wild(seed).unwrap();
            assert!((2..=40).contains(&record.level));
            assert_eq!(record.exp, 0);
            assert_eq!(record.hp, None);
        }
    }

    #[test]
    fn evolved_forms_never_appear_below_their_level() {
        let generator = generator(EncounterRules {
            min_level: 2,
            max_level: 15,
        });
        for seed in 0..200 {
            let record = generator.roll_wild(seed).unwrap();
            assert_eq!(record.species_id.as_str(), "sproutkit");
        }
    }

    #[test]
    fn empty_database_cannot_roll() {
        let generator = EncounterGenerator::new(
            EncounterTable::from_species(&SpeciesTable::new()),
            EncounterRules::default(),
            PcgRng,
        );
        assert_eq!(generator.roll_wild(7), Err(EncounterError::NoSpecies));
    }

    #[test]
    fn exhausted_party_is_refused() {
        let party = Party::new(vec![CreatureRecord::new("sproutkit", 5, 0, 0)]);
        let err = ensure_party_ready(&party).unwrap_err();
        assert_eq!(err.to_string(), "You have no energy to battle! Please heal!");
        assert!(ensure_party_ready(&Party::new(vec![CreatureRecord::at_full_health("sproutkit", 5)])).is_ok());
    }

    #[test]
    fn trainer_sends_out_first_member() {
        let trainer = TrainerDefinition {
            name: "Youngster Joey".to_string(),
            team: vec![
                TrainerMember {
                    species_id: "emberpup".into(),
                    level: 8,
                },
                TrainerMember {
                    species_id: "sproutkit".into(),
                    level: 12,
                },
            ],
        };

        let lead = trainer_opponent(&trainer).unwrap();
        assert_eq!(lead, CreatureRecord::at_full_health("emberpup", 8));

        let empty = TrainerDefinition {
            name: "Nobody".to_string(),
            team: Vec::new(),
        };
        assert!(matches!(
            trainer_opponent(&empty),
            Err(EncounterError::EmptyTeam { .. })
        ));
    }
}
