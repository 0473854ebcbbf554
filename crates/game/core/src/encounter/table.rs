use std::collections::BTreeMap;

use tracing::debug;

use crate::env::{SpeciesId, SpeciesOracle};

/// Minimum encounter level per species.
///
/// Every species defaults to level 1. A species that is the evolution target
/// of another gets that evolution's required level instead, provided the target
/// exists in the database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncounterTable {
    min_levels: BTreeMap<SpeciesId, u32>,
}

impl EncounterTable {
    pub const DEFAULT_MIN_LEVEL: u32 = 1;

    pub fn from_species(species: &(impl SpeciesOracle + ?Sized)) -> Self {
        let definitions = species.all_definitions();
        let mut min_levels: BTreeMap<SpeciesId, u32> = definitions
            .iter()
            .map(|(id, _)| (id.clone(), Self::DEFAULT_MIN_LEVEL))
            .collect();

        for (_, definition) in &definitions {
            let Some(rule) = &definition.evolution else {
                continue;
            };
            if rule.level == 0 || rule.next_id.as_str().is_empty() {
                continue;
            }
            if let Some(min_level) = min_levels.get_mut(&rule.next_id) {
                *min_level = rule.level;
            }
        }

        debug!("Encounter table built for {} species", min_levels.len());
        Self { min_levels }
    }

    pub fn min_level(&self, id: &SpeciesId) -> u32 {
        self.min_levels
            .get(id)
            .copied()
            .unwrap_or(Self::DEFAULT_MIN_LEVEL)
    }

    /// Species allowed at `level`, or every species if none qualifies.
    pub fn eligible(&self, level: u32) -> Vec<SpeciesId> {
        let eligible: Vec<SpeciesId> = self
            .min_levels
            .iter()
            .filter(|(_, min_level)| level >= **min_level)
            .map(|(id, _)| id.clone())
            .collect();

        if eligible.is_empty() {
            self.min_levels.keys().cloned().collect()
        } else {
            eligible
        }
    }

    pub fn len(&self) -> usize {
        self.min_levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min_levels.is_empty()
    }
}
