//! Trainer rosters for scripted battles.

use std::collections::BTreeMap;

use super::species::SpeciesId;
use crate::state::CreatureRecord;

/// One creature in a trainer's team.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerMember {
    pub species_id: SpeciesId,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerDefinition {
    pub name: String,
    pub team: Vec<TrainerMember>,
}

impl TrainerDefinition {
    /// The creature sent out first, at full health.
    pub fn lead(&self) -> Option<CreatureRecord> {
        self.team
            .first()
            .map(|member| CreatureRecord::at_full_health(member.species_id.clone(), member.level))
    }
}

pub trait TrainerOracle: Send + Sync {
    fn trainer(&self, id: &str) -> Option<TrainerDefinition>;

    /// Trainer ids in a stable order.
    fn trainer_ids(&self) -> Vec<String>;
}

/// In-memory trainer roster keyed by trainer id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrainerRoster {
    trainers: BTreeMap<String, TrainerDefinition>,
}

impl TrainerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, trainer: TrainerDefinition) {
        self.trainers.insert(id.into(), trainer);
    }

    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }
}

impl TrainerOracle for TrainerRoster {
    fn trainer(&self, id: &str) -> Option<TrainerDefinition> {
        self.trainers.get(id).cloned()
    }

    fn trainer_ids(&self) -> Vec<String> {
        self.trainers.keys().cloned().collect()
    }
}
