//! The player's party: persistent creature records.
//!
//! Records are the source of truth between battles. A battle works on its own
//! [`Creature`](crate::creature::Creature) instances and writes HP, level and
//! experience back only at checkpoints (switch, flee, faint, battle end).

use crate::creature::stats;
use crate::env::{SpeciesId, SpeciesOracle};

/// Persisted shape of one owned creature: `{species_id, level, exp, hp}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureRecord {
    pub species_id: SpeciesId,
    #[cfg_attr(feature = "serde", serde(default = "CreatureRecord::default_level"))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp: u32,
    /// Current HP. `None` means "never damaged" and resolves to full health.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub hp: Option<u32>,
}

impl CreatureRecord {
    pub const DEFAULT_LEVEL: u32 = 5;

    pub fn new(species_id: impl Into<SpeciesId>, level: u32, exp: u32, hp: u32) -> Self {
        Self {
            species_id: species_id.into(),
            level,
            exp,
            hp: Some(hp),
        }
    }

    /// A fresh, undamaged creature (wild spawns, trainer teams).
    pub fn at_full_health(species_id: impl Into<SpeciesId>, level: u32) -> Self {
        Self {
            species_id: species_id.into(),
            level,
            exp: 0,
            hp: None,
        }
    }

    /// True unless the record has explicitly fainted (hp == 0).
    pub fn is_conscious(&self) -> bool {
        self.hp != Some(0)
    }

    #[cfg(feature = "serde")]
    fn default_level() -> u32 {
        Self::DEFAULT_LEVEL
    }
}

/// Ordered collection of owned creature records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Party {
    members: Vec<CreatureRecord>,
}

impl Party {
    pub fn new(members: Vec<CreatureRecord>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[CreatureRecord] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&CreatureRecord> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CreatureRecord> {
        self.members.get_mut(index)
    }

    pub fn push(&mut self, record: CreatureRecord) {
        self.members.push(record);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First member in party order that can still fight.
    pub fn first_conscious(&self) -> Option<usize> {
        self.members.iter().position(CreatureRecord::is_conscious)
    }

    /// Next conscious member scanning circularly after `current`, never
    /// returning `current` itself.
    pub fn next_conscious_after(&self, current: usize) -> Option<usize> {
        let total = self.members.len();
        (1..total)
            .map(|offset| (current + offset) % total)
            .find(|&index| self.members[index].is_conscious())
    }

    pub fn is_team_alive(&self) -> bool {
        self.first_conscious().is_some()
    }

    /// Restore every member to full HP (the nurse).
    pub fn heal_all(&mut self, species: &(impl SpeciesOracle + ?Sized)) -> String {
        for member in &mut self.members {
            let definition = species.resolve(&member.species_id);
            member.hp = Some(stats::max_hp(definition.base_hp, member.level.max(1)));
        }
        tracing::info!("Nurse healed {} party members", self.members.len());
        "Your monsters are fully healed!".to_string()
    }
}

impl From<Vec<CreatureRecord>> for Party {
    fn from(members: Vec<CreatureRecord>) -> Self {
        Self::new(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ElementType, SpeciesDefinition, SpeciesTable};

    fn party(hps: &[u32]) -> Party {
        hps.iter()
            .map(|&hp| CreatureRecord::new("sproutkit", 5, 0, hp))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn first_conscious_skips_fainted() {
        assert_eq!(party(&[0, 0, 12]).first_conscious(), Some(2));
        assert_eq!(party(&[0, 0]).first_conscious(), None);
        assert!(!party(&[0]).is_team_alive());
    }

    #[test]
    fn next_conscious_wraps_around() {
        let party = party(&[10, 0, 0, 7]);
        assert_eq!(party.next_conscious_after(0), Some(3));
        assert_eq!(party.next_conscious_after(3), Some(0));
    }

    #[test]
    fn next_conscious_never_returns_current() {
        let party = party(&[10, 0]);
        assert_eq!(party.next_conscious_after(0), None);
        assert_eq!(Party::default().next_conscious_after(0), None);
    }

    #[test]
    fn undamaged_records_count_as_conscious() {
        let record = CreatureRecord::at_full_health("emberpup", 3);
        assert!(record.is_conscious());
    }

    #[test]
    fn nurse_restores_formula_max_hp() {
        let species = SpeciesTable::new().with(
            "sproutkit",
            SpeciesDefinition::new("Sproutkit", ElementType::Grass, 50, 10, 10),
        );
        let mut party = party(&[0, 3]);

        let message = party.heal_all(&species);

        assert_eq!(message, "Your monsters are fully healed!");
        // floor(50 * 1.25 + 10) = 72
        assert!(party.members().iter().all(|m| m.hp == Some(72)));
    }
}
