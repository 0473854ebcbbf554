use tracing::{debug, warn};

use super::stats::{self, DerivedStats, StatChange};
use crate::env::{ElementType, SpeciesDefinition, SpeciesId, SpeciesOracle};
use crate::state::CreatureRecord;

/// Temporary in-battle stat increases from items.
///
/// Kept apart from [`DerivedStats`] so that derived stats stay a pure function
/// of (species, level). Boosts die with the instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatBoosts {
    pub attack: u32,
    pub defense: u32,
}

/// Read-only view used by health displays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSnapshot {
    pub name: String,
    pub element: ElementType,
    pub level: u32,
    pub exp: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

/// One concrete leveled creature built from a species definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    species_id: SpeciesId,
    species: SpeciesDefinition,
    level: u32,
    exp: u32,
    hp: u32,
    stats: DerivedStats,
    boosts: StatBoosts,
}

impl Creature {
    /// Builds an instance from a persisted record.
    ///
    /// Unknown species resolve to the "Unknown" placeholder. Level is raised to
    /// at least 1, and HP is clamped to `[0, max_hp]` (missing HP means full).
    pub fn create(record: &CreatureRecord, species: &(impl SpeciesOracle + ?Sized)) -> Self {
        let definition = species.resolve(&record.species_id);
        let level = record.level.max(1);
        let stats = DerivedStats::compute(&definition, level);
        let hp = record.hp.unwrap_or(stats.max_hp).min(stats.max_hp);

        Self {
            species_id: record.species_id.clone(),
            species: definition,
            level,
            exp: record.exp,
            hp,
            stats,
            boosts: StatBoosts::default(),
        }
    }

    /// Serializes back to the persisted record shape.
    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord::new(self.species_id.clone(), self.level, self.exp, self.hp)
    }

    /// Resynchronizes a party record with this instance.
    pub fn write_back(&self, record: &mut CreatureRecord) {
        *record = self.to_record();
    }

    pub fn species_id(&self) -> &SpeciesId {
        &self.species_id
    }

    pub fn name(&self) -> &str {
        &self.species.name
    }

    pub fn element(&self) -> ElementType {
        self.species.element
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    /// Effective attack, including item boosts.
    pub fn attack(&self) -> u32 {
        self.stats.attack.saturating_add(self.boosts.attack)
    }

    /// Effective defense, including item boosts.
    pub fn defense(&self) -> u32 {
        self.stats.defense.saturating_add(self.boosts.defense)
    }

    /// Derived stats without boosts.
    pub fn stats(&self) -> DerivedStats {
        self.stats
    }

    pub fn boosts(&self) -> StatBoosts {
        self.boosts
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// `hp = max(0, hp - amount)`.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heal up to `max_hp`. Returns the HP actually recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.stats.max_hp);
        self.hp - before
    }

    /// Set HP directly, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.stats.max_hp);
    }

    pub fn boost_attack(&mut self, amount: u32) {
        self.boosts.attack = self.boosts.attack.saturating_add(amount);
    }

    pub fn boost_defense(&mut self, amount: u32) {
        self.boosts.defense = self.boosts.defense.saturating_add(amount);
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Log order: the gain line, then for each level gained a "grew to" line
    /// followed by any evolution lines for that level.
    pub fn gain_experience(
        &mut self,
        amount: u32,
        species: &(impl SpeciesOracle + ?Sized),
    ) -> Vec<String> {
        self.exp = self.exp.saturating_add(amount);
        let mut logs = vec![format!("Gained {} EXP!", amount)];

        while u64::from(self.exp) >= stats::exp_threshold(self.level) {
            let Some(next) = self.level.checked_add(1) else {
                break;
            };
            logs.extend(self.level_up(next, species));
        }

        logs
    }

    fn level_up(&mut self, level: u32, species: &(impl SpeciesOracle + ?Sized)) -> Vec<String> {
        self.level = level;
        self.recompute_stats();
        debug!("{} reached level {}", self.species.name, self.level);

        let mut logs = vec![format!("{} grew to Lv.{}!", self.species.name, self.level)];
        logs.extend(self.check_evolution(species));
        logs
    }

    fn check_evolution(&mut self, species: &(impl SpeciesOracle + ?Sized)) -> Vec<String> {
        match &self.species.evolution {
            Some(rule) if self.level >= rule.level && !rule.next_id.as_str().is_empty() => {
                let next_id = rule.next_id.clone();
                self.evolve(&next_id, species)
            }
            _ => Vec::new(),
        }
    }

    /// Replaces the species and re-derives stats.
    ///
    /// HP moves by the change in max HP, so the amount of missing HP is
    /// preserved: `new_hp = old_hp + (new_max_hp - old_max_hp)`, floored at 0.
    pub fn evolve(
        &mut self,
        next_id: &SpeciesId,
        species: &(impl SpeciesOracle + ?Sized),
    ) -> Vec<String> {
        let old_name = self.species.name.clone();

        let next = species.definition(next_id).unwrap_or_else(|| {
            warn!(
                "Evolution target '{}' not found, keeping {}'s name and type",
                next_id, old_name
            );
            SpeciesDefinition {
                name: self.species.name.clone(),
                element: self.species.element,
                ..SpeciesDefinition::unknown()
            }
        });

        self.species_id = next_id.clone();
        self.species = next;
        let change = self.recompute_stats();
        let hp = (self.hp as i64 + change.max_hp_delta()).clamp(0, self.stats.max_hp as i64);
        self.hp = hp as u32;

        tracing::info!("{} evolved into {}", old_name, self.species.name);

        vec![
            format!("What? {} is evolving!", old_name),
            format!("Congratulations! Your {}", old_name),
            format!("evolved into {}!", self.species.name),
        ]
    }

    fn recompute_stats(&mut self) -> StatChange {
        let before = self.stats;
        self.stats = DerivedStats::compute(&self.species, self.level);
        StatChange {
            before,
            after: self.stats,
        }
    }

    pub fn snapshot(&self) -> CreatureSnapshot {
        CreatureSnapshot {
            name: self.species.name.clone(),
            element: self.species.element,
            level: self.level,
            exp: self.exp,
            hp: self.hp,
            max_hp: self.stats.max_hp,
            attack: self.attack(),
            defense: self.defense(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SpeciesTable;

    fn species() -> SpeciesTable {
        SpeciesTable::new()
            .with(
                "sproutkit",
                SpeciesDefinition::new("Sproutkit", ElementType::Grass, 50, 10, 10)
                    .with_evolution(3, "bloomcat"),
            )
            .with(
                "bloomcat",
                SpeciesDefinition::new("Bloomcat", ElementType::Grass, 80, 18, 16),
            )
            .with(
                "emberpup",
                SpeciesDefinition::new("Emberpup", ElementType::Fire, 40, 14, 8),
            )
    }

    #[test]
    fn create_clamps_hp_to_max() {
        let creature = Creature::create(&CreatureRecord::new("emberpup", 5, 0, 999), &species());
        // floor(40 × 1.25 + 10) = 60
        assert_eq!(creature.max_hp(), 60);
        assert_eq!(creature.hp(), 60);
    }

    #[test]
    fn create_defaults_missing_hp_to_full() {
        let creature = Creature::create(&CreatureRecord::at_full_health("emberpup", 5), &species());
        assert_eq!(creature.hp(), creature.max_hp());
    }

    #[test]
    fn create_with_unknown_species_uses_placeholder() {
        let creature = Creature::create(&CreatureRecord::new("ghost", 5, 0, 10), &species());
        assert_eq!(creature.name(), "Unknown");
        assert_eq!(creature.element(), ElementType::Grass);
        assert_eq!(creature.max_hp(), 72);
        assert_eq!(creature.species_id().as_str(), "ghost");
    }

    #[test]
    fn level_zero_is_raised_to_one() {
        let creature = Creature::create(&CreatureRecord::new("emberpup", 0, 0, 5), &species());
        assert_eq!(creature.level(), 1);
    }

    #[test]
    fn gain_experience_levels_up_repeatedly() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 1, 0, 10), &db);

        let logs = creature.gain_experience(10, &db);

        assert_eq!(creature.level(), 3);
        assert_eq!(creature.exp(), 10);
        assert_eq!(
            logs,
            vec![
                "Gained 10 EXP!".to_string(),
                "Emberpup grew to Lv.2!".to_string(),
                "Emberpup grew to Lv.3!".to_string(),
            ]
        );
        assert_eq!(creature.stats(), DerivedStats::compute(&db.resolve(&"emberpup".into()), 3));
    }

    #[test]
    fn gain_below_threshold_only_logs_gain() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 1, 0, 10), &db);

        assert_eq!(creature.gain_experience(3, &db), vec!["Gained 3 EXP!".to_string()]);
        assert_eq!(creature.level(), 1);
    }

    #[test]
    fn huge_gain_stops_where_the_curve_outgrows_experience() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 1, 0, 10), &db);

        let logs = creature.gain_experience(u32::MAX, &db);

        // 65535² <= u32::MAX < 65536²
        assert_eq!(creature.level(), 65_535);
        assert_eq!(creature.exp(), u32::MAX);
        assert_eq!(logs.len(), 65_535);
        assert_eq!(logs.last().map(String::as_str), Some("Emberpup grew to Lv.65535!"));
    }

    #[test]
    fn gain_at_top_level_never_overflows() {
        let db = species();
        let mut creature =
            Creature::create(&CreatureRecord::new("emberpup", u32::MAX - 2, 0, 1), &db);

        let logs = creature.gain_experience(u32::MAX, &db);

        assert_eq!(creature.level(), u32::MAX - 2);
        assert_eq!(logs, vec![format!("Gained {} EXP!", u32::MAX)]);
    }

    #[test]
    fn level_up_triggers_evolution_in_order() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("sproutkit", 2, 0, 20), &db);

        let logs = creature.gain_experience(9, &db);

        assert_eq!(
            logs,
            vec![
                "Gained 9 EXP!".to_string(),
                "Sproutkit grew to Lv.3!".to_string(),
                "What? Sproutkit is evolving!".to_string(),
                "Congratulations! Your Sproutkit".to_string(),
                "evolved into Bloomcat!".to_string(),
            ]
        );
        assert_eq!(creature.species_id().as_str(), "bloomcat");
        assert_eq!(creature.name(), "Bloomcat");
    }

    #[test]
    fn evolution_preserves_missing_hp() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("sproutkit", 5, 0, 30), &db);
        let old_max = creature.max_hp();
        let old_hp = creature.hp();

        creature.evolve(&"bloomcat".into(), &db);

        let new_max = creature.max_hp();
        assert_eq!(creature.hp() as i64, old_hp as i64 + new_max as i64 - old_max as i64);
        assert_eq!(new_max - creature.hp(), old_max - old_hp);
    }

    #[test]
    fn evolution_to_weaker_species_never_goes_negative() {
        let db = species().with(
            "husk",
            SpeciesDefinition::new("Husk", ElementType::Grass, 1, 1, 1),
        );
        let mut creature = Creature::create(&CreatureRecord::new("bloomcat", 10, 0, 3), &db);

        creature.evolve(&"husk".into(), &db);

        assert_eq!(creature.hp(), 0);
    }

    #[test]
    fn evolution_into_missing_species_keeps_identity() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 5, 0, 60), &db);

        let logs = creature.evolve(&"missing".into(), &db);

        assert_eq!(logs[2], "evolved into Emberpup!");
        assert_eq!(creature.element(), ElementType::Fire);
        assert_eq!(creature.species_id().as_str(), "missing");
    }

    #[test]
    fn take_damage_never_underflows() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 5, 0, 20), &db);

        creature.take_damage(0);
        assert_eq!(creature.hp(), 20);

        creature.take_damage(u32::MAX);
        assert_eq!(creature.hp(), 0);
        assert!(creature.is_fainted());
    }

    #[test]
    fn boosts_do_not_touch_derived_stats() {
        let db = species();
        let mut creature = Creature::create(&CreatureRecord::new("emberpup", 5, 0, 20), &db);
        let base = creature.stats();

        creature.boost_attack(10);
        creature.boost_defense(10);

        assert_eq!(creature.stats(), base);
        assert_eq!(creature.attack(), base.attack + 10);
        assert_eq!(creature.defense(), base.defense + 10);
    }

    #[test]
    fn record_round_trip_keeps_progress() {
        let db = species();
        let record = CreatureRecord::new("emberpup", 7, 55, 12);
        assert_eq!(Creature::create(&record, &db).to_record(), record);
    }
}
