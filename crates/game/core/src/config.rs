//! Game configuration constants and tunable parameters.
//!
//! Every section has a `Default` built from the `DEFAULT_*` constants, and
//! every field is optional when loaded from `config.toml`.

/// Top-level tunables grouped by subsystem.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub battle: BattleTimings,
    pub items: ItemRules,
    pub navigation: SearchLimits,
    pub encounter: EncounterRules,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Delays (in seconds of accumulated frame time) driving the battle state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleTimings {
    /// Time the opponent "thinks" before striking.
    pub turn_delay_attack: f32,
    /// Total enemy turn length before control returns to the player.
    pub turn_delay_end: f32,
    /// Pause on a won/lost screen before the battle exits.
    pub battle_end_delay: f32,
}

impl BattleTimings {
    pub const DEFAULT_TURN_DELAY_ATTACK: f32 = 1.0;
    pub const DEFAULT_TURN_DELAY_END: f32 = 2.0;
    pub const DEFAULT_BATTLE_END_DELAY: f32 = 2.0;
}

impl Default for BattleTimings {
    fn default() -> Self {
        Self {
            turn_delay_attack: Self::DEFAULT_TURN_DELAY_ATTACK,
            turn_delay_end: Self::DEFAULT_TURN_DELAY_END,
            battle_end_delay: Self::DEFAULT_BATTLE_END_DELAY,
        }
    }
}

/// Item names as they appear in the inventory, and the fixed effect sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRules {
    pub heal_amount: u32,
    pub attack_boost: u32,
    pub defense_boost: u32,
    pub heal_item: String,
    pub attack_item: String,
    pub defense_item: String,
    pub capture_item: String,
    pub currency_item: String,
}

impl ItemRules {
    pub const DEFAULT_HEAL_AMOUNT: u32 = 50;
    pub const DEFAULT_ATTACK_BOOST: u32 = 10;
    pub const DEFAULT_DEFENSE_BOOST: u32 = 10;
    pub const DEFAULT_HEAL_ITEM: &'static str = "Heal Potion";
    pub const DEFAULT_ATTACK_ITEM: &'static str = "Strength Potion";
    pub const DEFAULT_DEFENSE_ITEM: &'static str = "Defense Potion";
    pub const DEFAULT_CAPTURE_ITEM: &'static str = "Pokeball";
    pub const DEFAULT_CURRENCY_ITEM: &'static str = "Coins";
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
            attack_boost: Self::DEFAULT_ATTACK_BOOST,
            defense_boost: Self::DEFAULT_DEFENSE_BOOST,
            heal_item: Self::DEFAULT_HEAL_ITEM.to_string(),
            attack_item: Self::DEFAULT_ATTACK_ITEM.to_string(),
            defense_item: Self::DEFAULT_DEFENSE_ITEM.to_string(),
            capture_item: Self::DEFAULT_CAPTURE_ITEM.to_string(),
            currency_item: Self::DEFAULT_CURRENCY_ITEM.to_string(),
        }
    }
}

/// Safety bounds for the breadth-first pathfinder.
///
/// `max_coordinate` bounds both axes to `0..=max_coordinate`; it is not the
/// real map size. `max_expansions` caps the number of dequeued cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    pub max_coordinate: i32,
    pub max_expansions: usize,
}

impl SearchLimits {
    pub const DEFAULT_MAX_COORDINATE: i32 = 100;
    pub const DEFAULT_MAX_EXPANSIONS: usize = 3000;
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_coordinate: Self::DEFAULT_MAX_COORDINATE,
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// Level range for randomly generated wild encounters (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterRules {
    pub min_level: u32,
    pub max_level: u32,
}

impl EncounterRules {
    pub const DEFAULT_MIN_LEVEL: u32 = 2;
    pub const DEFAULT_MAX_LEVEL: u32 = 40;
}

impl Default for EncounterRules {
    fn default() -> Self {
        Self {
            min_level: Self::DEFAULT_MIN_LEVEL,
            max_level: Self::DEFAULT_MAX_LEVEL,
        }
    }
}
