//! Derived stats - pure functions of (species base stats, level).
//!
//! Formulas:
//! - max_hp  = floor(base_hp  × (1 + level × 0.05) + level × 2)
//! - attack  = floor(base_atk × (1 + level × 0.05) + level × 0.5)
//! - defense = floor(base_def × (1 + level × 0.05) + level × 0.5)
//!
//! Evaluated in `f64` with the same operation order, so values that land just
//! under an integer (e.g. `50 × 1.15 + 1.5 = 58.99999999999999`) floor to
//! the integer below.

use crate::env::SpeciesDefinition;

/// Maximum HP for a base value at a level.
pub fn max_hp(base_hp: u32, level: u32) -> u32 {
    scaled(base_hp, level, 2.0)
}

/// Attack for a base value at a level.
pub fn attack(base_attack: u32, level: u32) -> u32 {
    scaled(base_attack, level, 0.5)
}

/// Defense for a base value at a level.
pub fn defense(base_defense: u32, level: u32) -> u32 {
    scaled(base_defense, level, 0.5)
}

/// Cumulative experience needed to advance past `level`: (level + 1)².
///
/// Computed in `u64`, so it stays above any `u32` experience total once
/// `level >= 65535`.
pub fn exp_threshold(level: u32) -> u64 {
    let next = u64::from(level) + 1;
    next.saturating_mul(next)
}

/// `floor(base × (1 + level × 0.05) + level × per_level)`, saturating to `u32`.
fn scaled(base: u32, level: u32, per_level: f64) -> u32 {
    let level = f64::from(level);
    let value = f64::from(base) * (1.0 + level * 0.05) + level * per_level;
    // float-to-int `as` saturates at the bounds
    value.floor() as u32
}

/// Stats derived from a species at a level. Never edited independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl DerivedStats {
    pub fn compute(species: &SpeciesDefinition, level: u32) -> Self {
        Self {
            max_hp: max_hp(species.base_hp, level),
            attack: attack(species.base_attack, level),
            defense: defense(species.base_defense, level),
        }
    }
}

/// Before/after pair produced whenever level or species changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatChange {
    pub before: DerivedStats,
    pub after: DerivedStats,
}

impl StatChange {
    /// Signed change in maximum HP.
    pub fn max_hp_delta(&self) -> i64 {
        self.after.max_hp as i64 - self.before.max_hp as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_hp_matches_reference_value() {
        // floor(50 × 1.25 + 10) = floor(72.5) = 72
        assert_eq!(max_hp(50, 5), 72);
        // floor(45 × 1.05 + 2) = floor(49.25) = 49
        assert_eq!(max_hp(45, 1), 49);
    }

    #[test]
    fn attack_and_defense_floor_half_levels() {
        // floor(10 × 1.15 + 1.5) = floor(13.0) = 13
        assert_eq!(attack(10, 3), 13);
        // floor(12 × 1.25 + 2.5) = floor(17.5) = 17
        assert_eq!(defense(12, 5), 17);
    }

    #[test]
    fn rounding_follows_double_precision() {
        // 50 × 1.15 + 1.5 evaluates to 58.99999999999999
        assert_eq!(attack(50, 3), 58);
        assert_eq!(attack(45, 72), 242);
        assert_eq!(defense(50, 21), 112);
    }

    #[test]
    fn huge_inputs_saturate() {
        assert_eq!(max_hp(u32::MAX, u32::MAX), u32::MAX);
        assert_eq!(exp_threshold(65_535), 1u64 << 32);
        assert!(exp_threshold(65_535) > u64::from(u32::MAX));
        assert_eq!(exp_threshold(u32::MAX), u64::MAX);
    }

    #[test]
    fn max_hp_is_monotonic_in_level() {
        for base in [1, 30, 50, 97] {
            let mut previous = max_hp(base, 1);
            for level in 2..=100 {
                let current = max_hp(base, level);
                assert!(current >= previous, "base {base} level {level}");
                previous = current;
            }
        }
    }

    #[test]
    fn thresholds_follow_square_curve() {
        assert_eq!(exp_threshold(1), 4);
        assert_eq!(exp_threshold(2), 9);
        assert_eq!(exp_threshold(3), 16);
    }
}
