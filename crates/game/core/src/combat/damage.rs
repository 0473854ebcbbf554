//! Damage calculation.

use core::fmt;

use crate::creature::Creature;
use crate::env::ElementType;

/// Type-matchup adjustment applied on top of the base damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageModifier {
    /// Attacker's type beats the defender's.
    Bonus(u32),
    /// Defender's type beats the attacker's.
    Reduction(u32),
    /// No matchup relation.
    Neutral,
}

/// Result of one attack, kept split so the log can show the breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    pub base: u32,
    pub modifier: DamageModifier,
    pub total: u32,
}

/// Renders as `"15 ( + 7 )"`, `"15 ( - 7 )"` or `"15 ( + 0 )"`.
impl fmt::Display for DamageRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            DamageModifier::Bonus(bonus) => write!(f, "{} ( + {} )", self.base, bonus),
            DamageModifier::Reduction(reduction) => {
                write!(f, "{} ( - {} )", self.base, reduction)
            }
            DamageModifier::Neutral => write!(f, "{} ( + 0 )", self.base),
        }
    }
}

/// Calculate damage from raw stats and types.
///
/// # Formula
///
/// ```text
/// base = max(1, attack - defense)
/// attacker has advantage: total = base + max(1, floor(base / 2))
/// defender has advantage: total = base - floor(base / 2)
/// otherwise:              total = base
/// ```
///
/// The reduction branch is not floored at 1. With `base >= 1` it cannot reach
/// 0 anyway, since `base - floor(base / 2) >= 1`.
pub fn calculate_damage(
    attack: u32,
    attacker_type: ElementType,
    defense: u32,
    defender_type: ElementType,
) -> DamageRoll {
    let base = attack.saturating_sub(defense).max(1);

    let modifier = if attacker_type.beats(defender_type) {
        DamageModifier::Bonus((base / 2).max(1))
    } else if defender_type.beats(attacker_type) {
        DamageModifier::Reduction(base / 2)
    } else {
        DamageModifier::Neutral
    };

    let total = match modifier {
        DamageModifier::Bonus(bonus) => base.saturating_add(bonus),
        DamageModifier::Reduction(reduction) => base - reduction,
        DamageModifier::Neutral => base,
    };

    DamageRoll {
        base,
        modifier,
        total,
    }
}

/// Damage `attacker` would deal to `defender` using effective (boosted) stats.
pub fn roll_attack(attacker: &Creature, defender: &Creature) -> DamageRoll {
    calculate_damage(
        attacker.attack(),
        attacker.element(),
        defender.defense(),
        defender.element(),
    )
}
