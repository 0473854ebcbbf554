//! Combat resolution.
//!
//! Pure and deterministic: no variance, no critical hits. The battle engine
//! calls [`roll_attack`] for both sides and applies the total itself.

pub mod damage;

pub use damage::{DamageModifier, DamageRoll, calculate_damage, roll_attack};
