//! Error types for rejected battle actions.

use super::phase::BattlePhase;
use crate::error::{ErrorSeverity, GameError};
use crate::state::InventoryError;

/// Reasons a battle action was refused. The session state is left untouched.
///
/// Recoverable variants carry the user-facing text shown in the battle log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("not the player's turn (phase {phase})")]
    NotPlayerTurn { phase: BattlePhase },

    #[error("battle already finished")]
    Finished,

    #[error("no active creature")]
    NoActiveCreature,

    #[error("You don't have any {item}s!")]
    NoCaptureItem { item: String },

    #[error("You can't catch a trainer's monster!")]
    CannotCatchTrainer,

    #[error("No other monster available!")]
    NoSwitchTarget,

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotPlayerTurn { .. } | Self::Finished | Self::NoActiveCreature => {
                ErrorSeverity::Validation
            }
            Self::NoCaptureItem { .. } | Self::CannotCatchTrainer | Self::NoSwitchTarget => {
                ErrorSeverity::Recoverable
            }
            Self::Inventory(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlayerTurn { .. } => "BATTLE_NOT_PLAYER_TURN",
            Self::Finished => "BATTLE_FINISHED",
            Self::NoActiveCreature => "BATTLE_NO_ACTIVE_CREATURE",
            Self::NoCaptureItem { .. } => "BATTLE_NO_CAPTURE_ITEM",
            Self::CannotCatchTrainer => "BATTLE_CANNOT_CATCH_TRAINER",
            Self::NoSwitchTarget => "BATTLE_NO_SWITCH_TARGET",
            Self::Inventory(error) => error.error_code(),
        }
    }
}
