//! Battle state tags.

/// Who the opponent belongs to.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleKind {
    #[default]
    Wild,
    Trainer,
}

/// Sub-phase of the opponent's turn.
///
/// Guards the opponent so it strikes at most once per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyPhase {
    WaitingToAttack,
    AttackedWaitingToResolve,
}

/// Current state of the battle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn(EnemyPhase),
    Won,
    Lost,
    /// Reserved. No transition enters this phase.
    Running,
}

impl BattlePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerTurn => "PLAYER_TURN",
            Self::EnemyTurn(_) => "ENEMY_TURN",
            Self::Won => "WON",
            Self::Lost => "LOST",
            Self::Running => "RUNNING",
        }
    }

    /// Won or lost; only the end-of-battle delay remains.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_enemy_turn(&self) -> bool {
        matches!(self, Self::EnemyTurn(_))
    }
}

impl core::fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a battle handed control back to the overworld.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleExit {
    Won,
    Lost,
    Fled,
}

/// Returned by every engine call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleSignal {
    Continue,
    Exit(BattleExit),
}

impl BattleSignal {
    pub const fn exit(&self) -> Option<BattleExit> {
        match self {
            Self::Continue => None,
            Self::Exit(exit) => Some(*exit),
        }
    }
}
