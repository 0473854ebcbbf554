//! Turn-based battle state machine.
//!
//! ```text
//!              fight / switch / item             timer > turn_delay_end
//! PLAYER_TURN ───────────────────────> ENEMY_TURN ───────────────────────> PLAYER_TURN
//!     │  fight (opponent at 0 HP), catch               │ player fainted, nobody left
//!     ▼                                                ▼
//!    WON ── timer > battle_end_delay ──> exit        LOST ── ... ──> exit
//! ```
//!
//! `run` exits immediately from `PLAYER_TURN`. The enemy turn is split into
//! [`EnemyPhase::WaitingToAttack`] and [`EnemyPhase::AttackedWaitingToResolve`]
//! so the opponent strikes exactly once.
mod action;
mod engine;
mod errors;
mod phase;
mod session;

pub use action::{BattleAction, BattleItem};
pub use engine::BattleEngine;
pub use errors::BattleError;
pub use phase::{BattleExit, BattleKind, BattlePhase, BattleSignal, EnemyPhase};
pub use session::BattleSession;
