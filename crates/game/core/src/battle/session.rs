//! Battle-local state owned for the duration of one battle.

use tracing::info;

use super::phase::{BattleKind, BattlePhase};
use crate::config::{BattleTimings, GameConfig, ItemRules};
use crate::creature::{Creature, CreatureSnapshot};
use crate::env::SpeciesOracle;
use crate::state::{CreatureRecord, Party};

/// One battle between the player's active creature and a single opponent.
///
/// The session exclusively owns both [`Creature`] instances. Party records are
/// only touched through [`BattleEngine`](super::BattleEngine) at checkpoints.
#[derive(Clone, Debug)]
pub struct BattleSession {
    pub(super) kind: BattleKind,
    pub(super) phase: BattlePhase,
    pub(super) timer: f32,
    pub(super) active_index: Option<usize>,
    pub(super) player: Option<Creature>,
    pub(super) opponent: Creature,
    pub(super) log: Vec<String>,
    pub(super) timings: BattleTimings,
    pub(super) items: ItemRules,
    pub(super) exited: bool,
}

impl BattleSession {
    /// Sets up a battle against `opponent`, who always starts at full HP.
    ///
    /// The first party member with HP left becomes the active creature. With
    /// none available the battle opens directly in `LOST`.
    pub fn start(
        party: &Party,
        species: &(impl SpeciesOracle + ?Sized),
        opponent: &CreatureRecord,
        kind: BattleKind,
        config: &GameConfig,
    ) -> Self {
        let mut enemy = Creature::create(opponent, species);
        enemy.set_hp(enemy.max_hp());

        let opening = match kind {
            BattleKind::Wild => format!("A wild {} appeared!", enemy.name()),
            BattleKind::Trainer => "Trainer wants to battle!".to_string(),
        };

        let mut session = Self {
            kind,
            phase: BattlePhase::PlayerTurn,
            timer: 0.0,
            active_index: None,
            player: None,
            opponent: enemy,
            log: vec![opening],
            timings: config.battle,
            items: config.items.clone(),
            exited: false,
        };

        match party.first_conscious() {
            Some(index) => {
                let record = &party.members()[index];
                session.player = Some(Creature::create(record, species));
                session.active_index = Some(index);
            }
            None => {
                session.phase = BattlePhase::Lost;
                session.push_log("You have no energy to fight...");
            }
        }

        info!(
            "Battle started: {} vs {} (Lv.{}), phase {}",
            session.kind,
            session.opponent.name(),
            session.opponent.level(),
            session.phase
        );
        session
    }

    pub fn kind(&self) -> BattleKind {
        self.kind
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Seconds accumulated in the current timed phase.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Party index of the active creature.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn player(&self) -> Option<&Creature> {
        self.player.as_ref()
    }

    pub fn opponent(&self) -> &Creature {
        &self.opponent
    }

    pub fn player_snapshot(&self) -> Option<CreatureSnapshot> {
        self.player.as_ref().map(Creature::snapshot)
    }

    pub fn opponent_snapshot(&self) -> CreatureSnapshot {
        self.opponent.snapshot()
    }

    /// Every log line emitted so far, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The line currently shown in the battle message box.
    pub fn message(&self) -> &str {
        self.log.last().map_or("", String::as_str)
    }

    /// True once the engine has signalled an exit.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub(super) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub(super) fn enter(&mut self, phase: BattlePhase) {
        tracing::debug!("Battle phase {} -> {}", self.phase, phase);
        self.phase = phase;
        self.timer = 0.0;
    }
}
