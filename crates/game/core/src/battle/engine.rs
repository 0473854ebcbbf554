//! Turn resolution for a [`BattleSession`].

use tracing::{debug, info};

use super::action::{BattleAction, BattleItem};
use super::errors::BattleError;
use super::phase::{BattleExit, BattleKind, BattlePhase, BattleSignal, EnemyPhase};
use super::session::BattleSession;
use crate::combat::roll_attack;
use crate::creature::Creature;
use crate::env::SpeciesOracle;
use crate::error::GameError;
use crate::state::{Inventory, Party};

/// Drives one battle session against the shared party and inventory.
///
/// Player commands go through [`execute`](Self::execute); time advances only
/// through [`update`](Self::update), called once per frame. Party records are
/// written at switch-out, flee, faint, enemy-turn resolution and battle end.
pub struct BattleEngine<'a> {
    session: &'a mut BattleSession,
    party: &'a mut Party,
    inventory: &'a mut Inventory,
    species: &'a dyn SpeciesOracle,
}

impl<'a> BattleEngine<'a> {
    pub fn new(
        session: &'a mut BattleSession,
        party: &'a mut Party,
        inventory: &'a mut Inventory,
        species: &'a dyn SpeciesOracle,
    ) -> Self {
        Self {
            session,
            party,
            inventory,
            species,
        }
    }

    /// Applies a player command.
    ///
    /// A rejected command leaves the phase unchanged. Recoverable rejections
    /// are also pushed to the battle log so the player sees why.
    pub fn execute(&mut self, action: BattleAction) -> Result<BattleSignal, BattleError> {
        let result = self.dispatch(action);

        if let Err(error) = &result {
            debug!("Battle action '{}' rejected: {}", action, error.error_code());
            if error.severity().is_recoverable() {
                self.session.push_log(error.to_string());
            }
        }
        result
    }

    /// Advances timers by `delta` seconds.
    pub fn update(&mut self, delta: f32) -> BattleSignal {
        if self.session.exited {
            return BattleSignal::Continue;
        }

        match self.session.phase {
            BattlePhase::PlayerTurn | BattlePhase::Running => BattleSignal::Continue,
            BattlePhase::EnemyTurn(sub) => {
                self.process_enemy_turn(delta, sub);
                BattleSignal::Continue
            }
            BattlePhase::Won | BattlePhase::Lost => {
                self.session.timer += delta;
                if self.session.timer <= self.session.timings.battle_end_delay {
                    return BattleSignal::Continue;
                }

                self.write_back_player();
                self.session.exited = true;
                let exit = if self.session.phase == BattlePhase::Won {
                    BattleExit::Won
                } else {
                    BattleExit::Lost
                };
                info!("Battle ended: {}", exit);
                BattleSignal::Exit(exit)
            }
        }
    }

    fn dispatch(&mut self, action: BattleAction) -> Result<BattleSignal, BattleError> {
        if self.session.exited {
            return Err(BattleError::Finished);
        }

        match self.session.phase {
            BattlePhase::PlayerTurn => {}
            BattlePhase::Won | BattlePhase::Lost => return Err(BattleError::Finished),
            phase => return Err(BattleError::NotPlayerTurn { phase }),
        }

        match action {
            BattleAction::Fight => self.fight(),
            BattleAction::Catch => self.catch(),
            BattleAction::Switch => self.switch(),
            BattleAction::UseItem(item) => self.use_item(item),
            BattleAction::Run => {
                self.write_back_player();
                self.session.exited = true;
                info!("Player fled the battle");
                return Ok(BattleSignal::Exit(BattleExit::Fled));
            }
        }?;

        Ok(BattleSignal::Continue)
    }

    fn fight(&mut self) -> Result<(), BattleError> {
        let session = &mut *self.session;
        let player = session
            .player
            .as_ref()
            .ok_or(BattleError::NoActiveCreature)?;

        let roll = roll_attack(player, &session.opponent);
        session.opponent.take_damage(roll.total);
        debug!(
            "{} hit {} for {} ({} HP left)",
            player.name(),
            session.opponent.name(),
            roll.total,
            session.opponent.hp()
        );
        session.push_log(format!("You dealt {} damage!", roll));

        if session.opponent.is_fainted() {
            let line = format!("You defeated {}!", session.opponent.name());
            session.push_log(line);
            info!("Opponent {} defeated", session.opponent.name());
            session.enter(BattlePhase::Won);
        } else {
            session.enter(BattlePhase::EnemyTurn(EnemyPhase::WaitingToAttack));
        }
        Ok(())
    }

    fn catch(&mut self) -> Result<(), BattleError> {
        if self.session.kind == BattleKind::Trainer {
            return Err(BattleError::CannotCatchTrainer);
        }

        let capture = self.session.items.capture_item.clone();
        if self.inventory.consume(&capture).is_err() {
            return Err(BattleError::NoCaptureItem { item: capture });
        }

        let caught = self.session.opponent.to_record();
        let name = self.session.opponent.name().to_string();
        self.party.push(caught);
        info!(
            "Caught {} ({} left: {})",
            name,
            capture,
            self.inventory.count(&capture)
        );

        self.session.push_log(format!("Gotcha! {} was caught!", name));
        self.session.enter(BattlePhase::Won);
        Ok(())
    }

    fn switch(&mut self) -> Result<(), BattleError> {
        let current = self
            .session
            .active_index
            .ok_or(BattleError::NoActiveCreature)?;
        let next = self
            .party
            .next_conscious_after(current)
            .ok_or(BattleError::NoSwitchTarget)?;

        self.switch_to(next);
        self.session
            .enter(BattlePhase::EnemyTurn(EnemyPhase::WaitingToAttack));
        Ok(())
    }

    fn use_item(&mut self, item: BattleItem) -> Result<(), BattleError> {
        let session = &mut *self.session;
        let player = session
            .player
            .as_mut()
            .ok_or(BattleError::NoActiveCreature)?;

        let rules = &session.items;
        self.inventory.consume(item.item_name(rules))?;

        let line = match item {
            BattleItem::Heal => {
                let recovered = player.heal(rules.heal_amount);
                format!("Used Healing Potion! Recovered {} HP.", recovered)
            }
            BattleItem::Strength => {
                player.boost_attack(rules.attack_boost);
                format!("Used Strength Potion! Attack rose by {}!", rules.attack_boost)
            }
            BattleItem::Defense => {
                player.boost_defense(rules.defense_boost);
                format!("Used Defense Potion! Defense rose by {}!", rules.defense_boost)
            }
        };
        debug!("Used {} on {}", item.item_name(rules), player.name());

        session.push_log(line);
        session.enter(BattlePhase::EnemyTurn(EnemyPhase::WaitingToAttack));
        Ok(())
    }

    fn process_enemy_turn(&mut self, delta: f32, sub: EnemyPhase) {
        let session = &mut *self.session;
        session.timer += delta;

        if sub == EnemyPhase::WaitingToAttack && session.timer > session.timings.turn_delay_attack {
            if let Some(player) = session.player.as_mut().filter(|p| !p.is_fainted()) {
                let roll = roll_attack(&session.opponent, player);
                player.take_damage(roll.total);
                debug!(
                    "{} hit {} for {} ({} HP left)",
                    session.opponent.name(),
                    player.name(),
                    roll.total,
                    player.hp()
                );
                let line = format!("{} attacked! {} dmg", session.opponent.name(), roll);
                session.log.push(line);
            }
            session.phase = BattlePhase::EnemyTurn(EnemyPhase::AttackedWaitingToResolve);
        }

        if session.timer > session.timings.turn_delay_end {
            self.resolve_enemy_turn();
        }
    }

    fn resolve_enemy_turn(&mut self) {
        let fainted = self.session.player.as_ref().is_none_or(Creature::is_fainted);
        self.write_back_player();

        if !fainted {
            self.session.enter(BattlePhase::PlayerTurn);
            return;
        }

        let next = self
            .session
            .active_index
            .and_then(|current| self.party.next_conscious_after(current));

        match next {
            Some(index) => {
                self.switch_to(index);
                self.session.enter(BattlePhase::PlayerTurn);
            }
            None => {
                info!("Party wiped out");
                self.session.push_log("You fainted...");
                self.session.enter(BattlePhase::Lost);
            }
        }
    }

    /// Writes the outgoing creature back, then brings in `index`.
    fn switch_to(&mut self, index: usize) {
        self.write_back_player();

        let Some(record) = self.party.get(index) else {
            return;
        };
        let incoming = Creature::create(record, self.species);
        info!("Switched to {} (party slot {})", incoming.name(), index);

        self.session.push_log(format!("Go! {}!", incoming.name()));
        self.session.player = Some(incoming);
        self.session.active_index = Some(index);
    }

    fn write_back_player(&mut self) {
        let (Some(index), Some(player)) = (self.session.active_index, &self.session.player) else {
            return;
        };
        if let Some(record) = self.party.get_mut(index) {
            player.write_back(record);
        }
    }
}
