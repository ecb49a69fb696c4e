//! Event dispatch and the per-tick combat exchange.

use crate::env::{Activity, Env, MessageKind, RoomOracle, Rgba};
use crate::event::Event;
use crate::ids::EnemyId;
use crate::perk::PerkOutcome;

use super::{Dirty, Dude};

impl Dude {
    /// Raises a room-bound event at the dude.
    ///
    /// Every equipped perk sees the event first. Room events are then
    /// forwarded to `room`; a combat tick with a live enemy runs one attack
    /// exchange instead. The returned activity (if any) must be handled by
    /// the driver.
    pub fn trigger(
        &mut self,
        event: &Event,
        room: &mut dyn RoomOracle,
        env: &mut Env<'_>,
    ) -> Option<Activity> {
        self.activate_perks(event, env);

        match event {
            Event::CombatRoom => {
                if self.is_dead() {
                    return None;
                }
                match self.enemy {
                    Some(enemy) => self.exchange_blows(enemy, room, env),
                    None => room.room_effect(event, self, env),
                }
            }
            Event::EnterRoom | Event::CenterRoom | Event::LeaveRoom => {
                room.room_effect(event, self, env)
            }
            other => {
                self.apply_event(other, env);
                None
            }
        }
    }

    /// Raises an event that needs no room: perks first, then the dude's own
    /// bookkeeping.
    pub fn notify(&mut self, event: &Event, env: &mut Env<'_>) {
        self.activate_perks(event, env);
        self.apply_event(event, env);
    }

    fn activate_perks(&mut self, event: &Event, env: &mut Env<'_>) {
        let outcomes: Vec<PerkOutcome> = self
            .equipped
            .iter_mut()
            .filter_map(|item| item.activate(event))
            .collect();
        for outcome in outcomes {
            tracing::trace!(dude = %self.id, event = %event.kind(), ?outcome, "perk triggered");
            self.apply_perk_outcome(outcome, env);
        }
    }

    fn apply_perk_outcome(&mut self, outcome: PerkOutcome, env: &mut Env<'_>) {
        match outcome {
            PerkOutcome::Heal(amount) => {
                self.heal(amount, env);
            }
            PerkOutcome::Gold(amount) => {
                self.update_gold(amount);
                self.float_text(env, format!("+{amount}gp bonus"), Rgba::GOLD, 40, 0.6);
            }
            PerkOutcome::Xp(amount) => self.add_xp(amount, env),
        }
    }

    fn apply_event(&mut self, event: &Event, env: &mut Env<'_>) {
        match event {
            Event::Equip { equipment } => {
                self.float_text(env, format!("equip {equipment}"), Rgba::EQUIP, 120, 0.4);
                env.message(
                    MessageKind::Neutral,
                    format!("{} equipped {}", self.name, equipment),
                );
                self.dirty |= Dirty::EQUIPMENT | Dirty::STATS;
            }
            Event::Unequip { equipment } => {
                self.float_text(env, format!("remove {equipment}"), Rgba::UNEQUIP, 120, 0.4);
                self.dirty |= Dirty::EQUIPMENT | Dirty::STATS;
            }
            Event::GoldGain { amount } => {
                self.update_gold(*amount);
                self.float_text(env, format!("+{amount}gp"), Rgba::GOLD, 40, 0.6);
            }
            Event::GoldLoss { amount } => {
                self.update_gold(-amount);
                self.float_text(env, format!("-{amount}gp"), Rgba::GOLD_LOSS, 40, 0.4);
            }
            Event::CombatRoom
            | Event::EnterRoom
            | Event::CenterRoom
            | Event::LeaveRoom
            | Event::DudeHit { .. }
            | Event::DudeMiss { .. }
            | Event::DudeCrit { .. }
            | Event::DudeDodge { .. } => {}
        }
    }

    /// One round against the engaged enemy. The dude always strikes first.
    fn exchange_blows(
        &mut self,
        enemy_id: EnemyId,
        room: &mut dyn RoomOracle,
        env: &mut Env<'_>,
    ) -> Option<Activity> {
        let Some(enemy_name) = room.enemy_mut(enemy_id).map(|enemy| enemy.name().to_string())
        else {
            // Stale handle: the enemy is gone.
            self.enemy = None;
            return None;
        };

        let roll = self.roll_attack(env);
        if roll.damage == 0 {
            self.notify(
                &Event::DudeMiss {
                    enemy: enemy_name.clone(),
                },
                env,
            );
            env.message(
                MessageKind::Neutral,
                format!("{} missed their attack against {}!", self.name, enemy_name),
            );
        } else if roll.crit {
            env.message(
                MessageKind::Good,
                format!("{} crit {} for {} damage!", self.name, enemy_name, roll.damage),
            );
            self.notify(
                &Event::DudeCrit {
                    enemy: enemy_name.clone(),
                    amount: roll.damage,
                },
                env,
            );
        }

        let enemy = room.enemy_mut(enemy_id)?;
        let killed = enemy.damage(roll.damage);
        tracing::trace!(
            dude = %self.id,
            enemy = %enemy_name,
            damage = roll.damage,
            crit = roll.crit,
            killed,
            "attack resolved"
        );

        if killed {
            let (xp, gold) = (enemy.xp(), enemy.gold());
            room.remove_enemy(enemy_id);
            self.enemy = None;

            self.notify(&Event::GoldGain { amount: gold }, env);
            self.add_xp(xp, env);
            env.message(
                MessageKind::Good,
                format!(
                    "{} defeated {} and gained {} xp and {} gp",
                    self.name, enemy_name, xp, gold
                ),
            );

            let luck = self.calculated_stats().luck;
            if let Some(loot) = room.roll_loot(luck, env) {
                self.add_to_inventory(loot, env);
            }
            return None;
        }

        let incoming = enemy.hit();
        let taken = self.apply_damage(incoming, env);
        if taken.dodged {
            self.notify(
                &Event::DudeDodge {
                    enemy: enemy_name.clone(),
                },
                env,
            );
            env.message(
                MessageKind::Neutral,
                format!("{} dodged an attack from {}", self.name, enemy_name),
            );
        } else {
            self.notify(
                &Event::DudeHit {
                    amount: taken.amount,
                },
                env,
            );
            if !self.is_dead() {
                env.message(
                    MessageKind::Bad,
                    format!(
                        "{} took {} damage from {}",
                        self.name, taken.amount, enemy_name
                    ),
                );
            }
        }

        if self.is_dead() {
            self.enemy = None;
            return Some(Activity::DudeDied { dude: self.id });
        }
        None
    }
}
