//! Experience, healing, gold, and gear management.

use crate::env::{Env, MessageKind, Rgba, RngOracle};
use crate::equipment::{Equipment, EquipmentKind, Quality};
use crate::event::Event;
use crate::perk::{PerkQuality, random_perk};

use super::{Dirty, Dude};

impl Dude {
    /// Adds experience. Crossing the threshold grants exactly one level and
    /// keeps the remainder.
    pub fn add_xp(&mut self, xp: i32, env: &mut Env<'_>) {
        self.xp += xp;
        let next = self.next_level_xp(env.config());
        if self.xp >= next {
            self.xp -= next;
            self.stats.level_up(false);
            self.float_text(env, "LEVEL UP", Rgba::LEVEL_UP, 80, 1.0);
            env.message(
                MessageKind::Good,
                format!("{} leveled up to level {}", self.name, self.level()),
            );
            tracing::info!(dude = %self.id, level = self.level(), "level up");
        } else {
            self.float_text(env, format!("+{xp}xp"), Rgba::XP, 50, 1.0);
        }
        self.dirty |= Dirty::STATS;
    }

    /// Heals by `amount * (wisdom / 10 + 1)`, capped at total hp.
    ///
    /// Returns the hit points actually restored. Dead dudes cannot be
    /// healed.
    pub fn heal(&mut self, amount: i32, env: &mut Env<'_>) -> i32 {
        if self.is_dead() {
            return 0;
        }
        let stats = self.calculated_stats();
        let before = self.stats.current_hp;
        let scaled = amount.max(0).saturating_mul(stats.wisdom / 10 + 1);
        self.stats.current_hp = before.saturating_add(scaled).min(stats.total_hp);
        let healed = self.stats.current_hp - before;

        if healed > 0 {
            self.float_text(env, format!("+{healed}"), Rgba::HEAL, 40, 0.5);
            env.message(
                MessageKind::Neutral,
                format!("{} healed for {}", self.name, healed),
            );
            self.dirty |= Dirty::STATS;
        }
        healed
    }

    /// Heals to full. Never resurrects.
    pub fn full_heal(&mut self, env: &mut Env<'_>) {
        if self.is_dead() {
            return;
        }
        let total = self.calculated_stats().total_hp;
        self.heal(total, env);
    }

    /// Adds (or with a negative amount removes) gold, never going below 0.
    pub fn update_gold(&mut self, amount: i32) {
        self.gold = self.gold.saturating_add(amount).max(0);
    }

    /// Hands over all carried gold.
    pub fn take_gold(&mut self) -> i32 {
        std::mem::take(&mut self.gold)
    }

    /// Hands over the whole inventory.
    pub fn take_inventory(&mut self) -> Vec<Equipment> {
        self.dirty |= Dirty::EQUIPMENT;
        std::mem::take(&mut self.inventory)
    }

    /// Whether the dude's profession may wear `item`.
    pub fn can_equip(&self, item: &Equipment) -> bool {
        item.allows(self.profession)
    }

    /// Whether `candidate` should replace what is worn in its slot.
    ///
    /// The candidate must be wearable and rank strictly higher. A worn perk
    /// is only given up for a candidate with the same perk at equal or
    /// better quality.
    pub fn should_equip(&self, candidate: &Equipment) -> bool {
        if !self.can_equip(candidate) {
            return false;
        }
        let Some(current) = self.equipped.get(candidate.kind()) else {
            return true;
        };
        if candidate.level_with_quality() <= current.level_with_quality() {
            return false;
        }
        match (current.perk(), candidate.perk()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(held), Some(offered)) => {
                held.name() == offered.name() && offered.quality() >= held.quality()
            }
        }
    }

    /// Wears `item`, returning whatever it displaced.
    pub fn equip(&mut self, item: Equipment, env: &mut Env<'_>) -> Option<Equipment> {
        let displaced = self.unequip(item.kind(), env);
        let name = item.display_name();
        self.equipped.insert(item);
        self.notify(&Event::Equip { equipment: name }, env);
        displaced
    }

    /// Takes off whatever is worn in `kind`.
    pub fn unequip(&mut self, kind: EquipmentKind, env: &mut Env<'_>) -> Option<Equipment> {
        let item = self.equipped.take(kind)?;
        self.notify(
            &Event::Unequip {
                equipment: item.display_name(),
            },
            env,
        );
        Some(item)
    }

    /// Moves the inventory item at `index` into its slot. The displaced item
    /// goes back into the inventory.
    pub fn equip_from_inventory(&mut self, index: usize, env: &mut Env<'_>) -> bool {
        if index >= self.inventory.len() {
            return false;
        }
        let item = self.inventory.remove(index);
        if let Some(displaced) = self.equip(item, env) {
            self.inventory.push(displaced);
        }
        true
    }

    /// Stores `item` and then decides whether to wear it.
    pub fn add_to_inventory(&mut self, item: Equipment, env: &mut Env<'_>) {
        let wear = self.should_equip(&item);
        let label = item.display_name();
        self.inventory.push(item);
        self.dirty |= Dirty::EQUIPMENT;

        if wear {
            let index = self.inventory.len() - 1;
            self.equip_from_inventory(index, env);
        } else {
            self.float_text(env, format!("+{label}"), Rgba::LOOT, 100, 1.0);
        }
    }

    /// Refills perk uses on every worn item. Silent when nothing changed.
    pub fn restore_uses(&mut self, env: &mut Env<'_>) -> bool {
        let mut restored = false;
        for item in self.equipped.iter_mut() {
            restored |= item.restore_uses();
        }
        if restored {
            self.float_text(env, "+eq restore", Rgba::RESTORE, 40, 0.5);
            env.message(
                MessageKind::Neutral,
                format!("{} restored equipment uses", self.name),
            );
            self.dirty |= Dirty::EQUIPMENT;
        }
        restored
    }

    /// A uniformly chosen occupied slot.
    pub fn random_equipped_kind(&self, rng: &mut dyn RngOracle) -> Option<EquipmentKind> {
        let kinds = self.equipped.occupied_kinds();
        if kinds.is_empty() {
            return None;
        }
        Some(kinds[rng.below(kinds.len() as u32) as usize])
    }

    /// Levels a random worn item `amount` times, never past `max_quality`.
    pub fn level_up_equipment(
        &mut self,
        amount: u32,
        max_quality: Quality,
        env: &mut Env<'_>,
    ) -> bool {
        let Some(kind) = self.random_equipped_kind(env.rng()) else {
            return false;
        };
        let Some(item) = self.equipped.get_mut(kind) else {
            return false;
        };

        let mut leveled = false;
        for _ in 0..amount {
            leveled |= item.level_up_capped(max_quality);
        }
        if !leveled {
            return false;
        }

        let label = item.display_name();
        self.float_text(env, format!("+eq up {amount}"), Rgba::UPGRADE, 50, 0.5);
        env.message(
            MessageKind::Loot,
            format!("{} leveled up {} by {}", self.name, label, amount),
        );
        self.dirty |= Dirty::EQUIPMENT | Dirty::STATS;
        true
    }

    /// Gives a random worn item a Trash perk, or levels its existing perk.
    pub fn perkify(&mut self, max_quality: PerkQuality, env: &mut Env<'_>) -> bool {
        let Some(kind) = self.random_equipped_kind(env.rng()) else {
            return false;
        };
        let has_perk = self
            .equipped
            .get(kind)
            .is_some_and(|item| item.perk().is_some());

        if !has_perk {
            let perk = random_perk(PerkQuality::Trash, env.rng());
            let Some(item) = self.equipped.get_mut(kind) else {
                return false;
            };
            let label = item.display_name();
            let perk_name = perk.name();
            item.set_perk(perk);
            self.float_text(
                env,
                format!("+{label} perk {perk_name}"),
                Rgba::PERK,
                100,
                0.5,
            );
            env.message(
                MessageKind::Loot,
                format!("{} upgraded {} with {}", self.name, label, perk_name),
            );
            self.dirty |= Dirty::EQUIPMENT;
            return true;
        }

        let Some(item) = self.equipped.get_mut(kind) else {
            return false;
        };
        let label = item.display_name();
        let Some(perk) = item.perk_mut() else {
            return false;
        };
        let before = perk.quality();
        perk.level_up(max_quality);
        let after = perk.quality();
        if after == before {
            return false;
        }
        let perk_name = perk.name();
        self.float_text(
            env,
            format!("+eq {label} {perk_name} upgrade to {after}"),
            Rgba::PERK,
            100,
            0.5,
        );
        env.message(
            MessageKind::Loot,
            format!(
                "{} upgraded {} {} to {}",
                self.name, label, perk_name, after
            ),
        );
        self.dirty |= Dirty::EQUIPMENT;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::env::MessageKind;
    use crate::equipment::{EquipmentKind, EquipmentOracle, Quality};
    use crate::perk::{Nimble, PerkQuality, Prospector};
    use crate::profession::ProfessionKind;
    use crate::test_support::{Harness, ScriptedRng, dude_of, knight, starter_catalog};

    #[test]
    fn xp_overflow_levels_once_and_keeps_remainder() {
        let mut dude = knight(1);
        let mut harness = Harness::new(ScriptedRng::default());
        dude.add_xp(130, &mut harness.env());
        assert_eq!(dude.level(), 2);
        assert_eq!(dude.xp(), 80);
        dude.add_xp(30, &mut harness.env());
        assert_eq!(dude.level(), 3);
        assert_eq!(dude.xp(), 10);
    }

    #[test]
    fn heal_scales_with_wisdom_and_caps() {
        let mut dude = dude_of(ProfessionKind::Cleric, 1);
        dude.stats.wisdom = 20;
        dude.stats.current_hp = 1;
        let mut harness = Harness::new(ScriptedRng::default());
        let healed = dude.heal(1, &mut harness.env());
        assert_eq!(healed, 3);
        let healed = dude.heal(100, &mut harness.env());
        assert_eq!(dude.stats().current_hp, dude.calculated_stats().total_hp);
        assert!(healed > 0);
    }

    #[test]
    fn dead_dudes_are_not_healed() {
        let mut dude = knight(1);
        dude.stats.current_hp = 0;
        let mut harness = Harness::new(ScriptedRng::default());
        assert_eq!(dude.heal(10, &mut harness.env()), 0);
        dude.full_heal(&mut harness.env());
        assert_eq!(dude.stats().current_hp, 0);
        assert!(harness.messages.is_empty());
    }

    #[test]
    fn restricted_item_is_never_worn() {
        let catalog = starter_catalog();
        let dude = knight(1);
        let bow = catalog.instantiate("Bow", 4, Quality::Legendary, None).unwrap();
        assert!(!dude.can_equip(&bow));
        assert!(!dude.should_equip(&bow));
    }

    #[test]
    fn better_unrestricted_item_replaces_perkless_one() {
        let catalog = starter_catalog();
        let mut dude = knight(1);
        let sword = catalog.instantiate("Sword", 2, Quality::Uncommon, None).unwrap();
        assert!(dude.should_equip(&sword));

        let mut harness = Harness::new(ScriptedRng::default());
        dude.add_to_inventory(sword, &mut harness.env());
        let worn = dude.equipped().get(EquipmentKind::Weapon).unwrap();
        assert_eq!(worn.quality(), Quality::Uncommon);
        assert_eq!(dude.inventory().len(), 1);
        assert_eq!(dude.inventory()[0].quality(), Quality::Common);
        assert!(
            harness
                .messages
                .iter()
                .any(|m| m.kind == MessageKind::Neutral && m.text.contains("equipped Sword"))
        );
    }

    #[test]
    fn perk_is_only_traded_for_same_perk_at_equal_or_better_quality() {
        let catalog = starter_catalog();
        let mut dude = knight(1);
        dude.equipped
            .get_mut(EquipmentKind::Weapon)
            .unwrap()
            .set_perk(Box::new(Nimble::new(PerkQuality::Rare)));

        let plain = catalog.instantiate("Sword", 3, Quality::Epic, None).unwrap();
        assert!(!dude.should_equip(&plain));

        let other = catalog
            .instantiate("Sword", 3, Quality::Epic, Some(Box::new(Prospector::new(PerkQuality::Legendary))))
            .unwrap();
        assert!(!dude.should_equip(&other));

        let worse = catalog
            .instantiate("Sword", 3, Quality::Epic, Some(Box::new(Nimble::new(PerkQuality::Common))))
            .unwrap();
        assert!(!dude.should_equip(&worse));

        let same = catalog
            .instantiate("Sword", 3, Quality::Epic, Some(Box::new(Nimble::new(PerkQuality::Rare))))
            .unwrap();
        assert!(dude.should_equip(&same));
    }

    #[test]
    fn lower_ranked_item_goes_to_inventory() {
        let catalog = starter_catalog();
        let mut dude = knight(1);
        let sword = catalog.instantiate("Sword", 0, Quality::Common, None).unwrap();
        let mut harness = Harness::new(ScriptedRng::default());
        dude.add_to_inventory(sword, &mut harness.env());
        assert_eq!(dude.inventory().len(), 1);
        assert_eq!(dude.equipped().get(EquipmentKind::Weapon).unwrap().level(), 1);
    }

    #[test]
    fn restore_uses_is_idempotent() {
        let mut dude = knight(1);
        let mut harness = Harness::new(ScriptedRng::default());
        assert!(!dude.restore_uses(&mut harness.env()));
        assert!(harness.messages.is_empty());
        assert!(harness.texts.is_empty());
    }

    #[test]
    fn restore_uses_refills_spent_items() {
        let mut dude = knight(1);
        dude.set_story(Some(crate::ids::StoryId(0)));
        dude.equipped
            .get_mut(EquipmentKind::Armor)
            .unwrap()
            .change_quality(-1);
        let mut harness = Harness::new(ScriptedRng::default());
        assert!(dude.restore_uses(&mut harness.env()));
        assert_eq!(harness.messages.len(), 1);
        assert_eq!(harness.texts.len(), 1);
        assert!(!dude.restore_uses(&mut harness.env()));
    }

    #[test]
    fn equipment_level_up_respects_ceiling() {
        let mut dude = knight(1);
        let mut harness = Harness::new(ScriptedRng::with_uints(vec![0]));
        assert!(dude.level_up_equipment(20, Quality::Uncommon, &mut harness.env()));
        let sword = dude.equipped().get(EquipmentKind::Weapon).unwrap();
        assert_eq!(sword.quality(), Quality::Uncommon);
        assert_eq!(sword.level(), 4);
        assert_eq!(harness.messages.last().unwrap().kind, MessageKind::Loot);

        let mut harness = Harness::new(ScriptedRng::with_uints(vec![0]));
        assert!(!dude.level_up_equipment(1, Quality::Uncommon, &mut harness.env()));
        assert!(harness.messages.is_empty());
    }

    #[test]
    fn perkify_adds_then_upgrades() {
        let mut dude = knight(1);
        // Slot pick, perk pick, slot pick.
        let mut harness = Harness::new(ScriptedRng::with_uints(vec![1, 3, 1]));
        assert!(dude.perkify(PerkQuality::Legendary, &mut harness.env()));
        let armor = dude.equipped().get(EquipmentKind::Armor).unwrap();
        assert_eq!(armor.perk().map(|p| p.name()), Some("Nimble"));
        assert_eq!(armor.perk().map(|p| p.quality()), Some(PerkQuality::Trash));

        assert!(dude.perkify(PerkQuality::Legendary, &mut harness.env()));
        let armor = dude.equipped().get(EquipmentKind::Armor).unwrap();
        assert_eq!(armor.perk().map(|p| p.quality()), Some(PerkQuality::Common));
    }

    #[test]
    fn perkify_reports_nothing_at_cap() {
        let mut dude = knight(1);
        dude.equipped
            .get_mut(EquipmentKind::Weapon)
            .unwrap()
            .set_perk(Box::new(Nimble::new(PerkQuality::Trash)));
        let mut harness = Harness::new(ScriptedRng::with_uints(vec![0]));
        assert!(!dude.perkify(PerkQuality::Trash, &mut harness.env()));
        assert!(harness.messages.is_empty());
    }

    #[test]
    fn take_gold_and_inventory_empty_the_dude() {
        let catalog = starter_catalog();
        let mut dude = knight(1);
        dude.update_gold(25);
        let mut harness = Harness::new(ScriptedRng::default());
        let spare = catalog.instantiate("Staff", 0, Quality::Common, None).unwrap();
        dude.add_to_inventory(spare, &mut harness.env());
        assert_eq!(dude.take_gold(), 25);
        assert_eq!(dude.gold(), 0);
        assert_eq!(dude.take_inventory().len(), 1);
        assert!(dude.inventory().is_empty());
    }

    #[test]
    fn equip_from_inventory_swaps_items() {
        let catalog = starter_catalog();
        let mut dude = knight(1);
        let mut harness = Harness::new(ScriptedRng::default());
        let spare = catalog.instantiate("Sword", 0, Quality::Common, None).unwrap();
        dude.add_to_inventory(spare, &mut harness.env());
        assert!(dude.equip_from_inventory(0, &mut harness.env()));
        assert_eq!(dude.equipped().get(EquipmentKind::Weapon).unwrap().level(), 0);
        assert_eq!(dude.inventory()[0].level(), 1);
        assert!(!dude.equip_from_inventory(5, &mut harness.env()));
    }
}
