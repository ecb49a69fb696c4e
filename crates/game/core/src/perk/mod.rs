//! Triggered effects attached to equipment.
//!
//! A perk inspects an [`Event`] and, when it reacts, returns a
//! [`PerkOutcome`] for the owning dude to apply. Perks never mutate the dude
//! directly and never raise further events, so activation cannot recurse.

mod kinds;
mod quality;

pub use kinds::{Bloodlust, HealOnRoomEnter, Nimble, Prospector, PERK_NAMES};
pub use quality::PerkQuality;

use std::fmt;

use crate::env::RngOracle;
use crate::error::CatalogError;
use crate::event::Event;

/// Effect a triggered perk asks its owner to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerkOutcome {
    /// Heal by this base amount (scaled by the dude's wisdom).
    Heal(i32),
    /// Add this much bonus gold without raising another gold event.
    Gold(i32),
    /// Grant this much experience.
    Xp(i32),
}

/// Capability shared by every perk.
pub trait Perk: fmt::Debug + Send + Sync {
    /// Returns the outcome to apply when the perk reacts to `event`.
    fn check(&self, event: &Event) -> Option<PerkOutcome>;

    /// Raises quality by one tier unless that would pass `max_quality`.
    fn level_up(&mut self, max_quality: PerkQuality) -> bool;

    /// Lowers quality by one tier, saturating at [`PerkQuality::Trash`].
    fn level_down(&mut self) -> bool;

    fn name(&self) -> &'static str;

    fn quality(&self) -> PerkQuality;
}

/// Picks a perk uniformly among every known perk.
pub fn random_perk(quality: PerkQuality, rng: &mut dyn RngOracle) -> Box<dyn Perk> {
    let index = rng.below(PERK_NAMES.len() as u32) as usize;
    build_perk(index, quality)
}

/// Resolves a perk by its display name.
pub fn perk_by_name(name: &str, quality: PerkQuality) -> Result<Box<dyn Perk>, CatalogError> {
    PERK_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| build_perk(index, quality))
        .ok_or_else(|| CatalogError::UnknownPerk(name.to_string()))
}

fn build_perk(index: usize, quality: PerkQuality) -> Box<dyn Perk> {
    match index {
        0 => Box::new(HealOnRoomEnter::new(quality)),
        1 => Box::new(Prospector::new(quality)),
        2 => Box::new(Bloodlust::new(quality)),
        _ => Box::new(Nimble::new(quality)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRng;

    #[test]
    fn perk_lookup_is_case_insensitive() {
        let perk = perk_by_name("prospector", PerkQuality::Rare).unwrap();
        assert_eq!(perk.name(), "Prospector");
        assert_eq!(perk.quality(), PerkQuality::Rare);
    }

    #[test]
    fn unknown_perk_is_an_error() {
        let err = perk_by_name("Vampirism", PerkQuality::Trash).unwrap_err();
        assert_eq!(err, CatalogError::UnknownPerk("Vampirism".into()));
    }

    #[test]
    fn random_perk_covers_every_kind() {
        let mut rng = ScriptedRng::with_uints(vec![0, 1, 2, 3]);
        let names: Vec<_> = (0..4)
            .map(|_| random_perk(PerkQuality::Trash, &mut rng).name())
            .collect();
        assert_eq!(names, PERK_NAMES);
    }
}
