//! Profession catalog: starting attributes and gear per class.

use crate::dude::Dude;
use crate::env::RngOracle;
use crate::equipment::{Equipment, EquipmentOracle, Quality};
use crate::error::CatalogError;
use crate::stats::Stats;

/// Class of a dude.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfessionKind {
    /// Medium defense, medium attack, medium hp.
    Vagabond,
    /// High defense, low attack, high hp.
    Knight,
    /// Low defense, low attack, strong heals.
    Cleric,
    /// Medium defense, high attack, low hp.
    Ranger,
}

impl ProfessionKind {
    pub const ALL: [ProfessionKind; 4] = [
        ProfessionKind::Vagabond,
        ProfessionKind::Knight,
        ProfessionKind::Cleric,
        ProfessionKind::Ranger,
    ];

    /// Parses a profession name, reporting unknown names as catalog errors.
    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        name.parse()
            .map_err(|_| CatalogError::UnknownProfession(name.to_string()))
    }
}

/// Static data for one profession.
#[derive(Clone, Debug, PartialEq)]
pub struct Profession {
    pub kind: ProfessionKind,
    pub description: &'static str,
    pub starting_stats: Stats,
    pub starting_equipment: &'static [&'static str],
}

impl Profession {
    pub fn for_kind(kind: ProfessionKind) -> Self {
        match kind {
            ProfessionKind::Knight => Self {
                kind,
                description: "A knight in shining armor",
                starting_stats: Stats::starting(7, 2, 1, 3, 1, 5, 0),
                starting_equipment: &["Plate", "Sword", "Shield"],
            },
            ProfessionKind::Cleric => Self {
                kind,
                description: "A cleric who can heal",
                starting_stats: Stats::starting(5, 1, 3, 1, 2, 1, 0),
                starting_equipment: &["Staff", "Robe"],
            },
            ProfessionKind::Vagabond => Self {
                kind,
                description: "A vagabond with no home",
                starting_stats: Stats::starting(7, 3, 1, 2, 1, 3, 0),
                starting_equipment: &["Dagger", "Leather"],
            },
            ProfessionKind::Ranger => Self {
                kind,
                description: "A ranger who can shoot from afar",
                starting_stats: Stats::starting(5, 2, 1, 1, 3, 0, 0),
                starting_equipment: &["Bow", "Leather"],
            },
        }
    }

    /// Instantiates the starting gear at level 1, Common.
    ///
    /// Fails on the first name the catalog does not know.
    pub fn starting_items(
        &self,
        catalog: &dyn EquipmentOracle,
    ) -> Result<Vec<Equipment>, CatalogError> {
        self.starting_equipment
            .iter()
            .map(|name| catalog.instantiate(name, 1, Quality::Common, None))
            .collect()
    }
}

pub fn random_profession_kind(rng: &mut dyn RngOracle) -> ProfessionKind {
    ProfessionKind::ALL[rng.below(ProfessionKind::ALL.len() as u32) as usize]
}

/// Picks a profession biased toward those the roster lacks.
pub fn weighted_random_profession_kind(dudes: &[Dude], rng: &mut dyn RngOracle) -> ProfessionKind {
    weighted_random_profession_kind_from_kinds(dudes.iter().map(Dude::profession), rng)
}

/// Cumulative-weight sampling over [`profession_weights`].
pub fn weighted_random_profession_kind_from_kinds(
    kinds: impl IntoIterator<Item = ProfessionKind>,
    rng: &mut dyn RngOracle,
) -> ProfessionKind {
    let weights = profession_weights(kinds);
    let total: f64 = weights.iter().sum();
    let target = rng.next_f64() * total;

    let mut cumulative = 0.0;
    for (kind, weight) in ProfessionKind::ALL.iter().zip(weights) {
        cumulative += weight;
        if target < cumulative {
            return *kind;
        }
    }
    ProfessionKind::ALL[0]
}

/// Weight per profession: `1` when absent, else `1 / count²`.
pub fn profession_weights(kinds: impl IntoIterator<Item = ProfessionKind>) -> [f64; 4] {
    let mut counts = [0u32; 4];
    for kind in kinds {
        counts[kind as usize] += 1;
    }
    counts.map(|count| {
        if count == 0 {
            1.0
        } else {
            1.0 / f64::from(count * count)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::equipment::EquipmentTemplate;
    use crate::test_support::{ScriptedRng, starter_catalog};

    #[test]
    fn knight_profile_matches_catalog() {
        let knight = Profession::for_kind(ProfessionKind::Knight);
        assert_eq!(knight.starting_stats.total_hp, 7);
        assert_eq!(knight.starting_stats.defense, 3);
        assert_eq!(knight.starting_stats.confidence, 5);
        assert_eq!(knight.starting_stats.level, 1);
        let items = knight.starting_items(&starter_catalog()).unwrap();
        let names: Vec<_> = items.iter().map(Equipment::name).collect();
        assert_eq!(names, ["Plate", "Sword", "Shield"]);
        assert!(items.iter().all(|item| item.level() == 1));
    }

    #[test]
    fn missing_starter_item_aborts() {
        let err = Profession::for_kind(ProfessionKind::Ranger)
            .starting_items(&Vec::<EquipmentTemplate>::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownEquipment("Bow".into()));
    }

    #[test]
    fn weights_penalize_crowded_professions() {
        let weights = profession_weights([ProfessionKind::Knight; 3]);
        assert_eq!(weights, [1.0, 1.0 / 9.0, 1.0, 1.0]);
    }

    #[test]
    fn weighted_pick_rarely_repeats_crowded_profession() {
        let mut rng = PcgRng::new(7);
        let roster = [ProfessionKind::Knight; 3];
        let samples = 10_000;
        let knights = (0..samples)
            .filter(|_| {
                weighted_random_profession_kind_from_kinds(roster, &mut rng)
                    == ProfessionKind::Knight
            })
            .count();
        // Expected share is (1/9) / (3 + 1/9), about 3.6%.
        let share = knights as f64 / samples as f64;
        assert!(share > 0.02 && share < 0.055, "share {share}");
    }

    #[test]
    fn weighted_pick_follows_cumulative_order() {
        // total = 3 + 1/9; 3.05 falls in the last bucket.
        let mut rng = ScriptedRng::with_floats(vec![0.0, 3.05 / (3.0 + 1.0 / 9.0)]);
        let roster = [ProfessionKind::Knight; 3];
        assert_eq!(
            weighted_random_profession_kind_from_kinds(roster, &mut rng),
            ProfessionKind::Vagabond
        );
        assert_eq!(
            weighted_random_profession_kind_from_kinds(roster, &mut rng),
            ProfessionKind::Ranger
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ProfessionKind::parse("cleric"), Ok(ProfessionKind::Cleric));
        assert!(ProfessionKind::parse("bard").is_err());
    }
}
