use crate::error::CatalogError;
use crate::perk::{Perk, PerkQuality, perk_by_name};
use crate::profession::ProfessionKind;
use crate::stats::Stats;

use super::{Equipment, EquipmentKind, Quality};

/// Blueprint an [`Equipment`] is instantiated from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: EquipmentKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Stats,
    /// Perk attached when the caller does not supply one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub perk: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perk_quality: PerkQuality,
    /// Empty means any profession may equip it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub professions: Vec<ProfessionKind>,
}

impl EquipmentTemplate {
    pub fn new(name: impl Into<String>, kind: EquipmentKind, stats: Stats) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            stats,
            perk: None,
            perk_quality: PerkQuality::Trash,
            professions: Vec::new(),
        }
    }

    /// Builds a fresh item with `uses == total_uses == quality + 1`.
    pub fn instantiate(
        &self,
        level: i32,
        quality: Quality,
        perk: Option<Box<dyn Perk>>,
    ) -> Result<Equipment, CatalogError> {
        let perk = match (perk, &self.perk) {
            (Some(perk), _) => Some(perk),
            (None, Some(name)) => Some(perk_by_name(name, self.perk_quality)?),
            (None, None) => None,
        };

        let mut item = Equipment::new(self.name.clone(), self.kind, self.stats)
            .with_description(self.description.clone())
            .with_professions(self.professions.clone())
            .with_level(level)
            .with_quality(quality);
        if let Some(perk) = perk {
            item.set_perk(perk);
        }
        Ok(item)
    }
}

/// Source of equipment templates.
pub trait EquipmentOracle {
    fn template(&self, name: &str) -> Option<&EquipmentTemplate>;

    /// Every template name, in catalog order.
    fn names(&self) -> Vec<&str>;

    /// Looks up `name` and instantiates it.
    fn instantiate(
        &self,
        name: &str,
        level: i32,
        quality: Quality,
        perk: Option<Box<dyn Perk>>,
    ) -> Result<Equipment, CatalogError> {
        self.template(name)
            .ok_or_else(|| CatalogError::UnknownEquipment(name.to_string()))?
            .instantiate(level, quality, perk)
    }
}

impl EquipmentOracle for [EquipmentTemplate] {
    fn template(&self, name: &str) -> Option<&EquipmentTemplate> {
        self.iter().find(|template| template.name == name)
    }

    fn names(&self) -> Vec<&str> {
        self.iter().map(|template| template.name.as_str()).collect()
    }
}

impl EquipmentOracle for Vec<EquipmentTemplate> {
    fn template(&self, name: &str) -> Option<&EquipmentTemplate> {
        self.as_slice().template(name)
    }

    fn names(&self) -> Vec<&str> {
        self.as_slice().names()
    }
}
