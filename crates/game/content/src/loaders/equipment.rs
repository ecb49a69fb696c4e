//! Equipment catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::{EquipmentTemplate, perk_by_name};

use crate::catalog::EquipmentCatalog;
use crate::loaders::{LoadResult, read_file};

/// Catalog shipped with the crate.
const BUILTIN_EQUIPMENT: &str = include_str!("../../data/equipment.ron");

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFile {
    pub items: Vec<EquipmentTemplate>,
}

/// Loader for equipment catalogs from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load an equipment catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// The catalog every profession's starting gear resolves against.
    pub fn builtin() -> LoadResult<EquipmentCatalog> {
        Self::parse(BUILTIN_EQUIPMENT)
    }

    /// Parses and validates a catalog. Every perk a template names must be
    /// a known perk.
    pub fn parse(content: &str) -> LoadResult<EquipmentCatalog> {
        let file: EquipmentFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        for template in &file.items {
            if let Some(perk) = &template.perk {
                perk_by_name(perk, template.perk_quality).map_err(|e| {
                    anyhow::anyhow!("Invalid equipment template {}: {}", template.name, e)
                })?;
            }
        }

        tracing::debug!(items = file.items.len(), "equipment catalog loaded");
        Ok(EquipmentCatalog::new(file.items))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tower_core::{EquipmentKind, EquipmentOracle, Profession, ProfessionKind, Quality};

    use super::*;

    #[test]
    fn builtin_covers_every_starting_item() {
        let catalog = EquipmentLoader::builtin().unwrap();
        for kind in ProfessionKind::ALL {
            let items = Profession::for_kind(kind).starting_items(&catalog).unwrap();
            assert!(!items.is_empty(), "{kind} has no gear");
            assert!(items.iter().all(|item| item.allows(kind)), "{kind} cannot wear its gear");
        }
    }

    #[test]
    fn builtin_has_every_slot() {
        let catalog = EquipmentLoader::builtin().unwrap();
        for kind in EquipmentKind::ALL {
            assert!(!catalog.names_of_kind(kind).is_empty(), "no {kind}");
        }
    }

    #[test]
    fn template_perk_is_attached_on_instantiate() {
        let catalog = EquipmentLoader::parse(
            r#"(
                items: [
                    (
                        name: "Lucky Charm",
                        kind: accessory,
                        stats: (luck: 2),
                        perk: Some("prospector"),
                        perk_quality: Rare,
                    ),
                ],
            )"#,
        )
        .unwrap();
        let charm = catalog.instantiate("Lucky Charm", 0, Quality::Common, None).unwrap();
        assert_eq!(charm.perk().map(|perk| perk.name()), Some("Prospector"));
        assert_eq!(charm.stats().luck, 2);
    }

    #[test]
    fn unknown_perk_is_rejected() {
        let err = EquipmentLoader::parse(
            r#"(items: [(name: "Odd", kind: weapon, perk: Some("Teleport"))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid equipment template Odd"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(items: [(name: "Club", kind: weapon, stats: (strength: 3), professions: [knight])])"#
        )
        .unwrap();
        let catalog = EquipmentLoader::load(file.path()).unwrap();
        let club = catalog.template("Club").unwrap();
        assert_eq!(club.professions, [ProfessionKind::Knight]);
        assert_eq!(club.stats.strength, 3);
    }
}
