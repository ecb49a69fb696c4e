//! In-memory equipment catalog.

use std::collections::HashMap;

use tower_core::{EquipmentKind, EquipmentOracle, EquipmentTemplate};

/// Equipment templates indexed by name. Catalog order is preserved.
#[derive(Clone, Debug, Default)]
pub struct EquipmentCatalog {
    templates: Vec<EquipmentTemplate>,
    index: HashMap<String, usize>,
}

impl EquipmentCatalog {
    /// Builds a catalog. A later template with a duplicate name replaces the
    /// earlier one in place.
    pub fn new(templates: impl IntoIterator<Item = EquipmentTemplate>) -> Self {
        let mut catalog = Self::default();
        for template in templates {
            catalog.insert(template);
        }
        catalog
    }

    pub fn insert(&mut self, template: EquipmentTemplate) {
        match self.index.get(&template.name) {
            Some(&slot) => {
                tracing::warn!(name = %template.name, "duplicate equipment template replaced");
                self.templates[slot] = template;
            }
            None => {
                self.index.insert(template.name.clone(), self.templates.len());
                self.templates.push(template);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentTemplate> {
        self.templates.iter()
    }

    /// Names of every template for one slot.
    pub fn names_of_kind(&self, kind: EquipmentKind) -> Vec<&str> {
        self.templates
            .iter()
            .filter(|template| template.kind == kind)
            .map(|template| template.name.as_str())
            .collect()
    }
}

impl EquipmentOracle for EquipmentCatalog {
    fn template(&self, name: &str) -> Option<&EquipmentTemplate> {
        self.index.get(name).map(|&slot| &self.templates[slot])
    }

    fn names(&self) -> Vec<&str> {
        self.templates
            .iter()
            .map(|template| template.name.as_str())
            .collect()
    }
}
