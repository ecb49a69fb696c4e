use super::{Equipment, EquipmentKind};

/// One optional item per [`EquipmentKind`], indexed by kind.
#[derive(Debug, Default)]
pub struct EquipmentSlots {
    slots: [Option<Equipment>; 3],
}

impl EquipmentSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: EquipmentKind) -> Option<&Equipment> {
        self.slots[kind.index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: EquipmentKind) -> Option<&mut Equipment> {
        self.slots[kind.index()].as_mut()
    }

    /// Puts `item` into its slot and hands back whatever was there.
    pub fn insert(&mut self, item: Equipment) -> Option<Equipment> {
        self.slots[item.kind().index()].replace(item)
    }

    pub fn take(&mut self, kind: EquipmentKind) -> Option<Equipment> {
        self.slots[kind.index()].take()
    }

    pub fn is_occupied(&self, kind: EquipmentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Kinds that currently hold an item, in slot order.
    pub fn occupied_kinds(&self) -> Vec<EquipmentKind> {
        EquipmentKind::ALL
            .into_iter()
            .filter(|kind| self.is_occupied(*kind))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Equipment> {
        self.slots.iter_mut().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties every slot, yielding items in slot order.
    pub fn drain(&mut self) -> Vec<Equipment> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}
