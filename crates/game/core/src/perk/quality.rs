/// Ordinal tier of a perk.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum PerkQuality {
    #[default]
    Trash,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl PerkQuality {
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Trash => Self::Common,
            Self::Common => Self::Uncommon,
            Self::Uncommon => Self::Rare,
            Self::Rare => Self::Epic,
            Self::Epic | Self::Legendary => Self::Legendary,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Trash | Self::Common => Self::Trash,
            Self::Uncommon => Self::Common,
            Self::Rare => Self::Uncommon,
            Self::Epic => Self::Rare,
            Self::Legendary => Self::Epic,
        }
    }

    /// Steps up one tier in place, refusing to pass `max`.
    pub fn raise(&mut self, max: PerkQuality) -> bool {
        let next = self.next();
        if next == *self || next > max {
            return false;
        }
        *self = next;
        true
    }

    /// Steps down one tier in place.
    pub fn lower(&mut self) -> bool {
        let prev = self.prev();
        if prev == *self {
            return false;
        }
        *self = prev;
        true
    }
}
