/// Ordinal equipment tier. Controls the use ceiling and the stat multiplier.
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
pub enum Quality {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Common,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
    ];

    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Clamps an arbitrary index into the valid tier range.
    pub fn from_index_clamped(index: i32) -> Self {
        Self::ALL[index.clamp(0, 4) as usize]
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Common => Some(Self::Uncommon),
            Self::Uncommon => Some(Self::Rare),
            Self::Rare => Some(Self::Epic),
            Self::Epic => Some(Self::Legendary),
            Self::Legendary => None,
        }
    }

    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Common => None,
            Self::Uncommon => Some(Self::Common),
            Self::Rare => Some(Self::Uncommon),
            Self::Epic => Some(Self::Rare),
            Self::Legendary => Some(Self::Epic),
        }
    }

    /// Number of perk uses an item of this tier holds.
    #[inline]
    pub const fn total_uses(self) -> i32 {
        self.index() + 1
    }

    /// Color name used when rendering an item's label.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Common => "white",
            Self::Uncommon => "green",
            Self::Rare => "blue",
            Self::Epic => "purple",
            Self::Legendary => "orange",
        }
    }
}

/// Slot an item occupies. A dude wears at most one item per kind.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EquipmentKind {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 3] = [
        EquipmentKind::Weapon,
        EquipmentKind::Armor,
        EquipmentKind::Accessory,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
