//! Item-level tier definitions

/// Item-level tier information
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLevelTier {
    pub rank: u8,
    pub code: &'static str,
    pub name: &'static str,
    /// Inclusive lower bound on item level
    pub min_level: i32,
    pub color: (u8, u8, u8),
}

/// All tiers, highest threshold first (classification walks top-down)
pub const ITEM_LEVEL_TIERS: &[ItemLevelTier] = &[
    ItemLevelTier {
        rank: 5,
        code: "legendary",
        name: "Legendary",
        min_level: 730,
        color: (249, 115, 22),
    },
    ItemLevelTier {
        rank: 4,
        code: "epic",
        name: "Epic",
        min_level: 710,
        color: (168, 85, 247),
    },
    ItemLevelTier {
        rank: 3,
        code: "rare",
        name: "Rare",
        min_level: 690,
        color: (59, 130, 246),
    },
    ItemLevelTier {
        rank: 2,
        code: "uncommon",
        name: "Uncommon",
        min_level: 670,
        color: (34, 197, 94),
    },
    ItemLevelTier {
        rank: 1,
        code: "common",
        name: "Common",
        min_level: i32::MIN,
        color: (107, 114, 128),
    },
];

/// Classify an item level. Total over all levels; anything below the
/// uncommon threshold falls through to common.
pub fn tier_for_level(level: i32) -> &'static ItemLevelTier {
    ITEM_LEVEL_TIERS
        .iter()
        .find(|t| level >= t.min_level)
        .unwrap_or(&ITEM_LEVEL_TIERS[ITEM_LEVEL_TIERS.len() - 1])
}
