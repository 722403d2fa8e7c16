//! Core enumerations for equipment tracking.
//!
//! Wire encodings are snake_case and match the server's schema exactly.

use serde::{Deserialize, Serialize};

/// Equipment attachment point on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Head,
    Body,
    Hands,
    Legs,
    Feet,
    Earrings,
    Necklace,
    Bracelet,
    Ring,
}

impl EquipmentSlot {
    /// All slots in canonical display order
    pub const ALL: &'static [EquipmentSlot] = &[
        EquipmentSlot::Weapon,
        EquipmentSlot::Head,
        EquipmentSlot::Body,
        EquipmentSlot::Hands,
        EquipmentSlot::Legs,
        EquipmentSlot::Feet,
        EquipmentSlot::Earrings,
        EquipmentSlot::Necklace,
        EquipmentSlot::Bracelet,
        EquipmentSlot::Ring,
    ];

    /// Human-readable name for list headers and form labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Head => "Head",
            Self::Body => "Body",
            Self::Hands => "Hands",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Earrings => "Earrings",
            Self::Necklace => "Necklace",
            Self::Bracelet => "Bracelet",
            Self::Ring => "Ring",
        }
    }
}

impl Default for EquipmentSlot {
    fn default() -> Self {
        Self::Weapon
    }
}

impl std::fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Head => write!(f, "head"),
            Self::Body => write!(f, "body"),
            Self::Hands => write!(f, "hands"),
            Self::Legs => write!(f, "legs"),
            Self::Feet => write!(f, "feet"),
            Self::Earrings => write!(f, "earrings"),
            Self::Necklace => write!(f, "necklace"),
            Self::Bracelet => write!(f, "bracelet"),
            Self::Ring => write!(f, "ring"),
        }
    }
}

impl std::str::FromStr for EquipmentSlot {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weapon" => Ok(Self::Weapon),
            "head" => Ok(Self::Head),
            "body" => Ok(Self::Body),
            "hands" => Ok(Self::Hands),
            "legs" => Ok(Self::Legs),
            "feet" => Ok(Self::Feet),
            "earrings" => Ok(Self::Earrings),
            "necklace" => Ok(Self::Necklace),
            "bracelet" => Ok(Self::Bracelet),
            "ring" => Ok(Self::Ring),
            _ => Err(ParseError::InvalidEquipmentSlot(s.to_string())),
        }
    }
}

/// How a piece of equipment is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    RaidHero,
    RaidNormal,
    Tome,
    TomeAugmented,
    Crafted,
    Other,
}

impl EquipmentType {
    /// All types in canonical display order
    pub const ALL: &'static [EquipmentType] = &[
        EquipmentType::RaidHero,
        EquipmentType::RaidNormal,
        EquipmentType::Tome,
        EquipmentType::TomeAugmented,
        EquipmentType::Crafted,
        EquipmentType::Other,
    ];

    /// Human-readable name for list headers and form labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RaidHero => "Hero Raid",
            Self::RaidNormal => "Normal Raid",
            Self::Tome => "Tome",
            Self::TomeAugmented => "Augmented Tome",
            Self::Crafted => "Crafted",
            Self::Other => "Other",
        }
    }

    /// Whether `raid_id` is meaningful for this type
    pub fn is_raid_sourced(&self) -> bool {
        matches!(self, Self::RaidHero | Self::RaidNormal)
    }

    /// Whether `tome_cost` is meaningful for this type
    pub fn is_tome_sourced(&self) -> bool {
        matches!(self, Self::Tome | Self::TomeAugmented)
    }
}

impl Default for EquipmentType {
    fn default() -> Self {
        Self::RaidHero
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RaidHero => write!(f, "raid_hero"),
            Self::RaidNormal => write!(f, "raid_normal"),
            Self::Tome => write!(f, "tome"),
            Self::TomeAugmented => write!(f, "tome_augmented"),
            Self::Crafted => write!(f, "crafted"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for EquipmentType {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raid_hero" => Ok(Self::RaidHero),
            "raid_normal" => Ok(Self::RaidNormal),
            "tome" => Ok(Self::Tome),
            "tome_augmented" => Ok(Self::TomeAugmented),
            "crafted" => Ok(Self::Crafted),
            "other" => Ok(Self::Other),
            _ => Err(ParseError::InvalidEquipmentType(s.to_string())),
        }
    }
}

/// Purpose of an equipment set.
///
/// The server stores this as three independent booleans
/// (`is_starting_set`, `is_current_set`, `is_bis_set`); the client treats
/// them as one closed choice so a set can never claim two purposes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Starting,
    Current,
    BestInSlot,
    Normal,
}

impl SetKind {
    /// All kinds in toggle display order
    pub const ALL: &'static [SetKind] = &[
        SetKind::Starting,
        SetKind::Current,
        SetKind::BestInSlot,
        SetKind::Normal,
    ];

    /// Human-readable badge/toggle label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Starting => "Starting",
            Self::Current => "Current",
            Self::BestInSlot => "BiS",
            Self::Normal => "Normal",
        }
    }

    /// Decode the server's flag triple. Inconsistent combinations resolve
    /// with the precedence bis > current > starting.
    pub fn from_flags(is_starting: bool, is_current: bool, is_bis: bool) -> Self {
        if is_bis {
            Self::BestInSlot
        } else if is_current {
            Self::Current
        } else if is_starting {
            Self::Starting
        } else {
            Self::Normal
        }
    }

    /// Encode as the server's `(is_starting_set, is_current_set, is_bis_set)` triple
    pub fn flags(&self) -> (bool, bool, bool) {
        match self {
            Self::Starting => (true, false, false),
            Self::Current => (false, true, false),
            Self::BestInSlot => (false, false, true),
            Self::Normal => (false, false, false),
        }
    }
}

impl Default for SetKind {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Starting => write!(f, "starting"),
            Self::Current => write!(f, "current"),
            Self::BestInSlot => write!(f, "bis"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

impl std::str::FromStr for SetKind {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starting" => Ok(Self::Starting),
            "current" => Ok(Self::Current),
            "bis" | "best_in_slot" => Ok(Self::BestInSlot),
            "normal" => Ok(Self::Normal),
            _ => Err(ParseError::InvalidSetKind(s.to_string())),
        }
    }
}

/// Loot distribution policy of a raid group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMethod {
    Priority,
    FirstCome,
}

impl DistributionMethod {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::FirstCome => "First come",
        }
    }
}

impl Default for DistributionMethod {
    fn default() -> Self {
        Self::Priority
    }
}

impl std::fmt::Display for DistributionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::FirstCome => write!(f, "first_come"),
        }
    }
}

impl std::str::FromStr for DistributionMethod {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Self::Priority),
            "first_come" => Ok(Self::FirstCome),
            _ => Err(ParseError::InvalidDistributionMethod(s.to_string())),
        }
    }
}

/// Parse errors for string conversions
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid equipment slot: {0}")]
    InvalidEquipmentSlot(String),
    #[error("Invalid equipment type: {0}")]
    InvalidEquipmentType(String),
    #[error("Invalid set kind: {0}")]
    InvalidSetKind(String),
    #[error("Invalid distribution method: {0}")]
    InvalidDistributionMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_slot_parse() {
        assert_eq!("weapon".parse::<EquipmentSlot>().unwrap(), EquipmentSlot::Weapon);
        assert_eq!("earrings".parse::<EquipmentSlot>().unwrap(), EquipmentSlot::Earrings);
        assert_eq!("ring".parse::<EquipmentSlot>().unwrap(), EquipmentSlot::Ring);
        assert!("shield".parse::<EquipmentSlot>().is_err());
    }

    #[test]
    fn test_equipment_slot_display() {
        assert_eq!(EquipmentSlot::Weapon.to_string(), "weapon");
        assert_eq!(EquipmentSlot::Necklace.to_string(), "necklace");
    }

    #[test]
    fn test_equipment_slot_roundtrip() {
        for slot in EquipmentSlot::ALL {
            assert_eq!(slot.to_string().parse::<EquipmentSlot>().unwrap(), *slot);
        }
    }

    #[test]
    fn test_equipment_slot_wire_encoding() {
        assert_eq!(serde_json::to_string(&EquipmentSlot::Weapon).unwrap(), "\"weapon\"");
        assert_eq!(serde_json::to_string(&EquipmentSlot::Earrings).unwrap(), "\"earrings\"");
        let slot: EquipmentSlot = serde_json::from_str("\"bracelet\"").unwrap();
        assert_eq!(slot, EquipmentSlot::Bracelet);
    }

    #[test]
    fn test_equipment_slot_all_order() {
        assert_eq!(EquipmentSlot::ALL.len(), 10);
        assert_eq!(EquipmentSlot::ALL[0], EquipmentSlot::Weapon);
        assert_eq!(EquipmentSlot::ALL[9], EquipmentSlot::Ring);
    }

    #[test]
    fn test_equipment_type_parse() {
        assert_eq!("raid_hero".parse::<EquipmentType>().unwrap(), EquipmentType::RaidHero);
        assert_eq!("tome_augmented".parse::<EquipmentType>().unwrap(), EquipmentType::TomeAugmented);
        assert!("dungeon".parse::<EquipmentType>().is_err());
    }

    #[test]
    fn test_equipment_type_wire_encoding() {
        assert_eq!(
            serde_json::to_string(&EquipmentType::TomeAugmented).unwrap(),
            "\"tome_augmented\""
        );
        let ty: EquipmentType = serde_json::from_str("\"raid_normal\"").unwrap();
        assert_eq!(ty, EquipmentType::RaidNormal);
    }

    #[test]
    fn test_equipment_type_sourcing() {
        assert!(EquipmentType::RaidHero.is_raid_sourced());
        assert!(EquipmentType::RaidNormal.is_raid_sourced());
        assert!(!EquipmentType::Tome.is_raid_sourced());
        assert!(EquipmentType::Tome.is_tome_sourced());
        assert!(EquipmentType::TomeAugmented.is_tome_sourced());
        assert!(!EquipmentType::Crafted.is_tome_sourced());
        assert!(!EquipmentType::Other.is_raid_sourced());
        assert!(!EquipmentType::Other.is_tome_sourced());
    }

    #[test]
    fn test_set_kind_from_flags() {
        assert_eq!(SetKind::from_flags(true, false, false), SetKind::Starting);
        assert_eq!(SetKind::from_flags(false, true, false), SetKind::Current);
        assert_eq!(SetKind::from_flags(false, false, true), SetKind::BestInSlot);
        assert_eq!(SetKind::from_flags(false, false, false), SetKind::Normal);
    }

    #[test]
    fn test_set_kind_from_flags_precedence() {
        // Inconsistent flag combinations resolve bis > current > starting
        assert_eq!(SetKind::from_flags(true, true, true), SetKind::BestInSlot);
        assert_eq!(SetKind::from_flags(true, true, false), SetKind::Current);
        assert_eq!(SetKind::from_flags(true, false, true), SetKind::BestInSlot);
    }

    #[test]
    fn test_set_kind_flags_roundtrip() {
        for kind in SetKind::ALL {
            let (starting, current, bis) = kind.flags();
            assert_eq!(SetKind::from_flags(starting, current, bis), *kind);
        }
    }

    #[test]
    fn test_set_kind_flags_exclusive() {
        for kind in SetKind::ALL {
            let (starting, current, bis) = kind.flags();
            let set_count = [starting, current, bis].iter().filter(|&&b| b).count();
            assert!(set_count <= 1);
        }
    }

    #[test]
    fn test_set_kind_parse() {
        assert_eq!("starting".parse::<SetKind>().unwrap(), SetKind::Starting);
        assert_eq!("bis".parse::<SetKind>().unwrap(), SetKind::BestInSlot);
        assert_eq!("best_in_slot".parse::<SetKind>().unwrap(), SetKind::BestInSlot);
        assert_eq!("normal".parse::<SetKind>().unwrap(), SetKind::Normal);
        assert!("backup".parse::<SetKind>().is_err());
    }

    #[test]
    fn test_distribution_method_parse() {
        assert_eq!("priority".parse::<DistributionMethod>().unwrap(), DistributionMethod::Priority);
        assert_eq!(
            "first_come".parse::<DistributionMethod>().unwrap(),
            DistributionMethod::FirstCome
        );
        assert!("roll".parse::<DistributionMethod>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EquipmentSlot::Earrings.display_name(), "Earrings");
        assert_eq!(EquipmentType::RaidHero.display_name(), "Hero Raid");
        assert_eq!(EquipmentType::TomeAugmented.display_name(), "Augmented Tome");
        assert_eq!(SetKind::BestInSlot.display_name(), "BiS");
    }
}
