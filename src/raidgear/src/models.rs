//! Wire models for the equipment and raid REST resources.
//!
//! Field names and optionality mirror the server's schemas. Timestamps are
//! ISO-8601 strings passed through verbatim. Update payloads skip unset
//! fields entirely so the server's partial-update semantics see only the
//! fields the caller intends to change.

use serde::{Deserialize, Serialize};

use crate::types::{DistributionMethod, EquipmentSlot, EquipmentType, SetKind};

/// A piece of equipment in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub slot: EquipmentSlot,
    pub equipment_type: EquipmentType,
    pub item_level: i32,
    pub job_category: Option<String>,
    pub raid_id: Option<i64>,
    pub source: Option<String>,
    pub tome_cost: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Creation payload for equipment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    pub slot: EquipmentSlot,
    pub equipment_type: EquipmentType,
    pub item_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raid_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub tome_cost: i32,
}

/// Partial-update payload for equipment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<EquipmentSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<EquipmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raid_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tome_cost: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Server-side filters for listing equipment
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EquipmentQuery {
    pub slot: Option<EquipmentSlot>,
    pub equipment_type: Option<EquipmentType>,
    pub item_level: Option<i32>,
    pub raid_id: Option<i64>,
    pub is_active: Option<bool>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// A named collection of equipment assigned to slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentSet {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub raid_group_id: i64,
    pub is_starting_set: bool,
    pub is_bis_set: bool,
    pub is_current_set: bool,
    /// Server-computed average item level
    pub total_item_level: f64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub items: Option<Vec<EquipmentSetItem>>,
}

impl EquipmentSet {
    /// The set's purpose, decoded from the server's flag triple
    pub fn kind(&self) -> SetKind {
        SetKind::from_flags(self.is_starting_set, self.is_current_set, self.is_bis_set)
    }

    /// Items in server order, empty when the response omitted them
    pub fn items(&self) -> &[EquipmentSetItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Count of items marked obtained
    pub fn obtained_count(&self) -> usize {
        self.items().iter().filter(|i| i.is_obtained).count()
    }
}

/// Creation payload for equipment sets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentSetCreate {
    pub name: String,
    pub raid_group_id: i64,
    pub is_starting_set: bool,
    pub is_bis_set: bool,
    pub is_current_set: bool,
}

impl EquipmentSetCreate {
    pub fn new(name: impl Into<String>, raid_group_id: i64, kind: SetKind) -> Self {
        let (is_starting_set, is_current_set, is_bis_set) = kind.flags();
        Self {
            name: name.into(),
            raid_group_id,
            is_starting_set,
            is_bis_set,
            is_current_set,
        }
    }
}

/// Partial-update payload for equipment sets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentSetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starting_set: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bis_set: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current_set: Option<bool>,
}

impl EquipmentSetUpdate {
    /// Rename and retag in one payload; all three flags are always sent so
    /// a kind change clears the previously set flag on the server.
    pub fn rename_and_retag(name: impl Into<String>, kind: SetKind) -> Self {
        let (starting, current, bis) = kind.flags();
        Self {
            name: Some(name.into()),
            is_starting_set: Some(starting),
            is_bis_set: Some(bis),
            is_current_set: Some(current),
        }
    }
}

/// One slot's membership in an equipment set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentSetItem {
    pub id: i64,
    pub equipment_set_id: i64,
    pub equipment_id: i64,
    pub slot: EquipmentSlot,
    pub is_obtained: bool,
    /// Present iff `is_obtained`
    pub obtained_at: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub equipment: Option<Equipment>,
}

/// Payload for adding an item to a set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetItemCreate {
    pub equipment_id: i64,
    pub slot: EquipmentSlot,
}

/// Partial-update payload for a set item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_obtained: Option<bool>,
}

/// A raid encounter tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Raid {
    pub id: i64,
    pub name: String,
    pub tier: String,
    pub description: Option<String>,
    pub total_floors: i32,
    pub min_item_level: Option<i32>,
    pub is_active: bool,
    pub created_at: String,
}

/// Creation payload for raids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidCreate {
    pub name: String,
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_item_level: Option<i32>,
}

/// Partial-update payload for raids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_item_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// An organized group of players running a raid together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidGroup {
    pub id: i64,
    pub name: String,
    pub raid_id: i64,
    pub leader_id: i64,
    pub distribution_method: DistributionMethod,
    pub target_item_level: Option<i32>,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_recruiting: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub raid: Option<Raid>,
    #[serde(default)]
    pub member_count: Option<i32>,
}

/// Creation payload for raid groups. `raid_id` must match the raid the
/// group is created under; the server requires it in the body as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidGroupCreate {
    pub name: String,
    pub raid_id: i64,
    pub distribution_method: DistributionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_item_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial-update payload for raid groups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_method: Option<DistributionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_item_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recruiting: Option<bool>,
}

/// A player's membership in a raid group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidMember {
    pub id: i64,
    pub raid_group_id: i64,
    pub user_id: i64,
    pub role: Option<String>,
    pub job: Option<String>,
    pub can_manage_schedule: bool,
    pub can_manage_distribution: bool,
    pub joined_at: String,
}

/// Payload for adding a member to a raid group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidMemberCreate {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}

/// Partial-update payload for a raid group member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaidMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_schedule: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_distribution: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set(starting: bool, current: bool, bis: bool) -> EquipmentSet {
        EquipmentSet {
            id: 1,
            name: "Week one".to_string(),
            user_id: 7,
            raid_group_id: 3,
            is_starting_set: starting,
            is_bis_set: bis,
            is_current_set: current,
            total_item_level: 712.0,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-02T12:00:00".to_string(),
            items: None,
        }
    }

    #[test]
    fn test_set_kind_decoding() {
        assert_eq!(sample_set(false, false, true).kind(), SetKind::BestInSlot);
        assert_eq!(sample_set(false, true, false).kind(), SetKind::Current);
        assert_eq!(sample_set(true, false, false).kind(), SetKind::Starting);
        assert_eq!(sample_set(false, false, false).kind(), SetKind::Normal);
    }

    #[test]
    fn test_set_items_default_empty() {
        let set = sample_set(false, false, false);
        assert!(set.items().is_empty());
        assert_eq!(set.obtained_count(), 0);
    }

    #[test]
    fn test_equipment_update_skips_unset_fields() {
        let update = EquipmentUpdate {
            item_level: Some(735),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"item_level\":735}");
    }

    #[test]
    fn test_set_item_update_serializes_false() {
        // An explicit false must reach the wire; only unset fields are skipped
        let update = SetItemUpdate {
            is_obtained: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"is_obtained\":false}");
    }

    #[test]
    fn test_equipment_create_omits_empty_optionals() {
        let create = EquipmentCreate {
            name: "Ascension Blade".to_string(),
            slot: EquipmentSlot::Weapon,
            equipment_type: EquipmentType::RaidHero,
            item_level: 730,
            raid_id: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&create).unwrap();
        assert!(json.contains("\"raid_id\":3"));
        assert!(!json.contains("job_category"));
        assert!(!json.contains("\"source\""));
        assert!(json.contains("\"tome_cost\":0"));
    }

    #[test]
    fn test_set_create_from_kind() {
        let create = EquipmentSetCreate::new("BiS plan", 3, SetKind::BestInSlot);
        assert!(create.is_bis_set);
        assert!(!create.is_current_set);
        assert!(!create.is_starting_set);
        assert_eq!(create.raid_group_id, 3);
    }

    #[test]
    fn test_rename_and_retag_sends_all_flags() {
        let update = EquipmentSetUpdate::rename_and_retag("Renamed", SetKind::Current);
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"is_current_set\":true"));
        assert!(json.contains("\"is_bis_set\":false"));
        assert!(json.contains("\"is_starting_set\":false"));
    }

    #[test]
    fn test_equipment_set_decode() {
        let body = r#"{
            "id": 5,
            "name": "Current gear",
            "user_id": 2,
            "raid_group_id": 3,
            "is_starting_set": false,
            "is_bis_set": false,
            "is_current_set": true,
            "total_item_level": 707.5,
            "created_at": "2024-03-01T12:00:00",
            "updated_at": "2024-03-02T12:00:00",
            "items": [
                {
                    "id": 11,
                    "equipment_set_id": 5,
                    "equipment_id": 40,
                    "slot": "weapon",
                    "is_obtained": true,
                    "obtained_at": "2024-03-02T09:30:00",
                    "created_at": "2024-03-01T12:00:00"
                }
            ]
        }"#;
        let set: EquipmentSet = serde_json::from_str(body).unwrap();
        assert_eq!(set.kind(), SetKind::Current);
        assert_eq!(set.items().len(), 1);
        assert_eq!(set.items()[0].slot, EquipmentSlot::Weapon);
        assert_eq!(set.obtained_count(), 1);
        assert!(set.items()[0].equipment.is_none());
    }
}
