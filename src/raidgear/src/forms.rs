//! Typed form state for the create/edit pages.
//!
//! Each form is a plain struct with a pure `validate` returning per-field
//! error messages. Validation runs before any request is issued; a form
//! that fails validation never produces a wire payload.

use crate::models::{
    Equipment, EquipmentCreate, EquipmentSet, EquipmentSetCreate, EquipmentSetUpdate, SetItemCreate,
};
use crate::stats::average_item_level;
use crate::types::{EquipmentSlot, EquipmentType, SetKind};

/// Form state for creating (or editing) a piece of equipment
#[derive(Debug, Clone)]
pub struct EquipmentForm {
    pub name: String,
    pub slot: EquipmentSlot,
    pub equipment_type: EquipmentType,
    pub item_level: i32,
    pub job_category: String,
    pub raid_id: Option<i64>,
    pub source: String,
    pub tome_cost: i32,
}

impl Default for EquipmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slot: EquipmentSlot::Weapon,
            equipment_type: EquipmentType::RaidHero,
            item_level: 730,
            job_category: String::new(),
            raid_id: None,
            source: String::new(),
            tome_cost: 0,
        }
    }
}

/// Per-field validation errors for [`EquipmentForm`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentFormErrors {
    pub name: Option<String>,
    pub item_level: Option<String>,
    pub tome_cost: Option<String>,
}

impl EquipmentFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.item_level.is_none() && self.tome_cost.is_none()
    }
}

impl EquipmentForm {
    /// Pure validation; an empty result means the form may be submitted.
    pub fn validate(&self) -> EquipmentFormErrors {
        let mut errors = EquipmentFormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if !(1..=999).contains(&self.item_level) {
            errors.item_level = Some("Item level must be between 1 and 999".to_string());
        }
        if self.tome_cost < 0 {
            errors.tome_cost = Some("Tome cost cannot be negative".to_string());
        }
        errors
    }

    /// Switch type and clear fields the new type has no use for. One-way:
    /// nothing is restored when switching back.
    pub fn set_equipment_type(&mut self, equipment_type: EquipmentType) {
        self.equipment_type = equipment_type;
        if !equipment_type.is_tome_sourced() {
            self.tome_cost = 0;
        }
        if !equipment_type.is_raid_sourced() {
            self.raid_id = None;
        }
    }

    /// Build the creation payload. Blank optional text fields are omitted
    /// rather than sent as empty strings.
    pub fn to_create(&self) -> EquipmentCreate {
        EquipmentCreate {
            name: self.name.clone(),
            slot: self.slot,
            equipment_type: self.equipment_type,
            item_level: self.item_level,
            job_category: none_if_blank(&self.job_category),
            raid_id: self.raid_id,
            source: none_if_blank(&self.source),
            tome_cost: self.tome_cost,
        }
    }
}

fn none_if_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One slot-assignment row of a set form. Every form carries exactly one
/// row per slot regardless of how many end up assigned.
#[derive(Debug, Clone)]
pub struct SlotRow {
    pub slot: EquipmentSlot,
    pub equipment: Option<Equipment>,
}

/// Form state for creating or editing an equipment set
#[derive(Debug, Clone)]
pub struct SetForm {
    pub name: String,
    pub raid_group_id: Option<i64>,
    pub kind: SetKind,
    pub rows: Vec<SlotRow>,
}

impl Default for SetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            raid_group_id: None,
            kind: SetKind::Normal,
            rows: EquipmentSlot::ALL
                .iter()
                .map(|&slot| SlotRow { slot, equipment: None })
                .collect(),
        }
    }
}

/// Per-field validation errors for [`SetForm`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetFormErrors {
    pub name: Option<String>,
    pub raid_group: Option<String>,
    pub equipment: Option<String>,
}

impl SetFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.raid_group.is_none() && self.equipment.is_none()
    }
}

impl SetForm {
    /// Prefill from a loaded set, denormalizing each item's equipment into
    /// its slot row. Items whose slot somehow repeats keep the first one.
    pub fn from_set(set: &EquipmentSet) -> Self {
        let mut form = Self {
            name: set.name.clone(),
            raid_group_id: Some(set.raid_group_id),
            kind: set.kind(),
            ..Default::default()
        };
        for item in set.items() {
            if let Some(row) = form.rows.iter_mut().find(|r| r.slot == item.slot) {
                if row.equipment.is_none() {
                    row.equipment = item.equipment.clone();
                }
            }
        }
        form
    }

    /// Pure validation. The raid group is only required where the page
    /// lets the user choose one (create; on edit it is fixed).
    pub fn validate(&self, require_raid_group: bool) -> SetFormErrors {
        let mut errors = SetFormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if require_raid_group && self.raid_group_id.is_none() {
            errors.raid_group = Some("Raid group is required".to_string());
        }
        if self.assigned_count() == 0 {
            errors.equipment = Some("Assign at least one piece of equipment".to_string());
        }
        errors
    }

    pub fn assignment(&self, slot: EquipmentSlot) -> Option<&Equipment> {
        self.rows
            .iter()
            .find(|r| r.slot == slot)
            .and_then(|r| r.equipment.as_ref())
    }

    pub fn assign(&mut self, slot: EquipmentSlot, equipment: Equipment) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.slot == slot) {
            row.equipment = Some(equipment);
        }
    }

    pub fn clear(&mut self, slot: EquipmentSlot) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.slot == slot) {
            row.equipment = None;
        }
    }

    pub fn assigned_count(&self) -> usize {
        self.rows.iter().filter(|r| r.equipment.is_some()).count()
    }

    /// Live average over assigned rows only; 0 with nothing assigned
    pub fn average_item_level(&self) -> i32 {
        let levels: Vec<i32> = self
            .rows
            .iter()
            .filter_map(|r| r.equipment.as_ref().map(|e| e.item_level))
            .collect();
        average_item_level(&levels)
    }

    /// Creation payload; `None` until a raid group is chosen
    pub fn to_create(&self) -> Option<EquipmentSetCreate> {
        let raid_group_id = self.raid_group_id?;
        Some(EquipmentSetCreate::new(self.name.clone(), raid_group_id, self.kind))
    }

    /// Metadata update payload for the edit page (name and kind flags)
    pub fn to_update(&self) -> EquipmentSetUpdate {
        EquipmentSetUpdate::rename_and_retag(self.name.clone(), self.kind)
    }

    /// Item-add payloads for assigned rows, in canonical slot order
    pub fn item_creates(&self) -> Vec<SetItemCreate> {
        self.rows
            .iter()
            .filter_map(|r| {
                r.equipment.as_ref().map(|e| SetItemCreate {
                    equipment_id: e.id,
                    slot: r.slot,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(id: i64, slot: EquipmentSlot, level: i32) -> Equipment {
        Equipment {
            id,
            name: format!("Item {}", id),
            slot,
            equipment_type: EquipmentType::RaidHero,
            item_level: level,
            job_category: None,
            raid_id: Some(3),
            source: None,
            tome_cost: 0,
            is_active: true,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-01T12:00:00".to_string(),
        }
    }

    #[test]
    fn test_equipment_form_defaults() {
        let form = EquipmentForm::default();
        assert_eq!(form.slot, EquipmentSlot::Weapon);
        assert_eq!(form.equipment_type, EquipmentType::RaidHero);
        assert_eq!(form.item_level, 730);
        assert_eq!(form.tome_cost, 0);
        assert!(form.raid_id.is_none());
    }

    #[test]
    fn test_equipment_form_validation() {
        let mut form = EquipmentForm {
            name: "   ".to_string(),
            ..Default::default()
        };
        let errors = form.validate();
        assert!(errors.name.is_some());
        assert!(errors.item_level.is_none());

        form.name = "Ascension Blade".to_string();
        form.item_level = 0;
        let errors = form.validate();
        assert!(errors.name.is_none());
        assert!(errors.item_level.is_some());

        form.item_level = 1000;
        assert!(form.validate().item_level.is_some());

        form.item_level = 999;
        form.tome_cost = -5;
        let errors = form.validate();
        assert!(errors.item_level.is_none());
        assert!(errors.tome_cost.is_some());

        form.tome_cost = 0;
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_type_change_clears_raid_id() {
        let mut form = EquipmentForm {
            name: "Tome Sword".to_string(),
            equipment_type: EquipmentType::RaidHero,
            raid_id: Some(3),
            ..Default::default()
        };
        form.set_equipment_type(EquipmentType::Tome);
        assert_eq!(form.raid_id, None);
        assert_eq!(form.tome_cost, 0);
    }

    #[test]
    fn test_type_change_clears_tome_cost() {
        let mut form = EquipmentForm {
            name: "Tome Sword".to_string(),
            ..Default::default()
        };
        form.set_equipment_type(EquipmentType::Tome);
        form.tome_cost = 495;
        form.set_equipment_type(EquipmentType::RaidNormal);
        assert_eq!(form.tome_cost, 0);
        // raid_id stays unset until the user picks one
        assert_eq!(form.raid_id, None);
    }

    #[test]
    fn test_type_change_between_plain_types_keeps_cleared_fields() {
        let mut form = EquipmentForm {
            name: "Crafted Ring".to_string(),
            ..Default::default()
        };
        form.set_equipment_type(EquipmentType::Crafted);
        form.set_equipment_type(EquipmentType::Other);
        assert_eq!(form.tome_cost, 0);
        assert_eq!(form.raid_id, None);
    }

    #[test]
    fn test_raid_equipment_create_payload() {
        // Hero-raid weapon keeps its raid id; the default tome cost is valid
        let form = EquipmentForm {
            name: "Ascension Blade".to_string(),
            slot: EquipmentSlot::Weapon,
            equipment_type: EquipmentType::RaidHero,
            item_level: 730,
            raid_id: Some(3),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
        let create = form.to_create();
        assert_eq!(create.raid_id, Some(3));
        assert_eq!(create.tome_cost, 0);
        assert_eq!(create.item_level, 730);
    }

    #[test]
    fn test_set_form_has_one_row_per_slot() {
        let form = SetForm::default();
        assert_eq!(form.rows.len(), EquipmentSlot::ALL.len());
        for (row, slot) in form.rows.iter().zip(EquipmentSlot::ALL) {
            assert_eq!(row.slot, *slot);
            assert!(row.equipment.is_none());
        }
    }

    #[test]
    fn test_set_form_requires_an_assignment() {
        // No assignments fails validation before any request is built
        let form = SetForm {
            name: "Week one".to_string(),
            raid_group_id: Some(3),
            ..Default::default()
        };
        let errors = form.validate(true);
        assert!(errors.equipment.is_some());
        assert!(errors.name.is_none());
        assert!(errors.raid_group.is_none());
    }

    #[test]
    fn test_set_form_raid_group_only_required_on_create() {
        let mut form = SetForm {
            name: "Week one".to_string(),
            ..Default::default()
        };
        form.assign(EquipmentSlot::Weapon, equipment(1, EquipmentSlot::Weapon, 730));
        assert!(form.validate(true).raid_group.is_some());
        assert!(form.validate(false).is_empty());
    }

    #[test]
    fn test_set_form_average_over_assigned_rows() {
        let mut form = SetForm::default();
        assert_eq!(form.average_item_level(), 0);
        form.assign(EquipmentSlot::Weapon, equipment(1, EquipmentSlot::Weapon, 730));
        form.assign(EquipmentSlot::Head, equipment(2, EquipmentSlot::Head, 725));
        assert_eq!(form.average_item_level(), 728); // 727.5 rounds up
        form.clear(EquipmentSlot::Head);
        assert_eq!(form.average_item_level(), 730);
    }

    #[test]
    fn test_set_form_item_creates_in_slot_order() {
        let mut form = SetForm::default();
        form.assign(EquipmentSlot::Ring, equipment(9, EquipmentSlot::Ring, 700));
        form.assign(EquipmentSlot::Weapon, equipment(1, EquipmentSlot::Weapon, 730));
        form.assign(EquipmentSlot::Legs, equipment(5, EquipmentSlot::Legs, 710));
        let items = form.item_creates();
        let slots: Vec<EquipmentSlot> = items.iter().map(|i| i.slot).collect();
        assert_eq!(
            slots,
            vec![EquipmentSlot::Weapon, EquipmentSlot::Legs, EquipmentSlot::Ring]
        );
        assert_eq!(items[0].equipment_id, 1);
    }

    #[test]
    fn test_set_form_to_create_needs_raid_group() {
        let mut form = SetForm {
            name: "Week one".to_string(),
            kind: SetKind::Starting,
            ..Default::default()
        };
        assert!(form.to_create().is_none());
        form.raid_group_id = Some(3);
        let create = form.to_create().unwrap();
        assert!(create.is_starting_set);
        assert_eq!(create.raid_group_id, 3);
    }

    #[test]
    fn test_set_form_from_set() {
        use crate::models::{EquipmentSet, EquipmentSetItem};
        let set = EquipmentSet {
            id: 5,
            name: "Current gear".to_string(),
            user_id: 2,
            raid_group_id: 3,
            is_starting_set: false,
            is_bis_set: true,
            is_current_set: false,
            total_item_level: 730.0,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-01T12:00:00".to_string(),
            items: Some(vec![EquipmentSetItem {
                id: 11,
                equipment_set_id: 5,
                equipment_id: 1,
                slot: EquipmentSlot::Weapon,
                is_obtained: false,
                obtained_at: None,
                created_at: "2024-03-01T12:00:00".to_string(),
                equipment: Some(equipment(1, EquipmentSlot::Weapon, 730)),
            }]),
        };
        let form = SetForm::from_set(&set);
        assert_eq!(form.name, "Current gear");
        assert_eq!(form.raid_group_id, Some(3));
        assert_eq!(form.kind, SetKind::BestInSlot);
        assert_eq!(form.assigned_count(), 1);
        assert_eq!(form.assignment(EquipmentSlot::Weapon).map(|e| e.id), Some(1));
    }
}
