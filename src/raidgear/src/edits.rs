//! Planning for set-membership edits.
//!
//! The edit page snapshots a set's items at load time and computes a
//! per-slot plan against the form when saving; the list page plans a
//! duplicate as one create plus the source items in order. Plans are pure
//! data so the request sequence they imply can be checked without a server.

use crate::forms::SlotRow;
use crate::models::{EquipmentSet, EquipmentSetCreate, EquipmentSetItem, SetItemCreate};
use crate::types::{EquipmentSlot, SetKind};

/// One slot's pending membership change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEdit {
    /// Slot was empty and now has equipment
    Add { slot: EquipmentSlot, equipment_id: i64 },
    /// Slot keeps its item but points at different equipment; one update,
    /// never a remove-and-add pair
    Replace { item_id: i64, equipment_id: i64 },
    /// Slot had an item and is now empty
    Remove { item_id: i64 },
}

/// Three-way diff of a set's items against the edited rows, slot by slot.
/// Slots are independent; unchanged rows produce nothing. Output follows
/// the rows' order.
pub fn diff_assignments(existing: &[EquipmentSetItem], rows: &[SlotRow]) -> Vec<SlotEdit> {
    let mut edits = Vec::new();
    for row in rows {
        let current = existing.iter().find(|item| item.slot == row.slot);
        match (current, &row.equipment) {
            (Some(item), None) => edits.push(SlotEdit::Remove { item_id: item.id }),
            (Some(item), Some(equipment)) => {
                if item.equipment_id != equipment.id {
                    edits.push(SlotEdit::Replace {
                        item_id: item.id,
                        equipment_id: equipment.id,
                    });
                }
            }
            (None, Some(equipment)) => edits.push(SlotEdit::Add {
                slot: row.slot,
                equipment_id: equipment.id,
            }),
            (None, None) => {}
        }
    }
    edits
}

/// The requests a duplicate implies: one set create, then the source's
/// items re-added in their original order.
#[derive(Debug, Clone)]
pub struct DuplicatePlan {
    pub create: EquipmentSetCreate,
    pub items: Vec<SetItemCreate>,
}

/// Name for a duplicated set
pub fn copy_name(name: &str) -> String {
    format!("{} (copy)", name)
}

/// Plan duplicating a set: same raid group, copy-marked name, all purpose
/// flags cleared, items in source order.
pub fn plan_duplicate(source: &EquipmentSet) -> DuplicatePlan {
    DuplicatePlan {
        create: EquipmentSetCreate::new(
            copy_name(&source.name),
            source.raid_group_id,
            SetKind::Normal,
        ),
        items: source
            .items()
            .iter()
            .map(|item| SetItemCreate {
                equipment_id: item.equipment_id,
                slot: item.slot,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SetForm;
    use crate::models::Equipment;
    use crate::types::EquipmentType;

    fn equipment(id: i64, slot: EquipmentSlot) -> Equipment {
        Equipment {
            id,
            name: format!("Item {}", id),
            slot,
            equipment_type: EquipmentType::RaidHero,
            item_level: 730,
            job_category: None,
            raid_id: Some(3),
            source: None,
            tome_cost: 0,
            is_active: true,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-01T12:00:00".to_string(),
        }
    }

    fn set_item(id: i64, equipment_id: i64, slot: EquipmentSlot) -> EquipmentSetItem {
        EquipmentSetItem {
            id,
            equipment_set_id: 5,
            equipment_id,
            slot,
            is_obtained: false,
            obtained_at: None,
            created_at: "2024-03-01T12:00:00".to_string(),
            equipment: Some(equipment(equipment_id, slot)),
        }
    }

    fn sample_set(items: Vec<EquipmentSetItem>) -> EquipmentSet {
        EquipmentSet {
            id: 5,
            name: "Week one".to_string(),
            user_id: 2,
            raid_group_id: 3,
            is_starting_set: true,
            is_bis_set: false,
            is_current_set: false,
            total_item_level: 730.0,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-01T12:00:00".to_string(),
            items: Some(items),
        }
    }

    #[test]
    fn test_diff_no_changes() {
        let existing = vec![set_item(11, 1, EquipmentSlot::Weapon)];
        let mut form = SetForm::default();
        form.assign(EquipmentSlot::Weapon, equipment(1, EquipmentSlot::Weapon));
        assert!(diff_assignments(&existing, &form.rows).is_empty());
    }

    #[test]
    fn test_diff_same_slot_change_is_one_replace() {
        // Changing a slot's equipment updates the existing item in place
        let existing = vec![set_item(11, 1, EquipmentSlot::Weapon)];
        let mut form = SetForm::default();
        form.assign(EquipmentSlot::Weapon, equipment(2, EquipmentSlot::Weapon));
        let edits = diff_assignments(&existing, &form.rows);
        assert_eq!(
            edits,
            vec![SlotEdit::Replace {
                item_id: 11,
                equipment_id: 2
            }]
        );
    }

    #[test]
    fn test_diff_add_and_remove() {
        let existing = vec![set_item(11, 1, EquipmentSlot::Weapon)];
        let mut form = SetForm::default();
        // Weapon cleared, head newly assigned
        form.assign(EquipmentSlot::Head, equipment(7, EquipmentSlot::Head));
        let edits = diff_assignments(&existing, &form.rows);
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0], SlotEdit::Remove { item_id: 11 });
        assert_eq!(
            edits[1],
            SlotEdit::Add {
                slot: EquipmentSlot::Head,
                equipment_id: 7
            }
        );
    }

    #[test]
    fn test_diff_slots_independent() {
        let existing = vec![
            set_item(11, 1, EquipmentSlot::Weapon),
            set_item(12, 4, EquipmentSlot::Legs),
            set_item(13, 9, EquipmentSlot::Ring),
        ];
        let mut form = SetForm::default();
        form.assign(EquipmentSlot::Weapon, equipment(2, EquipmentSlot::Weapon)); // replace
        form.assign(EquipmentSlot::Legs, equipment(4, EquipmentSlot::Legs)); // unchanged
        form.assign(EquipmentSlot::Head, equipment(7, EquipmentSlot::Head)); // add
                                                                             // ring cleared -> remove
        let edits = diff_assignments(&existing, &form.rows);
        assert_eq!(edits.len(), 3);
        assert!(edits.contains(&SlotEdit::Replace { item_id: 11, equipment_id: 2 }));
        assert!(edits.contains(&SlotEdit::Add {
            slot: EquipmentSlot::Head,
            equipment_id: 7
        }));
        assert!(edits.contains(&SlotEdit::Remove { item_id: 13 }));
    }

    #[test]
    fn test_diff_empty_set_all_adds_in_row_order() {
        let mut form = SetForm::default();
        form.assign(EquipmentSlot::Ring, equipment(9, EquipmentSlot::Ring));
        form.assign(EquipmentSlot::Weapon, equipment(1, EquipmentSlot::Weapon));
        let edits = diff_assignments(&[], &form.rows);
        assert_eq!(
            edits,
            vec![
                SlotEdit::Add {
                    slot: EquipmentSlot::Weapon,
                    equipment_id: 1
                },
                SlotEdit::Add {
                    slot: EquipmentSlot::Ring,
                    equipment_id: 9
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_plan_clears_flags_and_marks_name() {
        let source = sample_set(vec![set_item(11, 1, EquipmentSlot::Weapon)]);
        let plan = plan_duplicate(&source);
        assert_eq!(plan.create.name, "Week one (copy)");
        assert_eq!(plan.create.raid_group_id, 3);
        assert!(!plan.create.is_starting_set);
        assert!(!plan.create.is_bis_set);
        assert!(!plan.create.is_current_set);
    }

    #[test]
    fn test_duplicate_plan_keeps_item_order() {
        // One create plus one add per source item, in source order
        let source = sample_set(vec![
            set_item(11, 9, EquipmentSlot::Ring),
            set_item(12, 1, EquipmentSlot::Weapon),
            set_item(13, 7, EquipmentSlot::Head),
        ]);
        let plan = plan_duplicate(&source);
        assert_eq!(plan.items.len(), 3);
        let ids: Vec<i64> = plan.items.iter().map(|i| i.equipment_id).collect();
        assert_eq!(ids, vec![9, 1, 7]);
        let slots: Vec<EquipmentSlot> = plan.items.iter().map(|i| i.slot).collect();
        assert_eq!(
            slots,
            vec![EquipmentSlot::Ring, EquipmentSlot::Weapon, EquipmentSlot::Head]
        );
    }

    #[test]
    fn test_duplicate_plan_empty_set() {
        let source = sample_set(Vec::new());
        let plan = plan_duplicate(&source);
        assert!(plan.items.is_empty());
    }
}
