//! Client-side equipment list filtering.
//!
//! The list page loads the catalog once and re-filters in memory on every
//! change. All predicates are conjunctive and evaluated per item, so the
//! result is independent of the order the user set them in, and applying
//! the same filter twice is a no-op.

use crate::models::Equipment;
use crate::types::{EquipmentSlot, EquipmentType};

/// In-memory filter over a loaded equipment list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentListFilter {
    /// Case-insensitive substring matched against name or source
    pub search: String,
    pub slot: Option<EquipmentSlot>,
    pub equipment_type: Option<EquipmentType>,
    /// Inclusive lower bound on item level
    pub min_level: Option<i32>,
    /// Inclusive upper bound on item level
    pub max_level: Option<i32>,
}

impl EquipmentListFilter {
    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.slot.is_none()
            && self.equipment_type.is_none()
            && self.min_level.is_none()
            && self.max_level.is_none()
    }

    /// Whether one item passes every active predicate
    pub fn matches(&self, equipment: &Equipment) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let name_hit = equipment.name.to_lowercase().contains(&needle);
            let source_hit = equipment
                .source
                .as_deref()
                .map(|s| s.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !name_hit && !source_hit {
                return false;
            }
        }
        if let Some(slot) = self.slot {
            if equipment.slot != slot {
                return false;
            }
        }
        if let Some(equipment_type) = self.equipment_type {
            if equipment.equipment_type != equipment_type {
                return false;
            }
        }
        if let Some(min) = self.min_level {
            if equipment.item_level < min {
                return false;
            }
        }
        if let Some(max) = self.max_level {
            if equipment.item_level > max {
                return false;
            }
        }
        true
    }

    /// Filter a list, preserving source order
    pub fn apply(&self, equipment: &[Equipment]) -> Vec<Equipment> {
        equipment.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, slot: EquipmentSlot, ty: EquipmentType, level: i32, source: Option<&str>) -> Equipment {
        Equipment {
            id,
            name: name.to_string(),
            slot,
            equipment_type: ty,
            item_level: level,
            job_category: None,
            raid_id: None,
            source: source.map(String::from),
            tome_cost: 0,
            is_active: true,
            created_at: "2024-03-01T12:00:00".to_string(),
            updated_at: "2024-03-01T12:00:00".to_string(),
        }
    }

    fn catalog() -> Vec<Equipment> {
        vec![
            item(1, "Ascension Blade", EquipmentSlot::Weapon, EquipmentType::RaidHero, 735, Some("Abyss floor 4")),
            item(2, "Ascension Helm", EquipmentSlot::Head, EquipmentType::RaidHero, 730, Some("Abyss floor 2")),
            item(3, "Tome Sword", EquipmentSlot::Weapon, EquipmentType::Tome, 710, Some("Tome exchange")),
            item(4, "Crafted Greaves", EquipmentSlot::Legs, EquipmentType::Crafted, 690, None),
            item(5, "Plain Band", EquipmentSlot::Ring, EquipmentType::Other, 650, Some("Vendor")),
        ]
    }

    fn ids(result: &[Equipment]) -> Vec<i64> {
        result.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = EquipmentListFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&catalog())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_matches_name_or_source() {
        let filter = EquipmentListFilter {
            search: "abyss".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1, 2]);

        let filter = EquipmentListFilter {
            search: "SWORD".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![3]);
    }

    #[test]
    fn test_search_missing_source_only_checks_name() {
        let filter = EquipmentListFilter {
            search: "greaves".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![4]);
    }

    #[test]
    fn test_slot_and_type_filters() {
        let filter = EquipmentListFilter {
            slot: Some(EquipmentSlot::Weapon),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1, 3]);

        let filter = EquipmentListFilter {
            slot: Some(EquipmentSlot::Weapon),
            equipment_type: Some(EquipmentType::Tome),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![3]);
    }

    #[test]
    fn test_level_bounds_are_inclusive_and_independent() {
        let filter = EquipmentListFilter {
            min_level: Some(690),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1, 2, 3, 4]);

        let filter = EquipmentListFilter {
            max_level: Some(710),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![3, 4, 5]);

        let filter = EquipmentListFilter {
            min_level: Some(690),
            max_level: Some(730),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![2, 3, 4]);
    }

    #[test]
    fn test_filter_idempotent() {
        let filter = EquipmentListFilter {
            search: "a".to_string(),
            min_level: Some(600),
            ..Default::default()
        };
        let once = filter.apply(&catalog());
        let twice = filter.apply(&once);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_filter_predicate_order_irrelevant() {
        // Same predicates assembled in different orders give the same rows
        let a = EquipmentListFilter {
            search: "ascension".to_string(),
            slot: Some(EquipmentSlot::Weapon),
            min_level: Some(700),
            ..Default::default()
        };
        let b = EquipmentListFilter {
            min_level: Some(700),
            slot: Some(EquipmentSlot::Weapon),
            search: "ascension".to_string(),
            ..Default::default()
        };

        assert_eq!(a, b);
        assert_eq!(ids(&a.apply(&catalog())), ids(&b.apply(&catalog())));
        assert_eq!(ids(&a.apply(&catalog())), vec![1]);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let filter = EquipmentListFilter {
            min_level: Some(0),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1, 2, 3, 4, 5]);
    }
}
