//! Equipment and equipment-set operations.
//!
//! One method per REST endpoint; no business logic here beyond query
//! assembly. Every mutation returns the server's authoritative record so
//! callers can reload or discard as they see fit.

use raidgear::{
    Equipment, EquipmentCreate, EquipmentQuery, EquipmentSet, EquipmentSetCreate,
    EquipmentSetItem, EquipmentSetUpdate, EquipmentUpdate, SetItemCreate, SetItemUpdate,
};

use crate::client::{Ack, ApiClient, QueryString};
use crate::error::ApiResult;

/// Client wrapper for `/equipment` and `/equipment/sets` resources
#[derive(Debug, Clone)]
pub struct EquipmentService {
    client: ApiClient,
}

impl EquipmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // === Equipment catalog ===

    /// List equipment with optional server-side filters
    pub fn list(&self, query: &EquipmentQuery) -> ApiResult<Vec<Equipment>> {
        let mut qs = QueryString::new();
        if let Some(skip) = query.skip {
            qs.push("skip", &skip.to_string());
        }
        if let Some(limit) = query.limit {
            qs.push("limit", &limit.to_string());
        }
        if let Some(slot) = query.slot {
            qs.push("slot", &slot.to_string());
        }
        if let Some(equipment_type) = query.equipment_type {
            qs.push("equipment_type", &equipment_type.to_string());
        }
        if let Some(item_level) = query.item_level {
            qs.push("item_level", &item_level.to_string());
        }
        if let Some(raid_id) = query.raid_id {
            qs.push("raid_id", &raid_id.to_string());
        }
        if let Some(is_active) = query.is_active {
            qs.push("is_active", &is_active.to_string());
        }
        self.client.get(&format!("/equipment{}", qs.finish()))
    }

    pub fn get(&self, id: i64) -> ApiResult<Equipment> {
        self.client.get(&format!("/equipment/{}", id))
    }

    pub fn create(&self, data: &EquipmentCreate) -> ApiResult<Equipment> {
        self.client.post("/equipment", data)
    }

    pub fn update(&self, id: i64, data: &EquipmentUpdate) -> ApiResult<Equipment> {
        self.client.put(&format!("/equipment/{}", id), data)
    }

    /// The server soft-deactivates rather than deleting; from the
    /// client's view the record is gone from active listings.
    pub fn delete(&self, id: i64) -> ApiResult<Ack> {
        self.client.delete(&format!("/equipment/{}", id))
    }

    // === Equipment sets ===

    /// The caller's sets, optionally narrowed to one raid group
    pub fn my_sets(&self, raid_group_id: Option<i64>) -> ApiResult<Vec<EquipmentSet>> {
        let mut qs = QueryString::new();
        if let Some(id) = raid_group_id {
            qs.push("raid_group_id", &id.to_string());
        }
        self.client
            .get(&format!("/equipment/sets/my-sets{}", qs.finish()))
    }

    pub fn get_set(&self, id: i64) -> ApiResult<EquipmentSet> {
        self.client.get(&format!("/equipment/sets/{}", id))
    }

    pub fn create_set(&self, data: &EquipmentSetCreate) -> ApiResult<EquipmentSet> {
        self.client.post("/equipment/sets", data)
    }

    pub fn update_set(&self, id: i64, data: &EquipmentSetUpdate) -> ApiResult<EquipmentSet> {
        self.client.put(&format!("/equipment/sets/{}", id), data)
    }

    pub fn delete_set(&self, id: i64) -> ApiResult<Ack> {
        self.client.delete(&format!("/equipment/sets/{}", id))
    }

    // === Set items ===

    pub fn add_set_item(&self, set_id: i64, data: &SetItemCreate) -> ApiResult<EquipmentSetItem> {
        self.client
            .post(&format!("/equipment/sets/{}/items", set_id), data)
    }

    pub fn update_set_item(
        &self,
        set_id: i64,
        item_id: i64,
        data: &SetItemUpdate,
    ) -> ApiResult<EquipmentSetItem> {
        self.client
            .put(&format!("/equipment/sets/{}/items/{}", set_id, item_id), data)
    }

    pub fn remove_set_item(&self, set_id: i64, item_id: i64) -> ApiResult<Ack> {
        self.client
            .delete(&format!("/equipment/sets/{}/items/{}", set_id, item_id))
    }
}
