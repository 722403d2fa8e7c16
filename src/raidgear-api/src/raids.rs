//! Raid, raid-group and membership operations.

use raidgear::{
    Raid, RaidCreate, RaidGroup, RaidGroupCreate, RaidGroupUpdate, RaidMember, RaidMemberCreate,
    RaidMemberUpdate, RaidUpdate,
};

use crate::client::{Ack, ApiClient, QueryString};
use crate::error::ApiResult;

/// Client wrapper for `/raids` resources
#[derive(Debug, Clone)]
pub struct RaidService {
    client: ApiClient,
}

impl RaidService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // === Raids ===

    pub fn raids(&self, is_active: Option<bool>) -> ApiResult<Vec<Raid>> {
        let mut qs = QueryString::new();
        if let Some(active) = is_active {
            qs.push("is_active", &active.to_string());
        }
        self.client.get(&format!("/raids{}", qs.finish()))
    }

    pub fn raid(&self, id: i64) -> ApiResult<Raid> {
        self.client.get(&format!("/raids/{}", id))
    }

    pub fn create_raid(&self, data: &RaidCreate) -> ApiResult<Raid> {
        self.client.post("/raids", data)
    }

    pub fn update_raid(&self, id: i64, data: &RaidUpdate) -> ApiResult<Raid> {
        self.client.put(&format!("/raids/{}", id), data)
    }

    // === Raid groups ===

    pub fn groups(
        &self,
        raid_id: i64,
        is_active: Option<bool>,
        is_recruiting: Option<bool>,
    ) -> ApiResult<Vec<RaidGroup>> {
        let mut qs = QueryString::new();
        if let Some(active) = is_active {
            qs.push("is_active", &active.to_string());
        }
        if let Some(recruiting) = is_recruiting {
            qs.push("is_recruiting", &recruiting.to_string());
        }
        self.client
            .get(&format!("/raids/{}/groups{}", raid_id, qs.finish()))
    }

    pub fn group(&self, id: i64) -> ApiResult<RaidGroup> {
        self.client.get(&format!("/raids/groups/{}", id))
    }

    pub fn create_group(&self, raid_id: i64, data: &RaidGroupCreate) -> ApiResult<RaidGroup> {
        self.client.post(&format!("/raids/{}/groups", raid_id), data)
    }

    pub fn update_group(&self, id: i64, data: &RaidGroupUpdate) -> ApiResult<RaidGroup> {
        self.client.put(&format!("/raids/groups/{}", id), data)
    }

    pub fn delete_group(&self, id: i64) -> ApiResult<Ack> {
        self.client.delete(&format!("/raids/groups/{}", id))
    }

    /// Groups the caller belongs to, with the parent raid embedded
    pub fn my_groups(&self) -> ApiResult<Vec<RaidGroup>> {
        self.client.get("/raids/my-groups")
    }

    // === Members ===

    pub fn members(&self, group_id: i64) -> ApiResult<Vec<RaidMember>> {
        self.client
            .get(&format!("/raids/groups/{}/members", group_id))
    }

    pub fn add_member(&self, group_id: i64, data: &RaidMemberCreate) -> ApiResult<RaidMember> {
        self.client
            .post(&format!("/raids/groups/{}/members", group_id), data)
    }

    pub fn update_member(
        &self,
        group_id: i64,
        member_id: i64,
        data: &RaidMemberUpdate,
    ) -> ApiResult<RaidMember> {
        self.client.put(
            &format!("/raids/groups/{}/members/{}", group_id, member_id),
            data,
        )
    }

    pub fn remove_member(&self, group_id: i64, member_id: i64) -> ApiResult<Ack> {
        self.client
            .delete(&format!("/raids/groups/{}/members/{}", group_id, member_id))
    }
}
