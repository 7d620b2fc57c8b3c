//! Resources group: team members and RACI chart entries

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct ResourcesService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> ResourcesService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    pub async fn list_team_members(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "resources-team-members", None).await
    }

    pub async fn add_team_member(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "resources-team-members", payload).await
    }

    pub async fn update_team_member(
        &self,
        board_id: &str,
        member_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "resources-team-members", member_id, payload).await
    }

    pub async fn remove_team_member(
        &self,
        board_id: &str,
        member_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "resources-team-members", member_id).await
    }

    pub async fn list_raci_entries(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "resources-raci-entries", None).await
    }

    pub async fn create_raci_entry(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "resources-raci-entries", payload).await
    }

    pub async fn update_raci_entry(
        &self,
        board_id: &str,
        entry_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "resources-raci-entries", entry_id, payload).await
    }

    pub async fn delete_raci_entry(
        &self,
        board_id: &str,
        entry_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "resources-raci-entries", entry_id).await
    }
}
