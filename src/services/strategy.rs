//! Strategy group: strategic pillars and SWOT entries

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct StrategyService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> StrategyService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    pub async fn list_pillars(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "strategy-pillars", None).await
    }

    pub async fn create_pillar(&self, board_id: &str, payload: &Value) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "strategy-pillars", payload).await
    }

    pub async fn update_pillar(
        &self,
        board_id: &str,
        pillar_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "strategy-pillars", pillar_id, payload).await
    }

    pub async fn delete_pillar(&self, board_id: &str, pillar_id: &str) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "strategy-pillars", pillar_id).await
    }

    pub async fn list_swot_entries(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "strategy-swot-entries", None).await
    }

    pub async fn create_swot_entry(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "strategy-swot-entries", payload).await
    }

    pub async fn update_swot_entry(
        &self,
        board_id: &str,
        entry_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "strategy-swot-entries", entry_id, payload).await
    }

    pub async fn delete_swot_entry(
        &self,
        board_id: &str,
        entry_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "strategy-swot-entries", entry_id).await
    }
}
