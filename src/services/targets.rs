//! Targets group: OKRs (with nested key results) and SMART goals

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct TargetsService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> TargetsService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    pub async fn list_okrs(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "targets-okrs", None).await
    }

    pub async fn create_okr(&self, board_id: &str, payload: &Value) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "targets-okrs", payload).await
    }

    pub async fn update_okr(
        &self,
        board_id: &str,
        okr_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "targets-okrs", okr_id, payload).await
    }

    pub async fn delete_okr(&self, board_id: &str, okr_id: &str) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "targets-okrs", okr_id).await
    }

    /// Record a progress check-in on an OKR
    pub async fn check_in_okr(
        &self,
        board_id: &str,
        okr_id: &str,
        payload: Option<&Value>,
    ) -> Result<Value, ApiError> {
        dispatch::action(self.client, board_id, "targets-okr-check-in", Some(okr_id), payload).await
    }

    pub async fn list_key_results(
        &self,
        board_id: &str,
        okr_id: &str,
    ) -> Result<Vec<Value>, ApiError> {
        dispatch::list_nested(self.client, board_id, "targets-okrs", okr_id, "key-results").await
    }

    pub async fn add_key_result(
        &self,
        board_id: &str,
        okr_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create_nested(
            self.client,
            board_id,
            "targets-okrs",
            okr_id,
            "key-results",
            payload,
        )
        .await
    }

    pub async fn update_key_result(
        &self,
        board_id: &str,
        okr_id: &str,
        key_result_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update_nested(
            self.client,
            board_id,
            "targets-okrs",
            okr_id,
            "key-results",
            key_result_id,
            payload,
        )
        .await
    }

    pub async fn remove_key_result(
        &self,
        board_id: &str,
        okr_id: &str,
        key_result_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete_nested(
            self.client,
            board_id,
            "targets-okrs",
            okr_id,
            "key-results",
            key_result_id,
        )
        .await
    }

    pub async fn list_smart_goals(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "targets-smart-goals", None).await
    }

    pub async fn create_smart_goal(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "targets-smart-goals", payload).await
    }

    pub async fn update_smart_goal(
        &self,
        board_id: &str,
        goal_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "targets-smart-goals", goal_id, payload).await
    }

    pub async fn delete_smart_goal(&self, board_id: &str, goal_id: &str) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "targets-smart-goals", goal_id).await
    }
}
