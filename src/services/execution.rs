//! Execution group: milestones and risks

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct ExecutionService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> ExecutionService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    pub async fn list_milestones(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "execution-milestones", None).await
    }

    pub async fn create_milestone(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "execution-milestones", payload).await
    }

    pub async fn update_milestone(
        &self,
        board_id: &str,
        milestone_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "execution-milestones", milestone_id, payload).await
    }

    pub async fn delete_milestone(
        &self,
        board_id: &str,
        milestone_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "execution-milestones", milestone_id).await
    }

    pub async fn list_risks(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "execution-risks", None).await
    }

    pub async fn create_risk(&self, board_id: &str, payload: &Value) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "execution-risks", payload).await
    }

    pub async fn update_risk(
        &self,
        board_id: &str,
        risk_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "execution-risks", risk_id, payload).await
    }

    pub async fn delete_risk(&self, board_id: &str, risk_id: &str) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "execution-risks", risk_id).await
    }
}
