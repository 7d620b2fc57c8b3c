//! Financial group: budget lines and forecast runs

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct FinancialService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> FinancialService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    pub async fn list_budget_lines(&self, board_id: &str) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "financial-budget-lines", None).await
    }

    pub async fn create_budget_line(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "financial-budget-lines", payload).await
    }

    pub async fn update_budget_line(
        &self,
        board_id: &str,
        line_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(self.client, board_id, "financial-budget-lines", line_id, payload).await
    }

    pub async fn delete_budget_line(
        &self,
        board_id: &str,
        line_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "financial-budget-lines", line_id).await
    }

    /// Run a financial forecast simulation over the board's budget lines
    pub async fn run_forecast(&self, board_id: &str, payload: &Value) -> Result<Value, ApiError> {
        dispatch::action(
            self.client,
            board_id,
            "financial-run-forecast",
            None,
            Some(payload),
        )
        .await
    }
}
