//! VisionBoard client
//!
//! Main client for interacting with the VisionBoard Pro API, combining the
//! HTTP transport, the API base URL, and the caller's bearer credential.

use super::http::HttpTransport;
use crate::config::Config;
use crate::error::ApiError;
use crate::services::{
    CollaborationService, ExecutionService, FinancialService, ResourcesService, StrategyService,
    TargetsService,
};
use serde_json::Value;
use url::Url;

/// Main VisionBoard Pro client
///
/// Cheap to clone; all operations are stateless and safe to issue
/// concurrently from multiple tasks.
#[derive(Clone, Debug)]
pub struct VisionBoardClient {
    pub http: HttpTransport,
    base_url: Url,
    token: String,
}

impl VisionBoardClient {
    /// Create a new client for the given API base URL and bearer token
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidArgument(format!("invalid base URL: {}", e)))?;
        let http = HttpTransport::new()?;

        Ok(Self {
            http,
            base_url,
            token: token.to_string(),
        })
    }

    /// Create a client from persisted configuration
    pub fn from_config(config: &Config, token: &str) -> Result<Self, ApiError> {
        Self::new(&config.effective_base_url(), token)
    }

    /// Replace the bearer token (e.g. after a session refresh)
    pub fn set_token(&mut self, token: &str) {
        self.token = token.to_string();
    }

    /// Build a URL for a path nested under a vision board
    ///
    /// `path` carries the group and sub-resource segments with dynamic ids
    /// already percent-encoded; the board id is encoded here.
    pub fn board_url(&self, board_id: &str, path: &str) -> String {
        format!(
            "{}/visionboards/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            urlencoding::encode(board_id),
            path
        )
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.http.get(url, &self.token).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.http.post(url, &self.token, body).await
    }

    /// Make a PUT request
    pub async fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.http.put(url, &self.token, body).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.http.delete(url, &self.token).await
    }

    // =========================================================================
    // Typed service groups
    // =========================================================================

    /// Strategy group: pillars and SWOT entries
    pub fn strategy(&self) -> StrategyService<'_> {
        StrategyService::new(self)
    }

    /// Targets group: OKRs, key results, and SMART goals
    pub fn targets(&self) -> TargetsService<'_> {
        TargetsService::new(self)
    }

    /// Resources group: team members and RACI entries
    pub fn resources(&self) -> ResourcesService<'_> {
        ResourcesService::new(self)
    }

    /// Execution group: milestones and risks
    pub fn execution(&self) -> ExecutionService<'_> {
        ExecutionService::new(self)
    }

    /// Financial group: budget lines and forecast runs
    pub fn financial(&self) -> FinancialService<'_> {
        FinancialService::new(self)
    }

    /// Collaboration group: discussions, knowledge articles, and the AI coach
    pub fn collaboration(&self) -> CollaborationService<'_> {
        CollaborationService::new(self)
    }
}
