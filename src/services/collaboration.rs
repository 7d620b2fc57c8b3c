//! Collaboration group: discussions, knowledge articles, and the AI coach

use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use crate::resource::dispatch;
use serde_json::Value;

pub struct CollaborationService<'a> {
    client: &'a VisionBoardClient,
}

impl<'a> CollaborationService<'a> {
    pub(crate) fn new(client: &'a VisionBoardClient) -> Self {
        Self { client }
    }

    /// List discussions, optionally filtered by workspace
    ///
    /// Omitting `workspace` means "no filter", not "filter by empty string".
    pub async fn list_discussions(
        &self,
        board_id: &str,
        workspace: Option<&str>,
    ) -> Result<Vec<Value>, ApiError> {
        dispatch::list(self.client, board_id, "collaboration-discussions", workspace).await
    }

    pub async fn create_discussion(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "collaboration-discussions", payload).await
    }

    pub async fn update_discussion(
        &self,
        board_id: &str,
        discussion_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(
            self.client,
            board_id,
            "collaboration-discussions",
            discussion_id,
            payload,
        )
        .await
    }

    pub async fn delete_discussion(
        &self,
        board_id: &str,
        discussion_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(self.client, board_id, "collaboration-discussions", discussion_id).await
    }

    /// List knowledge articles, optionally filtered by category
    pub async fn list_knowledge_articles(
        &self,
        board_id: &str,
        category: Option<&str>,
    ) -> Result<Vec<Value>, ApiError> {
        dispatch::list(
            self.client,
            board_id,
            "collaboration-knowledge-articles",
            category,
        )
        .await
    }

    pub async fn create_knowledge_article(
        &self,
        board_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::create(self.client, board_id, "collaboration-knowledge-articles", payload).await
    }

    pub async fn update_knowledge_article(
        &self,
        board_id: &str,
        article_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        dispatch::update(
            self.client,
            board_id,
            "collaboration-knowledge-articles",
            article_id,
            payload,
        )
        .await
    }

    pub async fn delete_knowledge_article(
        &self,
        board_id: &str,
        article_id: &str,
    ) -> Result<Value, ApiError> {
        dispatch::delete(
            self.client,
            board_id,
            "collaboration-knowledge-articles",
            article_id,
        )
        .await
    }

    /// Ask the AI coach a question about the board
    pub async fn ask_coach(&self, board_id: &str, payload: &Value) -> Result<Value, ApiError> {
        dispatch::action(
            self.client,
            board_id,
            "collaboration-ask-coach",
            None,
            Some(payload),
        )
        .await
    }
}
