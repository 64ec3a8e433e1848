pub mod models;

use std::sync::Arc;

use log::debug;

use crate::client::{ApiClient, ApiError, ApiResponse, Result};
use models::{AiChatResponse, ChatRequest, PromptRequest};

pub const CHAT_REQUEST_PATH: &str = "/actor-character_request";
pub const PROMPT_PATH: &str = "/chat";

/// Typed call surface over the shared [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ChatService {
    client: Arc<ApiClient>,
}

impl ChatService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Sends a structured chat request. Optional fields are only sent when set.
    pub async fn send_chat_request(
        &self,
        request: &ChatRequest,
    ) -> Result<ApiResponse<AiChatResponse>> {
        if request.message.is_empty() {
            return Err(ApiError::EmptyInput("message"));
        }
        debug!(
            "Chat request (conversation: {:?}, options: {:?})",
            request.conversation_id, request.options
        );

        self.client.post(CHAT_REQUEST_PATH, request).await
    }

    /// Sends a bare prompt as `{ "prompt": ... }`.
    pub async fn send_prompt(&self, prompt: &str) -> Result<ApiResponse<AiChatResponse>> {
        if prompt.is_empty() {
            return Err(ApiError::EmptyInput("prompt"));
        }

        self.client.post(PROMPT_PATH, &PromptRequest { prompt }).await
    }
}
