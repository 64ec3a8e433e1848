//! Async client for a Spring AI chat backend.
//!
//! ```no_run
//! use std::sync::Arc;
//! use spring_ai_chat::{ApiClient, ApiConfig, ChatRequest, ChatService};
//!
//! # async fn run() -> spring_ai_chat::Result<()> {
//! let client = Arc::new(ApiClient::new(&ApiConfig::from_env())?);
//! let chat = ChatService::new(client);
//!
//! let reply = chat.send_chat_request(&ChatRequest::new("Who are you?")).await?;
//! println!("{}", reply.data.response);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod client;
pub mod config;

pub use chat::models::{new_conversation_id, AiChatResponse, ChatRequest, ModelOptions};
pub use chat::ChatService;
pub use client::{ApiClient, ApiError, ApiResponse, Result};
pub use config::ApiConfig;
