//! AI coaching assistant.
//!
//! The core never surfaces an assistant failure to the user. [`ask`] and
//! [`daily_quote`] log the error and return a canned reply instead.

mod context;
pub mod credentials;
mod gemini;

pub use context::CoachContext;
pub use gemini::GeminiClient;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't get a response. Please check the API key and try again.";
pub const QUOTE_PROMPT: &str = "Give me a short, inspiring quote about productivity or learning.";
pub const FALLBACK_QUOTE: &str =
    "The secret of getting ahead is getting started. – Mark Twain";

/// Text completion service.
pub trait Assistant {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

/// Ask a question with the user's context attached.
pub async fn ask<A: Assistant>(assistant: &A, context: &CoachContext<'_>, question: &str) -> String {
    match assistant.complete(&context.prompt(question)).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "assistant chat failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

pub async fn daily_quote<A: Assistant>(assistant: &A) -> String {
    match assistant.complete(QUOTE_PROMPT).await {
        Ok(quote) => quote.trim().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "daily quote failed");
            FALLBACK_QUOTE.to_string()
        }
    }
}
