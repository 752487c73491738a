pub mod fallback;
pub mod intent;
pub mod openai_compat;

use async_trait::async_trait;

use crate::models::ChatMessage;

pub use fallback::{first_success, Completion};

/// A hosted chat-completion backend.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short tag reported to the widget, e.g. `groq`.
    fn name(&self) -> &str;

    async fn chat(&self, system_prompt: &str, messages: &[ChatMessage]) -> anyhow::Result<String>;
}
