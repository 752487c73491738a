use serde::Serialize;

use crate::models::ChatMessage;

use super::LlmProvider;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub content: String,
    pub provider: String,
}

/// Tries each provider in order and returns the first non-empty completion.
/// Calls are strictly sequential; a later provider is only contacted after
/// the earlier one failed.
pub async fn first_success(
    providers: &[Box<dyn LlmProvider>],
    system_prompt: &str,
    messages: &[ChatMessage],
) -> Option<Completion> {
    for provider in providers {
        match provider.chat(system_prompt, messages).await {
            Ok(content) if !content.trim().is_empty() => {
                tracing::debug!(provider = provider.name(), "provider answered");
                return Some(Completion {
                    content,
                    provider: provider.name().to_string(),
                });
            }
            Ok(_) => {
                tracing::warn!(provider = provider.name(), "provider returned empty content");
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "provider failed");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;

    struct Scripted {
        name: &'static str,
        reply: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl LlmProvider for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        async fn chat(&self, _system: &str, _messages: &[ChatMessage]) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(|r| r.to_string())
                .ok_or_else(|| anyhow::anyhow!("{} unavailable", self.name))
        }
    }

    fn scripted(name: &'static str, reply: Option<&'static str>) -> (Box<dyn LlmProvider>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Scripted {
            name,
            reply,
            calls: Arc::clone(&calls),
        };
        (Box::new(provider), calls)
    }

    #[tokio::test]
    async fn test_primary_wins_and_secondary_untouched() {
        let (a, _) = scripted("groq", Some("hi from groq"));
        let (b, b_calls) = scripted("openrouter", Some("hi from openrouter"));
        let got = first_success(&[a, b], "sys", &[ChatMessage::user("hi")]).await;
        assert_eq!(
            got,
            Some(Completion {
                content: "hi from groq".to_string(),
                provider: "groq".to_string(),
            })
        );
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_error_and_blank_content_fall_through() {
        let (a, _) = scripted("groq", None);
        let (b, _) = scripted("blank", Some("   "));
        let (c, _) = scripted("openrouter", Some("backup"));
        let got = first_success(&[a, b, c], "sys", &[]).await.unwrap();
        assert_eq!(got.provider, "openrouter");
        assert_eq!(got.content, "backup");
    }

    #[tokio::test]
    async fn test_all_failing_yields_none() {
        let (a, _) = scripted("groq", None);
        let (b, _) = scripted("openrouter", None);
        assert!(first_success(&[a, b], "sys", &[]).await.is_none());
        assert!(first_success(&[], "sys", &[]).await.is_none());
    }
}
