use chrono::Duration;
use minijinja::context;

use crate::config::{AppConfig, DEFAULT_SESSION_TTL_MINUTES};
use crate::services::ai::LlmProvider;
use crate::services::mailer::Mailer;
use crate::services::templates::{self, Templates};
use crate::widget::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    /// Tried in order for every chat turn.
    pub providers: Vec<Box<dyn LlmProvider>>,
    pub mailer: Box<dyn Mailer>,
    pub templates: Templates,
    pub system_prompt: String,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        providers: Vec<Box<dyn LlmProvider>>,
        mailer: Box<dyn Mailer>,
    ) -> anyhow::Result<Self> {
        let templates = Templates::new()?;
        let system_prompt = templates.render(
            templates::SYSTEM_PROMPT,
            context! { agency => &config.agency },
        )?;
        let sessions = SessionStore::new(session_ttl(config.session_ttl_minutes));

        Ok(Self {
            config,
            providers,
            mailer,
            templates,
            system_prompt,
            sessions,
        })
    }
}

/// Idle lifetime of a widget session. Values outside one minute to one week
/// fall back to the default.
fn session_ttl(minutes: i64) -> Duration {
    let default = Duration::minutes(DEFAULT_SESSION_TTL_MINUTES);
    match Duration::try_minutes(minutes) {
        Some(ttl) if ttl >= Duration::minutes(1) && ttl <= Duration::weeks(1) => ttl,
        _ => {
            tracing::warn!(minutes, "session ttl out of range, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_bounds() {
        assert_eq!(session_ttl(45), Duration::minutes(45));
        assert_eq!(session_ttl(0), Duration::minutes(DEFAULT_SESSION_TTL_MINUTES));
        assert_eq!(session_ttl(-5), Duration::minutes(DEFAULT_SESSION_TTL_MINUTES));
        assert_eq!(session_ttl(i64::MAX), Duration::minutes(DEFAULT_SESSION_TTL_MINUTES));
    }
}
