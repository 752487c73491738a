use std::env;
use std::time::Duration;

pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENROUTER_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// Contact details quoted in every fallback message and email template.
#[derive(Clone, Debug, serde::Serialize)]
pub struct AgencyProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp_url: String,
    pub tagline: String,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: "Opsora Agency".to_string(),
            email: "opsoraagency@gmail.com".to_string(),
            phone: "+91 8401765505".to_string(),
            whatsapp_url: "https://wa.me/918401765505".to_string(),
            tagline: "Digital Solutions for Sustainable Growth".to_string(),
        }
    }
}

impl AgencyProfile {
    /// One-line manual contact fallback, e.g. for booking responses.
    pub fn contact_line(&self) -> String {
        format!("Email: {} | Phone: {}", self.email, self.phone)
    }
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub name: String,
    pub url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub extra_headers: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub site_url: String,
    pub email_api_url: String,
    pub primary: ProviderConfig,
    pub secondary: ProviderConfig,
    pub agency: AgencyProfile,
    pub provider_timeout: Duration,
    pub session_ttl_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = AgencyProfile::default();
        let agency = AgencyProfile {
            name: env::var("AGENCY_NAME").unwrap_or(defaults.name),
            email: env::var("AGENCY_EMAIL").unwrap_or(defaults.email),
            phone: env::var("AGENCY_PHONE").unwrap_or(defaults.phone),
            whatsapp_url: env::var("AGENCY_WHATSAPP").unwrap_or(defaults.whatsapp_url),
            tagline: defaults.tagline,
        };
        let site_url = env::var("SITE_URL").unwrap_or_else(|_| "https://opsora.agency".to_string());

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            email_api_url: env::var("EMAIL_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/send-email".to_string()),
            primary: ProviderConfig {
                name: "groq".to_string(),
                url: env::var("GROQ_API_URL").unwrap_or_else(|_| GROQ_URL.to_string()),
                api_key: non_empty_var("GROQ_API_KEY"),
                model: env::var("GROQ_MODEL").unwrap_or_else(|_| GROQ_MODEL.to_string()),
                extra_headers: vec![],
            },
            secondary: ProviderConfig {
                name: "openrouter".to_string(),
                url: env::var("OPENROUTER_API_URL").unwrap_or_else(|_| OPENROUTER_URL.to_string()),
                api_key: non_empty_var("OPENROUTER_API_KEY"),
                model: env::var("OPENROUTER_MODEL")
                    .unwrap_or_else(|_| OPENROUTER_MODEL.to_string()),
                extra_headers: vec![
                    ("HTTP-Referer".to_string(), site_url.clone()),
                    ("X-Title".to_string(), agency.name.clone()),
                ],
            },
            provider_timeout: Duration::from_secs(
                env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            session_ttl_minutes: env::var("WIDGET_SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_MINUTES),
            site_url,
            agency,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
