use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use opsora_assist::config::AppConfig;
use opsora_assist::handlers;
use opsora_assist::services::ai::openai_compat::OpenAiCompatProvider;
use opsora_assist::services::ai::LlmProvider;
use opsora_assist::services::mailer::http::HttpMailer;
use opsora_assist::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let mut providers: Vec<Box<dyn LlmProvider>> = Vec::new();
    for provider in [config.primary.clone(), config.secondary.clone()] {
        if provider.api_key.is_none() {
            tracing::warn!(provider = %provider.name, "no API key configured, provider will be skipped");
        } else {
            tracing::info!(provider = %provider.name, model = %provider.model, "LLM provider configured");
        }
        providers.push(Box::new(OpenAiCompatProvider::new(
            provider,
            config.provider_timeout,
        )?));
    }

    let mailer = HttpMailer::new(config.email_api_url.clone(), config.provider_timeout)?;
    tracing::info!(endpoint = %config.email_api_url, "email collaborator configured");

    let state = Arc::new(AppState::new(config.clone(), providers, Box::new(mailer))?);
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
