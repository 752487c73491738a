use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::{Email, Mailer};

/// Posts `{to, subject, html}` to the site's email endpoint. Any 2xx counts
/// as delivered.
pub struct HttpMailer {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpMailer {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        self.client
            .post(&self.endpoint)
            .json(email)
            .send()
            .await
            .context("failed to call email API")?
            .error_for_status()
            .context("email API returned error")?;

        Ok(())
    }
}
