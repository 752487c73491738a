use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
