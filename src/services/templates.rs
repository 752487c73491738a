use anyhow::Context;
use minijinja::{Environment, Value};

pub const SYSTEM_PROMPT: &str = "system_prompt.txt";
pub const BOOKING_AGENCY: &str = "booking_agency.html";
pub const BOOKING_CLIENT: &str = "booking_client.html";
pub const SERVICE_BOOKING: &str = "service_booking.html";
pub const DEMO_BOOKING: &str = "demo_booking.html";
pub const CONTACT: &str = "contact.html";
pub const SUPPORT_TICKET: &str = "support_ticket.html";
pub const NEWSLETTER: &str = "newsletter.html";

const SOURCES: &[(&str, &str)] = &[
    (SYSTEM_PROMPT, include_str!("../templates/system_prompt.txt")),
    (BOOKING_AGENCY, include_str!("../templates/booking_agency.html")),
    (BOOKING_CLIENT, include_str!("../templates/booking_client.html")),
    (SERVICE_BOOKING, include_str!("../templates/service_booking.html")),
    (DEMO_BOOKING, include_str!("../templates/demo_booking.html")),
    (CONTACT, include_str!("../templates/contact.html")),
    (SUPPORT_TICKET, include_str!("../templates/support_ticket.html")),
    (NEWSLETTER, include_str!("../templates/newsletter.html")),
];

/// Compiled prompt and email templates. `.html` templates are auto-escaped.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in SOURCES {
            env.add_template(name, source)
                .with_context(|| format!("failed to compile template {name}"))?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> anyhow::Result<String> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .with_context(|| format!("failed to render template {name}"))
    }
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;
    use crate::config::AgencyProfile;

    #[test]
    fn test_all_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_html_templates_escape_user_input() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                NEWSLETTER,
                context! {
                    signup => context! { email => "<b>x</b>@example.com" },
                    agency => AgencyProfile::default(),
                    subscribed_at => "now",
                },
            )
            .unwrap();
        assert!(html.contains("&lt;b&gt;x"));
        assert!(!html.contains("<b>x"));
        assert!(html.contains("Not provided"));
    }

    #[test]
    fn test_system_prompt_mentions_agency_contacts() {
        let templates = Templates::new().unwrap();
        let agency = AgencyProfile::default();
        let prompt = templates
            .render(SYSTEM_PROMPT, context! { agency => &agency })
            .unwrap();
        assert!(prompt.contains(&agency.name));
        assert!(prompt.contains(&agency.email));
        assert!(!prompt.contains("&#x"));
    }
}
