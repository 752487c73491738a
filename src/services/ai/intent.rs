//! Keyword routing of widget text, applied before anything reaches a provider.

use crate::config::AgencyProfile;
use crate::engine::FormKind;

const FORM_KEYWORDS: &[(FormKind, &[&str])] = &[
    (
        FormKind::ServiceBooking,
        &["book service", "service booking", "hire service"],
    ),
    (
        FormKind::DemoBooking,
        &["book demo", "schedule demo", "demo booking"],
    ),
    (
        FormKind::Contact,
        &["contact", "message", "email", "get in touch"],
    ),
    (
        FormKind::Support,
        &["support", "help", "ticket", "issue", "problem"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedTopic {
    Contact,
    Services,
    Pricing,
    About,
    Tools,
    Results,
}

const CANNED_KEYWORDS: &[(CannedTopic, &[&str])] = &[
    (
        CannedTopic::Contact,
        &["contact", "email", "phone", "call", "whatsapp"],
    ),
    (
        CannedTopic::Services,
        &["service", "offer", "what do you do", "provide"],
    ),
    (
        CannedTopic::Pricing,
        &["price", "cost", "how much", "quote"],
    ),
    (
        CannedTopic::About,
        &["about", "who are you", "company", "opsora"],
    ),
    (
        CannedTopic::Tools,
        &["tool", "technology", "use", "tech stack"],
    ),
    (
        CannedTopic::Results,
        &["result", "benefit", "achieve", "deliver"],
    ),
];

fn first_match<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<T> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(value, _)| *value)
}

pub fn detect_form_intent(text: &str) -> Option<FormKind> {
    first_match(text, FORM_KEYWORDS)
}

pub fn detect_canned_topic(text: &str) -> Option<CannedTopic> {
    first_match(text, CANNED_KEYWORDS)
}

pub fn greeting(agency: &AgencyProfile) -> String {
    format!("🤖 **Hello! I'm the {} AI Assistant**\n\nI can help you with:\n\n📅 **Book Services/Demos**\n💰 **Get Pricing & Quotes**\n📞 **Contact Our Team**\n🚀 **Learn About Our Services**\n🛠️ **Get Support**\n❓ **Answer Any Questions**\n\n*Try saying: \"book demo\", \"book service\", \"contact\", \"support\", \"pricing\", or ask anything!*", agency.name)
}

pub fn canned_answer(topic: CannedTopic, agency: &AgencyProfile) -> String {
    match topic {
        CannedTopic::Contact => format!(
            "📞 **Contact {}:**\n\n• **Email:** {}\n• **Phone:** {}\n• **WhatsApp:** {}\n• **24/7 Support:** Available\n\n*Want to book a demo or get pricing? Just ask!*",
            agency.name, agency.email, agency.phone, agency.whatsapp_url
        ),
        CannedTopic::Services => "🚀 **Our Services:**\n\n1. **🤖 AI Chatbot Development**\n   - Natural Language Processing\n   - Multi-platform deployment\n   - 24/7 customer support\n\n2. **⚡ Workflow Automation**\n   - Business process automation\n   - AI-powered workflows\n\n3. **📈 Sales AI Agents**\n   - Lead generation & qualification\n   - Automated sales pipelines\n\n4. **🛠️ Support AI Agents**\n   - 24/7 instant support\n   - Ticket management\n\n5. **🎨 Custom AI Solutions**\n   - Tailored AI development\n   - Industry-specific solutions\n\n*Book a free demo to see which service fits your needs!*".to_string(),
        CannedTopic::Pricing => "💰 **Pricing Information:**\n\n• **Basic Plan:** Custom pricing\n  - Basic chatbot/automation\n  - Email support\n  - Monthly reports\n\n• **Professional Plan:** Custom pricing\n  - Advanced AI features\n  - Multi-platform\n  - Priority support\n\n• **Enterprise Plan:** Custom pricing\n  - Custom development\n  - Dedicated support\n  - API access\n\n**All plans include:**\n✓ No setup fees\n✓ Free demo trial\n✓ 24/7 support\n\n*For exact pricing, book a demo with our team!*".to_string(),
        CannedTopic::About => format!(
            "🏢 **About {}:**\n\nWe provide **{}**.\n\n**What we do:**\n• End-to-end marketing automation\n• CRM integration\n• Performance-driven strategies\n• AI-powered solutions\n\n**Our mission:** Build sustainable revenue pipelines and operational efficiency for modern businesses.\n\n*Trusted by 50+ businesses worldwide.*",
            agency.name, agency.tagline
        ),
        CannedTopic::Tools => "🛠️ **Technologies We Use:**\n\n• **AI & LLMs:** OpenAI GPT-4, Groq LLaMA 3.1, Claude AI\n• **Automation:** n8n, Zapier, Make.com, LangChain\n• **CRM:** HubSpot, Salesforce, Zoho, Pipedrive\n• **Communication:** WhatsApp Business, Telegram API, Slack\n\n*We use industry-leading tools to deliver robust solutions.*".to_string(),
        CannedTopic::Results => "📊 **Results We Deliver:**\n\n• **80%** query resolution without human help\n• **24/7** availability for customer support\n• **4.8/5** customer satisfaction rating\n• **70%** cost reduction vs traditional support\n• **50+** businesses successfully transformed\n\n*Our solutions are proven to drive real business growth.*".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_intents_in_priority_order() {
        assert_eq!(detect_form_intent("I want to Book Service"), Some(FormKind::ServiceBooking));
        assert_eq!(detect_form_intent("can I schedule demo?"), Some(FormKind::DemoBooking));
        assert_eq!(detect_form_intent("get in touch please"), Some(FormKind::Contact));
        assert_eq!(detect_form_intent("I have a problem"), Some(FormKind::Support));
        // "book service" wins over the contact keyword "email"
        assert_eq!(
            detect_form_intent("book service and email me"),
            Some(FormKind::ServiceBooking)
        );
        assert_eq!(detect_form_intent("what's the weather"), None);
    }

    #[test]
    fn test_canned_topics() {
        assert_eq!(detect_canned_topic("What's the PRICE?"), Some(CannedTopic::Pricing));
        assert_eq!(detect_canned_topic("which services do you offer"), Some(CannedTopic::Services));
        assert_eq!(detect_canned_topic("what results do you achieve"), Some(CannedTopic::Results));
        assert_eq!(detect_canned_topic("tell me a joke"), None);
    }

    #[test]
    fn test_contact_answer_uses_agency_profile() {
        let agency = AgencyProfile::default();
        let answer = canned_answer(CannedTopic::Contact, &agency);
        assert!(answer.contains(&agency.email));
        assert!(answer.contains(&agency.phone));
    }
}
