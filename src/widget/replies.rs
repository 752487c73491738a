//! Assistant messages the widget posts around form submissions.

use crate::config::AgencyProfile;
use crate::engine::{FormKind, FormSubmission};

pub const FORM_CANCELLED: &str = "Form cancelled. How else can I help you today?";

pub fn processing(kind: FormKind) -> &'static str {
    match kind {
        FormKind::ServiceBooking => "⏳ **Processing your service booking...**",
        FormKind::DemoBooking => "⏳ **Processing your demo booking...**",
        FormKind::Contact => "⏳ **Sending your message...**",
        FormKind::Support => "⏳ **Submitting your support ticket...**",
    }
}

/// "Opsora Agency" -> "Opsora"
fn brand(agency: &AgencyProfile) -> &str {
    agency
        .name
        .split_whitespace()
        .next()
        .unwrap_or(agency.name.as_str())
}

pub fn submitted(submission: &FormSubmission, reference: u32, agency: &AgencyProfile) -> String {
    let email = submission.submitter_email();
    let brand = brand(agency);
    match submission {
        FormSubmission::ServiceBooking(_) => format!(
            "✅ **Service Booking Confirmed Successfully!**\n\n🎯 **Reference ID:** #{reference}\n📧 **Confirmation sent to:** {email}\n👥 **Our team will contact you within 24 hours**\n\nThank you for choosing {brand}! 🚀"
        ),
        FormSubmission::DemoBooking(_) => format!(
            "✅ **Demo Booking Confirmed Successfully!**\n\n🎯 **Reference ID:** #{reference}\n📧 **Calendar invitation will be sent to:** {email}\n👥 **Our team will confirm your demo within 2 hours**\n\nThank you for choosing {brand}! 🚀"
        ),
        FormSubmission::Contact(_) => format!(
            "✅ **Message Sent Successfully!**\n\n📧 **Confirmation sent to:** {email}\n⏱️ **We aim to respond within 24 hours**\n\nThank you for contacting {brand}! 🚀"
        ),
        FormSubmission::Support(record) => format!(
            "✅ **Support Ticket Submitted Successfully!**\n\n🆔 **Ticket ID:** #{reference}\n📧 **Confirmation sent to:** {email}\n⏱️ **Expected response time:** {}\n\nOur support team will contact you soon! 🛠️",
            record.issue.priority.response_time()
        ),
    }
}

pub fn submission_failed(kind: FormKind, agency: &AgencyProfile) -> String {
    let (headline, closing) = match kind {
        FormKind::ServiceBooking => (
            "Booking submission failed.",
            "\n\nWe'll help you complete your booking manually.",
        ),
        FormKind::DemoBooking => (
            "Demo booking submission failed.",
            "\n\nWe'll help you schedule your demo manually.",
        ),
        FormKind::Contact => ("Message submission failed.", ""),
        FormKind::Support => ("Ticket submission failed.", ""),
    };
    format!(
        "❌ **{headline}**\n\nPlease contact us directly:\n📧 **Email:** {}\n📞 **Phone:** {}{closing}",
        agency.email, agency.phone
    )
}
