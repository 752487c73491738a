//! Builds the outbound emails for bookings, widget submissions and
//! newsletter signups.

use minijinja::context;

use crate::config::AgencyProfile;
use crate::engine::FormSubmission;
use crate::models::{booking_service_name, BookingRequest, NewsletterSignup};
use crate::services::mailer::Email;
use crate::services::templates::{self, Templates};

/// Agency notification and client receipt for a `create_booking` request.
pub fn booking_emails(
    templates: &Templates,
    agency: &AgencyProfile,
    booking_id: &str,
    booking: &BookingRequest,
    booked_at: &str,
) -> anyhow::Result<(Email, Email)> {
    let service_name = booking_service_name(&booking.service);
    let ctx = context! {
        booking_id,
        booking,
        service_name,
        booked_at,
        agency,
        whatsapp_digits => booking.phone_digits(),
    };

    let to_agency = Email {
        to: agency.email.clone(),
        subject: format!("🎯 New Booking: {service_name} - {}", booking.name),
        html: templates.render(templates::BOOKING_AGENCY, ctx.clone())?,
    };
    let to_client = Email {
        to: booking.email.clone(),
        subject: format!("✅ Your {} Demo is Confirmed!", short_name(agency)),
        html: templates.render(templates::BOOKING_CLIENT, ctx)?,
    };
    Ok((to_agency, to_client))
}

/// Agency notification for a completed widget form.
pub fn submission_email(
    templates: &Templates,
    agency: &AgencyProfile,
    submission: &FormSubmission,
) -> anyhow::Result<Email> {
    let (subject, html) = match submission {
        FormSubmission::ServiceBooking(record) => (
            format!("New Service Booking: {}", record.service.service_name()),
            templates.render(
                templates::SERVICE_BOOKING,
                context! {
                    details => &record.details,
                    project => &record.project,
                    industry => record.details.industry_label(),
                    service_name => record.service.service_name(),
                    agency,
                },
            )?,
        ),
        FormSubmission::DemoBooking(record) => (
            format!("New Demo Booking: {}", record.service.demo_name()),
            templates.render(
                templates::DEMO_BOOKING,
                context! {
                    details => &record.details,
                    schedule => &record.schedule,
                    industry => record.details.industry_label(),
                    service_name => record.service.demo_name(),
                    agency,
                },
            )?,
        ),
        FormSubmission::Contact(record) => (
            format!("New Contact: {}", record.details.subject),
            templates.render(
                templates::CONTACT,
                context! {
                    details => &record.details,
                    contact_type => record.contact_type.display_name(),
                    agency,
                },
            )?,
        ),
        FormSubmission::Support(record) => {
            let priority = record.issue.priority.as_str().to_uppercase();
            (
                format!("[{priority}] Support Ticket: {}", record.details.subject),
                templates.render(
                    templates::SUPPORT_TICKET,
                    context! {
                        details => &record.details,
                        issue => &record.issue,
                        category => record.category.display_name(),
                        priority,
                        agency,
                    },
                )?,
            )
        }
    };

    Ok(Email {
        to: agency.email.clone(),
        subject,
        html,
    })
}

pub fn newsletter_email(
    templates: &Templates,
    agency: &AgencyProfile,
    signup: &NewsletterSignup,
    subscribed_at: &str,
) -> anyhow::Result<Email> {
    Ok(Email {
        to: agency.email.clone(),
        subject: format!("New Newsletter Subscriber: {}", signup.email.trim()),
        html: templates.render(
            templates::NEWSLETTER,
            context! { signup, agency, subscribed_at },
        )?,
    })
}

/// "Opsora Agency" -> "Opsora"
fn short_name(agency: &AgencyProfile) -> &str {
    agency
        .name
        .split_whitespace()
        .next()
        .unwrap_or(agency.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::contact::{ContactDetails, ContactRecord};
    use crate::engine::support::{SupportDetails, SupportIssue, SupportTicketRecord};
    use crate::models::{ContactType, Priority, SupportCategory};

    fn fixtures() -> (Templates, AgencyProfile) {
        (Templates::new().unwrap(), AgencyProfile::default())
    }

    #[test]
    fn test_booking_emails_addressing_and_subjects() {
        let (templates, agency) = fixtures();
        let booking = BookingRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            service: "ai_chatbot".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            ..Default::default()
        };

        let (to_agency, to_client) =
            booking_emails(&templates, &agency, "OPS-1", &booking, "2026-01-01").unwrap();

        assert_eq!(to_agency.to, agency.email);
        assert_eq!(to_agency.subject, "🎯 New Booking: AI Chatbot Development - Asha");
        assert!(to_agency.html.contains("OPS-1"));
        assert!(to_agency.html.contains("wa.me/919876543210"));
        assert!(to_agency.html.contains("Not provided"));

        assert_eq!(to_client.to, "asha@example.com");
        assert_eq!(to_client.subject, "✅ Your Opsora Demo is Confirmed!");
        assert!(to_client.html.contains(&agency.phone));
    }

    #[test]
    fn test_support_ticket_subject_carries_priority() {
        let (templates, agency) = fixtures();
        let submission = FormSubmission::Support(SupportTicketRecord {
            category: SupportCategory::Bug,
            details: SupportDetails {
                name: "Dev".to_string(),
                email: "dev@example.com".to_string(),
                subject: "Login loop".to_string(),
                ..Default::default()
            },
            issue: SupportIssue {
                priority: Priority::High,
                message: "Cannot log in".to_string(),
                ..Default::default()
            },
        });

        let email = submission_email(&templates, &agency, &submission).unwrap();
        assert_eq!(email.subject, "[HIGH] Support Ticket: Login loop");
        assert!(email.html.contains("Bug Report"));
        assert!(!email.html.contains("Steps to Reproduce"));
    }

    #[test]
    fn test_contact_email_escapes_message() {
        let (templates, agency) = fixtures();
        let submission = FormSubmission::Contact(ContactRecord {
            contact_type: ContactType::Partnership,
            details: ContactDetails {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                subject: "Collab".to_string(),
                message: "<script>alert(1)</script>".to_string(),
                ..Default::default()
            },
        });

        let email = submission_email(&templates, &agency, &submission).unwrap();
        assert_eq!(email.subject, "New Contact: Collab");
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("Partnership"));
    }
}
