//! Chat turns, bookings and widget effects, run against the shared state.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::config::AgencyProfile;
use crate::engine::fields::is_plausible_email;
use crate::engine::FormSubmission;
use crate::models::{BookingRequest, ChatMessage, DispatchResponse, Role};
use crate::services::ai::first_success;
use crate::services::notifications;
use crate::state::AppState;
use crate::widget::{Effect, Outcome};

pub const NEXT_STEPS: [&str; 3] = [
    "Confirmation email sent to you",
    "Our team will contact within 24 hours",
    "Check spam folder if no email received",
];

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Shown when every provider failed.
pub fn provider_fallback(agency: &AgencyProfile) -> String {
    format!(
        "I apologize, I'm having trouble connecting to my AI services right now. 😔\n\n📞 **Please contact us directly:**\n• **Email:** {}\n• **Phone:** {}\n• **WhatsApp:** {}\n\nWe'll get back to you within 24 hours! 🚀",
        agency.email, agency.phone, agency.whatsapp_url
    )
}

/// Shown when the chat request itself could not be handled.
pub fn apology(agency: &AgencyProfile) -> DispatchResponse {
    DispatchResponse {
        success: true,
        content: Some(format!(
            "I encountered an error. Please contact us directly:\n📧 **Email:** {}\n📞 **Phone:** {}\n\nWe're here to help! 🚀",
            agency.email, agency.phone
        )),
        ..Default::default()
    }
}

/// Acknowledges a booking whose notifications could not be prepared.
pub fn booking_recorded(agency: &AgencyProfile) -> DispatchResponse {
    DispatchResponse {
        success: true,
        message: Some("Booking recorded!".to_string()),
        note: Some(format!("Please email us directly to confirm: {}", agency.email)),
        timestamp: Some(now_rfc3339()),
        ..Default::default()
    }
}

/// Sends the transcript to the providers in order. Never fails: when no
/// provider answers the reply is the canned contact message.
pub async fn send_chat_turn(state: &AppState, history: &[ChatMessage]) -> DispatchResponse {
    // the only system message is ours
    let history: Vec<ChatMessage> = history
        .iter()
        .filter(|m| m.role != Role::System)
        .cloned()
        .collect();

    let (content, provider) =
        match first_success(&state.providers, &state.system_prompt, &history).await {
            Some(completion) => (completion.content, completion.provider),
            None => {
                tracing::warn!("all providers failed, sending fallback reply");
                (provider_fallback(&state.config.agency), "fallback".to_string())
            }
        };

    DispatchResponse {
        success: true,
        content: Some(content),
        provider: Some(provider),
        ..Default::default()
    }
}

/// Notifies the agency and the client about a booking. Every outcome is a
/// success response; only the message and follow-up fields differ.
pub async fn create_booking(state: &AppState, booking: BookingRequest) -> DispatchResponse {
    match try_create_booking(state, &booking).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, email = %booking.email, "booking failed");
            booking_recorded(&state.config.agency)
        }
    }
}

async fn try_create_booking(
    state: &AppState,
    booking: &BookingRequest,
) -> anyhow::Result<DispatchResponse> {
    let now = Utc::now();
    let booking_id = format!("OPS-{}", now.timestamp_millis());
    tracing::info!(%booking_id, service = %booking.service, "new booking received");

    let agency = &state.config.agency;
    let booked_at = now.format("%Y-%m-%d %H:%M UTC").to_string();
    let (to_agency, to_client) =
        notifications::booking_emails(&state.templates, agency, &booking_id, booking, &booked_at)?;

    let client_send = async {
        if !is_plausible_email(&to_client.to) {
            anyhow::bail!("client email {:?} is not deliverable", to_client.to);
        }
        state.mailer.send(&to_client).await
    };
    let (agency_sent, client_sent) = tokio::join!(state.mailer.send(&to_agency), client_send);

    if let Err(e) = &agency_sent {
        tracing::warn!(%booking_id, error = %e, "agency booking email failed");
    }
    if let Err(e) = &client_sent {
        tracing::warn!(%booking_id, error = %e, "client booking email failed");
    }

    let mut response = DispatchResponse {
        success: true,
        booking_id: Some(booking_id),
        timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ..Default::default()
    };
    if agency_sent.is_ok() && client_sent.is_ok() {
        response.message = Some("Booking confirmed successfully!".to_string());
        response.next_steps = Some(NEXT_STEPS.iter().map(|s| s.to_string()).collect());
    } else {
        response.message = Some("Booking recorded successfully!".to_string());
        response.note = Some("Our team will contact you soon".to_string());
        response.contact_info = Some(agency.contact_line());
    }
    Ok(response)
}

/// Emails a completed widget form to the agency.
pub async fn deliver_submission(
    state: &AppState,
    submission: &FormSubmission,
) -> anyhow::Result<()> {
    let email = notifications::submission_email(&state.templates, &state.config.agency, submission)?;
    state.mailer.send(&email).await
}

/// Six-digit reference shown to the visitor, `100000..=999999`.
pub fn reference_number() -> u32 {
    let n = Uuid::new_v4().as_u128() % 900_000;
    100_000 + n as u32
}

/// Performs one widget effect and reports what happened.
pub async fn run_effect(state: &AppState, effect: Effect) -> Outcome {
    match effect {
        Effect::AskAssistant { history } => {
            let reply = send_chat_turn(state, &history).await;
            Outcome::AssistantReplied(reply.content.unwrap_or_default())
        }
        Effect::Submit(submission) => {
            let kind = submission.kind();
            let delivered = match deliver_submission(state, &submission).await {
                Ok(()) => {
                    tracing::info!(form = kind.as_str(), "widget form delivered");
                    true
                }
                Err(e) => {
                    tracing::warn!(form = kind.as_str(), error = %e, "widget form delivery failed");
                    false
                }
            };
            Outcome::SubmissionFinished {
                delivered,
                reference: reference_number(),
            }
        }
    }
}

/// What the visitor is told when an effect could not run to completion.
pub fn failed_outcome(agency: &AgencyProfile, effect: &Effect) -> Outcome {
    match effect {
        Effect::AskAssistant { .. } => Outcome::AssistantReplied(provider_fallback(agency)),
        Effect::Submit(_) => Outcome::SubmissionFinished {
            delivered: false,
            reference: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_number_is_six_digits() {
        for _ in 0..100 {
            let n = reference_number();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[test]
    fn test_fallback_lists_every_channel() {
        let agency = AgencyProfile::default();
        let text = provider_fallback(&agency);
        assert!(text.contains(&agency.email));
        assert!(text.contains(&agency.phone));
        assert!(text.contains(&agency.whatsapp_url));
    }

    #[test]
    fn test_failed_outcome_offers_contact() {
        let agency = AgencyProfile::default();
        let outcome = failed_outcome(&agency, &Effect::AskAssistant { history: vec![] });
        assert_eq!(outcome, Outcome::AssistantReplied(provider_fallback(&agency)));
    }

    #[test]
    fn test_apology_is_success() {
        let resp = apology(&AgencyProfile::default());
        assert!(resp.success);
        assert!(resp.provider.is_none());
        assert!(resp.content.unwrap().starts_with("I encountered an error."));
    }
}
