//! The chat widget controller.
//!
//! [`ChatWidget`] owns the transcript, the single active form and the busy
//! flag. [`ChatWidget::apply`] is pure: anything that needs the network is
//! returned as an [`Effect`] and its result is fed back through
//! [`ChatWidget::resolve`]. While an effect is in flight the widget rejects
//! further events, except `new_chat`, which starts a new conversation and
//! makes the in-flight result stale.

pub mod replies;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::config::AgencyProfile;
use crate::engine::{
    FormError, FormEvent, FormKind, FormSession, FormSubmission, FormTransition, SummaryField,
};
use crate::models::ChatMessage;
use crate::services::ai::intent;

pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("a reply or submission is still in progress")]
    Busy,

    #[error("message is empty")]
    EmptyMessage,

    #[error("no form is active")]
    NoActiveForm,

    #[error("nothing is waiting for this result")]
    NothingPending,

    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    UserText { text: String },
    StartForm { form: FormKind },
    Form { event: FormEvent },
    NewChat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the completion providers for a reply to the full transcript.
    AskAssistant { history: Vec<ChatMessage> },
    /// Deliver a completed form.
    Submit(FormSubmission),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    AssistantReplied(String),
    SubmissionFinished { delivered: bool, reference: u32 },
}

#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Reply,
    Submission(FormSubmission),
}

#[derive(Debug, Clone)]
pub struct ChatWidget {
    agency: AgencyProfile,
    messages: Vec<ChatMessage>,
    active: Option<FormSession>,
    pending: Option<Pending>,
    /// Bumped by `new_chat`; outcomes from an earlier conversation are dropped.
    conversation: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub kind: FormKind,
    pub step: &'static str,
    pub steps: Vec<&'static str>,
    pub session: FormSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<SummaryField>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub messages: Vec<ChatMessage>,
    pub form: Option<FormView>,
    pub busy: bool,
}

impl ChatWidget {
    pub fn new(agency: AgencyProfile) -> Self {
        let greeting = intent::greeting(&agency);
        Self {
            agency,
            messages: vec![ChatMessage::assistant(greeting)],
            active: None,
            pending: None,
            conversation: 0,
        }
    }

    /// Identifies the current conversation, to pair outcomes with the
    /// conversation whose event produced them.
    pub fn conversation(&self) -> u64 {
        self.conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn active_form(&self) -> Option<&FormSession> {
        self.active.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn apply(&mut self, event: WidgetEvent) -> Result<Vec<Effect>, WidgetError> {
        if self.is_busy() && event != WidgetEvent::NewChat {
            return Err(WidgetError::Busy);
        }

        match event {
            WidgetEvent::UserText { text } => self.user_text(text),
            WidgetEvent::StartForm { form } => {
                self.start_form(form);
                Ok(vec![])
            }
            WidgetEvent::Form { event } => self.form_event(event),
            WidgetEvent::NewChat => {
                let conversation = self.conversation + 1;
                *self = Self::new(self.agency.clone());
                self.conversation = conversation;
                Ok(vec![])
            }
        }
    }

    pub fn resolve(&mut self, outcome: Outcome) -> Result<(), WidgetError> {
        match (self.pending.take(), outcome) {
            (Some(Pending::Reply), Outcome::AssistantReplied(content)) => {
                self.say(content);
                Ok(())
            }
            (
                Some(Pending::Submission(submission)),
                Outcome::SubmissionFinished {
                    delivered,
                    reference,
                },
            ) => {
                let reply = if delivered {
                    replies::submitted(&submission, reference, &self.agency)
                } else {
                    replies::submission_failed(submission.kind(), &self.agency)
                };
                self.say(reply);
                Ok(())
            }
            (pending, _) => {
                self.pending = pending;
                Err(WidgetError::NothingPending)
            }
        }
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            messages: self.messages.clone(),
            form: self.active.as_ref().map(|session| FormView {
                kind: session.kind(),
                step: session.step_name(),
                steps: session.steps(),
                session: session.clone(),
                summary: at_confirm(session).then(|| session.summary()),
            }),
            busy: self.is_busy(),
        }
    }

    fn say(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    fn start_form(&mut self, kind: FormKind) {
        // one form at a time
        if self.active.is_some() {
            return;
        }
        let session = FormSession::start(kind);
        self.say(session.ack());
        self.active = Some(session);
    }

    fn user_text(&mut self, text: String) -> Result<Vec<Effect>, WidgetError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WidgetError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text));

        if self.active.is_none() {
            if let Some(kind) = intent::detect_form_intent(text) {
                self.start_form(kind);
                return Ok(vec![]);
            }
        }

        if let Some(topic) = intent::detect_canned_topic(text) {
            let answer = intent::canned_answer(topic, &self.agency);
            self.say(answer);
            return Ok(vec![]);
        }

        self.pending = Some(Pending::Reply);
        Ok(vec![Effect::AskAssistant {
            history: self.messages.clone(),
        }])
    }

    fn form_event(&mut self, event: FormEvent) -> Result<Vec<Effect>, WidgetError> {
        let session = self.active.as_mut().ok_or(WidgetError::NoActiveForm)?;

        match session.apply(event)? {
            FormTransition::Advanced(ack) => {
                self.say(ack);
                Ok(vec![])
            }
            FormTransition::MovedBack => Ok(vec![]),
            FormTransition::Cancelled => {
                self.active = None;
                self.say(replies::FORM_CANCELLED);
                Ok(vec![])
            }
            FormTransition::Submitted(submission) => {
                // cleared whatever the delivery outcome
                self.active = None;
                self.say(replies::processing(submission.kind()));
                self.pending = Some(Pending::Submission(submission.clone()));
                Ok(vec![Effect::Submit(submission)])
            }
        }
    }
}

fn at_confirm(session: &FormSession) -> bool {
    session
        .steps()
        .last()
        .is_some_and(|last| *last == session.step_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{client_details, project_info};
    use crate::engine::StepInput;
    use crate::models::{Role, ServiceType};

    fn widget() -> ChatWidget {
        ChatWidget::new(AgencyProfile::default())
    }

    fn text(t: &str) -> WidgetEvent {
        WidgetEvent::UserText {
            text: t.to_string(),
        }
    }

    fn submit(input: StepInput) -> WidgetEvent {
        WidgetEvent::Form {
            event: FormEvent::Submit { input },
        }
    }

    fn last(w: &ChatWidget) -> &str {
        &w.messages().last().unwrap().content
    }

    fn fill_service_booking(w: &mut ChatWidget) {
        w.apply(text("I'd like to book service")).unwrap();
        w.apply(submit(StepInput::Service(ServiceType::Automation))).unwrap();
        w.apply(submit(StepInput::ClientDetails(client_details()))).unwrap();
        w.apply(submit(StepInput::ProjectInfo(project_info(&["Sales AI Agents"]))))
            .unwrap();
    }

    #[test]
    fn test_new_widget_is_greeted() {
        let w = widget();
        assert_eq!(w.messages().len(), 1);
        assert!(last(&w).contains("Opsora Agency AI Assistant"));
        assert!(!w.is_busy());
    }

    #[test]
    fn test_keyword_starts_form_without_provider_call() {
        let mut w = widget();
        let effects = w.apply(text("can we schedule demo next week?")).unwrap();
        assert!(effects.is_empty());
        assert_eq!(w.active_form().map(|f| f.kind()), Some(FormKind::DemoBooking));
        assert!(last(&w).contains("schedule your demo"));
    }

    #[test]
    fn test_form_intent_ignored_while_form_active() {
        let mut w = widget();
        w.apply(text("book service")).unwrap();
        w.apply(text("actually, what is the price of support?")).unwrap();
        assert_eq!(
            w.active_form().map(|f| f.kind()),
            Some(FormKind::ServiceBooking)
        );

        w.apply(WidgetEvent::StartForm {
            form: FormKind::Contact,
        })
        .unwrap();
        assert_eq!(
            w.active_form().map(|f| f.kind()),
            Some(FormKind::ServiceBooking)
        );
    }

    #[test]
    fn test_canned_answer_is_local() {
        let mut w = widget();
        let effects = w.apply(text("how much does it cost?")).unwrap();
        assert!(effects.is_empty());
        assert!(last(&w).contains("Pricing Information"));
    }

    #[test]
    fn test_free_text_asks_assistant_and_blocks_until_resolved() {
        let mut w = widget();
        let effects = w.apply(text("Tell me a joke")).unwrap();
        let [Effect::AskAssistant { history }] = effects.as_slice() else {
            panic!("expected one assistant request, got {effects:?}");
        };
        assert_eq!(history.last().map(|m| m.role), Some(Role::User));
        assert!(w.is_busy());

        assert_eq!(w.apply(text("hello?")), Err(WidgetError::Busy));

        w.resolve(Outcome::AssistantReplied("Why did the bot cross the road?".to_string()))
            .unwrap();
        assert!(!w.is_busy());
        assert_eq!(last(&w), "Why did the bot cross the road?");
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut w = widget();
        assert_eq!(w.apply(text("   ")), Err(WidgetError::EmptyMessage));
        assert_eq!(w.messages().len(), 1);
    }

    #[test]
    fn test_form_event_without_form() {
        let mut w = widget();
        assert_eq!(
            w.apply(WidgetEvent::Form {
                event: FormEvent::Back
            }),
            Err(WidgetError::NoActiveForm)
        );
    }

    #[test]
    fn test_confirm_emits_submit_and_clears_form() {
        let mut w = widget();
        fill_service_booking(&mut w);
        let view = w.view();
        assert_eq!(view.form.as_ref().map(|f| f.step), Some("confirm_booking"));
        assert!(view.form.as_ref().and_then(|f| f.summary.as_ref()).is_some());

        let effects = w
            .apply(WidgetEvent::Form {
                event: FormEvent::Confirm,
            })
            .unwrap();
        assert!(matches!(effects.as_slice(), [Effect::Submit(FormSubmission::ServiceBooking(_))]));
        assert!(w.active_form().is_none());
        assert!(w.is_busy());
        assert_eq!(last(&w), "⏳ **Processing your service booking...**");

        w.resolve(Outcome::SubmissionFinished {
            delivered: true,
            reference: 123456,
        })
        .unwrap();
        assert!(last(&w).contains("#123456"));
        assert!(last(&w).contains("asha@example.com"));
    }

    #[test]
    fn test_failed_submission_offers_manual_contact() {
        let mut w = widget();
        fill_service_booking(&mut w);
        w.apply(WidgetEvent::Form {
            event: FormEvent::Confirm,
        })
        .unwrap();
        w.resolve(Outcome::SubmissionFinished {
            delivered: false,
            reference: 0,
        })
        .unwrap();

        let agency = AgencyProfile::default();
        assert!(last(&w).starts_with("❌ **Booking submission failed.**"));
        assert!(last(&w).contains(&agency.email));
        assert!(last(&w).contains(&agency.phone));
        assert!(w.active_form().is_none());
    }

    #[test]
    fn test_invalid_step_input_keeps_widget_state() {
        let mut w = widget();
        w.apply(text("book service")).unwrap();
        let before = w.messages().len();
        let err = w
            .apply(submit(StepInput::ClientDetails(client_details())))
            .unwrap_err();
        assert!(matches!(err, WidgetError::Form(FormError::UnexpectedInput { .. })));
        assert_eq!(w.messages().len(), before);
    }

    #[test]
    fn test_cancel_returns_to_free_chat() {
        let mut w = widget();
        w.apply(text("contact")).unwrap();
        w.apply(WidgetEvent::Form {
            event: FormEvent::Cancel,
        })
        .unwrap();
        assert!(w.active_form().is_none());
        assert_eq!(last(&w), replies::FORM_CANCELLED);
    }

    #[test]
    fn test_new_chat_resets_everything() {
        let mut w = widget();
        w.apply(text("support")).unwrap();
        w.apply(WidgetEvent::NewChat).unwrap();
        assert!(w.active_form().is_none());
        assert_eq!(w.messages().len(), 1);
    }

    #[test]
    fn test_new_chat_allowed_while_busy() {
        let mut w = widget();
        w.apply(text("Tell me a joke")).unwrap();
        assert!(w.is_busy());
        let before = w.conversation();

        w.apply(WidgetEvent::NewChat).unwrap();
        assert!(!w.is_busy());
        assert_eq!(w.messages().len(), 1);
        assert_eq!(w.conversation(), before + 1);

        // the earlier reply has nothing to attach to
        assert_eq!(
            w.resolve(Outcome::AssistantReplied("late".to_string())),
            Err(WidgetError::NothingPending)
        );
    }

    #[test]
    fn test_unexpected_outcome_rejected() {
        let mut w = widget();
        assert_eq!(
            w.resolve(Outcome::AssistantReplied("hi".to_string())),
            Err(WidgetError::NothingPending)
        );
    }
}
