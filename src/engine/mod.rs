//! Multi-step intake forms.
//!
//! Each form kind is a linear state machine over its own step enum. A form
//! only moves forward through a typed [`StepInput`] that passes the current
//! step's validation, moves back one step at a time without losing what was
//! entered, and can only be submitted from its final confirm step.

pub mod contact;
pub mod demo_booking;
pub mod fields;
pub mod service_booking;
pub mod step;
pub mod support;

use serde::{Deserialize, Serialize};

use crate::models::{ContactType, ServiceType, SupportCategory};

use contact::{ContactDetails, ContactForm, ContactRecord};
use demo_booking::{DemoBookingForm, DemoBookingRecord, DemoSchedule};
use fields::ClientDetails;
use service_booking::{ProjectInfo, ServiceBookingForm, ServiceBookingRecord};
use step::Step;
use support::{SupportDetails, SupportForm, SupportIssue, SupportTicketRecord};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    ServiceBooking,
    DemoBooking,
    Contact,
    Support,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::ServiceBooking => "service_booking",
            FormKind::DemoBooking => "demo_booking",
            FormKind::Contact => "contact",
            FormKind::Support => "support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{input} cannot be submitted at step {step}")]
    UnexpectedInput {
        step: &'static str,
        input: &'static str,
    },

    #[error("invalid fields: {}", .0.join(", "))]
    Invalid(Vec<&'static str>),

    #[error("no step before {0}")]
    NoPreviousStep(&'static str),

    #[error("cannot edit {target} from {step}")]
    InvalidEdit { step: &'static str, target: String },

    #[error("step {0} is not complete")]
    Incomplete(&'static str),

    #[error("form can only be submitted from its confirm step, not {0}")]
    NotAtConfirm(&'static str),
}

/// Values submitted for one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepInput {
    Service(ServiceType),
    ContactType(ContactType),
    SupportCategory(SupportCategory),
    ClientDetails(ClientDetails),
    ProjectInfo(ProjectInfo),
    DemoSchedule(DemoSchedule),
    ContactDetails(ContactDetails),
    SupportDetails(SupportDetails),
    SupportIssue(SupportIssue),
}

impl StepInput {
    pub fn name(&self) -> &'static str {
        match self {
            StepInput::Service(_) => "service",
            StepInput::ContactType(_) => "contact_type",
            StepInput::SupportCategory(_) => "support_category",
            StepInput::ClientDetails(_) => "client_details",
            StepInput::ProjectInfo(_) => "project_info",
            StepInput::DemoSchedule(_) => "demo_schedule",
            StepInput::ContactDetails(_) => "contact_details",
            StepInput::SupportDetails(_) => "support_details",
            StepInput::SupportIssue(_) => "support_issue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Submit { input: StepInput },
    Back,
    /// From the confirm step, re-enter an earlier data step by name.
    Edit { step: String },
    Cancel,
    Confirm,
}

/// A completed form, ready to be emailed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormSubmission {
    ServiceBooking(ServiceBookingRecord),
    DemoBooking(DemoBookingRecord),
    Contact(ContactRecord),
    Support(SupportTicketRecord),
}

impl FormSubmission {
    pub fn kind(&self) -> FormKind {
        match self {
            FormSubmission::ServiceBooking(_) => FormKind::ServiceBooking,
            FormSubmission::DemoBooking(_) => FormKind::DemoBooking,
            FormSubmission::Contact(_) => FormKind::Contact,
            FormSubmission::Support(_) => FormKind::Support,
        }
    }

    pub fn submitter_email(&self) -> &str {
        match self {
            FormSubmission::ServiceBooking(r) => &r.details.email,
            FormSubmission::DemoBooking(r) => &r.details.email,
            FormSubmission::Contact(r) => &r.details.email,
            FormSubmission::Support(r) => &r.details.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormTransition {
    /// Moved to the next step; carries the acknowledgment for the new step.
    Advanced(String),
    MovedBack,
    Cancelled,
    Submitted(FormSubmission),
}

/// Per-kind behaviour plugged into the shared navigation rules.
pub trait Form {
    type Step: Step;

    fn step(&self) -> Self::Step;
    fn set_step(&mut self, step: Self::Step);

    /// Validates and stores the input for the current step. Must not change
    /// the step.
    fn accept(&mut self, input: StepInput) -> Result<(), FormError>;

    /// Message shown on entering the current step.
    fn ack(&self) -> String;

    /// Builds the final record, re-checking every data step.
    fn submission(&self) -> Result<FormSubmission, FormError>;
}

fn drive<F: Form>(form: &mut F, event: FormEvent) -> Result<FormTransition, FormError> {
    let step = form.step();
    match event {
        FormEvent::Submit { input } => {
            form.accept(input)?;
            if let Some(next) = step.next() {
                form.set_step(next);
            }
            Ok(FormTransition::Advanced(form.ack()))
        }
        FormEvent::Back => {
            let previous = step.previous().ok_or(FormError::NoPreviousStep(step.as_str()))?;
            form.set_step(previous);
            Ok(FormTransition::MovedBack)
        }
        FormEvent::Edit { step: target } => {
            let target_step = F::Step::parse(&target)
                .filter(|t| step.is_confirm() && !t.is_confirm())
                .ok_or_else(|| FormError::InvalidEdit {
                    step: step.as_str(),
                    target,
                })?;
            form.set_step(target_step);
            Ok(FormTransition::MovedBack)
        }
        FormEvent::Cancel => Ok(FormTransition::Cancelled),
        FormEvent::Confirm => {
            if !step.is_confirm() {
                return Err(FormError::NotAtConfirm(step.as_str()));
            }
            form.submission().map(FormTransition::Submitted)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
}

fn field(label: &'static str, value: impl Into<String>) -> SummaryField {
    SummaryField {
        label,
        value: value.into(),
    }
}

fn optional(value: &str) -> String {
    if fields::is_blank(value) {
        "Not provided".to_string()
    } else {
        value.to_string()
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "None selected".to_string()
    } else {
        values.join(", ")
    }
}

/// The single active form of a widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormSession {
    ServiceBooking(ServiceBookingForm),
    DemoBooking(DemoBookingForm),
    Contact(ContactForm),
    Support(SupportForm),
}

impl FormSession {
    pub fn start(kind: FormKind) -> Self {
        match kind {
            FormKind::ServiceBooking => FormSession::ServiceBooking(ServiceBookingForm::default()),
            FormKind::DemoBooking => FormSession::DemoBooking(DemoBookingForm::default()),
            FormKind::Contact => FormSession::Contact(ContactForm::default()),
            FormKind::Support => FormSession::Support(SupportForm::default()),
        }
    }

    pub fn kind(&self) -> FormKind {
        match self {
            FormSession::ServiceBooking(_) => FormKind::ServiceBooking,
            FormSession::DemoBooking(_) => FormKind::DemoBooking,
            FormSession::Contact(_) => FormKind::Contact,
            FormSession::Support(_) => FormKind::Support,
        }
    }

    pub fn step_name(&self) -> &'static str {
        match self {
            FormSession::ServiceBooking(f) => f.step.as_str(),
            FormSession::DemoBooking(f) => f.step.as_str(),
            FormSession::Contact(f) => f.step.as_str(),
            FormSession::Support(f) => f.step.as_str(),
        }
    }

    /// The declared, ordered step list of this form's kind.
    pub fn steps(&self) -> Vec<&'static str> {
        match self {
            FormSession::ServiceBooking(_) => step::BookingStep::names(),
            FormSession::DemoBooking(_) => step::DemoStep::names(),
            FormSession::Contact(_) => step::ContactStep::names(),
            FormSession::Support(_) => step::SupportStep::names(),
        }
    }

    /// Message shown when the form opens or re-enters its current step.
    pub fn ack(&self) -> String {
        match self {
            FormSession::ServiceBooking(f) => f.ack(),
            FormSession::DemoBooking(f) => f.ack(),
            FormSession::Contact(f) => f.ack(),
            FormSession::Support(f) => f.ack(),
        }
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<FormTransition, FormError> {
        match self {
            FormSession::ServiceBooking(f) => drive(f, event),
            FormSession::DemoBooking(f) => drive(f, event),
            FormSession::Contact(f) => drive(f, event),
            FormSession::Support(f) => drive(f, event),
        }
    }

    /// Read-only review of everything entered so far.
    pub fn summary(&self) -> Vec<SummaryField> {
        match self {
            FormSession::ServiceBooking(f) => {
                let d = &f.data;
                let mut out = vec![field(
                    "Service",
                    d.service.map(|s| s.service_name()).unwrap_or_default(),
                )];
                out.extend(client_summary(&d.details));
                out.extend([
                    field("Sub-services", list(&d.project.sub_services)),
                    field("Budget", d.project.budget.as_str()),
                    field("Timeline", d.project.timeline.as_str()),
                    field("Current Challenges", d.project.current_challenges.as_str()),
                    field("Project Goals", d.project.project_goals.as_str()),
                    field("Requirements", optional(&d.project.requirements)),
                ]);
                out
            }
            FormSession::DemoBooking(f) => {
                let d = &f.data;
                let mut out = vec![field(
                    "Demo",
                    d.service.map(|s| s.demo_name()).unwrap_or_default(),
                )];
                out.extend(client_summary(&d.details));
                out.extend([
                    field("Date", d.schedule.demo_date.as_str()),
                    field("Time", format!("{} ({})", d.schedule.demo_time, d.schedule.timezone)),
                    field("Attendees", d.schedule.attendees.as_str()),
                    field("Demo Type", d.schedule.demo_type.as_str()),
                    field("Platform", d.schedule.platform.as_str()),
                    field("Sub-services", list(&d.schedule.sub_services)),
                    field("Current Challenges", d.schedule.current_challenges.as_str()),
                    field("Demo Goals", d.schedule.demo_goals.as_str()),
                ]);
                out
            }
            FormSession::Contact(f) => {
                let d = &f.data;
                vec![
                    field(
                        "Type",
                        d.contact_type.map(|t| t.display_name()).unwrap_or_default(),
                    ),
                    field("Name", d.details.name.as_str()),
                    field("Email", d.details.email.as_str()),
                    field("Phone", optional(&d.details.phone)),
                    field("Company", optional(&d.details.company)),
                    field("Subject", d.details.subject.as_str()),
                    field("Message", d.details.message.as_str()),
                ]
            }
            FormSession::Support(f) => {
                let d = &f.data;
                vec![
                    field(
                        "Category",
                        d.category.map(|c| c.display_name()).unwrap_or_default(),
                    ),
                    field("Priority", d.issue.priority.as_str().to_uppercase()),
                    field("Name", d.details.name.as_str()),
                    field("Email", d.details.email.as_str()),
                    field("Subject", d.details.subject.as_str()),
                    field("Message", d.issue.message.as_str()),
                    field("Expected Response", d.issue.priority.response_time()),
                ]
            }
        }
    }
}

fn client_summary(details: &ClientDetails) -> Vec<SummaryField> {
    vec![
        field("Name", details.name.as_str()),
        field("Email", details.email.as_str()),
        field("Phone", details.phone.as_str()),
        field("Company", details.company.as_str()),
        field("Industry", details.industry_label()),
        field("Preferred Contact", details.preferred_contact.as_str()),
    ]
}
