use serde::{Deserialize, Serialize};

use crate::models::ServiceType;

use super::fields::{retain_catalog, ClientDetails, FieldCheck};
use super::step::{BookingStep, Step};
use super::{Form, FormError, FormSubmission, StepInput};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    pub sub_services: Vec<String>,
    pub budget: String,
    pub timeline: String,
    pub current_challenges: String,
    pub project_goals: String,
    pub requirements: String,
    pub marketing_consent: bool,
}

impl ProjectInfo {
    pub fn validate(&self, service: ServiceType) -> Result<(), FormError> {
        FieldCheck::default()
            .sub_services(&self.sub_services, service.sub_services())
            .filled("budget", &self.budget)
            .filled("timeline", &self.timeline)
            .filled("currentChallenges", &self.current_challenges)
            .filled("projectGoals", &self.project_goals)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingData {
    pub service: Option<ServiceType>,
    pub details: ClientDetails,
    pub project: ProjectInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceBookingRecord {
    pub service: ServiceType,
    pub details: ClientDetails,
    pub project: ProjectInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceBookingForm {
    pub step: BookingStep,
    pub data: ServiceBookingData,
}

impl Default for ServiceBookingForm {
    fn default() -> Self {
        Self {
            step: BookingStep::first(),
            data: ServiceBookingData::default(),
        }
    }
}

impl Form for ServiceBookingForm {
    type Step = BookingStep;

    fn step(&self) -> BookingStep {
        self.step
    }

    fn set_step(&mut self, step: BookingStep) {
        self.step = step;
    }

    fn accept(&mut self, input: StepInput) -> Result<(), FormError> {
        match (self.step, input) {
            (BookingStep::SelectService, StepInput::Service(service)) => {
                retain_catalog(&mut self.data.project.sub_services, service.sub_services());
                self.data.service = Some(service);
            }
            (BookingStep::CollectDetails, StepInput::ClientDetails(details)) => {
                details.validate()?;
                self.data.details = details;
            }
            (BookingStep::ProjectInfo, StepInput::ProjectInfo(mut project)) => {
                let service = self.data.service.ok_or(FormError::Incomplete("select_service"))?;
                project.validate(service)?;
                retain_catalog(&mut project.sub_services, service.sub_services());
                self.data.project = project;
            }
            (step, input) => {
                return Err(FormError::UnexpectedInput {
                    step: step.as_str(),
                    input: input.name(),
                })
            }
        }
        Ok(())
    }

    fn ack(&self) -> String {
        match self.step {
            BookingStep::SelectService => "📋 **Great! Let's book a service.**\n\nPlease select your preferred service from the options below:".to_string(),
            BookingStep::CollectDetails => format!(
                "🎯 **Perfect choice!** You selected **{}**.\n\nNow let's get your details:",
                self.data.service.map(|s| s.service_name()).unwrap_or_default()
            ),
            BookingStep::ProjectInfo => "✅ **Details saved!**\n\nNow please tell us about your project:".to_string(),
            BookingStep::ConfirmBooking => "📋 **Project info saved!**\n\nPlease review your booking details below:".to_string(),
        }
    }

    fn submission(&self) -> Result<FormSubmission, FormError> {
        let service = self.data.service.ok_or(FormError::Incomplete("select_service"))?;
        self.data
            .details
            .validate()
            .map_err(|_| FormError::Incomplete("collect_details"))?;
        self.data
            .project
            .validate(service)
            .map_err(|_| FormError::Incomplete("project_info"))?;

        Ok(FormSubmission::ServiceBooking(ServiceBookingRecord {
            service,
            details: self.data.details.clone(),
            project: self.data.project.clone(),
        }))
    }
}
