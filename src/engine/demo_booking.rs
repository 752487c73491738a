use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DemoType, ServiceType};

use super::fields::{retain_catalog, ClientDetails, FieldCheck};
use super::step::{DemoStep, Step};
use super::{Form, FormError, FormSubmission, StepInput};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoSchedule {
    /// `YYYY-MM-DD`
    pub demo_date: String,
    pub demo_time: String,
    pub timezone: String,
    pub attendees: String,
    pub demo_type: DemoType,
    pub platform: String,
    pub current_challenges: String,
    pub demo_goals: String,
    pub sub_services: Vec<String>,
    pub special_requirements: String,
}

impl Default for DemoSchedule {
    fn default() -> Self {
        Self {
            demo_date: String::new(),
            demo_time: String::new(),
            timezone: "IST".to_string(),
            attendees: "1-2".to_string(),
            demo_type: DemoType::Online,
            platform: "zoom".to_string(),
            current_challenges: String::new(),
            demo_goals: String::new(),
            sub_services: Vec::new(),
            special_requirements: String::new(),
        }
    }
}

impl DemoSchedule {
    pub fn validate(&self, service: ServiceType) -> Result<(), FormError> {
        FieldCheck::default()
            .require(
                "demoDate",
                NaiveDate::parse_from_str(self.demo_date.trim(), "%Y-%m-%d").is_ok(),
            )
            .filled("demoTime", &self.demo_time)
            .filled("currentChallenges", &self.current_challenges)
            .filled("demoGoals", &self.demo_goals)
            .sub_services(&self.sub_services, service.demo_sub_services())
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemoBookingData {
    pub service: Option<ServiceType>,
    pub details: ClientDetails,
    pub schedule: DemoSchedule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoBookingRecord {
    pub service: ServiceType,
    pub details: ClientDetails,
    pub schedule: DemoSchedule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoBookingForm {
    pub step: DemoStep,
    pub data: DemoBookingData,
}

impl Default for DemoBookingForm {
    fn default() -> Self {
        Self {
            step: DemoStep::first(),
            data: DemoBookingData::default(),
        }
    }
}

impl Form for DemoBookingForm {
    type Step = DemoStep;

    fn step(&self) -> DemoStep {
        self.step
    }

    fn set_step(&mut self, step: DemoStep) {
        self.step = step;
    }

    fn accept(&mut self, input: StepInput) -> Result<(), FormError> {
        match (self.step, input) {
            (DemoStep::SelectService, StepInput::Service(service)) => {
                retain_catalog(&mut self.data.schedule.sub_services, service.demo_sub_services());
                self.data.service = Some(service);
            }
            (DemoStep::CollectDetails, StepInput::ClientDetails(details)) => {
                details.validate()?;
                self.data.details = details;
            }
            (DemoStep::DemoSchedule, StepInput::DemoSchedule(mut schedule)) => {
                let service = self.data.service.ok_or(FormError::Incomplete("select_service"))?;
                schedule.validate(service)?;
                retain_catalog(&mut schedule.sub_services, service.demo_sub_services());
                self.data.schedule = schedule;
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
            DemoStep::SelectService => "📅 **Perfect! Let's schedule your demo.**\n\nPlease select which service demo you'd like to see:".to_string(),
            DemoStep::CollectDetails => format!(
                "🎯 **Great choice!** You selected **{}**.\n\nNow let's get your details:",
                self.data.service.map(|s| s.demo_name()).unwrap_or_default()
            ),
            DemoStep::DemoSchedule => "✅ **Details saved!**\n\nNow please schedule your demo:".to_string(),
            DemoStep::ConfirmBooking => "📅 **Schedule saved!**\n\nPlease review your demo booking details below:".to_string(),
        }
    }

    fn submission(&self) -> Result<FormSubmission, FormError> {
        let service = self.data.service.ok_or(FormError::Incomplete("select_service"))?;
        self.data
            .details
            .validate()
            .map_err(|_| FormError::Incomplete("collect_details"))?;
        self.data
            .schedule
            .validate(service)
            .map_err(|_| FormError::Incomplete("demo_schedule"))?;

        Ok(FormSubmission::DemoBooking(DemoBookingRecord {
            service,
            details: self.data.details.clone(),
            schedule: self.data.schedule.clone(),
        }))
    }
}
