use serde::{Deserialize, Serialize};

use crate::models::{Priority, SupportCategory};

use super::fields::FieldCheck;
use super::step::{Step, SupportStep};
use super::{Form, FormError, FormSubmission, StepInput};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
}

impl SupportDetails {
    pub fn validate(&self) -> Result<(), FormError> {
        FieldCheck::default()
            .filled("name", &self.name)
            .email("email", &self.email)
            .filled("subject", &self.subject)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportIssue {
    pub priority: Priority,
    pub message: String,
    pub error_messages: String,
    pub steps_to_reproduce: String,
    pub browser_device_info: String,
    pub account_order_numbers: String,
}

impl SupportIssue {
    pub fn validate(&self) -> Result<(), FormError> {
        FieldCheck::default().filled("message", &self.message).finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportData {
    pub category: Option<SupportCategory>,
    pub details: SupportDetails,
    pub issue: SupportIssue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportTicketRecord {
    pub category: SupportCategory,
    pub details: SupportDetails,
    pub issue: SupportIssue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportForm {
    pub step: SupportStep,
    pub data: SupportData,
}

impl Default for SupportForm {
    fn default() -> Self {
        Self {
            step: SupportStep::first(),
            data: SupportData::default(),
        }
    }
}

impl Form for SupportForm {
    type Step = SupportStep;

    fn step(&self) -> SupportStep {
        self.step
    }

    fn set_step(&mut self, step: SupportStep) {
        self.step = step;
    }

    fn accept(&mut self, input: StepInput) -> Result<(), FormError> {
        match (self.step, input) {
            (SupportStep::SelectCategory, StepInput::SupportCategory(category)) => {
                self.data.category = Some(category);
            }
            (SupportStep::CollectDetails, StepInput::SupportDetails(details)) => {
                details.validate()?;
                self.data.details = details;
            }
            (SupportStep::IssueDetails, StepInput::SupportIssue(issue)) => {
                issue.validate()?;
                self.data.issue = issue;
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
            SupportStep::SelectCategory => "🛠️ **I'll help you create a support ticket.**\n\nPlease select the category that best describes your issue:".to_string(),
            SupportStep::CollectDetails => format!(
                "🛠️ **Got it!** You selected **{}**.\n\nNow let's get your details:",
                self.data.category.map(|c| c.display_name()).unwrap_or_default()
            ),
            SupportStep::IssueDetails => "✅ **Details saved!**\n\nNow please describe your issue in detail:".to_string(),
            SupportStep::ConfirmSubmission => "📋 **Issue details saved!**\n\nPlease review your support ticket below:".to_string(),
        }
    }

    fn submission(&self) -> Result<FormSubmission, FormError> {
        let category = self
            .data
            .category
            .ok_or(FormError::Incomplete("select_category"))?;
        self.data
            .details
            .validate()
            .map_err(|_| FormError::Incomplete("collect_details"))?;
        self.data
            .issue
            .validate()
            .map_err(|_| FormError::Incomplete("issue_details"))?;

        Ok(FormSubmission::Support(SupportTicketRecord {
            category,
            details: self.data.details.clone(),
            issue: self.data.issue.clone(),
        }))
    }
}
