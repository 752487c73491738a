use serde::{Deserialize, Serialize};

use crate::models::{ContactMethod, ContactType};

use super::fields::FieldCheck;
use super::step::{ContactStep, Step};
use super::{Form, FormError, FormSubmission, StepInput};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub preferred_contact: ContactMethod,
}

impl ContactDetails {
    pub fn validate(&self) -> Result<(), FormError> {
        FieldCheck::default()
            .filled("name", &self.name)
            .email("email", &self.email)
            .filled("subject", &self.subject)
            .filled("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub contact_type: Option<ContactType>,
    pub details: ContactDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    pub contact_type: ContactType,
    pub details: ContactDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    pub step: ContactStep,
    pub data: ContactData,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            step: ContactStep::first(),
            data: ContactData::default(),
        }
    }
}

impl Form for ContactForm {
    type Step = ContactStep;

    fn step(&self) -> ContactStep {
        self.step
    }

    fn set_step(&mut self, step: ContactStep) {
        self.step = step;
    }

    fn accept(&mut self, input: StepInput) -> Result<(), FormError> {
        match (self.step, input) {
            (ContactStep::SelectType, StepInput::ContactType(contact_type)) => {
                self.data.contact_type = Some(contact_type);
            }
            (ContactStep::CollectDetails, StepInput::ContactDetails(details)) => {
                details.validate()?;
                self.data.details = details;
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
            ContactStep::SelectType => "📧 **I'll help you contact our team.**\n\nPlease select what you'd like to contact us about:".to_string(),
            ContactStep::CollectDetails => format!(
                "📝 **Got it!** You selected **{}**.\n\nNow let's get your details and message:",
                self.data.contact_type.map(|t| t.display_name()).unwrap_or_default()
            ),
            ContactStep::ConfirmSubmission => "✅ **Details saved!**\n\nPlease review your message before sending:".to_string(),
        }
    }

    fn submission(&self) -> Result<FormSubmission, FormError> {
        let contact_type = self
            .data
            .contact_type
            .ok_or(FormError::Incomplete("select_type"))?;
        self.data
            .details
            .validate()
            .map_err(|_| FormError::Incomplete("collect_details"))?;

        Ok(FormSubmission::Contact(ContactRecord {
            contact_type,
            details: self.data.details.clone(),
        }))
    }
}
