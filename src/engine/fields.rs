use serde::{Deserialize, Serialize};

use crate::models::catalog::OTHER_INDUSTRY;
use crate::models::ContactMethod;

use super::FormError;

pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    email.contains('@') && email.contains('.')
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collects the names of fields whose predicate failed.
#[derive(Default)]
pub(crate) struct FieldCheck {
    invalid: Vec<&'static str>,
}

impl FieldCheck {
    pub fn require(&mut self, field: &'static str, ok: bool) -> &mut Self {
        if !ok {
            self.invalid.push(field);
        }
        self
    }

    pub fn filled(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.require(field, !is_blank(value))
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.require(field, is_plausible_email(value))
    }

    /// At least one selection, all from the catalog, is required only when
    /// the catalog offers any. An empty catalog never blocks.
    pub fn sub_services(&mut self, selected: &[String], catalog: &[&str]) -> &mut Self {
        let in_catalog = selected.iter().all(|s| catalog.contains(&s.as_str()));
        self.require(
            "subServices",
            catalog.is_empty() || (!selected.is_empty() && in_catalog),
        )
    }

    pub fn finish(&mut self) -> Result<(), FormError> {
        if self.invalid.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(std::mem::take(&mut self.invalid)))
        }
    }
}

/// Keeps only the selections the catalog offers.
pub(crate) fn retain_catalog(selected: &mut Vec<String>, catalog: &[&str]) {
    selected.retain(|s| catalog.contains(&s.as_str()));
}

/// Contact block shared by the service and demo booking flows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
    pub industry: String,
    pub other_industry: String,
    pub referral_source: String,
    pub preferred_contact: ContactMethod,
}

impl ClientDetails {
    pub fn needs_other_industry(&self) -> bool {
        self.industry == OTHER_INDUSTRY
    }

    pub fn validate(&self) -> Result<(), FormError> {
        FieldCheck::default()
            .filled("name", &self.name)
            .email("email", &self.email)
            .filled("phone", &self.phone)
            .filled("company", &self.company)
            .filled("industry", &self.industry)
            .require(
                "otherIndustry",
                !self.needs_other_industry() || !is_blank(&self.other_industry),
            )
            .finish()
    }

    pub fn industry_label(&self) -> &str {
        if self.needs_other_industry() {
            self.other_industry.trim()
        } else if is_blank(&self.industry) {
            "Not specified"
        } else {
            &self.industry
        }
    }
}
