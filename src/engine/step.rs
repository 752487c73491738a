use std::fmt::Debug;

/// A named stage in a form's fixed, ordered step list. The last entry of
/// `ORDER` is always the confirm step.
pub trait Step: Copy + Eq + Debug + 'static {
    const ORDER: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn first() -> Self {
        Self::ORDER[0]
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|s| s == self).unwrap_or(0)
    }

    fn next(&self) -> Option<Self> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    fn is_confirm(&self) -> bool {
        self.index() + 1 == Self::ORDER.len()
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ORDER.iter().find(|step| step.as_str() == s).copied()
    }

    fn names() -> Vec<&'static str> {
        Self::ORDER.iter().map(|s| s.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectService,
    CollectDetails,
    ProjectInfo,
    ConfirmBooking,
}

impl Step for BookingStep {
    const ORDER: &'static [Self] = &[
        BookingStep::SelectService,
        BookingStep::CollectDetails,
        BookingStep::ProjectInfo,
        BookingStep::ConfirmBooking,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            BookingStep::SelectService => "select_service",
            BookingStep::CollectDetails => "collect_details",
            BookingStep::ProjectInfo => "project_info",
            BookingStep::ConfirmBooking => "confirm_booking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoStep {
    SelectService,
    CollectDetails,
    DemoSchedule,
    ConfirmBooking,
}

impl Step for DemoStep {
    const ORDER: &'static [Self] = &[
        DemoStep::SelectService,
        DemoStep::CollectDetails,
        DemoStep::DemoSchedule,
        DemoStep::ConfirmBooking,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DemoStep::SelectService => "select_service",
            DemoStep::CollectDetails => "collect_details",
            DemoStep::DemoSchedule => "demo_schedule",
            DemoStep::ConfirmBooking => "confirm_booking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStep {
    SelectType,
    CollectDetails,
    ConfirmSubmission,
}

impl Step for ContactStep {
    const ORDER: &'static [Self] = &[
        ContactStep::SelectType,
        ContactStep::CollectDetails,
        ContactStep::ConfirmSubmission,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ContactStep::SelectType => "select_type",
            ContactStep::CollectDetails => "collect_details",
            ContactStep::ConfirmSubmission => "confirm_submission",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStep {
    SelectCategory,
    CollectDetails,
    IssueDetails,
    ConfirmSubmission,
}

impl Step for SupportStep {
    const ORDER: &'static [Self] = &[
        SupportStep::SelectCategory,
        SupportStep::CollectDetails,
        SupportStep::IssueDetails,
        SupportStep::ConfirmSubmission,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SupportStep::SelectCategory => "select_category",
            SupportStep::CollectDetails => "collect_details",
            SupportStep::IssueDetails => "issue_details",
            SupportStep::ConfirmSubmission => "confirm_submission",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(SupportStep::first(), SupportStep::SelectCategory);
        assert_eq!(SupportStep::SelectCategory.next(), Some(SupportStep::CollectDetails));
        assert_eq!(SupportStep::SelectCategory.previous(), None);
        assert_eq!(SupportStep::ConfirmSubmission.next(), None);
        assert_eq!(
            SupportStep::ConfirmSubmission.previous(),
            Some(SupportStep::IssueDetails)
        );
    }

    #[test]
    fn test_last_step_is_confirm() {
        assert!(BookingStep::ConfirmBooking.is_confirm());
        assert!(DemoStep::ConfirmBooking.is_confirm());
        assert!(ContactStep::ConfirmSubmission.is_confirm());
        assert!(!ContactStep::CollectDetails.is_confirm());
    }

    #[test]
    fn test_parse_matches_as_str() {
        for step in DemoStep::ORDER {
            assert_eq!(DemoStep::parse(step.as_str()), Some(*step));
        }
        assert_eq!(DemoStep::parse("project_info"), None);
    }
}
