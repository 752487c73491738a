use serde::{Deserialize, Serialize};

pub const OTHER_INDUSTRY: &str = "Other";

pub const INDUSTRIES: &[&str] = &[
    "E-commerce",
    "Technology/SaaS",
    "Healthcare",
    "Education",
    "Finance/Fintech",
    "Real Estate",
    "Retail",
    "Manufacturing",
    "Hospitality",
    OTHER_INDUSTRY,
];

pub const DEMO_TIME_SLOTS: &[&str] = &[
    "9:00 AM - 10:00 AM",
    "10:30 AM - 11:30 AM",
    "12:00 PM - 1:00 PM",
    "2:00 PM - 3:00 PM",
    "3:30 PM - 4:30 PM",
    "5:00 PM - 6:00 PM",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    DigitalMarketing,
    Automation,
    WebsiteDevelopment,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::DigitalMarketing,
        ServiceType::Automation,
        ServiceType::WebsiteDevelopment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::DigitalMarketing => "digital_marketing",
            ServiceType::Automation => "automation",
            ServiceType::WebsiteDevelopment => "website_development",
        }
    }

    pub fn service_name(&self) -> &'static str {
        match self {
            ServiceType::DigitalMarketing => "Digital Marketing Service",
            ServiceType::Automation => "Automation Service",
            ServiceType::WebsiteDevelopment => "Website Development Service",
        }
    }

    pub fn demo_name(&self) -> &'static str {
        match self {
            ServiceType::DigitalMarketing => "Digital Marketing Demo",
            ServiceType::Automation => "Automation / AI-Agents Demo",
            ServiceType::WebsiteDevelopment => "Website Development Demo",
        }
    }

    /// Sub-services offered when booking this service. Empty means the
    /// service is sold as a single package.
    pub fn sub_services(&self) -> &'static [&'static str] {
        match self {
            ServiceType::DigitalMarketing => &[
                "SEO Optimization",
                "PPC Campaigns (Google Ads)",
                "Social Media Marketing",
                "Content Marketing",
                "Email Marketing",
                "Analytics & Reporting",
            ],
            ServiceType::Automation => &[
                "AI Workflow Automation",
                "AI-Powered Chatbots",
                "Sales AI Agents",
                "Support AI Agents",
                "Custom AI Agent Development",
            ],
            ServiceType::WebsiteDevelopment => &[],
        }
    }

    pub fn demo_sub_services(&self) -> &'static [&'static str] {
        match self {
            ServiceType::DigitalMarketing => &[
                "SEO Strategy & Audit Demo",
                "Google Ads (PPC) Demo",
                "Social Media Marketing Demo",
                "Content Marketing Demo",
                "Complete Digital Marketing Funnel Demo",
            ],
            ServiceType::Automation => &[
                "AI Workflow Automation Demo",
                "Custom AI Chatbot Demo",
                "Sales AI Agent Demo",
                "Support AI Agent Demo",
                "Complete AI Solution Demo",
            ],
            ServiceType::WebsiteDevelopment => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    GeneralInquiry,
    Pricing,
    Technical,
    Partnership,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 5] = [
        ContactType::GeneralInquiry,
        ContactType::Pricing,
        ContactType::Technical,
        ContactType::Partnership,
        ContactType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::GeneralInquiry => "general_inquiry",
            ContactType::Pricing => "pricing",
            ContactType::Technical => "technical",
            ContactType::Partnership => "partnership",
            ContactType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactType::GeneralInquiry => "General Inquiry",
            ContactType::Pricing => "Pricing & Quotes",
            ContactType::Technical => "Technical Question",
            ContactType::Partnership => "Partnership",
            ContactType::Other => "Other Question",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupportCategory {
    Account,
    Billing,
    Technical,
    Feature,
    Security,
    Api,
    Bug,
    General,
}

impl SupportCategory {
    pub const ALL: [SupportCategory; 8] = [
        SupportCategory::Account,
        SupportCategory::Billing,
        SupportCategory::Technical,
        SupportCategory::Feature,
        SupportCategory::Security,
        SupportCategory::Api,
        SupportCategory::Bug,
        SupportCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCategory::Account => "account",
            SupportCategory::Billing => "billing",
            SupportCategory::Technical => "technical",
            SupportCategory::Feature => "feature",
            SupportCategory::Security => "security",
            SupportCategory::Api => "api",
            SupportCategory::Bug => "bug",
            SupportCategory::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCategory::Account => "Account Issues",
            SupportCategory::Billing => "Billing & Payments",
            SupportCategory::Technical => "Technical Problems",
            SupportCategory::Feature => "Feature Requests",
            SupportCategory::Security => "Account Security",
            SupportCategory::Api => "API & Integration",
            SupportCategory::Bug => "Bug Report",
            SupportCategory::General => "General Support",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn response_time(&self) -> &'static str {
        match self {
            Priority::Urgent => "2-4 hours",
            Priority::High => "4-8 hours",
            Priority::Medium => "24 hours",
            Priority::Low => "48 hours",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Whatsapp,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Whatsapp => "whatsapp",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DemoType {
    #[default]
    Online,
    InPerson,
}

impl DemoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoType::Online => "online",
            DemoType::InPerson => "in-person",
        }
    }
}

/// Display name for the service ids accepted by the booking endpoint.
/// Unknown ids are shown verbatim.
pub fn booking_service_name(id: &str) -> &str {
    match id {
        "ai_chatbot" => "AI Chatbot Development",
        "workflow_automation" => "Workflow Automation",
        "sales_ai" => "Sales AI Agent",
        "support_ai" => "Support AI Agent",
        "custom_ai" => "Custom AI Solution",
        other => other,
    }
}
