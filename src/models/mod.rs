pub mod booking;
pub mod catalog;
pub mod chat;
pub mod newsletter;

pub use booking::{BookingRequest, DispatchResponse};
pub use catalog::{
    booking_service_name, ContactMethod, ContactType, DemoType, Priority, ServiceType,
    SupportCategory,
};
pub use chat::{ChatMessage, Role};
pub use newsletter::NewsletterSignup;
