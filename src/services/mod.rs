pub mod ai;
pub mod dispatch;
pub mod mailer;
pub mod notifications;
pub mod templates;
