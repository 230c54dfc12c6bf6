//! Administrative webhook notifications.
//!
//! Builds chat-webhook embeds for ban and unban actions and hands them to a
//! [`NotificationSink`]. Delivery is fire-and-forget: failures are logged
//! and never reach the caller.

pub mod embed;
pub mod error;
pub mod notice;
pub mod notifier;
pub mod settings;
pub mod sink;

pub use error::NotifyError;
pub use notice::{BanNotice, UnbanNotice};
pub use notifier::Notifier;
pub use settings::WebhookSettings;
pub use sink::{JsonLinesSink, MemorySink, NotificationSink};

#[cfg(test)]
mod tests;
