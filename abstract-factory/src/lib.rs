//! # Abstract Factory Pattern
//!
//! A family of matched notification products: each concrete factory produces
//! a `Notification` together with the `NotificationTemplate` designed to go
//! with it. The client picks a factory (urgent vs. marketing) and never names
//! a concrete product type.
//!
//! Run the demo with: `cargo run --example p1_alert_service`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Delivery channel a factory can be asked to produce a notification for.
///
/// The original dispatch was on raw strings; a closed enum keeps the set of
/// channels explicit while `FromStr` preserves the case-insensitive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Sms,
}

/// Rejected channel key, carrying the caller's input as written.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown channel kind {0}")]
pub struct UnknownChannelKind(pub String);

impl FromStr for ChannelKind {
    type Err = UnknownChannelKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EMAIL" => Ok(ChannelKind::Email),
            "SMS" => Ok(ChannelKind::Sms),
            _ => Err(UnknownChannelKind(s.to_string())),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Email => write!(f, "Email"),
            ChannelKind::Sms => write!(f, "SMS"),
        }
    }
}

/// A notification product. Sending composes the message through a template
/// from the same family.
pub trait Notification {
    fn send(&self, message: &str, template: &dyn NotificationTemplate);
}

/// Formats a (channel, message) pair into the final display string.
pub trait NotificationTemplate {
    fn format(&self, channel: &str, message: &str) -> String;
}

pub struct EmailNotification;

impl Notification for EmailNotification {
    fn send(&self, message: &str, template: &dyn NotificationTemplate) {
        println!("Sending Email...");
        println!("{}", template.format("Email", message));
    }
}

pub struct SmsNotification;

impl Notification for SmsNotification {
    fn send(&self, message: &str, template: &dyn NotificationTemplate) {
        println!("Sending SMS...");
        println!("{}", template.format("SMS", message));
    }
}

/// Formal, bordered block for system alerts.
pub struct FormalTemplate;

impl NotificationTemplate for FormalTemplate {
    fn format(&self, channel: &str, message: &str) -> String {
        format!(
            "========================================\n\
             Formal {} Notification\n\
             ========================================\n\
             Message: {}\n\
             Regards,\n\
             System Administration\n\
             ========================================",
            channel, message
        )
    }
}

/// Friendly one-liner for marketing updates.
pub struct CasualTemplate;

impl NotificationTemplate for CasualTemplate {
    fn format(&self, channel: &str, message: &str) -> String {
        format!(" Just a quick update for you via {}: {} ", channel, message)
    }
}

/// The abstract factory: each implementation creates a family of related
/// products. `create_notification` returns `None` for channels the family
/// does not support; `create_template` always yields the family's template.
pub trait NotificationFactory {
    fn create_notification(&self, kind: ChannelKind) -> Option<Box<dyn Notification>>;
    fn create_template(&self) -> Box<dyn NotificationTemplate>;
}

/// Urgent, formal family: email and SMS, paired with the formal template.
pub struct UrgentNotificationFactory;

impl NotificationFactory for UrgentNotificationFactory {
    fn create_notification(&self, kind: ChannelKind) -> Option<Box<dyn Notification>> {
        match kind {
            ChannelKind::Email => Some(Box::new(EmailNotification)),
            ChannelKind::Sms => Some(Box::new(SmsNotification)),
        }
    }

    fn create_template(&self) -> Box<dyn NotificationTemplate> {
        Box::new(FormalTemplate)
    }
}

/// Marketing family: email only, paired with the casual template.
pub struct MarketingNotificationFactory;

impl NotificationFactory for MarketingNotificationFactory {
    fn create_notification(&self, kind: ChannelKind) -> Option<Box<dyn Notification>> {
        match kind {
            ChannelKind::Email => Some(Box::new(EmailNotification)),
            // SMS is not available for marketing updates.
            ChannelKind::Sms => None,
        }
    }

    fn create_template(&self) -> Box<dyn NotificationTemplate> {
        Box::new(CasualTemplate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_factory_supports_email_and_sms() {
        let factory = UrgentNotificationFactory;
        assert!(factory.create_notification(ChannelKind::Email).is_some());
        assert!(factory.create_notification(ChannelKind::Sms).is_some());
    }

    #[test]
    fn marketing_factory_supports_email_only() {
        let factory = MarketingNotificationFactory;
        assert!(factory.create_notification(ChannelKind::Email).is_some());
        assert!(factory.create_notification(ChannelKind::Sms).is_none());
    }

    #[test]
    fn urgent_factory_binds_formal_template() {
        let template = UrgentNotificationFactory.create_template();
        let formatted = template.format("SMS", "Test");
        assert_eq!(
            formatted,
            "========================================\n\
             Formal SMS Notification\n\
             ========================================\n\
             Message: Test\n\
             Regards,\n\
             System Administration\n\
             ========================================"
        );
    }

    #[test]
    fn marketing_factory_binds_casual_template() {
        let template = MarketingNotificationFactory.create_template();
        assert_eq!(
            template.format("Email", "Hi"),
            " Just a quick update for you via Email: Hi "
        );
    }

    #[test]
    fn channel_kind_parses_case_insensitively() {
        assert_eq!("EMAIL".parse::<ChannelKind>(), Ok(ChannelKind::Email));
        assert_eq!("email".parse::<ChannelKind>(), Ok(ChannelKind::Email));
        assert_eq!("Sms".parse::<ChannelKind>(), Ok(ChannelKind::Sms));
        assert!("fax".parse::<ChannelKind>().is_err());
    }

    #[test]
    fn unknown_kind_error_keeps_the_key_as_written() {
        let err = "fax".parse::<ChannelKind>().unwrap_err();
        assert_eq!(err, UnknownChannelKind("fax".to_string()));
        assert!(err.to_string().contains("fax"));
    }

    #[test]
    fn channel_kind_display_names() {
        assert_eq!(ChannelKind::Email.to_string(), "Email");
        assert_eq!(ChannelKind::Sms.to_string(), "SMS");
    }
}
