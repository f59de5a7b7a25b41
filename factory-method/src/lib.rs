//! # Factory Method Pattern
//!
//! A single creation function maps a channel key to one of three notification
//! implementations. Callers stay decoupled from the concrete types: they ask
//! for `"EMAIL"`, `"SMS"` or `"PUSH"` (any case) and get back a boxed
//! `Notification`.
//!
//! Run the demo with: `cargo run --example p1_notification_service`

use std::str::FromStr;
use thiserror::Error;

/// The delivery channels the factory knows how to build notifications for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
    Push,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The caller asked for a channel the factory does not recognize.
    #[error("unknown channel {0}")]
    UnknownChannel(String),
}

impl FromStr for Channel {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMS" => Ok(Channel::Sms),
            "EMAIL" => Ok(Channel::Email),
            "PUSH" => Ok(Channel::Push),
            _ => Err(NotificationError::UnknownChannel(s.to_string())),
        }
    }
}

/// Contract for every notification product: a fire-and-forget send.
pub trait Notification {
    fn send(&self, message: &str);

    /// Which channel this notification delivers on.
    fn channel(&self) -> Channel;
}

pub struct EmailNotification;

impl Notification for EmailNotification {
    fn send(&self, message: &str) {
        println!("📧 Sending Email: {}", message);
    }

    fn channel(&self) -> Channel {
        Channel::Email
    }
}

pub struct SmsNotification;

impl Notification for SmsNotification {
    fn send(&self, message: &str) {
        println!("📱 Sending SMS: {}", message);
    }

    fn channel(&self) -> Channel {
        Channel::Sms
    }
}

pub struct PushNotification;

impl Notification for PushNotification {
    fn send(&self, message: &str) {
        println!("🔔 Sending Push Notification: {}", message);
    }

    fn channel(&self) -> Channel {
        Channel::Push
    }
}

/// The factory method. Maps a case-insensitive channel key to a notification:
///
/// - an empty key yields `Ok(None)` (nothing to build, not an error),
/// - a recognized key yields the matching product,
/// - anything else is rejected with [`NotificationError::UnknownChannel`]
///   carrying the offending key.
pub fn create_notification(
    channel: &str,
) -> Result<Option<Box<dyn Notification>>, NotificationError> {
    if channel.is_empty() {
        return Ok(None);
    }
    let notification: Box<dyn Notification> = match channel.parse::<Channel>()? {
        Channel::Sms => Box::new(SmsNotification),
        Channel::Email => Box::new(EmailNotification),
        Channel::Push => Box::new(PushNotification),
    };
    Ok(Some(notification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_channels_build_matching_products() {
        let email = create_notification("EMAIL").unwrap().unwrap();
        assert_eq!(email.channel(), Channel::Email);

        let sms = create_notification("sms").unwrap().unwrap();
        assert_eq!(sms.channel(), Channel::Sms);

        let push = create_notification("Push").unwrap().unwrap();
        assert_eq!(push.channel(), Channel::Push);
    }

    #[test]
    fn empty_key_yields_nothing() {
        assert!(create_notification("").unwrap().is_none());
    }

    #[test]
    fn unknown_key_is_rejected_with_the_key() {
        let err = match create_notification("FAX") {
            Err(e) => e,
            Ok(_) => panic!("expected an error for FAX"),
        };
        assert_eq!(err, NotificationError::UnknownChannel("FAX".to_string()));
        assert!(err.to_string().contains("FAX"));
    }

    proptest! {
        #[test]
        fn any_casing_of_a_known_channel_parses(idx in 0usize..3, mask in any::<u32>()) {
            let names = ["sms", "email", "push"];
            let expected = [Channel::Sms, Channel::Email, Channel::Push];

            let key: String = names[idx]
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if mask >> (i % 32) & 1 == 1 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();

            prop_assert_eq!(key.parse::<Channel>(), Ok(expected[idx]));
        }
    }
}
