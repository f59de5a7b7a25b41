//! Pattern 1: Abstract Factory
//! Example: Alert Service Client
//!
//! Run with: cargo run --example p1_alert_service

use abstract_factory_pattern::{
    ChannelKind, MarketingNotificationFactory, NotificationFactory, UrgentNotificationFactory,
};

fn main() {
    // Usage: The client only picks a factory; the factory guarantees the
    // notification and template it hands back belong together.
    println!("=== Urgent Notification Scenario ===\n");

    let urgent_factory = UrgentNotificationFactory;

    let urgent_sms = urgent_factory.create_notification(ChannelKind::Sms);
    let formal_template = urgent_factory.create_template();

    // Check both products before sending.
    if let Some(notification) = urgent_sms {
        notification.send(
            "System is going down for maintenance in 1 hour.",
            formal_template.as_ref(),
        );
    }

    println!("\n=== Marketing Notification Scenario ===\n");

    let marketing_factory = MarketingNotificationFactory;

    let marketing_email = marketing_factory.create_notification(ChannelKind::Email);
    let casual_template = marketing_factory.create_template();

    if let Some(notification) = marketing_email {
        notification.send(
            "Our summer sale just started! Get 50% off.",
            casual_template.as_ref(),
        );
    }

    // An unsupported combination: the marketing family has no SMS product.
    println!("\n=== Unsupported Combination ===\n");

    match marketing_factory.create_notification(ChannelKind::Sms) {
        Some(_) => println!("Unexpected: marketing SMS exists"),
        None => println!("Marketing SMS is not supported by this factory."),
    }
}
