//! Pattern 1: Factory Method
//! Example: Notification Service Client
//!
//! Run with: cargo run --example p1_notification_service

use factory_method_pattern::{create_notification, NotificationError};

fn send_via(channel: &str, message: &str) -> Result<(), NotificationError> {
    // The client never names a concrete notification type.
    if let Some(notification) = create_notification(channel)? {
        notification.send(message);
    }
    Ok(())
}

fn main() {
    println!("=== Factory Method Demo ===\n");

    if let Err(e) = send_via("EMAIL", "Your order has been shipped!") {
        eprintln!("Error: {}", e);
    }
    if let Err(e) = send_via("SMS", "Your package will arrive tomorrow.") {
        eprintln!("Error: {}", e);
    }
    if let Err(e) = send_via("PUSH", "You have a new message.") {
        eprintln!("Error: {}", e);
    }

    // Unknown channels are reported at the boundary, not retried.
    println!("\n=== Unknown Channel ===\n");
    match send_via("FAX", "This will not be sent.") {
        Ok(()) => println!("Unexpected: FAX was accepted"),
        Err(e) => eprintln!("Error: {}", e),
    }
}
