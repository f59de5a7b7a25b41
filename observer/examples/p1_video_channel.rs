//! Pattern 1: Observer
//! Example: Video Channel and Subscribers
//!
//! Run with: cargo run --example p1_video_channel

use std::rc::Rc;

use observer_pattern::{Channel, Subscriber, User};

fn main() {
    println!("=== Observer Pattern Demo ===");

    // The subject.
    let mut tech_channel = Channel::new("Tech Insights");

    // Create first, subscribe explicitly: construction has no side effects.
    let alice: Rc<dyn Subscriber> = Rc::new(User::new("Alice"));
    let bob: Rc<dyn Subscriber> = Rc::new(User::new("Bob"));
    let charlie: Rc<dyn Subscriber> = Rc::new(User::new("Charlie"));

    tech_channel.subscribe(alice.clone());
    tech_channel.subscribe(bob.clone());
    tech_channel.subscribe(charlie.clone());
    println!("\nSubscribers: {}", tech_channel.subscriber_count());

    // All three are notified, in subscription order.
    tech_channel.upload_video("Observer Pattern in Rust");

    // Bob leaves; only the remaining two hear about the next upload.
    tech_channel.unsubscribe(&bob);
    tech_channel.upload_video("Advanced Rust Multithreading");
}
