//! # Observer Pattern
//!
//! A YouTube-like `Channel` (subject) keeps an ordered list of subscribers
//! (observers). Uploading a video synchronously notifies every subscriber in
//! subscription order.
//!
//! Two deliberate departures from the classic textbook shape:
//!
//! - Construction is side-effect free. A subscriber is created first and
//!   subscribed explicitly, instead of a constructor that registers itself.
//! - `update` receives the channel as a borrowed argument rather than holding
//!   a back-reference, so a subscriber still reads the channel's *current*
//!   latest video at notification time without any reference cycle.
//!
//! Run the demo with: `cargo run --example p1_video_channel`

use std::rc::Rc;

/// An observer of a [`Channel`]. Called once per upload, in subscription
/// order.
pub trait Subscriber {
    fn name(&self) -> &str;

    /// Notified that the channel changed; reads the current state through
    /// the borrowed subject.
    fn update(&self, channel: &Channel);
}

/// The subject: holds the latest upload and the ordered, duplicate-free set
/// of subscribers. Duplicates are suppressed by `Rc` identity, so the same
/// subscriber handle can only be registered once.
pub struct Channel {
    name: String,
    latest_video: Option<String>,
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Channel {
            name: name.into(),
            latest_video: None,
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber. Idempotent: subscribing the same handle twice
    /// leaves the list unchanged.
    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        let already = self
            .subscribers
            .iter()
            .any(|s| Rc::ptr_eq(s, &subscriber));
        if !already {
            self.subscribers.push(subscriber);
        }
    }

    /// Removes a subscriber if present; a no-op otherwise.
    pub fn unsubscribe(&mut self, subscriber: &Rc<dyn Subscriber>) {
        self.subscribers.retain(|s| !Rc::ptr_eq(s, subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Records the new upload and synchronously notifies every current
    /// subscriber, in subscription order.
    pub fn upload_video(&mut self, title: &str) {
        self.latest_video = Some(title.to_string());
        println!("\n[Channel] New video uploaded: {}", title);
        self.notify_subscribers();
    }

    fn notify_subscribers(&self) {
        for subscriber in &self.subscribers {
            subscriber.update(self);
        }
    }

    /// What subscribers read when notified.
    pub fn video_information(&self) -> String {
        match &self.latest_video {
            Some(title) => format!("Latest video on \"{}\": {}", self.name, title),
            None => format!("Latest video on \"{}\": nothing uploaded yet", self.name),
        }
    }
}

/// A named viewer that prints a notice when the channel uploads.
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User { name: name.into() }
    }
}

impl Subscriber for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, channel: &Channel) {
        println!(
            "[Notification] {} has been notified: {}",
            self.name,
            channel.video_information()
        );
    }
}
