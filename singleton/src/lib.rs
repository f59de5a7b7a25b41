//! # Singleton Patterns
//!
//! Five independent single-instance access policies, each in its own module:
//!
//! - [`eager`]: the instance exists from process start, whether or not it is
//!   ever used.
//! - [`lazy`]: first-access construction with no lock. Single-threaded
//!   correct, and deliberately kept as the textbook example of the race the
//!   other variants avoid.
//! - [`double_checked`]: first-access construction behind the classic
//!   check-lock-recheck guard. Safe under arbitrary concurrency.
//! - [`global`]: a `lazy_static!` instance, the ecosystem construct for a
//!   guarded module-level singleton with no bypassable construction path.
//! - [`serializable`]: double-checked construction plus a deserialization
//!   hook that preserves instance identity across a serialize/deserialize
//!   round trip.
//!
//! Every module hides its constructor; the guarded accessor is the only way
//! in. Identity is observable by address (`&'static T`), so two calls that
//! return the same pointer returned the same instance.
//!
//! Run the demos with: `cargo run --example p1_instance_policies` (and
//! `p2_thread_safety`, `p3_serialization`).

pub mod double_checked;
pub mod eager;
pub mod global;
pub mod lazy;
pub mod serializable;

pub use double_checked::MultithreadSingleton;
pub use eager::EagerSingleton;
pub use global::GlobalSingleton;
pub use lazy::LazySingleton;
pub use serializable::SerializableSingleton;
