//! Lazy initialization without a lock: the textbook bug, kept on purpose.
//!
//! The accessor is check-then-act on an atomic pointer. Two threads that both
//! see the null pointer will both construct an instance; the last store wins
//! and callers can end up holding references to different instances. The
//! losing allocation leaks. There is no undefined behavior (the pointer
//! itself is published with release/acquire), but the single-instance
//! invariant does NOT hold under concurrent first access.
//!
//! Use [`crate::double_checked`] or [`crate::global`] when threads are
//! involved.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

pub struct LazySingleton {
    _private: (),
}

static INSTANCE: AtomicPtr<LazySingleton> = AtomicPtr::new(ptr::null_mut());

impl LazySingleton {
    /// NOT thread-safe: concurrent first calls may each construct an
    /// instance. Correct only when the first access is single-threaded.
    pub fn instance() -> &'static LazySingleton {
        let existing = INSTANCE.load(Ordering::Acquire);
        if !existing.is_null() {
            return unsafe { &*existing };
        }

        // The gap between the check above and the store below is the race:
        // nothing stops a second thread from constructing here too.
        let fresh = Box::into_raw(Box::new(LazySingleton { _private: () }));
        INSTANCE.store(fresh, Ordering::Release);
        unsafe { &*fresh }
    }

    pub fn display_message(&self) {
        println!("Inside LazySingleton..");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only the single-threaded contract is asserted; the variant carries no
    // guarantee under concurrent first access.
    #[test]
    fn repeated_single_threaded_calls_return_the_same_instance() {
        let a = LazySingleton::instance();
        let b = LazySingleton::instance();
        assert!(std::ptr::eq(a, b));
    }
}
