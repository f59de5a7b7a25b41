//! Double-checked locking: lazy construction that stays correct under
//! arbitrary concurrency.
//!
//! The accessor has an uncontended fast path that only loads an atomic
//! pointer. A null pointer sends the caller through a mutex; under the lock
//! the pointer is checked again, because another thread may have finished
//! construction while this one waited. At most one thread ever runs the
//! constructor, and every caller observes the same instance.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Mutex;

pub struct MultithreadSingleton {
    _private: (),
}

static INSTANCE: AtomicPtr<MultithreadSingleton> = AtomicPtr::new(ptr::null_mut());
static INIT_LOCK: Mutex<()> = Mutex::new(());

impl MultithreadSingleton {
    pub fn instance() -> &'static MultithreadSingleton {
        // First check: no lock on the common already-initialized path.
        let fast = INSTANCE.load(Ordering::Acquire);
        if !fast.is_null() {
            return unsafe { &*fast };
        }

        let _guard = INIT_LOCK.lock().unwrap();

        // Second check, under the lock: another thread may have constructed
        // the instance while we waited to acquire.
        let checked = INSTANCE.load(Ordering::Acquire);
        if !checked.is_null() {
            return unsafe { &*checked };
        }

        let fresh = Box::into_raw(Box::new(MultithreadSingleton { _private: () }));
        INSTANCE.store(fresh, Ordering::Release);
        unsafe { &*fresh }
    }

    pub fn display_message(&self) {
        println!("Inside MultithreadSingleton..");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn every_call_returns_the_same_instance() {
        let a = MultithreadSingleton::instance();
        let b = MultithreadSingleton::instance();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn concurrent_first_access_yields_one_instance() {
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(|| MultithreadSingleton::instance() as *const _ as usize))
            .collect();

        let addresses: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
