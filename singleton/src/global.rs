//! The ecosystem-construct singleton: a `lazy_static!` instance.
//!
//! This is the recommended variant. The macro owns the guarded holder, so
//! there is no initialization code to get wrong, and the constructor stays
//! private to this module. Rust has no runtime reflection, so unlike
//! class-based languages there is no introspection path that could invoke
//! the hidden constructor and fabricate a second instance; keeping the
//! constructor and the instance field private is the whole defense.

use lazy_static::lazy_static;

pub struct GlobalSingleton {
    _private: (),
}

lazy_static! {
    static ref INSTANCE: GlobalSingleton = GlobalSingleton { _private: () };
}

impl GlobalSingleton {
    pub fn instance() -> &'static GlobalSingleton {
        &INSTANCE
    }

    pub fn do_something(&self) {
        println!("Inside GlobalSingleton...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_access_yields_one_instance() {
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(|| GlobalSingleton::instance() as *const _ as usize))
            .collect();

        let first = GlobalSingleton::instance() as *const _ as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }
}
