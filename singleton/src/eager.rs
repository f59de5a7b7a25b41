//! Eager initialization: the instance is a `static`, constructed at program
//! load. Always thread-safe, but it occupies memory even if nothing ever
//! asks for it. Prefer a lazy variant when the instance is heavy or rarely
//! used.

pub struct EagerSingleton {
    label: &'static str,
}

// Const-constructed, so it exists before main runs.
static INSTANCE: EagerSingleton = EagerSingleton { label: "eager" };

impl EagerSingleton {
    /// The one instance. Nothing to guard; the static was built at load.
    pub fn instance() -> &'static EagerSingleton {
        &INSTANCE
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn display_message(&self) {
        println!("Inside EagerSingleton..");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_call_returns_the_same_instance() {
        let a = EagerSingleton::instance();
        let b = EagerSingleton::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.label(), "eager");
    }
}
