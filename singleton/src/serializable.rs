//! A singleton that survives a serialization round trip with its identity
//! intact.
//!
//! Plain deserialization always builds a fresh value, which for a singleton
//! silently breaks the single-instance invariant. `from_bytes` is the
//! deserialization hook that repairs this: it decodes the payload to
//! validate it, then discards the decoded value and hands back the canonical
//! instance. The accessor itself uses the same double-checked guard as
//! [`crate::double_checked`].

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SerializableSingleton {
    // Gives the wire payload some substance; identity is restored by
    // `from_bytes`, never by decoding this field.
    label: String,
}

static INSTANCE: AtomicPtr<SerializableSingleton> = AtomicPtr::new(ptr::null_mut());
static INIT_LOCK: Mutex<()> = Mutex::new(());

impl SerializableSingleton {
    fn new() -> SerializableSingleton {
        SerializableSingleton {
            label: "serializable".to_string(),
        }
    }

    pub fn instance() -> &'static SerializableSingleton {
        let fast = INSTANCE.load(Ordering::Acquire);
        if !fast.is_null() {
            return unsafe { &*fast };
        }

        let _guard = INIT_LOCK.lock().unwrap();

        let checked = INSTANCE.load(Ordering::Acquire);
        if !checked.is_null() {
            return unsafe { &*checked };
        }

        let fresh = Box::into_raw(Box::new(SerializableSingleton::new()));
        INSTANCE.store(fresh, Ordering::Release);
        unsafe { &*fresh }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Serializes the instance to an in-memory buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// The deserialization hook: decodes the payload, then substitutes the
    /// canonical instance for the freshly built value. The round trip
    /// therefore preserves reference identity.
    pub fn from_bytes(bytes: &[u8]) -> Result<&'static SerializableSingleton, bincode::Error> {
        let _decoded: SerializableSingleton = bincode::deserialize(bytes)?;
        Ok(SerializableSingleton::instance())
    }

    pub fn display_message(&self) {
        println!("Inside SerializableSingleton..");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_identity() {
        let original = SerializableSingleton::instance();
        let bytes = original.to_bytes().unwrap();
        let restored = SerializableSingleton::from_bytes(&bytes).unwrap();

        assert!(std::ptr::eq(original, restored));
        assert_eq!(restored.label(), "serializable");
    }

    #[test]
    fn corrupt_payload_is_an_error_not_an_instance() {
        // A truncated buffer must surface a decode error rather than
        // fabricating anything.
        let bytes = SerializableSingleton::instance().to_bytes().unwrap();
        assert!(SerializableSingleton::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
