//! Pattern 3: Serialization Round Trip
//! Example: the deserialization hook keeps the singleton single
//!
//! Run with: cargo run --example p3_serialization

use serde::{Deserialize, Serialize};
use singleton_patterns::SerializableSingleton;

// An ordinary serializable value, for contrast: every decode builds a fresh
// allocation, so round-tripping it never preserves identity.
#[derive(Serialize, Deserialize)]
struct PlainValue {
    label: String,
}

fn main() -> Result<(), bincode::Error> {
    println!("=== Serialization-Safe Singleton ===\n");

    let original = SerializableSingleton::instance();
    original.display_message();

    // In-memory buffer standing in for the scratch file a naive demo writes.
    let bytes = original.to_bytes()?;
    println!("serialized {} bytes", bytes.len());

    let restored = SerializableSingleton::from_bytes(&bytes)?;
    println!("original: {:p}", original);
    println!("restored: {:p}", restored);
    println!("identity preserved: {}", std::ptr::eq(original, restored));

    println!("\n=== Plain Value, No Hook ===\n");

    let value = PlainValue {
        label: "plain".to_string(),
    };
    let bytes = bincode::serialize(&value)?;
    let decoded: PlainValue = bincode::deserialize(&bytes)?;

    println!("original: {:p}", &value);
    println!("decoded:  {:p}", &decoded);
    println!("identity preserved: {}", std::ptr::eq(&value, &decoded));
    println!("\nWithout a substitution step during decoding, deserialization");
    println!("always manufactures a new value. The singleton's from_bytes");
    println!("validates the payload, then returns the canonical instance.");

    Ok(())
}
