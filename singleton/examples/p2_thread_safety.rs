//! Pattern 2: Thread Safety
//! Example: hammering the double-checked accessor from many threads
//!
//! Run with: cargo run --example p2_thread_safety

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use singleton_patterns::MultithreadSingleton;

fn main() {
    println!("=== Double-Checked Locking Under Contention ===\n");

    let thread_count = 10;
    let barrier = Arc::new(Barrier::new(thread_count));

    // Every thread releases at once to maximize pressure on first access.
    let handles: Vec<_> = (0..thread_count)
        .map(|i| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let instance = MultithreadSingleton::instance();
                (i, instance as *const _ as usize)
            })
        })
        .collect();

    let mut addresses = HashSet::new();
    for handle in handles {
        let (thread_id, address) = handle.join().unwrap();
        println!("thread {:2} observed instance at {:#x}", thread_id, address);
        addresses.insert(address);
    }

    println!("\ndistinct instances observed: {}", addresses.len());
    assert_eq!(addresses.len(), 1, "double-checked locking must yield one instance");

    println!("\n=== Note on the Lazy Variant ===");
    println!("LazySingleton carries no such guarantee: concurrent first");
    println!("accesses can each run the constructor. Use it only when the");
    println!("first access is single-threaded.");
}
