//! Pattern 1: Initialization Policies
//! Example: one accessor per policy, each stable across calls
//!
//! Run with: cargo run --example p1_instance_policies

use singleton_patterns::{EagerSingleton, GlobalSingleton, LazySingleton, MultithreadSingleton};

fn main() {
    // Usage: addresses stand in for identity; a stable address across calls
    // means the accessor keeps handing out the same instance.
    println!("=== Eager (built at load) ===");
    let a = EagerSingleton::instance();
    let b = EagerSingleton::instance();
    a.display_message();
    println!("first:  {:p}\nsecond: {:p}\nsame instance: {}", a, b, std::ptr::eq(a, b));

    println!("\n=== Lazy (built on first access, unsafe under threads) ===");
    let a = LazySingleton::instance();
    let b = LazySingleton::instance();
    a.display_message();
    println!("first:  {:p}\nsecond: {:p}\nsame instance: {}", a, b, std::ptr::eq(a, b));

    println!("\n=== Double-checked locking ===");
    let a = MultithreadSingleton::instance();
    let b = MultithreadSingleton::instance();
    a.display_message();
    println!("first:  {:p}\nsecond: {:p}\nsame instance: {}", a, b, std::ptr::eq(a, b));

    println!("\n=== lazy_static (recommended) ===");
    let a = GlobalSingleton::instance();
    let b = GlobalSingleton::instance();
    a.do_something();
    println!("first:  {:p}\nsecond: {:p}\nsame instance: {}", a, b, std::ptr::eq(a, b));
}
