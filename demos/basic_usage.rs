//! Walkthrough of the ready-made optionals and a hand-composed policy.
//!
//! Run with `cargo run --example basic_usage`.

use std::mem::size_of;

use generalized_optional::control::sentinel::ConstU32;
use generalized_optional::prelude::*;
use generalized_optional::{combine, policy, Aligned, Functional, Throwing, Tombstone};

/// Port numbers where 0 means "not configured".
type Port = GeneralizedOptional<u32, policy![combine![Functional, Throwing], Tombstone<ConstU32<0>>, Aligned]>;

fn main() -> Result<(), BadOptionalAccess> {
    let mut greeting: Optional<String> = Optional::new();
    println!("empty greeting: {greeting:?}");

    greeting.assign("Hello World!");
    println!("greeting: {} ({} bytes)", greeting.value()?, greeting.len());

    greeting.reset();
    match greeting.value() {
        Ok(text) => println!("still here: {text}"),
        Err(err) => println!("after reset: {err}"),
    }

    let mut port = Port::new();
    println!("port configured: {}", port.has_value());
    port.assign(8080_u32);
    port.with_value(|p| println!("listening on {p}"));

    let mut fast: UncheckedOptional<u64> = UncheckedOptional::some(99);
    // SAFETY: `fast` was just built with a value.
    unsafe { *fast.value_mut() += 1 };
    println!("unchecked value: {}", unsafe { fast.value() });

    println!("\nMemory sizes:");
    println!("Option<u64>: {} bytes", size_of::<Option<u64>>());
    println!("Optional<u64>: {} bytes", size_of::<Optional<u64>>());
    println!("OptionalTombstone<u64>: {} bytes", size_of::<OptionalTombstone<u64>>());
    println!("Optional<String>: {} bytes", size_of::<Optional<String>>());
    println!("Port: {} bytes", size_of::<Port>());

    Ok(())
}
