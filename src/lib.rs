//! # `generalized_optional` - Policy-Composed Optional Values
//!
//! An optional value whose behavior is assembled at compile time from three
//! independent strategies:
//!
//! - **Storage**: where the value lives ([`storage::Aligned`]: inline, with the
//!   value's own size and alignment).
//! - **Control**: how presence is tracked ([`control::DependentBool`]: a flag
//!   next to the value; [`control::Tombstone`]: one reserved value of `T`, no
//!   extra bytes).
//! - **Access**: what reading an absent value does ([`access::Unchecked`],
//!   [`access::Throwing`], and the [`access::Functional`] combinators on top).
//!
//! ## Architecture
//!
//! Strategies are stacked, storage at the bottom, and every layer only calls
//! the layer beneath it. The stack is a plain nested struct resolved by the
//! type system; there is no dynamic dispatch and no extra indirection.
//!
//! [`GeneralizedOptional`] enforces the value lifecycle once for all stacks:
//! a value is built into an empty slot, destroyed exactly once, and copies,
//! moves and swaps work across differently-composed containers.
//!
//! ## Layout guarantees
//!
//! - Flag presence: same size and alignment as `struct { bool, T }`.
//! - Tombstone presence: same size and alignment as `T`.
//!
//! ## Example
//!
//! ```rust
//! use generalized_optional::prelude::*;
//!
//! let mut greeting: Optional<String> = Optional::new();
//! assert!(!greeting.has_value());
//!
//! greeting.assign("Hello World!");
//! assert_eq!(greeting.value().map(String::as_str), Ok("Hello World!"));
//! assert_eq!(greeting.len(), 12);
//!
//! greeting.reset();
//! assert_eq!(greeting.value(), Err(BadOptionalAccess));
//!
//! let mut slot: OptionalTombstone<i32> = OptionalTombstone::new();
//! slot.assign(42);
//! assert_eq!(*slot, 42);
//! assert_eq!(core::mem::size_of_val(&slot), core::mem::size_of::<i32>());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod access;
pub mod control;
pub mod error;
pub mod optional;
pub mod policy;
pub mod storage;

#[cfg(feature = "proptest")]
pub mod arbitrary;

mod trace;

pub use access::{Functional, Throwing, Unchecked};
pub use control::{DependentBool, Tombstone};
pub use error::BadOptionalAccess;
pub use optional::{CheckedValue, GeneralizedOptional, UncheckedValue};
pub use storage::Aligned;

/// Functional combinators over throwing reads, flag presence, inline storage.
pub type DefaultPolicy = crate::policy![crate::combine![Functional, Throwing], DependentBool, Aligned];

/// Same access as [`DefaultPolicy`], with tombstone presence.
pub type TombstonePolicy<S = control::Deduced> =
    crate::policy![crate::combine![Functional, Throwing], Tombstone<S>, Aligned];

/// Functional combinators over unchecked reads, flag presence, inline storage.
pub type UncheckedPolicy = crate::policy![crate::combine![Functional, Unchecked], DependentBool, Aligned];

/// The general-purpose optional: checked reads, a presence flag.
pub type Optional<T> = GeneralizedOptional<T, DefaultPolicy>;

/// An optional with no presence overhead; `S` names the value meaning "absent".
pub type OptionalTombstone<T, S = control::Deduced> = GeneralizedOptional<T, TombstonePolicy<S>>;

/// An optional whose reads are never checked.
pub type UncheckedOptional<T> = GeneralizedOptional<T, UncheckedPolicy>;

/// Traits and aliases for everyday use.
pub mod prelude {
    pub use crate::{
        BadOptionalAccess, CheckedValue, GeneralizedOptional, Optional, OptionalTombstone,
        UncheckedOptional, UncheckedValue,
    };
}

// Compile-time assertions for the layout claims above.
const _: () = {
    use core::mem;

    #[allow(dead_code)]
    struct Flagged<T> {
        _flag: bool,
        _value: T,
    }

    assert!(mem::size_of::<Optional<u8>>() == mem::size_of::<Flagged<u8>>());
    assert!(mem::size_of::<Optional<u64>>() == mem::size_of::<Flagged<u64>>());
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<Flagged<u64>>());

    assert!(mem::size_of::<OptionalTombstone<i32>>() == mem::size_of::<i32>());
    assert!(mem::align_of::<OptionalTombstone<i32>>() == mem::align_of::<i32>());
    assert!(mem::size_of::<OptionalTombstone<*const u8>>() == mem::size_of::<*const u8>());

    // Access layers are transparent.
    assert!(mem::size_of::<UncheckedOptional<u32>>() == mem::size_of::<Optional<u32>>());
};
