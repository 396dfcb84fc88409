//! Presence strategies.
//!
//! A control layer answers "is there a value in the slot" using nothing but the
//! raw operations of the storage beneath it. Two strategies are provided:
//! - [`DependentBool`]: a separate flag kept in lockstep with the slot.
//! - [`Tombstone`]: no extra bytes; one in-range value of `T` means "absent".

mod dependent_bool;
pub mod sentinel;
mod tombstone;

pub use dependent_bool::{DependentBool, FlagLayer};
pub use sentinel::{Deduced, DeduceTombstone, DefaultValue, Sentinel, Zeroed};
pub use tombstone::{Tombstone, TombstoneLayer};

use crate::storage::RawSlot;

/// Presence tracking on top of a raw slot.
///
/// The owner of a stack must pair every occupancy change with exactly one of
/// [`value_set`](Control::value_set) / [`value_unset`](Control::value_unset).
/// Layers whose presence is derived from the value itself implement both as
/// no-ops.
pub trait Control: RawSlot {
    /// Creates the stack already holding a present value.
    fn occupied(value: Self::Value) -> Self
    where
        Self: Sized,
    {
        let mut stack = Self::filled(value);
        stack.value_set();
        stack
    }

    /// Whether the slot currently holds a live value.
    fn has_value(&self) -> bool;

    /// Records that a value was just built into the slot.
    fn value_set(&mut self);

    /// Records that the value is about to be (or was) removed from the slot.
    fn value_unset(&mut self);

    /// Tears down whatever a logically empty slot still physically holds.
    ///
    /// Called once, at the end of the owner's life, after any present value was
    /// destroyed.
    ///
    /// # Safety
    /// The stack must be logically empty and must not be used afterwards.
    unsafe fn release(&mut self) {}
}
