//! Storage strategies: the bottom of every policy stack.
//!
//! A storage layer owns a slot sized and aligned for exactly one value and knows
//! nothing about presence. Everything that touches the value is `unsafe`: the
//! layer is deliberately unchecked and all bookkeeping is pushed upward to the
//! control layer.

mod aligned;
pub(crate) mod raw;

pub use aligned::{Aligned, AlignedSlot};

/// Raw slot capability shared by every layer of a stack.
///
/// The bottom layer implements it over real memory; the layers above forward
/// it, and a presence layer may override individual operations (a tombstone
/// slot, for instance, is never physically uninitialized).
pub trait RawSlot {
    /// The type stored in the slot.
    type Value;

    /// Creates a slot in its empty state.
    fn vacant() -> Self;

    /// Creates a slot already holding `value`.
    ///
    /// Presence bookkeeping above the storage is left untouched.
    fn filled(value: Self::Value) -> Self
    where
        Self: Sized,
    {
        let mut slot = Self::vacant();
        // SAFETY: the slot was just created empty.
        unsafe { slot.build(value) };
        slot
    }

    /// Constructs `value` in the slot.
    ///
    /// # Safety
    /// The slot must be empty.
    unsafe fn build(&mut self, value: Self::Value);

    /// Constructs the value produced by `init` in the slot.
    ///
    /// If `init` panics the slot stays empty.
    ///
    /// # Safety
    /// The slot must be empty.
    unsafe fn build_with<F>(&mut self, init: F)
    where
        F: FnOnce() -> Self::Value,
    {
        // SAFETY: forwarded precondition.
        unsafe { self.build(init()) }
    }

    /// Destroys the value, leaving the slot empty.
    ///
    /// # Safety
    /// The slot must be occupied.
    unsafe fn destroy(&mut self);

    /// Moves the value out, leaving the slot empty.
    ///
    /// # Safety
    /// The slot must be occupied.
    unsafe fn take(&mut self) -> Self::Value;

    /// Pointer to the slot, valid whether or not it is occupied.
    fn get_ptr(&self) -> *const Self::Value;

    /// Mutable pointer to the slot, valid whether or not it is occupied.
    fn get_mut_ptr(&mut self) -> *mut Self::Value;

    /// # Safety
    /// The slot must be occupied (or `Self::Value` must be valid for any bytes).
    unsafe fn get_ref(&self) -> &Self::Value;

    /// # Safety
    /// The slot must be occupied (or `Self::Value` must be valid for any bytes).
    unsafe fn get_mut(&mut self) -> &mut Self::Value;
}
