//! Unsafe, centralized operations on `MaybeUninit<T>` value slots.
//!
//! Every storage layer keeps its value in a `MaybeUninit<T>`. These helpers are
//! the single place to audit:
//! - in-place construction (`write`)
//! - bitwise moves out of a slot (`ptr::read`)
//! - destruction (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! A slot is occupied *exactly* between a successful `write_slot` and the
//! matching `read_slot` or `drop_slot`. The helpers do not track this; the
//! presence layer stacked above the storage does.

use core::{mem::MaybeUninit, ptr};

/// Constructs `value` in an empty slot.
///
/// # Safety
/// - The slot must be empty. Writing over a live value leaks it.
#[inline(always)]
pub(crate) unsafe fn write_slot<T>(slot: &mut MaybeUninit<T>, value: T) {
    slot.write(value);
}

/// Interprets an occupied slot as `&T`.
///
/// # Safety
/// - `slot` must be occupied.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is occupied.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an occupied slot as `&mut T`.
///
/// # Safety
/// - `slot` must be occupied.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is occupied; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves the value out, leaving the slot logically empty.
///
/// # Safety
/// - `slot` must be occupied.
/// - The caller must treat the slot as empty afterwards, or the value is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read_slot<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts occupancy and takes over ownership of the bytes.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops the value in place, leaving the slot empty.
///
/// # Safety
/// - `slot` must be occupied.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_slot<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts occupancy and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
