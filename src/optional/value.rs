//! Direct value access, shaped by the access layer on top of the stack.
//!
//! Checked and unchecked stacks expose the same method names with different
//! signatures, so each family lives in its own extension trait. A given
//! container implements at most one of them.

use core::ops::{Deref, DerefMut};

use super::GeneralizedOptional;
use crate::access::{Access, CheckedAccess, UncheckedAccess};
use crate::control::Control;
use crate::error::BadOptionalAccess;
use crate::policy::Policy;
use crate::storage::RawSlot;

/// Value access for stacks that check presence.
pub trait CheckedValue {
    /// The contained type.
    type Value;

    /// The value, or [`BadOptionalAccess`] when absent.
    fn value(&self) -> Result<&Self::Value, BadOptionalAccess>;

    /// The value, mutably, or [`BadOptionalAccess`] when absent.
    fn value_mut(&mut self) -> Result<&mut Self::Value, BadOptionalAccess>;

    /// Consumes the container, returning the value or [`BadOptionalAccess`].
    fn into_value(self) -> Result<Self::Value, BadOptionalAccess>;
}

/// Value access for stacks that skip the presence check.
pub trait UncheckedValue {
    /// The contained type.
    type Value;

    /// The value, without checking that one is present.
    ///
    /// # Safety
    /// A value must be present, unless `Self::Value` is valid for any bytes the
    /// slot may hold (e.g. a zero-sized type, or a tombstone slot holding its sentinel).
    unsafe fn value(&self) -> &Self::Value;

    /// Mutable counterpart of [`value`](UncheckedValue::value).
    ///
    /// # Safety
    /// As for [`value`](UncheckedValue::value).
    unsafe fn value_mut(&mut self) -> &mut Self::Value;

    /// Moves the value out without checking that one is present.
    ///
    /// # Safety
    /// As for [`value`](UncheckedValue::value).
    unsafe fn into_value(self) -> Self::Value;
}

impl<T, P> CheckedValue for GeneralizedOptional<T, P>
where
    P: Policy<T>,
    P::Stack: CheckedAccess,
{
    type Value = T;

    #[inline]
    fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.stack.guard()?;
        // SAFETY: `CheckedAccess` guarantees presence after a successful guard.
        Ok(unsafe { self.stack.get_ref() })
    }

    #[inline]
    fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.stack.guard()?;
        // SAFETY: as above.
        Ok(unsafe { self.stack.get_mut() })
    }

    #[inline]
    fn into_value(mut self) -> Result<T, BadOptionalAccess> {
        self.stack.guard()?;
        self.take().ok_or(BadOptionalAccess)
    }
}

impl<T, P> UncheckedValue for GeneralizedOptional<T, P>
where
    P: Policy<T>,
    P::Stack: UncheckedAccess,
{
    type Value = T;

    #[inline(always)]
    unsafe fn value(&self) -> &T {
        unsafe { self.stack.get_ref() }
    }

    #[inline(always)]
    unsafe fn value_mut(&mut self) -> &mut T {
        unsafe { self.stack.get_mut() }
    }

    #[inline(always)]
    unsafe fn into_value(mut self) -> T {
        self.stack.value_unset();
        // SAFETY: caller upholds presence; the flag is already cleared, so
        // `Drop` does not destroy the moved-out value again.
        unsafe { self.stack.take() }
    }
}

/// Checked dereference. Panics with a [`BadOptionalAccess`] payload when absent.
impl<T, P> Deref for GeneralizedOptional<T, P>
where
    P: Policy<T>,
    P::Stack: CheckedAccess,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.stack.guard_or_raise();
        // SAFETY: `guard_or_raise` returned, so a value is present.
        unsafe { self.stack.get_ref() }
    }
}

impl<T, P> DerefMut for GeneralizedOptional<T, P>
where
    P: Policy<T>,
    P::Stack: CheckedAccess,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.stack.guard_or_raise();
        // SAFETY: as in `deref`.
        unsafe { self.stack.get_mut() }
    }
}
