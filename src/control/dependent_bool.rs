use crate::control::Control;
use crate::policy::Layer;
use crate::storage::RawSlot;

/// Presence kind: a `bool` flag stored next to the slot.
pub enum DependentBool {}

impl Layer for DependentBool {
    type On<B> = FlagLayer<B>;
}

/// Tracks presence with a flag that starts out `false`.
///
/// Same size and alignment as `struct { bool, T }`.
pub struct FlagLayer<B> {
    base: B,
    has_value: bool,
}

impl<B: RawSlot> RawSlot for FlagLayer<B> {
    type Value = B::Value;

    #[inline(always)]
    fn vacant() -> Self {
        Self {
            base: B::vacant(),
            has_value: false,
        }
    }

    #[inline(always)]
    fn filled(value: Self::Value) -> Self {
        Self {
            base: B::filled(value),
            has_value: false,
        }
    }

    #[inline(always)]
    unsafe fn build(&mut self, value: Self::Value) {
        unsafe { self.base.build(value) }
    }

    #[inline(always)]
    unsafe fn build_with<F>(&mut self, init: F)
    where
        F: FnOnce() -> Self::Value,
    {
        unsafe { self.base.build_with(init) }
    }

    #[inline(always)]
    unsafe fn destroy(&mut self) {
        unsafe { self.base.destroy() }
    }

    #[inline(always)]
    unsafe fn take(&mut self) -> Self::Value {
        unsafe { self.base.take() }
    }

    #[inline(always)]
    fn get_ptr(&self) -> *const Self::Value {
        self.base.get_ptr()
    }

    #[inline(always)]
    fn get_mut_ptr(&mut self) -> *mut Self::Value {
        self.base.get_mut_ptr()
    }

    #[inline(always)]
    unsafe fn get_ref(&self) -> &Self::Value {
        unsafe { self.base.get_ref() }
    }

    #[inline(always)]
    unsafe fn get_mut(&mut self) -> &mut Self::Value {
        unsafe { self.base.get_mut() }
    }
}

impl<B: RawSlot> Control for FlagLayer<B> {
    #[inline(always)]
    fn occupied(value: Self::Value) -> Self {
        Self {
            base: B::filled(value),
            has_value: true,
        }
    }

    #[inline(always)]
    fn has_value(&self) -> bool {
        self.has_value
    }

    #[inline(always)]
    fn value_set(&mut self) {
        self.has_value = true;
    }

    #[inline(always)]
    fn value_unset(&mut self) {
        self.has_value = false;
    }

    #[inline(always)]
    unsafe fn release(&mut self) {
        // SAFETY: forwarded precondition; the base may still hold a sentinel.
        unsafe { self.base.release() }
    }
}
