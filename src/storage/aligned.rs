use core::{fmt, mem::MaybeUninit};

use super::{raw, RawSlot};
use crate::policy::Compose;

/// Storage kind: the value lives inline, in a slot with `T`'s own size and alignment.
pub enum Aligned {}

impl<T> Compose<T> for Aligned {
    type Output = AlignedSlot<T>;
}

/// An inline `MaybeUninit<T>` slot.
///
/// The slot never drops its contents on its own; whoever tracks presence must
/// call [`RawSlot::destroy`] before letting it go.
#[repr(transparent)]
pub struct AlignedSlot<T> {
    slot: MaybeUninit<T>,
}

impl<T> RawSlot for AlignedSlot<T> {
    type Value = T;

    #[inline(always)]
    fn vacant() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    #[inline(always)]
    fn filled(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
        }
    }

    #[inline(always)]
    unsafe fn build(&mut self, value: T) {
        // SAFETY: caller asserts the slot is empty.
        unsafe { raw::write_slot(&mut self.slot, value) }
    }

    #[inline(always)]
    unsafe fn build_with<F>(&mut self, init: F)
    where
        F: FnOnce() -> T,
    {
        // SAFETY: caller asserts the slot is empty; a panicking `init` never reaches the write.
        unsafe { raw::write_slot(&mut self.slot, init()) }
    }

    #[inline(always)]
    unsafe fn destroy(&mut self) {
        // SAFETY: caller asserts the slot is occupied.
        unsafe { raw::drop_slot(&mut self.slot) }
    }

    #[inline(always)]
    unsafe fn take(&mut self) -> T {
        // SAFETY: caller asserts the slot is occupied and treats it as empty afterwards.
        unsafe { raw::read_slot(&self.slot) }
    }

    #[inline(always)]
    fn get_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    #[inline(always)]
    fn get_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }

    #[inline(always)]
    unsafe fn get_ref(&self) -> &T {
        // SAFETY: caller asserts the slot is occupied.
        unsafe { raw::assume_init_ref(&self.slot) }
    }

    #[inline(always)]
    unsafe fn get_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the slot is occupied.
        unsafe { raw::assume_init_mut(&mut self.slot) }
    }
}

impl<T> fmt::Debug for AlignedSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedSlot").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn build_then_destroy_runs_drop_once() {
        let witness = Rc::new(());
        let mut slot = AlignedSlot::<Rc<()>>::vacant();
        unsafe {
            slot.build(Rc::clone(&witness));
            assert_eq!(Rc::strong_count(&witness), 2);
            slot.destroy();
        }
        assert_eq!(Rc::strong_count(&witness), 1);
    }

    #[test]
    fn take_moves_value_out() {
        let mut slot = AlignedSlot::filled(String::from("slot"));
        let value = unsafe { slot.take() };
        assert_eq!(value, "slot");
    }

    #[test]
    fn pointers_address_the_slot() {
        let mut slot = AlignedSlot::filled(7u32);
        assert_eq!(slot.get_ptr(), slot.get_mut_ptr() as *const u32);
        unsafe {
            *slot.get_mut() += 1;
            assert_eq!(*slot.get_ref(), 8);
        }
    }
}
