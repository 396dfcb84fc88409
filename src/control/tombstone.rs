use core::{marker::PhantomData, mem};

use super::sentinel::{Deduced, Sentinel};
use crate::control::Control;
use crate::policy::Layer;
use crate::storage::RawSlot;

/// Presence kind: the value equal to `S::sentinel()` means "absent".
///
/// Costs no memory beyond the value itself. Storing a value equal to the
/// sentinel is indistinguishable from being empty and reads back as absent.
pub struct Tombstone<S = Deduced>(PhantomData<fn() -> S>);

impl<S> Layer for Tombstone<S> {
    type On<B> = TombstoneLayer<S, B>;
}

/// Presence derived from the slot's own value.
///
/// The underlying slot is initialized for the whole life of the layer: empty
/// means "holds the sentinel". Building overwrites the sentinel, destroying
/// writes it back, and [`Control::release`] finally drops whatever is left.
#[repr(transparent)]
pub struct TombstoneLayer<S, B> {
    base: B,
    _sentinel: PhantomData<fn() -> S>,
}

impl<S, B> TombstoneLayer<S, B> {
    #[inline(always)]
    fn wrap(base: B) -> Self {
        Self {
            base,
            _sentinel: PhantomData,
        }
    }
}

impl<S, B> RawSlot for TombstoneLayer<S, B>
where
    B: RawSlot,
    B::Value: PartialEq,
    S: Sentinel<B::Value>,
{
    type Value = B::Value;

    #[inline(always)]
    fn vacant() -> Self {
        Self::wrap(B::filled(S::sentinel()))
    }

    #[inline(always)]
    fn filled(value: Self::Value) -> Self {
        Self::wrap(B::filled(value))
    }

    #[inline(always)]
    unsafe fn build(&mut self, value: Self::Value) {
        // SAFETY: the base slot always holds a value; "empty" means the sentinel.
        unsafe { *self.base.get_mut() = value }
    }

    #[inline(always)]
    unsafe fn destroy(&mut self) {
        // SAFETY: see `build`.
        unsafe { *self.base.get_mut() = S::sentinel() }
    }

    #[inline(always)]
    unsafe fn take(&mut self) -> Self::Value {
        // SAFETY: see `build`.
        mem::replace(unsafe { self.base.get_mut() }, S::sentinel())
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

impl<S, B> Control for TombstoneLayer<S, B>
where
    B: RawSlot,
    B::Value: PartialEq,
    S: Sentinel<B::Value>,
{
    #[inline(always)]
    fn occupied(value: Self::Value) -> Self {
        Self::filled(value)
    }

    #[inline(always)]
    fn has_value(&self) -> bool {
        // SAFETY: the base slot is initialized from construction to release.
        unsafe { *self.base.get_ref() != S::sentinel() }
    }

    #[inline(always)]
    fn value_set(&mut self) {}

    #[inline(always)]
    fn value_unset(&mut self) {}

    #[inline(always)]
    unsafe fn release(&mut self) {
        // SAFETY: the slot holds the sentinel; nobody reads it after release.
        unsafe { self.base.destroy() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::sentinel::ConstI32;
    use crate::storage::AlignedSlot;

    type Deduced32 = TombstoneLayer<Deduced, AlignedSlot<i32>>;

    #[test]
    fn vacant_holds_the_sentinel() {
        let stack = Deduced32::vacant();
        assert!(!stack.has_value());
        assert_eq!(unsafe { *stack.get_ref() }, i32::MIN);
    }

    #[test]
    fn destroy_writes_the_sentinel_back() {
        let mut stack = Deduced32::occupied(42);
        assert!(stack.has_value());
        unsafe { stack.destroy() };
        assert!(!stack.has_value());
        assert_eq!(unsafe { *stack.get_ref() }, i32::MIN);
    }

    #[test]
    fn take_leaves_the_slot_empty() {
        let mut stack = Deduced32::occupied(9);
        assert_eq!(unsafe { stack.take() }, 9);
        assert!(!stack.has_value());
    }

    #[test]
    fn custom_sentinel_is_respected() {
        let stack = TombstoneLayer::<ConstI32<-1>, AlignedSlot<i32>>::occupied(i32::MIN);
        assert!(stack.has_value());
        let stack = TombstoneLayer::<ConstI32<-1>, AlignedSlot<i32>>::occupied(-1);
        assert!(!stack.has_value());
    }

    #[test]
    fn release_drops_the_sentinel() {
        use std::rc::Rc;

        struct Shared(Rc<()>);
        impl PartialEq for Shared {
            fn eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.0, &other.0)
            }
        }

        thread_local! {
            static EMPTY: Rc<()> = Rc::new(());
        }
        enum SharedEmpty {}
        impl Sentinel<Shared> for SharedEmpty {
            fn sentinel() -> Shared {
                Shared(EMPTY.with(Rc::clone))
            }
        }

        let baseline = EMPTY.with(Rc::strong_count);
        let mut stack = TombstoneLayer::<SharedEmpty, AlignedSlot<Shared>>::vacant();
        assert!(!stack.has_value());
        assert_eq!(EMPTY.with(Rc::strong_count), baseline + 1);
        unsafe { stack.release() };
        assert_eq!(EMPTY.with(Rc::strong_count), baseline);
    }
}
