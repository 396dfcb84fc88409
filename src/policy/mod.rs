//! Policy composition: turning a flat list of strategy descriptors into one
//! statically dispatched layer stack.
//!
//! A descriptor is a zero-sized type. Layer descriptors implement [`Layer`],
//! whose `On<B>` names the concrete layer built on top of `B`. Storage
//! descriptors terminate a list and implement [`Compose`] directly.
//!
//! ```text
//! policy![Throwing, DependentBool, Aligned]
//!   = Cons<Throwing, Cons<DependentBool, Aligned>>
//!   -> ThrowingLayer<FlagLayer<AlignedSlot<T>>>
//! ```
//!
//! Layers only ever call downward. Anything a layer does not override is
//! forwarded to the layer beneath it (see the `forward_*` macros), so each call
//! resolves at compile time to the nearest layer that defines it.

use core::marker::PhantomData;

use crate::access::Access;
use crate::storage::RawSlot;

#[cfg(test)]
mod tests;

/// A strategy that wraps the layer beneath it.
pub trait Layer {
    /// The layer produced on top of `B`.
    type On<B>;
}

/// Resolves a descriptor list into the concrete stack for value type `T`.
pub trait Compose<T> {
    /// The composed stack.
    type Output: RawSlot<Value = T>;
}

/// One link of a descriptor list: `H` layered on top of whatever `R` composes to.
pub struct Cons<H, R>(PhantomData<fn() -> (H, R)>);

impl<T, H, R> Compose<T> for Cons<H, R>
where
    H: Layer,
    R: Compose<T>,
    H::On<R::Output>: RawSlot<Value = T>,
{
    type Output = H::On<R::Output>;
}

/// Merges two layer descriptors into one, `A` on top of `B`.
///
/// Lets several access-like strategies occupy a single entry of a policy list.
pub struct Combine<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Layer, B: Layer> Layer for Combine<A, B> {
    type On<X> = A::On<B::On<X>>;
}

/// A composition complete enough to back a [`GeneralizedOptional`](crate::GeneralizedOptional).
///
/// Implemented automatically for every descriptor list whose stack exposes an
/// access layer on top.
pub trait Policy<T> {
    /// The composed stack.
    type Stack: Access<Value = T>;
}

impl<T, P> Policy<T> for P
where
    P: Compose<T>,
    P::Output: Access<Value = T>,
{
    type Stack = P::Output;
}

/// The stack a policy list composes to for `T`.
pub type Stack<T, P> = <P as Compose<T>>::Output;

/// Builds a policy list, outermost strategy first and storage last.
///
/// ```
/// use generalized_optional::access::Throwing;
/// use generalized_optional::control::DependentBool;
/// use generalized_optional::storage::Aligned;
/// use generalized_optional::{policy, GeneralizedOptional};
///
/// type Checked<T> = GeneralizedOptional<T, policy![Throwing, DependentBool, Aligned]>;
/// assert!(!Checked::<u8>::new().has_value());
/// ```
#[macro_export]
macro_rules! policy {
    ($storage:ty $(,)?) => { $storage };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::policy::Cons<$head, $crate::policy!($($rest),+)>
    };
}

/// Merges layer descriptors into a single entry, outermost first.
#[macro_export]
macro_rules! combine {
    ($only:ty $(,)?) => { $only };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::policy::Combine<$head, $crate::combine!($($rest),+)>
    };
}

/// Implements [`RawSlot`] for a single-field layer `$layer<B> { base: B }`
/// by forwarding to `base`.
macro_rules! forward_raw_slot {
    ($layer:ident) => {
        impl<B: $crate::storage::RawSlot> $crate::storage::RawSlot for $layer<B> {
            type Value = B::Value;

            #[inline(always)]
            fn vacant() -> Self {
                Self { base: B::vacant() }
            }

            #[inline(always)]
            fn filled(value: Self::Value) -> Self {
                Self {
                    base: B::filled(value),
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
    };
}

/// Implements [`Control`](crate::control::Control) for a single-field layer by
/// forwarding to `base`.
macro_rules! forward_control {
    ($layer:ident) => {
        impl<B: $crate::control::Control> $crate::control::Control for $layer<B> {
            #[inline(always)]
            fn occupied(value: Self::Value) -> Self {
                Self {
                    base: B::occupied(value),
                }
            }

            #[inline(always)]
            fn has_value(&self) -> bool {
                self.base.has_value()
            }

            #[inline(always)]
            fn value_set(&mut self) {
                self.base.value_set();
            }

            #[inline(always)]
            fn value_unset(&mut self) {
                self.base.value_unset();
            }

            #[inline(always)]
            unsafe fn release(&mut self) {
                unsafe { self.base.release() }
            }
        }
    };
}

pub(crate) use forward_control;
pub(crate) use forward_raw_slot;
