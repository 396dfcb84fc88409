//! `GeneralizedOptional`: one value or none, over a composed policy stack.
//!
//! The container owns the lifecycle rules; the stack decides how they are
//! carried out:
//! - before building into the slot, the slot is empty;
//! - presence is cleared before a value is destroyed or moved out, so a
//!   panicking destructor leaks instead of dropping twice;
//! - every present value is destroyed exactly once, either by an explicit
//!   transition or when the container is dropped.
//!
//! Live-source transfers (`take`, `take_from`, `assign_take`, `swap`) always
//! leave the source empty, including under tombstone presence.

mod traits;
mod value;


pub use value::{CheckedValue, UncheckedValue};

use core::{marker::PhantomData, mem};

use crate::access::FunctionalAccess;
use crate::control::Control;
use crate::policy::Policy;
use crate::storage::RawSlot;
use crate::trace::lifecycle;

/// A container holding at most one `T`, with storage, presence tracking and
/// read checking chosen by the policy list `P`.
///
/// See [`Optional`](crate::Optional) and [`OptionalTombstone`](crate::OptionalTombstone)
/// for ready-made policies, and [`policy!`](crate::policy) to build your own.
pub struct GeneralizedOptional<T, P: Policy<T>> {
    stack: P::Stack,
    _marker: PhantomData<(T, fn() -> P)>,
}

impl<T, P: Policy<T>> GeneralizedOptional<T, P> {
    #[inline(always)]
    fn from_stack(stack: P::Stack) -> Self {
        Self {
            stack,
            _marker: PhantomData,
        }
    }

    /// Creates an empty container.
    #[inline]
    pub fn new() -> Self {
        Self::from_stack(<P::Stack as RawSlot>::vacant())
    }

    /// Creates an empty container. Same as [`new`](Self::new).
    #[inline]
    pub fn none() -> Self {
        Self::new()
    }

    /// Creates a container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        lifecycle!("build", T);
        Self::from_stack(<P::Stack as Control>::occupied(value))
    }

    /// Creates a container holding `value` converted into `T`.
    #[inline]
    pub fn from_value<U: Into<T>>(value: U) -> Self {
        Self::some(value.into())
    }

    /// Creates a container mirroring `option`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or_else(Self::new, Self::some)
    }

    /// Creates a container holding the value returned by `init`.
    #[inline]
    pub fn in_place<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut this = Self::new();
        this.emplace_with(init);
        this
    }

    /// Creates a container holding `T::default()`.
    #[inline]
    pub fn in_place_default() -> Self
    where
        T: Default,
    {
        Self::in_place(T::default)
    }

    /// Creates a container holding a `T` collected from `iter`.
    #[inline]
    pub fn in_place_from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        Self::in_place(|| iter.into_iter().collect())
    }

    /// Converts another container, moving its value across.
    pub fn from_optional<U, Q>(mut other: GeneralizedOptional<U, Q>) -> Self
    where
        U: Into<T>,
        Q: Policy<U>,
    {
        other.take().map_or_else(Self::new, |value| Self::some(value.into()))
    }

    /// Converts another container, copying its value.
    pub fn from_optional_ref<U, Q>(other: &GeneralizedOptional<U, Q>) -> Self
    where
        U: Clone + Into<T>,
        Q: Policy<U>,
    {
        other
            .get()
            .map_or_else(Self::new, |value| Self::some(value.clone().into()))
    }

    /// Moves the value out of a live container, leaving it empty.
    pub fn take_from<Q>(other: &mut GeneralizedOptional<T, Q>) -> Self
    where
        Q: Policy<T>,
    {
        Self::from_option(other.take())
    }

    /// Whether a value is present.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.stack.has_value()
    }

    /// The value, if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.stack.has_value() {
            // SAFETY: presence reported by the control layer.
            Some(unsafe { self.stack.get_ref() })
        } else {
            None
        }
    }

    /// The value, mutably, if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.stack.has_value() {
            // SAFETY: presence reported by the control layer.
            Some(unsafe { self.stack.get_mut() })
        } else {
            None
        }
    }

    /// Pointer to the value slot. Only dereferenceable while a value is present.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.stack.get_ptr()
    }

    /// Mutable pointer to the value slot. Only dereferenceable while a value is present.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.stack.get_mut_ptr()
    }

    /// Stores `value`, assigning over a present value or building into an empty slot.
    pub fn assign<U: Into<T>>(&mut self, value: U) {
        let value = value.into();
        match self.get_mut() {
            Some(slot) => *slot = value,
            None => self.fill(value),
        }
    }

    /// Copy-assigns from another container, of any policy.
    ///
    /// An empty source empties `self`.
    pub fn assign_from<U, Q>(&mut self, other: &GeneralizedOptional<U, Q>)
    where
        U: Clone + Into<T>,
        Q: Policy<U>,
    {
        match other.get() {
            Some(value) => self.assign(value.clone()),
            None => self.clean(),
        }
    }

    /// Move-assigns from another container, of any policy, leaving it empty.
    pub fn assign_take<U, Q>(&mut self, other: &mut GeneralizedOptional<U, Q>)
    where
        U: Into<T>,
        Q: Policy<U>,
    {
        match other.take() {
            Some(value) => self.assign(value),
            None => self.clean(),
        }
    }

    /// Destroys any present value and stores `value`.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Destroys any present value and stores the one produced by `init`.
    ///
    /// If `init` panics the container is left empty.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.clean();
        lifecycle!("build", T);
        // SAFETY: `clean` left the slot empty.
        unsafe { self.stack.build_with(init) };
        self.stack.value_set();
        // SAFETY: just built.
        unsafe { self.stack.get_mut() }
    }

    /// Destroys any present value and stores one collected from `iter`.
    pub fn emplace_from_iter<I>(&mut self, iter: I) -> &mut T
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.emplace_with(|| iter.into_iter().collect())
    }

    /// Destroys the value if present. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        self.clean();
    }

    /// Moves the value out, leaving the container empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.stack.has_value() {
            return None;
        }
        lifecycle!("take", T);
        self.stack.value_unset();
        // SAFETY: was present; presence is already cleared.
        Some(unsafe { self.stack.take() })
    }

    /// Stores `value`, returning the previous value if there was one.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.fill(value);
        old
    }

    /// Exchanges contents with another container, of any policy.
    ///
    /// Two present values swap in place; a single present value moves across
    /// and leaves its source empty; two empty containers stay empty.
    pub fn swap<Q>(&mut self, other: &mut GeneralizedOptional<T, Q>)
    where
        Q: Policy<T>,
    {
        lifecycle!("swap", T);
        match (self.stack.has_value(), other.stack.has_value()) {
            (true, true) => {
                // SAFETY: both present.
                unsafe { mem::swap(self.stack.get_mut(), other.stack.get_mut()) }
            }
            (true, false) => {
                if let Some(value) = self.take() {
                    other.fill(value);
                }
            }
            (false, true) => {
                if let Some(value) = other.take() {
                    self.fill(value);
                }
            }
            (false, false) => {}
        }
    }

    /// The value, or `default` converted into `T`. Never changes `self`.
    pub fn value_or<U: Into<T>>(&self, default: U) -> T
    where
        T: Clone,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// The value, or the result of `default`. Never changes `self`.
    pub fn value_or_else<F>(&self, default: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.get().cloned().unwrap_or_else(default)
    }

    /// Consumes the container, returning the value or `default` converted into `T`.
    pub fn into_value_or<U: Into<T>>(mut self, default: U) -> T {
        self.take().unwrap_or_else(|| default.into())
    }

    /// Consumes the container into a plain `Option`.
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Builds `value` into an empty slot.
    #[inline]
    fn fill(&mut self, value: T) {
        debug_assert!(!self.stack.has_value());
        lifecycle!("build", T);
        // SAFETY: callers only fill an empty slot.
        unsafe { self.stack.build(value) };
        self.stack.value_set();
    }

    /// Destroys the value if present.
    #[inline]
    fn clean(&mut self) {
        if self.stack.has_value() {
            lifecycle!("destroy", T);
            self.stack.value_unset();
            // SAFETY: was present; presence is already cleared.
            unsafe { self.stack.destroy() };
        }
    }
}

/// Combinators offered by stacks with a [`Functional`](crate::access::Functional) layer.
impl<T, P> GeneralizedOptional<T, P>
where
    P: Policy<T>,
    P::Stack: FunctionalAccess,
{
    /// Calls `f` with the value if present, otherwise returns `default`.
    pub fn with_value_or<U, F>(&self, default: U, f: F) -> U
    where
        F: FnOnce(&T) -> U,
    {
        self.get().map_or(default, f)
    }

    /// Calls `f` with the value if present; does nothing otherwise.
    pub fn with_value<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.get() {
            f(value);
        }
    }

    /// Consuming form of [`with_value_or`](Self::with_value_or).
    pub fn into_with_value_or<U, F>(mut self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.take().map_or(default, f)
    }

    /// Consuming form of [`with_value`](Self::with_value).
    pub fn into_with_value<F>(mut self, f: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.take() {
            f(value);
        }
    }
}

impl<T, P: Policy<T>> Drop for GeneralizedOptional<T, P> {
    fn drop(&mut self) {
        self.clean();
        // SAFETY: empty after `clean`, and never touched again.
        unsafe { self.stack.release() }
    }
}
