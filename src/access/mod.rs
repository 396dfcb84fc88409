//! Access strategies: what a read does when the value may be absent.
//!
//! | Layer | Absent read |
//! |---|---|
//! | [`Unchecked`] | not checked; reads are `unsafe` and never fail |
//! | [`Throwing`] | fails with [`BadOptionalAccess`] before touching the slot |
//! | [`Functional`] | adds `with_value` combinators on top of either |
//!
//! Access layers never change presence; they only gate reads. Which read
//! methods a [`GeneralizedOptional`](crate::GeneralizedOptional) offers is
//! decided by the marker traits its stack implements.

mod functional;
mod throwing;
mod unchecked;

pub use functional::{Functional, FunctionalLayer};
pub use throwing::{Throwing, ThrowingLayer};
pub use unchecked::{Unchecked, UncheckedLayer};

use crate::control::Control;
use crate::error::BadOptionalAccess;

/// The top capability of a policy stack.
pub trait Access: Control {
    /// Decides whether a read may go ahead.
    fn guard(&self) -> Result<(), BadOptionalAccess>;

    /// Like [`guard`](Access::guard), but raises the failure as a panic whose
    /// payload is the [`BadOptionalAccess`] value.
    #[inline]
    fn guard_or_raise(&self) {
        if let Err(err) = self.guard() {
            std::panic::panic_any(err);
        }
    }
}

/// Stacks whose reads are verified against presence.
///
/// # Safety
/// [`Access::guard`] must return `Ok` only when [`Control::has_value`] is `true`.
pub unsafe trait CheckedAccess: Access {}

/// Stacks whose reads skip the presence check.
pub trait UncheckedAccess: Access {}

/// Stacks offering the `with_value` family of combinators.
pub trait FunctionalAccess: Access {}
