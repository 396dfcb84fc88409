use super::{Access, CheckedAccess, FunctionalAccess, UncheckedAccess};
use crate::error::BadOptionalAccess;
use crate::policy::{forward_control, forward_raw_slot, Layer};

/// Access kind: `with_value` combinators over another access layer.
///
/// Use it through [`combine!`](crate::combine), e.g.
/// `combine![Functional, Throwing]`.
pub enum Functional {}

impl Layer for Functional {
    type On<B> = FunctionalLayer<B>;
}

/// Adds [`FunctionalAccess`] and keeps the read policy of `B`.
#[repr(transparent)]
pub struct FunctionalLayer<B> {
    base: B,
}

forward_raw_slot!(FunctionalLayer);
forward_control!(FunctionalLayer);

impl<B: Access> Access for FunctionalLayer<B> {
    #[inline(always)]
    fn guard(&self) -> Result<(), BadOptionalAccess> {
        self.base.guard()
    }
}

impl<B: Access> FunctionalAccess for FunctionalLayer<B> {}

// SAFETY: `guard` is `B::guard`, which upholds the contract.
unsafe impl<B: CheckedAccess> CheckedAccess for FunctionalLayer<B> {}

impl<B: UncheckedAccess> UncheckedAccess for FunctionalLayer<B> {}
