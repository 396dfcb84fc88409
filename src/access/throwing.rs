use super::{Access, CheckedAccess};
use crate::control::Control;
use crate::error::BadOptionalAccess;
use crate::policy::{forward_control, forward_raw_slot, Layer};

/// Access kind: reads of an absent value fail with [`BadOptionalAccess`].
pub enum Throwing {}

impl Layer for Throwing {
    type On<B> = ThrowingLayer<B>;
}

/// Checks presence before every guarded read.
#[repr(transparent)]
pub struct ThrowingLayer<B> {
    base: B,
}

forward_raw_slot!(ThrowingLayer);
forward_control!(ThrowingLayer);

impl<B: Control> Access for ThrowingLayer<B> {
    #[inline]
    fn guard(&self) -> Result<(), BadOptionalAccess> {
        if self.base.has_value() {
            Ok(())
        } else {
            Err(BadOptionalAccess)
        }
    }
}

// SAFETY: `guard` succeeds only when the control layer reports a value.
unsafe impl<B: Control> CheckedAccess for ThrowingLayer<B> {}
