use super::{Access, UncheckedAccess};
use crate::control::Control;
use crate::error::BadOptionalAccess;
use crate::policy::{forward_control, forward_raw_slot, Layer};

/// Access kind: no presence check at all.
pub enum Unchecked {}

impl Layer for Unchecked {
    type On<B> = UncheckedLayer<B>;
}

/// Lets every read through. The caller proves presence.
#[repr(transparent)]
pub struct UncheckedLayer<B> {
    base: B,
}

forward_raw_slot!(UncheckedLayer);
forward_control!(UncheckedLayer);

impl<B: Control> Access for UncheckedLayer<B> {
    #[inline(always)]
    fn guard(&self) -> Result<(), BadOptionalAccess> {
        Ok(())
    }
}

impl<B: Control> UncheckedAccess for UncheckedLayer<B> {}
