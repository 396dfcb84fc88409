//! The single runtime failure of the crate.

use thiserror::Error;

/// A checked read found no value in the slot.
///
/// Returned by the checked value accessors and carried as the panic payload
/// of checked dereference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("bad optional access")]
pub struct BadOptionalAccess;
