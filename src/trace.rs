//! Lifecycle tracing, compiled in with the `tracing` feature.

/// Emits a `trace!` event for an occupancy transition of a container holding `$ty`.
macro_rules! lifecycle {
    ($op:literal, $ty:ty) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "generalized_optional",
            op = $op,
            value_type = core::any::type_name::<$ty>()
        );
    };
}

pub(crate) use lifecycle;
