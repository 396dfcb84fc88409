//! `proptest` strategies for property tests over optionals.
//!
//! Enabled with the `proptest` feature.

use core::fmt::Debug;

use proptest::prelude::*;

use crate::policy::Policy;
use crate::GeneralizedOptional;

/// Empty or holding a value drawn from `inner`, with equal weight.
pub fn optional<T, P, S>(inner: S) -> impl Strategy<Value = GeneralizedOptional<T, P>>
where
    T: Debug,
    P: Policy<T>,
    S: Strategy<Value = T>,
{
    proptest::option::of(inner).prop_map(GeneralizedOptional::from_option)
}

/// Like [`optional`], but an empty container appears with probability `1 - probability`.
///
/// `probability` must be strictly between 0 and 1; proptest panics otherwise.
pub fn weighted<T, P, S>(probability: f64, inner: S) -> impl Strategy<Value = GeneralizedOptional<T, P>>
where
    T: Debug,
    P: Policy<T>,
    S: Strategy<Value = T>,
{
    proptest::option::weighted(probability, inner).prop_map(GeneralizedOptional::from_option)
}
