use core::{
    fmt,
    hash::{Hash, Hasher},
};

use super::GeneralizedOptional;
use crate::policy::Policy;

impl<T, P: Policy<T>> Default for GeneralizedOptional<T, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Policy<T>> From<T> for GeneralizedOptional<T, P> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: Clone, P: Policy<T>> Clone for GeneralizedOptional<T, P> {
    fn clone(&self) -> Self {
        Self::from_optional_ref(self)
    }

    /// Assigns in place when both sides hold a value.
    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: fmt::Debug, P: Policy<T>> fmt::Debug for GeneralizedOptional<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T, U, P, Q> PartialEq<GeneralizedOptional<U, Q>> for GeneralizedOptional<T, P>
where
    T: PartialEq<U>,
    P: Policy<T>,
    Q: Policy<U>,
{
    fn eq(&self, other: &GeneralizedOptional<U, Q>) -> bool {
        match (self.get(), other.get()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq, P: Policy<T>> Eq for GeneralizedOptional<T, P> {}

impl<T: Hash, P: Policy<T>> Hash for GeneralizedOptional<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
