//! Sentinel providers for [`Tombstone`](super::Tombstone) presence.
//!
//! A provider is a zero-sized type naming the value of `T` that stands for
//! "absent". Rust cannot take a const parameter of an arbitrary type, so the
//! value travels through [`Sentinel::sentinel`] instead.

use num_traits::Bounded;
use zerocopy::FromZeroes;

/// Names the value of `T` that marks an empty tombstone slot.
pub trait Sentinel<T> {
    /// Produces the sentinel. Must return an equal value on every call.
    fn sentinel() -> T;
}

/// Types with an obvious out-of-band value.
///
/// - signed integers and floats: the minimum finite value
/// - unsigned integers: the maximum value
/// - raw pointers: null
pub trait DeduceTombstone: Sized {
    /// The deduced sentinel.
    fn deduced_tombstone() -> Self;
}

macro_rules! deduce_min {
    ($($ty:ty)*) => {$(
        impl DeduceTombstone for $ty {
            #[inline(always)]
            fn deduced_tombstone() -> Self {
                <$ty as Bounded>::min_value()
            }
        }
    )*};
}

macro_rules! deduce_max {
    ($($ty:ty)*) => {$(
        impl DeduceTombstone for $ty {
            #[inline(always)]
            fn deduced_tombstone() -> Self {
                <$ty as Bounded>::max_value()
            }
        }
    )*};
}

deduce_min!(i8 i16 i32 i64 i128 isize f32 f64);
deduce_max!(u8 u16 u32 u64 u128 usize);

impl<T> DeduceTombstone for *const T {
    #[inline(always)]
    fn deduced_tombstone() -> Self {
        core::ptr::null()
    }
}

impl<T> DeduceTombstone for *mut T {
    #[inline(always)]
    fn deduced_tombstone() -> Self {
        core::ptr::null_mut()
    }
}

/// Uses [`DeduceTombstone`].
pub enum Deduced {}

impl<T: DeduceTombstone> Sentinel<T> for Deduced {
    #[inline(always)]
    fn sentinel() -> T {
        T::deduced_tombstone()
    }
}

/// Uses `T::default()`.
pub enum DefaultValue {}

impl<T: Default> Sentinel<T> for DefaultValue {
    #[inline(always)]
    fn sentinel() -> T {
        T::default()
    }
}

/// Uses the all-zero bit pattern.
pub enum Zeroed {}

impl<T: FromZeroes> Sentinel<T> for Zeroed {
    #[inline(always)]
    fn sentinel() -> T {
        T::new_zeroed()
    }
}

macro_rules! const_sentinels {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        #[doc = concat!("A fixed `", stringify!($ty), "` sentinel.")]
        pub enum $name<const V: $ty> {}

        impl<const V: $ty> Sentinel<$ty> for $name<V> {
            #[inline(always)]
            fn sentinel() -> $ty {
                V
            }
        }
    )*};
}

const_sentinels! {
    ConstI8: i8,
    ConstI16: i16,
    ConstI32: i32,
    ConstI64: i64,
    ConstI128: i128,
    ConstIsize: isize,
    ConstU8: u8,
    ConstU16: u16,
    ConstU32: u32,
    ConstU64: u64,
    ConstU128: u128,
    ConstUsize: usize,
    ConstChar: char,
}
