//! From<T> impls for machine integers
//!
//! Trait conversions cannot name a radix, so they land in decimal;
//! use [`BigRadix::from_integer`] to pick the base.

use crate::{BigRadix, Radix};

macro_rules! impl_from_int {
    ($($t:ty)*) => {$(
        impl From<$t> for BigRadix {
            #[inline]
            fn from(n: $t) -> BigRadix {
                BigRadix::from_integer(n as i64, Radix::DECIMAL)
            }
        }
    )*};
}

impl_from_int!(u8 i8 u16 i16 u32 i32 i64);

impl From<u64> for BigRadix {
    #[inline]
    fn from(n: u64) -> BigRadix {
        BigRadix::from_unsigned(n, Radix::DECIMAL)
    }
}
