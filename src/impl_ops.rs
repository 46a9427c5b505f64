//! Implement math operations: Add, Sub, etc
//!
//! The operator traits panic on base mismatch and on division by zero,
//! matching what they would do for any other violated precondition; the
//! `checked_*` inherent methods are the non-panicking path.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::arithmetic;
use crate::{BigRadix, BigRadixError};


fn unwrap_op(result: Result<BigRadix, BigRadixError>) -> BigRadix {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

impl Add<&BigRadix> for &BigRadix {
    type Output = BigRadix;

    fn add(self, rhs: &BigRadix) -> BigRadix {
        unwrap_op(self.checked_add(rhs))
    }
}

impl Sub<&BigRadix> for &BigRadix {
    type Output = BigRadix;

    fn sub(self, rhs: &BigRadix) -> BigRadix {
        unwrap_op(self.checked_sub(rhs))
    }
}

impl Mul<&BigRadix> for &BigRadix {
    type Output = BigRadix;

    fn mul(self, rhs: &BigRadix) -> BigRadix {
        unwrap_op(self.checked_mul(rhs))
    }
}

impl Div<&BigRadix> for &BigRadix {
    type Output = BigRadix;

    fn div(self, rhs: &BigRadix) -> BigRadix {
        unwrap_op(self.checked_div(rhs))
    }
}

impl Rem<&BigRadix> for &BigRadix {
    type Output = BigRadix;

    fn rem(self, rhs: &BigRadix) -> BigRadix {
        unwrap_op(self.checked_rem(rhs))
    }
}

forward_binop_to_ref_ref!(impl Add for BigRadix, add);
forward_binop_to_ref_ref!(impl Sub for BigRadix, sub);
forward_binop_to_ref_ref!(impl Mul for BigRadix, mul);
forward_binop_to_ref_ref!(impl Div for BigRadix, div);
forward_binop_to_ref_ref!(impl Rem for BigRadix, rem);

forward_assign_to_binop!(impl AddAssign for BigRadix, add_assign, add);
forward_assign_to_binop!(impl SubAssign for BigRadix, sub_assign, sub);
forward_assign_to_binop!(impl MulAssign for BigRadix, mul_assign, mul);
forward_assign_to_binop!(impl DivAssign for BigRadix, div_assign, div);

impl Neg for &BigRadix {
    type Output = BigRadix;

    fn neg(self) -> BigRadix {
        self.negated()
    }
}

impl Neg for BigRadix {
    type Output = BigRadix;

    fn neg(self) -> BigRadix {
        self.negated()
    }
}


macro_rules! impl_ops_with_primitive {
    ($($t:ty)*) => {$(
        impl Add<$t> for &BigRadix {
            type Output = BigRadix;

            fn add(self, rhs: $t) -> BigRadix {
                let rhs = BigRadix::from_integer(rhs as i64, self.base());
                unwrap_op(self.checked_add(&rhs))
            }
        }

        impl Add<$t> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn add(self, rhs: $t) -> BigRadix {
                &self + rhs
            }
        }

        impl Add<BigRadix> for $t {
            type Output = BigRadix;

            #[inline]
            fn add(self, rhs: BigRadix) -> BigRadix {
                // swap operands
                &rhs + self
            }
        }

        impl Add<&BigRadix> for $t {
            type Output = BigRadix;

            #[inline]
            fn add(self, rhs: &BigRadix) -> BigRadix {
                rhs + self
            }
        }

        impl Sub<$t> for &BigRadix {
            type Output = BigRadix;

            fn sub(self, rhs: $t) -> BigRadix {
                let rhs = BigRadix::from_integer(rhs as i64, self.base());
                unwrap_op(self.checked_sub(&rhs))
            }
        }

        impl Sub<$t> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn sub(self, rhs: $t) -> BigRadix {
                &self - rhs
            }
        }

        impl Sub<BigRadix> for $t {
            type Output = BigRadix;

            fn sub(self, rhs: BigRadix) -> BigRadix {
                let lhs = BigRadix::from_integer(self as i64, rhs.base());
                unwrap_op(lhs.checked_sub(&rhs))
            }
        }

        impl Sub<&BigRadix> for $t {
            type Output = BigRadix;

            fn sub(self, rhs: &BigRadix) -> BigRadix {
                let lhs = BigRadix::from_integer(self as i64, rhs.base());
                unwrap_op(lhs.checked_sub(rhs))
            }
        }

        impl Mul<$t> for &BigRadix {
            type Output = BigRadix;

            fn mul(self, rhs: $t) -> BigRadix {
                arithmetic::multiplication::multiply_scalar(self, rhs as i64)
            }
        }

        impl Mul<$t> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn mul(self, rhs: $t) -> BigRadix {
                &self * rhs
            }
        }

        impl Mul<BigRadix> for $t {
            type Output = BigRadix;

            #[inline]
            fn mul(self, rhs: BigRadix) -> BigRadix {
                &rhs * self
            }
        }

        impl Mul<&BigRadix> for $t {
            type Output = BigRadix;

            #[inline]
            fn mul(self, rhs: &BigRadix) -> BigRadix {
                rhs * self
            }
        }

        impl Div<$t> for &BigRadix {
            type Output = BigRadix;

            fn div(self, rhs: $t) -> BigRadix {
                let rhs = BigRadix::from_integer(rhs as i64, self.base());
                unwrap_op(self.checked_div(&rhs))
            }
        }

        impl Div<$t> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn div(self, rhs: $t) -> BigRadix {
                &self / rhs
            }
        }

        impl Div<BigRadix> for $t {
            type Output = BigRadix;

            fn div(self, rhs: BigRadix) -> BigRadix {
                let lhs = BigRadix::from_integer(self as i64, rhs.base());
                unwrap_op(lhs.checked_div(&rhs))
            }
        }

        impl Div<&BigRadix> for $t {
            type Output = BigRadix;

            fn div(self, rhs: &BigRadix) -> BigRadix {
                let lhs = BigRadix::from_integer(self as i64, rhs.base());
                unwrap_op(lhs.checked_div(rhs))
            }
        }

        impl Rem<$t> for &BigRadix {
            type Output = BigRadix;

            fn rem(self, rhs: $t) -> BigRadix {
                let rhs = BigRadix::from_integer(rhs as i64, self.base());
                unwrap_op(self.checked_rem(&rhs))
            }
        }

        impl Rem<$t> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn rem(self, rhs: $t) -> BigRadix {
                &self % rhs
            }
        }
    )*};
}

impl_ops_with_primitive!(u8 i8 u16 i16 u32 i32 i64);
