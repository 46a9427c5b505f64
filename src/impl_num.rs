//! Code for num_traits
//!
//! These impls make `BigRadix` a drop-in scalar for generic numeric
//! code.  Trait constructors with no way to name a radix
//! (`Zero::zero`, `One::one`, `FromPrimitive`) produce decimal values;
//! mixing them into another base works because the arithmetic treats a
//! zero operand as base-neutral.

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use std::iter::Sum;

use crate::{BigRadix, BigRadixError, Radix};


impl Zero for BigRadix {
    #[inline]
    fn zero() -> BigRadix {
        BigRadix::zero(Radix::DECIMAL)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigRadix::is_zero(self)
    }
}

impl One for BigRadix {
    #[inline]
    fn one() -> BigRadix {
        BigRadix::one(Radix::DECIMAL)
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigRadix::is_one(self)
    }
}

impl Num for BigRadix {
    type FromStrRadixErr = BigRadixError;

    /// Parse a digit string under any supported radix
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigRadix, BigRadixError> {
        if radix > u8::MAX as u32 {
            return Err(BigRadixError::InvalidBase(radix));
        }
        let base = Radix::new(radix as u8)?;
        BigRadix::parse(s, base)
    }
}

impl Signed for BigRadix {
    fn abs(&self) -> BigRadix {
        BigRadix::abs(self)
    }

    /// `self - other` clamped at zero, as for the primitive integers
    fn abs_sub(&self, other: &BigRadix) -> BigRadix {
        if self <= other {
            BigRadix::zero(self.base())
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigRadix {
        if self.is_zero() {
            BigRadix::zero(self.base())
        } else if self.is_negative() {
            BigRadix::from_integer(-1, self.base())
        } else {
            BigRadix::one(self.base())
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        BigRadix::is_negative(self)
    }
}

impl ToPrimitive for BigRadix {
    fn to_i64(&self) -> Option<i64> {
        let b = self.base.as_digit();
        let mut value: i64 = 0;
        for &digit in self.integer.iter().rev() {
            value = value.checked_mul(b)?.checked_add(digit)?;
        }
        if self.negative {
            value = value.checked_neg()?;
        }
        Some(value)
    }

    fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        let b = self.base.value() as u64;
        let mut value: u64 = 0;
        for &digit in self.integer.iter().rev() {
            value = value.checked_mul(b)?.checked_add(digit as u64)?;
        }
        Some(value)
    }

    fn to_f64(&self) -> Option<f64> {
        let b = self.base.as_digit() as f64;
        let mut value = 0.0;
        for &digit in self.integer.iter().rev() {
            value = value * b + digit as f64;
        }
        let mut weight = 1.0 / b;
        for &digit in self.mantissa.iter() {
            value += digit as f64 * weight;
            weight /= b;
        }
        Some(if self.negative { -value } else { value })
    }
}

impl FromPrimitive for BigRadix {
    #[inline]
    fn from_i64(n: i64) -> Option<BigRadix> {
        Some(BigRadix::from_integer(n, Radix::DECIMAL))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigRadix> {
        Some(BigRadix::from_unsigned(n, Radix::DECIMAL))
    }
}

impl Sum for BigRadix {
    fn sum<I: Iterator<Item = BigRadix>>(iter: I) -> BigRadix {
        iter.fold(Zero::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigRadix> for BigRadix {
    fn sum<I: Iterator<Item = &'a BigRadix>>(iter: I) -> BigRadix {
        iter.fold(Zero::zero(), |acc, n| acc + n)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigRadix {
        BigRadix::parse(s, Radix::DECIMAL).unwrap()
    }

    #[test]
    fn zero_and_one() {
        assert!(BigRadix::zero(Radix::DECIMAL).is_zero());
        assert!(<BigRadix as One>::one().is_one());
        assert!(!dec("0.1").is_zero());
        assert!(!dec("1.1").is_one());
        assert!(!dec("-1").is_one());
    }

    #[test]
    fn from_str_radix_matches_parse() {
        let via_trait = <BigRadix as Num>::from_str_radix("FF", 16).unwrap();
        let direct = BigRadix::parse("FF", Radix::HEXADECIMAL).unwrap();
        assert_eq!(via_trait, direct);

        assert_eq!(
            <BigRadix as Num>::from_str_radix("1", 65),
            Err(BigRadixError::InvalidBase(65))
        );
    }

    #[test]
    fn signum_and_abs() {
        assert_eq!(dec("-4.5").signum().to_i64(), Some(-1));
        assert_eq!(dec("4.5").signum().to_i64(), Some(1));
        assert!(dec("0").signum().is_zero());
        assert_eq!(Signed::abs(&dec("-4.5")).to_string(), "4.5");
        assert_eq!(dec("3").abs_sub(&dec("5")).to_string(), "0");
        assert_eq!(dec("5").abs_sub(&dec("3")).to_string(), "2");
    }

    #[test]
    fn to_primitive_round_trips() {
        assert_eq!(dec("123").to_i64(), Some(123));
        assert_eq!(dec("-123").to_i64(), Some(-123));
        assert_eq!(dec("-1").to_u64(), None);
        assert_eq!(dec("123.9").to_i64(), Some(123));

        let n = BigRadix::parse("FF.8", Radix::HEXADECIMAL).unwrap();
        assert_eq!(n.to_i64(), Some(255));
        assert_eq!(n.to_f64(), Some(255.5));
    }

    #[test]
    fn from_primitive_is_decimal() {
        let n = BigRadix::from_i64(-42).unwrap();
        assert_eq!(n.base(), Radix::DECIMAL);
        assert_eq!(n.to_string(), "-42");
    }

    #[test]
    fn sum_folds_across_bases_from_zero() {
        let b7 = Radix::new(7).unwrap();
        let total: BigRadix = (1..=4).map(|n| BigRadix::from_integer(n, b7)).sum();
        // 10 in base 7
        assert_eq!(total.to_string(), "13");
        assert_eq!(total.base(), b7);
    }

    #[test]
    fn behaves_as_a_generic_scalar() {
        // the shape of the collaborating generic container code
        fn dot<T: Clone + Zero + std::ops::Add<Output = T> + std::ops::Mul<Output = T>>(
            a: &[T],
            b: &[T],
        ) -> T {
            a.iter()
                .zip(b)
                .fold(T::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
        }

        let b12 = Radix::DUODECIMAL;
        let a = [BigRadix::from_integer(2, b12), BigRadix::from_integer(3, b12)];
        let b = [BigRadix::from_integer(4, b12), BigRadix::from_integer(5, b12)];
        // 2*4 + 3*5 = 23 = 1B in base 12
        assert_eq!(dot(&a, &b).to_string(), "1B");
    }
}
