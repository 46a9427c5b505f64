//!
//! Addition and subtraction
//!
//! Signs are handled by case split: same-sign operands add component
//! wise and keep the shared sign; opposite-sign operands subtract the
//! smaller magnitude from the larger and keep the larger's sign.  The
//! raw digit sums may leave `[0, base)` in either direction; carry
//! resolution at construction brings them back.

use crate::context::Context;
use crate::{BigRadix, BigRadixError};

use super::cmp_magnitude;

use std::cmp::Ordering;


pub(crate) fn add_bigradixes(lhs: &BigRadix, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
    // a zero operand is base-neutral
    if lhs.is_zero() {
        return Ok(rhs.clone());
    }
    if rhs.is_zero() {
        return Ok(lhs.clone());
    }
    if lhs.base() != rhs.base() {
        return Err(BigRadixError::BaseMismatch(
            lhs.base().value(),
            rhs.base().value(),
        ));
    }

    let base = lhs.base();
    // a sum cannot have more fractional places than its widest operand
    let ctx = Context::new(lhs.mantissa.len().max(rhs.mantissa.len()));

    let build = |a: &BigRadix, b: &BigRadix, subtract: bool, negative: bool| {
        let (integer, mantissa) = if subtract {
            (a.integer.sub(&b.integer), a.mantissa.sub(&b.mantissa))
        } else {
            (a.integer.add(&b.integer), a.mantissa.add(&b.mantissa))
        };
        BigRadix::new_with_context(integer, mantissa, base, negative, &ctx)
    };

    let result = match (lhs.is_negative(), rhs.is_negative()) {
        (true, true) => build(lhs, rhs, false, true),
        (false, false) => build(lhs, rhs, false, false),
        (true, false) => {
            if cmp_magnitude(lhs, rhs) == Ordering::Greater {
                build(lhs, rhs, true, true)
            } else {
                build(rhs, lhs, true, false)
            }
        }
        (false, true) => {
            if cmp_magnitude(rhs, lhs) == Ordering::Greater {
                build(rhs, lhs, true, true)
            } else {
                build(lhs, rhs, true, false)
            }
        }
    };
    Ok(result)
}

pub(crate) fn subtract_bigradixes(lhs: &BigRadix, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
    add_bigradixes(lhs, &rhs.negated())
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::Radix;

    fn radix(base: u8) -> Radix {
        Radix::new(base).unwrap()
    }

    fn num(s: &str, base: u8) -> BigRadix {
        BigRadix::parse(s, radix(base)).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal, $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a = num($a, $base);
                let b = num($b, $base);
                let sum = add_bigradixes(&a, &b).unwrap();
                assert_eq!(sum.to_string(), $expected);

                let commutes = add_bigradixes(&b, &a).unwrap();
                assert_eq!(commutes.to_string(), $expected);
            }
        };
    }

    impl_case!(case_1_plus_1: "1" + "1", 10 => "2");
    impl_case!(case_carry_chain: "999" + "1", 10 => "1000");
    impl_case!(case_fractional: "1.5" + "2.75", 10 => "4.25");
    impl_case!(case_opposite_signs: "10" + "-4", 10 => "6");
    impl_case!(case_negative_result: "4" + "-10", 10 => "-6");
    impl_case!(case_both_negative: "-2.5" + "-3", 10 => "-5.5");
    impl_case!(case_cancel_to_zero: "7.25" + "-7.25", 10 => "0");
    impl_case!(case_base7_digits: "11" + "10", 7 => "21");
    impl_case!(case_binary: "101.1" + "1.1", 2 => "111");
    impl_case!(case_hex_carry: "FF" + "1", 16 => "100");

    #[test]
    fn base7_digit_example() {
        // digits least significant first: [1,1] + [1,0] == [2,1]
        let a = BigRadix::new(
            crate::DigitSeq::from(vec![1, 1]),
            crate::DigitSeq::new(),
            radix(7),
            false,
        );
        let b = BigRadix::new(
            crate::DigitSeq::from(vec![1, 0]),
            crate::DigitSeq::new(),
            radix(7),
            false,
        );
        let sum = add_bigradixes(&a, &b).unwrap();
        assert_eq!(sum.integer_digits().as_slice(), &[2, 1]);
    }

    #[test]
    fn signed_unit_cancellation_base12() {
        let minus_one = BigRadix::from_integer(-1, radix(12));
        let one = BigRadix::from_integer(1, radix(12));
        let sum = add_bigradixes(&minus_one, &one).unwrap();
        assert_eq!(sum, BigRadix::zero(radix(12)));
        assert!(!sum.is_negative());
    }

    #[test]
    fn add_then_subtract_is_identity() {
        let cases = [("12.75", "3.125"), ("-4.5", "9"), ("0.001", "999")];
        for (a, b) in cases {
            let a = num(a, 10);
            let b = num(b, 10);
            let sum = add_bigradixes(&a, &b).unwrap();
            let back = subtract_bigradixes(&sum, &b).unwrap();
            assert_eq!(back, a);
        }
    }

    #[test]
    fn zero_is_base_neutral() {
        let zero = BigRadix::zero(radix(10));
        let x = num("A.B", 12);
        assert_eq!(add_bigradixes(&zero, &x).unwrap(), x);
        assert_eq!(add_bigradixes(&x, &zero).unwrap(), x);
    }

    #[test]
    fn mismatched_bases_error() {
        let a = num("1", 10);
        let b = num("1", 12);
        assert_eq!(
            add_bigradixes(&a, &b),
            Err(BigRadixError::BaseMismatch(10, 12))
        );
    }
}
