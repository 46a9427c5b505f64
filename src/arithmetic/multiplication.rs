//! Multiplication
//!
//! The integer and mantissa halves are treated as one combined digit
//! stream and multiplied FOIL-style: four partial convolutions
//! (integer x integer, integer x mantissa, mantissa x integer,
//! mantissa x mantissa), recombined at the correct positional shift and
//! carry-resolved once.

use crate::context::Context;
use crate::digitseq::DigitSeq;
use crate::{BigRadix, BigRadixError};


/// Multiply, rounding the product to `place` fractional digits
pub(crate) fn multiply_bigradixes(
    lhs: &BigRadix,
    rhs: &BigRadix,
    place: usize,
) -> Result<BigRadix, BigRadixError> {
    if lhs.is_zero() {
        return Ok(BigRadix::zero(rhs.base()));
    }
    if rhs.is_zero() {
        return Ok(BigRadix::zero(lhs.base()));
    }
    if lhs.base() != rhs.base() {
        return Err(BigRadixError::BaseMismatch(
            lhs.base().value(),
            rhs.base().value(),
        ));
    }

    if rhs.is_one() {
        return Ok(lhs.clone());
    }
    if rhs.negated().is_one() {
        return Ok(lhs.negated());
    }

    let base = lhs.base();
    let negative = lhs.is_negative() ^ rhs.is_negative();
    let lhs_places = lhs.mantissa.len();
    let rhs_places = rhs.mantissa.len();

    let int_by_int = lhs.integer.mul(&rhs.integer);
    let int_by_man = lhs.integer.reversed().mul(&rhs.mantissa);
    let man_by_int = lhs.mantissa.mul(&rhs.integer.reversed());
    let man_by_man = lhs.mantissa.mul(&rhs.mantissa);

    // partial products of an integer half against a mantissa half come
    // out most significant first and straddle the radix point
    let (int_2, man_2) = split_at_point(&int_by_man, rhs_places);
    let (int_3, man_3) = split_at_point(&man_by_int, lhs_places);
    let man_4 = pad_mantissa(&man_by_man, lhs_places + rhs_places);

    let integer = int_by_int.add(&int_2).add(&int_3);
    let mantissa = man_2.add(&man_3).add(&man_4);

    Ok(BigRadix::new_with_context(
        integer,
        mantissa,
        base,
        negative,
        &Context::new(place),
    ))
}

/// Split a straddling digit stream into an integer half (returned least
/// significant first) and a mantissa half, `point` digits wide
fn split_at_point(stream: &DigitSeq, point: usize) -> (DigitSeq, DigitSeq) {
    let cut = stream.len().saturating_sub(point);
    let integer: DigitSeq = stream.iter().take(cut).rev().copied().collect();
    let mantissa: DigitSeq = stream.iter().skip(cut).copied().collect();
    (integer, mantissa)
}

/// Left-pad a mantissa stream with zeros up to `width` places
fn pad_mantissa(stream: &DigitSeq, width: usize) -> DigitSeq {
    let padding = width.saturating_sub(stream.len());
    std::iter::repeat(0)
        .take(padding)
        .chain(stream.iter().copied())
        .collect()
}

/// Multiply by a machine integer without building a second number
pub(crate) fn multiply_scalar(lhs: &BigRadix, scalar: i64) -> BigRadix {
    if scalar == 0 || lhs.is_zero() {
        return BigRadix::zero(lhs.base());
    }

    let magnitude = scalar.unsigned_abs();
    if magnitude > i32::MAX as u64 {
        // coefficient scaling could overflow; take the full path
        let rhs = BigRadix::from_integer(scalar, lhs.base());
        return multiply_bigradixes(lhs, &rhs, lhs.mantissa.len() + 1)
            .expect("scalar shares the base");
    }

    let factor = DigitSeq::single(magnitude as i64);
    BigRadix::new_with_context(
        lhs.integer.mul(&factor),
        lhs.mantissa.mul(&factor),
        lhs.base(),
        lhs.is_negative() ^ (scalar < 0),
        &Context::new(lhs.mantissa.len() + 1),
    )
}

/// Integer power by repeated multiplication, each step rounded to
/// `place` fractional digits
pub(crate) fn impl_powi(x: &BigRadix, exponent: u32, place: usize) -> BigRadix {
    if exponent == 0 {
        return BigRadix::one(x.base());
    }
    let mut out = x.clone();
    for _ in 1..exponent {
        out = multiply_bigradixes(&out, x, place).expect("power shares the base");
    }
    out
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{Radix, DEFAULT_PRECISION};

    fn num(s: &str, base: u8) -> BigRadix {
        BigRadix::parse(s, Radix::new(base).unwrap()).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal x $b:literal, $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a = num($a, $base);
                let b = num($b, $base);
                let product = multiply_bigradixes(&a, &b, DEFAULT_PRECISION).unwrap();
                assert_eq!(product.to_string(), $expected);

                let commutes = multiply_bigradixes(&b, &a, DEFAULT_PRECISION).unwrap();
                assert_eq!(commutes.to_string(), $expected);
            }
        };
    }

    impl_case!(case_integers: "12" x "12", 10 => "144");
    impl_case!(case_carry_rich: "99" x "99", 10 => "9801");
    impl_case!(case_fraction_by_integer: "1.5" x "4", 10 => "6");
    impl_case!(case_fraction_by_fraction: "1.5" x "2.5", 10 => "3.75");
    impl_case!(case_pure_fractions: "0.25" x "0.5", 10 => "0.125");
    impl_case!(case_signs_cancel: "-3" x "-4", 10 => "12");
    impl_case!(case_signs_differ: "-3.5" x "2", 10 => "-7");
    impl_case!(case_binary: "101.1" x "11", 2 => "10000.1");
    impl_case!(case_hex: "A.8" x "2", 16 => "15");
    impl_case!(case_by_one: "123.456" x "1", 10 => "123.456");
    impl_case!(case_by_zero: "123.456" x "0", 10 => "0");

    #[test]
    fn unit_shortcut_keeps_digits() {
        let x = num("98765.4321", 10);
        let negated = multiply_bigradixes(&x, &num("-1", 10), DEFAULT_PRECISION).unwrap();
        assert_eq!(negated.to_string(), "-98765.4321");
    }

    #[test]
    fn product_rounds_to_requested_place() {
        let a = num("0.111", 10);
        let b = num("0.111", 10);
        // exact product is 0.012321
        let rounded = multiply_bigradixes(&a, &b, 4).unwrap();
        assert_eq!(rounded.to_string(), "0.0123");
    }

    #[test]
    fn zero_product_is_base_neutral() {
        let zero = BigRadix::zero(Radix::DECIMAL);
        let x = num("7", 12);
        let product = multiply_bigradixes(&zero, &x, DEFAULT_PRECISION).unwrap();
        assert!(product.is_zero());
        assert_eq!(product.base(), Radix::DUODECIMAL);
    }

    #[test]
    fn mismatched_bases_error() {
        let a = num("2", 10);
        let b = num("2", 16);
        assert_eq!(
            multiply_bigradixes(&a, &b, DEFAULT_PRECISION),
            Err(BigRadixError::BaseMismatch(10, 16))
        );
    }

    mod scalar {
        use super::*;

        #[test]
        fn small_factors() {
            assert_eq!(multiply_scalar(&num("1.5", 10), 4).to_string(), "6");
            assert_eq!(multiply_scalar(&num("21", 7), 2).to_string(), "42");
            assert_eq!(multiply_scalar(&num("5", 10), -3).to_string(), "-15");
            assert!(multiply_scalar(&num("5", 10), 0).is_zero());
        }

        #[test]
        fn wide_factor_takes_full_path() {
            let x = num("2", 10);
            let product = multiply_scalar(&x, 10_000_000_000);
            assert_eq!(product.to_string(), "20000000000");
        }
    }

    mod powi {
        use super::*;

        #[test]
        fn small_powers() {
            let two = num("2", 10);
            assert_eq!(impl_powi(&two, 0, DEFAULT_PRECISION).to_string(), "1");
            assert_eq!(impl_powi(&two, 16, DEFAULT_PRECISION).to_string(), "65536");
        }

        #[test]
        fn keeps_requested_precision() {
            let tenth = num("0.1", 10);
            let out = impl_powi(&tenth, 6, 8);
            assert_eq!(out.to_string(), "0.000001");
        }
    }
}
