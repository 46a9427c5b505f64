//! Division, floor division and modulo
//!
//! True division is never digit-by-digit: it is always
//! inverse-then-multiply.  Floor division doubles the divisor into a
//! table of radix powers bounded above the dividend, then greedily
//! subtracts from the largest power down, which reads out the integer
//! quotient digits directly.

use crate::digitseq::DigitSeq;
use crate::{BigRadix, BigRadixError};

use super::addition::subtract_bigradixes;
use super::cmp_magnitude;
use super::multiplication::{multiply_bigradixes, multiply_scalar};

use std::cmp::Ordering;


/// `lhs / rhs`, truncated to `place` fractional digits
pub(crate) fn impl_division(
    lhs: &BigRadix,
    rhs: &BigRadix,
    place: usize,
) -> Result<BigRadix, BigRadixError> {
    if rhs.is_zero() {
        return Err(BigRadixError::DivisionByZero);
    }
    if lhs.is_zero() {
        return Ok(BigRadix::zero(rhs.base()));
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

    // multiplying by the dividend scales the inverse's truncation error
    // up by the dividend's integer width
    let inverse = super::inverse::impl_inverse(rhs, place + lhs.integer.len() + 2)?;
    let mut out = multiply_bigradixes(lhs, &inverse, place + 2)?;
    out.round(place);
    Ok(out)
}

/// Integer quotient of `lhs / rhs`; the sign is the XOR of the operand
/// signs, so quotients round toward zero
pub(crate) fn impl_floor_div(lhs: &BigRadix, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
    if rhs.is_zero() {
        return Err(BigRadixError::DivisionByZero);
    }
    if lhs.is_zero() {
        return Ok(BigRadix::zero(rhs.base()));
    }
    if lhs.base() != rhs.base() {
        return Err(BigRadixError::BaseMismatch(
            lhs.base().value(),
            rhs.base().value(),
        ));
    }

    let base = lhs.base();
    let divisor = rhs.abs();
    let mut remainder = lhs.abs();

    // table of divisor * base^k reaching just past the dividend
    let mut powers = vec![divisor.clone()];
    let mut rung = 0;
    while cmp_magnitude(&powers[rung], &remainder) == Ordering::Less {
        powers.push(multiply_scalar(&powers[rung], base.as_digit()));
        rung += 1;
    }

    // one quotient digit per table rung covers divisors below one as
    // well as integer divisors
    let mut quotient = vec![0i64; powers.len()];
    while cmp_magnitude(&remainder, &divisor) != Ordering::Less {
        if cmp_magnitude(&remainder, &powers[rung]) == Ordering::Less {
            rung -= 1;
        } else {
            remainder = subtract_bigradixes(&remainder, &powers[rung])?;
            quotient[rung] += 1;
        }
    }

    Ok(BigRadix::new(
        DigitSeq::from(quotient),
        DigitSeq::new(),
        base,
        lhs.is_negative() ^ rhs.is_negative(),
    ))
}

/// `lhs - (lhs floor_div rhs) * rhs`
pub(crate) fn impl_modulo(lhs: &BigRadix, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
    let quotient = impl_floor_div(lhs, rhs)?;
    let product = multiply_bigradixes(
        &quotient,
        rhs,
        lhs.mantissa.len() + rhs.mantissa.len(),
    )?;
    subtract_bigradixes(lhs, &product)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{Radix, DEFAULT_PRECISION};

    fn num(s: &str, base: u8) -> BigRadix {
        BigRadix::parse(s, Radix::new(base).unwrap()).unwrap()
    }

    mod divide {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal / $b:literal, $base:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let a = num($a, $base);
                    let b = num($b, $base);
                    let quotient = impl_division(&a, &b, DEFAULT_PRECISION).unwrap();
                    assert_eq!(quotient.to_string(), $expected);
                }
            };
        }

        impl_case!(case_even: "10" / "2", 10 => "5");
        impl_case!(case_fractional_result: "1" / "4", 10 => "0.25");
        impl_case!(case_by_one: "42.7" / "1", 10 => "42.7");
        impl_case!(case_by_minus_one: "42.7" / "-1", 10 => "-42.7");
        impl_case!(case_signs: "-9" / "3", 10 => "-3");
        impl_case!(case_binary: "110" / "10", 2 => "11");

        #[test]
        fn division_by_zero_errors() {
            let a = num("5", 10);
            let zero = BigRadix::zero(Radix::DECIMAL);
            assert_eq!(
                impl_division(&a, &zero, DEFAULT_PRECISION),
                Err(BigRadixError::DivisionByZero)
            );
        }

        #[test]
        fn repeating_quotient_is_truncated() {
            let a = num("1", 10);
            let b = num("3", 10);
            let quotient = impl_division(&a, &b, 6).unwrap();
            assert_eq!(quotient.to_string(), "0.333333");
        }

        #[test]
        fn multiply_then_divide_restores() {
            for (a, b) in [("7", "3"), ("12.5", "0.4"), ("-6.25", "2.5")] {
                let a = num(a, 10);
                let b = num(b, 10);
                let product = multiply_bigradixes(&a, &b, DEFAULT_PRECISION).unwrap();
                let back = impl_division(&product, &b, DEFAULT_PRECISION)
                    .unwrap()
                    .rounded(DEFAULT_PRECISION - 4);
                assert_eq!(back, a.rounded(DEFAULT_PRECISION - 4));
            }
        }
    }

    mod floor_div {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal / $b:literal, $base:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let a = num($a, $base);
                    let b = num($b, $base);
                    let quotient = impl_floor_div(&a, &b).unwrap();
                    assert_eq!(quotient.to_string(), $expected);
                }
            };
        }

        impl_case!(case_exact: "20" / "5", 10 => "4");
        impl_case!(case_remainder_dropped: "17" / "5", 10 => "3");
        impl_case!(case_small_dividend: "3" / "5", 10 => "0");
        impl_case!(case_truncates_toward_zero: "-17" / "5", 10 => "-3");
        impl_case!(case_both_negative: "-17" / "-5", 10 => "3");
        // 49 / 2 = 24, which is 33 in base 7
        impl_case!(case_base7: "100" / "2", 7 => "33");
        impl_case!(case_fractional_operands: "7.5" / "2.5", 10 => "3");
        impl_case!(case_big_gap: "1000000" / "3", 10 => "333333");

        #[test]
        fn divisor_of_zero_errors() {
            let a = num("5", 10);
            let zero = BigRadix::zero(Radix::DECIMAL);
            assert_eq!(impl_floor_div(&a, &zero), Err(BigRadixError::DivisionByZero));
        }
    }

    mod modulo {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal % $b:literal, $base:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let a = num($a, $base);
                    let b = num($b, $base);
                    let remainder = impl_modulo(&a, &b).unwrap();
                    assert_eq!(remainder.to_string(), $expected);
                }
            };
        }

        impl_case!(case_basic: "17" % "5", 10 => "2");
        impl_case!(case_exact: "20" % "5", 10 => "0");
        impl_case!(case_negative_dividend: "-17" % "5", 10 => "-2");
        // 49 mod 10 = 9, which is 12 in base 7
        impl_case!(case_base7: "100" % "13", 7 => "12");
        impl_case!(case_fractional: "5.5" % "2", 10 => "1.5");

        #[test]
        fn quotient_remainder_identity() {
            for (a, b) in [("17", "5"), ("-17", "5"), ("100", "7"), ("5.5", "2"), ("9", "12")] {
                let a = num(a, 10);
                let b = num(b, 10);
                let quotient = impl_floor_div(&a, &b).unwrap();
                let remainder = impl_modulo(&a, &b).unwrap();
                let rebuilt = crate::arithmetic::addition::add_bigradixes(
                    &multiply_bigradixes(&quotient, &b, DEFAULT_PRECISION).unwrap(),
                    &remainder,
                )
                .unwrap();
                assert_eq!(rebuilt, a, "{} = {} * {} + {}", a, quotient, b, remainder);
            }
        }
    }
}
