//! inverse implementation
//!
//! The reciprocal is a simulated long division: the combined
//! integer+mantissa digit stream plays the divisor, a running dividend
//! starts at one and is extended with a trailing zero whenever it drops
//! below the divisor, and every successful subtraction records a
//! quotient digit.  Division, modulo and the logarithm all bottom out
//! here.

use crate::context::Context;
use crate::digitseq::DigitSeq;
use crate::{BigRadix, BigRadixError};

use super::carry;


/// Implementation of inverse: (1/n), to `place` fractional digits
pub(crate) fn impl_inverse(n: &BigRadix, place: usize) -> Result<BigRadix, BigRadixError> {
    if n.is_zero() {
        return Err(BigRadixError::DivisionByZero);
    }
    // +-1 are their own inverses
    if n.abs().is_one() {
        return Ok(n.clone());
    }

    // combined digit stream, least significant end first; a fractional
    // divisor keeps its trailing zeros, which weights the stream by
    // base^mantissa_len
    let mut divisor = n.integer.trimmed(false);
    if !n.mantissa.trimmed(true).is_empty() {
        divisor = divisor.reversed().concat(&n.mantissa).reversed();
    }

    let shift = n.mantissa.len();
    let steps = place + divisor.len();

    let mut quotient = vec![0i64; steps];
    let mut dividend = DigitSeq::single(1);

    let mut g = 0;
    while g < steps {
        // a dividend of exactly zero means the division terminated
        if dividend.trimmed(true).is_empty() {
            break;
        }

        if digit_stream_ge(&dividend, &divisor) {
            // subtract and record a quotient digit
            dividend = dividend.sub(&divisor);
            let mut fraction = DigitSeq::new();
            let flipped = carry::resolve(&mut dividend, &mut fraction, n.base());
            debug_assert!(!flipped, "dividend went negative during long division");
            debug_assert!(g > 0);
            quotient[g - 1] += 1;
        } else {
            // extend the dividend by one place
            dividend = DigitSeq::single(0).concat(&dividend);
            g += 1;
        }
    }

    // the first `shift` quotient digits sit left of the radix point
    let integer: DigitSeq = quotient[..shift].iter().rev().copied().collect();
    let mantissa = DigitSeq::from(quotient[shift..].to_vec());

    Ok(BigRadix::new_with_context(
        integer,
        mantissa,
        n.base(),
        n.is_negative(),
        &Context::new(place),
    ))
}

/// Magnitude comparison on raw digit streams: more stored digits wins,
/// equal lengths compare from the most significant end
fn digit_stream_ge(a: &DigitSeq, b: &DigitSeq) -> bool {
    if a.len() != b.len() {
        return a.len() > b.len();
    }
    for i in (0..a.len()).rev() {
        if a.get(i) != b.get(i) {
            return a.get(i) > b.get(i);
        }
    }
    true
}
