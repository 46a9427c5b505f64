//! Natural logarithm
//!
//! Series in `q = (x-1)/(x+1)`, accumulating `2 * sum(q^(2k+1)/(2k+1))`.
//! The series converges slowly (each term shrinks by `q^2`), which is
//! why callers usually pair it with a generous iteration ceiling.

use log::{debug, trace};

use crate::{BigRadix, BigRadixError, Convergence};

use super::division::impl_division;
use super::multiplication::{multiply_bigradixes, multiply_scalar};
use super::ConvergenceWatch;


pub(crate) fn impl_ln(
    x: &BigRadix,
    place: usize,
    limit: Convergence,
) -> Result<BigRadix, BigRadixError> {
    if x.is_zero() {
        return Err(BigRadixError::Other("logarithm of zero is undefined".into()));
    }
    if x.is_negative() {
        return Err(BigRadixError::Other(
            "logarithm of a negative number is undefined".into(),
        ));
    }

    let base = x.base();
    let one = BigRadix::one(base);

    let q = impl_division(&x.checked_sub(&one)?, &x.checked_add(&one)?, place + 2)?;
    let q_squared = multiply_bigradixes(&q, &q, place + 2)?;

    let mut out = q.clone();
    let mut term = q;
    let mut watch = ConvergenceWatch::new();

    let mut divisor: i64 = 3;
    let mut settled = false;
    for k in 1..=limit.max_iterations() {
        term = multiply_bigradixes(&term, &q_squared, place + 2)?;
        term.round(place);

        let contribution = impl_division(
            &term,
            &BigRadix::from_integer(divisor, base),
            place + 2,
        )?;
        out = out.checked_add(&contribution)?;
        out.round(place + 2);

        trace!("ln iteration {}: {}", k, out);

        if watch.check(&out) {
            debug!("ln settled at {} places after {} iterations", place, k);
            settled = true;
            break;
        }
        divisor += 2;
    }

    if !settled && limit.is_exact() {
        return Err(BigRadixError::ConvergenceFailure);
    }

    let mut out = multiply_scalar(&out, 2);
    out.round(place);
    Ok(out)
}

/// Logarithm in an arbitrary base, as `ln(x) / ln(base)`
pub(crate) fn impl_log(
    x: &BigRadix,
    log_base: &BigRadix,
    place: usize,
    limit: Convergence,
) -> Result<BigRadix, BigRadixError> {
    let numerator = impl_ln(x, place, limit)?;
    let denominator = impl_ln(log_base, place, limit)?;
    impl_division(&numerator, &denominator, place)
}
