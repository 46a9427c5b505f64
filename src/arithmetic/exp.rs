//! The exponential function
//!
//! Taylor series `e^x = sum(x^i / i!)` with a running factorial and a
//! running power, each re-rounded every iteration so the mantissas stay
//! bounded.

use log::{debug, trace};

use crate::{BigRadix, BigRadixError, Convergence};

use super::division::impl_division;
use super::multiplication::multiply_bigradixes;
use super::ConvergenceWatch;


pub(crate) fn impl_exp(
    power: &BigRadix,
    place: usize,
    limit: Convergence,
) -> Result<BigRadix, BigRadixError> {
    let base = power.base();
    let one = BigRadix::one(base);

    let mut out = one.clone();
    let mut factorial = one;
    let mut running_power = power.clone();
    let mut watch = ConvergenceWatch::new();

    for n in 1..=limit.max_iterations() {
        factorial = multiply_bigradixes(
            &factorial,
            &BigRadix::from_integer(n as i64, base),
            place + 2,
        )?;

        let term = impl_division(&running_power, &factorial, place + 2)?;
        out = out.checked_add(&term)?;

        running_power = multiply_bigradixes(&running_power, power, place + 2)?;
        out.round(place + 2);

        trace!("exp iteration {}: {}", n, out);

        if watch.check(&out) {
            debug!("exp settled at {} places after {} iterations", place, n);
            out.round(place);
            return Ok(out);
        }
    }

    if limit.is_exact() {
        Err(BigRadixError::ConvergenceFailure)
    } else {
        out.round(place);
        Ok(out)
    }
}
