//! Pi
//!
//! The Bailey-Borwein-Plouffe series in its base-independent rational
//! form: `sum(16^-k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6)))`.
//! Each iteration contributes roughly one more hexadecimal digit, so
//! the budget scales with the requested place count in any radix.

use log::{debug, trace};

use crate::{BigRadix, BigRadixError, Convergence, Radix};

use super::division::impl_division;
use super::multiplication::multiply_bigradixes;
use super::ConvergenceWatch;


pub(crate) fn impl_pi(
    base: Radix,
    place: usize,
    limit: Convergence,
) -> Result<BigRadix, BigRadixError> {
    let integer = |n: i64| BigRadix::from_integer(n, base);

    let one = integer(1);
    let sixteen = integer(16);

    let mut pi = BigRadix::zero(base);
    let mut power_of_sixteen = one.clone();
    let mut watch = ConvergenceWatch::new();

    for k in 0..limit.max_iterations() as i64 {
        let scale = impl_division(&one, &power_of_sixteen, place + 2)?;

        let k8 = 8 * k;
        let spigot = impl_division(&integer(4), &integer(k8 + 1), place + 2)?
            .checked_sub(&impl_division(&integer(2), &integer(k8 + 4), place + 2)?)?
            .checked_sub(&impl_division(&one, &integer(k8 + 5), place + 2)?)?
            .checked_sub(&impl_division(&one, &integer(k8 + 6), place + 2)?)?;

        pi = pi.checked_add(&multiply_bigradixes(&scale, &spigot, place + 2)?)?;
        pi.round(place);

        trace!("pi iteration {}: {}", k + 1, pi);

        if watch.check(&pi) {
            debug!("pi settled at {} places after {} iterations", place, k + 1);
            return Ok(pi);
        }

        power_of_sixteen = multiply_bigradixes(&power_of_sixteen, &sixteen, place + 2)?;
    }

    if limit.is_exact() {
        Err(BigRadixError::ConvergenceFailure)
    } else {
        Ok(pi)
    }
}
