//! n-th roots by Newton iteration
//!
//! The update rule is `out <- ((n-1)*out + x*out^(1-n)) / n`, seeded at
//! one.  Every iterate is re-rounded to the requested place before the
//! fixed-point check; without that re-rounding the mantissa grows
//! without bound and the iteration count, not convergence, becomes the
//! stopping condition.

use log::{debug, trace};

use crate::{BigRadix, BigRadixError, Convergence};

use super::division::impl_division;
use super::inverse::impl_inverse;
use super::multiplication::{impl_powi, multiply_bigradixes, multiply_scalar};
use super::ConvergenceWatch;


pub(crate) fn impl_nth_root(
    x: &BigRadix,
    degree: u32,
    place: usize,
    limit: Convergence,
) -> Result<BigRadix, BigRadixError> {
    if degree == 0 {
        return Err(BigRadixError::Other("zeroth root is undefined".into()));
    }
    if x.is_zero() {
        return Ok(BigRadix::zero(x.base()));
    }
    if x.is_negative() {
        return Err(BigRadixError::Other(
            "root of a negative number is undefined".into(),
        ));
    }

    let degree_factor = BigRadix::from_integer(degree as i64, x.base());

    // the correction multiplies the inverse by x, scaling its truncation
    // error up by x's integer width; the inverse has to be that much deeper
    let inverse_place = place + x.integer_digits().len() + 2;

    let mut out = BigRadix::one(x.base());
    let mut watch = ConvergenceWatch::new();

    for k in 1..=limit.max_iterations() {
        let weighted = multiply_scalar(&out, degree as i64 - 1);
        let inverse_power = impl_inverse(&impl_powi(&out, degree - 1, place + 2), inverse_place)?;
        let correction = multiply_bigradixes(x, &inverse_power, place + 2)?;

        let sum = weighted.checked_add(&correction)?;
        out = impl_division(&sum, &degree_factor, place + 2)?;
        out.round(place);

        trace!("root iteration {}: {}", k, out);

        if watch.check(&out) {
            debug!("root of {} settled at {} places after {} iterations", x, place, k);
            return Ok(out);
        }
    }

    if limit.is_exact() {
        Err(BigRadixError::ConvergenceFailure)
    } else {
        Ok(out)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::Radix;

    fn dec(s: &str) -> BigRadix {
        BigRadix::parse(s, Radix::DECIMAL).unwrap()
    }

    #[test]
    fn sqrt_of_perfect_square() {
        let four = dec("4");
        let root = impl_nth_root(&four, 2, 8, Convergence::exact(60)).unwrap();
        assert_eq!(root.to_string(), "2");

        let x = dec("152399025");
        let root = impl_nth_root(&x, 2, 6, Convergence::exact(80)).unwrap();
        assert_eq!(root.rounded(3).to_string(), "12345");
    }

    #[test]
    fn sqrt_of_two() {
        let root = dec("2").sqrt(10, Convergence::exact(60)).unwrap();
        // successive iterates may legally settle one unit apart in the
        // last place; compare a couple of digits in from the edge
        assert_eq!(root.rounded(8).to_string(), "1.41421356");
    }

    #[test]
    fn cube_root() {
        let x = dec("27");
        let root = impl_nth_root(&x, 3, 8, Convergence::exact(80)).unwrap();
        assert_eq!(root.rounded(5).to_string(), "3");
    }

    #[test]
    fn fifth_root() {
        let x = dec("32");
        let root = impl_nth_root(&x, 5, 8, Convergence::exact(120)).unwrap();
        assert_eq!(root.rounded(4).to_string(), "2");
    }

    #[test]
    fn first_root_is_identity() {
        let x = dec("5.25");
        let root = impl_nth_root(&x, 1, 8, Convergence::exact(20)).unwrap();
        assert_eq!(root, x);
    }

    #[test]
    fn root_of_zero_is_zero() {
        let zero = BigRadix::zero(Radix::DECIMAL);
        assert!(impl_nth_root(&zero, 2, 8, Convergence::exact(20)).unwrap().is_zero());
    }

    #[test]
    fn sqrt_in_base_seven() {
        // 4 is a perfect square everywhere
        let four = BigRadix::from_integer(4, Radix::new(7).unwrap());
        let root = impl_nth_root(&four, 2, 6, Convergence::exact(60)).unwrap();
        assert_eq!(root.to_string(), "2");
    }

    #[test]
    fn zeroth_root_errors() {
        assert!(matches!(
            impl_nth_root(&dec("2"), 0, 8, Convergence::default()),
            Err(BigRadixError::Other(_))
        ));
    }

    #[test]
    fn negative_radicand_errors() {
        assert!(matches!(
            impl_nth_root(&dec("-4"), 2, 8, Convergence::default()),
            Err(BigRadixError::Other(_))
        ));
    }

    #[test]
    fn exhausted_exact_ceiling_is_reported() {
        // two iterations cannot reach a fixed point from the seed
        let x = dec("2");
        assert_eq!(
            impl_nth_root(&x, 2, 12, Convergence::exact(2)),
            Err(BigRadixError::ConvergenceFailure)
        );
    }

    #[test]
    fn fixed_budget_returns_current_iterate() {
        let x = dec("2");
        let early = impl_nth_root(&x, 2, 12, Convergence::iterations(2)).unwrap();
        // not converged, but still a finite well-formed number
        assert!(!early.is_zero());
        assert!(early.mantissa_digits().len() <= 12);
    }
}
