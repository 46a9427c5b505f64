//! arithmetic routines

use crate::BigRadix;

use std::cmp::Ordering;

pub(crate) mod addition;
pub(crate) mod carry;
pub(crate) mod division;
pub(crate) mod exp;
pub(crate) mod inverse;
pub(crate) mod ln;
pub(crate) mod multiplication;
pub(crate) mod pi;
pub(crate) mod root;

/// Compare two resolved numbers by magnitude, ignoring sign.
///
/// Canonical form makes this lexicographic: integer length first, then
/// integer digits from the most significant end, then mantissa digits.
pub(crate) fn cmp_magnitude(lhs: &BigRadix, rhs: &BigRadix) -> Ordering {
    debug_assert_eq!(lhs.base(), rhs.base());

    let lhs_len = lhs.integer.len();
    let rhs_len = rhs.integer.len();
    if lhs_len != rhs_len {
        return lhs_len.cmp(&rhs_len);
    }

    for i in (0..lhs_len).rev() {
        match lhs.integer.get(i).cmp(&rhs.integer.get(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    let places = lhs.mantissa.len().max(rhs.mantissa.len());
    for i in 0..places {
        match lhs.mantissa.get(i).cmp(&rhs.mantissa.get(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Fixed-point detector shared by the iterative methods.
///
/// Remembers the previous two iterates; a new iterate equal to either
/// one counts as converged (equality with the next-to-last iterate
/// catches 2-cycles introduced by rounding).
pub(crate) struct ConvergenceWatch {
    prev: Option<BigRadix>,
    prev_prev: Option<BigRadix>,
}

impl ConvergenceWatch {
    pub(crate) fn new() -> ConvergenceWatch {
        ConvergenceWatch {
            prev: None,
            prev_prev: None,
        }
    }

    /// Record `next` and report whether it matches one of the two
    /// iterates before it
    pub(crate) fn check(&mut self, next: &BigRadix) -> bool {
        let settled = self.prev.as_ref() == Some(next) || self.prev_prev.as_ref() == Some(next);
        self.prev_prev = self.prev.take();
        self.prev = Some(next.clone());
        settled
    }
}
