//! Implementation of comparison operations
//!
//! Numbers of different bases never compare equal, and ordering between
//! them is undefined (`partial_cmp` returns `None`); everything else is
//! the usual sign-then-magnitude ordering on canonical digits.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::arithmetic::cmp_magnitude;
use crate::BigRadix;


impl PartialEq for BigRadix {
    fn eq(&self, rhs: &BigRadix) -> bool {
        self.base == rhs.base
            && self.negative == rhs.negative
            && self.integer == rhs.integer
            && self.mantissa == rhs.mantissa
    }
}

impl Eq for BigRadix {}

impl PartialOrd for BigRadix {
    fn partial_cmp(&self, rhs: &BigRadix) -> Option<Ordering> {
        if self.base != rhs.base {
            return None;
        }
        Some(match (self.negative, rhs.negative) {
            // zero is never negative, so a negative operand is strictly smaller
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(self, rhs),
            (true, true) => cmp_magnitude(rhs, self),
        })
    }
}

impl Hash for BigRadix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
        self.base.hash(state);
    }
}
