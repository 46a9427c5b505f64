//! Digit-sequence storage and ring arithmetic
//!
//! A [`DigitSeq`] is an ordered list of signed integer coefficients with
//! implicit zero padding past the stored length.  It forms a ring under
//! element-wise addition and convolution, and is the raw storage for both
//! halves of a [`BigRadix`](crate::BigRadix): the integer part (least
//! significant coefficient first) and the mantissa part (most significant
//! first).
//!
//! Coefficients are *not* bound to any radix here; carry resolution is the
//! number layer's job.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Sequence length at which convolution switches from the schoolbook
/// method to Karatsuba splitting
const KARATSUBA_THRESHOLD: usize = 50;

/// Half-sequence length below which Karatsuba recursion falls back to
/// the schoolbook method
const KARATSUBA_CUTOFF: usize = 25;

/// Ordered coefficients with implicit infinite zero padding
#[derive(Clone, Debug, Default)]
pub struct DigitSeq {
    digits: Vec<i64>,
}

impl DigitSeq {
    /// An empty sequence (all coefficients implicitly zero)
    pub fn new() -> DigitSeq {
        DigitSeq { digits: Vec::new() }
    }

    /// A sequence holding a single coefficient
    pub fn single(value: i64) -> DigitSeq {
        DigitSeq { digits: vec![value] }
    }

    /// Number of stored coefficients
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Coefficient at `index`, zero past the stored length
    pub fn get(&self, index: usize) -> i64 {
        self.digits.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, index: usize, value: i64) {
        self.digits[index] = value;
    }

    pub(crate) fn push(&mut self, value: i64) {
        self.digits.push(value);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.digits.truncate(len);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.digits.iter()
    }

    /// Both sequences laid end to end
    pub fn concat(&self, other: &DigitSeq) -> DigitSeq {
        let mut digits = self.digits.clone();
        digits.extend_from_slice(&other.digits);
        DigitSeq { digits }
    }

    /// The sequence with its coefficient order reversed
    pub fn reversed(&self) -> DigitSeq {
        let mut digits = self.digits.clone();
        digits.reverse();
        DigitSeq { digits }
    }

    /// Drop trailing zero coefficients, down to length 1, or to the empty
    /// sequence when `to_zero` is set
    pub fn trimmed(&self, to_zero: bool) -> DigitSeq {
        let mut out = self.clone();
        out.trim_in_place(to_zero);
        out
    }

    pub(crate) fn trim_in_place(&mut self, to_zero: bool) {
        let min_len = if to_zero { 0 } else { 1 };
        while self.digits.len() > min_len && *self.digits.last().unwrap() == 0 {
            self.digits.pop();
        }
    }

    /// The additive inverse: every coefficient negated
    pub fn negated(&self) -> DigitSeq {
        DigitSeq {
            digits: self.digits.iter().map(|d| -d).collect(),
        }
    }

    /// Element-wise sum, zero-padded to the longer operand
    pub fn add(&self, other: &DigitSeq) -> DigitSeq {
        DigitSeq {
            digits: add_slices(&self.digits, &other.digits),
        }
    }

    /// Element-wise difference
    pub fn sub(&self, other: &DigitSeq) -> DigitSeq {
        self.add(&other.negated())
    }

    /// Convolution product, dispatching to Karatsuba splitting above
    /// [`KARATSUBA_THRESHOLD`].  Both paths produce identical coefficients;
    /// the threshold is a performance knob, not semantics.
    pub fn mul(&self, other: &DigitSeq) -> DigitSeq {
        DigitSeq {
            digits: mul_dispatch(&self.digits, &other.digits),
        }
    }

    pub(crate) fn school_mul(&self, other: &DigitSeq) -> DigitSeq {
        DigitSeq {
            digits: school(&self.digits, &other.digits),
        }
    }

    pub(crate) fn as_slice(&self) -> &[i64] {
        &self.digits
    }
}

impl From<Vec<i64>> for DigitSeq {
    fn from(digits: Vec<i64>) -> DigitSeq {
        DigitSeq { digits }
    }
}

impl FromIterator<i64> for DigitSeq {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> DigitSeq {
        DigitSeq { digits: iter.into_iter().collect() }
    }
}

/// Sequences compare with their implicit zero padding, so trailing
/// zeros do not break equality
impl PartialEq for DigitSeq {
    fn eq(&self, other: &DigitSeq) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| self.get(i) == other.get(i))
    }
}

impl Eq for DigitSeq {}

impl Hash for DigitSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // trailing zeros are not significant
        let trimmed = self.trimmed(true);
        trimmed.digits.hash(state);
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let trimmed = self.trimmed(true);
        let mut digits = trimmed.iter();
        if let Some(first) = digits.next() {
            write!(f, "{}", first)?;
            for digit in digits {
                write!(f, ", {}", digit)?;
            }
        }
        Ok(())
    }
}

impl Add for &DigitSeq {
    type Output = DigitSeq;

    fn add(self, rhs: &DigitSeq) -> DigitSeq {
        DigitSeq::add(self, rhs)
    }
}

impl Sub for &DigitSeq {
    type Output = DigitSeq;

    fn sub(self, rhs: &DigitSeq) -> DigitSeq {
        DigitSeq::sub(self, rhs)
    }
}

impl Mul for &DigitSeq {
    type Output = DigitSeq;

    fn mul(self, rhs: &DigitSeq) -> DigitSeq {
        DigitSeq::mul(self, rhs)
    }
}

impl Neg for &DigitSeq {
    type Output = DigitSeq;

    fn neg(self) -> DigitSeq {
        self.negated()
    }
}


fn add_slices(a: &[i64], b: &[i64]) -> Vec<i64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0))
        .collect()
}

fn sub_slices(a: &[i64], b: &[i64]) -> Vec<i64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) - b.get(i).copied().unwrap_or(0))
        .collect()
}

/// Schoolbook convolution: `out[k] = sum(a[i] * b[k - i])`
fn school(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

fn mul_dispatch(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.len() < KARATSUBA_THRESHOLD && b.len() < KARATSUBA_THRESHOLD {
        school(a, b)
    } else {
        karatsuba(a, b)
    }
}

/// Split-and-recombine multiplication: three half-size products in place
/// of four, recombined with shifted adds.
fn karatsuba(a: &[i64], b: &[i64]) -> Vec<i64> {
    let min_len = a.len().min(b.len());
    if min_len == 0 {
        return Vec::new();
    }
    if min_len == 1 {
        // scale the longer operand by the lone coefficient
        let (long, k) = if a.len() == 1 { (b, a[0]) } else { (a, b[0]) };
        return long.iter().map(|&d| d * k).collect();
    }

    let m = min_len / 2;
    let (x0, x1) = a.split_at(m);
    let (y0, y1) = b.split_at(m);

    // resort to the schoolbook method for small halves
    let half_mul: fn(&[i64], &[i64]) -> Vec<i64> =
        if m < KARATSUBA_CUTOFF { school } else { mul_dispatch };

    let z2 = half_mul(x1, y1);
    let z0 = half_mul(x0, y0);
    let z1 = sub_slices(
        &sub_slices(&half_mul(&add_slices(x1, x0), &add_slices(y1, y0)), &z2),
        &z0,
    );

    let mut shifted_z2 = vec![0i64; 2 * m];
    shifted_z2.extend_from_slice(&z2);
    let mut shifted_z1 = vec![0i64; m];
    shifted_z1.extend_from_slice(&z1);

    add_slices(&add_slices(&shifted_z2, &shifted_z1), &z0)
}
