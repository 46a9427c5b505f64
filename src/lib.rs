//! Arbitrary-base numbers
//!
//! [`BigRadix`] stores a signed fixed-point number in any radix from 2 to
//! 64, to arbitrary precision; the represented value is exact up to a
//! caller-chosen number of fractional places, avoiding binary floating
//! point entirely.
//!
//! Internally a number is a pair of digit sequences — the integer part
//! (least significant digit first) and the mantissa part (most significant
//! first) — plus the radix and a sign flag.  Every operation that can push
//! a digit out of `[0, base)` runs the carry resolver before the value is
//! observable, so numbers are always canonical.
//!
//! Common numerical operations are overloaded, so a `BigRadix` can be
//! treated the same way we treat other numbers; the iterative methods
//! (roots, logarithms, the exponential function, pi) take an explicit
//! [`Convergence`] budget instead of looping blindly.
//!
//! # Example
//!
//! ```
//! use bigradix::{BigRadix, Radix};
//!
//! let x = BigRadix::parse("1A.6", Radix::HEXADECIMAL).unwrap();
//! let doubled = &x + &x;
//!
//! assert_eq!(doubled.to_string(), "34.C");
//! ```

use std::fmt;

use num_integer::Integer;

// const DEFAULT_PRECISION: usize = ${RUST_BIGRADIX_DEFAULT_PRECISION} or 18;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

pub(crate) mod arithmetic;

mod digitseq;
pub use digitseq::DigitSeq;

mod radix;
pub use radix::{Radix, MAX_BASE, MIN_BASE};

// Mathematical context
mod context;
pub use context::{Context, Convergence, DEFAULT_EXTENDED_DIGITS};

mod parsing;

pub mod encoding;
pub use encoding::{decode, encode};

// PartialEq, PartialOrd, Hash
mod impl_cmp;
// Display, Debug
mod impl_fmt;
// Add<T>, Sub<T>, etc...
mod impl_ops;
// From<T> impls
mod impl_convert;
// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


/// An arbitrary-base signed fixed-point number.
///
/// The radix is fixed at construction; binary operations between numbers
/// of different radices are a [`BigRadixError::BaseMismatch`] (or a panic,
/// through the operator traits), with the single exception that a zero
/// operand is accepted from any radix.
#[derive(Clone)]
pub struct BigRadix {
    integer: DigitSeq,
    mantissa: DigitSeq,
    base: Radix,
    negative: bool,
}

impl BigRadix {
    /// Build a number from raw digit sequences, resolving carries and
    /// rounding to the default precision.
    ///
    /// `integer` is read least significant digit first, `mantissa` most
    /// significant first.  The coefficients may lie anywhere in the
    /// machine range; resolution brings them into `[0, base)`.
    pub fn new(integer: DigitSeq, mantissa: DigitSeq, base: Radix, negative: bool) -> BigRadix {
        BigRadix::new_with_context(integer, mantissa, base, negative, &Context::default())
    }

    /// [`BigRadix::new`] with an explicit context
    pub fn new_with_context(
        integer: DigitSeq,
        mantissa: DigitSeq,
        base: Radix,
        negative: bool,
        ctx: &Context,
    ) -> BigRadix {
        let mut value = BigRadix {
            integer,
            mantissa,
            base,
            negative,
        };
        value.resolve();
        value.round(ctx.precision());
        value
    }

    /// Decompose a machine integer into base-`base` digits
    pub fn from_integer(n: i64, base: Radix) -> BigRadix {
        BigRadix::from_magnitude(n.unsigned_abs(), base, n < 0)
    }

    /// [`BigRadix::from_integer`] for values beyond `i64::MAX`
    pub fn from_unsigned(n: u64, base: Radix) -> BigRadix {
        BigRadix::from_magnitude(n, base, false)
    }

    fn from_magnitude(mut magnitude: u64, base: Radix, negative: bool) -> BigRadix {
        let b = base.value() as u64;
        let mut digits = Vec::new();
        while magnitude > 0 {
            let (quotient, remainder) = magnitude.div_rem(&b);
            digits.push(remainder as i64);
            magnitude = quotient;
        }
        BigRadix::new(DigitSeq::from(digits), DigitSeq::new(), base, negative)
    }

    /// The additive identity in the given base
    pub fn zero(base: Radix) -> BigRadix {
        BigRadix::from_integer(0, base)
    }

    /// The multiplicative identity in the given base
    pub fn one(base: Radix) -> BigRadix {
        BigRadix::from_integer(1, base)
    }

    /// Parse `[-]digits[.digits]` in the given base.
    ///
    /// Digit characters are `0-9`, `A-Z` for 10..=35, `a-z` for 36..=61,
    /// and the context's extended pair for 62 and 63.  For bases up to 36
    /// lowercase letters alias their uppercase values instead.
    ///
    /// ```
    /// use bigradix::{BigRadix, Radix};
    ///
    /// let half = BigRadix::parse("0.1", Radix::BINARY).unwrap();
    /// assert_eq!(half.to_string(), "0.1");
    /// assert_eq!(BigRadix::parse("ff", Radix::HEXADECIMAL).unwrap().to_string(), "FF");
    /// ```
    pub fn parse(s: &str, base: Radix) -> Result<BigRadix, BigRadixError> {
        parsing::parse_with_context(s, base, &Context::default())
    }

    /// [`BigRadix::parse`] with an explicit context
    pub fn parse_with_context(s: &str, base: Radix, ctx: &Context) -> Result<BigRadix, BigRadixError> {
        parsing::parse_with_context(s, base, ctx)
    }

    /// The radix this number is stored in
    pub fn base(&self) -> Radix {
        self.base
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_empty() && self.integer.iter().all(|&d| d == 0)
    }

    pub fn is_one(&self) -> bool {
        !self.negative && self.mantissa.is_empty() && self.integer.trimmed(false).as_slice() == &[1]
    }

    /// Integer-part digits, least significant first
    pub fn integer_digits(&self) -> &DigitSeq {
        &self.integer
    }

    /// Mantissa digits, most significant first
    pub fn mantissa_digits(&self) -> &DigitSeq {
        &self.mantissa
    }

    /// The magnitude of this number
    pub fn abs(&self) -> BigRadix {
        let mut out = self.clone();
        out.negative = false;
        out
    }

    /// The additive inverse; zero stays zero
    pub fn negated(&self) -> BigRadix {
        let mut out = self.clone();
        if !out.is_zero() {
            out.negative = !out.negative;
        }
        out
    }

    /// This number with the mantissa dropped
    pub fn integer_part(&self) -> BigRadix {
        let mut out = self.clone();
        out.mantissa = DigitSeq::new();
        if out.is_zero() {
            out.negative = false;
        }
        out
    }

    /// This number with the integer part dropped
    pub fn fraction_part(&self) -> BigRadix {
        let mut out = self.clone();
        out.integer = DigitSeq::single(0);
        if out.is_zero() {
            out.negative = false;
        }
        out
    }

    /// This number cut (not rounded) to `place` fractional digits
    pub fn truncated(&self, place: usize) -> BigRadix {
        let mut out = self.clone();
        out.mantissa.truncate(place);
        out.mantissa.trim_in_place(true);
        if out.is_zero() {
            out.negative = false;
        }
        out
    }

    /// Round the magnitude half-away-from-zero to `place` fractional
    /// digits, in this number's own radix (a mantissa digit of at least
    /// `base / 2` rounds up).
    pub fn round(&mut self, place: usize) {
        if 2 * self.mantissa.get(place) >= self.base.as_digit() {
            if place == 0 {
                self.integer.set(0, self.integer.get(0) + 1);
            } else {
                self.mantissa.set(place - 1, self.mantissa.get(place - 1) + 1);
            }
        }
        self.mantissa.truncate(place);
        self.mantissa.trim_in_place(true);
        self.resolve();
    }

    /// Copy of this number rounded to `place` fractional digits
    pub fn rounded(&self, place: usize) -> BigRadix {
        let mut out = self.clone();
        out.round(place);
        out
    }

    /// Drop redundant zero digits from both ends
    pub fn trim(&mut self) {
        self.integer.trim_in_place(false);
        self.mantissa.trim_in_place(true);
    }

    /// Run the carry resolver and fold a sign flip into the sign flag
    fn resolve(&mut self) {
        if arithmetic::carry::resolve(&mut self.integer, &mut self.mantissa, self.base) {
            self.negative = !self.negative;
        }
        if self.negative && self.is_zero() {
            self.negative = false;
        }
    }

    /// Sum, as a checked operation ([`BigRadixError::BaseMismatch`]
    /// instead of the operator panic)
    pub fn checked_add(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        arithmetic::addition::add_bigradixes(self, rhs)
    }

    /// Difference, as a checked operation
    pub fn checked_sub(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        arithmetic::addition::subtract_bigradixes(self, rhs)
    }

    /// Product, as a checked operation
    pub fn checked_mul(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        arithmetic::multiplication::multiply_bigradixes(self, rhs, DEFAULT_PRECISION)
    }

    /// Quotient at the default precision, as a checked operation
    pub fn checked_div(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        self.div_with_precision(rhs, DEFAULT_PRECISION)
    }

    /// Remainder `self - (self.floor_div(rhs)) * rhs`, as a checked
    /// operation
    pub fn checked_rem(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        arithmetic::division::impl_modulo(self, rhs)
    }

    /// Integer quotient, as a checked operation
    pub fn checked_floor_div(&self, rhs: &BigRadix) -> Result<BigRadix, BigRadixError> {
        arithmetic::division::impl_floor_div(self, rhs)
    }

    /// Division truncated to `place` fractional digits.
    ///
    /// Division is never performed digit by digit: it is always the
    /// multiplicative inverse of the divisor times the dividend.
    pub fn div_with_precision(&self, rhs: &BigRadix, place: usize) -> Result<BigRadix, BigRadixError> {
        arithmetic::division::impl_division(self, rhs, place)
    }

    /// Integer quotient by greedy power-table subtraction.
    ///
    /// The result carries the XOR of the operand signs (quotients round
    /// toward zero).
    ///
    /// # Panics
    ///
    /// Panics on base mismatch or a zero divisor; see
    /// [`BigRadix::checked_floor_div`].
    pub fn floor_div(&self, rhs: &BigRadix) -> BigRadix {
        match self.checked_floor_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }

    /// The reciprocal `1 / self`, computed by long division to `place`
    /// fractional digits
    pub fn multiplicative_inverse(&self, place: usize) -> Result<BigRadix, BigRadixError> {
        arithmetic::inverse::impl_inverse(self, place)
    }

    /// Integer power by repeated multiplication
    pub fn powi(&self, exponent: u32) -> BigRadix {
        arithmetic::multiplication::impl_powi(self, exponent, DEFAULT_PRECISION)
    }

    /// Real power, as `exp(ln(self) * power)`
    pub fn pow(
        &self,
        power: &BigRadix,
        place: usize,
        limit: Convergence,
    ) -> Result<BigRadix, BigRadixError> {
        if power.is_zero() {
            return Ok(BigRadix::one(self.base));
        }
        if power.is_one() {
            return Ok(self.clone());
        }
        if self.base != power.base {
            return Err(BigRadixError::BaseMismatch(
                self.base.value(),
                power.base.value(),
            ));
        }
        log::debug!("computing real power of {} via exp(ln * power)", self);
        let ln = self.ln(place + 2, limit)?;
        let product = arithmetic::multiplication::multiply_bigradixes(&ln, power, place + 2)?;
        BigRadix::exp(&product, place, limit)
    }

    /// The `degree`-th root by Newton iteration, to `place` fractional
    /// digits
    pub fn nth_root(
        &self,
        degree: u32,
        place: usize,
        limit: Convergence,
    ) -> Result<BigRadix, BigRadixError> {
        arithmetic::root::impl_nth_root(self, degree, place, limit)
    }

    /// Square root; see [`BigRadix::nth_root`]
    pub fn sqrt(&self, place: usize, limit: Convergence) -> Result<BigRadix, BigRadixError> {
        self.nth_root(2, place, limit)
    }

    /// Cube root; see [`BigRadix::nth_root`]
    pub fn cbrt(&self, place: usize, limit: Convergence) -> Result<BigRadix, BigRadixError> {
        self.nth_root(3, place, limit)
    }

    /// Natural logarithm to `place` fractional digits
    pub fn ln(&self, place: usize, limit: Convergence) -> Result<BigRadix, BigRadixError> {
        arithmetic::ln::impl_ln(self, place, limit)
    }

    /// Logarithm in an arbitrary base, as a quotient of natural logs
    pub fn log(
        &self,
        log_base: &BigRadix,
        place: usize,
        limit: Convergence,
    ) -> Result<BigRadix, BigRadixError> {
        arithmetic::ln::impl_log(self, log_base, place, limit)
    }

    /// The exponential function `e^power`, by Taylor series, in the
    /// radix of `power`
    pub fn exp(power: &BigRadix, place: usize, limit: Convergence) -> Result<BigRadix, BigRadixError> {
        arithmetic::exp::impl_exp(power, place, limit)
    }

    /// Pi in the base of your choice, by a digit-extraction series
    pub fn pi(base: Radix, place: usize, limit: Convergence) -> Result<BigRadix, BigRadixError> {
        arithmetic::pi::impl_pi(base, place, limit)
    }

    /// Re-express the *same value* in another radix.
    ///
    /// The integer part is converted by repeated division, the mantissa
    /// by repeated multiplication, cut off at the default precision.
    /// This is the opposite of [`BigRadix::rebase`].
    ///
    /// ```
    /// use bigradix::{BigRadix, Radix};
    ///
    /// let n = BigRadix::from_integer(255, Radix::DECIMAL);
    /// assert_eq!(n.convert(Radix::HEXADECIMAL).to_string(), "FF");
    /// ```
    pub fn convert(&self, new_base: Radix) -> BigRadix {
        self.convert_with_precision(new_base, DEFAULT_PRECISION)
    }

    /// [`BigRadix::convert`] with the mantissa cut off at `place` digits
    pub fn convert_with_precision(&self, new_base: Radix, place: usize) -> BigRadix {
        if new_base == self.base {
            return self.clone();
        }

        let target = BigRadix::from_integer(new_base.value() as i64, self.base);
        let mut number = self.abs();
        let mut fraction = self.abs().fraction_part();

        let mut output: Vec<i64> = Vec::new();
        while !number.is_zero() {
            let remainder = arithmetic::division::impl_modulo(&number, &target)
                .expect("remainder in the original base");
            output.push(small_value(&remainder));
            number = arithmetic::division::impl_floor_div(&number, &target)
                .expect("quotient in the original base");
        }

        let mut output_mantissa: Vec<i64> = Vec::new();
        while !fraction.is_zero() && output_mantissa.len() < place {
            let shifted = arithmetic::multiplication::multiply_bigradixes(
                &fraction,
                &target,
                fraction.mantissa.len(),
            )
            .expect("shifted mantissa in the original base");
            let whole = shifted.integer_part();
            output_mantissa.push(small_value(&whole));
            fraction = arithmetic::addition::subtract_bigradixes(&shifted, &whole)
                .expect("remaining mantissa in the original base");
        }

        BigRadix::new(
            DigitSeq::from(output),
            DigitSeq::from(output_mantissa),
            new_base,
            self.negative,
        )
    }

    /// Reinterpret the *same digit sequence* under another radix.
    ///
    /// No division happens: the digits are relabeled and re-resolved, so
    /// the represented value changes.  This is the opposite of
    /// [`BigRadix::convert`].
    ///
    /// ```
    /// use bigradix::{BigRadix, Radix};
    ///
    /// let n = BigRadix::from_integer(15, Radix::DECIMAL);
    /// let rebased = n.rebase(Radix::new(6).unwrap());
    ///
    /// // same digit string, different value
    /// assert_eq!(rebased.to_string(), "15");
    /// assert_eq!(rebased.convert(Radix::DECIMAL).to_string(), "11");
    /// ```
    pub fn rebase(&self, new_base: Radix) -> BigRadix {
        BigRadix::new(
            self.integer.clone(),
            self.mantissa.clone(),
            new_base,
            self.negative,
        )
    }
}

impl Default for BigRadix {
    fn default() -> BigRadix {
        BigRadix::zero(Radix::DECIMAL)
    }
}

/// Value of a number known to fit in a machine word (a conversion
/// remainder, always below the target base)
fn small_value(n: &BigRadix) -> i64 {
    let b = n.base.as_digit();
    let mut value = 0i64;
    for &digit in n.integer.iter().rev() {
        value = value * b + digit;
    }
    value
}


/// Everything that can go wrong constructing or combining numbers.
///
/// All errors are local, synchronous and non-recoverable by the engine:
/// an error aborts the single arithmetic call that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigRadixError {
    /// Parsed string held no digits
    Empty,
    /// Character outside the digit alphabet for the base being parsed
    InvalidDigit(char),
    /// Base outside the supported `2..=64`
    InvalidBase(u32),
    /// Binary operation between numbers of different bases
    BaseMismatch(u8, u8),
    DivisionByZero,
    /// An exact-mode iteration exhausted its ceiling before reaching a
    /// fixed point
    ConvergenceFailure,
    Other(String),
}

impl fmt::Display for BigRadixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BigRadixError::*;

        match *self {
            Empty => "failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "invalid digit {:?}", c),
            InvalidBase(b) => write!(f, "base {} is outside the supported range 2..=64", b),
            BaseMismatch(lhs, rhs) => write!(f, "base mismatch: {} and {}", lhs, rhs),
            DivisionByZero => "division by zero".fmt(f),
            ConvergenceFailure => "iteration ceiling reached before convergence".fmt(f),
            Other(ref reason) => reason[..].fmt(f),
        }
    }
}

impl std::error::Error for BigRadixError {}
