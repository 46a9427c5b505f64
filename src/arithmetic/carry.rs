//! Carry resolution
//!
//! Digit sequences coming out of the raw ring operations can hold
//! coefficients anywhere in the machine-integer range.  `resolve`
//! normalizes both halves of a number into canonical radix form: every
//! digit in `[0, base)`, integer part trimmed with a non-negative leading
//! digit, mantissa trimmed of trailing zeros.
//!
//! Termination: splitting an out-of-range coefficient moves its overflow
//! one position toward the more significant end and leaves the coefficient
//! itself in range, so each pass strictly reduces the total out-of-range
//! magnitude.  The sign flip fires at most once per call: a fully resolved
//! magnitude negates to coefficients in `(-base, 0]`, and borrowing those
//! back into range cannot drive the new leading digit negative again.

use num_integer::Integer;

use crate::digitseq::DigitSeq;
use crate::Radix;

/// Split a coefficient into an in-range digit and the carry owed to its
/// more significant neighbor.  Floor semantics keep negative coefficients
/// borrowing correctly.
fn resolve_pair(digit: i64, base: i64) -> (i64, i64) {
    (digit.mod_floor(&base), digit.div_floor(&base))
}

/// Normalize `integer` and `mantissa` into canonical radix-`base` form.
///
/// Returns `true` when the represented value changed sign (a negative
/// leading digit negates both sequences); the caller owns the sign flag.
pub(crate) fn resolve(integer: &mut DigitSeq, mantissa: &mut DigitSeq, base: Radix) -> bool {
    let b = base.as_digit();
    if integer.is_empty() {
        integer.push(0);
    }

    let mut flipped = false;
    loop {
        resolve_mantissa(integer, mantissa, b);
        resolve_integer(integer, b);

        if integer.get(integer.len() - 1) < 0 {
            debug_assert!(!flipped, "sign flipped twice during carry resolution");
            *integer = integer.negated();
            *mantissa = mantissa.negated();
            flipped = true;
            continue;
        }
        break;
    }
    flipped
}

/// Mantissa pass: sweep from the least significant digit toward the
/// radix point; the boundary digit resolves into the integer part's
/// least significant digit.  Repeats until a full pass changes nothing.
fn resolve_mantissa(integer: &mut DigitSeq, mantissa: &mut DigitSeq, base: i64) {
    loop {
        let mut modified = false;
        mantissa.push(0);

        // resolve between integer and mantissa
        let boundary = mantissa.get(0);
        if boundary < 0 || boundary >= base {
            modified = true;
            let (digit, carry) = resolve_pair(boundary, base);
            mantissa.set(0, digit);
            integer.set(0, integer.get(0) + carry);
        }

        for n in (1..mantissa.len()).rev() {
            let coefficient = mantissa.get(n);
            if coefficient < 0 || coefficient >= base {
                modified = true;
                let (digit, carry) = resolve_pair(coefficient, base);
                mantissa.set(n, digit);
                mantissa.set(n - 1, mantissa.get(n - 1) + carry);
            }
        }

        mantissa.trim_in_place(true);
        if !modified {
            return;
        }
    }
}

/// Integer pass: forward propagation from least to most significant
/// digit.  The terminal digit is reserved as the sign carry and may stay
/// negative; the caller decides whether that flips the number.
fn resolve_integer(integer: &mut DigitSeq, base: i64) {
    loop {
        let mut modified = false;
        integer.push(0);
        let len = integer.len();

        for n in 0..len - 1 {
            let coefficient = integer.get(n);
            if (coefficient < 0 && n != len - 2) || coefficient >= base {
                modified = true;
                let (digit, carry) = resolve_pair(coefficient, base);
                integer.set(n, digit);
                integer.set(n + 1, integer.get(n + 1) + carry);
            }
        }

        integer.trim_in_place(false);
        if !modified {
            return;
        }
    }
}
