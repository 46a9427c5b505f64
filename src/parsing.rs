//! Routines for parsing strings into BigRadix values

use crate::digitseq::DigitSeq;
use crate::{BigRadix, BigRadixError, Context, Radix};


/// Value of a digit character under `base`.
///
/// `0-9` are themselves, `A-Z` are 10..=35 and `a-z` are 36..=61, with
/// the context's extended pair standing in for 62 and 63.  Bases small
/// enough that lowercase letters cannot be digits in their own right
/// (36 and below) fold case instead.
pub(crate) fn digit_value(c: char, base: Radix, extended: &[char; 2]) -> Result<i64, BigRadixError> {
    let value = match c {
        '0'..='9' => c as i64 - '0' as i64,
        'A'..='Z' => c as i64 - 'A' as i64 + 10,
        'a'..='z' if base.folds_case() => c as i64 - 'a' as i64 + 10,
        'a'..='z' => c as i64 - 'a' as i64 + 36,
        _ if c == extended[0] => 62,
        _ if c == extended[1] => 63,
        _ => return Err(BigRadixError::InvalidDigit(c)),
    };

    if value >= base.as_digit() {
        return Err(BigRadixError::InvalidDigit(c));
    }
    Ok(value)
}

/// Character rendering the digit `value`
pub(crate) fn digit_char(value: i64, extended: &[char; 2]) -> char {
    debug_assert!((0..64).contains(&value));
    match value {
        0..=9 => (b'0' + value as u8) as char,
        10..=35 => (b'A' + (value - 10) as u8) as char,
        36..=61 => (b'a' + (value - 36) as u8) as char,
        62 => extended[0],
        _ => extended[1],
    }
}

/// Parse `[-]digits[.digits]` under `base`
pub(crate) fn parse_with_context(
    s: &str,
    base: Radix,
    ctx: &Context,
) -> Result<BigRadix, BigRadixError> {
    if s.is_empty() {
        return Err(BigRadixError::Empty);
    }

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (integer_str, mantissa_str) = match digits.find('.') {
        None => (digits, ""),
        Some(point) => {
            let (integer, mantissa) = (&digits[..point], &digits[point + 1..]);
            if mantissa.contains('.') {
                return Err(BigRadixError::InvalidDigit('.'));
            }
            (integer, mantissa)
        }
    };

    if integer_str.is_empty() && mantissa_str.is_empty() {
        return Err(BigRadixError::Empty);
    }

    let extended = ctx.extended_digits();

    // integer digits arrive most significant first
    let integer: DigitSeq = integer_str
        .chars()
        .rev()
        .map(|c| digit_value(c, base, &extended))
        .collect::<Result<_, _>>()?;

    let mantissa: DigitSeq = mantissa_str
        .chars()
        .map(|c| digit_value(c, base, &extended))
        .collect::<Result<_, _>>()?;

    Ok(BigRadix::new_with_context(integer, mantissa, base, negative, ctx))
}


#[cfg(test)]
mod test_digit_value {
    use super::*;
    use crate::DEFAULT_EXTENDED_DIGITS;

    fn value(c: char, base: u8) -> Result<i64, BigRadixError> {
        digit_value(c, Radix::new(base).unwrap(), &DEFAULT_EXTENDED_DIGITS)
    }

    #[test]
    fn decimal_digits() {
        assert_eq!(value('0', 10), Ok(0));
        assert_eq!(value('9', 10), Ok(9));
        assert_eq!(value('A', 10), Err(BigRadixError::InvalidDigit('A')));
    }

    #[test]
    fn letters_fold_case_up_to_base_36() {
        assert_eq!(value('F', 16), Ok(15));
        assert_eq!(value('f', 16), Ok(15));
        assert_eq!(value('Z', 36), Ok(35));
        assert_eq!(value('z', 36), Ok(35));
    }

    #[test]
    fn lowercase_is_distinct_above_base_36() {
        assert_eq!(value('a', 64), Ok(36));
        assert_eq!(value('z', 64), Ok(61));
        assert_eq!(value('A', 64), Ok(10));
    }

    #[test]
    fn extended_pair() {
        assert_eq!(value('+', 64), Ok(62));
        assert_eq!(value('/', 64), Ok(63));
        assert_eq!(value('+', 62), Err(BigRadixError::InvalidDigit('+')));
    }

    #[test]
    fn digit_must_fit_base() {
        assert_eq!(value('2', 2), Err(BigRadixError::InvalidDigit('2')));
        assert_eq!(value('7', 8), Ok(7));
    }
}
