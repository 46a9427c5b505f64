//! Fixed-width text codec
//!
//! Maps every character of a string to a zero-padded digit string in a
//! chosen base, wide enough to hold any `bits`-bit character code.  Both
//! directions share the width computation, so
//! `decode(encode(s, base, bits), base, bits) == s` for any string whose
//! character codes fit in `bits` bits.

use num_traits::ToPrimitive;

use crate::{BigRadix, BigRadixError, Radix};


/// Encode each character of `s` as a fixed-width base-`base` digit string
pub fn encode(s: &str, base: Radix, bits: u32) -> Result<String, BigRadixError> {
    let limit = code_limit(bits)?;
    let width = encoded_width(base, bits);

    let mut out = String::with_capacity(s.chars().count() * width);
    for c in s.chars() {
        let code = c as u32;
        if code as u64 >= limit {
            return Err(BigRadixError::Other(format!(
                "cannot encode {:?} in {} bits",
                c, bits
            )));
        }
        let digits = BigRadix::from_unsigned(code as u64, base).to_string();
        for _ in digits.len()..width {
            out.push('0');
        }
        out.push_str(&digits);
    }
    Ok(out)
}

/// Decode a string produced by [`encode`] with the same base and width
pub fn decode(s: &str, base: Radix, bits: u32) -> Result<String, BigRadixError> {
    code_limit(bits)?;
    let width = encoded_width(base, bits);

    let chars: Vec<char> = s.chars().collect();
    if chars.len() % width != 0 {
        return Err(BigRadixError::Other(format!(
            "encoded length {} is not a multiple of the {}-character code width",
            chars.len(),
            width
        )));
    }

    let mut out = String::with_capacity(chars.len() / width);
    for chunk in chars.chunks(width) {
        let digits: String = chunk.iter().collect();
        let number = BigRadix::parse(&digits, base)?;
        let code = number
            .to_u64()
            .and_then(|code| u32::try_from(code).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| {
                BigRadixError::Other(format!("{:?} does not name a character", digits))
            })?;
        out.push(code);
    }
    Ok(out)
}

/// Digits needed to express any `bits`-bit code in `base`
fn encoded_width(base: Radix, bits: u32) -> usize {
    let target = 1u64 << bits;
    let base = base.value() as u64;

    let mut width = 1;
    let mut span = base;
    while span < target {
        span *= base;
        width += 1;
    }
    width
}

fn code_limit(bits: u32) -> Result<u64, BigRadixError> {
    if !(1..=32).contains(&bits) {
        return Err(BigRadixError::Other(format!(
            "bit width must be between 1 and 32, not {}",
            bits
        )));
    }
    Ok(1u64 << bits)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn width_covers_the_bit_space() {
        assert_eq!(encoded_width(Radix::BINARY, 8), 8);
        assert_eq!(encoded_width(Radix::HEXADECIMAL, 8), 2);
        assert_eq!(encoded_width(Radix::DECIMAL, 8), 3);
        assert_eq!(encoded_width(Radix::TETRASEXAGESIMAL, 8), 2);
        assert_eq!(encoded_width(Radix::HEXADECIMAL, 16), 4);
    }

    #[test]
    fn known_encodings() {
        // 'A' is 65: 01000001 in binary, 41 in hex
        assert_eq!(encode("A", Radix::BINARY, 8).unwrap(), "01000001");
        assert_eq!(encode("A", Radix::HEXADECIMAL, 8).unwrap(), "41");
        assert_eq!(encode("AB", Radix::HEXADECIMAL, 8).unwrap(), "4142");
    }

    #[test]
    fn round_trips() {
        let cases = ["", "A", "Hello, world!", "base sixty four"];
        for s in cases {
            for base in [2u8, 7, 10, 16, 36, 64] {
                let base = Radix::new(base).unwrap();
                let encoded = encode(s, base, 8).unwrap();
                assert_eq!(decode(&encoded, base, 8).unwrap(), s, "base {}", base);
            }
        }
    }

    #[test]
    fn wide_characters_need_wide_bits() {
        // U+03C0 does not fit in a byte
        let s = "\u{3c0}r\u{b2}";
        assert!(encode(s, Radix::HEXADECIMAL, 8).is_err());

        let encoded = encode(s, Radix::HEXADECIMAL, 16).unwrap();
        assert_eq!(encoded.len(), 12);
        assert_eq!(decode(&encoded, Radix::HEXADECIMAL, 16).unwrap(), s);
    }

    #[test]
    fn ragged_input_is_rejected() {
        assert!(decode("414", Radix::HEXADECIMAL, 8).is_err());
    }

    #[test]
    fn bits_out_of_range() {
        assert!(encode("A", Radix::BINARY, 0).is_err());
        assert!(encode("A", Radix::BINARY, 33).is_err());
    }
}
