//! Implementation of std::fmt traits & other stringification functions
//!

use std::fmt;

use crate::parsing::digit_char;
use crate::{BigRadix, Context};


impl fmt::Display for BigRadix {
    /// Format as `[-]digits[.digits]` in the number's own alphabet.
    ///
    /// A format precision (`{:.4}`) rounds to that many fractional
    /// places first; width and alignment behave as for strings.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            // the precision is spent on rounding; pad would re-truncate
            // the digit string with it
            Some(place) => {
                let rounded = self.rounded(place);
                f.write_str(&rounded.to_string_with_context(&Context::default()))
            }
            None => f.pad(&self.to_string_with_context(&Context::default())),
        }
    }
}

impl fmt::Debug for BigRadix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigRadix(\"{}\", base {})", self, self.base())
    }
}

impl BigRadix {
    /// Render with a context supplying the characters for digit values
    /// 62 and 63 (plain [`Display`](fmt::Display) uses `+` and `/`)
    pub fn to_string_with_context(&self, ctx: &Context) -> String {
        let extended = ctx.extended_digits();
        let mut out = String::with_capacity(self.integer.len() + self.mantissa.len() + 2);

        if self.negative {
            out.push('-');
        }

        if self.integer.is_empty() {
            out.push('0');
        } else {
            for &digit in self.integer.iter().rev() {
                out.push(digit_char(digit, &extended));
            }
        }

        if !self.mantissa.is_empty() {
            out.push('.');
            for &digit in self.mantissa.iter() {
                out.push(digit_char(digit, &extended));
            }
        }

        out
    }
}
