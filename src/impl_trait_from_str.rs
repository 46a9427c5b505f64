use std::str::FromStr;

use crate::{BigRadix, BigRadixError, Radix};

impl FromStr for BigRadix {
    type Err = BigRadixError;

    /// Bare `parse()` reads decimal; use [`BigRadix::parse`] or
    /// [`num_traits::Num::from_str_radix`] for other bases
    #[inline]
    fn from_str(s: &str) -> Result<BigRadix, BigRadixError> {
        BigRadix::parse(s, Radix::DECIMAL)
    }
}
