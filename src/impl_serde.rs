//!
//! Support for serde implementations
//!
//! Numbers travel as strings in the form `base#digits` (`"16#FF.8"`),
//! so the radix survives the round trip; a bare digit string
//! deserializes as decimal.

use std::fmt;

use serde::{de, ser};

use crate::{BigRadix, Radix};

impl ser::Serialize for BigRadix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&format_args!("{}#{}", self.base().value(), self))
    }
}

/// Used by serde to construct a BigRadix
struct BigRadixVisitor;

impl<'de> de::Visitor<'de> for BigRadixVisitor {
    type Value = BigRadix;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a radix-prefixed number string like \"16#FF.8\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigRadix, E>
    where
        E: de::Error,
    {
        let (base, digits) = match value.split_once('#') {
            Some((radix, digits)) => {
                let radix: u8 = radix
                    .parse()
                    .map_err(|_| E::custom(format!("invalid radix prefix in {:?}", value)))?;
                let base = Radix::new(radix).map_err(|err| E::custom(err.to_string()))?;
                (base, digits)
            }
            None => (Radix::DECIMAL, value),
        };

        BigRadix::parse(digits, base).map_err(|err| E::custom(err.to_string()))
    }
}

impl<'de> de::Deserialize<'de> for BigRadix {
    fn deserialize<D>(deserializer: D) -> Result<BigRadix, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(BigRadixVisitor)
    }
}
