//! Course fees in Indian rupees.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A course fee in INR.
///
/// The backend sends fees as either a JSON number or a decimal string and
/// expects a plain number back in the `amt` field of a registration. Whole
/// rupee amounts serialize as integers, anything else as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount of rupees.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole rupees.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The amount in rupees.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// True for free courses.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.normalize();
        if amount.fract().is_zero() {
            write!(f, "\u{20b9}{}", amount.trunc())
        } else {
            write!(f, "\u{20b9}{:.2}", amount)
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self.0.normalize();
        if amount.fract().is_zero()
            && let Some(whole) = amount.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        match amount.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(&amount.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Float(f64),
            Text(String),
            Missing(()),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(value) => Ok(Self(Decimal::from(value))),
            Repr::Float(value) => Decimal::try_from(value)
                .map(Self)
                .map_err(serde::de::Error::custom),
            Repr::Text(text) if text.trim().is_empty() => Ok(Self::default()),
            Repr::Text(text) => text
                .trim()
                .trim_start_matches('\u{20b9}')
                .parse::<Decimal>()
                .map(Self)
                .map_err(serde::de::Error::custom),
            Repr::Missing(()) => Ok(Self::default()),
        }
    }
}
