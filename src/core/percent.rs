use super::fraction::{Fraction, Rounding};
use super::Result;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dimensionless ratio, 5/100 is five percent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    pub fn zero() -> Self {
        Self(Fraction::zero())
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Percentage with `decimal_places` digits, 1/8 -> "12.50"
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        (&self.0 * &Fraction::from_integer(100)).to_fixed(decimal_places, rounding)
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        (&self.0 * &Fraction::from_integer(100)).to_significant(significant_digits, rounding)
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Self(fraction)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_significant(4, Rounding::RoundHalfUp))
    }
}
