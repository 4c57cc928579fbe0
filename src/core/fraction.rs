use super::error::RouterError;
use super::Result;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// How the last kept digit is chosen when a fraction is rendered to a fixed scale.
/// Rounding is applied to the magnitude, so `RoundDown` truncates towards zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    #[default]
    RoundDown,
    RoundHalfUp,
    RoundUp,
}

/// Exact rational number. The denominator is always positive but the fraction
/// is never reduced, equality and ordering cross-multiply instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

#[derive(Deserialize)]
struct RawFraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = RouterError;

    fn try_from(raw: RawFraction) -> Result<Self> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RouterError::DivisionByZero);
        }
        if denominator.is_negative() {
            return Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Integer part, truncated towards zero
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    pub fn remainder(&self) -> Self {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn floor(&self) -> BigInt {
        let quotient = self.quotient();
        if self.numerator.is_negative() && !(&self.numerator % &self.denominator).is_zero() {
            quotient - 1
        } else {
            quotient
        }
    }

    pub fn ceil(&self) -> BigInt {
        let quotient = self.quotient();
        if self.numerator.is_positive() && !(&self.numerator % &self.denominator).is_zero() {
            quotient + 1
        } else {
            quotient
        }
    }

    pub fn invert(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RouterError::DivisionByZero);
        }
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Renders the value with exactly `decimal_places` digits after the point.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let scale = BigUint::from(10u32).pow(decimal_places);
        let scaled = div_rounded(
            &(self.numerator.magnitude() * scale),
            self.denominator.magnitude(),
            rounding,
        );
        format_scaled(&scaled, decimal_places, self.is_negative())
    }

    /// Renders the value rounded to `significant_digits` significant digits,
    /// without trailing zeros after the decimal point.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        let digits = i64::from(significant_digits.max(1));
        let numerator = self.numerator.magnitude();
        let denominator = self.denominator.magnitude();
        if numerator.is_zero() {
            return "0".to_string();
        }

        // exponent of the leading digit, e.g. 1234 -> 3, 0.0081 -> -3
        let integer = numerator / denominator;
        let exponent = if integer.is_zero() {
            let mut shift = 0i64;
            let mut scaled = numerator.clone();
            while &scaled < denominator {
                scaled *= 10u32;
                shift += 1;
            }
            -shift
        } else {
            integer.to_string().len() as i64 - 1
        };

        let places = digits - 1 - exponent;
        if places >= 0 {
            let places = places as u32;
            let scaled = div_rounded(
                &(numerator * BigUint::from(10u32).pow(places)),
                denominator,
                rounding,
            );
            trim_trailing_zeros(format_scaled(&scaled, places, self.is_negative()))
        } else {
            let shift = BigUint::from(10u32).pow((-places) as u32);
            let rounded = div_rounded(numerator, &(denominator * &shift), rounding) * shift;
            let sign = if self.is_negative() && !rounded.is_zero() {
                "-"
            } else {
                ""
            };
            format!("{sign}{rounded}")
        }
    }
}

fn div_rounded(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> BigUint {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let round_up = match rounding {
        Rounding::RoundDown => false,
        Rounding::RoundHalfUp => &remainder * 2u32 >= *denominator,
        Rounding::RoundUp => !remainder.is_zero(),
    };
    if round_up {
        quotient + 1u32
    } else {
        quotient
    }
}

fn format_scaled(scaled: &BigUint, decimal_places: u32, negative: bool) -> String {
    let places = decimal_places as usize;
    let mut digits = scaled.to_string();
    if digits.len() <= places {
        digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
    }
    let sign = if negative && !scaled.is_zero() { "-" } else { "" };
    if places == 0 {
        return format!("{sign}{digits}");
    }
    let (integer_part, fraction_part) = digits.split_at(digits.len() - places);
    format!("{sign}{integer_part}.{fraction_part}")
}

fn trim_trailing_zeros(value: String) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        &self + &other
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        &self - &other
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        &self * &other
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
