use super::error::RouterError;
use super::fraction::{Fraction, Rounding};
use super::token::Token;
use super::Result;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A raw (smallest unit) amount of a specific token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    token: Token,
    raw: BigUint,
}

impl TokenAmount {
    pub fn new(token: Token, raw: impl Into<BigUint>) -> Self {
        Self {
            token,
            raw: raw.into(),
        }
    }

    pub fn zero(token: Token) -> Self {
        Self::new(token, BigUint::zero())
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn raw(&self) -> &BigUint {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_integer(self.raw.clone())
    }

    fn ensure_same_token(&self, other: &Self) -> Result<()> {
        if self.token != other.token {
            return Err(RouterError::IdentityMismatch);
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_token(other)?;
        Ok(Self::new(self.token.clone(), &self.raw + &other.raw))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.ensure_same_token(other)?;
        if other.raw > self.raw {
            return Err(RouterError::InsufficientAmount);
        }
        Ok(Self::new(self.token.clone(), &self.raw - &other.raw))
    }

    /// Compares two amounts of the same token
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering> {
        self.ensure_same_token(other)?;
        Ok(self.raw.cmp(&other.raw))
    }

    /// Scales the amount by `factor`, flooring the result to a whole raw unit
    pub fn multiply(&self, factor: &Fraction) -> Result<Self> {
        let scaled = (&self.as_fraction() * factor).floor();
        let raw = scaled.to_biguint().ok_or(RouterError::InsufficientAmount)?;
        Ok(Self::new(self.token.clone(), raw))
    }

    /// Full precision human readable amount, 1500000 of a 6 decimals token -> "1.5"
    pub fn to_exact(&self) -> String {
        let exact = self.to_fixed(u32::from(self.token.decimals()), Rounding::RoundDown);
        if exact.contains('.') {
            exact.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            exact
        }
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.decimal_value().to_fixed(decimal_places, rounding)
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.decimal_value().to_significant(significant_digits, rounding)
    }

    fn decimal_value(&self) -> Fraction {
        let scale = BigInt::from(10u32).pow(u32::from(self.token.decimals()));
        Fraction::new(BigInt::from(self.raw.clone()), scale).unwrap_or_else(|_| Fraction::zero())
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token)
    }
}
