use super::amount::TokenAmount;
use super::error::RouterError;
use super::fraction::{Fraction, Rounding};
use super::token::Token;
use super::Result;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units of `quote` per unit of `base`. `raw` is the ratio of raw amounts, the
/// decimals of both tokens are only applied when rendering (`adjusted`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Fraction,
}

impl Price {
    /// Price of `base` given `base_amount` raw units trade for `quote_amount` raw units
    pub fn new(
        base: Token,
        quote: Token,
        base_amount: &BigUint,
        quote_amount: &BigUint,
    ) -> Result<Self> {
        let raw = Fraction::new(BigInt::from(quote_amount.clone()), BigInt::from(base_amount.clone()))?;
        Ok(Self { base, quote, raw })
    }

    pub fn from_amounts(base: &TokenAmount, quote: &TokenAmount) -> Result<Self> {
        Self::new(base.token().clone(), quote.token().clone(), base.raw(), quote.raw())
    }

    pub fn base(&self) -> &Token {
        &self.base
    }

    pub fn quote_token(&self) -> &Token {
        &self.quote
    }

    pub fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// The price in whole token units, 10^base_decimals / 10^quote_decimals * raw
    pub fn adjusted(&self) -> Fraction {
        let scalar = Fraction::new(
            BigInt::from(10u32).pow(u32::from(self.base.decimals())),
            BigInt::from(10u32).pow(u32::from(self.quote.decimals())),
        )
        .unwrap_or_else(|_| Fraction::one());
        &self.raw * &scalar
    }

    pub fn invert(&self) -> Result<Self> {
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            raw: self.raw.invert()?,
        })
    }

    /// Chains two prices, A/B * B/C = A/C
    pub fn multiply(&self, other: &Price) -> Result<Self> {
        if self.quote != other.base {
            return Err(RouterError::IdentityMismatch);
        }
        Ok(Self {
            base: self.base.clone(),
            quote: other.quote.clone(),
            raw: &self.raw * &other.raw,
        })
    }

    /// Converts an amount of the base token into the quote token at this price
    pub fn quote(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if amount.token() != &self.base {
            return Err(RouterError::IdentityMismatch);
        }
        let quoted = (&self.raw * &amount.as_fraction()).quotient();
        let raw = quoted.to_biguint().ok_or(RouterError::InsufficientAmount)?;
        Ok(TokenAmount::new(self.quote.clone(), raw))
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.adjusted().to_significant(significant_digits, rounding)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.to_significant(6, Rounding::RoundHalfUp),
            self.quote,
            self.base
        )
    }
}
