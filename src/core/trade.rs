use super::amount::TokenAmount;
use super::error::RouterError;
use super::fraction::Fraction;
use super::percent::Percent;
use super::price::Price;
use super::route::Route;
use super::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// A route with both ends priced. One amount is fixed by the caller, the other
/// is derived hop by hop on construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrade")]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: TokenAmount,
    output_amount: TokenAmount,
}

#[derive(Deserialize)]
struct RawTrade {
    route: Route,
    trade_type: TradeType,
    input_amount: TokenAmount,
    output_amount: TokenAmount,
}

impl TryFrom<RawTrade> for Trade {
    type Error = RouterError;

    // the derived side is quoted again and has to match the stored one
    fn try_from(raw: RawTrade) -> Result<Self> {
        let fixed = match raw.trade_type {
            TradeType::ExactInput => raw.input_amount.clone(),
            TradeType::ExactOutput => raw.output_amount.clone(),
        };
        let trade = Self::new(raw.route, fixed, raw.trade_type)?;
        if trade.input_amount != raw.input_amount || trade.output_amount != raw.output_amount {
            return Err(RouterError::InvalidTrade);
        }
        Ok(trade)
    }
}

impl Trade {
    pub fn new(route: Route, amount: TokenAmount, trade_type: TradeType) -> Result<Self> {
        let (input_amount, output_amount) = match trade_type {
            TradeType::ExactInput => {
                if amount.token() != route.input() {
                    return Err(RouterError::IdentityMismatch);
                }
                let mut current = amount.clone();
                for pair in route.pairs() {
                    current = pair.get_output_amount(&current)?;
                }
                (amount, current)
            }
            TradeType::ExactOutput => {
                if amount.token() != route.output() {
                    return Err(RouterError::IdentityMismatch);
                }
                let mut current = amount.clone();
                for pair in route.pairs().iter().rev() {
                    current = pair.get_input_amount(&current)?;
                }
                (current, amount)
            }
        };

        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
        })
    }

    pub fn exact_in(route: Route, amount_in: TokenAmount) -> Result<Self> {
        Self::new(route, amount_in, TradeType::ExactInput)
    }

    pub fn exact_out(route: Route, amount_out: TokenAmount) -> Result<Self> {
        Self::new(route, amount_out, TradeType::ExactOutput)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &TokenAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &TokenAmount {
        &self.output_amount
    }

    /// Most the caller should be willing to pay, given `slippage_tolerance`.
    /// Exact input trades already fix the input.
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<TokenAmount> {
        if slippage_tolerance.is_negative() {
            return Err(RouterError::SlippageTolerance);
        }
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let factor = &Fraction::one() + slippage_tolerance.as_fraction();
                self.input_amount.multiply(&factor)
            }
        }
    }

    /// Least the caller should accept, given `slippage_tolerance`.
    /// Exact output trades already fix the output.
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<TokenAmount> {
        if slippage_tolerance.is_negative() {
            return Err(RouterError::SlippageTolerance);
        }
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let factor = (&Fraction::one() + slippage_tolerance.as_fraction()).invert()?;
                self.output_amount.multiply(&factor)
            }
        }
    }

    /// Average price paid across the whole route
    pub fn execution_price(&self) -> Result<Price> {
        Price::from_amounts(&self.input_amount, &self.output_amount)
    }

    /// How far the execution price falls short of the route's mid price:
    /// (mid * input - output) / (mid * input), on raw amounts
    pub fn price_impact(&self) -> Result<Percent> {
        let mid_price = self.route.mid_price()?;
        let exact_quote = mid_price.raw() * &self.input_amount.as_fraction();
        let shortfall = &exact_quote - &self.output_amount.as_fraction();
        Ok(Percent::from(shortfall.checked_div(&exact_quote)?))
    }
}

/// Ranks trades with the same input and output tokens: more output first, then
/// less input, then fewer hops. Works for both trade types since one side is
/// fixed across all candidates of a search. Trades equal on all three compare
/// `Equal`, and `sorted_insert` keeps those in discovery order.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    b.output_amount
        .raw()
        .cmp(a.output_amount.raw())
        .then_with(|| a.input_amount.raw().cmp(b.input_amount.raw()))
        .then_with(|| a.route.hops().cmp(&b.route.hops()))
}
