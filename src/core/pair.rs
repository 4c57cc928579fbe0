use super::amount::TokenAmount;
use super::constants::{DEFAULT_PROTOCOL_FEE_DENOMINATOR, DEFAULT_SWAP_FEE, FEE_DENOMINATOR};
use super::error::RouterError;
use super::percent::Percent;
use super::price::Price;
use super::token::Token;
use super::Result;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Fee regime of a single pair. Each pair carries its own schedule so pools with
/// different fees can be routed through in the same search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Basis of `swap_fee`, 10_000 means the fee is in basis points
    pub fee_denominator: u32,
    /// Charged on the input amount of every swap
    pub swap_fee: u32,
    /// The protocol takes 1 / (protocol_fee_denominator + 1) of the swap fee, 0 disables it
    pub protocol_fee_denominator: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            fee_denominator: FEE_DENOMINATOR,
            swap_fee: DEFAULT_SWAP_FEE,
            protocol_fee_denominator: DEFAULT_PROTOCOL_FEE_DENOMINATOR,
        }
    }
}

impl FeeSchedule {
    pub fn new(swap_fee: u32, protocol_fee_denominator: u32) -> Self {
        Self {
            fee_denominator: FEE_DENOMINATOR,
            swap_fee,
            protocol_fee_denominator,
        }
    }

    pub fn with_fee_denominator(self, fee_denominator: u32) -> Self {
        Self {
            fee_denominator,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.fee_denominator == 0 || self.swap_fee >= self.fee_denominator {
            return Err(RouterError::InvalidFee);
        }
        Ok(())
    }
}

/// Identity of a pair during graph traversal: its unordered token pair
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub token0: Token,
    pub token1: Token,
}

/// Constant product pool holding two reserves. Legs are stored sorted so that
/// `token0` sorts before `token1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct Pair {
    reserve0: TokenAmount,
    reserve1: TokenAmount,
    fees: FeeSchedule,
}

// Serialized form, rebuilt through `Pair::with_fees` so stored pairs are checked
// like new ones
#[derive(Deserialize)]
struct RawPair {
    reserve0: TokenAmount,
    reserve1: TokenAmount,
    fees: FeeSchedule,
}

impl TryFrom<RawPair> for Pair {
    type Error = RouterError;

    fn try_from(raw: RawPair) -> Result<Self> {
        Self::with_fees(raw.reserve0, raw.reserve1, raw.fees)
    }
}

impl Pair {
    pub fn new(
        reserve_a: TokenAmount,
        reserve_b: TokenAmount,
        swap_fee: u32,
        protocol_fee_denominator: u32,
    ) -> Result<Self> {
        Self::with_fees(
            reserve_a,
            reserve_b,
            FeeSchedule::new(swap_fee, protocol_fee_denominator),
        )
    }

    pub fn with_default_fees(reserve_a: TokenAmount, reserve_b: TokenAmount) -> Result<Self> {
        Self::with_fees(reserve_a, reserve_b, FeeSchedule::default())
    }

    pub fn with_fees(
        reserve_a: TokenAmount,
        reserve_b: TokenAmount,
        fees: FeeSchedule,
    ) -> Result<Self> {
        let (token_a, token_b) = (reserve_a.token(), reserve_b.token());
        if token_a == token_b || token_a.chain_id() != token_b.chain_id() {
            return Err(RouterError::InvalidPair);
        }
        fees.validate()?;

        let (reserve0, reserve1) = if reserve_a.token().sorts_before(reserve_b.token()) {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };
        Ok(Self {
            reserve0,
            reserve1,
            fees,
        })
    }

    pub fn token0(&self) -> &Token {
        self.reserve0.token()
    }

    pub fn token1(&self) -> &Token {
        self.reserve1.token()
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    pub fn swap_fee(&self) -> u32 {
        self.fees.swap_fee
    }

    pub fn protocol_fee_denominator(&self) -> u32 {
        self.fees.protocol_fee_denominator
    }

    /// Share of the swap fee diverted to the protocol treasury, `None` when disabled.
    /// Quoting never reads this, it is metadata for reserve accounting.
    pub fn protocol_fee_share(&self) -> Option<Percent> {
        match self.fees.protocol_fee_denominator {
            0 => None,
            denominator => Percent::new(1, u64::from(denominator) + 1).ok(),
        }
    }

    pub fn key(&self) -> PairKey {
        PairKey {
            token0: self.token0().clone(),
            token1: self.token1().clone(),
        }
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(&self.reserve0)
        } else if token == self.token1() {
            Ok(&self.reserve1)
        } else {
            Err(RouterError::TokenNotInPair)
        }
    }

    pub fn other_token(&self, token: &Token) -> Result<&Token> {
        if token == self.token0() {
            Ok(self.token1())
        } else if token == self.token1() {
            Ok(self.token0())
        } else {
            Err(RouterError::TokenNotInPair)
        }
    }

    /// Current mid price of token0 in terms of token1
    pub fn token0_price(&self) -> Result<Price> {
        Price::from_amounts(&self.reserve0, &self.reserve1)
    }

    /// Current mid price of token1 in terms of token0
    pub fn token1_price(&self) -> Result<Price> {
        Price::from_amounts(&self.reserve1, &self.reserve0)
    }

    pub fn price_of(&self, token: &Token) -> Result<Price> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(RouterError::TokenNotInPair)
        }
    }

    fn has_liquidity(&self) -> bool {
        !self.reserve0.is_zero() && !self.reserve1.is_zero()
    }

    /// Amount of the other token received for `input_amount`, after the swap fee.
    ///
    /// out = in * (D - fee) * reserve_out / (reserve_in * D + in * (D - fee)), floored
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<TokenAmount> {
        let input_reserve = self.reserve_of(input_amount.token())?;
        let output_token = self.other_token(input_amount.token())?;
        if input_amount.is_zero() {
            return Err(RouterError::InsufficientInputAmount);
        }
        if !self.has_liquidity() {
            return Err(RouterError::InsufficientLiquidity);
        }
        let output_reserve = self.reserve_of(output_token)?;

        let fee_denominator = BigUint::from(self.fees.fee_denominator);
        let input_with_fee =
            input_amount.raw() * BigUint::from(self.fees.fee_denominator - self.fees.swap_fee);
        let numerator = &input_with_fee * output_reserve.raw();
        let denominator = input_reserve.raw() * fee_denominator + &input_with_fee;
        let output = numerator / denominator;
        if output.is_zero() {
            return Err(RouterError::InsufficientInputAmount);
        }
        Ok(TokenAmount::new(output_token.clone(), output))
    }

    /// Smallest amount of the other token that buys at least `output_amount`.
    ///
    /// in = reserve_in * out * D / ((reserve_out - out) * (D - fee)), floored, plus one
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<TokenAmount> {
        let output_reserve = self.reserve_of(output_amount.token())?;
        let input_token = self.other_token(output_amount.token())?;
        if output_amount.is_zero() {
            return Err(RouterError::InsufficientOutputAmount);
        }
        if !self.has_liquidity() || output_amount.raw() >= output_reserve.raw() {
            return Err(RouterError::InsufficientLiquidity);
        }
        let input_reserve = self.reserve_of(input_token)?;

        let numerator = input_reserve.raw()
            * output_amount.raw()
            * BigUint::from(self.fees.fee_denominator);
        let denominator = (output_reserve.raw() - output_amount.raw())
            * BigUint::from(self.fees.fee_denominator - self.fees.swap_fee);
        let input = numerator / denominator + 1u32;
        Ok(TokenAmount::new(input_token.clone(), input))
    }
}
