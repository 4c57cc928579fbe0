use thiserror::Error;

/// Every failure the router core can report. The display text is the short
/// upper-case kind name so callers can match on it in logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("PAIRS")]
    Pairs,
    #[error("MAX_HOPS")]
    MaxHops,
    #[error("INVALID_ROUTE")]
    InvalidRoute,
    #[error("INVALID_PAIR")]
    InvalidPair,
    #[error("INVALID_TRADE")]
    InvalidTrade,
    #[error("INVALID_FEE")]
    InvalidFee,
    #[error("INVALID_ADDRESS: {0}")]
    InvalidAddress(String),
    #[error("TOKEN_NOT_IN_PAIR")]
    TokenNotInPair,
    #[error("INSUFFICIENT_INPUT_AMOUNT")]
    InsufficientInputAmount,
    #[error("INSUFFICIENT_OUTPUT_AMOUNT")]
    InsufficientOutputAmount,
    #[error("INSUFFICIENT_LIQUIDITY")]
    InsufficientLiquidity,
    #[error("INSUFFICIENT_AMOUNT")]
    InsufficientAmount,
    #[error("IDENTITY_MISMATCH")]
    IdentityMismatch,
    #[error("DIVISION_BY_ZERO")]
    DivisionByZero,
    #[error("SLIPPAGE_TOLERANCE")]
    SlippageTolerance,
}

impl RouterError {
    /// Quote failures mark a dead branch during path search rather than an error
    pub fn is_quote_failure(&self) -> bool {
        matches!(
            self,
            Self::InsufficientInputAmount
                | Self::InsufficientOutputAmount
                | Self::InsufficientLiquidity
        )
    }
}
