//! Pricing and routing core for constant product DEX pairs.
//!
//! Given a set of pairs with known reserves and fees, finds the best routes
//! between two tokens for an exact input or exact output amount, using exact
//! integer arithmetic throughout.
pub mod config;
pub mod core;
pub mod types;

pub use crate::core::amount::TokenAmount;
pub use crate::core::fraction::{Fraction, Rounding};
pub use crate::core::pair::{FeeSchedule, Pair, PairKey};
pub use crate::core::paths::{best_trade_exact_in, best_trade_exact_out, BestTradeOptions};
pub use crate::core::percent::Percent;
pub use crate::core::price::Price;
pub use crate::core::route::Route;
pub use crate::core::token::Token;
pub use crate::core::trade::{Trade, TradeType};
pub use crate::core::{Result, RouterError};
pub use crate::types::RouterConfig;
