use super::error::RouterError;
use super::Result;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ERC20-like token. Metadata is resolved elsewhere; identity is the chain id
/// plus the (case-insensitive) contract address.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    chain_id: u64,
    address: String,
    decimals: u8,
    symbol: Option<String>,
}

#[derive(Deserialize)]
struct RawToken {
    chain_id: u64,
    address: String,
    decimals: u8,
    symbol: Option<String>,
}

impl TryFrom<RawToken> for Token {
    type Error = RouterError;

    fn try_from(raw: RawToken) -> Result<Self> {
        Self::new(raw.chain_id, &raw.address, raw.decimals, raw.symbol.as_deref())
    }
}

impl Token {
    pub fn new(chain_id: u64, address: &str, decimals: u8, symbol: Option<&str>) -> Result<Self> {
        let digits = address
            .strip_prefix("0x")
            .ok_or_else(|| RouterError::InvalidAddress(address.to_string()))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RouterError::InvalidAddress(address.to_string()));
        }

        Ok(Self {
            chain_id,
            address: address.to_lowercase(),
            decimals,
            symbol: symbol.map(str::to_string),
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn address_value(&self) -> BigUint {
        let digits = self.address.strip_prefix("0x").unwrap_or(&self.address);
        BigUint::parse_bytes(digits.as_bytes(), 16).unwrap_or_default()
    }

    /// Whether this token is token0 of a pair formed with `other`
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address_value() < other.address_value()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.address),
        }
    }
}
