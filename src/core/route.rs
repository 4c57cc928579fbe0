use super::error::RouterError;
use super::pair::Pair;
use super::price::Price;
use super::token::Token;
use super::Result;
use serde::{Deserialize, Serialize};

/// A chain of pairs leading from `path[0]` to the last token of `path`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
}

#[derive(Deserialize)]
struct RawRoute {
    pairs: Vec<Pair>,
    path: Vec<Token>,
}

impl TryFrom<RawRoute> for Route {
    type Error = RouterError;

    // the stored path must be the one the pairs actually walk
    fn try_from(raw: RawRoute) -> Result<Self> {
        let input = raw.path.first().cloned().ok_or(RouterError::InvalidRoute)?;
        let route = Self::new(raw.pairs, input)?;
        if route.path != raw.path {
            return Err(RouterError::InvalidRoute);
        }
        Ok(route)
    }
}

impl Route {
    /// Builds the token path by walking `pairs` from `input`. Fails with
    /// `InvalidRoute` unless every pair shares the current token with the
    /// previous hop.
    pub fn new(pairs: Vec<Pair>, input: Token) -> Result<Self> {
        let first = pairs.first().ok_or(RouterError::InvalidRoute)?;
        if !first.involves_token(&input) {
            return Err(RouterError::InvalidRoute);
        }
        let chain_id = input.chain_id();

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(input);
        for pair in &pairs {
            let current = &path[path.len() - 1];
            if pair.token0().chain_id() != chain_id || pair.token1().chain_id() != chain_id {
                return Err(RouterError::InvalidRoute);
            }
            let next = pair
                .other_token(current)
                .map_err(|_| RouterError::InvalidRoute)?
                .clone();
            path.push(next);
        }

        Ok(Self { pairs, path })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Token {
        &self.path[0]
    }

    pub fn output(&self) -> &Token {
        &self.path[self.path.len() - 1]
    }

    pub fn hops(&self) -> usize {
        self.pairs.len()
    }

    /// Mid price of the input in terms of the output, the product of each hop's
    /// reserve ratio. Display only, search never looks at it.
    pub fn mid_price(&self) -> Result<Price> {
        let mut price = self.pairs[0].price_of(&self.path[0])?;
        for (pair, token) in self.pairs.iter().zip(&self.path).skip(1) {
            price = price.multiply(&pair.price_of(token)?)?;
        }
        Ok(price)
    }
}
