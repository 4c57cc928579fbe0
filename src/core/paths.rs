use super::amount::TokenAmount;
use super::constants::{DEFAULT_MAX_HOPS, DEFAULT_MAX_NUM_RESULTS};
use super::error::RouterError;
use super::pair::{Pair, PairKey};
use super::route::Route;
use super::token::Token;
use super::trade::{trade_comparator, Trade, TradeType};
use super::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradeOptions {
    /// Length of the returned ranking
    pub max_num_results: usize,
    /// Longest route considered, 1 means direct pairs only
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        Self {
            max_num_results: DEFAULT_MAX_NUM_RESULTS,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

/// Inserts `item` into the already sorted `items`, keeping at most `max_size`
/// entries. Equal items stay in insertion order. Returns the item that fell off
/// the end, if any.
pub fn sorted_insert<T, F>(items: &mut Vec<T>, item: T, max_size: usize, comparator: F) -> Option<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if max_size == 0 {
        return Some(item);
    }
    let position = items.partition_point(|existing| comparator(existing, &item) != Ordering::Greater);
    if items.len() >= max_size {
        if position == items.len() {
            return Some(item);
        }
        items.insert(position, item);
        return items.pop();
    }
    items.insert(position, item);
    None
}

// A partially explored path: the amount at the frontier token, the pairs walked
// so far (indices in traversal order) and their keys, which may not be reused.
struct Frame<'a> {
    amount: TokenAmount,
    hops: Vec<usize>,
    used: HashSet<&'a PairKey>,
}

fn validate(pairs: &[Pair], options: &BestTradeOptions) -> Result<()> {
    if pairs.is_empty() {
        return Err(RouterError::Pairs);
    }
    if options.max_hops == 0 {
        return Err(RouterError::MaxHops);
    }
    Ok(())
}

/// Up to `max_num_results` trades spending exactly `amount_in` for `token_out`,
/// best output first. Routes are at most `max_hops` long and never use the same
/// token pair twice. Pairs that cannot quote a hop are skipped, so an
/// unreachable token yields an empty list rather than an error.
///
/// The search is depth first over an explicit stack, so its depth is bounded by
/// `max_hops` without recursion.
pub fn best_trade_exact_in(
    pairs: &[Pair],
    amount_in: &TokenAmount,
    token_out: &Token,
    options: BestTradeOptions,
) -> Result<Vec<Trade>> {
    validate(pairs, &options)?;
    let keys: Vec<PairKey> = pairs.iter().map(Pair::key).collect();
    let mut best_trades = Vec::new();
    let mut stack = vec![Frame {
        amount: amount_in.clone(),
        hops: Vec::new(),
        used: HashSet::new(),
    }];

    while let Some(frame) = stack.pop() {
        let mut next_frames = Vec::new();
        for (index, pair) in pairs.iter().enumerate() {
            if !pair.involves_token(frame.amount.token()) || frame.used.contains(&keys[index]) {
                continue;
            }
            let amount_out = match pair.get_output_amount(&frame.amount) {
                Ok(amount_out) => amount_out,
                Err(e) if e.is_quote_failure() => {
                    trace!(pair = ?keys[index], error = %e, "dead branch");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let mut hops = frame.hops.clone();
            hops.push(index);
            if amount_out.token() == token_out {
                let route = Route::new(
                    hops.iter().map(|&i| pairs[i].clone()).collect(),
                    amount_in.token().clone(),
                )?;
                let trade = Trade::new(route, amount_in.clone(), TradeType::ExactInput)?;
                debug!(
                    hops = trade.route().hops(),
                    output = %trade.output_amount(),
                    "exact input candidate"
                );
                sorted_insert(&mut best_trades, trade, options.max_num_results, trade_comparator);
            } else if hops.len() < options.max_hops {
                let mut used = frame.used.clone();
                used.insert(&keys[index]);
                next_frames.push(Frame {
                    amount: amount_out,
                    hops,
                    used,
                });
            }
        }
        // reversed so that branches are explored in pair order
        stack.extend(next_frames.into_iter().rev());
    }

    debug!(results = best_trades.len(), "exact input search done");
    Ok(best_trades)
}

/// Up to `max_num_results` trades buying exactly `amount_out` with `token_in`,
/// cheapest input first. Walks the graph backwards from the output token, with
/// the same bounds and dead branch handling as `best_trade_exact_in`.
pub fn best_trade_exact_out(
    pairs: &[Pair],
    token_in: &Token,
    amount_out: &TokenAmount,
    options: BestTradeOptions,
) -> Result<Vec<Trade>> {
    validate(pairs, &options)?;
    let keys: Vec<PairKey> = pairs.iter().map(Pair::key).collect();
    let mut best_trades = Vec::new();
    let mut stack = vec![Frame {
        amount: amount_out.clone(),
        hops: Vec::new(),
        used: HashSet::new(),
    }];

    while let Some(frame) = stack.pop() {
        let mut next_frames = Vec::new();
        for (index, pair) in pairs.iter().enumerate() {
            if !pair.involves_token(frame.amount.token()) || frame.used.contains(&keys[index]) {
                continue;
            }
            let amount_in = match pair.get_input_amount(&frame.amount) {
                Ok(amount_in) => amount_in,
                Err(e) if e.is_quote_failure() => {
                    trace!(pair = ?keys[index], error = %e, "dead branch");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let mut hops = frame.hops.clone();
            hops.push(index);
            if amount_in.token() == token_in {
                // hops were collected from the output side
                let route = Route::new(
                    hops.iter().rev().map(|&i| pairs[i].clone()).collect(),
                    token_in.clone(),
                )?;
                let trade = Trade::new(route, amount_out.clone(), TradeType::ExactOutput)?;
                debug!(
                    hops = trade.route().hops(),
                    input = %trade.input_amount(),
                    "exact output candidate"
                );
                sorted_insert(&mut best_trades, trade, options.max_num_results, trade_comparator);
            } else if hops.len() < options.max_hops {
                let mut used = frame.used.clone();
                used.insert(&keys[index]);
                next_frames.push(Frame {
                    amount: amount_in,
                    hops,
                    used,
                });
            }
        }
        stack.extend(next_frames.into_iter().rev());
    }

    debug!(results = best_trades.len(), "exact output search done");
    Ok(best_trades)
}
