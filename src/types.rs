use serde::{Deserialize, Serialize};

/// Router settings, stored as TOML. Fees are in units of `fee_denominator`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    pub fee_denominator: u32,
    pub default_swap_fee: u32,
    pub default_protocol_fee_denominator: u32,
    pub max_hops: usize,
    pub max_num_results: usize,
}
