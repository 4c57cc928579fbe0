// Fees are expressed in basis points out of FEE_DENOMINATOR
pub const FEE_DENOMINATOR: u32 = 10_000;
pub const DEFAULT_SWAP_FEE: u32 = 25; // 0.25%

// The protocol receives 1 / (denominator + 1) of the collected swap fee, 0 disables it
pub const DEFAULT_PROTOCOL_FEE_DENOMINATOR: u32 = 5;

pub const DEFAULT_MAX_HOPS: usize = 3;
pub const DEFAULT_MAX_NUM_RESULTS: usize = 3;
