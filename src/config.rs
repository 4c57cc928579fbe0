use super::core::constants::{
    DEFAULT_MAX_HOPS, DEFAULT_MAX_NUM_RESULTS, DEFAULT_PROTOCOL_FEE_DENOMINATOR, DEFAULT_SWAP_FEE,
    FEE_DENOMINATOR,
};
use super::core::pair::FeeSchedule;
use super::core::paths::BestTradeOptions;
use super::types::RouterConfig;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fee_denominator: FEE_DENOMINATOR,
            default_swap_fee: DEFAULT_SWAP_FEE,
            default_protocol_fee_denominator: DEFAULT_PROTOCOL_FEE_DENOMINATOR,
            max_hops: DEFAULT_MAX_HOPS,
            max_num_results: DEFAULT_MAX_NUM_RESULTS,
        }
    }
}

impl RouterConfig {
    // Loads the config at `path`, writing the defaults there first if the file does not exist
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let config: Self = confy::load_path(&path)
            .with_context(|| format!("Couldn't load router config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.fee_schedule()
            .validate()
            .map_err(|e| anyhow!("Invalid fee settings: {e}"))?;
        if self.max_hops == 0 {
            return Err(anyhow!("max_hops must be at least 1"));
        }
        if self.max_num_results == 0 {
            return Err(anyhow!("max_num_results must be at least 1"));
        }
        Ok(())
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(self.default_swap_fee, self.default_protocol_fee_denominator)
            .with_fee_denominator(self.fee_denominator)
    }

    pub fn best_trade_options(&self) -> BestTradeOptions {
        BestTradeOptions {
            max_num_results: self.max_num_results,
            max_hops: self.max_hops,
        }
    }
}
