use super::traits::ConfigSection;
use crate::error::EvotradeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestingConfig {
    pub initial_capital: f64,
    /// Fractional fee charged on each entry and exit.
    pub transaction_cost: f64,
    /// Fractional price degradation applied to execution prices.
    pub slippage: f64,
    pub risk_free_rate: f64,
}

impl Default for BacktestingConfig {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            transaction_cost: 0.001,
            slippage: 0.0005,
            risk_free_rate: 0.0,
        }
    }
}

impl ConfigSection for BacktestingConfig {
    fn section_name() -> &'static str {
        "backtesting"
    }

    fn validate(&self) -> Result<(), EvotradeError> {
        if !(self.initial_capital.is_finite() && self.initial_capital > 0.0) {
            return Err(EvotradeError::Configuration(
                "initial capital must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.transaction_cost) {
            return Err(EvotradeError::Configuration(
                "transaction cost must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.slippage) {
            return Err(EvotradeError::Configuration(
                "slippage must be in [0, 1)".to_string(),
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(EvotradeError::Configuration(
                "risk-free rate must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
