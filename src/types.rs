use serde::{Deserialize, Serialize};

/// Outcome of replaying one signal sequence against a price series.
///
/// Produced fresh per simulation call and never mutated afterwards. The
/// `returns` vector holds realized per-trade returns in close order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub ending_capital: f64,
    pub returns: Vec<f64>,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub profit_factor: f64,
}

impl SimulationResult {
    /// Summary rounded for reporting.
    pub fn rounded(&self) -> Self {
        Self {
            ending_capital: round_to(self.ending_capital, 2),
            returns: self.returns.iter().map(|r| round_to(*r, 6)).collect(),
            max_drawdown: round_to(self.max_drawdown, 4),
            sharpe_ratio: round_to(self.sharpe_ratio, 4),
            profit_factor: round_to(self.profit_factor, 4),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
