use crate::config::BacktestingConfig;
use crate::data::PriceSeries;
use crate::engines::generation::chromosome::{Chromosome, SignalAction, SignalDomain};
use crate::engines::metrics::{profitability, risk};
use crate::error::{EvotradeError, Result};
use crate::types::SimulationResult;

/// Deterministically replays one signal sequence against a price series.
///
/// Long-only single-position model: all capital converts into the position
/// on entry, everything liquidates on exit. Identical inputs always produce
/// bit-identical results.
pub struct TradeSimulator {
    initial_capital: f64,
    transaction_cost: f64,
    slippage: f64,
    risk_free_rate: f64,
}

impl TradeSimulator {
    pub fn new(config: &BacktestingConfig) -> Self {
        Self {
            initial_capital: config.initial_capital,
            transaction_cost: config.transaction_cost,
            slippage: config.slippage,
            risk_free_rate: config.risk_free_rate,
        }
    }

    pub fn run(
        &self,
        chromosome: &Chromosome,
        series: &PriceSeries,
        domain: SignalDomain,
    ) -> Result<SimulationResult> {
        if chromosome.len() != series.transitions() {
            return Err(EvotradeError::InvalidInput(format!(
                "chromosome length {} does not match {} price transitions",
                chromosome.len(),
                series.transitions()
            )));
        }

        let prices = series.prices();
        let mut capital = self.initial_capital;
        let mut position = 0.0;
        let mut peak_capital = capital;
        let mut max_drawdown = 0.0f64;
        let mut returns = Vec::new();

        for (i, &gene) in chromosome.iter().enumerate() {
            let price = prices[i];

            match domain.interpret(gene) {
                SignalAction::Enter if position == 0.0 => {
                    // buying pays the slippage premium
                    let execution_price = price * (1.0 + self.slippage);
                    position = capital * (1.0 - self.transaction_cost) / execution_price;
                    capital *= 1.0 - self.transaction_cost;
                }
                SignalAction::Exit if position > 0.0 => {
                    let execution_price = price * (1.0 - self.slippage);
                    let previous_capital = capital;
                    capital = position * execution_price * (1.0 - self.transaction_cost);
                    returns.push((capital - previous_capital) / previous_capital);
                    position = 0.0;
                }
                _ => {}
            }

            if capital > peak_capital {
                peak_capital = capital;
            }
            let drawdown = (peak_capital - capital) / peak_capital;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        // A position still open after the last signal closes at the final
        // price with no slippage or cost, so unrealized gains are counted.
        if position > 0.0 {
            let previous_capital = capital;
            capital = position * series.last();
            returns.push((capital - previous_capital) / previous_capital);
        }

        let sharpe_ratio = risk::sharpe_ratio(&returns, self.risk_free_rate);
        let profit_factor = profitability::profit_factor(&returns);

        Ok(SimulationResult {
            ending_capital: capital,
            returns,
            max_drawdown,
            sharpe_ratio,
            profit_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> TradeSimulator {
        TradeSimulator::new(&BacktestingConfig::default())
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let series = PriceSeries::new(vec![100.0, 101.0, 102.0]).unwrap();
        let chromosome = vec![1.0];

        let result = simulator().run(&chromosome, &series, SignalDomain::Binary);
        assert!(matches!(result, Err(EvotradeError::InvalidInput(_))));
    }

    #[test]
    fn test_no_trades_keeps_capital() {
        let series = PriceSeries::new(vec![100.0, 101.0, 102.0]).unwrap();
        let chromosome = vec![0.0, 0.0];

        let result = simulator().run(&chromosome, &series, SignalDomain::Binary).unwrap();
        assert_eq!(result.ending_capital, 10_000.0);
        assert!(result.returns.is_empty());
        assert_eq!(result.max_drawdown, 0.0);
        assert_eq!(result.sharpe_ratio, 0.0);
        assert_eq!(result.profit_factor, 1.0);
    }
}
