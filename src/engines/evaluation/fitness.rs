use super::simulator::TradeSimulator;
use crate::config::{BacktestingConfig, FitnessMode};
use crate::data::PriceSeries;
use crate::engines::generation::chromosome::{Chromosome, SignalAction, SignalDomain};

/// Baseline capital for the simplified capital-delta replay.
const CAPITAL_DELTA_BASELINE: f64 = 1000.0;

/// Maps a chromosome to a scalar fitness.
///
/// Total over every legal chromosome: a simulator failure scores
/// `f64::NEG_INFINITY` instead of propagating into the evolutionary loop.
pub struct FitnessEvaluator {
    mode: FitnessMode,
    simulator: TradeSimulator,
}

impl FitnessEvaluator {
    pub fn new(mode: FitnessMode, backtesting: &BacktestingConfig) -> Self {
        Self {
            mode,
            simulator: TradeSimulator::new(backtesting),
        }
    }

    pub fn score(
        &self,
        chromosome: &Chromosome,
        series: &PriceSeries,
        domain: SignalDomain,
    ) -> f64 {
        if chromosome.len() != series.transitions() {
            return f64::NEG_INFINITY;
        }

        match self.mode {
            FitnessMode::CapitalDelta => capital_delta(chromosome, series, domain),
            FitnessMode::RiskAdjusted => self
                .simulator
                .run(chromosome, series, domain)
                .map(|r| r.ending_capital)
                .unwrap_or(f64::NEG_INFINITY),
        }
    }
}

/// Single-position replay with no cost or slippage from a fixed baseline.
/// Cheaper than the full simulator when evaluation speed dominates.
fn capital_delta(chromosome: &Chromosome, series: &PriceSeries, domain: SignalDomain) -> f64 {
    let prices = series.prices();
    let mut capital = CAPITAL_DELTA_BASELINE;
    let mut position = 0.0;

    for (i, &gene) in chromosome.iter().enumerate() {
        match domain.interpret(gene) {
            SignalAction::Enter if position == 0.0 => {
                position = capital / prices[i];
                capital = 0.0;
            }
            SignalAction::Exit if position > 0.0 => {
                capital = position * prices[i];
                position = 0.0;
            }
            _ => {}
        }
    }

    if position > 0.0 {
        capital = position * series.last();
    }

    capital
}
