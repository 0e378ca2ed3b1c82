//! Evolutionary search for trading-signal sequences, scored by a
//! deterministic trade simulator over a historical price series.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod execution;
pub mod types;

pub use config::{AppConfig, BacktestingConfig, EvolutionConfig, FitnessMode, SignalDomainChoice};
pub use data::PriceSeries;
pub use engines::generation::{Chromosome, GeneticEngine, NoProgress, ProgressCallback, SignalDomain};
pub use error::{EvotradeError, Result};
pub use types::SimulationResult;

/// Evolve the best signal sequence for a price series. A `seed` overrides
/// the one carried in the config.
pub fn evolve(series: &PriceSeries, config: &AppConfig, seed: Option<u64>) -> Result<Chromosome> {
    let mut config = config.clone();
    if seed.is_some() {
        config.evolution.seed = seed;
    }
    GeneticEngine::new(series, config)?.evolve(&mut NoProgress)
}

/// Evolve, then report the winning strategy's full performance summary.
pub fn backtest(
    series: &PriceSeries,
    config: &AppConfig,
    seed: Option<u64>,
) -> Result<SimulationResult> {
    let mut config = config.clone();
    if seed.is_some() {
        config.evolution.seed = seed;
    }
    GeneticEngine::new(series, config)?.backtest(&mut NoProgress)
}
