use super::traits::ConfigSection;
use crate::error::EvotradeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    /// Top individuals carried into the next generation unchanged. The
    /// baseline search runs without elitism; leave at 0 to allow the best
    /// individual of a generation to be lost.
    pub elitism_count: usize,
    pub fitness_mode: FitnessMode,
    pub signal_domain: SignalDomainChoice,
    pub seed: Option<u64>,
}

/// How a chromosome is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessMode {
    /// Simplified single-position replay with no cost or slippage, scored
    /// as final capital from a fixed baseline. Cheaper when speed matters.
    CapitalDelta,
    /// Full simulator replay with transaction cost, slippage and drawdown
    /// tracking, scored as ending capital.
    RiskAdjusted,
}

/// Signal alphabet the search operates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDomainChoice {
    /// Pick a domain from the price-change distribution at engine
    /// construction.
    Auto,
    Binary,
    Ternary,
    Continuous,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 200,
            mutation_rate: 0.02,
            crossover_rate: 0.7,
            elitism_count: 0,
            fitness_mode: FitnessMode::RiskAdjusted,
            signal_domain: SignalDomainChoice::Binary,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), EvotradeError> {
        if self.population_size < 2 {
            return Err(EvotradeError::Configuration(
                "population size must be at least 2".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvotradeError::Configuration(
                "mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvotradeError::Configuration(
                "crossover rate must be between 0 and 1".to_string(),
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(EvotradeError::Configuration(
                "elitism count must be smaller than the population size".to_string(),
            ));
        }
        Ok(())
    }
}
