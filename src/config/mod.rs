pub mod backtesting;
pub mod evolution;
pub mod manager;
pub mod traits;

pub use backtesting::BacktestingConfig;
pub use evolution::{EvolutionConfig, FitnessMode, SignalDomainChoice};
pub use manager::{AppConfig, ConfigManager};
