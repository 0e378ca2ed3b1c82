pub mod fitness;
pub mod simulator;

pub use fitness::FitnessEvaluator;
pub use simulator::TradeSimulator;
