pub mod chromosome;
pub mod engine;
pub mod operators;
pub mod population;
pub mod progress;

pub use chromosome::{Chromosome, SignalAction, SignalDomain};
pub use engine::{GeneticEngine, ProgressCallback};
pub use population::Population;
pub use progress::{LogProgressCallback, NoProgress};
