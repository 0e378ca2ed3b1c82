use super::engine::ProgressCallback;

/// Callback that reports nothing.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64) {}
}

/// Reports generation milestones through the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        log::info!(
            "generation {} complete, best fitness {:.4}",
            generation + 1,
            best_fitness
        );
    }
}
