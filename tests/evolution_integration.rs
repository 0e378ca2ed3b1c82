use evotrade::config::{AppConfig, FitnessMode, SignalDomainChoice};
use evotrade::engines::generation::{GeneticEngine, ProgressCallback};
use evotrade::{EvotradeError, NoProgress, PriceSeries};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Counts callback invocations for loop-shape assertions.
struct CountingCallback {
    started: usize,
    completed: usize,
}

impl ProgressCallback for CountingCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        self.started += 1;
    }

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64) {
        self.completed += 1;
    }
}

fn rising_series() -> PriceSeries {
    // 101 points, 100..=200
    PriceSeries::new((100..=200).map(|p| p as f64).collect()).unwrap()
}

fn test_config(pop_size: usize, generations: usize, seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.evolution.population_size = pop_size;
    config.evolution.num_generations = generations;
    config.evolution.seed = Some(seed);
    config
}

#[test]
fn test_rising_series_finds_profitable_strategy() {
    let series = rising_series();
    let config = test_config(10, 5, 42);

    let best = evotrade::evolve(&series, &config, None).unwrap();
    assert_eq!(best.len(), 100);

    // a monotonically rising series always has a profitable buy-then-hold
    // strategy available to the search
    let result = evotrade::backtest(&series, &config, None).unwrap();
    assert!(
        result.ending_capital >= config.backtesting.initial_capital,
        "ending capital {} below initial",
        result.ending_capital
    );
}

#[test]
fn test_flat_two_point_series_breaks_even() {
    let series = PriceSeries::new(vec![100.0, 100.0]).unwrap();
    let config = test_config(10, 5, 42);

    let best = evotrade::evolve(&series, &config, None).unwrap();
    assert_eq!(best.len(), 1);

    // no profitable round trip exists; the best strategy stays within
    // friction distance of the initial capital
    let result = evotrade::backtest(&series, &config, None).unwrap();
    let initial = config.backtesting.initial_capital;
    assert!((result.ending_capital - initial).abs() <= initial * 0.002);
}

#[test]
fn test_single_point_series_is_invalid_input() {
    let result = PriceSeries::new(vec![100.0]);
    assert!(matches!(result, Err(EvotradeError::InvalidInput(_))));
}

#[test]
fn test_population_size_is_invariant_across_generations() {
    let series = rising_series();
    let config = test_config(12, 4, 7);

    let mut engine = GeneticEngine::new(&series, config).unwrap();
    assert_eq!(engine.population().len(), 12);
    assert!(engine.population().members().iter().all(|c| c.len() == 100));

    engine.evolve(&mut NoProgress).unwrap();

    assert_eq!(engine.population().len(), 12);
    assert!(engine.population().members().iter().all(|c| c.len() == 100));
}

#[test]
fn test_odd_population_size_is_preserved() {
    let series = rising_series();
    let config = test_config(11, 3, 5);

    let mut engine = GeneticEngine::new(&series, config).unwrap();
    engine.evolve(&mut NoProgress).unwrap();

    assert_eq!(engine.population().len(), 11);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let series = rising_series();
    let config = test_config(8, 4, 1234);

    let first = evotrade::evolve(&series, &config, None).unwrap();
    let second = evotrade::evolve(&series, &config, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_seed_argument_overrides_config() {
    let series = rising_series();
    let config = test_config(8, 4, 1);

    let seeded = evotrade::evolve(&series, &config, Some(99)).unwrap();
    let explicit = evotrade::evolve(&series, &test_config(8, 4, 99), None).unwrap();

    assert_eq!(seeded, explicit);
}

#[test]
fn test_cancellation_returns_best_so_far() {
    let series = rising_series();
    let config = test_config(10, 50, 42);

    let flag = Arc::new(AtomicBool::new(true));
    let mut engine = GeneticEngine::new(&series, config).unwrap().with_cancel_flag(flag.clone());

    let mut callback = CountingCallback { started: 0, completed: 0 };
    let best = engine.evolve(&mut callback).unwrap();

    assert_eq!(best.len(), 100);
    // the flag was set before the run; only the first generation evaluates
    assert_eq!(callback.started, 1);
    assert_eq!(callback.completed, 1);
    assert!(flag.load(Ordering::Relaxed));
}

#[test]
fn test_callback_sees_every_generation() {
    let series = rising_series();
    let config = test_config(6, 7, 3);

    let mut engine = GeneticEngine::new(&series, config).unwrap();
    let mut callback = CountingCallback { started: 0, completed: 0 };
    engine.evolve(&mut callback).unwrap();

    assert_eq!(callback.started, 7);
    assert_eq!(callback.completed, 7);
}

#[test]
fn test_capital_delta_mode_evolves() {
    let series = rising_series();
    let mut config = test_config(10, 5, 42);
    config.evolution.fitness_mode = FitnessMode::CapitalDelta;

    let best = evotrade::evolve(&series, &config, None).unwrap();
    assert_eq!(best.len(), 100);
}

#[test]
fn test_ternary_domain_evolves() {
    let series = rising_series();
    let mut config = test_config(10, 5, 42);
    config.evolution.signal_domain = SignalDomainChoice::Ternary;

    let best = evotrade::evolve(&series, &config, None).unwrap();
    assert_eq!(best.len(), 100);
    assert!(best.iter().all(|&g| g == -1.0 || g == 0.0 || g == 1.0));
}

#[test]
fn test_auto_domain_resolves_before_evolving() {
    let series = rising_series();
    let mut config = test_config(6, 2, 9);
    config.evolution.signal_domain = SignalDomainChoice::Auto;

    let engine = GeneticEngine::new(&series, config).unwrap();
    // a steadily rising series resolves to a concrete domain and the
    // population is drawn from it
    assert_eq!(engine.population().len(), 6);
}

#[test]
fn test_elitism_flag_keeps_population_shape() {
    let series = rising_series();
    let mut config = test_config(10, 5, 21);
    config.evolution.elitism_count = 2;

    let mut engine = GeneticEngine::new(&series, config).unwrap();
    let best = engine.evolve(&mut NoProgress).unwrap();

    assert_eq!(best.len(), 100);
    assert_eq!(engine.population().len(), 10);
}

#[test]
fn test_invalid_config_fails_construction() {
    let series = rising_series();

    let mut config = AppConfig::default();
    config.evolution.population_size = 0;
    assert!(GeneticEngine::new(&series, config).is_err());

    let mut config = AppConfig::default();
    config.backtesting.initial_capital = -5.0;
    assert!(GeneticEngine::new(&series, config).is_err());
}

#[test]
fn test_zero_generation_run_scores_initial_population() {
    let series = rising_series();
    let config = test_config(6, 0, 11);

    let best = evotrade::evolve(&series, &config, None).unwrap();
    assert_eq!(best.len(), 100);
}

#[test]
fn test_backtest_summary_is_rounded() {
    let series = rising_series();
    let config = test_config(10, 3, 42);

    let result = evotrade::backtest(&series, &config, None).unwrap();

    let cents = result.ending_capital * 100.0;
    assert!((cents - cents.round()).abs() < 1e-9);
    assert!(result.max_drawdown >= 0.0);
    assert!(result.profit_factor >= 0.0);
}
