use anyhow::Result;
use evotrade::config::{AppConfig, ConfigManager};
use evotrade::engines::evaluation::TradeSimulator;
use evotrade::engines::generation::{GeneticEngine, ProgressCallback};
use evotrade::execution::{Platform, TradeOrder};
use evotrade::PriceSeries;
use std::env;

/// CLI progress callback with formatted output
struct CliProgressCallback {
    start_time: std::time::Instant,
}

impl ProgressCallback for CliProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        let elapsed = self.start_time.elapsed();
        println!(
            "Generation {}: Best = {:.2}, Time = {:.2}s",
            generation + 1,
            best_fitness,
            elapsed.as_secs_f64()
        );
    }
}

/// Synthetic trending series with a sine overlay, stands in for real
/// market data.
fn synthetic_prices(points: usize) -> Vec<f64> {
    (0..points)
        .map(|i| {
            let trend = i as f64 * 0.1;
            let noise = (i as f64 * 0.5).sin() * 5.0;
            100.0 + trend + noise
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Evotrade Evolution Demo ===\n");

    let args: Vec<String> = env::args().collect();
    let population_size = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(50);
    let num_generations = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);
    let config_path = args.get(3).cloned();

    let manager = ConfigManager::new();
    if let Some(path) = &config_path {
        manager.load_from_file(path)?;
        println!("Loaded config from {}", path);
    }

    let mut config: AppConfig = manager.get();
    config.evolution.population_size = population_size;
    config.evolution.num_generations = num_generations;
    config.evolution.seed = Some(42);
    config.validate()?;

    println!("Configuration:");
    println!("  Population size: {}", population_size);
    println!("  Generations: {}", num_generations);
    println!("  Fitness mode: {:?}", config.evolution.fitness_mode);
    println!();

    let series = PriceSeries::new(synthetic_prices(252))?;
    println!("Loaded {} price points\n", series.len());

    let mut engine = GeneticEngine::new(&series, config.clone())?;
    let mut callback = CliProgressCallback {
        start_time: std::time::Instant::now(),
    };

    println!("Starting evolution...");
    let best = engine.evolve(&mut callback)?;
    println!("\nBest strategy has {} signals", best.len());

    let simulator = TradeSimulator::new(&config.backtesting);
    let summary = simulator.run(&best, &series, engine.signal_domain())?.rounded();
    println!("\nBacktest summary:");
    println!("  Ending capital: {:.2}", summary.ending_capital);
    println!("  Sharpe ratio:   {:.4}", summary.sharpe_ratio);
    println!("  Max drawdown:   {:.4}", summary.max_drawdown);
    println!("  Profit factor:  {:.4}", summary.profit_factor);
    println!("  Trades:         {}", summary.returns.len());

    let domain = engine.signal_domain();
    match TradeOrder::from_strategy("BTC-USD", &best, domain, Platform::Coinbase, 100.0) {
        Some(order) => {
            println!("\nMost recent signal maps to order:");
            println!("{}", serde_json::to_string_pretty(&order.to_payload())?);
        }
        None => println!("\nMost recent signal is a hold; no order emitted"),
    }

    Ok(())
}
