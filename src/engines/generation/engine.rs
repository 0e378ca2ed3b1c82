use crate::config::AppConfig;
use crate::data::PriceSeries;
use crate::engines::evaluation::{FitnessEvaluator, TradeSimulator};
use crate::engines::generation::chromosome::{Chromosome, SignalDomain};
use crate::engines::generation::operators::{self, crossover, mutate, roulette_selection};
use crate::engines::generation::population::Population;
use crate::error::Result;
use crate::types::SimulationResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
}

/// Drives the full evolutionary search over one price series.
///
/// Owns the population and the RNG stream. Generations run sequentially;
/// within a generation the fitness of every individual is evaluated in
/// parallel and joined before selection begins. Evaluation draws no
/// randomness, so seeded runs stay reproducible under parallelism.
pub struct GeneticEngine<'a> {
    series: &'a PriceSeries,
    config: AppConfig,
    domain: SignalDomain,
    evaluator: FitnessEvaluator,
    population: Population,
    rng: StdRng,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<'a> GeneticEngine<'a> {
    pub fn new(series: &'a PriceSeries, config: AppConfig) -> Result<Self> {
        config.validate()?;

        let domain = SignalDomain::from_choice(config.evolution.signal_domain, series);

        let mut rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let population = Population::random(
            config.evolution.population_size,
            series.transitions(),
            domain,
            &mut rng,
        );

        let evaluator = FitnessEvaluator::new(config.evolution.fitness_mode, &config.backtesting);

        Ok(Self {
            series,
            config,
            domain,
            evaluator,
            population,
            rng,
            cancel_flag: None,
        })
    }

    /// Install a cooperative stop signal, checked between generations. A
    /// set flag makes `evolve` return the best chromosome seen so far.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn signal_domain(&self) -> SignalDomain {
        self.domain
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Run the generational loop and return the best chromosome of the
    /// final population.
    pub fn evolve<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<Chromosome> {
        let generations = self.config.evolution.num_generations;
        let mut best_so_far: Option<(Chromosome, f64)> = None;

        for generation in 0..generations {
            callback.on_generation_start(generation);

            let fitness = self.evaluate_population();
            let (best_idx, best_fitness) = best_of(&fitness);

            callback.on_generation_complete(generation, best_fitness);

            if generation + 1 == generations {
                return Ok(self.population.members()[best_idx].clone());
            }

            if best_so_far.as_ref().map_or(true, |(_, f)| best_fitness > *f) {
                best_so_far = Some((self.population.members()[best_idx].clone(), best_fitness));
            }

            if self.is_cancelled() {
                log::info!("evolution stopped after generation {}", generation + 1);
                break;
            }

            self.population = self.next_generation(&fitness);
        }

        // Cancelled mid-run, or a zero-generation run: score what we have.
        match best_so_far {
            Some((chromosome, _)) => Ok(chromosome),
            None => {
                let fitness = self.evaluate_population();
                let (best_idx, _) = best_of(&fitness);
                Ok(self.population.members()[best_idx].clone())
            }
        }
    }

    /// Evolve, then replay the winner through the full simulator and report
    /// its rounded performance summary.
    pub fn backtest<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<SimulationResult> {
        let best = self.evolve(callback)?;
        let simulator = TradeSimulator::new(&self.config.backtesting);
        let result = simulator.run(&best, self.series, self.domain)?;
        Ok(result.rounded())
    }

    fn evaluate_population(&self) -> Vec<f64> {
        // replays are pure and independent; selection waits on the full vector
        self.population
            .members()
            .par_iter()
            .map(|c| self.evaluator.score(c, self.series, self.domain))
            .collect()
    }

    fn next_generation(&mut self, fitness: &[f64]) -> Population {
        let pop_size = self.config.evolution.population_size;
        let crossover_rate = self.config.evolution.crossover_rate;
        let mutation_rate = self.config.evolution.mutation_rate;
        let elitism_count = self.config.evolution.elitism_count;
        let domain = self.domain;

        if operators::is_degenerate(fitness) {
            log::warn!("zero total fitness; selection falling back to uniform sampling");
        }

        let members = self.population.members();
        let mut next: Vec<Chromosome> = Vec::with_capacity(pop_size);

        if elitism_count > 0 {
            let mut ranked: Vec<usize> = (0..members.len()).collect();
            ranked.sort_by(|&a, &b| {
                fitness[b].partial_cmp(&fitness[a]).unwrap_or(Ordering::Equal)
            });
            for &idx in ranked.iter().take(elitism_count) {
                next.push(members[idx].clone());
            }
        }

        // Parent pairs are sampled until the population refills; an odd
        // size drops the trailing surplus offspring.
        while next.len() < pop_size {
            let parent1 = roulette_selection(members, fitness, &mut self.rng);
            let parent2 = roulette_selection(members, fitness, &mut self.rng);

            let (mut child1, mut child2) = crossover(&parent1, &parent2, crossover_rate, &mut self.rng);
            mutate(&mut child1, mutation_rate, domain, &mut self.rng);
            mutate(&mut child2, mutation_rate, domain, &mut self.rng);

            next.push(child1);
            if next.len() < pop_size {
                next.push(child2);
            }
        }

        Population::from_members(next)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .map(|f| f.load(std::sync::atomic::Ordering::Relaxed))
            .unwrap_or(false)
    }
}

fn best_of(fitness: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best = fitness[0];
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > best {
            best_idx = i;
            best = f;
        }
    }
    (best_idx, best)
}
