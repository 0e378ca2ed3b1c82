use super::chromosome::{Chromosome, SignalDomain};
use rand::Rng;

/// Roulette wheel selection: probability proportional to fitness.
///
/// Fitness is clamped to non-negative before the spin. A population whose
/// clamped total is zero falls back to a uniform draw; that is a
/// degenerate-case policy, not a failure. The same individual may be drawn
/// on consecutive calls.
pub fn roulette_selection<R: Rng>(
    population: &[Chromosome],
    fitness: &[f64],
    rng: &mut R,
) -> Chromosome {
    let total: f64 = fitness.iter().map(|f| f.max(0.0)).sum();

    if total <= 0.0 {
        return population[rng.gen_range(0..population.len())].clone();
    }

    let mut spin = rng.gen::<f64>() * total;

    for (chromosome, f) in population.iter().zip(fitness) {
        spin -= f.max(0.0);
        if spin <= 0.0 {
            return chromosome.clone();
        }
    }

    // Fallback
    population[population.len() - 1].clone()
}

/// Whether the clamped fitness mass of a population is zero, forcing the
/// uniform-sampling fallback.
pub fn is_degenerate(fitness: &[f64]) -> bool {
    fitness.iter().map(|f| f.max(0.0)).sum::<f64>() <= 0.0
}

/// Single-point crossover applied with probability `crossover_rate`: a cut
/// point is drawn uniformly in [1, len - 1] and tails are swapped.
/// Otherwise the offspring are exact copies of the parents. Chromosomes of
/// length 1 have no valid cut point and always copy.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    crossover_rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let len = parent1.len().min(parent2.len());
    if len <= 1 || rng.gen::<f64>() >= crossover_rate {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[point..].copy_from_slice(&parent2[point..]);
    child2[point..].copy_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Per-gene independent mutation with probability `mutation_rate`, applied
/// to every offspring after crossover.
pub fn mutate<R: Rng>(
    chromosome: &mut Chromosome,
    mutation_rate: f64,
    domain: SignalDomain,
    rng: &mut R,
) {
    for gene in chromosome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *gene = domain.mutate_gene(*gene, rng);
        }
    }
}

/// Draw a fresh chromosome from the signal domain.
pub fn random_chromosome<R: Rng>(
    length: usize,
    domain: SignalDomain,
    rng: &mut R,
) -> Chromosome {
    (0..length).map(|_| domain.random_gene(rng)).collect()
}
