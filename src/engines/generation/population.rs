use super::chromosome::{Chromosome, SignalDomain};
use super::operators::random_chromosome;
use rand::Rng;

/// Fixed-size ordered set of chromosomes, replaced wholesale every
/// generation. Individuals carry no identity across generations.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Chromosome>,
}

impl Population {
    pub fn random<R: Rng>(
        size: usize,
        genome_length: usize,
        domain: SignalDomain,
        rng: &mut R,
    ) -> Self {
        Self {
            members: (0..size)
                .map(|_| random_chromosome(genome_length, domain, rng))
                .collect(),
        }
    }

    pub fn from_members(members: Vec<Chromosome>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }
}
