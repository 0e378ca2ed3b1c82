use crate::config::SignalDomainChoice;
use crate::data::PriceSeries;
use crate::engines::metrics::risk;
use rand::Rng;
use std::cmp::Ordering;

/// One candidate trading-signal sequence under evolutionary search.
///
/// Genes are stored as f64 so the binary, ternary and continuous domains
/// share one representation; the domain decides how a gene is drawn,
/// mutated and interpreted. A chromosome has one gene per price-to-price
/// transition and no identity beyond its slot in the population.
pub type Chromosome = Vec<f64>;

/// How a gene translates to a position change during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalAction {
    /// Open a long position if flat.
    Enter,
    /// Liquidate if holding.
    Exit,
    /// Leave the position untouched.
    Hold,
}

/// Signal alphabet resolved for one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDomain {
    /// {0, 1}: 1 opens, 0 closes.
    Binary,
    /// {-1, 0, 1}: 1 opens, -1 closes, 0 holds.
    Ternary,
    /// [-1, 1]: sign decides, zero holds.
    Continuous,
}

impl SignalDomain {
    pub fn from_choice(choice: SignalDomainChoice, series: &PriceSeries) -> Self {
        match choice {
            SignalDomainChoice::Auto => Self::detect(series),
            SignalDomainChoice::Binary => SignalDomain::Binary,
            SignalDomainChoice::Ternary => SignalDomain::Ternary,
            SignalDomainChoice::Continuous => SignalDomain::Continuous,
        }
    }

    /// Pick a domain from the shape of the price-change distribution:
    /// choppy series get the richer ternary alphabet, steady positive drift
    /// the continuous one, anything else stays binary.
    pub fn detect(series: &PriceSeries) -> Self {
        let changes = series.price_changes();
        let volatility = risk::std_dev(&changes);

        let mut sorted = changes.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let median = sorted[sorted.len() / 2];

        let mean = changes.iter().sum::<f64>() / changes.len() as f64;

        if volatility > median {
            SignalDomain::Ternary
        } else if mean > 0.0 {
            SignalDomain::Continuous
        } else {
            SignalDomain::Binary
        }
    }

    pub fn interpret(&self, gene: f64) -> SignalAction {
        match self {
            SignalDomain::Binary => {
                if gene >= 0.5 {
                    SignalAction::Enter
                } else {
                    SignalAction::Exit
                }
            }
            SignalDomain::Ternary | SignalDomain::Continuous => {
                if gene > 0.0 {
                    SignalAction::Enter
                } else if gene < 0.0 {
                    SignalAction::Exit
                } else {
                    SignalAction::Hold
                }
            }
        }
    }

    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            SignalDomain::Binary => rng.gen_range(0..2) as f64,
            SignalDomain::Ternary => rng.gen_range(-1..=1) as f64,
            SignalDomain::Continuous => rng.gen_range(-1.0..=1.0),
        }
    }

    /// Binary genes flip; the richer domains redraw.
    pub fn mutate_gene<R: Rng>(&self, gene: f64, rng: &mut R) -> f64 {
        match self {
            SignalDomain::Binary => 1.0 - gene,
            SignalDomain::Ternary | SignalDomain::Continuous => self.random_gene(rng),
        }
    }
}
