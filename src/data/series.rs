use crate::error::{EvotradeError, Result};

/// Ordered, time-ascending close prices for one asset.
///
/// The sole market input to the engine. Immutable once built; the engine
/// borrows it for its whole run. At least two points are required so that a
/// signal sequence of length `transitions()` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        if prices.len() < 2 {
            return Err(EvotradeError::InvalidInput(format!(
                "price series needs at least 2 points, got {}",
                prices.len()
            )));
        }
        if let Some(p) = prices.iter().find(|p| !p.is_finite()) {
            return Err(EvotradeError::InvalidInput(format!(
                "price series contains non-finite price {}",
                p
            )));
        }
        Ok(Self { prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.prices.get(index).copied()
    }

    /// Last known price, used for forced liquidation at end of series.
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Number of price-to-price transitions; the chromosome length.
    pub fn transitions(&self) -> usize {
        self.prices.len() - 1
    }

    /// First differences of the series.
    pub fn price_changes(&self) -> Vec<f64> {
        self.prices.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
