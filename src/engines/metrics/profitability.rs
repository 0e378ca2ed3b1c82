use super::risk::EPSILON;

/// Ratio of summed positive returns to summed absolute negative returns.
///
/// Defined as 1 (break-even) for an empty return list. All-positive input
/// divides by epsilon only and yields a large but finite ratio.
pub fn profit_factor(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 1.0;
    }
    let gross_profit: f64 = returns.iter().filter(|&&r| r > 0.0).sum();
    let gross_loss: f64 = returns.iter().filter(|&&r| r < 0.0).map(|r| r.abs()).sum();
    gross_profit / (gross_loss + EPSILON)
}
