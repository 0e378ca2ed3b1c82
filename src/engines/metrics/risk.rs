/// Guard against division by zero in ratio metrics.
pub const EPSILON: f64 = 1e-6;

/// Sharpe ratio over realized per-trade returns.
///
/// Empty input is defined as 0 rather than an error; the evolutionary loop
/// must always receive a comparable number.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    (mean - risk_free_rate) / (std_dev(returns) + EPSILON)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
