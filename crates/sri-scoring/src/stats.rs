//! Normal-distribution helpers. All functions are total over finite input
//! and never return NaN or infinity.

/// Standard normal CDF via the Abramowitz–Stegun rational approximation
/// (7.1.26); absolute error below 1.5e-7.
pub fn normal_cdf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Standardized deviation from `mean` in units of `std_dev`. A zero
/// standard deviation yields 0, never a division by zero.
pub fn z_score(raw: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (raw - mean) / std_dev
}

/// Percentile for a z-score: CDF × 100, clamped to [0, 100].
pub fn percentile_of(z: f64) -> f64 {
    (normal_cdf(z) * 100.0).clamp(0.0, 100.0)
}
