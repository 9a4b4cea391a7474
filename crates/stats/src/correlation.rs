//! Pearson correlation and its effective-sample-size significance.

use statrs::function::beta::checked_beta_reg;

/// Pearson correlation coefficient over finite pairs.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 2 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some((sum_xy / denom).clamp(-1.0, 1.0))
}

/// Pearson correlation with strict NaN propagation.
///
/// NaN if the slices differ in length, if any value is non-finite, or if
/// [`pearson_correlation`] is undefined.
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return f64::NAN;
    }
    pearson_correlation(x, y).unwrap_or(f64::NAN)
}

/// Lag-1 autocorrelation: Pearson r between `x[..n-1]` and `x[1..]`.
pub fn lag1_autocorrelation(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return f64::NAN;
    }
    pearson_r(&x[..x.len() - 1], &x[1..])
}

/// Effective number of independent pairs given the serial correlation of
/// both series: `floor(n (1 - ra rb) / (1 + ra rb))`, capped at `n`.
///
/// NaN when either autocorrelation is undefined, e.g. for a constant series.
pub fn effective_sample_size(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let ra = lag1_autocorrelation(a);
    let rb = lag1_autocorrelation(b);
    let n_eff = (n * (1.0 - ra * rb) / (1.0 + ra * rb)).floor();
    if n_eff > n { n } else { n_eff }
}

/// Two-sided p-value of the Pearson correlation between `a` and `b`, using a
/// Student-t test on `n_eff - 2` degrees of freedom.
///
/// Evaluated as the regularised incomplete beta function
/// `I_x(dof / 2, 1 / 2)` with `x = dof / (dof + t^2)`. NaN when the
/// correlation is undefined or `dof <= 0`.
pub fn pearson_r_eff_p_value(a: &[f64], b: &[f64]) -> f64 {
    let r = pearson_r(a, b);
    if r.is_nan() {
        return f64::NAN;
    }
    let dof = effective_sample_size(a, b) - 2.0;
    if dof.is_nan() || dof <= 0.0 {
        return f64::NAN;
    }
    let t_squared = r * r * (dof / ((1.0 - r) * (1.0 + r)));
    let x = (dof / (dof + t_squared)).min(1.0);
    checked_beta_reg(0.5 * dof, 0.5, x).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pearson_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_correlation_insufficient() {
        assert!(pearson_correlation(&[1.0], &[3.0]).is_none());
    }

    #[test]
    fn test_pearson_correlation_constant() {
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_pearson_correlation_with_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, f64::NAN, 8.0, 10.0];
        // Finite pairs: (1,2), (4,8), (5,10), perfectly linear
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_r_propagates_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!(pearson_r(&x, &y).is_nan());
    }

    #[test]
    fn test_pearson_r_anticorrelated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [4.0, 3.0, 2.0, 1.0];
        assert_relative_eq!(pearson_r(&x, &y), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_effective_sample_size_white_noise_like() {
        // Alternating series: lag-1 autocorrelation is -1 for both, so
        // ra * rb = 1 and n_eff collapses to 0.
        let a = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        assert_abs_diff_eq!(effective_sample_size(&a, &a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_effective_sample_size_capped_at_n() {
        // Opposite-signed autocorrelations inflate the ratio above n.
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        assert_abs_diff_eq!(effective_sample_size(&a, &b), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_effective_sample_size_undefined_autocorrelation() {
        let a = [3.0, 3.0, 3.0, 1.0, 2.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(lag1_autocorrelation(&[3.0, 3.0, 3.0]).is_nan());
        assert!(effective_sample_size(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(effective_sample_size(&a, &b).is_finite());
    }

    #[test]
    fn test_p_value_nan_when_sample_size_undefined() {
        // [5, 5, 5, 5, 1]: the leading lag window is constant, so the
        // lag-1 autocorrelation is undefined while r itself is not.
        let a = [5.0, 5.0, 5.0, 5.0, 1.0];
        let b = [1.0, 2.0, 3.0, 4.0, 0.0];
        assert!(pearson_r(&a, &b).is_finite());
        assert!(lag1_autocorrelation(&a).is_nan());
        assert!(pearson_r_eff_p_value(&a, &b).is_nan());
    }

    #[test]
    fn test_p_value_perfect_correlation_is_zero() {
        let a = [0.3, -1.2, 0.8, 2.1, -0.4, 1.5, -0.9, 0.1];
        let b: Vec<f64> = a.iter().map(|v| 2.0 * v + 1.0).collect();
        let p = pearson_r_eff_p_value(&a, &b);
        assert_abs_diff_eq!(p, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_p_value_in_unit_interval() {
        let a = [0.3, -1.2, 0.8, 2.1, -0.4, 1.5, -0.9, 0.1, 0.7, -0.2];
        let b = [0.1, -0.8, 1.1, 1.2, 0.3, 0.9, -1.4, 0.6, 0.2, 0.4];
        let p = pearson_r_eff_p_value(&a, &b);
        assert!(p > 0.0 && p < 1.0, "p = {p}");
    }

    #[test]
    fn test_p_value_too_short_is_nan() {
        assert!(pearson_r_eff_p_value(&[1.0, 2.0], &[2.0, 1.0]).is_nan());
    }
}
