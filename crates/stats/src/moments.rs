//! Means, variances and percentiles.

/// Mean of the finite values in `data`.
///
/// NaN when no finite value is present (including the empty slice).
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Variance of the finite values in `data` with `n - ddof` denominator.
///
/// NaN when fewer than `ddof + 1` finite values are present.
pub fn nan_variance(data: &[f64], ddof: usize) -> f64 {
    let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    let n = finite.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = finite.iter().sum::<f64>() / n as f64;
    finite.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - ddof) as f64
}

/// Standard deviation of the finite values in `data`, see [`nan_variance`].
pub fn nan_std(data: &[f64], ddof: usize) -> f64 {
    nan_variance(data, ddof).sqrt()
}

/// Linear-interpolation quantile (R type 7, numpy's default percentile).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile (`pct` in 0..=100) of unsorted data.
///
/// NaN values sort last and therefore dominate the upper percentiles; pass
/// finite data when that matters. Returns NaN for an empty slice.
pub fn percentile(data: &[f64], pct: f64) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    quantile_type7(&sorted, (pct / 100.0).clamp(0.0, 1.0))
}
