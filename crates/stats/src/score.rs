//! Error scores between a forecast and a reference series.

/// Mean squared error with strict NaN propagation.
///
/// NaN for empty or unequal-length input; NaN values propagate.
pub fn mse(forecast: &[f64], reference: &[f64]) -> f64 {
    if forecast.is_empty() || forecast.len() != reference.len() {
        return f64::NAN;
    }
    let sum: f64 = forecast
        .iter()
        .zip(reference)
        .map(|(f, r)| (f - r) * (f - r))
        .sum();
    sum / forecast.len() as f64
}

/// Root mean squared error, see [`mse`].
pub fn rmse(forecast: &[f64], reference: &[f64]) -> f64 {
    mse(forecast, reference).sqrt()
}
