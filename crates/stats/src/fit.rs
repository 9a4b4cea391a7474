//! Ordinary least-squares straight-line fit.

/// A fitted line `y = intercept + slope * x`.
///
/// Stored in centred form so evaluation near the data stays exact even when
/// `x` carries large offsets (day ordinals, years).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    x_mean: f64,
    y_mean: f64,
    slope: f64,
}

impl LinearFit {
    /// Slope of the fitted line.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Value of the fitted line at `x = 0`.
    pub fn intercept(&self) -> f64 {
        self.y_mean - self.slope * self.x_mean
    }

    /// Evaluates the line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.y_mean + self.slope * (x - self.x_mean)
    }
}

/// Fits a degree-1 polynomial to the finite `(x, y)` pairs.
///
/// Returns `None` if fewer than 2 finite pairs remain or all `x` are equal.
/// With exactly 2 points the line passes through both.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
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
    let x_mean = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let y_mean = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let (sxy, sxx) = pairs.iter().fold((0.0, 0.0), |(sxy, sxx), &(xi, yi)| {
        let dx = xi - x_mean;
        (sxy + dx * (yi - y_mean), sxx + dx * dx)
    });
    if sxx == 0.0 {
        return None;
    }

    Some(LinearFit {
        x_mean,
        y_mean,
        slope: sxy / sxx,
    })
}
