//! Bootstrap confidence interval for the correlation of two paired series.

use rand::Rng;
use skillcast_stats::{pearson_r, percentile};

use crate::error::SkillError;

/// Settings for [`bootstrap_correlation_ci`].
///
/// # Example
///
/// ```
/// use skillcast_skill::BootstrapConfig;
///
/// let config = BootstrapConfig::new().with_nboots(500).with_conf(90.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    nboots: usize,
    conf: f64,
}

impl BootstrapConfig {
    /// Defaults: `nboots = 1000`, `conf = 95.0`.
    pub fn new() -> Self {
        Self {
            nboots: 1000,
            conf: 95.0,
        }
    }

    /// Sets the number of bootstrap resamples.
    pub fn with_nboots(mut self, nboots: usize) -> Self {
        self.nboots = nboots;
        self
    }

    /// Sets the confidence level in percent.
    pub fn with_conf(mut self, conf: f64) -> Self {
        self.conf = conf;
        self
    }

    pub fn nboots(&self) -> usize {
        self.nboots
    }

    pub fn conf(&self) -> f64 {
        self.conf
    }

    /// Checks `nboots >= 1` and `0 < conf <= 100`.
    pub fn validate(&self) -> Result<(), SkillError> {
        if self.nboots == 0 {
            return Err(SkillError::InvalidConfig {
                reason: "nboots must be >= 1".to_string(),
            });
        }
        if !self.conf.is_finite() || self.conf <= 0.0 || self.conf > 100.0 {
            return Err(SkillError::InvalidConfig {
                reason: format!("conf must be in (0, 100], got {}", self.conf),
            });
        }
        Ok(())
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower and upper bound of a correlation confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Percentile bootstrap interval on the Pearson correlation of `ts1` and `ts2`.
///
/// Draws `nboots * n` indices uniformly from `0..n`, laid out as `n` rows by
/// `nboots` columns; each column is one resample of the year pairs. The
/// bounds are the `(100 - conf) / 2` and `conf + (100 - conf) / 2`
/// percentiles of the per-column correlations. Columns whose correlation is
/// undefined (a resample of one repeated year) are left out.
///
/// Passing a seeded generator makes the interval reproducible.
///
/// # Errors
///
/// - [`SkillError::LengthMismatch`] if the series differ in length.
/// - [`SkillError::InsufficientData`] if they hold fewer than 2 values.
/// - [`SkillError::InvalidConfig`] if `config` does not validate.
#[tracing::instrument(skip_all, fields(n = ts1.len(), nboots = config.nboots()))]
pub fn bootstrap_correlation_ci<R: Rng + ?Sized>(
    ts1: &[f64],
    ts2: &[f64],
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<ConfidenceInterval, SkillError> {
    if ts1.len() != ts2.len() {
        return Err(SkillError::LengthMismatch {
            field: "ts2".to_string(),
            expected: ts1.len(),
            got: ts2.len(),
        });
    }
    let n = ts1.len();
    if n < 2 {
        return Err(SkillError::InsufficientData { n, min: 2 });
    }
    config.validate()?;

    let nboots = config.nboots();
    let draws: Vec<usize> = (0..nboots * n).map(|_| rng.random_range(0..n)).collect();

    let mut x = vec![0.0; n];
    let mut y = vec![0.0; n];
    let correlations: Vec<f64> = (0..nboots)
        .filter_map(|col| {
            for row in 0..n {
                let idx = draws[row * nboots + col];
                x[row] = ts1[idx];
                y[row] = ts2[idx];
            }
            let r = pearson_r(&x, &y);
            r.is_finite().then_some(r)
        })
        .collect();

    let tail = (100.0 - config.conf()) / 2.0;
    Ok(ConfidenceInterval {
        lower: percentile(&correlations, tail),
        upper: percentile(&correlations, config.conf() + tail),
    })
}
