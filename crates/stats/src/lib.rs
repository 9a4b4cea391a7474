//! # skillcast-stats
//!
//! Slice statistics shared by the skill engine: moments, percentiles,
//! Pearson correlation with an effective-sample-size p-value, straight-line
//! fits and error scores.
//!
//! Two NaN conventions coexist:
//!
//! - `nan_*` reductions and [`pearson_correlation`] skip non-finite values.
//! - [`pearson_r`], [`mse`] and [`rmse`] propagate them, so a single missing
//!   year makes the score NaN.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `moments` | Means, variances, type-7 quantiles and percentiles |
//! | `correlation` | Pearson r, lag-1 autocorrelation, effective-sample p-value |
//! | `fit` | Ordinary least-squares line |
//! | `score` | MSE and RMSE |

mod correlation;
mod fit;
mod moments;
mod score;

pub use correlation::{
    effective_sample_size, lag1_autocorrelation, pearson_correlation, pearson_r,
    pearson_r_eff_p_value,
};
pub use fit::{LinearFit, linear_fit};
pub use moments::{
    nan_mean, nan_std, nan_variance, percentile, quantile_type7,
};
pub use score::{mse, rmse};
