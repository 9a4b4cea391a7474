//! Removal of a least-squares linear trend along one axis.

use ndarray::Axis;
use skillcast_labeled::{LabeledArray, LabeledError};
use skillcast_stats::{linear_fit, nan_mean};

use crate::error::SkillError;

/// Subtracts a degree-1 least-squares fit along `axis` from every lane of
/// `array`, independently for each combination of the other axes.
///
/// The fit uses the axis coordinates as abscissa (dates as day ordinals) and
/// ignores NaN values, which stay NaN. A lane with a single finite value
/// detrends to zero; with two, the line passes through both points.
///
/// # Errors
///
/// [`LabeledError::NonNumericAxis`] if the axis carries text labels.
pub fn detrend_linear(array: &LabeledArray, axis: &str) -> Result<LabeledArray, SkillError> {
    let x = array
        .coord(axis)?
        .as_f64()
        .ok_or_else(|| LabeledError::NonNumericAxis {
            axis: axis.to_string(),
        })?;
    let position = array.axis_of(axis)?;

    let mut data = array.data().clone();
    for mut lane in data.lanes_mut(Axis(position)) {
        let y = lane.to_vec();
        match linear_fit(&x, &y) {
            Some(fit) => {
                for (v, &xi) in lane.iter_mut().zip(&x) {
                    *v -= fit.eval(xi);
                }
            }
            None => {
                let level = nan_mean(&y);
                lane.mapv_inplace(|v| v - level);
            }
        }
    }
    Ok(LabeledArray::new(array.coords().to_vec(), data)?)
}
