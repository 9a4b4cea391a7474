//! Centred moving averages along a named axis.

use ndarray::{ArrayD, Axis, IxDyn, Slice};

use crate::array::LabeledArray;
use crate::error::LabeledError;

impl LabeledArray {
    /// Moving mean over `window` consecutive positions along `name`.
    ///
    /// The window starting at position `j` is labelled with the coordinate at
    /// `j + window / 2`, the centring convention of pandas/xarray
    /// (`center=True`). Only complete windows are produced; a window
    /// containing NaN yields NaN, and positions that are NaN everywhere are
    /// dropped. An axis shorter than `window` becomes empty.
    pub fn rolling_mean_centered(&self, name: &str, window: usize) -> Result<Self, LabeledError> {
        if window == 0 {
            return Err(LabeledError::InvalidWindow { window });
        }
        let axis = self.axis_of(name)?;
        let len = self.data.len_of(Axis(axis));
        let count = (len + 1).saturating_sub(window);
        let offset = window / 2;

        let mut shape = self.data.shape().to_vec();
        shape[axis] = count;
        let mut data = ArrayD::from_elem(IxDyn(&shape), f64::NAN);
        for j in 0..count {
            let block = self
                .data
                .slice_axis(Axis(axis), Slice::from(j..j + window));
            let mean = block.sum_axis(Axis(axis)) / window as f64;
            data.index_axis_mut(Axis(axis), j).assign(&mean);
        }

        let labels: Vec<usize> = (0..count).map(|j| j + offset).collect();
        let mut coords = self.coords.clone();
        coords[axis].values = coords[axis].values.select(&labels);

        Self { coords, data }.drop_all_nan(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{CoordValues, Coordinate};
    use approx::assert_relative_eq;

    fn series(values: Vec<f64>) -> LabeledArray {
        let n = values.len();
        LabeledArray::from_vec(vec![Coordinate::new("time", CoordValues::range(2000, n))], values)
            .unwrap()
    }

    #[test]
    fn odd_window_centred() {
        let r = series(vec![1.0, 2.0, 3.0, 4.0, 5.0])
            .rolling_mean_centered("time", 3)
            .unwrap();
        assert_eq!(r.coord("time").unwrap(), &CoordValues::Int(vec![2001, 2002, 2003]));
        assert_eq!(r.to_vec(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn even_window_labels_upper_middle() {
        let r = series(vec![1.0, 2.0, 3.0, 4.0])
            .rolling_mean_centered("time", 2)
            .unwrap();
        assert_eq!(r.coord("time").unwrap(), &CoordValues::Int(vec![2001, 2002, 2003]));
        assert_relative_eq!(r.to_vec()[0], 1.5, epsilon = 1e-12);

        let r4 = series(vec![1.0, 2.0, 3.0, 4.0, 5.0])
            .rolling_mean_centered("time", 4)
            .unwrap();
        assert_eq!(r4.coord("time").unwrap(), &CoordValues::Int(vec![2002, 2003]));
    }

    #[test]
    fn window_one_is_identity() {
        let s = series(vec![1.0, 2.0]);
        assert_eq!(s.rolling_mean_centered("time", 1).unwrap(), s);
    }

    #[test]
    fn nan_windows_dropped() {
        let r = series(vec![1.0, f64::NAN, 3.0, 4.0, 5.0])
            .rolling_mean_centered("time", 2)
            .unwrap();
        assert_eq!(r.coord("time").unwrap(), &CoordValues::Int(vec![2003, 2004]));
        assert_eq!(r.to_vec(), vec![3.5, 4.5]);
    }

    #[test]
    fn short_axis_is_empty() {
        let r = series(vec![1.0, 2.0]).rolling_mean_centered("time", 3).unwrap();
        assert_eq!(r.len_of("time").unwrap(), 0);
    }

    #[test]
    fn zero_window_rejected() {
        assert_eq!(
            series(vec![1.0]).rolling_mean_centered("time", 0).unwrap_err(),
            LabeledError::InvalidWindow { window: 0 }
        );
    }
}
