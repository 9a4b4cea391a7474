//! Reductions along a named axis.

use ndarray::{ArrayView1, Axis, Zip};
use skillcast_stats::{nan_mean, nan_std, nan_variance};

use crate::array::LabeledArray;
use crate::error::LabeledError;

fn with_slice<F>(lane: ArrayView1<'_, f64>, f: &F) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    match lane.as_slice() {
        Some(s) => f(s),
        None => f(&lane.to_vec()),
    }
}

impl LabeledArray {
    /// Collapses axis `name` by applying `f` to every 1-D lane along it.
    pub fn reduce<F>(&self, name: &str, f: F) -> Result<Self, LabeledError>
    where
        F: Fn(&[f64]) -> f64,
    {
        let axis = self.axis_of(name)?;
        let data = self
            .data
            .map_axis(Axis(axis), |lane| with_slice(lane, &f));
        let mut coords = self.coords.clone();
        coords.remove(axis);
        Ok(Self { coords, data })
    }

    /// Collapses axis `name` of two arrays with the same axes, pairing lanes
    /// at equal coordinates.
    ///
    /// `other` is transposed to this array's axis order first.
    ///
    /// # Errors
    ///
    /// [`LabeledError::IncompatibleCoordinates`] if any axis carries
    /// different coordinates in the two arrays.
    pub fn reduce_pair<F>(&self, other: &Self, name: &str, f: F) -> Result<Self, LabeledError>
    where
        F: Fn(&[f64], &[f64]) -> f64,
    {
        let axis = self.axis_of(name)?;
        let other = other.conform_to(self)?;
        let data = Zip::from(self.data.lanes(Axis(axis)))
            .and(other.data.lanes(Axis(axis)))
            .map_collect(|a, b| f(&a.to_vec(), &b.to_vec()));
        let mut coords = self.coords.clone();
        coords.remove(axis);
        Ok(Self { coords, data })
    }

    /// Mean along `name`, skipping NaN.
    pub fn mean(&self, name: &str) -> Result<Self, LabeledError> {
        self.reduce(name, nan_mean)
    }

    /// Standard deviation along `name` with `n - ddof` denominator, skipping NaN.
    pub fn std(&self, name: &str, ddof: usize) -> Result<Self, LabeledError> {
        self.reduce(name, |v| nan_std(v, ddof))
    }

    /// Variance along `name` with `n - ddof` denominator, skipping NaN.
    pub fn var(&self, name: &str, ddof: usize) -> Result<Self, LabeledError> {
        self.reduce(name, |v| nan_variance(v, ddof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{CoordValues, Coordinate};
    use approx::assert_relative_eq;

    fn cube() -> LabeledArray {
        // (time=3, M=2)
        LabeledArray::from_vec(
            vec![
                Coordinate::new("time", vec![2000_i64, 2001, 2002]),
                Coordinate::new("M", CoordValues::range(1, 2)),
            ],
            vec![1.0, 2.0, 3.0, f64::NAN, 5.0, 8.0],
        )
        .unwrap()
    }

    #[test]
    fn mean_skips_nan() {
        let m = cube().mean("time").unwrap();
        assert_eq!(m.dims(), vec!["M"]);
        assert_relative_eq!(m.to_vec()[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(m.to_vec()[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn std_population() {
        let s = cube().std("time", 0).unwrap();
        // [1, 3, 5]: population sd = sqrt(8/3)
        assert_relative_eq!(s.to_vec()[0], (8.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        let v = cube().var("time", 0).unwrap();
        // [2, 8]: population var = 9
        assert_relative_eq!(v.to_vec()[1], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_over_all_axes_is_scalar() {
        let s = cube().mean("M").unwrap().mean("time").unwrap();
        assert_eq!(s.ndim(), 0);
        // member means per year: 1.5, 3.0 (NaN skipped), 6.5
        assert_relative_eq!(s.as_scalar().unwrap(), 11.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn reduce_empty_axis_gives_nan() {
        let empty = cube().isel("time", &[]).unwrap();
        let m = empty.mean("time").unwrap();
        assert!(m.to_vec().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn reduce_pair_transposes_other() {
        let a = cube();
        let b = a.transpose(&["M", "time"]).unwrap();
        let dot = a
            .reduce_pair(&b, "time", |x, y| x.iter().zip(y).map(|(p, q)| p * q).sum())
            .unwrap();
        assert_relative_eq!(dot.to_vec()[0], 1.0 + 9.0 + 25.0, epsilon = 1e-12);
    }

    #[test]
    fn reduce_pair_rejects_different_coordinates() {
        let a = cube();
        let b = cube()
            .assign_coord("time", vec![2010_i64, 2011, 2012])
            .unwrap();
        assert!(matches!(
            a.reduce_pair(&b, "time", |_, _| 0.0),
            Err(LabeledError::IncompatibleCoordinates { .. })
        ));
    }

    #[test]
    fn missing_axis() {
        assert_eq!(
            cube().mean("L").unwrap_err(),
            LabeledError::MissingAxis { axis: "L".into() }
        );
    }
}
