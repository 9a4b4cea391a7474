//! Operations on two or more arrays: broadcasting, inner-join alignment,
//! concatenation and masking.

use ndarray::{ArrayD, Axis, IxDyn, Zip};

use crate::array::LabeledArray;
use crate::coord::Coordinate;
use crate::error::LabeledError;

impl LabeledArray {
    /// Element-wise `f(self, other)` where `other`'s axes are a subset of
    /// this array's.
    ///
    /// `other` is reordered to this array's axis order, unit axes are inserted
    /// for every axis it lacks, and the result is replicated along them. The
    /// output keeps this array's axes and coordinates.
    ///
    /// # Errors
    ///
    /// - [`LabeledError::MissingAxis`] if `other` has an axis this array lacks.
    /// - [`LabeledError::IncompatibleCoordinates`] if a shared axis carries
    ///   different coordinates.
    pub fn broadcast_zip<F>(&self, other: &Self, f: F) -> Result<Self, LabeledError>
    where
        F: Fn(f64, f64) -> f64,
    {
        for c in &other.coords {
            let mine = self.coord(&c.name)?;
            if !mine.matches(&c.values) {
                return Err(LabeledError::IncompatibleCoordinates {
                    axis: c.name.clone(),
                    reason: "coordinate values differ".to_string(),
                });
            }
        }

        let order: Vec<&str> = self
            .dims()
            .into_iter()
            .filter(|d| other.has_axis(d))
            .collect();
        let other = other.transpose(&order)?;

        let mut view = other.data.view();
        for (i, c) in self.coords.iter().enumerate() {
            if !other.has_axis(&c.name) {
                view = view.insert_axis(Axis(i));
            }
        }
        let rhs = view
            .broadcast(self.data.raw_dim())
            .ok_or_else(|| LabeledError::DimensionMismatch {
                expected: self.ndim(),
                got: other.ndim(),
            })?;

        let data = Zip::from(&self.data)
            .and(&rhs)
            .map_collect(|&a, &b| f(a, b));
        Ok(Self {
            coords: self.coords.clone(),
            data,
        })
    }

    /// `self - other` with `other` broadcast, see [`LabeledArray::broadcast_zip`].
    pub fn subtract(&self, other: &Self) -> Result<Self, LabeledError> {
        self.broadcast_zip(other, |a, b| a - b)
    }

    /// Inner join of two arrays on every axis they share.
    ///
    /// For each shared axis only the coordinate values present in both arrays
    /// are kept, in this array's order. Axes held by only one array are left
    /// untouched. An empty intersection yields zero-length axes.
    ///
    /// # Errors
    ///
    /// [`LabeledError::IncompatibleCoordinates`] if a shared axis holds
    /// coordinate kinds that cannot be compared (e.g. dates against labels).
    pub fn align(&self, other: &Self) -> Result<(Self, Self), LabeledError> {
        let mut left = self.clone();
        let mut right = other.clone();
        for c in &self.coords {
            let Ok(theirs) = other.coord(&c.name) else {
                continue;
            };
            if !c.values.comparable(theirs) {
                return Err(LabeledError::IncompatibleCoordinates {
                    axis: c.name.clone(),
                    reason: format!("cannot join {} with {}", c.values.kind(), theirs.kind()),
                });
            }

            let mut keep_left = Vec::new();
            let mut keep_right = Vec::new();
            for (i, v) in c.values.iter().enumerate() {
                if let Some(j) = theirs.position(&v) {
                    keep_left.push(i);
                    keep_right.push(j);
                }
            }
            left = left.isel(&c.name, &keep_left)?;
            right = right.isel(&c.name, &keep_right)?;
        }
        Ok((left, right))
    }

    /// Stacks arrays with identical axes along a new leading axis.
    ///
    /// Every array is reordered to the first array's axis order; the new axis
    /// takes the coordinate `axis`, one value per array.
    pub fn concat(arrays: &[Self], axis: Coordinate) -> Result<Self, LabeledError> {
        let first = arrays.first().ok_or(LabeledError::EmptyConcat)?;
        if axis.len() != arrays.len() {
            return Err(LabeledError::ShapeMismatch {
                axis: axis.name.clone(),
                expected: arrays.len(),
                got: axis.len(),
            });
        }
        if first.has_axis(&axis.name) {
            return Err(LabeledError::DuplicateAxis { axis: axis.name });
        }

        let conformed = arrays
            .iter()
            .map(|a| a.conform_to(first))
            .collect::<Result<Vec<_>, _>>()?;
        let views: Vec<_> = conformed.iter().map(|a| a.data.view()).collect();
        let data = ndarray::stack(Axis(0), &views).map_err(|e| {
            LabeledError::IncompatibleCoordinates {
                axis: axis.name.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut coords = Vec::with_capacity(first.ndim() + 1);
        coords.push(axis);
        coords.extend(first.coords.iter().cloned());
        Ok(Self { coords, data })
    }

    /// Sets to NaN every value whose `keep` entry is false.
    ///
    /// `keep` is indexed by the axes named in `dims` (a subset of this
    /// array's axes, in any order) and is broadcast over the others.
    pub fn mask_where(&self, dims: &[&str], keep: &ArrayD<bool>) -> Result<Self, LabeledError> {
        if keep.ndim() != dims.len() {
            return Err(LabeledError::DimensionMismatch {
                expected: dims.len(),
                got: keep.ndim(),
            });
        }
        let mut axes = Vec::with_capacity(dims.len());
        for (k, name) in dims.iter().enumerate() {
            let axis = self.axis_of(name)?;
            let len = self.data.len_of(Axis(axis));
            if keep.len_of(Axis(k)) != len {
                return Err(LabeledError::ShapeMismatch {
                    axis: name.to_string(),
                    expected: len,
                    got: keep.len_of(Axis(k)),
                });
            }
            axes.push(axis);
        }

        let mut data = self.data.clone();
        let mut mask_index = vec![0; axes.len()];
        for (index, value) in data.indexed_iter_mut() {
            for (slot, &axis) in mask_index.iter_mut().zip(&axes) {
                *slot = index[axis];
            }
            if !keep[IxDyn(&mask_index)] {
                *value = f64::NAN;
            }
        }
        Ok(Self {
            coords: self.coords.clone(),
            data,
        })
    }

    /// Drops positions along `name` where every value is NaN.
    pub fn drop_all_nan(&self, name: &str) -> Result<Self, LabeledError> {
        let axis = self.axis_of(name)?;
        let positions: Vec<usize> = self
            .data
            .axis_iter(Axis(axis))
            .enumerate()
            .filter(|(_, sub)| sub.iter().any(|v| !v.is_nan()))
            .map(|(i, _)| i)
            .collect();
        self.isel(name, &positions)
    }
}
