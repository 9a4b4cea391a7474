//! The labeled array value type: construction, access, selection.

use ndarray::{ArrayD, Axis, IxDyn};

use crate::coord::{CoordValue, CoordValues, Coordinate};
use crate::error::LabeledError;

/// An n-dimensional `f64` array whose axes carry names and coordinate values.
///
/// Axis `i` of `data` is described by `coords[i]`; names are unique and every
/// coordinate has exactly as many values as the data has along that axis.
/// All operations return new arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray {
    pub(crate) coords: Vec<Coordinate>,
    pub(crate) data: ArrayD<f64>,
}

impl LabeledArray {
    /// Wraps `data` with one coordinate per axis.
    ///
    /// # Errors
    ///
    /// - [`LabeledError::DimensionMismatch`] if the coordinate count differs
    ///   from the number of data axes.
    /// - [`LabeledError::DuplicateAxis`] if a name repeats.
    /// - [`LabeledError::ShapeMismatch`] if a coordinate length differs from
    ///   the data length along its axis.
    pub fn new(coords: Vec<Coordinate>, data: ArrayD<f64>) -> Result<Self, LabeledError> {
        if coords.len() != data.ndim() {
            return Err(LabeledError::DimensionMismatch {
                expected: data.ndim(),
                got: coords.len(),
            });
        }
        for (i, c) in coords.iter().enumerate() {
            if coords[..i].iter().any(|p| p.name == c.name) {
                return Err(LabeledError::DuplicateAxis {
                    axis: c.name.clone(),
                });
            }
            let len = data.len_of(Axis(i));
            if c.len() != len {
                return Err(LabeledError::ShapeMismatch {
                    axis: c.name.clone(),
                    expected: len,
                    got: c.len(),
                });
            }
        }
        Ok(Self { coords, data })
    }

    /// Builds an array from row-major `values` shaped by the coordinates.
    ///
    /// # Errors
    ///
    /// [`LabeledError::DataLength`] if `values` does not fill the shape, plus
    /// the errors of [`LabeledArray::new`].
    pub fn from_vec(coords: Vec<Coordinate>, values: Vec<f64>) -> Result<Self, LabeledError> {
        let shape: Vec<usize> = coords.iter().map(Coordinate::len).collect();
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(LabeledError::DataLength {
                expected,
                got: values.len(),
            });
        }
        let data = ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|_| {
            LabeledError::DataLength {
                expected,
                got: expected,
            }
        })?;
        Self::new(coords, data)
    }

    /// A zero-dimensional array holding `value`.
    pub fn scalar(value: f64) -> Self {
        Self {
            coords: Vec::new(),
            data: ArrayD::from_elem(IxDyn(&[]), value),
        }
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn into_data(self) -> ArrayD<f64> {
        self.data
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Axis names in storage order.
    pub fn dims(&self) -> Vec<&str> {
        self.coords.iter().map(Coordinate::name).collect()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn has_axis(&self, name: &str) -> bool {
        self.coords.iter().any(|c| c.name == name)
    }

    /// Position of the axis called `name`.
    pub fn axis_of(&self, name: &str) -> Result<usize, LabeledError> {
        self.coords
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| LabeledError::MissingAxis {
                axis: name.to_string(),
            })
    }

    /// Coordinate values of the axis called `name`.
    pub fn coord(&self, name: &str) -> Result<&CoordValues, LabeledError> {
        Ok(&self.coords[self.axis_of(name)?].values)
    }

    pub fn len_of(&self, name: &str) -> Result<usize, LabeledError> {
        Ok(self.data.len_of(Axis(self.axis_of(name)?)))
    }

    /// All values in logical row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// The value of a zero-dimensional array.
    pub fn as_scalar(&self) -> Option<f64> {
        if self.ndim() == 0 {
            self.data.first().copied()
        } else {
            None
        }
    }

    /// Selects the position labelled `value` on `name` and drops that axis.
    pub fn sel(&self, name: &str, value: impl Into<CoordValue>) -> Result<Self, LabeledError> {
        let axis = self.axis_of(name)?;
        let value = value.into();
        let position = self.coords[axis].values.position(&value).ok_or_else(|| {
            LabeledError::CoordinateNotFound {
                axis: name.to_string(),
                value: value.to_string(),
            }
        })?;
        self.index_axis(name, position)
    }

    /// Takes one position along `name` and drops that axis.
    pub fn index_axis(&self, name: &str, position: usize) -> Result<Self, LabeledError> {
        let axis = self.axis_of(name)?;
        self.check_bounds(axis, &[position])?;
        let data = self.data.index_axis(Axis(axis), position).to_owned();
        let mut coords = self.coords.clone();
        coords.remove(axis);
        Ok(Self { coords, data })
    }

    /// Takes `positions` along `name`, keeping the axis.
    ///
    /// Positions may repeat; the result follows their order.
    pub fn isel(&self, name: &str, positions: &[usize]) -> Result<Self, LabeledError> {
        let axis = self.axis_of(name)?;
        self.check_bounds(axis, positions)?;
        let data = self.data.select(Axis(axis), positions);
        let mut coords = self.coords.clone();
        coords[axis].values = coords[axis].values.select(positions);
        Ok(Self { coords, data })
    }

    /// Keeps the positions along `name` whose coordinate satisfies `keep`.
    pub fn filter_coord<F>(&self, name: &str, keep: F) -> Result<Self, LabeledError>
    where
        F: Fn(&CoordValue) -> bool,
    {
        let positions: Vec<usize> = self
            .coord(name)?
            .iter()
            .enumerate()
            .filter(|(_, v)| keep(v))
            .map(|(i, _)| i)
            .collect();
        self.isel(name, &positions)
    }

    /// Renames axis `from` to `to`.
    pub fn rename(mut self, from: &str, to: &str) -> Result<Self, LabeledError> {
        let axis = self.axis_of(from)?;
        if from != to && self.has_axis(to) {
            return Err(LabeledError::DuplicateAxis {
                axis: to.to_string(),
            });
        }
        self.coords[axis].name = to.to_string();
        Ok(self)
    }

    /// Replaces the coordinate values of `name`, matching by position.
    pub fn assign_coord(
        mut self,
        name: &str,
        values: impl Into<CoordValues>,
    ) -> Result<Self, LabeledError> {
        let axis = self.axis_of(name)?;
        let values = values.into();
        let len = self.data.len_of(Axis(axis));
        if values.len() != len {
            return Err(LabeledError::ShapeMismatch {
                axis: name.to_string(),
                expected: len,
                got: values.len(),
            });
        }
        self.coords[axis].values = values;
        Ok(self)
    }

    /// Reorders the axes to `order`, which must name every axis exactly once.
    pub fn transpose(&self, order: &[&str]) -> Result<Self, LabeledError> {
        if order.len() != self.ndim() {
            return Err(LabeledError::DimensionMismatch {
                expected: self.ndim(),
                got: order.len(),
            });
        }
        let mut perm = Vec::with_capacity(order.len());
        for (i, name) in order.iter().enumerate() {
            if order[..i].contains(name) {
                return Err(LabeledError::DuplicateAxis {
                    axis: name.to_string(),
                });
            }
            perm.push(self.axis_of(name)?);
        }
        let coords = perm.iter().map(|&p| self.coords[p].clone()).collect();
        let data = self.data.clone().permuted_axes(IxDyn(&perm));
        Ok(Self { coords, data })
    }

    /// Applies `f` to every value.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            coords: self.coords.clone(),
            data: self.data.mapv(f),
        }
    }

    fn check_bounds(&self, axis: usize, positions: &[usize]) -> Result<(), LabeledError> {
        let len = self.data.len_of(Axis(axis));
        match positions.iter().find(|&&p| p >= len) {
            Some(&index) => Err(LabeledError::IndexOutOfBounds {
                axis: self.coords[axis].name.clone(),
                index,
                len,
            }),
            None => Ok(()),
        }
    }

    /// This array with axes reordered to match `template`, provided both
    /// carry the same axes with matching coordinates.
    pub(crate) fn conform_to(&self, template: &Self) -> Result<Self, LabeledError> {
        if self.ndim() != template.ndim() {
            return Err(LabeledError::DimensionMismatch {
                expected: template.ndim(),
                got: self.ndim(),
            });
        }
        let conformed = self.transpose(&template.dims())?;
        for (mine, theirs) in conformed.coords.iter().zip(&template.coords) {
            if !mine.values.matches(&theirs.values) {
                return Err(LabeledError::IncompatibleCoordinates {
                    axis: mine.name.clone(),
                    reason: "coordinate values differ".to_string(),
                });
            }
        }
        Ok(conformed)
    }
}
