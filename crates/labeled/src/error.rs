//! Error types for the skillcast-labeled crate.

/// Error type for all fallible operations on labeled arrays.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LabeledError {
    /// Returned when a named axis does not exist on the array.
    #[error("axis `{axis}` not found")]
    MissingAxis {
        /// Requested axis name.
        axis: String,
    },

    /// Returned when an axis name would appear twice.
    #[error("duplicate axis `{axis}`")]
    DuplicateAxis {
        /// The repeated axis name.
        axis: String,
    },

    /// Returned when coordinate values and data length disagree on one axis.
    #[error("axis `{axis}`: expected {expected} coordinate values, got {got}")]
    ShapeMismatch {
        /// Axis name.
        axis: String,
        /// Length of the data along the axis.
        expected: usize,
        /// Number of coordinate values supplied.
        got: usize,
    },

    /// Returned when a flat buffer does not fill the coordinate shape.
    #[error("data length mismatch: coordinates describe {expected} values, got {got}")]
    DataLength {
        /// Product of the coordinate lengths.
        expected: usize,
        /// Buffer length.
        got: usize,
    },

    /// Returned when the number of axes differs from what an operation needs.
    #[error("dimension mismatch: expected {expected} axes, got {got}")]
    DimensionMismatch {
        /// Expected number of axes.
        expected: usize,
        /// Actual number of axes.
        got: usize,
    },

    /// Returned when a label selection finds no matching coordinate value.
    #[error("coordinate {value} not found on axis `{axis}`")]
    CoordinateNotFound {
        /// Axis name.
        axis: String,
        /// Rendered coordinate value.
        value: String,
    },

    /// Returned when a positional index exceeds the axis length.
    #[error("index {index} out of bounds for axis `{axis}` of length {len}")]
    IndexOutOfBounds {
        /// Axis name.
        axis: String,
        /// Offending index.
        index: usize,
        /// Axis length.
        len: usize,
    },

    /// Returned when two arrays carry coordinates that cannot be matched.
    #[error("incompatible coordinates on axis `{axis}`: {reason}")]
    IncompatibleCoordinates {
        /// Axis name.
        axis: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an operation needs numeric or time coordinates.
    #[error("axis `{axis}` has non-numeric coordinates")]
    NonNumericAxis {
        /// Axis name.
        axis: String,
    },

    /// Returned when concatenating an empty list of arrays.
    #[error("cannot concatenate an empty list of arrays")]
    EmptyConcat,

    /// Returned when a rolling window length is zero.
    #[error("invalid rolling window: {window} (must be >= 1)")]
    InvalidWindow {
        /// The requested window.
        window: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_axis() {
        let e = LabeledError::MissingAxis { axis: "M".into() };
        assert_eq!(e.to_string(), "axis `M` not found");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = LabeledError::ShapeMismatch {
            axis: "Y".into(),
            expected: 3,
            got: 2,
        };
        assert_eq!(
            e.to_string(),
            "axis `Y`: expected 3 coordinate values, got 2"
        );
    }

    #[test]
    fn error_coordinate_not_found() {
        let e = LabeledError::CoordinateNotFound {
            axis: "season".into(),
            value: "\"DJF\"".into(),
        };
        assert_eq!(e.to_string(), "coordinate \"DJF\" not found on axis `season`");
    }

    #[test]
    fn error_invalid_window() {
        let e = LabeledError::InvalidWindow { window: 0 };
        assert_eq!(e.to_string(), "invalid rolling window: 0 (must be >= 1)");
    }
}
