//! Error types for the skillcast-skill crate.

use skillcast_calendar::CalendarError;
use skillcast_labeled::LabeledError;

/// Error type for all fallible operations in the skillcast-skill crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillError {
    /// Returned when paired inputs disagree in length.
    #[error("length mismatch for {field}: expected {expected}, got {got}")]
    LengthMismatch {
        /// Which input or axis disagrees.
        field: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when there are too few observations.
    #[error("insufficient data: got {n} values, need at least {min}")]
    InsufficientData {
        /// Number of values provided.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a representative month has no season.
    #[error("unsupported season: representative month {month} is not one of 1, 4, 7, 10")]
    UnsupportedSeason {
        /// The unmapped month.
        month: u8,
    },

    /// Returned when start years disagree on the calendar month of one lead.
    #[error("lead position {lead}: verification month differs across start years ({first} vs {other})")]
    MixedLeadMonths {
        /// Lead position within the cube.
        lead: usize,
        /// Month of the first start year.
        first: u8,
        /// First differing month.
        other: u8,
    },

    /// Returned when a hindcast cube lacks a required axis.
    #[error("hindcast cube is missing axis `{axis}`")]
    MissingAxis {
        /// Name of the missing axis.
        axis: String,
    },

    /// Returned when an axis that must hold integer labels holds something else.
    #[error("axis `{axis}` must carry integer coordinates")]
    NonIntegerAxis {
        /// Axis name.
        axis: String,
    },

    /// Returned when a required axis has length zero.
    #[error("axis `{axis}` is empty")]
    EmptyAxis {
        /// Axis name.
        axis: String,
    },

    #[error(transparent)]
    Labeled(#[from] LabeledError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
