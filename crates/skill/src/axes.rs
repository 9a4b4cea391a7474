//! Axis names shared by hindcast cubes, observations and results.

/// Initialisation (start) year.
pub const START_YEAR: &str = "Y";
/// Lead time, 1-based in the raw cube.
pub const LEAD: &str = "L";
/// Ensemble member.
pub const MEMBER: &str = "M";
/// Verification time after a hindcast slice is relabelled.
pub const TIME: &str = "time";
/// Season label of pre-binned observations.
pub const SEASON: &str = "season";
/// Year of pre-binned observations.
pub const YEAR: &str = "year";
/// Resampling iteration.
pub const ITERATION: &str = "iteration";
