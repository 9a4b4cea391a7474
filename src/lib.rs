//! # skillcast
//!
//! Verification of seasonal-to-decadal ensemble hindcasts against
//! observations: lead-time dependent correlation, significance, error and
//! signal-to-noise scores, with drift removal, detrending, bootstrap
//! intervals and ensemble-size resampling.
//!
//! This crate re-exports the workspace crates and adds a TOML configuration
//! layer ([`config`], [`convert`], [`analysis`]) plus [`logging`]
//! initialisation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     CAL["skillcast-calendar<br/>no-leap dates"] --> LAB["skillcast-labeled<br/>named-axis arrays"]
//!     ST["skillcast-stats<br/>slice statistics"] --> LAB
//!     LAB --> SK["skillcast-skill<br/>cubes, engines, resampling"]
//!     ST --> SK
//!     SK --> ROOT["skillcast<br/>config + logging"]
//! ```
//!
//! ## Configuration
//!
//! ```toml
//! seed = 42
//! detrend = false
//!
//! [skill]
//! binning = "seasonal"
//! nleadavg = 1
//! nleads = 4
//! clim_start = 1991
//! clim_end = 2020
//!
//! [resample]
//! sampsize = 100
//! ensemble_size = 10
//!
//! [drift]
//! start_year = 1991
//! end_year = 2020
//! ```

pub mod analysis;
pub mod config;
pub mod convert;
pub mod logging;

pub use skillcast_calendar as calendar;
pub use skillcast_labeled as labeled;
pub use skillcast_skill as skill;
pub use skillcast_stats as stats;

pub use skillcast_labeled::{CoordValue, CoordValues, Coordinate, LabeledArray};
pub use skillcast_skill::{
    Binning, BootstrapConfig, HindcastCube, Metric, ResampleConfig, SkillConfig, SkillResult,
    VerificationTimeCube, bootstrap_correlation_ci, compute_skill, detrend_linear,
    leadtime_skill_seas, leadtime_skill_seas_resamp, remove_drift,
};
