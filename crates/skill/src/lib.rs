//! Deterministic skill of ensemble hindcasts against observations.
//!
//! A hindcast arrives as a [`HindcastCube`] with axes `(Y, L, M, ...)`
//! (start year, lead, member, then any spatial axes) together with a
//! [`VerificationTimeCube`] giving the calendar date each `(Y, L)` cell
//! verifies at. The engines slice the cube per lead, relabel start years as
//! verification years, join with the observations on the years both hold and
//! score the ensemble mean.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐   ┌──────────────────┐   ┌───────────────┐   ┌──────────────┐
//!  │ lead slice /    │──▶│ align on years    │──▶│ detrend       │──▶│ score        │
//!  │ lead block mean │   │ (inner join)      │   │ (optional)    │   │ corr … s2t   │
//!  └────────────────┘   └──────────────────┘   └───────────────┘   └──────────────┘
//!                                                                          │
//!                               resample_skill: repeat on N-member draws ◀─┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use skillcast_skill::{HindcastCube, Metric, VerificationTimeCube, leadtime_skill_seas};
//!
//! let cube = HindcastCube::new(hindcast)?;
//! let times = VerificationTimeCube::monthly(cube.start_years().to_vec(), 11, 12)?;
//! let skill = leadtime_skill_seas(&cube, &times, &obs_by_season, false)?;
//! let corr = skill.get(Metric::Corr);
//! ```

pub mod axes;
mod bootstrap;
mod cube;
mod detrend;
mod drift;
mod engine;
mod error;
mod generalized;
mod leadtime;
mod metrics;
mod resample;
mod result;
mod season;

pub use bootstrap::{BootstrapConfig, ConfidenceInterval, bootstrap_correlation_ci};
pub use cube::{HindcastCube, VerificationTimeCube};
pub use detrend::detrend_linear;
pub use drift::{DriftRemoval, remove_drift};
pub use engine::{GeneralizedSkill, SeasonBinnedSkill, SkillEngine};
pub use error::SkillError;
pub use generalized::{Binning, SkillConfig, compute_skill};
pub use leadtime::{SEASONAL_LEAD_OFFSET, leadtime_skill_seas};
pub use resample::{
    ResampleConfig, SkillDistribution, draw_member_subsets, leadtime_skill_seas_resamp,
    resample_skill,
};
pub use result::{LeadSkill, Metric, SkillResult};
pub use season::Season;
