//! Skill of reduced ensembles drawn from the full hindcast.
//!
//! Each iteration draws `N` members with replacement from the `M`
//! available, evaluates a [`SkillEngine`] on that subset and keeps the
//! result. The collection is either averaged over iterations or returned
//! stacked along an `iteration` axis.

use rand::Rng;
use skillcast_labeled::{CoordValues, Coordinate, LabeledArray};
use tracing::{debug, debug_span};

use crate::axes::ITERATION;
use crate::cube::{HindcastCube, VerificationTimeCube};
use crate::engine::{SeasonBinnedSkill, SkillEngine};
use crate::error::SkillError;
use crate::result::SkillResult;

/// Settings for [`resample_skill`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleConfig {
    sampsize: usize,
    ensemble_size: usize,
    mean: bool,
}

impl ResampleConfig {
    /// `sampsize` draws of `ensemble_size` members each, averaged over draws.
    pub fn new(sampsize: usize, ensemble_size: usize) -> Self {
        Self {
            sampsize,
            ensemble_size,
            mean: true,
        }
    }

    /// Whether [`SkillDistribution::summarize`] averages over iterations.
    pub fn with_mean(mut self, mean: bool) -> Self {
        self.mean = mean;
        self
    }

    pub fn sampsize(&self) -> usize {
        self.sampsize
    }

    pub fn ensemble_size(&self) -> usize {
        self.ensemble_size
    }

    pub fn mean(&self) -> bool {
        self.mean
    }

    /// Requires at least one draw and `0 < ensemble_size < member_count`.
    pub fn validate(&self, member_count: usize) -> Result<(), SkillError> {
        if self.sampsize == 0 {
            return Err(SkillError::InvalidConfig {
                reason: "sampsize must be >= 1".to_string(),
            });
        }
        if self.ensemble_size == 0 {
            return Err(SkillError::InvalidConfig {
                reason: "ensemble_size must be >= 1".to_string(),
            });
        }
        if self.ensemble_size >= member_count {
            return Err(SkillError::InvalidConfig {
                reason: format!(
                    "resampled ensemble size {} must be less than the {member_count} members available",
                    self.ensemble_size
                ),
            });
        }
        Ok(())
    }
}

/// `sampsize` draws of `n` member indices from `0..member_count`, with
/// replacement.
pub fn draw_member_subsets<R: Rng + ?Sized>(
    member_count: usize,
    n: usize,
    sampsize: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    (0..sampsize)
        .map(|_| (0..n).map(|_| rng.random_range(0..member_count)).collect())
        .collect()
}

/// Per-iteration skill of resampled ensembles.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDistribution {
    draws: Vec<Vec<usize>>,
    results: Vec<SkillResult>,
}

impl SkillDistribution {
    /// Member indices used by each iteration.
    pub fn draws(&self) -> &[Vec<usize>] {
        &self.draws
    }

    pub fn results(&self) -> &[SkillResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All iterations stacked along a leading `iteration` axis.
    pub fn stacked(&self) -> Result<SkillResult, SkillError> {
        SkillResult::stack(
            &self.results,
            Coordinate::new(ITERATION, CoordValues::range(0, self.results.len())),
        )
    }

    /// NaN-skipping mean over iterations.
    pub fn mean(&self) -> Result<SkillResult, SkillError> {
        self.stacked()?.mean_over(ITERATION)
    }

    /// [`Self::mean`] or [`Self::stacked`], as `config` asks.
    pub fn summarize(&self, config: &ResampleConfig) -> Result<SkillResult, SkillError> {
        if config.mean() {
            self.mean()
        } else {
            self.stacked()
        }
    }
}

/// Evaluates `engine` on `sampsize` reduced ensembles of the cube.
///
/// # Errors
///
/// [`SkillError::InvalidConfig`] unless `ensemble_size` is smaller than the
/// cube's member count; otherwise whatever the engine returns.
#[tracing::instrument(skip_all, fields(sampsize = config.sampsize(), n = config.ensemble_size()))]
pub fn resample_skill<E, R>(
    engine: &E,
    cube: &HindcastCube,
    config: &ResampleConfig,
    rng: &mut R,
) -> Result<SkillDistribution, SkillError>
where
    E: SkillEngine,
    R: Rng + ?Sized,
{
    let members = cube.member_count();
    config.validate(members)?;

    let draws = draw_member_subsets(members, config.ensemble_size(), config.sampsize(), rng);
    let mut results = Vec::with_capacity(draws.len());
    for (iteration, draw) in draws.iter().enumerate() {
        let _it = debug_span!("iteration", idx = iteration).entered();
        debug!(?draw, "members drawn");
        let subset = cube.select_members(draw)?;
        results.push(engine.evaluate(&subset, rng)?);
    }
    Ok(SkillDistribution { draws, results })
}

/// Mean skill of [`crate::leadtime_skill_seas`] over `sampsize` ensembles
/// of `n` members drawn with replacement.
///
/// # Errors
///
/// [`SkillError::InvalidConfig`] unless `n` is smaller than the cube's
/// member count.
pub fn leadtime_skill_seas_resamp<R: Rng + ?Sized>(
    cube: &HindcastCube,
    times: &VerificationTimeCube,
    obs: &LabeledArray,
    sampsize: usize,
    n: usize,
    detrend: bool,
    rng: &mut R,
) -> Result<SkillResult, SkillError> {
    let engine = SeasonBinnedSkill::new(times, obs).with_detrend(detrend);
    resample_skill(&engine, cube, &ResampleConfig::new(sampsize, n), rng)?.mean()
}
