//! A common interface over the skill engines, used by the resampling driver.

use rand::Rng;
use skillcast_labeled::LabeledArray;

use crate::cube::{HindcastCube, VerificationTimeCube};
use crate::error::SkillError;
use crate::generalized::{SkillConfig, compute_skill};
use crate::leadtime::leadtime_skill_seas;
use crate::result::SkillResult;

/// Computes skill for a hindcast cube against fixed observations.
pub trait SkillEngine {
    fn evaluate<R: Rng + ?Sized>(
        &self,
        cube: &HindcastCube,
        rng: &mut R,
    ) -> Result<SkillResult, SkillError>;
}

/// [`leadtime_skill_seas`] against season-binned observations.
#[derive(Debug, Clone, Copy)]
pub struct SeasonBinnedSkill<'a> {
    times: &'a VerificationTimeCube,
    obs: &'a LabeledArray,
    detrend: bool,
}

impl<'a> SeasonBinnedSkill<'a> {
    pub fn new(times: &'a VerificationTimeCube, obs: &'a LabeledArray) -> Self {
        Self {
            times,
            obs,
            detrend: false,
        }
    }

    pub fn with_detrend(mut self, detrend: bool) -> Self {
        self.detrend = detrend;
        self
    }
}

impl SkillEngine for SeasonBinnedSkill<'_> {
    fn evaluate<R: Rng + ?Sized>(
        &self,
        cube: &HindcastCube,
        _rng: &mut R,
    ) -> Result<SkillResult, SkillError> {
        leadtime_skill_seas(cube, self.times, self.obs, self.detrend)
    }
}

/// [`compute_skill`] with a fixed configuration.
#[derive(Debug, Clone)]
pub struct GeneralizedSkill<'a> {
    times: &'a VerificationTimeCube,
    obs: &'a LabeledArray,
    config: SkillConfig,
}

impl<'a> GeneralizedSkill<'a> {
    pub fn new(times: &'a VerificationTimeCube, obs: &'a LabeledArray, config: SkillConfig) -> Self {
        Self { times, obs, config }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }
}

impl SkillEngine for GeneralizedSkill<'_> {
    fn evaluate<R: Rng + ?Sized>(
        &self,
        cube: &HindcastCube,
        rng: &mut R,
    ) -> Result<SkillResult, SkillError> {
        compute_skill(cube, self.times, self.obs, &self.config, rng)
    }
}
