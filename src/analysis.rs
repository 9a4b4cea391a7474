//! A configured verification run: optional drift removal, then generalized
//! skill, optionally over resampled ensembles.

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use skillcast_labeled::LabeledArray;
use skillcast_skill::{
    BootstrapConfig, ConfidenceInterval, GeneralizedSkill, HindcastCube, ResampleConfig,
    SkillConfig, SkillEngine, SkillResult, VerificationTimeCube, bootstrap_correlation_ci,
    remove_drift, resample_skill,
};

use crate::config::AnalysisToml;
use crate::convert;

/// Crate-level configuration resolved from an [`AnalysisToml`].
#[derive(Debug, Clone)]
pub struct Analysis {
    pub skill: SkillConfig,
    pub resample: Option<ResampleConfig>,
    pub bootstrap: BootstrapConfig,
    pub drift: Option<(i32, i32)>,
}

impl Analysis {
    pub fn from_toml(config: &AnalysisToml) -> Result<Self> {
        Ok(Self {
            skill: convert::build_skill_config(config)?,
            resample: config
                .resample
                .as_ref()
                .map(convert::build_resample_config)
                .transpose()?,
            bootstrap: convert::build_bootstrap_config(&config.bootstrap)?,
            drift: config.drift.as_ref().map(convert::drift_years).transpose()?,
        })
    }

    /// Runs the configured pipeline on one hindcast.
    pub fn run<R: Rng + ?Sized>(
        &self,
        cube: &HindcastCube,
        times: &VerificationTimeCube,
        obs: &LabeledArray,
        rng: &mut R,
    ) -> Result<SkillResult> {
        let cube = match self.drift {
            Some((y1, y2)) => {
                info!(y1, y2, "removing lead-dependent drift");
                let removed = remove_drift(cube.array(), times, y1, y2)
                    .context("drift removal failed")?;
                HindcastCube::new(removed.anomaly)?
            }
            None => cube.clone(),
        };

        let engine = GeneralizedSkill::new(times, obs, self.skill.clone());
        match &self.resample {
            Some(resample) => {
                info!(
                    sampsize = resample.sampsize(),
                    ensemble_size = resample.ensemble_size(),
                    "resampling ensemble"
                );
                let dist = resample_skill(&engine, &cube, resample, rng)
                    .context("ensemble resampling failed")?;
                Ok(dist.summarize(resample)?)
            }
            None => {
                info!(nleads = self.skill.nleads(), "computing skill");
                engine.evaluate(&cube, rng).context("skill computation failed")
            }
        }
    }

    /// Bootstrap interval on the correlation of two paired series, e.g. an
    /// ensemble-mean series and its observations at one lead.
    pub fn correlation_interval<R: Rng + ?Sized>(
        &self,
        ts1: &[f64],
        ts2: &[f64],
        rng: &mut R,
    ) -> Result<ConfidenceInterval> {
        bootstrap_correlation_ci(ts1, ts2, &self.bootstrap, rng)
            .context("bootstrap interval failed")
    }
}
