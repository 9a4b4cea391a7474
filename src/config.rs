//! TOML configuration for a verification run.

use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

/// Top-level analysis configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// RNG seed for resampling and bootstrap draws.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Remove a linear trend from model and observations before scoring.
    #[serde(default)]
    pub detrend: bool,

    /// Lead-time skill settings.
    #[serde(default)]
    pub skill: SkillToml,

    /// Ensemble-size resampling; absent disables it.
    #[serde(default)]
    pub resample: Option<ResampleToml>,

    /// Bootstrap interval settings.
    #[serde(default)]
    pub bootstrap: BootstrapToml,

    /// Drift-removal reference period; absent disables it.
    #[serde(default)]
    pub drift: Option<DriftToml>,
}

impl AnalysisToml {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse analysis TOML")
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Generator seeded from `seed`, or from the OS when unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillToml {
    /// `"annual"`, `"seasonal"` or `"monthly"`.
    #[serde(default = "default_binning")]
    pub binning: String,
    #[serde(default = "default_one")]
    pub nleadavg: usize,
    #[serde(default = "default_one")]
    pub nleads: usize,
    #[serde(default)]
    pub resamp: usize,
    /// First year of the observed climatology (seasonal and monthly binning).
    #[serde(default)]
    pub clim_start: Option<i32>,
    /// Last year of the observed climatology, inclusive.
    #[serde(default)]
    pub clim_end: Option<i32>,
}

impl Default for SkillToml {
    fn default() -> Self {
        Self {
            binning: default_binning(),
            nleadavg: 1,
            nleads: 1,
            resamp: 0,
            clim_start: None,
            clim_end: None,
        }
    }
}

fn default_binning() -> String {
    "annual".to_string()
}
fn default_one() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleToml {
    pub sampsize: usize,
    pub ensemble_size: usize,
    #[serde(default = "default_true")]
    pub mean: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapToml {
    #[serde(default = "default_nboots")]
    pub nboots: usize,
    #[serde(default = "default_conf")]
    pub conf: f64,
}

impl Default for BootstrapToml {
    fn default() -> Self {
        Self {
            nboots: default_nboots(),
            conf: default_conf(),
        }
    }
}

fn default_nboots() -> usize {
    1000
}
fn default_conf() -> f64 {
    95.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriftToml {
    pub start_year: i32,
    pub end_year: i32,
}
