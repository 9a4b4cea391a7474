//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use skillcast_skill::{Binning, BootstrapConfig, ResampleConfig, SkillConfig};

use crate::config::{AnalysisToml, BootstrapToml, DriftToml, ResampleToml, SkillToml};

/// Parses the binning name and, for sub-annual binning, the climatology
/// years.
pub fn parse_binning(skill: &SkillToml) -> Result<Binning> {
    let name = skill.binning.to_lowercase();
    if name == "annual" {
        return Ok(Binning::Annual);
    }
    let (Some(start), Some(end)) = (skill.clim_start, skill.clim_end) else {
        bail!("{name} binning needs [skill].clim_start and [skill].clim_end");
    };
    match name.as_str() {
        "seasonal" => Ok(Binning::seasonal(start, end)),
        "monthly" => Ok(Binning::monthly(start, end)),
        other => bail!("unknown binning: {other:?}"),
    }
}

/// Builds a validated [`SkillConfig`]; `detrend` comes from the top level.
pub fn build_skill_config(config: &AnalysisToml) -> Result<SkillConfig> {
    let skill = &config.skill;
    let cfg = SkillConfig::new()
        .with_binning(parse_binning(skill)?)
        .with_nleadavg(skill.nleadavg)
        .with_nleads(skill.nleads)
        .with_resamp(skill.resamp)
        .with_detrend(config.detrend);
    cfg.validate().context("invalid [skill] section")?;
    Ok(cfg)
}

/// Builds a [`ResampleConfig`]. The ensemble size is checked against the
/// member count when the hindcast is known.
pub fn build_resample_config(resample: &ResampleToml) -> Result<ResampleConfig> {
    if resample.sampsize == 0 {
        bail!("[resample].sampsize must be >= 1");
    }
    Ok(ResampleConfig::new(resample.sampsize, resample.ensemble_size).with_mean(resample.mean))
}

/// Builds a validated [`BootstrapConfig`].
pub fn build_bootstrap_config(bootstrap: &BootstrapToml) -> Result<BootstrapConfig> {
    let cfg = BootstrapConfig::new()
        .with_nboots(bootstrap.nboots)
        .with_conf(bootstrap.conf);
    cfg.validate().context("invalid [bootstrap] section")?;
    Ok(cfg)
}

/// Reference period `(y1, y2)` for drift removal.
pub fn drift_years(drift: &DriftToml) -> Result<(i32, i32)> {
    if drift.start_year > drift.end_year {
        bail!(
            "[drift].start_year {} is after end_year {}",
            drift.start_year,
            drift.end_year
        );
    }
    Ok((drift.start_year, drift.end_year))
}
