//! Skill over lead-time blocks, for annual or sub-annual hindcasts.

use rand::Rng;
use skillcast_labeled::{CoordValue, LabeledArray, LabeledError};
use tracing::debug_span;

use crate::axes::{LEAD, START_YEAR, TIME};
use crate::cube::{HindcastCube, VerificationTimeCube};
use crate::error::SkillError;
use crate::leadtime::{SEASONAL_LEAD_OFFSET, align_on_time, maybe_detrend};
use crate::metrics::{member_spread, resampled_spread, score};
use crate::result::SkillResult;

/// How hindcast leads and observations are binned in time.
#[derive(Debug, Clone, PartialEq)]
pub enum Binning {
    /// One lead per year; observations carry integer years on `time`.
    Annual,
    /// `steps_per_year` leads per year; observations carry calendar dates on
    /// `time` and are anomalised against the years
    /// `clim_start..=clim_end`.
    Seasonal {
        steps_per_year: usize,
        clim_start: i32,
        clim_end: i32,
    },
}

impl Binning {
    /// Four three-month seasons per year.
    pub fn seasonal(clim_start: i32, clim_end: i32) -> Self {
        Binning::Seasonal {
            steps_per_year: 4,
            clim_start,
            clim_end,
        }
    }

    /// Twelve months per year.
    pub fn monthly(clim_start: i32, clim_end: i32) -> Self {
        Binning::Seasonal {
            steps_per_year: 12,
            clim_start,
            clim_end,
        }
    }

    /// Lead positions between consecutive years of a block.
    pub fn stride(&self) -> usize {
        match self {
            Binning::Annual => 1,
            Binning::Seasonal { steps_per_year, .. } => *steps_per_year,
        }
    }

    /// Amount subtracted from the cube's `L` coordinates to label output
    /// leads. Only three-month seasons are shifted; monthly and annual leads
    /// keep their labels.
    pub fn lead_offset(&self) -> i64 {
        match self {
            Binning::Seasonal {
                steps_per_year: 4, ..
            } => SEASONAL_LEAD_OFFSET,
            _ => 0,
        }
    }
}

/// Settings for [`compute_skill`].
///
/// # Example
///
/// ```
/// use skillcast_skill::{Binning, SkillConfig};
///
/// let config = SkillConfig::new()
///     .with_binning(Binning::seasonal(1981, 2010))
///     .with_nleadavg(2)
///     .with_nleads(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SkillConfig {
    binning: Binning,
    nleadavg: usize,
    nleads: usize,
    resamp: usize,
    detrend: bool,
}

impl SkillConfig {
    /// Defaults: annual binning, `nleadavg = 1`, `nleads = 1`, `resamp = 0`
    /// (cross-member spread), no detrending.
    pub fn new() -> Self {
        Self {
            binning: Binning::Annual,
            nleadavg: 1,
            nleads: 1,
            resamp: 0,
            detrend: false,
        }
    }

    pub fn with_binning(mut self, binning: Binning) -> Self {
        self.binning = binning;
        self
    }

    /// Sets the number of years averaged in each lead block.
    pub fn with_nleadavg(mut self, nleadavg: usize) -> Self {
        self.nleadavg = nleadavg;
        self
    }

    /// Sets the number of output leads.
    pub fn with_nleads(mut self, nleads: usize) -> Self {
        self.nleads = nleads;
        self
    }

    /// Sets the number of single-member draws for the total spread; 0 uses
    /// the mean over all members instead.
    pub fn with_resamp(mut self, resamp: usize) -> Self {
        self.resamp = resamp;
        self
    }

    pub fn with_detrend(mut self, detrend: bool) -> Self {
        self.detrend = detrend;
        self
    }

    // --- Accessors ---

    pub fn binning(&self) -> &Binning {
        &self.binning
    }

    pub fn nleadavg(&self) -> usize {
        self.nleadavg
    }

    pub fn nleads(&self) -> usize {
        self.nleads
    }

    pub fn resamp(&self) -> usize {
        self.resamp
    }

    pub fn detrend(&self) -> bool {
        self.detrend
    }

    /// Lead positions averaged for output lead `i`.
    pub fn block(&self, i: usize) -> Vec<usize> {
        let stride = self.binning.stride();
        (0..self.nleadavg).map(|k| i + k * stride).collect()
    }

    /// Validates block sizes and the climatology period.
    pub fn validate(&self) -> Result<(), SkillError> {
        if self.nleadavg == 0 {
            return Err(SkillError::InvalidConfig {
                reason: "nleadavg must be >= 1".to_string(),
            });
        }
        if self.nleads == 0 {
            return Err(SkillError::InvalidConfig {
                reason: "nleads must be >= 1".to_string(),
            });
        }
        if let Binning::Seasonal {
            steps_per_year,
            clim_start,
            clim_end,
        } = self.binning
        {
            if steps_per_year == 0 {
                return Err(SkillError::InvalidConfig {
                    reason: "steps_per_year must be >= 1".to_string(),
                });
            }
            if clim_start > clim_end {
                return Err(SkillError::InvalidConfig {
                    reason: format!(
                        "climatology start {clim_start} is after end {clim_end}"
                    ),
                });
            }
        }
        Ok(())
    }

    /// Checks that the last block fits within `lead_count` leads.
    pub fn validate_for(&self, lead_count: usize) -> Result<(), SkillError> {
        self.validate()?;
        let last = self.nleads - 1 + (self.nleadavg - 1) * self.binning.stride();
        if last >= lead_count {
            return Err(SkillError::InvalidConfig {
                reason: format!(
                    "lead block ending at position {last} exceeds the {lead_count} available leads"
                ),
            });
        }
        Ok(())
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Month-filtered, anomalised and year-labelled observations for one
/// representative month.
fn seasonal_observations(
    obs: &LabeledArray,
    month: u8,
    clim_start: i32,
    clim_end: i32,
) -> Result<LabeledArray, SkillError> {
    if obs.coord(TIME)?.as_times().is_none() {
        return Err(LabeledError::IncompatibleCoordinates {
            axis: TIME.to_string(),
            reason: "seasonal binning needs calendar dates".to_string(),
        }
        .into());
    }
    let in_month = obs.filter_coord(TIME, |v| {
        matches!(v, CoordValue::Time(d) if d.month() == month)
    })?;
    let climatology = in_month
        .filter_coord(TIME, |v| {
            matches!(v, CoordValue::Time(d) if (clim_start..=clim_end).contains(&d.year()))
        })?
        .mean(TIME)?;
    let anomaly = in_month.subtract(&climatology)?;
    let years: Vec<i64> = anomaly
        .coord(TIME)?
        .as_times()
        .unwrap_or_default()
        .iter()
        .map(|d| i64::from(d.year()))
        .collect();
    Ok(anomaly.assign_coord(TIME, years)?)
}

/// Skill scores over blocks of `nleadavg` leads, with the spread terms.
///
/// For output lead `i` the hindcast is averaged over the lead positions
/// `i + k * stride` (`k < nleadavg`) and labelled with the verification year
/// of the block. With [`Binning::Annual`] the observations (integer years on
/// `time`) get the same centred running mean and are centred after the
/// join. With [`Binning::Seasonal`] the observations (dates on `time`) are
/// restricted to the block's verification month and anomalised against the
/// climatology years first. Output leads are the first `nleads` `L`
/// coordinates, shifted by [`Binning::lead_offset`].
///
/// `rng` is only drawn from when `resamp > 0`.
///
/// # Errors
///
/// - [`SkillError::InvalidConfig`] if `config` is invalid for the cube.
/// - [`SkillError::LengthMismatch`] if `times` does not match the cube.
/// - [`SkillError::MixedLeadMonths`] for seasonal binning when start years
///   disagree on a block's month.
#[tracing::instrument(skip_all, fields(nleads = config.nleads(), nleadavg = config.nleadavg()))]
pub fn compute_skill<R: Rng + ?Sized>(
    cube: &HindcastCube,
    times: &VerificationTimeCube,
    obs: &LabeledArray,
    config: &SkillConfig,
    rng: &mut R,
) -> Result<SkillResult, SkillError> {
    config.validate_for(cube.leads().len())?;
    times.check_matches(cube)?;

    let nleadavg = config.nleadavg();
    let rolled_obs = match config.binning() {
        Binning::Annual if nleadavg > 1 => Some(obs.rolling_mean_centered(TIME, nleadavg)?),
        _ => None,
    };

    let mut per_lead = Vec::with_capacity(config.nleads());
    for i in 0..config.nleads() {
        let block = config.block(i);
        let _lead = debug_span!("lead_block", i, first = block[0]).entered();

        let model = cube
            .array()
            .isel(LEAD, &block)?
            .mean(LEAD)?
            .rename(START_YEAR, TIME)?
            .assign_coord(TIME, times.block_years(&block))?;

        let (a, b) = match config.binning() {
            Binning::Annual => {
                let observed = rolled_obs.as_ref().unwrap_or(obs);
                let (a, b) = align_on_time(&model, observed)?;
                let b = b.subtract(&b.mean(TIME)?)?;
                (a, b)
            }
            Binning::Seasonal {
                clim_start,
                clim_end,
                ..
            } => {
                let month = times.lead_month(block[0])?;
                let mut observed = seasonal_observations(obs, month, *clim_start, *clim_end)?;
                if nleadavg > 1 {
                    observed = observed.rolling_mean_centered(TIME, nleadavg)?;
                }
                align_on_time(&model, &observed)?
            }
        };
        let (a, b) = maybe_detrend(a, b, config.detrend())?;

        let sigtot = if config.resamp() > 0 {
            resampled_spread(&a, config.resamp(), rng)?
        } else {
            member_spread(&a)?
        };
        per_lead.push(score(&a, &b, &sigtot, true)?);
    }

    let offset = config.binning().lead_offset();
    let leads = cube.leads()[..config.nleads()]
        .iter()
        .map(|l| l - offset)
        .collect();
    SkillResult::from_lead_metrics(leads, per_lead)
}
