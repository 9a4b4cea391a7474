//! Skill metrics collected per lead time.

use std::collections::BTreeMap;
use std::fmt;

use skillcast_labeled::{Coordinate, LabeledArray, LabeledError};

use crate::axes::LEAD;
use crate::error::SkillError;

/// A verification metric produced by the skill engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Pearson correlation of ensemble mean and observations.
    Corr,
    /// Two-sided p-value of `Corr` on the effective sample size.
    Pval,
    /// RMSE of the ensemble mean divided by the observed standard deviation.
    Nrmse,
    /// Mean-squared skill score against the observed variance.
    Msss,
    /// Ratio of predictable components, NaN where `Corr <= 0`.
    Rpc,
    /// Observed standard deviation.
    SigObs,
    /// Standard deviation of the ensemble mean.
    SigSig,
    /// Total (per-member) standard deviation.
    SigTot,
    /// Signal-to-total ratio `sig_sig / sig_tot`.
    S2t,
}

impl Metric {
    /// Metrics of the season-binned engine.
    pub const CORE: [Metric; 5] = [
        Metric::Corr,
        Metric::Pval,
        Metric::Nrmse,
        Metric::Msss,
        Metric::Rpc,
    ];

    /// Metrics of the generalized engine.
    pub const EXTENDED: [Metric; 9] = [
        Metric::Corr,
        Metric::Pval,
        Metric::Nrmse,
        Metric::Msss,
        Metric::Rpc,
        Metric::SigObs,
        Metric::SigSig,
        Metric::SigTot,
        Metric::S2t,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Corr => "corr",
            Metric::Pval => "pval",
            Metric::Nrmse => "nrmse",
            Metric::Msss => "msss",
            Metric::Rpc => "rpc",
            Metric::SigObs => "sig_obs",
            Metric::SigSig => "sig_sig",
            Metric::SigTot => "sig_tot",
            Metric::S2t => "s2t",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skill metrics for a range of lead times.
///
/// Every metric array carries a leading `L` axis holding the output lead
/// labels, followed by whatever axes the hindcast carried after `M`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillResult {
    leads: Vec<i64>,
    metrics: BTreeMap<Metric, LabeledArray>,
}

impl SkillResult {
    /// Stacks per-lead metric maps along a new `L` axis labelled `leads`.
    ///
    /// # Errors
    ///
    /// [`SkillError::LengthMismatch`] if `per_lead` and `leads` differ in
    /// length or the maps disagree on which metrics they hold.
    pub fn from_lead_metrics(
        leads: Vec<i64>,
        per_lead: Vec<BTreeMap<Metric, LabeledArray>>,
    ) -> Result<Self, SkillError> {
        if per_lead.len() != leads.len() {
            return Err(SkillError::LengthMismatch {
                field: LEAD.to_string(),
                expected: leads.len(),
                got: per_lead.len(),
            });
        }
        let Some(first) = per_lead.first() else {
            return Ok(Self {
                leads,
                metrics: BTreeMap::new(),
            });
        };
        let mut metrics = BTreeMap::new();
        for &metric in first.keys() {
            let slices = per_lead
                .iter()
                .map(|m| {
                    m.get(&metric).cloned().ok_or_else(|| SkillError::LengthMismatch {
                        field: metric.name().to_string(),
                        expected: per_lead.len(),
                        got: per_lead.iter().filter(|m| m.contains_key(&metric)).count(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let stacked = LabeledArray::concat(&slices, Coordinate::new(LEAD, leads.clone()))?;
            metrics.insert(metric, stacked);
        }
        Ok(Self { leads, metrics })
    }

    /// Output lead labels.
    pub fn leads(&self) -> &[i64] {
        &self.leads
    }

    pub fn get(&self, metric: Metric) -> Option<&LabeledArray> {
        self.metrics.get(&metric)
    }

    pub fn metrics(&self) -> &BTreeMap<Metric, LabeledArray> {
        &self.metrics
    }

    /// Metric values at one lead label, without the `L` axis.
    pub fn at_lead(&self, lead: i64) -> Option<LeadSkill> {
        let position = self.leads.iter().position(|&l| l == lead)?;
        let metrics = self
            .metrics
            .iter()
            .map(|(&m, a)| a.index_axis(LEAD, position).map(|v| (m, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .ok()?;
        Some(LeadSkill { lead, metrics })
    }

    /// Ordered lead → metrics view.
    pub fn by_lead(&self) -> Vec<LeadSkill> {
        self.leads.iter().filter_map(|&l| self.at_lead(l)).collect()
    }

    /// Stacks results along a new leading axis `axis` (e.g. `iteration`).
    ///
    /// The stacked arrays keep `L` right after the new axis.
    pub fn stack(results: &[SkillResult], axis: Coordinate) -> Result<Self, SkillError> {
        let first = results.first().ok_or(LabeledError::EmptyConcat)?;
        let mut metrics = BTreeMap::new();
        for &metric in first.metrics.keys() {
            let slices = results
                .iter()
                .map(|r| {
                    r.get(metric).cloned().ok_or_else(|| SkillError::LengthMismatch {
                        field: metric.name().to_string(),
                        expected: results.len(),
                        got: results.iter().filter(|r| r.get(metric).is_some()).count(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            metrics.insert(metric, LabeledArray::concat(&slices, axis.clone())?);
        }
        Ok(Self {
            leads: first.leads.clone(),
            metrics,
        })
    }

    /// NaN-skipping mean of every metric along `axis`.
    pub fn mean_over(&self, axis: &str) -> Result<Self, SkillError> {
        let metrics = self
            .metrics
            .iter()
            .map(|(&m, a)| a.mean(axis).map(|v| (m, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            leads: self.leads.clone(),
            metrics,
        })
    }
}

/// Metrics at a single lead time.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSkill {
    pub lead: i64,
    pub metrics: BTreeMap<Metric, LabeledArray>,
}

impl LeadSkill {
    /// Scalar value of `metric` when the hindcast had no trailing axes.
    pub fn scalar(&self, metric: Metric) -> Option<f64> {
        self.metrics.get(&metric).and_then(LabeledArray::as_scalar)
    }
}
