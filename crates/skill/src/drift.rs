//! Lead-dependent drift removal against a reference-period climatology.

use skillcast_calendar::NoLeapDateTime;
use skillcast_labeled::LabeledArray;

use crate::axes::{LEAD, MEMBER, START_YEAR};
use crate::cube::VerificationTimeCube;
use crate::error::SkillError;

/// Output of [`remove_drift`].
#[derive(Debug, Clone, PartialEq)]
pub struct DriftRemoval {
    /// Input minus the climatology, same axes as the input.
    pub anomaly: LabeledArray,
    /// Per-lead mean over the reference period, without `Y` and `M`.
    pub climatology: LabeledArray,
}

/// Removes the per-lead climatology of `da` computed over start years whose
/// verification time falls strictly between Jan 1 00:00:00 of `y1` and
/// Dec 31 23:59:59 of `y2`.
///
/// `da` must carry `Y` and `L` axes matching `times` in length; a member axis
/// `M` is optional. The climatology averages over `M` (when present) and then
/// over `Y`, ignoring cells outside the reference period. Any other axes are
/// kept.
///
/// # Errors
///
/// - [`SkillError::MissingAxis`] if `Y` or `L` is absent.
/// - [`SkillError::LengthMismatch`] if `times` disagrees with `da` in shape.
#[tracing::instrument(skip_all, fields(y1 = y1, y2 = y2))]
pub fn remove_drift(
    da: &LabeledArray,
    times: &VerificationTimeCube,
    y1: i32,
    y2: i32,
) -> Result<DriftRemoval, SkillError> {
    for axis in [START_YEAR, LEAD] {
        if !da.has_axis(axis) {
            return Err(SkillError::MissingAxis {
                axis: axis.to_string(),
            });
        }
    }
    for (axis, expected) in [
        (START_YEAR, times.start_years().len()),
        (LEAD, times.leads().len()),
    ] {
        let got = da.len_of(axis)?;
        if got != expected {
            return Err(SkillError::LengthMismatch {
                field: axis.to_string(),
                expected,
                got,
            });
        }
    }

    let keep = times
        .mask_between(
            NoLeapDateTime::start_of_year(y1),
            NoLeapDateTime::end_of_year(y2),
        )
        .into_dyn();
    let reference = da.mask_where(&[START_YEAR, LEAD], &keep)?;
    let reference = if reference.has_axis(MEMBER) {
        reference.mean(MEMBER)?
    } else {
        reference
    };
    let climatology = reference.mean(START_YEAR)?;
    let anomaly = da.subtract(&climatology)?;
    Ok(DriftRemoval {
        anomaly,
        climatology,
    })
}
