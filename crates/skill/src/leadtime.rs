//! Skill of seasonally averaged hindcasts against season-binned observations.

use skillcast_labeled::LabeledArray;
use tracing::{debug, debug_span, warn};

use crate::axes::{LEAD, SEASON, START_YEAR, TIME, YEAR};
use crate::cube::{HindcastCube, VerificationTimeCube};
use crate::detrend::detrend_linear;
use crate::error::SkillError;
use crate::metrics::{member_spread, score};
use crate::result::SkillResult;
use crate::season::Season;

/// Offset between the raw 1-based lead index of a seasonal cube and the
/// reported lead time (seasons since initialisation, centred on the
/// three-month window).
pub const SEASONAL_LEAD_OFFSET: i64 = 2;

/// Inner join of a model slice and an observation slice on `time`.
///
/// Years present on only one side are dropped; an empty intersection is not
/// an error.
pub(crate) fn align_on_time(
    model: &LabeledArray,
    obs: &LabeledArray,
) -> Result<(LabeledArray, LabeledArray), SkillError> {
    let (a, b) = model.align(obs)?;
    let kept = a.len_of(TIME)?;
    if kept == 0 {
        warn!("no common years between hindcast and observations");
    } else if kept < model.len_of(TIME)? {
        let years = a.coord(TIME)?;
        let dropped: Vec<String> = model
            .coord(TIME)?
            .iter()
            .filter(|v| years.position(v).is_none())
            .map(|v| v.to_string())
            .collect();
        debug!(?dropped, kept, "hindcast years without observations dropped");
    }
    Ok((a, b))
}

/// Optionally detrends both aligned series along `time`.
pub(crate) fn maybe_detrend(
    a: LabeledArray,
    b: LabeledArray,
    detrend: bool,
) -> Result<(LabeledArray, LabeledArray), SkillError> {
    if detrend {
        Ok((detrend_linear(&a, TIME)?, detrend_linear(&b, TIME)?))
    } else {
        Ok((a, b))
    }
}

/// Hindcast slice at lead position `lead`, with `Y` relabelled to `time`
/// holding `years`.
pub(crate) fn lead_series(
    cube: &HindcastCube,
    lead: usize,
    years: Vec<i64>,
) -> Result<LabeledArray, SkillError> {
    Ok(cube
        .array()
        .index_axis(LEAD, lead)?
        .rename(START_YEAR, TIME)?
        .assign_coord(TIME, years)?)
}

/// Correlation, p-value, normalised RMSE, mean-squared skill score and ratio
/// of predictable components for every lead of a seasonally averaged
/// hindcast.
///
/// `obs` is indexed by `(season, year, ...)` with season labels
/// `DJF`/`MAM`/`JJA`/`SON` and integer years. At each lead the verification
/// month shared by all start years picks the observed season, the hindcast
/// start years are replaced by verification years, and both series are
/// joined on the years they share. Output leads are the cube's `L`
/// coordinates minus [`SEASONAL_LEAD_OFFSET`].
///
/// # Errors
///
/// - [`SkillError::LengthMismatch`] if `times` does not match the cube.
/// - [`SkillError::MixedLeadMonths`] if start years disagree on the month of
///   a lead.
/// - [`SkillError::UnsupportedSeason`] if that month is not 1, 4, 7 or 10.
/// - [`SkillError::Labeled`] if `obs` lacks the season or the axes needed.
#[tracing::instrument(skip_all, fields(leads = cube.leads().len(), detrend = detrend))]
pub fn leadtime_skill_seas(
    cube: &HindcastCube,
    times: &VerificationTimeCube,
    obs: &LabeledArray,
    detrend: bool,
) -> Result<SkillResult, SkillError> {
    times.check_matches(cube)?;

    let mut per_lead = Vec::with_capacity(cube.leads().len());
    for (i, &lead) in cube.leads().iter().enumerate() {
        let _lead = debug_span!("lead", lead).entered();
        let season = Season::from_representative_month(times.lead_month(i)?)?;
        let model = lead_series(cube, i, times.years_at_lead(i))?;
        let observed = obs.sel(SEASON, season.label())?.rename(YEAR, TIME)?;

        let (a, b) = align_on_time(&model, &observed)?;
        let (a, b) = maybe_detrend(a, b, detrend)?;
        let sigtot = member_spread(&a)?;
        per_lead.push(score(&a, &b, &sigtot, false)?);
    }

    let leads = cube
        .leads()
        .iter()
        .map(|l| l - SEASONAL_LEAD_OFFSET)
        .collect();
    SkillResult::from_lead_metrics(leads, per_lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Metric;
    use skillcast_calendar::NoLeapDate;
    use skillcast_labeled::{CoordValues, Coordinate};

    // Four start years, one lead verifying in January of the following year.
    fn setup(month: u8) -> (HindcastCube, VerificationTimeCube, LabeledArray) {
        let years = vec![2000_i64, 2001, 2002, 2003];
        let signal = [0.0, 1.0, -1.0, 2.0];
        let mut values = Vec::new();
        for s in signal {
            values.extend([s + 0.1, s - 0.1]);
        }
        let cube = HindcastCube::new(
            LabeledArray::from_vec(
                vec![
                    Coordinate::new("Y", years.clone()),
                    Coordinate::new("L", vec![3_i64]),
                    Coordinate::new("M", CoordValues::range(1, 2)),
                ],
                values,
            )
            .unwrap(),
        )
        .unwrap();
        let times = VerificationTimeCube::from_fn(years, vec![3], |y, _| {
            NoLeapDate::new(y as i32 + 1, month, 15).unwrap()
        });
        let mut obs_values = vec![9.0; 5];
        obs_values.extend([0.0, 1.0, -1.0, 2.0, 5.0]);
        obs_values.extend(vec![9.0; 10]);
        let obs = LabeledArray::from_vec(
            vec![
                Coordinate::new("season", vec!["MAM", "DJF", "JJA", "SON"]),
                Coordinate::new("year", vec![2000_i64, 2001, 2002, 2003, 2004]),
            ],
            obs_values,
        )
        .unwrap();
        (cube, times, obs)
    }

    #[test]
    fn january_selects_djf() {
        let (cube, times, obs) = setup(1);
        let r = leadtime_skill_seas(&cube, &times, &obs, false).unwrap();
        assert_eq!(r.leads(), &[1]);
        let corr = r.at_lead(1).unwrap().scalar(Metric::Corr).unwrap();
        // verification years 2001..=2004 pair with DJF [1, -1, 2, 5]
        assert!(corr.is_finite());
        assert!(r.get(Metric::Nrmse).is_some());
    }

    #[test]
    fn february_is_unsupported() {
        let (cube, times, obs) = setup(2);
        assert_eq!(
            leadtime_skill_seas(&cube, &times, &obs, false).unwrap_err(),
            SkillError::UnsupportedSeason { month: 2 }
        );
    }
}
