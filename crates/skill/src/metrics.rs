//! Deterministic skill scores of an aligned ensemble against observations.

use std::collections::BTreeMap;

use rand::Rng;
use skillcast_labeled::{CoordValues, Coordinate, LabeledArray};
use skillcast_stats::{mse, pearson_r, pearson_r_eff_p_value, rmse};

use crate::axes::{ITERATION, MEMBER, TIME};
use crate::error::SkillError;
use crate::result::Metric;

/// Mean over members of each member's standard deviation along `time`.
pub(crate) fn member_spread(a: &LabeledArray) -> Result<LabeledArray, SkillError> {
    Ok(a.std(TIME, 0)?.mean(MEMBER)?)
}

/// Mean over `draws` randomly picked single members of the member's
/// standard deviation along `time`.
pub(crate) fn resampled_spread<R: Rng + ?Sized>(
    a: &LabeledArray,
    draws: usize,
    rng: &mut R,
) -> Result<LabeledArray, SkillError> {
    let members = a.len_of(MEMBER)?;
    if members == 0 {
        return Err(SkillError::EmptyAxis {
            axis: MEMBER.to_string(),
        });
    }
    let spreads = (0..draws)
        .map(|_| -> Result<LabeledArray, SkillError> {
            let m = rng.random_range(0..members);
            Ok(a.index_axis(MEMBER, m)?.std(TIME, 0)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let iterations = Coordinate::new(ITERATION, CoordValues::range(0, draws));
    let stacked = LabeledArray::concat(&spreads, iterations)?;
    Ok(stacked.mean(ITERATION)?)
}

/// Scores the ensemble `a` (axes `time`, `M`, ...) against observations `b`
/// (axes `time`, ...) already aligned on `time`.
///
/// `sigtot` is the total spread estimate used by the ratio of predictable
/// components. With `extended` the spread terms themselves are returned as
/// well.
pub(crate) fn score(
    a: &LabeledArray,
    b: &LabeledArray,
    sigtot: &LabeledArray,
    extended: bool,
) -> Result<BTreeMap<Metric, LabeledArray>, SkillError> {
    let amean = a.mean(MEMBER)?;
    let sigobs = b.std(TIME, 0)?;
    let sigsig = amean.std(TIME, 0)?;

    let r = amean.reduce_pair(b, TIME, pearson_r)?;
    let pval = amean.reduce_pair(b, TIME, pearson_r_eff_p_value)?;
    let nrmse = amean
        .reduce_pair(b, TIME, rmse)?
        .broadcast_zip(&sigobs, |e, s| e / s)?;
    let msss = amean
        .reduce_pair(b, TIME, mse)?
        .broadcast_zip(&b.var(TIME, 0)?, |e, v| 1.0 - e / v)?;
    let s2t = sigsig.broadcast_zip(sigtot, |s, t| s / t)?;
    let rpc = r.broadcast_zip(&s2t, |r, ratio| if r > 0.0 { r / ratio } else { f64::NAN })?;

    let mut out = BTreeMap::from([
        (Metric::Corr, r),
        (Metric::Pval, pval),
        (Metric::Nrmse, nrmse),
        (Metric::Msss, msss),
        (Metric::Rpc, rpc),
    ]);
    if extended {
        out.insert(Metric::SigObs, sigobs);
        out.insert(Metric::SigSig, sigsig);
        out.insert(Metric::SigTot, sigtot.clone());
        out.insert(Metric::S2t, s2t);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ensemble(values: Vec<f64>) -> LabeledArray {
        // (time=4, M=2)
        LabeledArray::from_vec(
            vec![
                Coordinate::new("time", vec![2000_i64, 2001, 2002, 2003]),
                Coordinate::new("M", CoordValues::range(1, 2)),
            ],
            values,
        )
        .unwrap()
    }

    fn obs(values: Vec<f64>) -> LabeledArray {
        LabeledArray::from_vec(
            vec![Coordinate::new("time", vec![2000_i64, 2001, 2002, 2003])],
            values,
        )
        .unwrap()
    }

    #[test]
    fn perfect_forecast() {
        let a = ensemble(vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
        let b = obs(vec![1.0, 2.0, 3.0, 4.0]);
        let sigtot = member_spread(&a).unwrap();
        let m = score(&a, &b, &sigtot, true).unwrap();
        assert_relative_eq!(m[&Metric::Corr].as_scalar().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[&Metric::Nrmse].as_scalar().unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[&Metric::Msss].as_scalar().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[&Metric::S2t].as_scalar().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[&Metric::Rpc].as_scalar().unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(m.len(), 9);
    }

    #[test]
    fn anticorrelated_rpc_is_nan() {
        let a = ensemble(vec![4.0, 4.5, 3.0, 2.5, 2.0, 2.5, 1.0, 0.5]);
        let b = obs(vec![1.0, 2.0, 3.0, 4.0]);
        let m = score(&a, &b, &member_spread(&a).unwrap(), false).unwrap();
        assert!(m[&Metric::Corr].as_scalar().unwrap() < 0.0);
        assert!(m[&Metric::Rpc].as_scalar().unwrap().is_nan());
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn resampled_spread_of_identical_members() {
        let a = ensemble(vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(3);
        let s = resampled_spread(&a, 20, &mut rng).unwrap();
        assert_relative_eq!(
            s.as_scalar().unwrap(),
            member_spread(&a).unwrap().as_scalar().unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn empty_intersection_gives_nan() {
        let a = ensemble(vec![1.0; 8]).isel("time", &[]).unwrap();
        let b = obs(vec![1.0; 4]).isel("time", &[]).unwrap();
        let m = score(&a, &b, &member_spread(&a).unwrap(), false).unwrap();
        assert!(m.values().all(|v| v.as_scalar().unwrap().is_nan()));
    }
}
