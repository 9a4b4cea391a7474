//! Integration tests for the season-binned lead-time engine and its
//! resampling driver.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use skillcast_calendar::NoLeapDate;
use skillcast_labeled::{CoordValues, Coordinate, LabeledArray};
use skillcast_skill::{
    HindcastCube, Metric, ResampleConfig, SeasonBinnedSkill, SkillError, VerificationTimeCube,
    leadtime_skill_seas, leadtime_skill_seas_resamp, resample_skill,
};

const MEMBERS: usize = 5;
const SEASONS: [&str; 4] = ["DJF", "MAM", "JJA", "SON"];

struct Setup {
    cube: HindcastCube,
    times: VerificationTimeCube,
    obs: LabeledArray,
}

fn start_years() -> Vec<i64> {
    (1981..=2010).collect()
}

/// Leads 3, 6 and 9 verify in January, April and July of the year after
/// initialisation. The ensemble follows the observed signal in DJF and JJA
/// and its negative in MAM.
fn setup(seed: u64) -> Setup {
    let years = start_years();
    let n = years.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();

    let signal: Vec<f64> = (0..SEASONS.len() * n)
        .map(|_| normal.sample(&mut rng))
        .collect();
    let obs = LabeledArray::from_vec(
        vec![
            Coordinate::new("season", SEASONS.to_vec()),
            Coordinate::new("year", CoordValues::range(1982, n)),
        ],
        signal.clone(),
    )
    .unwrap();

    let lead_season = [(0_usize, 1.0), (1, -1.0), (2, 1.0)];
    let mut values = Vec::with_capacity(n * lead_season.len() * MEMBERS);
    for y in 0..n {
        for &(season, sign) in &lead_season {
            for _ in 0..MEMBERS {
                values.push(sign * signal[season * n + y] + 0.3 * normal.sample(&mut rng));
            }
        }
    }
    let cube = HindcastCube::new(
        LabeledArray::from_vec(
            vec![
                Coordinate::new("Y", years.clone()),
                Coordinate::new("L", vec![3_i64, 6, 9]),
                Coordinate::new("M", CoordValues::range(1, MEMBERS)),
            ],
            values,
        )
        .unwrap(),
    )
    .unwrap();
    let times = VerificationTimeCube::from_fn(years, vec![3, 6, 9], |y, l| {
        NoLeapDate::new(y as i32 + 1, (l - 2) as u8, 15).unwrap()
    });
    Setup { cube, times, obs }
}

#[test]
fn leads_are_offset_by_two() {
    let s = setup(1);
    let r = leadtime_skill_seas(&s.cube, &s.times, &s.obs, false).unwrap();
    assert_eq!(r.leads(), &[1, 4, 7]);
    for metric in Metric::CORE {
        assert_eq!(r.get(metric).unwrap().dims(), vec!["L"]);
    }
    assert!(r.get(Metric::SigTot).is_none());
}

#[test]
fn january_verification_uses_djf() {
    let s = setup(2);
    let r = leadtime_skill_seas(&s.cube, &s.times, &s.obs, false).unwrap();
    let djf = r.at_lead(1).unwrap();
    assert!(djf.scalar(Metric::Corr).unwrap() > 0.9);
    assert!(djf.scalar(Metric::Pval).unwrap() < 0.01);
    assert!(djf.scalar(Metric::Msss).unwrap() > 0.5);
    assert!(djf.scalar(Metric::Nrmse).unwrap() < 0.5);
}

#[test]
fn unmapped_month_fails() {
    let s = setup(3);
    let times = VerificationTimeCube::from_fn(start_years(), vec![3, 6, 9], |y, _| {
        NoLeapDate::new(y as i32 + 1, 2, 15).unwrap()
    });
    assert_eq!(
        leadtime_skill_seas(&s.cube, &times, &s.obs, false).unwrap_err(),
        SkillError::UnsupportedSeason { month: 2 }
    );
}

#[test]
fn rpc_is_nan_without_positive_correlation() {
    let s = setup(4);
    for detrend in [false, true] {
        let r = leadtime_skill_seas(&s.cube, &s.times, &s.obs, detrend).unwrap();
        let corr = r.get(Metric::Corr).unwrap().to_vec();
        let rpc = r.get(Metric::Rpc).unwrap().to_vec();
        for (c, p) in corr.iter().zip(&rpc) {
            if *c > 0.0 {
                assert!(p.is_finite() && *p > 0.0);
            } else {
                assert!(p.is_nan());
            }
        }
        // MAM is anti-correlated
        assert!(corr[1] < 0.0);
    }
}

#[test]
fn missing_observation_years_are_dropped() {
    let s = setup(5);
    let short_obs = s
        .obs
        .filter_coord("year", |v| v.as_f64().is_some_and(|y| y < 2000.0))
        .unwrap();
    let r = leadtime_skill_seas(&s.cube, &s.times, &short_obs, false).unwrap();
    assert!(r.at_lead(1).unwrap().scalar(Metric::Corr).unwrap() > 0.9);
}

#[test]
fn resampled_size_must_be_smaller_than_ensemble() {
    let s = setup(6);
    let mut rng = StdRng::seed_from_u64(0);
    for n in [MEMBERS, MEMBERS + 1] {
        let err =
            leadtime_skill_seas_resamp(&s.cube, &s.times, &s.obs, 3, n, false, &mut rng).unwrap_err();
        assert!(matches!(err, SkillError::InvalidConfig { .. }));
    }
}

#[test]
fn resampling_produces_one_result_per_draw() {
    let s = setup(7);
    let engine = SeasonBinnedSkill::new(&s.times, &s.obs);
    let config = ResampleConfig::new(4, 3).with_mean(false);
    let mut rng = StdRng::seed_from_u64(8);
    let dist = resample_skill(&engine, &s.cube, &config, &mut rng).unwrap();

    assert_eq!(dist.len(), 4);
    assert_eq!(dist.draws().len(), 4);
    assert!(
        dist.draws()
            .iter()
            .all(|d| d.len() == 3 && d.iter().all(|&m| m < MEMBERS))
    );

    let stacked = dist.summarize(&config).unwrap();
    assert_eq!(
        stacked.get(Metric::Corr).unwrap().dims(),
        vec!["iteration", "L"]
    );

    let full = leadtime_skill_seas(&s.cube, &s.times, &s.obs, false).unwrap();
    let mean = dist.mean().unwrap();
    assert_eq!(mean.leads(), full.leads());
    assert_eq!(mean.get(Metric::Corr).unwrap().dims(), vec!["L"]);
    assert!(mean.at_lead(1).unwrap().scalar(Metric::Corr).unwrap() > 0.8);
}

#[test]
fn resampling_is_reproducible() {
    let s = setup(9);
    let run = |seed| {
        leadtime_skill_seas_resamp(
            &s.cube,
            &s.times,
            &s.obs,
            3,
            2,
            false,
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    };
    let a = run(10);
    let b = run(10);
    assert_eq!(
        a.get(Metric::Corr).unwrap().to_vec(),
        b.get(Metric::Corr).unwrap().to_vec()
    );
}
