use approx::assert_relative_eq;
use skillcast_stats::{effective_sample_size, pearson_r, pearson_r_eff_p_value};
use statrs::distribution::{ContinuousCDF, StudentsT};

fn series() -> (Vec<f64>, Vec<f64>) {
    let a = vec![
        0.31, -1.20, 0.84, 2.05, -0.42, 1.51, -0.93, 0.12, 0.71, -0.25, 1.10, -0.66,
    ];
    let b = vec![
        0.12, -0.81, 1.13, 1.24, 0.35, 0.92, -1.41, 0.58, 0.22, 0.41, 0.77, -0.30,
    ];
    (a, b)
}

#[test]
fn p_value_matches_two_sided_student_t() {
    let (a, b) = series();
    let r = pearson_r(&a, &b);
    let dof = effective_sample_size(&a, &b) - 2.0;
    assert!(dof > 0.0);

    let t = r * (dof / ((1.0 - r) * (1.0 + r))).sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof).unwrap();
    let expected = 2.0 * (1.0 - dist.cdf(t.abs()));

    assert_relative_eq!(pearson_r_eff_p_value(&a, &b), expected, epsilon = 1e-8);
}

#[test]
fn p_value_symmetric_in_sign_of_r() {
    let (a, b) = series();
    let neg_b: Vec<f64> = b.iter().map(|v| -v).collect();
    assert_relative_eq!(
        pearson_r_eff_p_value(&a, &b),
        pearson_r_eff_p_value(&a, &neg_b),
        epsilon = 1e-12
    );
}

#[test]
fn serial_correlation_reduces_sample_size() {
    // Smooth, strongly autocorrelated series.
    let a: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).sin()).collect();
    let b: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3 + 0.2).sin()).collect();
    assert!(effective_sample_size(&a, &b) < 20.0);
}
