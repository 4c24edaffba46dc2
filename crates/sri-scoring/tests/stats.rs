use sri_scoring::stats::{normal_cdf, percentile_of, z_score};

#[test]
fn cdf_at_zero_is_one_half() {
    assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
}

#[test]
fn cdf_is_symmetric() {
    for x in [0.1, 0.5, 1.0, 1.96, 3.0] {
        let total = normal_cdf(x) + normal_cdf(-x);
        assert!((total - 1.0).abs() < 1e-6, "asymmetry at {x}");
    }
}

#[test]
fn cdf_matches_known_quantiles() {
    // Φ(1.96) ≈ 0.975, Φ(1) ≈ 0.8413; approximation error bound 1.5e-7.
    assert!((normal_cdf(1.96) - 0.975_002).abs() < 1e-5);
    assert!((normal_cdf(1.0) - 0.841_345).abs() < 1e-5);
}

#[test]
fn cdf_saturates_in_the_tails() {
    assert!(normal_cdf(8.0) > 0.999_999);
    assert!(normal_cdf(-8.0) < 0.000_001);
    assert!(normal_cdf(8.0) <= 1.0);
    assert!(normal_cdf(-8.0) >= 0.0);
}

#[test]
fn zero_std_dev_yields_zero_not_nan() {
    let z = z_score(42.0, 10.0, 0.0);
    assert_eq!(z, 0.0);
    assert!(z.is_finite());
}

#[test]
fn z_score_is_signed_deviation_in_sd_units() {
    assert!((z_score(45.0, 35.0, 5.0) - 2.0).abs() < 1e-12);
    assert!((z_score(25.0, 35.0, 5.0) + 2.0).abs() < 1e-12);
}

#[test]
fn percentile_is_clamped_to_0_100() {
    for z in [-10.0, -1.0, 0.0, 1.0, 10.0] {
        let p = percentile_of(z);
        assert!((0.0..=100.0).contains(&p), "percentile {p} out of range");
    }
    assert!((percentile_of(0.0) - 50.0).abs() < 1e-5);
}
