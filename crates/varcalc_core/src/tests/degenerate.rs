//! Insufficient data and zero-spread fallbacks

use super::SAMPLE_RETURNS;
use crate::config::{DF_FALLBACK, DF_MIN};
use crate::model::{Method, VarInput};
use crate::simulation::simulate_var;
use crate::stats::fit_degrees_of_freedom;

#[test]
fn test_constant_series_normal_is_zero() {
    let input = VarInput::new(vec![1.0; 5], 0.95, 1, 1_000, Method::Normal);
    let result = simulate_var(&input).unwrap();

    assert_eq!(result.var, 0.0);
    assert_eq!(result.sigma, Some(0.0));
    assert_eq!(result.mu, Some(0.0));
}

#[test]
fn test_constant_series_student_t_uses_fallback_df() {
    let input = VarInput::new(vec![0.02; 8], 0.99, 10, 1_000, Method::TMc);
    let result = simulate_var(&input).unwrap();

    assert_eq!(result.var, 0.0);
    assert_eq!(result.sigma, Some(0.0));
    assert_eq!(result.nu, Some(DF_FALLBACK));
    assert_eq!(result.z, Some(2.33));
}

#[test]
fn test_constant_series_with_inexact_sum_is_zero_spread() {
    // 0.01 * 50 and 0.1 * 10 do not sum exactly in f64
    for returns in [vec![0.01; 50], vec![0.1; 10]] {
        let normal = simulate_var(&VarInput::new(returns.clone(), 0.99, 10, 1_000, Method::Normal))
            .unwrap();
        assert_eq!(normal.var, 0.0, "normal on {}x{}", returns.len(), returns[0]);
        assert_eq!(normal.sigma, Some(0.0));

        let t_mc = simulate_var(&VarInput::new(returns.clone(), 0.99, 10, 1_000, Method::TMc))
            .unwrap();
        assert_eq!(t_mc.var, 0.0, "t_mc on {}x{}", returns.len(), returns[0]);
        assert_eq!(t_mc.sigma, Some(0.0));
        assert_eq!(t_mc.nu, Some(DF_FALLBACK));
    }
}

#[test]
fn test_df_fit_and_driver_agree_on_zero_spread() {
    let cases = [
        vec![0.01; 50],
        vec![0.1; 10],
        vec![-0.003; 7],
        vec![0.01, 0.01, 0.010000000000000002],
        SAMPLE_RETURNS.to_vec(),
    ];
    for returns in cases {
        let fitted = fit_degrees_of_freedom(&returns, DF_MIN, 60);
        let result =
            simulate_var(&VarInput::new(returns.clone(), 0.95, 1, 1_000, Method::TMc).with_seed(3))
                .unwrap();
        let sigma = result.sigma.unwrap();

        if sigma == 0.0 {
            assert_eq!(fitted, DF_FALLBACK, "{returns:?}");
            assert_eq!(result.nu, Some(DF_FALLBACK));
        } else {
            assert_eq!(result.nu, Some(fitted), "{returns:?}");
        }
    }
}

#[test]
fn test_constant_negative_series_bootstrap_loses_every_period() {
    // No spread, but bootstrap still resamples the observed loss
    let input = VarInput::new(vec![-0.01; 4], 0.95, 3, 1_000, Method::Bootstrap);
    let result = simulate_var(&input).unwrap();
    assert!((result.var - 0.03).abs() < 1e-15, "var={}", result.var);
}

#[test]
fn test_fewer_than_two_finite_values_is_nan() {
    let cases = [
        vec![],
        vec![0.01],
        vec![0.01, f64::NAN],
        vec![f64::INFINITY, f64::NEG_INFINITY, f64::NAN],
    ];
    for returns in cases {
        for method in Method::ALL {
            let input = VarInput::new(returns.clone(), 0.95, 1, 100, method);
            let result = simulate_var(&input).unwrap();
            assert!(result.var.is_nan(), "{method} on {returns:?}");
            assert!(result.is_insufficient());
            assert_eq!(result.sigma, None);
            assert_eq!(result.nu, None);
        }
    }
}

#[test]
fn test_non_finite_values_are_dropped() {
    let with_gaps = vec![0.01, f64::NAN, -0.02, f64::INFINITY, 0.015];
    let clean = vec![0.01, -0.02, 0.015];

    let a = simulate_var(&VarInput::new(with_gaps, 0.95, 1, 5_000, Method::Normal).with_seed(1))
        .unwrap();
    let b = simulate_var(&VarInput::new(clean, 0.95, 1, 5_000, Method::Normal).with_seed(1))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_validation_precedes_data_checks() {
    // Even with no usable data, a bad request is still rejected
    let input = VarInput::new(vec![], 0.95, 2_501, 100, Method::Normal);
    assert_eq!(
        simulate_var(&input).unwrap_err().to_string(),
        "T too large (max=2500)"
    );
}
