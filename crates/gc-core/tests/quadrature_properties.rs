//! Property tests for the adaptive quadrature.

use gc_core::{QuadratureConfig, Tolerances, integrate};
use proptest::prelude::*;

fn tight() -> QuadratureConfig {
    QuadratureConfig {
        tol: Tolerances::uniform(1e-10),
        ..QuadratureConfig::default()
    }
}

proptest! {
    #[test]
    fn additive_over_subintervals(a in -5.0_f64..0.0, m in 0.0_f64..2.0, b in 2.0_f64..5.0) {
        let f = |x: f64| Ok((x * 0.7).sin() + x * x * 0.1);
        let whole = integrate(f, a, b, &tight()).unwrap().value;
        let left = integrate(f, a, m, &tight()).unwrap().value;
        let right = integrate(f, m, b, &tight()).unwrap().value;
        prop_assert!((whole - left - right).abs() < 1e-8);
    }

    #[test]
    fn monotone_in_upper_bound_for_positive_integrand(x in 0.1_f64..10.0, dx in 0.01_f64..5.0) {
        let f = |y: f64| Ok(1.0 / (1.0 + y * y));
        let lo = integrate(f, 0.0, x, &tight()).unwrap().value;
        let hi = integrate(f, 0.0, x + dx, &tight()).unwrap().value;
        prop_assert!(hi > lo);
        prop_assert!((hi - (x + dx).atan()).abs() < 1e-8);
    }
}

#[test]
fn default_tolerances_match_column_requirements() {
    let config = QuadratureConfig::default();
    assert_eq!(config.tol.abs, 1e-3);
    assert_eq!(config.tol.rel, 1e-3);
}
