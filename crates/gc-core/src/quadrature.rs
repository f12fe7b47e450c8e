//! Adaptive Gauss-Kronrod quadrature.
//!
//! Globally adaptive 7/15-point Gauss-Kronrod integration: the interval with
//! the largest error estimate is bisected until the summed error estimate
//! falls below `max(abs, rel * |integral|)`. Holds no shared state, so any
//! number of integrations may run concurrently.

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Real, Tolerances, ensure_finite};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

/// Kronrod abscissae on [0, 1); the Gauss nodes are the odd entries.
const XGK: [Real; 8] = [
    0.991_455_371_120_812_639,
    0.949_107_912_342_758_525,
    0.864_864_423_359_769_073,
    0.741_531_185_599_394_440,
    0.586_087_235_467_691_130,
    0.405_845_151_377_397_167,
    0.207_784_955_007_898_468,
    0.0,
];

const WGK: [Real; 8] = [
    0.022_935_322_010_529_225,
    0.063_092_092_629_978_553,
    0.104_790_010_322_250_184,
    0.140_653_259_715_525_919,
    0.169_004_726_639_267_903,
    0.190_350_578_064_785_410,
    0.204_432_940_075_298_892,
    0.209_482_141_084_727_828,
];

const WG: [Real; 4] = [
    0.129_484_966_168_869_693,
    0.279_705_391_489_276_668,
    0.381_830_050_505_118_945,
    0.417_959_183_673_469_388,
];

const EVALS_PER_SEGMENT: usize = 15;

/// Quadrature configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadratureConfig {
    /// Absolute and relative error targets
    pub tol: Tolerances,
    /// Maximum number of integrand evaluations
    pub max_evaluations: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            tol: Tolerances::uniform(1e-3),
            max_evaluations: 15_000,
        }
    }
}

/// Quadrature result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureResult {
    /// Integral estimate
    pub value: Real,
    /// Estimated absolute error
    pub error_estimate: Real,
    /// Number of integrand evaluations
    pub evaluations: usize,
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    a: Real,
    b: Real,
    value: Real,
    error: Real,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

fn evaluate_segment<F>(f: &mut F, a: Real, b: Real) -> CoreResult<Segment>
where
    F: FnMut(Real) -> CoreResult<Real>,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let mut eval = |x: Real| -> CoreResult<Real> { ensure_finite(f(x)?, "quadrature integrand") };

    let fc = eval(center)?;
    let mut kronrod = fc * WGK[7];
    let mut gauss = fc * WG[3];

    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = eval(center - dx)? + eval(center + dx)?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        a,
        b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

/// Integrate `f` over `[a, b]`.
///
/// `b < a` yields the negated integral over `[b, a]`. Fails with
/// `IntegrationFailure` when the error target is not met within
/// `max_evaluations`, and propagates any error raised by the integrand.
pub fn integrate<F>(
    mut f: F,
    a: Real,
    b: Real,
    config: &QuadratureConfig,
) -> CoreResult<QuadratureResult>
where
    F: FnMut(Real) -> CoreResult<Real>,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(CoreError::InvalidArg {
            what: "quadrature bounds must be finite",
        });
    }
    if a == b {
        return Ok(QuadratureResult {
            value: 0.0,
            error_estimate: 0.0,
            evaluations: 0,
        });
    }
    if b < a {
        let r = integrate(f, b, a, config)?;
        return Ok(QuadratureResult {
            value: -r.value,
            ..r
        });
    }

    let first = evaluate_segment(&mut f, a, b)?;
    let mut evaluations = EVALS_PER_SEGMENT;
    let mut value = first.value;
    let mut error = first.error;
    let mut heap = BinaryHeap::from([first]);

    while error > config.tol.bound(value) {
        if evaluations + 2 * EVALS_PER_SEGMENT > config.max_evaluations {
            warn!(a, b, value, error, evaluations, "quadrature did not converge");
            return Err(CoreError::IntegrationFailure {
                tolerance: config.tol.rel.max(config.tol.abs),
                estimate: value,
                error_estimate: error,
                evaluations,
            });
        }

        // The heap is never empty here: it always holds the segments summing to `value`.
        let Some(worst) = heap.pop() else { break };
        let mid = 0.5 * (worst.a + worst.b);
        let left = evaluate_segment(&mut f, worst.a, mid)?;
        let right = evaluate_segment(&mut f, mid, worst.b)?;
        evaluations += 2 * EVALS_PER_SEGMENT;

        value += left.value + right.value - worst.value;
        error += left.error + right.error - worst.error;
        heap.push(left);
        heap.push(right);
    }

    // Re-sum to shed the drift of the running totals.
    let value: Real = heap.iter().map(|s| s.value).sum();
    let error_estimate: Real = heap.iter().map(|s| s.error).sum();
    if heap.len() > 1 {
        debug!(a, b, segments = heap.len(), evaluations, "quadrature subdivided");
    }

    Ok(QuadratureResult {
        value,
        error_estimate,
        evaluations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight() -> QuadratureConfig {
        QuadratureConfig {
            tol: Tolerances::uniform(1e-10),
            max_evaluations: 100_000,
        }
    }

    #[test]
    fn polynomial_is_exact() {
        let r = integrate(|x| Ok(3.0 * x * x + 2.0 * x + 1.0), 0.0, 2.0, &tight()).unwrap();
        assert!((r.value - 14.0).abs() < 1e-12);
        assert_eq!(r.evaluations, 15);
    }

    #[test]
    fn reversed_bounds_negate() {
        let cfg = QuadratureConfig::default();
        let fwd = integrate(|x| Ok(x.exp()), 0.0, 1.0, &cfg).unwrap();
        let rev = integrate(|x| Ok(x.exp()), 1.0, 0.0, &cfg).unwrap();
        assert_eq!(fwd.value, -rev.value);
        assert!((fwd.value - (1.0_f64.exp() - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_interval_is_zero() {
        let r = integrate(|_| Ok(1.0), 3.0, 3.0, &tight()).unwrap();
        assert_eq!(r.value, 0.0);
        assert_eq!(r.evaluations, 0);
    }

    #[test]
    fn kinked_integrand_subdivides() {
        let r = integrate(|x: f64| Ok((x - 0.3).abs()), 0.0, 1.0, &tight()).unwrap();
        let exact = 0.5 * 0.3 * 0.3 + 0.5 * 0.7 * 0.7;
        assert!((r.value - exact).abs() < 1e-9);
        assert!(r.evaluations > 15);
    }

    #[test]
    fn singular_integrand_reports_failure() {
        let cfg = QuadratureConfig {
            tol: Tolerances::uniform(1e-14),
            max_evaluations: 300,
        };
        let err = integrate(|x: f64| Ok(1.0 / x.sqrt()), 0.0, 1.0, &cfg).unwrap_err();
        match err {
            CoreError::IntegrationFailure {
                estimate,
                evaluations,
                ..
            } => {
                assert!((estimate - 2.0).abs() < 0.05);
                assert!(evaluations <= 300);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn integrand_error_propagates() {
        let err = integrate(
            |x| {
                if x > 0.5 {
                    Err(CoreError::Domain {
                        what: "test",
                        value: x,
                    })
                } else {
                    Ok(1.0)
                }
            },
            0.0,
            1.0,
            &tight(),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Domain { what: "test", .. }));
    }

    #[test]
    fn non_finite_integrand_is_rejected() {
        let err = integrate(|_| Ok(f64::NAN), 0.0, 1.0, &tight()).unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { .. }));
    }
}
