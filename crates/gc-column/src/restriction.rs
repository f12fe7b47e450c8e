//! Flow restriction κ(x, t) = ∫₀ˣ η(y, t)·T(y, t)/d(y)⁴ dy.

use crate::error::ColumnResult;
use crate::setup::ColumnSetup;
use gc_core::units::{Length, Time, m};
use gc_core::{CoreError, QuadratureConfig, QuadratureResult, integrate};

/// κ(x, t) by adaptive quadrature of the restriction density.
pub(crate) fn integrated_restriction(setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
    if x.value == 0.0 {
        return Ok(0.0);
    }
    let r = integrate_column(
        |y| setup.restriction_density(m(y), t, setup.viscosity),
        0.0,
        x.value,
        &setup.quadrature,
    )?;
    Ok(r.value)
}

/// Adaptive quadrature of an integrand that reports column errors.
///
/// The first integrand error aborts the integration and is returned as is.
pub(crate) fn integrate_column<F>(
    mut f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> ColumnResult<QuadratureResult>
where
    F: FnMut(f64) -> ColumnResult<f64>,
{
    let mut failure = None;
    let result = integrate(
        |y| {
            f(y).map_err(|e| {
                failure = Some(e);
                CoreError::InvalidArg {
                    what: "integrand failed",
                }
            })
        },
        a,
        b,
        config,
    );

    match (result, failure) {
        (_, Some(e)) => Err(e),
        (Ok(r), None) => Ok(r),
        (Err(e), None) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::{GradientTemperature, Isothermal, TemperatureField};
    use crate::geometry::{Column, Profile};
    use crate::program::Program;
    use gc_core::units::{k, s};
    use gc_fluids::CarrierGas;

    fn setup(column: Column, field: impl TemperatureField + 'static) -> ColumnSetup {
        ColumnSetup::new(
            column,
            CarrierGas::He,
            field,
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(1e5)),
        )
    }

    #[test]
    fn zero_at_inlet() {
        let st = setup(
            Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            Isothermal::new(k(350.0)),
        );
        assert_eq!(integrated_restriction(&st, m(0.0), s(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn tapered_column_matches_analytic_integral() {
        // ∫₀ᴸ dy/(a + b·y)⁴ = [(a)^-3 − (a + bL)^-3] / (3b)
        let (d0, d1, len) = (2.5e-4_f64, 2.0e-4_f64, 10.0);
        let st = setup(
            Column::new(m(len), Profile::taper(m(d0), m(d1)), Profile::constant(m(2.5e-7))).unwrap(),
            Isothermal::new(k(350.0)),
        );
        let g = st.viscosity_at(m(0.0), s(0.0)).unwrap().value * 350.0;
        let b = (d1 - d0) / len;
        let expected = g * (d0.powi(-3) - d1.powi(-3)) / (3.0 * b);
        let got = integrated_restriction(&st, m(len), s(0.0)).unwrap();
        assert!((got - expected).abs() / expected < 1e-3, "{got} vs {expected}");
    }

    #[test]
    fn temperature_error_escapes_quadrature() {
        let st = setup(
            Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            GradientTemperature::new(Program::constant(10.0), Program::constant(-100.0), m(10.0)),
        );
        let err = integrated_restriction(&st, m(10.0), s(0.0)).unwrap_err();
        assert!(err.is_domain(), "{err}");
    }
}
