//! Gas-phase diffusion and the Golay plate height.
//!
//! ```text
//! D_M = T^1.75 / p · Cag
//! H   = 2·D_M/u + d²/96 · (6μ² − 16μ + 11) · u/D_M + 2/3 · df² · μ(1 − μ) · u/D_S
//! ```
//!
//! with u = 1/r_M, μ = 1/(1 + k) and D_S = D_M / 10⁴.

use crate::error::ColumnResult;
use crate::pressure::pressure;
use crate::pressure_model::PressureModel;
use crate::residency::mobile_phase_residency;
use crate::retention::retention_factor;
use crate::setup::ColumnSetup;
use crate::solute::Solute;
use gc_core::ensure_positive;
use gc_core::units::{Length, Time, m};

/// D_M / D_S.
pub const STATIONARY_DIFFUSION_RATIO: f64 = 1.0e4;

/// Mobile-phase diffusion coefficient D_M [m²/s] at (x, t).
pub fn diffusion_mobile(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    solute: &Solute,
    x: Length,
    t: Time,
) -> ColumnResult<f64> {
    let temperature = setup.temperature_at(x, t)?.value;
    let p = ensure_positive(pressure(model, setup, x, t)?.value, "pressure must be positive")?;
    Ok(ensure_positive(
        temperature.powf(1.75) / p * solute.cag,
        "diffusion coefficient must be positive",
    )?)
}

/// Local plate height H at (x, t).
pub fn plate_height(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    solute: &Solute,
    x: Length,
    t: Time,
) -> ColumnResult<Length> {
    let u = 1.0 / mobile_phase_residency(model, setup, x, t)?;
    let k = retention_factor(setup, solute, x, t)?;
    let mu = 1.0 / (1.0 + k);
    let d = setup.column.diameter_at(x).value;
    let df = setup.column.film_thickness_at(x).value;
    let dm = diffusion_mobile(model, setup, solute, x, t)?;
    let ds = dm / STATIONARY_DIFFUSION_RATIO;

    let longitudinal = 2.0 * dm / u;
    let mobile_transfer = d * d / 96.0 * (6.0 * mu * mu - 16.0 * mu + 11.0) * u / dm;
    let stationary_transfer = 2.0 / 3.0 * df * df * mu * (1.0 - mu) * u / ds;
    let h = ensure_positive(
        longitudinal + mobile_transfer + stationary_transfer,
        "plate height must be positive",
    )?;
    Ok(m(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::Isothermal;
    use crate::geometry::Column;
    use crate::pressure_model::Gradient;
    use crate::program::Program;
    use gc_core::units::{k, s};
    use gc_fluids::CarrierGas;

    fn setup(pout: f64) -> ColumnSetup {
        ColumnSetup::new(
            Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(pout)),
        )
    }

    #[test]
    fn diffusion_coefficient_value() {
        let st = setup(1e5);
        let solute = Solute::marker("CO2", 2.697e-4);
        let dm = diffusion_mobile(&Gradient, &st, &solute, m(10.0), s(0.0)).unwrap();
        let expected = 350.0_f64.powf(1.75) / 1e5 * 2.697e-4;
        assert!((dm - expected).abs() / expected < 1e-12);
        // Order of 1e-5 m²/s at 1 bar
        assert!(dm > 1e-6 && dm < 1e-4);
    }

    #[test]
    fn marker_has_no_stationary_term() {
        let st = setup(1e5);
        let marker = Solute::marker("methane", 3e-4);
        let h = plate_height(&Gradient, &st, &marker, m(5.0), s(0.0)).unwrap().value;

        let u = 1.0 / mobile_phase_residency(&Gradient, &st, m(5.0), s(0.0)).unwrap();
        let dm = diffusion_mobile(&Gradient, &st, &marker, m(5.0), s(0.0)).unwrap();
        let expected = 2.0 * dm / u + 2.5e-4_f64.powi(2) / 96.0 * 1.0 * u / dm;
        assert!((h - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn plate_height_is_finite_and_positive() {
        let st = setup(1e5);
        let solute = Solute::new("decane", 420.0, 32.0, 120.0, 1e-3, 1e-4);
        for x in [0.0, 2.0, 5.0, 9.0, 10.0] {
            let h = plate_height(&Gradient, &st, &solute, m(x), s(0.0)).unwrap().value;
            assert!(h.is_finite() && h > 0.0);
            // Sub-millimetre plates on a 0.25 mm column
            assert!(h < 5e-3, "H({x}) = {h}");
        }
    }

    #[test]
    fn vacuum_outlet_is_domain_error() {
        let st = setup(0.0);
        let marker = Solute::marker("methane", 3e-4);
        assert!(
            diffusion_mobile(&Gradient, &st, &marker, m(10.0), s(0.0))
                .unwrap_err()
                .is_domain()
        );
    }
}
