//! Inlet pressure and volume flow, whichever of the two is not programmed.

use crate::boundary::ControlMode;
use crate::error::{ColumnError, ColumnResult};
use crate::pressure::FLOW_FACTOR;
use crate::pressure_model::PressureModel;
use crate::setup::ColumnSetup;
use gc_core::checked_sqrt;
use gc_core::units::{Pressure, Time, VolumeRate, m3ps, pa};

/// Inlet pressure at time `t`.
///
/// Under flow control: `pin = sqrt(pout² + 256/π · P_N/T_N · κ_in · F)`.
pub fn inlet_pressure(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    t: Time,
) -> ColumnResult<Pressure> {
    match setup.boundary.control {
        ControlMode::Pressure => Ok(pa(setup.boundary.inlet_value(t))),
        ControlMode::Flow => {
            let flow = setup.boundary.inlet_value(t);
            let pout = setup.boundary.outlet_pressure(t).value;
            let kappa = model.inlet_restriction(setup, t)?;
            Ok(pa(checked_sqrt(
                pout * pout + FLOW_FACTOR * flow * kappa,
                "inlet pressure radicand",
            )?))
        }
    }
}

/// Normalized volume flow at time `t`.
///
/// Under pressure control: `F = π/256 · T_N/P_N · (pin² − pout²) / κ(L)`.
pub fn flow(model: &dyn PressureModel, setup: &ColumnSetup, t: Time) -> ColumnResult<VolumeRate> {
    match setup.boundary.control {
        ControlMode::Flow => Ok(m3ps(setup.boundary.inlet_value(t))),
        ControlMode::Pressure => {
            let pin = setup.boundary.inlet_value(t);
            let pout = setup.boundary.outlet_pressure(t).value;
            let kappa = model.column_restriction(setup, t)?;
            if !(kappa.is_finite() && kappa > 0.0) {
                return Err(ColumnError::Domain {
                    what: "column flow restriction must be positive",
                    value: kappa,
                });
            }
            Ok(m3ps((pin * pin - pout * pout) / (FLOW_FACTOR * kappa)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::Isothermal;
    use crate::geometry::Column;
    use crate::pressure::pressure;
    use crate::pressure_model::{Gradient, Uniform};
    use crate::program::Program;
    use gc_core::units::{k, m, s};
    use gc_fluids::CarrierGas;

    fn setup(boundary: Boundary) -> ColumnSetup {
        ColumnSetup::new(
            Column::uniform(m(30.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            CarrierGas::He,
            Isothermal::new(k(373.15)),
            boundary,
        )
    }

    #[test]
    fn flow_and_inlet_pressure_invert_each_other() {
        let by_pressure = setup(Boundary::pressure_controlled(
            Program::constant(250_000.0),
            Program::constant(101_300.0),
        ));
        for model in [&Uniform::default() as &dyn PressureModel, &Gradient] {
            let f = flow(model, &by_pressure, s(0.0)).unwrap().value;
            assert!(f > 0.0);

            let by_flow = setup(Boundary::flow_controlled(
                Program::constant(f),
                Program::constant(101_300.0),
            ));
            let pin = inlet_pressure(model, &by_flow, s(0.0)).unwrap().value;
            assert!((pin - 250_000.0).abs() / 250_000.0 < 1e-9, "pin = {pin}");
        }
    }

    #[test]
    fn inlet_pressure_matches_pressure_at_inlet() {
        let st = setup(Boundary::flow_controlled(
            Program::constant(1.0 / 6.0e7),
            Program::constant(0.0),
        ));
        for model in [&Uniform::default() as &dyn PressureModel, &Gradient] {
            let pin = inlet_pressure(model, &st, s(0.0)).unwrap().value;
            let p0 = pressure(model, &st, m(0.0), s(0.0)).unwrap().value;
            assert!((pin - p0).abs() / p0 < 1e-3, "{pin} vs {p0}");
        }
    }

    #[test]
    fn programmed_quantities_pass_through() {
        let st = setup(Boundary::pressure_controlled(
            Program::constant(2e5),
            Program::constant(1e5),
        ));
        assert_eq!(inlet_pressure(&Gradient, &st, s(10.0)).unwrap(), pa(2e5));

        let st = setup(Boundary::flow_controlled(
            Program::constant(2e-8),
            Program::constant(1e5),
        ));
        assert_eq!(flow(&Gradient, &st, s(10.0)).unwrap(), m3ps(2e-8));
    }

    #[test]
    fn typical_flow_magnitude() {
        // 30 m × 0.25 mm at 100 °C and 150 kPa gauge: around 1.5 mL/min.
        let st = setup(Boundary::pressure_controlled(
            Program::constant(251_300.0),
            Program::constant(101_300.0),
        ));
        let f_ml_min = flow(&Gradient, &st, s(0.0)).unwrap().value * 6.0e7;
        assert!(f_ml_min > 0.5 && f_ml_min < 5.0, "F = {f_ml_min} mL/min");
    }
}
