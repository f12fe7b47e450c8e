//! Plausibility checks of a run before any evaluation.
//!
//! Programs are piecewise linear, so checking the breakpoints of every program
//! (and both column ends for axially varying fields) covers the clamped
//! program range.

use crate::boundary::ControlMode;
use crate::error::{ColumnError, ColumnResult};
use crate::model::ColumnModel;
use crate::program::Extrapolation;
use gc_core::units::{m, s};
use tracing::{debug, warn};

pub fn validate(model: &ColumnModel) -> ColumnResult<()> {
    let setup = model.setup();
    setup.column.check()?;

    if !setup.viscosity.supports(setup.gas) {
        return Err(gc_fluids::FluidError::UnsupportedGas {
            gas: setup.gas,
            model: setup.viscosity.name(),
            supported: setup.viscosity.supported_gases(),
        }
        .into());
    }

    let mut times = setup.temperature.breakpoints();
    times.extend(setup.boundary.breakpoints());
    times.push(0.0);
    times.sort_by(f64::total_cmp);
    times.dedup();

    let length = setup.length();
    for &t in &times {
        for x in [m(0.0), length] {
            let temperature = setup.temperature.temperature(x, s(t)).value;
            if !(temperature.is_finite() && temperature > 0.0) {
                return Err(ColumnError::Implausible {
                    what: "temperature must be positive",
                    t,
                });
            }
        }

        let pout = setup.boundary.outlet_pressure(s(t)).value;
        if !(pout.is_finite() && pout >= 0.0) {
            return Err(ColumnError::Implausible {
                what: "outlet pressure must be non-negative",
                t,
            });
        }

        let inlet = setup.boundary.inlet_value(s(t));
        match setup.boundary.control {
            ControlMode::Pressure if !(inlet.is_finite() && inlet >= pout) => {
                return Err(ColumnError::Implausible {
                    what: "inlet pressure must not fall below outlet pressure",
                    t,
                });
            }
            ControlMode::Flow if !(inlet.is_finite() && inlet >= 0.0) => {
                return Err(ColumnError::Implausible {
                    what: "flow must be non-negative",
                    t,
                });
            }
            _ => {}
        }
    }

    for (name, program) in [("inlet", &setup.boundary.inlet), ("outlet", &setup.boundary.outlet)] {
        if program.extrapolation() == Extrapolation::Linear {
            warn!(program = name, "values past the last breakpoint are extrapolated and not checked");
        }
    }
    if !setup.temperature.is_uniform() && model.pressure_model().kind().is_uniform() {
        warn!("uniform pressure model used with an axial temperature gradient");
    }
    debug!(
        checked_times = times.len(),
        model = %model.pressure_model().kind(),
        control = %setup.boundary.control,
        "column setup is plausible"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::{Isothermal, ProgrammedTemperature};
    use crate::geometry::Column;
    use crate::pressure_model::PressureModelKind;
    use crate::program::Program;
    use crate::setup::ColumnSetup;
    use gc_core::units::k;
    use gc_fluids::{CarrierGas, ViscosityModel};

    fn column() -> Column {
        Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap()
    }

    #[test]
    fn accepts_plain_setup() {
        let setup = ColumnSetup::new(
            column(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(1e5)),
        );
        assert!(ColumnModel::with_kind(setup, PressureModelKind::Gradient).validate().is_ok());
    }

    #[test]
    fn rejects_pressure_inversion_at_breakpoint() {
        let inlet = Program::new(vec![0.0, 60.0], vec![2e5, 0.9e5]).unwrap();
        let setup = ColumnSetup::new(
            column(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(inlet, Program::constant(1e5)),
        );
        let err = ColumnModel::with_kind(setup, PressureModelKind::Gradient)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ColumnError::Implausible { t, .. } if t == 60.0));
    }

    #[test]
    fn rejects_negative_temperature() {
        let program = Program::new(vec![0.0, 100.0], vec![300.0, -5.0]).unwrap();
        let setup = ColumnSetup::new(
            column(),
            CarrierGas::He,
            ProgrammedTemperature::new(program),
            Boundary::flow_controlled(Program::constant(1e-8), Program::constant(0.0)),
        );
        assert!(ColumnModel::with_kind(setup, PressureModelKind::Uniform).validate().is_err());
    }

    #[test]
    fn rejects_hp_with_argon() {
        let setup = ColumnSetup::new(
            column(),
            CarrierGas::Ar,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(1e5)),
        )
        .with_viscosity(ViscosityModel::Hp);
        let err = ColumnModel::with_kind(setup, PressureModelKind::Gradient)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ColumnError::Fluid(_)));
    }

    #[test]
    fn extrapolated_programs_are_still_checked_at_breakpoints() {
        let inlet = Program::new(vec![0.0, 60.0], vec![2e5, 3e5])
            .unwrap()
            .with_extrapolation(Extrapolation::Linear);
        let setup = ColumnSetup::new(
            column(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(inlet, Program::constant(1e5)),
        );
        assert!(ColumnModel::with_kind(setup, PressureModelKind::Gradient).validate().is_ok());
    }
}
