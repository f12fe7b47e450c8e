//! Uniform and gradient formulations of the column flow equations.
//!
//! Both formulations answer the same questions (how much viscous restriction
//! lies between two points, what is the hold-up time) and differ only in how:
//! [`Uniform`] assumes temperature and geometry do not vary along the column
//! and uses closed forms, [`Gradient`] integrates the restriction density
//! numerically. The choice is made once per run.

use crate::error::ColumnResult;
use crate::holdup;
use crate::restriction::integrated_restriction;
use crate::setup::ColumnSetup;
use gc_core::units::{Length, Time, m};
use gc_fluids::ViscosityModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for the two formulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureModelKind {
    Uniform,
    #[default]
    Gradient,
}

impl PressureModelKind {
    pub fn build(self) -> Box<dyn PressureModel> {
        match self {
            PressureModelKind::Uniform => Box::new(Uniform::default()),
            PressureModelKind::Gradient => Box::new(Gradient),
        }
    }

    pub fn is_uniform(self) -> bool {
        self == PressureModelKind::Uniform
    }
}

impl fmt::Display for PressureModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureModelKind::Uniform => write!(f, "uniform"),
            PressureModelKind::Gradient => write!(f, "gradient"),
        }
    }
}

/// Strategy interface behind the pressure, flow and hold-up operations.
pub trait PressureModel: Send + Sync + fmt::Debug {
    fn kind(&self) -> PressureModelKind;

    /// Flow restriction κ(x, t) [Pa·s·K/m³] accumulated from the inlet to `x`.
    fn flow_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64>;

    /// Share of the squared-pressure drop between the inlet and `x`
    /// (0 at the inlet, 1 at the outlet).
    fn drop_fraction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64>;

    /// Restriction between `x` and the outlet, as it enters the pressure under
    /// flow control.
    fn downstream_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64>;

    /// Restriction used to derive the inlet pressure from a programmed flow.
    fn inlet_restriction(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<f64>;

    /// Restriction of the whole column, κ(L, t).
    fn column_restriction(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<f64> {
        self.flow_restriction(setup, setup.length(), t)
    }

    /// Hold-up time t_M at time `t`.
    fn holdup_time(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<Time>;
}

/// Closed forms that treat the local state as representative of the column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    /// Correlation for the inlet viscosity when the inlet pressure is derived
    /// from a flow. `None` uses the run's correlation.
    pub inlet_viscosity: Option<ViscosityModel>,
}

impl Default for Uniform {
    /// Inlet viscosity from the Blumberg correlation regardless of the run's
    /// correlation.
    fn default() -> Self {
        Self {
            inlet_viscosity: Some(ViscosityModel::Blumberg),
        }
    }
}

impl Uniform {
    /// Uniform model whose inlet viscosity uses the run's correlation.
    pub fn consistent() -> Self {
        Self {
            inlet_viscosity: None,
        }
    }

    pub fn with_inlet_viscosity(model: ViscosityModel) -> Self {
        Self {
            inlet_viscosity: Some(model),
        }
    }
}

impl PressureModel for Uniform {
    fn kind(&self) -> PressureModelKind {
        PressureModelKind::Uniform
    }

    fn flow_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
        Ok(x.value * setup.restriction_density(x, t, setup.viscosity)?)
    }

    fn drop_fraction(&self, setup: &ColumnSetup, x: Length, _t: Time) -> ColumnResult<f64> {
        Ok(x.value / setup.length().value)
    }

    fn downstream_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
        let density = setup.restriction_density(x, t, setup.viscosity)?;
        Ok(density * (setup.length().value - x.value))
    }

    fn inlet_restriction(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<f64> {
        let model = self.inlet_viscosity.unwrap_or(setup.viscosity);
        Ok(setup.length().value * setup.restriction_density(m(0.0), t, model)?)
    }

    fn holdup_time(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<Time> {
        holdup::closed_form_at(self, setup, t)
    }
}

/// Integral forms that follow temperature and geometry along the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gradient;

impl PressureModel for Gradient {
    fn kind(&self) -> PressureModelKind {
        PressureModelKind::Gradient
    }

    fn flow_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
        integrated_restriction(setup, x, t)
    }

    fn drop_fraction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
        let kappa_x = self.flow_restriction(setup, x, t)?;
        let kappa_l = self.column_restriction(setup, t)?;
        Ok(kappa_x / kappa_l)
    }

    fn downstream_restriction(&self, setup: &ColumnSetup, x: Length, t: Time) -> ColumnResult<f64> {
        let kappa_x = self.flow_restriction(setup, x, t)?;
        let kappa_l = self.column_restriction(setup, t)?;
        Ok(kappa_l - kappa_x)
    }

    fn inlet_restriction(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<f64> {
        self.column_restriction(setup, t)
    }

    fn holdup_time(&self, setup: &ColumnSetup, t: Time) -> ColumnResult<Time> {
        holdup::integrated_at(self, setup, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::Isothermal;
    use crate::geometry::Column;
    use crate::program::Program;
    use gc_core::units::{k, s};
    use gc_fluids::CarrierGas;

    fn setup() -> ColumnSetup {
        ColumnSetup::new(
            Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(1e5)),
        )
    }

    #[test]
    fn formulations_agree_on_uniform_column() {
        let st = setup();
        for x in [0.0, 2.5, 7.0, 10.0] {
            let u = Uniform::default().flow_restriction(&st, m(x), s(0.0)).unwrap();
            let g = Gradient.flow_restriction(&st, m(x), s(0.0)).unwrap();
            if x == 0.0 {
                assert_eq!(u, 0.0);
                assert_eq!(g, 0.0);
            } else {
                assert!((u - g).abs() / u < 1e-6, "x={x}: {u} vs {g}");
            }
        }
    }

    #[test]
    fn drop_fraction_spans_unit_interval() {
        let st = setup();
        for model in [PressureModelKind::Uniform.build(), PressureModelKind::Gradient.build()] {
            assert_eq!(model.drop_fraction(&st, m(0.0), s(0.0)).unwrap(), 0.0);
            assert_eq!(model.drop_fraction(&st, m(10.0), s(0.0)).unwrap(), 1.0);
            assert_eq!(model.downstream_restriction(&st, m(10.0), s(0.0)).unwrap(), 0.0);
        }
    }

    #[test]
    fn uniform_inlet_viscosity_override() {
        let st = setup().with_viscosity(ViscosityModel::Hp);
        let blumberg = Uniform::default().inlet_restriction(&st, s(0.0)).unwrap();
        let hp = Uniform::consistent().inlet_restriction(&st, s(0.0)).unwrap();
        let explicit = Uniform::with_inlet_viscosity(ViscosityModel::Hp)
            .inlet_restriction(&st, s(0.0))
            .unwrap();
        assert_ne!(blumberg, hp);
        assert_eq!(hp, explicit);
    }

    #[test]
    fn kind_round_trips_through_build() {
        assert_eq!(PressureModelKind::Uniform.build().kind(), PressureModelKind::Uniform);
        assert_eq!(PressureModelKind::Gradient.build().kind(), PressureModelKind::Gradient);
    }
}
