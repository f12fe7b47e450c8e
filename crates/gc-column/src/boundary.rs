//! Inlet and outlet boundary conditions.

use crate::program::Program;
use gc_core::units::{Pressure, Time, pa};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which inlet quantity the instrument programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    /// Inlet pressure [Pa, absolute]
    #[default]
    Pressure,
    /// Inlet volume flow [m³/s] at T_N and P_N
    Flow,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Pressure => write!(f, "pressure"),
            ControlMode::Flow => write!(f, "flow"),
        }
    }
}

/// Programmed inlet quantity and outlet pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub control: ControlMode,
    /// Inlet pressure or inlet flow, depending on `control`
    pub inlet: Program,
    /// Outlet pressure [Pa, absolute]
    pub outlet: Program,
}

impl Boundary {
    pub fn pressure_controlled(inlet: Program, outlet: Program) -> Self {
        Self {
            control: ControlMode::Pressure,
            inlet,
            outlet,
        }
    }

    pub fn flow_controlled(flow: Program, outlet: Program) -> Self {
        Self {
            control: ControlMode::Flow,
            inlet: flow,
            outlet,
        }
    }

    /// Programmed inlet value in SI: pressure [Pa] or flow [m³/s].
    pub fn inlet_value(&self, t: Time) -> f64 {
        self.inlet.value(t.value)
    }

    pub fn outlet_pressure(&self, t: Time) -> Pressure {
        pa(self.outlet.value(t.value))
    }

    /// Union of inlet and outlet breakpoint times.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut times: Vec<f64> = self
            .inlet
            .times()
            .iter()
            .chain(self.outlet.times())
            .copied()
            .collect();
        times.sort_by(f64::total_cmp);
        times.dedup();
        times
    }
}
