//! Temperature fields T(x, t).

use crate::program::Program;
use gc_core::units::{Length, Temperature, Time, k};
use std::fmt;

/// Column temperature as a function of position from the inlet and time.
pub trait TemperatureField: Send + Sync + fmt::Debug {
    fn temperature(&self, x: Length, t: Time) -> Temperature;

    /// Times [s] at which the field changes slope. Plausibility checks sample here.
    fn breakpoints(&self) -> Vec<f64> {
        Vec::new()
    }

    /// True when T does not depend on x.
    fn is_uniform(&self) -> bool {
        true
    }
}

/// Constant temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isothermal {
    pub temperature: Temperature,
}

impl Isothermal {
    pub fn new(temperature: Temperature) -> Self {
        Self { temperature }
    }
}

impl TemperatureField for Isothermal {
    fn temperature(&self, _x: Length, _t: Time) -> Temperature {
        self.temperature
    }
}

/// Oven program [K], uniform along the column.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgrammedTemperature {
    pub program: Program,
}

impl ProgrammedTemperature {
    pub fn new(program: Program) -> Self {
        Self { program }
    }
}

impl TemperatureField for ProgrammedTemperature {
    fn temperature(&self, _x: Length, t: Time) -> Temperature {
        k(self.program.value(t.value))
    }

    fn breakpoints(&self) -> Vec<f64> {
        self.program.times().to_vec()
    }
}

/// Oven program plus an axial gradient.
///
/// ```text
/// T(x, t) = T_prog(t) + ΔT(t) · (1 − x/L)
/// ```
///
/// ΔT is the excess temperature at the inlet; it vanishes at the outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTemperature {
    /// Oven program [K]
    pub program: Program,
    /// Inlet excess ΔT [K]
    pub gradient: Program,
    pub length: Length,
}

impl GradientTemperature {
    pub fn new(program: Program, gradient: Program, length: Length) -> Self {
        Self {
            program,
            gradient,
            length,
        }
    }
}

impl TemperatureField for GradientTemperature {
    fn temperature(&self, x: Length, t: Time) -> Temperature {
        let t = t.value;
        k(self.program.value(t) + self.gradient.value(t) * (1.0 - x.value / self.length.value))
    }

    fn breakpoints(&self) -> Vec<f64> {
        let mut times: Vec<f64> = self
            .program
            .times()
            .iter()
            .chain(self.gradient.times())
            .copied()
            .collect();
        times.sort_by(f64::total_cmp);
        times.dedup();
        times
    }

    fn is_uniform(&self) -> bool {
        self.gradient.values().iter().all(|&v| v == 0.0)
    }
}
