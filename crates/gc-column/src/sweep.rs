//! Parallel evaluation of column quantities over positions or times.
//!
//! Every point is independent, so the grid is evaluated with rayon and each
//! point keeps its own `Result`; one failing point does not abort the sweep.

use crate::error::{ColumnError, ColumnResult};
use crate::model::ColumnModel;
use crate::solute::Solute;
use gc_core::units::{m, s};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, trace};

/// Column quantity that can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldQuantity {
    Temperature,
    Viscosity,
    FlowRestriction,
    Pressure,
    Velocity,
    MobileResidency,
    RetentionFactor,
    Residency,
    DiffusionCoefficient,
    PlateHeight,
}

impl FieldQuantity {
    /// True for quantities that depend on the solute.
    pub fn needs_solute(self) -> bool {
        matches!(
            self,
            FieldQuantity::RetentionFactor
                | FieldQuantity::Residency
                | FieldQuantity::DiffusionCoefficient
                | FieldQuantity::PlateHeight
        )
    }

    /// SI unit of the quantity.
    pub fn unit(self) -> &'static str {
        match self {
            FieldQuantity::Temperature => "K",
            FieldQuantity::Viscosity => "Pa·s",
            FieldQuantity::FlowRestriction => "Pa·s·K/m³",
            FieldQuantity::Pressure => "Pa",
            FieldQuantity::Velocity => "m/s",
            FieldQuantity::MobileResidency | FieldQuantity::Residency => "s/m",
            FieldQuantity::RetentionFactor => "-",
            FieldQuantity::DiffusionCoefficient => "m²/s",
            FieldQuantity::PlateHeight => "m",
        }
    }

    /// Evaluate at position `x` [m] and time `t` [s], returning the value in
    /// [`Self::unit`]. `solute` must be present when [`Self::needs_solute`].
    pub fn evaluate(
        self,
        model: &ColumnModel,
        solute: Option<&Solute>,
        x: f64,
        t: f64,
    ) -> ColumnResult<f64> {
        let solute = || {
            solute.ok_or(ColumnError::InvalidArg {
                what: "quantity requires a solute",
            })
        };
        let (x, t) = (m(x), s(t));
        match self {
            FieldQuantity::Temperature => model.temperature(x, t).map(|v| v.value),
            FieldQuantity::Viscosity => model.viscosity(x, t).map(|v| v.value),
            FieldQuantity::FlowRestriction => model.flow_restriction(x, t),
            FieldQuantity::Pressure => model.pressure(x, t).map(|v| v.value),
            FieldQuantity::Velocity => model.velocity(x, t).map(|v| v.value),
            FieldQuantity::MobileResidency => model.mobile_phase_residency(x, t),
            FieldQuantity::RetentionFactor => model.retention_factor(solute()?, x, t),
            FieldQuantity::Residency => model.residency(solute()?, x, t),
            FieldQuantity::DiffusionCoefficient => model.diffusion_mobile(solute()?, x, t),
            FieldQuantity::PlateHeight => model.plate_height(solute()?, x, t).map(|v| v.value),
        }
    }
}

impl fmt::Display for FieldQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldQuantity::Temperature => "temperature",
            FieldQuantity::Viscosity => "viscosity",
            FieldQuantity::FlowRestriction => "flow restriction",
            FieldQuantity::Pressure => "pressure",
            FieldQuantity::Velocity => "velocity",
            FieldQuantity::MobileResidency => "mobile-phase residency",
            FieldQuantity::RetentionFactor => "retention factor",
            FieldQuantity::Residency => "residency",
            FieldQuantity::DiffusionCoefficient => "diffusion coefficient",
            FieldQuantity::PlateHeight => "plate height",
        };
        write!(f, "{name} [{}]", self.unit())
    }
}

/// Values of one quantity over a grid.
#[derive(Debug)]
pub struct SweepResult {
    pub quantity: FieldQuantity,
    /// Positions [m] or times [s], depending on the sweep
    pub coordinates: Vec<f64>,
    pub values: Vec<ColumnResult<f64>>,
}

impl SweepResult {
    pub fn num_successful(&self) -> usize {
        self.values.iter().filter(|v| v.is_ok()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.values.len() - self.num_successful()
    }

    /// (coordinate, value) pairs of the successful points.
    pub fn successful(&self) -> Vec<(f64, f64)> {
        self.coordinates
            .iter()
            .zip(&self.values)
            .filter_map(|(&c, v)| v.as_ref().ok().map(|&v| (c, v)))
            .collect()
    }
}

/// `n` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start];
    }
    let delta = (end - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * delta).collect();
    points[n - 1] = end;
    points
}

/// `quantity` along the column at time `t`.
pub fn axial_profile(
    model: &ColumnModel,
    quantity: FieldQuantity,
    solute: Option<&Solute>,
    t: f64,
    positions: &[f64],
) -> ColumnResult<SweepResult> {
    check_solute(quantity, solute)?;
    debug!(%quantity, t, points = positions.len(), "axial sweep");
    let values = positions
        .par_iter()
        .map(|&x| {
            trace!(x, t, "sweep point");
            quantity.evaluate(model, solute, x, t)
        })
        .collect();
    Ok(SweepResult {
        quantity,
        coordinates: positions.to_vec(),
        values,
    })
}

/// `quantity` at position `x` over `times`.
pub fn time_profile(
    model: &ColumnModel,
    quantity: FieldQuantity,
    solute: Option<&Solute>,
    x: f64,
    times: &[f64],
) -> ColumnResult<SweepResult> {
    check_solute(quantity, solute)?;
    debug!(%quantity, x, points = times.len(), "time sweep");
    let values = times
        .par_iter()
        .map(|&t| {
            trace!(x, t, "sweep point");
            quantity.evaluate(model, solute, x, t)
        })
        .collect();
    Ok(SweepResult {
        quantity,
        coordinates: times.to_vec(),
        values,
    })
}

/// Hold-up time [s] at each of `times` [s].
pub fn holdup_profile(model: &ColumnModel, times: &[f64]) -> Vec<ColumnResult<f64>> {
    times
        .par_iter()
        .map(|&t| model.holdup_time(s(t)).map(|tm| tm.value))
        .collect()
}

fn check_solute(quantity: FieldQuantity, solute: Option<&Solute>) -> ColumnResult<()> {
    if quantity.needs_solute() && solute.is_none() {
        return Err(ColumnError::InvalidArg {
            what: "quantity requires a solute",
        });
    }
    Ok(())
}
