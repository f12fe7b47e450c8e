//! Local carrier-gas pressure p(x, t).
//!
//! ```text
//! pressure control: p² = pin² − f(x)·(pin² − pout²)
//! flow control:     p² = pout² + 256/π · P_N/T_N · F · κ_down(x)
//! ```
//!
//! with f(x) the share of the squared-pressure drop and κ_down(x) the
//! restriction between x and the outlet, both supplied by the
//! [`PressureModel`].

use crate::boundary::ControlMode;
use crate::error::ColumnResult;
use crate::pressure_model::PressureModel;
use crate::setup::ColumnSetup;
use gc_core::checked_sqrt;
use gc_core::units::constants::{P_N, T_N};
use gc_core::units::{Length, Pressure, Time, pa};
use std::f64::consts::PI;

/// 256/π · P_N/T_N, links squared pressures to normalized flow and restriction.
pub const FLOW_FACTOR: f64 = 256.0 / PI * P_N / T_N;

/// Pressure at position `x` and time `t`.
pub fn pressure(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    x: Length,
    t: Time,
) -> ColumnResult<Pressure> {
    let squared = match setup.boundary.control {
        ControlMode::Pressure => by_drop_fraction(setup, t, model.drop_fraction(setup, x, t)?),
        ControlMode::Flow => by_downstream(setup, t, model.downstream_restriction(setup, x, t)?),
    };
    Ok(pa(checked_sqrt(squared, "pressure radicand")?))
}

/// Pressure at a point whose restriction from the inlet, `kappa_x`, is known,
/// on a column of total restriction `kappa_l` (integral formulation).
///
/// Agrees bit for bit with [`pressure`] under [`Gradient`](crate::Gradient).
pub(crate) fn pressure_from_restriction(
    setup: &ColumnSetup,
    t: Time,
    kappa_x: f64,
    kappa_l: f64,
) -> ColumnResult<Pressure> {
    let squared = match setup.boundary.control {
        ControlMode::Pressure => by_drop_fraction(setup, t, kappa_x / kappa_l),
        ControlMode::Flow => by_downstream(setup, t, kappa_l - kappa_x),
    };
    Ok(pa(checked_sqrt(squared, "pressure radicand")?))
}

fn by_drop_fraction(setup: &ColumnSetup, t: Time, fraction: f64) -> f64 {
    let pin = setup.boundary.inlet_value(t);
    let pout = setup.boundary.outlet_pressure(t).value;
    pin * pin - fraction * (pin * pin - pout * pout)
}

fn by_downstream(setup: &ColumnSetup, t: Time, downstream: f64) -> f64 {
    let flow = setup.boundary.inlet_value(t);
    let pout = setup.boundary.outlet_pressure(t).value;
    pout * pout + FLOW_FACTOR * flow * downstream
}
