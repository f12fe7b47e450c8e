//! Hold-up time t_M: how long an unretained marker needs to cross the column.
//!
//! For a uniform column the time has a closed form
//!
//! ```text
//! t_M = 128/3 · L²/d² · η · (pin³ − pout³) / (pin² − pout²)²
//! ```
//!
//! otherwise it is the integral of d²·p/T along the column, scaled by the
//! column restriction (pressure control) or by the flow (flow control).

use crate::boundary::ControlMode;
use crate::error::{ColumnError, ColumnResult};
use crate::flow::inlet_pressure;
use crate::pressure::{FLOW_FACTOR, pressure_from_restriction};
use crate::pressure_model::{Gradient, PressureModel};
use crate::restriction::integrate_column;
use crate::setup::ColumnSetup;
use gc_core::{checked_sqrt, ensure_positive};
use gc_core::units::constants::{P_N, T_N};
use gc_core::units::{Length, Pressure, Temperature, Time, VolumeRate, m, s};
use gc_fluids::{CarrierGas, ViscosityModel, viscosity};
use std::f64::consts::PI;
use tracing::trace;

/// Programmed inlet quantity for [`holdup_time_uniform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformInlet {
    Pressure(Pressure),
    /// Normalized volume flow
    Flow(VolumeRate),
}

/// Hold-up time of a uniform column at a single operating point.
pub fn holdup_time_uniform(
    temperature: Temperature,
    inlet: UniformInlet,
    outlet: Pressure,
    length: Length,
    diameter: Length,
    gas: CarrierGas,
    model: ViscosityModel,
) -> ColumnResult<Time> {
    let (temperature, length, diameter, pout) =
        (temperature.value, length.value, diameter.value, outlet.value);
    ensure_positive(length, "column length must be positive")?;
    ensure_positive(diameter, "column diameter must be positive")?;
    let eta = viscosity(temperature, gas, model)?;

    let pin = match inlet {
        UniformInlet::Pressure(p) => p.value,
        UniformInlet::Flow(f) => {
            let kappa = length * eta * temperature / diameter.powi(4);
            checked_sqrt(pout * pout + FLOW_FACTOR * kappa * f.value, "inlet pressure radicand")?
        }
    };

    closed_form(eta, length, diameter, pin, pout).map(s)
}

/// 128/3 · L²/d² · η · (pin³ − pout³) / (pin² − pout²)²
pub(crate) fn closed_form(
    eta: f64,
    length: f64,
    diameter: f64,
    pin: f64,
    pout: f64,
) -> ColumnResult<f64> {
    let drop = squared_drop(pin, pout)?;
    let cubes = pin.powi(3) - pout.powi(3);
    Ok(128.0 / 3.0 * length * length / (diameter * diameter) * eta * cubes / (drop * drop))
}

/// Closed form with viscosity and diameter taken at the outlet.
pub(crate) fn closed_form_at(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    t: Time,
) -> ColumnResult<Time> {
    let length = setup.length();
    let pin = inlet_pressure(model, setup, t)?.value;
    let pout = setup.boundary.outlet_pressure(t).value;
    let eta = setup.viscosity_at(length, t)?.value;
    let diameter = setup.column.diameter_at(length).value;
    closed_form(eta, length.value, diameter, pin, pout).map(s)
}

/// Integral form for columns with axial variation.
///
/// κ(L, t) is evaluated once and shared by every pressure in the integrand.
pub(crate) fn integrated_at(model: &Gradient, setup: &ColumnSetup, t: Time) -> ColumnResult<Time> {
    let kappa_l = model.column_restriction(setup, t)?;
    let integral = integrate_column(
        |y| holdup_density(model, setup, m(y), t, kappa_l),
        0.0,
        setup.length().value,
        &setup.quadrature,
    )?;
    trace!(t = t.value, evaluations = integral.evaluations, "hold-up integral");

    let seconds = match setup.boundary.control {
        ControlMode::Pressure => {
            let pin = setup.boundary.inlet_value(t);
            let pout = setup.boundary.outlet_pressure(t).value;
            let drop = squared_drop(pin, pout)?;
            64.0 * kappa_l / drop * integral.value
        }
        ControlMode::Flow => {
            let flow = ensure_positive(setup.boundary.inlet_value(t), "flow must be positive")?;
            PI / 4.0 * T_N / P_N * integral.value / flow
        }
    };
    Ok(s(seconds))
}

/// d²·p/T at `y`, the integrand of the hold-up time.
fn holdup_density(
    model: &Gradient,
    setup: &ColumnSetup,
    y: Length,
    t: Time,
    kappa_l: f64,
) -> ColumnResult<f64> {
    let d = setup.column.diameter_at(y).value;
    let kappa_y = model.flow_restriction(setup, y, t)?;
    let p = pressure_from_restriction(setup, t, kappa_y, kappa_l)?.value;
    Ok(d * d * p / setup.temperature_at(y, t)?.value)
}

/// pin² − pout², which must be positive for a finite hold-up time.
pub(crate) fn squared_drop(pin: f64, pout: f64) -> ColumnResult<f64> {
    let drop = pin * pin - pout * pout;
    if drop.is_finite() && drop > 0.0 {
        Ok(drop)
    } else {
        Err(ColumnError::Domain {
            what: "inlet pressure must exceed outlet pressure",
            value: drop,
        })
    }
}
