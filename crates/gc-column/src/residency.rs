//! Residency (inverse velocity) of carrier gas and solute.

use crate::boundary::ControlMode;
use crate::error::ColumnResult;
use crate::holdup::squared_drop;
use crate::pressure::pressure;
use crate::pressure_model::PressureModel;
use crate::retention::retention_factor;
use crate::setup::ColumnSetup;
use crate::solute::Solute;
use gc_core::ensure_positive;
use gc_core::units::constants::{P_N, T_N};
use gc_core::units::{Length, Time, Velocity, mps};
use std::f64::consts::PI;

/// Carrier-gas residency r_M = 1/u [s/m] at (x, t).
///
/// ```text
/// pressure control: r_M = 64 · p·d²/T · κ(L) / (pin² − pout²)
/// flow control:     r_M = π/4 · T_N/P_N · p·d²/T / F
/// ```
pub fn mobile_phase_residency(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    x: Length,
    t: Time,
) -> ColumnResult<f64> {
    let p = pressure(model, setup, x, t)?.value;
    let d = setup.column.diameter_at(x).value;
    let local = p * d * d / setup.temperature_at(x, t)?.value;

    let r = match setup.boundary.control {
        ControlMode::Pressure => {
            let pin = setup.boundary.inlet_value(t);
            let drop = squared_drop(pin, setup.boundary.outlet_pressure(t).value)?;
            let kappa = model.column_restriction(setup, t)?;
            64.0 * local * kappa / drop
        }
        ControlMode::Flow => {
            let flow = ensure_positive(setup.boundary.inlet_value(t), "flow must be positive")?;
            PI / 4.0 * T_N / P_N * local / flow
        }
    };
    Ok(ensure_positive(r, "mobile-phase residency must be positive")?)
}

/// Linear carrier-gas velocity u at (x, t).
pub fn velocity(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    x: Length,
    t: Time,
) -> ColumnResult<Velocity> {
    Ok(mps(1.0 / mobile_phase_residency(model, setup, x, t)?))
}

/// Solute residency r = r_M · (1 + k) [s/m].
pub fn residency(
    model: &dyn PressureModel,
    setup: &ColumnSetup,
    solute: &Solute,
    x: Length,
    t: Time,
) -> ColumnResult<f64> {
    let r_m = mobile_phase_residency(model, setup, x, t)?;
    let k = retention_factor(setup, solute, x, t)?;
    Ok(r_m * (1.0 + k))
}
