//! Retention factor from the three-parameter thermodynamic model.
//!
//! ```text
//! ln k₀ = (ΔCp/R + Tchar/θchar)·(Tchar/T − 1) + ΔCp/R · ln(T/Tchar)
//! k     = φ/φ₀ · exp(ln k₀),     φ = df/d
//! ```

use crate::error::{ColumnError, ColumnResult};
use crate::setup::ColumnSetup;
use crate::solute::Solute;
use gc_core::ensure_positive;
use gc_core::units::constants::R_GAS;
use gc_core::units::{Length, Temperature, Time};

/// Retention factor k at (x, t). Exactly zero for a marker.
pub fn retention_factor(
    setup: &ColumnSetup,
    solute: &Solute,
    x: Length,
    t: Time,
) -> ColumnResult<f64> {
    if solute.is_marker() {
        return Ok(0.0);
    }
    let temperature = setup.temperature_at(x, t)?;
    let phi = setup.column.phase_ratio_at(x);
    retention_factor_at(solute, temperature, phi)
}

/// Retention factor at `temperature` and phase ratio `phi`.
pub fn retention_factor_at(solute: &Solute, temperature: Temperature, phi: f64) -> ColumnResult<f64> {
    if solute.is_marker() {
        return Ok(0.0);
    }
    let temperature = ensure_positive(temperature.value, "temperature must be positive")?;
    ensure_positive(solute.tchar, "characteristic temperature must be positive")?;
    ensure_positive(solute.phi0, "reference phase ratio must be positive")?;
    if !solute.thetachar.is_finite() || solute.thetachar.abs() < f64::EPSILON {
        return Err(ColumnError::Domain {
            what: "characteristic thermal constant must be non-zero",
            value: solute.thetachar,
        });
    }

    let cp = solute.delta_cp / R_GAS;
    let ln_k0 = (cp + solute.tchar / solute.thetachar) * (solute.tchar / temperature - 1.0)
        + cp * (temperature / solute.tchar).ln();
    let k = phi / solute.phi0 * ln_k0.exp();
    if !k.is_finite() {
        return Err(ColumnError::Domain {
            what: "retention factor overflow",
            value: ln_k0,
        });
    }
    Ok(k)
}
