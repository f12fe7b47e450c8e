//! Carrier-gas viscosity correlations.
//!
//! Two correlation families are available:
//!
//! ```text
//! Blumberg: η = η_st · (T/T_st)^(ξ₀ + ξ₁·(T − T_st)/T_st)
//! HP:       η = C₁·T + C₂
//! ```
//!
//! The HP form is a linear approximation over the usual oven range
//! (0-300 °C) and has no argon entry.

use crate::error::{FluidError, FluidResult};
use crate::gas::CarrierGas;
use gc_core::units::constants::T_ST;
use gc_core::units::{DynVisc, Temperature, pas};
use std::fmt;

/// Viscosity correlation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViscosityModel {
    /// Power law with temperature-dependent exponent
    #[default]
    Blumberg,
    /// Linear approximation
    #[cfg_attr(feature = "serde", serde(rename = "hp"))]
    Hp,
}

impl ViscosityModel {
    pub fn name(&self) -> &'static str {
        match self {
            ViscosityModel::Blumberg => "Blumberg",
            ViscosityModel::Hp => "HP",
        }
    }

    /// Gases the correlation is tabulated for, as shown in error messages.
    pub fn supported_gases(&self) -> &'static str {
        match self {
            ViscosityModel::Blumberg => "He, H2, N2, Ar",
            ViscosityModel::Hp => "He, H2, N2",
        }
    }

    pub fn supports(&self, gas: CarrierGas) -> bool {
        !matches!((self, gas), (ViscosityModel::Hp, CarrierGas::Ar))
    }
}

impl fmt::Display for ViscosityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ViscosityModel {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLUMBERG" => Ok(ViscosityModel::Blumberg),
            "HP" => Ok(ViscosityModel::Hp),
            _ => Err(FluidError::UnsupportedModel {
                name: s.to_string(),
            }),
        }
    }
}

/// Blumberg coefficients (η_st [Pa·s] at T_st, ξ₀, ξ₁).
fn blumberg_coefficients(gas: CarrierGas) -> (f64, f64, f64) {
    match gas {
        CarrierGas::He => (18.63e-6, 0.6958, -0.0071),
        CarrierGas::H2 => (8.382e-6, 0.6892, 0.005),
        CarrierGas::N2 => (16.62e-6, 0.7665, -0.0378),
        CarrierGas::Ar => (21.04e-6, 0.8131, -0.0426),
    }
}

/// HP coefficients (C₁ [Pa·s/K], C₂ [Pa·s]).
fn hp_coefficients(gas: CarrierGas) -> FluidResult<(f64, f64)> {
    match gas {
        CarrierGas::He => Ok((4.130e-8, 7.348e-6)),
        CarrierGas::H2 => Ok((1.881e-8, 3.243e-6)),
        CarrierGas::N2 => Ok((3.941e-8, 5.855e-6)),
        CarrierGas::Ar => Err(FluidError::UnsupportedGas {
            gas,
            model: ViscosityModel::Hp.name(),
            supported: ViscosityModel::Hp.supported_gases(),
        }),
    }
}

/// Dynamic viscosity [Pa·s] of `gas` at temperature `t_k` [K].
pub fn viscosity(t_k: f64, gas: CarrierGas, model: ViscosityModel) -> FluidResult<f64> {
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "temperature must be positive and finite",
        });
    }

    let eta = match model {
        ViscosityModel::Blumberg => {
            let (eta_st, xi0, xi1) = blumberg_coefficients(gas);
            let tr = t_k / T_ST;
            eta_st * tr.powf(xi0 + xi1 * (t_k - T_ST) / T_ST)
        }
        ViscosityModel::Hp => {
            let (c1, c2) = hp_coefficients(gas)?;
            c1 * t_k + c2
        }
    };

    if !eta.is_finite() || eta <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "viscosity must be positive and finite",
        });
    }
    Ok(eta)
}

/// Unit-typed wrapper around [`viscosity`].
pub fn dynamic_viscosity(
    t: Temperature,
    gas: CarrierGas,
    model: ViscosityModel,
) -> FluidResult<DynVisc> {
    viscosity(t.value, gas, model).map(pas)
}
