//! Carrier gas definitions.

use crate::error::FluidError;
use std::fmt;

/// Carrier gases supported by the column model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierGas {
    /// Helium (He)
    He,
    /// Hydrogen (H₂)
    H2,
    /// Nitrogen (N₂)
    N2,
    /// Argon (Ar)
    Ar,
}

impl CarrierGas {
    pub const ALL: [CarrierGas; 4] = [CarrierGas::He, CarrierGas::H2, CarrierGas::N2, CarrierGas::Ar];

    pub fn key(&self) -> &'static str {
        match self {
            CarrierGas::He => "He",
            CarrierGas::H2 => "H2",
            CarrierGas::N2 => "N2",
            CarrierGas::Ar => "Ar",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CarrierGas::He => "Helium",
            CarrierGas::H2 => "Hydrogen",
            CarrierGas::N2 => "Nitrogen",
            CarrierGas::Ar => "Argon",
        }
    }

    /// Molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            CarrierGas::He => 4.0026,
            CarrierGas::H2 => 2.016,
            CarrierGas::N2 => 28.0134,
            CarrierGas::Ar => 39.948,
        }
    }

    /// Fuller-Schettler-Giddings molecular diffusion volume.
    pub fn diffusion_volume(&self) -> f64 {
        match self {
            CarrierGas::He => 2.67,
            CarrierGas::H2 => 6.12,
            CarrierGas::N2 => 18.5,
            CarrierGas::Ar => 16.2,
        }
    }
}

impl fmt::Display for CarrierGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for CarrierGas {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HE" | "HELIUM" => Ok(CarrierGas::He),
            "H2" | "HYDROGEN" => Ok(CarrierGas::H2),
            "N2" | "NITROGEN" => Ok(CarrierGas::N2),
            "AR" | "ARGON" => Ok(CarrierGas::Ar),
            _ => Err(FluidError::UnknownGas {
                name: s.to_string(),
            }),
        }
    }
}
