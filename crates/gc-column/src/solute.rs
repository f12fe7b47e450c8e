//! Solute description.

use crate::error::ColumnResult;
use gc_fluids::{AtomCounts, CarrierGas, ChemicalRepository, diffusivity, diffusivity_by_id};

/// Thermodynamic and transport parameters of one solute on one stationary
/// phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Solute {
    pub name: String,
    /// Characteristic temperature [K]
    pub tchar: f64,
    /// Characteristic thermal constant [°C]
    pub thetachar: f64,
    /// Heat capacity change on transfer to the stationary phase [J/(mol·K)]
    pub delta_cp: f64,
    /// Reference phase ratio df/d of the column the parameters were measured on
    pub phi0: f64,
    /// Diffusivity constant
    pub cag: f64,
}

impl Solute {
    pub fn new(
        name: impl Into<String>,
        tchar: f64,
        thetachar: f64,
        delta_cp: f64,
        phi0: f64,
        cag: f64,
    ) -> Self {
        Self {
            name: name.into(),
            tchar,
            thetachar,
            delta_cp,
            phi0,
            cag,
        }
    }

    /// Non-retained marker with diffusivity constant `cag`.
    pub fn marker(name: impl Into<String>, cag: f64) -> Self {
        Self::new(name, 0.0, 0.0, 0.0, 1e-3, cag)
    }

    /// True when all three retention parameters are zero.
    pub fn is_marker(&self) -> bool {
        self.tchar == 0.0 && self.thetachar == 0.0 && self.delta_cp == 0.0
    }

    /// Replace `cag` by the estimate from the molecular structure.
    pub fn with_formula(
        mut self,
        molar_mass: f64,
        atoms: &AtomCounts,
        gas: CarrierGas,
    ) -> ColumnResult<Self> {
        self.cag = diffusivity(molar_mass, atoms, gas)?;
        Ok(self)
    }

    /// Replace `cag` by the estimate for the chemical `id` from `repo`.
    pub fn with_lookup(
        mut self,
        repo: &dyn ChemicalRepository,
        id: &str,
        gas: CarrierGas,
    ) -> ColumnResult<Self> {
        self.cag = diffusivity_by_id(repo, id, gas)?;
        Ok(self)
    }
}
