//! Gas-phase diffusivity of solutes (Fuller-Schettler-Giddings).
//!
//! The correlation is split into a structure-dependent constant
//!
//! ```text
//! Cag = p_n · sqrt(1/M + 1/M_gas) / (V_gas^(1/3) + V_a^(1/3))² · 1e-7
//! ```
//!
//! and the local state, `D_M = T^1.75 / p · Cag`, which the column model
//! applies.

use crate::error::{FluidError, FluidResult};
use crate::formula::ElementCounts;
use crate::gas::CarrierGas;
use gc_core::units::constants::P_N;

/// Atomic diffusion volumes.
const V_C: f64 = 15.9;
const V_H: f64 = 2.31;
const V_O: f64 = 6.11;
const V_N: f64 = 4.54;
const V_S: f64 = 22.9;
const V_F: f64 = 14.7;
const V_CL: f64 = 21.0;
const V_BR: f64 = 21.9;
const V_I: f64 = 29.8;
/// Increment per aromatic or heterocyclic ring.
const V_RING: f64 = -18.3;

/// Atom and ring counts of a solute molecule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtomCounts {
    pub c: u32,
    pub h: u32,
    pub o: u32,
    pub n: u32,
    pub s: u32,
    pub f: u32,
    pub cl: u32,
    pub br: u32,
    pub i: u32,
    pub rings: u32,
}

impl AtomCounts {
    /// Counts for the common C/H/O/N case.
    pub fn chon(c: u32, h: u32, o: u32, n: u32, rings: u32) -> Self {
        Self {
            c,
            h,
            o,
            n,
            rings,
            ..Self::default()
        }
    }

    /// Build from parsed element counts; fails for elements without a diffusion volume.
    pub fn from_elements(elements: &ElementCounts, rings: u32) -> FluidResult<Self> {
        let mut counts = AtomCounts {
            rings,
            ..Self::default()
        };
        for (symbol, &n) in elements.iter() {
            let slot = match symbol.as_str() {
                "C" => &mut counts.c,
                "H" => &mut counts.h,
                "O" => &mut counts.o,
                "N" => &mut counts.n,
                "S" => &mut counts.s,
                "F" => &mut counts.f,
                "Cl" => &mut counts.cl,
                "Br" => &mut counts.br,
                "I" => &mut counts.i,
                _ => {
                    return Err(FluidError::UnknownElement {
                        symbol: symbol.clone(),
                    });
                }
            };
            *slot += n;
        }
        Ok(counts)
    }

    /// Molecular diffusion volume V_a.
    pub fn diffusion_volume(&self) -> f64 {
        V_C * f64::from(self.c)
            + V_H * f64::from(self.h)
            + V_O * f64::from(self.o)
            + V_N * f64::from(self.n)
            + V_S * f64::from(self.s)
            + V_F * f64::from(self.f)
            + V_CL * f64::from(self.cl)
            + V_BR * f64::from(self.br)
            + V_I * f64::from(self.i)
            + V_RING * f64::from(self.rings)
    }
}

/// Diffusivity constant Cag of a solute with molar mass `molar_mass`
/// [g/mol] in `gas`, normalized to `P_N`.
pub fn diffusivity(molar_mass: f64, atoms: &AtomCounts, gas: CarrierGas) -> FluidResult<f64> {
    if !molar_mass.is_finite() || molar_mass <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "molar mass must be positive and finite",
        });
    }
    let va = atoms.diffusion_volume();
    if va <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "molecular diffusion volume must be positive",
        });
    }

    let vg = gas.diffusion_volume();
    let mass_term = (1.0 / molar_mass + 1.0 / gas.molar_mass()).sqrt();
    let volume_term = (vg.cbrt() + va.cbrt()).powi(2);
    Ok(P_N * mass_term / volume_term * 1e-7)
}
