//! gc-fluids: carrier-gas and solute property correlations for gcflow.
//!
//! Provides:
//! - Carrier gas definitions (He, H2, N2, Ar)
//! - Viscosity correlations (Blumberg, HP)
//! - Fuller-Schettler-Giddings diffusivity constants
//! - Molecular formula / SMILES parsing
//! - A `ChemicalRepository` seam for identifier lookups
//!
//! # Example
//!
//! ```
//! use gc_fluids::{AtomCounts, CarrierGas, ViscosityModel, diffusivity, viscosity};
//!
//! let eta = viscosity(350.0, CarrierGas::He, ViscosityModel::Blumberg).unwrap();
//! assert!(eta > 2.0e-5 && eta < 2.5e-5);
//!
//! // CO2 in helium
//! let cag = diffusivity(44.0095, &AtomCounts::chon(1, 0, 2, 0, 0), CarrierGas::He).unwrap();
//! println!("Cag = {cag:e}");
//! ```

pub mod diffusivity;
pub mod error;
pub mod formula;
pub mod gas;
pub mod lookup;
pub mod viscosity;

// Re-exports for ergonomics
pub use diffusivity::{AtomCounts, diffusivity};
pub use error::{FluidError, FluidResult};
pub use formula::{ElementCounts, parse_formula, ring_count};
pub use gas::CarrierGas;
pub use lookup::{
    CachedRepository, ChemicalRecord, ChemicalRepository, InMemoryRepository, diffusivity_by_id,
    structure_of,
};
pub use viscosity::{ViscosityModel, dynamic_viscosity, viscosity};
