//! gc-core: numeric foundation for gcflow.
//!
//! Contains:
//! - units (uom SI types, constructors and physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - quadrature (adaptive Gauss-Kronrod integration)
//! - quantity (unit-aware text input parsing)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod quadrature;
pub mod quantity;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use quadrature::{QuadratureConfig, QuadratureResult, integrate};
pub use quantity::{Quantity, UnitError, parse_quantity};
pub use units::*;
