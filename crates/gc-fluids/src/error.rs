//! Fluid property errors.

use crate::gas::CarrierGas;
use gc_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Carrier gas outside the set a correlation is tabulated for.
    #[error("Carrier gas {gas} is not supported by the {model} model; choose one of {supported}")]
    UnsupportedGas {
        gas: CarrierGas,
        model: &'static str,
        supported: &'static str,
    },

    /// Gas name that does not match any carrier gas.
    #[error("Unknown carrier gas '{name}'; choose one of He, H2, N2, Ar")]
    UnknownGas { name: String },

    /// Viscosity model name outside {Blumberg, HP}.
    #[error("Unsupported viscosity model '{name}'; choose one of Blumberg, HP")]
    UnsupportedModel { name: String },

    /// Element without a tabulated diffusion volume.
    #[error("No diffusion volume for element '{symbol}'")]
    UnknownElement { symbol: String },

    /// Formula string that is not a sequence of element symbols and counts.
    #[error("Malformed molecular formula '{formula}'")]
    MalformedFormula { formula: String },

    /// A chemical record lacks a field the computation needs.
    #[error("Chemical '{id}' has no {field}")]
    MissingData { id: String, field: &'static str },

    /// Non-physical values (negative temperature, molar mass, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),
}
