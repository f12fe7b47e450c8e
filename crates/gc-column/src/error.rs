//! Error types for column model operations.

use gc_core::{CoreError, UnitError};
use gc_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur while evaluating or assembling a column model.
#[derive(Error, Debug)]
pub enum ColumnError {
    /// A formula left its physical domain (negative radicand, equal
    /// boundary pressures, overflow of the retention exponent, ...).
    #[error("Domain error: {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    #[error("Invalid program: {what}")]
    InvalidProgram { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operating conditions that fail the plausibility checks.
    #[error("Implausible setup at t={t} s: {what}")]
    Implausible { what: &'static str, t: f64 },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ColumnResult<T> = Result<T, ColumnError>;

impl ColumnError {
    /// True for domain errors raised here or by the numeric core.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            ColumnError::Domain { .. } | ColumnError::Core(CoreError::Domain { .. })
        )
    }

    /// True when adaptive quadrature gave up.
    pub fn is_integration_failure(&self) -> bool {
        matches!(self, ColumnError::Core(CoreError::IntegrationFailure { .. }))
    }
}
