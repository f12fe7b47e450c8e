//! Everything that defines one run: column, gas, fields and numerics.

use crate::boundary::Boundary;
use crate::error::ColumnResult;
use crate::field::TemperatureField;
use crate::geometry::Column;
use gc_core::units::{DynVisc, Length, Temperature, Time};
use gc_core::{QuadratureConfig, ensure_positive};
use gc_fluids::{CarrierGas, ViscosityModel, dynamic_viscosity};
use std::sync::Arc;

/// Immutable description of a simulation run.
///
/// Built once and shared read-only by every evaluation.
#[derive(Debug, Clone)]
pub struct ColumnSetup {
    pub column: Column,
    pub gas: CarrierGas,
    pub viscosity: ViscosityModel,
    pub temperature: Arc<dyn TemperatureField>,
    pub boundary: Boundary,
    pub quadrature: QuadratureConfig,
}

impl ColumnSetup {
    pub fn new(
        column: Column,
        gas: CarrierGas,
        temperature: impl TemperatureField + 'static,
        boundary: Boundary,
    ) -> Self {
        Self {
            column,
            gas,
            viscosity: ViscosityModel::default(),
            temperature: Arc::new(temperature),
            boundary,
            quadrature: QuadratureConfig::default(),
        }
    }

    pub fn with_viscosity(mut self, model: ViscosityModel) -> Self {
        self.viscosity = model;
        self
    }

    pub fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    pub fn length(&self) -> Length {
        self.column.length
    }

    /// Temperature at (x, t); must be positive.
    pub fn temperature_at(&self, x: Length, t: Time) -> ColumnResult<Temperature> {
        let temperature = self.temperature.temperature(x, t);
        ensure_positive(temperature.value, "temperature must be positive")?;
        Ok(temperature)
    }

    /// Carrier-gas viscosity at (x, t) with the run's correlation.
    pub fn viscosity_at(&self, x: Length, t: Time) -> ColumnResult<DynVisc> {
        self.viscosity_with(x, t, self.viscosity)
    }

    pub fn viscosity_with(&self, x: Length, t: Time, model: ViscosityModel) -> ColumnResult<DynVisc> {
        let temperature = self.temperature_at(x, t)?;
        Ok(dynamic_viscosity(temperature, self.gas, model)?)
    }

    /// Local restriction density η·T/d⁴ [Pa·s·K/m⁴] with the given correlation.
    pub fn restriction_density(&self, x: Length, t: Time, model: ViscosityModel) -> ColumnResult<f64> {
        let temperature = self.temperature_at(x, t)?;
        let eta = dynamic_viscosity(temperature, self.gas, model)?;
        let d = self.column.diameter_at(x).value;
        Ok(eta.value * temperature.value / d.powi(4))
    }
}
