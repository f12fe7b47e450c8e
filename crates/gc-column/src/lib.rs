//! gc-column: carrier-gas flow and solute transport in a GC capillary column.
//!
//! Provides:
//! - Piecewise-linear programs and temperature fields
//! - Column geometry and boundary conditions
//! - Uniform and gradient pressure formulations behind `PressureModel`
//! - Pressure, flow, hold-up time, residency, retention and plate height
//! - Parallel sweeps and YAML run descriptions
//!
//! # Example
//!
//! ```
//! use gc_column::{Boundary, Column, ColumnModel, ColumnSetup, Gradient, Isothermal, Program, Solute};
//! use gc_core::units::{k, m, s};
//! use gc_fluids::CarrierGas;
//!
//! let setup = ColumnSetup::new(
//!     Column::uniform(m(30.0), m(2.5e-4), m(2.5e-7)).unwrap(),
//!     CarrierGas::He,
//!     Isothermal::new(k(373.15)),
//!     Boundary::pressure_controlled(Program::constant(250e3), Program::constant(101.3e3)),
//! );
//! let model = ColumnModel::new(setup, Gradient);
//!
//! let tm = model.holdup_time(s(0.0)).unwrap();
//! let decane = Solute::new("decane", 420.0, 32.0, 120.0, 1e-3, 1e-4);
//! let r = model.residency(&decane, m(15.0), s(0.0)).unwrap();
//! println!("tM = {:.2} s, dt/dx = {r:.2} s/m", tm.value);
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod field;
pub mod flow;
pub mod geometry;
pub mod holdup;
pub mod model;
pub mod plate_height;
pub mod pressure;
pub mod pressure_model;
pub mod program;
pub mod residency;
mod restriction;
pub mod retention;
pub mod setup;
pub mod solute;
pub mod sweep;
pub mod validate;

// Re-exports
pub use boundary::{Boundary, ControlMode};
pub use config::{ColumnConfig, from_yaml_str, load_yaml, parse_config, save_yaml};
pub use error::{ColumnError, ColumnResult};
pub use field::{GradientTemperature, Isothermal, ProgrammedTemperature, TemperatureField};
pub use flow::{flow, inlet_pressure};
pub use geometry::{Column, Profile};
pub use holdup::{UniformInlet, holdup_time_uniform};
pub use model::ColumnModel;
pub use plate_height::{STATIONARY_DIFFUSION_RATIO, diffusion_mobile, plate_height};
pub use pressure::{FLOW_FACTOR, pressure};
pub use pressure_model::{Gradient, PressureModel, PressureModelKind, Uniform};
pub use program::{Extrapolation, Program, Ramp};
pub use residency::{mobile_phase_residency, residency, velocity};
pub use retention::{retention_factor, retention_factor_at};
pub use setup::ColumnSetup;
pub use solute::Solute;
pub use sweep::{FieldQuantity, SweepResult, axial_profile, holdup_profile, linspace, time_profile};
