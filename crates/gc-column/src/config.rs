//! YAML run description.
//!
//! ```yaml
//! column:
//!   length: 30 m
//!   diameter: 250 um
//!   film_thickness: 0.25 um
//! gas: He
//! options:
//!   pressure_model: gradient
//!   viscosity: blumberg
//!   control: pressure
//! temperature:
//!   program:
//!     initial: 40 C
//!     hold: 1 min
//!     ramps:
//!       - { rate: 10 C/min, target: 300 C, hold: 5 min }
//! inlet:
//!   initial: 250 kPa
//! outlet: 101.3 kPa
//! ```
//!
//! Every value is either a plain number in SI units or a string with a unit.

use crate::boundary::{Boundary, ControlMode};
use crate::error::ColumnResult;
use crate::field::{GradientTemperature, ProgrammedTemperature, TemperatureField};
use crate::geometry::{Column, Profile};
use crate::model::ColumnModel;
use crate::pressure_model::{Gradient, PressureModelKind, Uniform};
use crate::program::{Extrapolation, Program, Ramp};
use crate::setup::ColumnSetup;
use gc_core::units::m;
use gc_core::{QuadratureConfig, Quantity, parse_quantity};
use gc_fluids::{CarrierGas, ViscosityModel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnConfig {
    pub column: ColumnDef,
    pub gas: CarrierGas,
    #[serde(default)]
    pub options: OptionsDef,
    pub temperature: TemperatureDef,
    /// Inlet pressure or flow program, per `options.control`
    pub inlet: ProgramDef,
    pub outlet: ProgramDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDef {
    pub length: ValueDef,
    pub diameter: ProfileDef,
    pub film_thickness: ProfileDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionsDef {
    #[serde(default)]
    pub pressure_model: PressureModelKind,
    #[serde(default)]
    pub viscosity: ViscosityModel,
    #[serde(default)]
    pub control: ControlMode,
    /// Inlet viscosity of the uniform model; Blumberg when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform_inlet_viscosity: Option<InletViscosityDef>,
    #[serde(default)]
    pub extrapolation: Extrapolation,
    #[serde(default)]
    pub quadrature: QuadratureConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InletViscosityDef {
    Blumberg,
    Hp,
    /// Same correlation as `options.viscosity`
    Selected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureDef {
    pub program: ProgramDef,
    /// Inlet excess temperature ΔT(t), falling linearly to zero at the outlet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<ProgramDef>,
}

/// Number in SI units or text with a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueDef {
    Number(f64),
    Text(String),
}

impl ValueDef {
    pub fn resolve(&self, quantity: Quantity) -> ColumnResult<f64> {
        match self {
            ValueDef::Number(v) => Ok(*v),
            ValueDef::Text(text) => Ok(parse_quantity(text, quantity)?),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProfileDef {
    Constant(ValueDef),
    Taper { inlet: ValueDef, outlet: ValueDef },
}

impl ProfileDef {
    fn resolve(&self) -> ColumnResult<Profile> {
        Ok(match self {
            ProfileDef::Constant(v) => Profile::Constant(m(v.resolve(Quantity::Length)?)),
            ProfileDef::Taper { inlet, outlet } => Profile::Linear {
                inlet: m(inlet.resolve(Quantity::Length)?),
                outlet: m(outlet.resolve(Quantity::Length)?),
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RampDef {
    pub rate: ValueDef,
    pub target: ValueDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold: Option<ValueDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProgramDef {
    Constant(ValueDef),
    Ramps {
        initial: ValueDef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hold: Option<ValueDef>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        ramps: Vec<RampDef>,
    },
    Breakpoints {
        times: Vec<ValueDef>,
        values: Vec<ValueDef>,
    },
}

impl ProgramDef {
    /// Resolve with `value` and `rate` as the quantities of the values and
    /// their rates of change.
    pub fn build(&self, value: Quantity, rate: Quantity) -> ColumnResult<Program> {
        let time = |v: &Option<ValueDef>| -> ColumnResult<f64> {
            v.as_ref().map_or(Ok(0.0), |v| v.resolve(Quantity::Time))
        };

        match self {
            ProgramDef::Constant(v) => Ok(Program::constant(v.resolve(value)?)),
            ProgramDef::Ramps {
                initial,
                hold,
                ramps,
            } => {
                let steps = ramps
                    .iter()
                    .map(|r| {
                        Ok(Ramp::new(
                            r.rate.resolve(rate)?,
                            r.target.resolve(value)?,
                            time(&r.hold)?,
                        ))
                    })
                    .collect::<ColumnResult<Vec<_>>>()?;
                Program::from_ramps(initial.resolve(value)?, time(hold)?, &steps)
            }
            ProgramDef::Breakpoints { times, values } => Program::new(
                times
                    .iter()
                    .map(|t| t.resolve(Quantity::Time))
                    .collect::<ColumnResult<_>>()?,
                values
                    .iter()
                    .map(|v| v.resolve(value))
                    .collect::<ColumnResult<_>>()?,
            ),
        }
    }
}

impl ColumnConfig {
    /// Resolve units, assemble the model and check it for plausibility.
    pub fn build(&self) -> ColumnResult<ColumnModel> {
        let opts = &self.options;
        let length = self.column.length.resolve(Quantity::Length)?;
        let column = Column::new(
            m(length),
            self.column.diameter.resolve()?,
            self.column.film_thickness.resolve()?,
        )?;

        let program = self
            .temperature
            .program
            .build(Quantity::Temperature, Quantity::TemperatureRate)?
            .with_extrapolation(opts.extrapolation);
        let temperature: Arc<dyn TemperatureField> = match &self.temperature.gradient {
            None => Arc::new(ProgrammedTemperature::new(program)),
            Some(gradient) => Arc::new(GradientTemperature::new(
                program,
                gradient
                    .build(Quantity::TemperatureDifference, Quantity::TemperatureRate)?
                    .with_extrapolation(opts.extrapolation),
                m(length),
            )),
        };

        let (inlet_value, inlet_rate) = match opts.control {
            ControlMode::Pressure => (Quantity::Pressure, Quantity::PressureRate),
            ControlMode::Flow => (Quantity::VolumeFlow, Quantity::VolumeFlowRate),
        };
        let boundary = Boundary {
            control: opts.control,
            inlet: self
                .inlet
                .build(inlet_value, inlet_rate)?
                .with_extrapolation(opts.extrapolation),
            outlet: self
                .outlet
                .build(Quantity::Pressure, Quantity::PressureRate)?
                .with_extrapolation(opts.extrapolation),
        };

        let setup = ColumnSetup {
            column,
            gas: self.gas,
            viscosity: opts.viscosity,
            temperature,
            boundary,
            quadrature: opts.quadrature,
        };

        let model = match opts.pressure_model {
            PressureModelKind::Gradient => ColumnModel::new(setup, Gradient),
            PressureModelKind::Uniform => {
                let uniform = match opts.uniform_inlet_viscosity {
                    None | Some(InletViscosityDef::Blumberg) => Uniform::default(),
                    Some(InletViscosityDef::Hp) => Uniform::with_inlet_viscosity(ViscosityModel::Hp),
                    Some(InletViscosityDef::Selected) => Uniform::consistent(),
                };
                ColumnModel::new(setup, uniform)
            }
        };

        debug!(
            gas = %self.gas,
            model = %opts.pressure_model,
            viscosity = %opts.viscosity,
            control = %opts.control,
            length,
            "assembled column model"
        );
        model.validate()?;
        Ok(model)
    }
}

pub fn parse_config(text: &str) -> ColumnResult<ColumnConfig> {
    Ok(serde_yaml::from_str(text)?)
}

/// Parse and build a validated model from YAML text.
pub fn from_yaml_str(text: &str) -> ColumnResult<ColumnModel> {
    parse_config(text)?.build()
}

pub fn load_yaml(path: &Path) -> ColumnResult<ColumnModel> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, config: &ColumnConfig) -> ColumnResult<()> {
    config.build()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
