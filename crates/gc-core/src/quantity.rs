//! Unit-aware numeric input parsing.
//!
//! Configuration values may be given as plain SI numbers or as text with a
//! unit tag (`"250 um"`, `"1.5 bar"`, `"10 C/min"`). Everything is converted
//! to canonical SI before it reaches the model.

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute temperature (canonical: K)
    Temperature,
    /// Temperature difference (canonical: K)
    TemperatureDifference,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Length (canonical: m)
    Length,
    /// Normalized volumetric flow (canonical: m³/s)
    VolumeFlow,
    /// Time (canonical: s)
    Time,
    /// Heating rate (canonical: K/s)
    TemperatureRate,
    /// Pressure ramp rate (canonical: Pa/s)
    PressureRate,
    /// Volumetric flow ramp rate (canonical: m³/s²)
    VolumeFlowRate,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::TemperatureDifference => write!(f, "Temperature Difference"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Length => write!(f, "Length"),
            Self::VolumeFlow => write!(f, "Volume Flow"),
            Self::Time => write!(f, "Time"),
            Self::TemperatureRate => write!(f, "Heating Rate"),
            Self::PressureRate => write!(f, "Pressure Rate"),
            Self::VolumeFlowRate => write!(f, "Flow Rate Ramp"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit that could mean gauge or absolute
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a quantity value from text, returning canonical SI.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let (value, raw_unit) = split_value_and_unit(raw_text)?;
    let unit = raw_unit.to_lowercase();

    let si = match quantity {
        Quantity::Temperature => parse_temperature(value, &unit)?,
        Quantity::TemperatureDifference => scale(value, &unit, quantity, &[
            ("k", 1.0),
            ("c", 1.0),
            ("°c", 1.0),
            ("f", 5.0 / 9.0),
            ("°f", 5.0 / 9.0),
            ("r", 5.0 / 9.0),
        ])?,
        Quantity::Pressure => parse_pressure(value, &raw_unit)?,
        Quantity::Length => scale(value, &unit, quantity, &[
            ("m", 1.0),
            ("cm", 1e-2),
            ("mm", 1e-3),
            ("um", 1e-6),
            ("µm", 1e-6),
            ("μm", 1e-6),
            ("nm", 1e-9),
        ])?,
        Quantity::VolumeFlow => scale(value, &unit, quantity, &[
            ("m3/s", 1.0),
            ("m³/s", 1.0),
            ("ml/min", 1e-6 / 60.0),
            ("ml/s", 1e-6),
            ("ul/min", 1e-9 / 60.0),
            ("µl/min", 1e-9 / 60.0),
            ("μl/min", 1e-9 / 60.0),
        ])?,
        Quantity::Time => scale(value, &unit, quantity, &[
            ("s", 1.0),
            ("sec", 1.0),
            ("min", 60.0),
            ("h", 3600.0),
        ])?,
        Quantity::TemperatureRate => scale(value, &unit, quantity, &[
            ("k/s", 1.0),
            ("c/s", 1.0),
            ("°c/s", 1.0),
            ("k/min", 1.0 / 60.0),
            ("c/min", 1.0 / 60.0),
            ("°c/min", 1.0 / 60.0),
        ])?,
        Quantity::PressureRate => scale(value, &unit, quantity, &[
            ("pa/s", 1.0),
            ("pa/min", 1.0 / 60.0),
            ("kpa/min", 1e3 / 60.0),
            ("bar/min", 1e5 / 60.0),
        ])?,
        Quantity::VolumeFlowRate => scale(value, &unit, quantity, &[
            ("m3/s2", 1.0),
            ("m³/s²", 1.0),
            ("ml/min2", 1e-6 / 3600.0),
            ("ml/min/min", 1e-6 / 3600.0),
        ])?,
    };

    Ok(si)
}

/// Multiply by the factor of the matching unit; a bare number is SI.
fn scale(
    value: f64,
    unit: &str,
    quantity: Quantity,
    table: &[(&str, f64)],
) -> Result<f64, UnitError> {
    if unit.is_empty() {
        return Ok(value);
    }
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| value * factor)
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: unit.to_string(),
            quantity,
        })
}

/// Temperature in K, °C or °F; returns Kelvin.
fn parse_temperature(value: f64, unit: &str) -> Result<f64, UnitError> {
    let kelvin = match unit {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: Quantity::Temperature,
            })
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Absolute pressure; gauge units assume a 1 atm reference.
///
/// The `m`/`M` prefix is matched case-sensitively: `MPa` is megapascal,
/// `mPa` millipascal, and any other casing is rejected.
fn parse_pressure(value: f64, raw_unit: &str) -> Result<f64, UnitError> {
    match raw_unit {
        "MPa" => return in_range(value * 1e6),
        "mPa" => return in_range(value * 1e-3),
        _ => {}
    }
    let unit = raw_unit.to_lowercase();
    let pa = match unit.as_str() {
        "" | "pa" => value,
        "kpa" => value * 1e3,
        "mpa" => {
            return Err(UnitError::AmbiguousUnit {
                unit: raw_unit.to_string(),
                reason: "Use 'MPa' (megapascal) or 'mPa' (millipascal)".to_string(),
            })
        }
        "bar" => value * 1e5,
        "mbar" => value * 100.0,
        "atm" => value * 101_325.0,
        "psia" => value * 6_894.76,
        "psig" => (value + 14.696) * 6_894.76,
        "kpag" => (value + 101.325) * 1e3,
        "barg" => (value + 1.013_25) * 1e5,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            })
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            })
        }
    };
    in_range(pa)
}

fn in_range(pa: f64) -> Result<f64, UnitError> {
    if pa < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure cannot be negative".to_string(),
        });
    }
    Ok(pa)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "250um" -> (250.0, "um")
/// - "1.5 bar" -> (1.5, "bar")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .char_indices()
        .find(|&(i, c)| {
            let exponent = (c == 'e' || c == 'E')
                && trimmed[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|n| n.is_ascii_digit() || n == '-' || n == '+');
            !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || exponent)
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kelvin_and_celsius() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        let c40 = parse_quantity("40C", Quantity::Temperature).unwrap();
        assert!((c40 - 313.15).abs() < 1e-9);
    }

    #[test]
    fn reject_negative_temperature() {
        assert!(parse_quantity("-300 C", Quantity::Temperature).is_err());
    }

    #[test]
    fn parse_column_dimensions() {
        let d = parse_quantity("250 um", Quantity::Length).unwrap();
        assert!((d - 2.5e-4).abs() < 1e-15);
        assert_eq!(parse_quantity("30 m", Quantity::Length).unwrap(), 30.0);
        let l = parse_quantity("2.5e-4", Quantity::Length).unwrap();
        assert_eq!(l, 2.5e-4);
    }

    #[test]
    fn parse_flow_in_ml_per_min() {
        let f = parse_quantity("1 mL/min", Quantity::VolumeFlow).unwrap();
        assert!((f - 1.0 / 60.0 * 1e-6).abs() < 1e-18);
    }

    #[test]
    fn parse_rates() {
        let r = parse_quantity("10 C/min", Quantity::TemperatureRate).unwrap();
        assert!((r - 10.0 / 60.0).abs() < 1e-12);
        let p = parse_quantity("6 kPa/min", Quantity::PressureRate).unwrap();
        assert!((p - 100.0).abs() < 1e-9);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_quantity("14.7 psi", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn unknown_unit_names_quantity() {
        let err = parse_quantity("3 furlong", Quantity::Length).unwrap_err();
        assert!(err.to_string().contains("Length"));
    }

    #[test]
    fn pressure_prefix_is_case_sensitive() {
        assert_eq!(parse_quantity("0.25 MPa", Quantity::Pressure).unwrap(), 250_000.0);
        let milli = parse_quantity("500 mPa", Quantity::Pressure).unwrap();
        assert!((milli - 0.5).abs() < 1e-15);
        assert!(matches!(
            parse_quantity("0.25 mpa", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "mpa"
        ));
        let kpa = parse_quantity("150 KPA", Quantity::Pressure).unwrap();
        assert_eq!(kpa, 150_000.0);
    }
}
