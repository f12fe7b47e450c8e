//! Piecewise-linear time programs.
//!
//! Temperature, pressure and flow programs are all described by ordered
//! breakpoints `(t_i, v_i)` with linear interpolation between them. Outside
//! the breakpoint range the [`Extrapolation`] rule applies.

use crate::error::{ColumnError, ColumnResult};
use serde::{Deserialize, Serialize};

/// Behaviour before the first and after the last breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Hold the end values
    #[default]
    Clamp,
    /// Continue the first/last segment
    Linear,
}

/// One step of a conventional GC program: ramp at `rate` until `target`,
/// then hold for `hold` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Magnitude of the rate of change [unit/s]
    pub rate: f64,
    pub target: f64,
    /// [s]
    pub hold: f64,
}

impl Ramp {
    pub fn new(rate: f64, target: f64, hold: f64) -> Self {
        Self { rate, target, hold }
    }
}

/// Breakpoint program with linear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    times: Vec<f64>,
    values: Vec<f64>,
    extrapolation: Extrapolation,
}

impl Program {
    /// Program with strictly increasing `times`.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> ColumnResult<Self> {
        if times.is_empty() {
            return Err(invalid("program needs at least one breakpoint"));
        }
        if times.len() != values.len() {
            return Err(invalid(format!(
                "{} breakpoint times but {} values",
                times.len(),
                values.len()
            )));
        }
        if let Some(i) = times
            .iter()
            .chain(values.iter())
            .position(|v| !v.is_finite())
        {
            return Err(invalid(format!("non-finite entry at position {i}")));
        }
        if let Some(w) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(invalid(format!(
                "breakpoint times must be strictly increasing (t[{}]={} >= t[{}]={})",
                w,
                times[w],
                w + 1,
                times[w + 1]
            )));
        }

        Ok(Self {
            times,
            values,
            extrapolation: Extrapolation::default(),
        })
    }

    /// Program holding `value` forever.
    pub fn constant(value: f64) -> Self {
        Self {
            times: vec![0.0],
            values: vec![value],
            extrapolation: Extrapolation::Clamp,
        }
    }

    /// Build from GC notation: start at `initial`, hold `initial_hold`
    /// seconds, then follow `ramps` in order.
    pub fn from_ramps(initial: f64, initial_hold: f64, ramps: &[Ramp]) -> ColumnResult<Self> {
        if !initial.is_finite() {
            return Err(invalid("initial value must be finite"));
        }
        if !(initial_hold.is_finite() && initial_hold >= 0.0) {
            return Err(invalid("initial hold must be a non-negative time"));
        }

        let mut times = vec![0.0];
        let mut values = vec![initial];
        let mut t = 0.0;
        let mut current = initial;

        if initial_hold > 0.0 {
            t += initial_hold;
            times.push(t);
            values.push(current);
        }

        for (i, ramp) in ramps.iter().enumerate() {
            if !ramp.target.is_finite() {
                return Err(invalid(format!("ramp {i}: target must be finite")));
            }
            if !(ramp.hold.is_finite() && ramp.hold >= 0.0) {
                return Err(invalid(format!("ramp {i}: hold must be a non-negative time")));
            }

            let span = (ramp.target - current).abs();
            if span > 0.0 {
                if !(ramp.rate.is_finite() && ramp.rate > 0.0) {
                    return Err(invalid(format!(
                        "ramp {i}: rate must be positive, got {}",
                        ramp.rate
                    )));
                }
                t += span / ramp.rate;
                times.push(t);
                values.push(ramp.target);
                current = ramp.target;
            }
            if ramp.hold > 0.0 {
                t += ramp.hold;
                times.push(t);
                values.push(current);
            }
        }

        Self::new(times, values)
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at time `t`.
    pub fn value(&self, t: f64) -> f64 {
        let n = self.times.len();
        if n == 1 {
            return self.values[0];
        }

        // Index of the first breakpoint strictly after t.
        let idx = self.times.partition_point(|&ti| ti <= t);
        let seg = match (idx, self.extrapolation) {
            (0, Extrapolation::Clamp) => return self.values[0],
            (i, Extrapolation::Clamp) if i == n => return self.values[n - 1],
            (0, Extrapolation::Linear) => 0,
            (i, Extrapolation::Linear) if i == n => n - 2,
            (i, _) => i - 1,
        };

        let (t0, t1) = (self.times[seg], self.times[seg + 1]);
        let (v0, v1) = (self.values[seg], self.values[seg + 1]);
        v0 + (v1 - v0) * (t - t0) / (t1 - t0)
    }
}

fn invalid(what: impl Into<String>) -> ColumnError {
    ColumnError::InvalidProgram { what: what.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_program() {
        let p = Program::constant(350.0);
        assert_eq!(p.value(-1.0), 350.0);
        assert_eq!(p.value(0.0), 350.0);
        assert_eq!(p.value(1e6), 350.0);
    }

    #[test]
    fn interpolates_between_breakpoints() {
        let p = Program::new(vec![0.0, 10.0, 20.0], vec![300.0, 400.0, 400.0]).unwrap();
        assert_eq!(p.value(0.0), 300.0);
        assert_eq!(p.value(5.0), 350.0);
        assert_eq!(p.value(10.0), 400.0);
        assert_eq!(p.value(15.0), 400.0);
    }

    #[test]
    fn clamps_outside_range() {
        let p = Program::new(vec![10.0, 20.0], vec![1.0, 2.0]).unwrap();
        assert_eq!(p.value(0.0), 1.0);
        assert_eq!(p.value(30.0), 2.0);
    }

    #[test]
    fn linear_extrapolation() {
        let p = Program::new(vec![10.0, 20.0], vec![1.0, 2.0])
            .unwrap()
            .with_extrapolation(Extrapolation::Linear);
        assert!((p.value(0.0) - 0.0).abs() < 1e-12);
        assert!((p.value(30.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_breakpoints() {
        assert!(Program::new(vec![], vec![]).is_err());
        assert!(Program::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(Program::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(Program::new(vec![1.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(Program::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn ramps_build_breakpoints() {
        // 40 °C for 60 s, 10 K/min to 100 °C, hold 120 s
        let p = Program::from_ramps(313.15, 60.0, &[Ramp::new(10.0 / 60.0, 373.15, 120.0)]).unwrap();
        assert_eq!(p.times().len(), 4);
        assert_eq!(p.times()[1], 60.0);
        assert!((p.times()[2] - 420.0).abs() < 1e-9);
        assert!((p.times()[3] - 540.0).abs() < 1e-9);
        assert!((p.value(240.0) - 343.15).abs() < 1e-9);
        assert_eq!(p.value(1000.0), 373.15);
    }

    #[test]
    fn downward_ramps_and_zero_span() {
        let p = Program::from_ramps(
            200_000.0,
            0.0,
            &[Ramp::new(1000.0, 150_000.0, 0.0), Ramp::new(1000.0, 150_000.0, 30.0)],
        )
        .unwrap();
        assert_eq!(p.times(), &[0.0, 50.0, 80.0]);
        assert_eq!(p.value(25.0), 175_000.0);
    }

    #[test]
    fn ramp_needs_positive_rate() {
        let err = Program::from_ramps(300.0, 0.0, &[Ramp::new(0.0, 400.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ColumnError::InvalidProgram { .. }));
    }
}
