use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Both tolerances set to the same value.
    pub fn uniform(tol: Real) -> Self {
        Self { abs: tol, rel: tol }
    }

    /// Acceptable error for a quantity of magnitude `value`.
    pub fn bound(&self, value: Real) -> Real {
        self.abs.max(self.rel * value.abs())
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, otherwise a domain error.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::Domain { what, value: v })
    }
}

/// Square root that refuses negative (or non-finite) radicands.
pub fn checked_sqrt(radicand: Real, what: &'static str) -> Result<Real, CoreError> {
    if radicand.is_finite() && radicand >= 0.0 {
        Ok(radicand.sqrt())
    } else {
        Err(CoreError::Domain {
            what,
            value: radicand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn checked_sqrt_rejects_negative_radicand() {
        assert_eq!(checked_sqrt(4.0, "p").unwrap(), 2.0);
        assert_eq!(checked_sqrt(0.0, "p").unwrap(), 0.0);
        assert!(matches!(
            checked_sqrt(-1.0, "p"),
            Err(CoreError::Domain { what: "p", .. })
        ));
        assert!(checked_sqrt(Real::INFINITY, "p").is_err());
    }

    #[test]
    fn bound_uses_larger_of_abs_and_rel() {
        let tol = Tolerances::uniform(1e-3);
        assert_eq!(tol.bound(0.5), 1e-3);
        assert!((tol.bound(1e4) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1.0, "d").is_ok());
        assert!(ensure_positive(0.0, "d").is_err());
        assert!(ensure_positive(Real::NAN, "d").is_err());
    }
}
