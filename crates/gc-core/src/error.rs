use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Domain error in {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    #[error(
        "Quadrature did not converge to tolerance {tolerance:e}: \
         best estimate {estimate:e} with error {error_estimate:e} after {evaluations} evaluations"
    )]
    IntegrationFailure {
        tolerance: f64,
        estimate: f64,
        error_estimate: f64,
        evaluations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_failure_reports_estimate() {
        let err = CoreError::IntegrationFailure {
            tolerance: 1e-3,
            estimate: 2.5,
            error_estimate: 0.1,
            evaluations: 150,
        };
        let msg = err.to_string();
        assert!(msg.contains("2.5e0"));
        assert!(msg.contains("150"));
    }
}
