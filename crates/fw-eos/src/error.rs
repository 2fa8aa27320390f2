//! Equation-of-state errors.

use fw_core::FwError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while evaluating or configuring the equation of state.
///
/// The property formulas themselves never fail: out-of-range inputs are
/// extrapolated and a singular bulk modulus yields IEEE infinities or NaN.
#[derive(Error, Debug)]
pub enum EosError {
    /// Sequence operands whose lengths cannot be broadcast together.
    #[error("Input shape mismatch: t has length {t}, s has length {s}, p has length {p}")]
    InputShape { t: usize, s: usize, p: usize },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Invalid sweep definition.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<EosError> for FwError {
    fn from(err: EosError) -> Self {
        match err {
            EosError::InputShape { t, s, p } => {
                // Report the first operand that disagrees with the broadcast length.
                let expected = t.max(s).max(p);
                let (what, found) = if t != expected && t != 1 {
                    ("temperature", t)
                } else if s != expected && s != 1 {
                    ("salinity", s)
                } else {
                    ("pressure", p)
                };
                FwError::InputShape {
                    what,
                    expected,
                    found,
                }
            }
            other => FwError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::InputShape { t: 3, s: 2, p: 1 };
        let msg = err.to_string();
        assert!(msg.contains("t has length 3"));
        assert!(msg.contains("s has length 2"));

        let err = EosError::InvalidSweep {
            what: "at least 2 points",
        };
        assert!(err.to_string().contains("2 points"));
    }

    #[test]
    fn error_to_fw_error() {
        let fw: FwError = EosError::InputShape { t: 3, s: 2, p: 1 }.into();
        assert_eq!(
            fw,
            FwError::InputShape {
                what: "salinity",
                expected: 3,
                found: 2,
            }
        );

        let fw: FwError = EosError::InvalidArg {
            what: "profile has no samples".into(),
        }
        .into();
        assert!(matches!(fw, FwError::InvalidArg { .. }));
    }
}
