//! Error types for boundary condition operations.

use pi_core::error::PiError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a patch condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BcError {
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Patch '{patch}' has {faces} faces but {values} values were supplied")]
    SizeMismatch {
        patch: String,
        faces: usize,
        values: usize,
    },
}

pub type BcResult<T> = Result<T, BcError>;

impl From<PiError> for BcError {
    fn from(e: PiError) -> Self {
        match e {
            PiError::NonFinite { what, value } | PiError::NonPositive { what, value } => {
                BcError::NonPhysical { what, value }
            }
            PiError::InvalidArg { what } => BcError::InvalidArg { what },
            PiError::LengthMismatch {
                what,
                expected,
                actual,
            } => BcError::SizeMismatch {
                patch: what.to_string(),
                faces: expected,
                values: actual,
            },
        }
    }
}

impl From<BcError> for PiError {
    fn from(e: BcError) -> Self {
        match e {
            BcError::NonPhysical { what, value } if value.is_finite() => {
                PiError::NonPositive { what, value }
            }
            BcError::NonPhysical { what, value } => PiError::NonFinite { what, value },
            BcError::InvalidArg { what } => PiError::InvalidArg { what },
            BcError::SizeMismatch { faces, values, .. } => PiError::LengthMismatch {
                what: "patch values",
                expected: faces,
                actual: values,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BcError::SizeMismatch {
            patch: "In".into(),
            faces: 4,
            values: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'In'"));
        assert!(msg.contains("4 faces"));
    }

    #[test]
    fn error_conversion() {
        let pi_err: PiError = BcError::InvalidArg { what: "test" }.into();
        assert!(matches!(pi_err, PiError::InvalidArg { .. }));

        let bc_err: BcError = PiError::NonPositive {
            what: "h",
            value: 0.0,
        }
        .into();
        assert!(matches!(bc_err, BcError::NonPhysical { what: "h", .. }));
    }
}
