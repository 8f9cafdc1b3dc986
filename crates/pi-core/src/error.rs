use thiserror::Error;

pub type PiResult<T> = Result<T, PiError>;

#[derive(Error, Debug)]
pub enum PiError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch: {what} (expected={expected}, actual={actual})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
