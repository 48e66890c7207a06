//! Domain errors for the evaluation engine

use calc_types::Operation;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors a single evaluation can produce.
///
/// These never cross the engine boundary as faults: the engine encodes each
/// one into `CalculationResult.error_message` using its `Display` text and
/// returns normally. The texts are part of the public contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Divisor compared equal to zero (IEEE equality, so `-0.0` included)
    #[error("Division by zero")]
    DivisionByZero,

    /// Square-root operand is negative
    #[error("Cannot take square root of negative number")]
    NegativeRadicand,

    /// Wire code outside the closed operation set
    #[error("Invalid operation: code {code}")]
    UnknownOperation { code: u8 },

    /// Operation has no complex-number implementation
    #[error("Complex operation not implemented: {operation}")]
    UnsupportedComplexOperation { operation: Operation },
}

impl EvalError {
    /// Fixed error-class code reported to the error observer.
    pub fn class_code(&self) -> u32 {
        1
    }
}
