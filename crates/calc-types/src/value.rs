//! Per-call request and result types

use crate::Operation;
use serde::{Deserialize, Serialize};

/// A single evaluation request: two operands and an operator tag.
///
/// Transient; the engine does not retain requests after the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub left: f64,
    pub right: f64,
    pub operation: Operation,
}

impl CalculationRequest {
    pub fn new(left: f64, right: f64, operation: Operation) -> Self {
        Self { left, right, operation }
    }
}

/// The outcome of one evaluation.
///
/// Invariant: `valid` is true exactly when `error_message` is `None`, and
/// `value` is meaningful only when `valid`. Built once per request and not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub value: f64,
    pub valid: bool,
    pub error_message: Option<String>,
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub timestamp_millis: u64,
}

impl CalculationResult {
    /// A successful result carrying `value`.
    pub fn ok(value: f64, timestamp_millis: u64) -> Self {
        Self { value, valid: true, error_message: None, timestamp_millis }
    }

    /// A failed result carrying the domain error's display text.
    pub fn error(message: impl Into<String>, timestamp_millis: u64) -> Self {
        Self {
            value: 0.0,
            valid: false,
            error_message: Some(message.into()),
            timestamp_millis,
        }
    }
}

/// Operand type for the complex evaluation path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub re: f64,
    pub im: f64,
}

impl ComplexNumber {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}
