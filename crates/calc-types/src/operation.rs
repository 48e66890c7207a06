//! Operator tags for calculation requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operations the engine evaluates.
///
/// The set is fixed; callers select an operation by tag (or by wire code via
/// [`Operation::from_code`]), never by subclassing or registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `left ^ right` with IEEE-754 `powf` semantics.
    Power,
    /// Unary: the right operand is ignored.
    SquareRoot,
}

impl Operation {
    /// All operations, in wire-code order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
    ];

    /// Decode a wire code (1-6). Returns `None` for any other value;
    /// the engine maps that to its unknown-operation error.
    pub fn from_code(code: u8) -> Option<Operation> {
        match code {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            4 => Some(Operation::Divide),
            5 => Some(Operation::Power),
            6 => Some(Operation::SquareRoot),
            _ => None,
        }
    }

    /// The wire code for this operation (1-6).
    pub fn code(&self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
            Operation::Power => 5,
            Operation::SquareRoot => 6,
        }
    }

    /// True for operations that only read the left operand.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::SquareRoot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Power => "Power",
            Operation::SquareRoot => "SquareRoot",
        };
        f.write_str(name)
    }
}
