//! Stateless operator evaluation
//!
//! The pure leaf of the engine: maps (operand, operand, operation) to a value
//! or a domain error. No shared state, no side effects. Everything stateful
//! (counters, observers, timestamps) lives in [`crate::engine`].

use crate::error::{EvalError, EvalResult};
use calc_types::{ComplexNumber, Operation};

/// Evaluate one binary (or unary, for `SquareRoot`) operation.
///
/// - `Divide` fails with [`EvalError::DivisionByZero`] when the divisor
///   compares equal to zero. This is IEEE equality, not a near-zero
///   tolerance, so `-0.0` rejects and subnormals pass.
/// - `Power` uses `f64::powf` as-is; fractional and negative exponents
///   follow IEEE semantics and a NaN is a valid result, not an error.
/// - `SquareRoot` reads only `left`; `right` is ignored.
pub fn evaluate(left: f64, right: f64, op: Operation) -> EvalResult<f64> {
    match op {
        Operation::Add => Ok(left + right),
        Operation::Subtract => Ok(left - right),
        Operation::Multiply => Ok(left * right),
        Operation::Divide => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        Operation::Power => Ok(left.powf(right)),
        Operation::SquareRoot => {
            if left < 0.0 {
                Err(EvalError::NegativeRadicand)
            } else {
                Ok(left.sqrt())
            }
        }
    }
}

/// Componentwise complex evaluation.
///
/// Only `Add` and `Subtract` are defined on complex operands; every other
/// operation fails with [`EvalError::UnsupportedComplexOperation`].
pub fn evaluate_complex(
    left: ComplexNumber,
    right: ComplexNumber,
    op: Operation,
) -> EvalResult<ComplexNumber> {
    match op {
        Operation::Add => Ok(ComplexNumber::new(left.re + right.re, left.im + right.im)),
        Operation::Subtract => Ok(ComplexNumber::new(left.re - right.re, left.im - right.im)),
        _ => Err(EvalError::UnsupportedComplexOperation { operation: op }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 5.0, Operation::Add, 15.0)]
    #[case(-2.5, 2.5, Operation::Add, 0.0)]
    #[case(10.0, 5.0, Operation::Subtract, 5.0)]
    #[case(1.0, 2.5, Operation::Subtract, -1.5)]
    #[case(10.0, 5.0, Operation::Multiply, 50.0)]
    #[case(-4.0, 0.5, Operation::Multiply, -2.0)]
    #[case(10.0, 4.0, Operation::Divide, 2.5)]
    #[case(-9.0, 3.0, Operation::Divide, -3.0)]
    #[case(2.0, 10.0, Operation::Power, 1024.0)]
    #[case(9.0, 0.5, Operation::Power, 3.0)]
    #[case(4.0, 0.0, Operation::SquareRoot, 2.0)]
    #[case(0.0, 99.0, Operation::SquareRoot, 0.0)]
    fn test_evaluate_table(
        #[case] left: f64,
        #[case] right: f64,
        #[case] op: Operation,
        #[case] expected: f64,
    ) {
        assert_eq!(evaluate(left, right, op).unwrap(), expected);
    }

    #[test]
    fn test_divide_by_exact_zero_fails() {
        assert_eq!(evaluate(10.0, 0.0, Operation::Divide), Err(EvalError::DivisionByZero));
        // -0.0 == 0.0 under IEEE equality, so it rejects too
        assert_eq!(evaluate(10.0, -0.0, Operation::Divide), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_near_zero_succeeds() {
        // No epsilon tolerance: the smallest positive double is a fine divisor
        let r = evaluate(1.0, f64::MIN_POSITIVE, Operation::Divide).unwrap();
        assert!(r.is_finite());
        assert!(evaluate(1.0, 1e-300, Operation::Divide).unwrap() > 0.0);
    }

    #[test]
    fn test_sqrt_negative_fails() {
        assert_eq!(evaluate(-1.0, 0.0, Operation::SquareRoot), Err(EvalError::NegativeRadicand));
        assert_eq!(
            evaluate(-1e-12, 7.0, Operation::SquareRoot),
            Err(EvalError::NegativeRadicand)
        );
    }

    #[test]
    fn test_sqrt_ignores_right_operand() {
        assert_eq!(evaluate(4.0, -123.0, Operation::SquareRoot).unwrap(), 2.0);
    }

    #[test]
    fn test_power_follows_ieee_semantics() {
        // Negative base with fractional exponent yields NaN, not an error
        let r = evaluate(-8.0, 0.5, Operation::Power).unwrap();
        assert!(r.is_nan());
        assert_eq!(evaluate(-2.0, 3.0, Operation::Power).unwrap(), -8.0);
        assert_eq!(evaluate(0.0, 0.0, Operation::Power).unwrap(), 1.0);
    }

    #[test]
    fn test_complex_add_subtract_componentwise() {
        let a = ComplexNumber::new(1.0, 2.0);
        let b = ComplexNumber::new(3.0, -4.0);
        assert_eq!(
            evaluate_complex(a, b, Operation::Add).unwrap(),
            ComplexNumber::new(4.0, -2.0)
        );
        assert_eq!(
            evaluate_complex(a, b, Operation::Subtract).unwrap(),
            ComplexNumber::new(-2.0, 6.0)
        );
    }

    #[rstest]
    #[case(Operation::Multiply)]
    #[case(Operation::Divide)]
    #[case(Operation::Power)]
    #[case(Operation::SquareRoot)]
    fn test_complex_unsupported_operations(#[case] op: Operation) {
        let a = ComplexNumber::new(1.0, 1.0);
        assert_eq!(
            evaluate_complex(a, a, op),
            Err(EvalError::UnsupportedComplexOperation { operation: op })
        );
    }
}
