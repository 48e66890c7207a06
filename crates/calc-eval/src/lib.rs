//! Stateful arithmetic evaluation engine
//!
//! This crate evaluates binary arithmetic requests and keeps running usage
//! statistics across the engine's lifetime:
//!
//! - **Evaluator** (`evaluator`): pure, stateless operator evaluation with
//!   a closed domain-error taxonomy (division by zero, negative radicand,
//!   unknown operation).
//! - **Engine** (`engine`): owns the statistics (one atomic update per
//!   call, incremental latency average), the advisory precision, and the
//!   observer registry. Domain errors never cross the engine boundary as
//!   faults; they are encoded into the returned `CalculationResult`.
//! - **Observers** (`observer`): one replaceable callback per event kind,
//!   invoked synchronously outside the statistics lock.
//!
//! # Example
//!
//! ```
//! use calc_eval::CalcEngine;
//! use calc_types::{CalculationRequest, Operation};
//!
//! let engine = CalcEngine::new();
//! let result = engine.evaluate(CalculationRequest::new(10.0, 5.0, Operation::Add));
//! assert!(result.valid);
//! assert_eq!(result.value, 15.0);
//!
//! let stats = engine.statistics();
//! assert_eq!(stats.total_operations, 1);
//! ```

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod observer;

// Re-export main types
pub use engine::{CalcEngine, DEFAULT_PRECISION, MAX_PRECISION, SESSION_ID};
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, evaluate_complex};
pub use observer::{
    CalculationCompletedEvent, CompletedCallback, ErrorCallback, ErrorOccurredEvent,
    ObserverRegistry,
};
