//! Data model for the calc evaluation engine
//!
//! This crate defines the value and bookkeeping types shared by the engine:
//! - `Operation`: the closed set of supported operator tags
//! - `CalculationRequest` / `CalculationResult`: per-call input and output
//! - `ComplexNumber`: operand type for the complex evaluation path
//! - `EngineStatistics`: running usage counters and latency average

pub mod operation;
pub mod stats;
pub mod value;

pub use operation::Operation;
pub use stats::EngineStatistics;
pub use value::{CalculationRequest, CalculationResult, ComplexNumber};
