//! The stateful evaluation engine
//!
//! `CalcEngine` owns the statistics, the advisory precision, and the
//! observer registry. Every external request flows through
//! [`CalcEngine::evaluate`]: evaluator call, statistics update, observer
//! notification, result.

use crate::error::EvalError;
use crate::evaluator;
use crate::observer::{
    CalculationCompletedEvent, CompletedCallback, ErrorCallback, ErrorOccurredEvent,
    ObserverRegistry,
};
use calc_types::{
    CalculationRequest, CalculationResult, ComplexNumber, EngineStatistics, Operation,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::time::Instant;

/// Highest accepted decimal-places setting.
pub const MAX_PRECISION: u8 = 15;

/// Default decimal places for the formatting boundary.
pub const DEFAULT_PRECISION: u8 = 2;

/// Session identifier reported with every completion event. Constant for
/// the engine's lifetime.
pub const SESSION_ID: u64 = 12345;

/// The stateful arithmetic evaluation engine.
///
/// All methods take `&self`; the engine is `Send + Sync` and re-entrant.
/// The statistics counters and the running-average fold are updated as one
/// atomic unit under a single mutex, so a concurrent [`statistics`] call
/// never observes a partial update. Observers are invoked after that lock
/// is released.
///
/// [`statistics`]: CalcEngine::statistics
pub struct CalcEngine {
    stats: Mutex<EngineStatistics>,
    precision: Mutex<u8>,
    observers: ObserverRegistry,
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcEngine {
    /// Create an engine with zeroed statistics and the default precision.
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(EngineStatistics::default()),
            precision: Mutex::new(DEFAULT_PRECISION),
            observers: ObserverRegistry::new(),
        }
    }

    /// Evaluate one request. Never fails: domain errors are encoded in the
    /// returned result and counted in the statistics.
    pub fn evaluate(&self, request: CalculationRequest) -> CalculationResult {
        self.run(|| evaluator::evaluate(request.left, request.right, request.operation))
    }

    /// Wire-code entry point. Unknown codes take the same bookkeeping path
    /// as any other failed call.
    pub fn evaluate_code(&self, left: f64, right: f64, code: u8) -> CalculationResult {
        match Operation::from_code(code) {
            Some(op) => self.evaluate(CalculationRequest::new(left, right, op)),
            None => self.run(|| Err(EvalError::UnknownOperation { code })),
        }
    }

    /// Complex evaluation passthrough. Does not touch statistics or
    /// observers.
    pub fn evaluate_complex(
        &self,
        left: ComplexNumber,
        right: ComplexNumber,
        op: Operation,
    ) -> Result<ComplexNumber, EvalError> {
        evaluator::evaluate_complex(left, right, op)
    }

    /// Snapshot of the current statistics. The copy never mutates after
    /// return.
    pub fn statistics(&self) -> EngineStatistics {
        *self.stats.lock()
    }

    /// Zero all statistics. Always returns true.
    pub fn reset(&self) -> bool {
        self.stats.lock().reset();
        log::debug!("statistics reset");
        true
    }

    /// Set the advisory precision. Accepts 0..=15; rejects anything larger
    /// without mutating the stored value.
    pub fn set_precision(&self, places: u8) -> bool {
        if places <= MAX_PRECISION {
            *self.precision.lock() = places;
            log::debug!("precision set to {places}");
            true
        } else {
            false
        }
    }

    /// The current advisory precision.
    pub fn precision(&self) -> u8 {
        *self.precision.lock()
    }

    /// Render a value with the current precision's decimal places. Display
    /// only: stored result values stay unrounded.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision() as usize)
    }

    /// The session identifier reported with completion events.
    pub fn session_id(&self) -> u64 {
        SESSION_ID
    }

    /// Replace (or clear) the completion observer.
    pub fn on_completed(&self, callback: Option<CompletedCallback>) {
        self.observers.set_completed(callback);
        log::debug!("completion observer updated");
    }

    /// Replace (or clear) the error observer.
    pub fn on_error(&self, callback: Option<ErrorCallback>) {
        self.observers.set_error(callback);
        log::debug!("error observer updated");
    }

    /// Shared tail of every evaluation: timestamp, statistics fold under
    /// one lock, observer dispatch outside it.
    fn run(&self, eval: impl FnOnce() -> Result<f64, EvalError>) -> CalculationResult {
        let start = Instant::now();
        let timestamp_millis = Utc::now().timestamp_millis().max(0) as u64;
        let outcome = eval();

        let result = match &outcome {
            Ok(value) => CalculationResult::ok(*value, timestamp_millis),
            Err(err) => CalculationResult::error(err.to_string(), timestamp_millis),
        };

        let elapsed_micros = start.elapsed().as_secs_f64() * 1_000_000.0;
        self.stats.lock().record_call(result.valid, elapsed_micros);

        // Lock released; observers cannot block concurrent bookkeeping.
        match &outcome {
            Ok(_) => {
                log::trace!("evaluation completed: {}", result.value);
                if let Some(cb) = self.observers.completed() {
                    cb(&CalculationCompletedEvent {
                        result: result.clone(),
                        session_id: SESSION_ID,
                    });
                }
            }
            Err(err) => {
                log::trace!("evaluation failed: {err}");
                if let Some(cb) = self.observers.error() {
                    cb(&ErrorOccurredEvent {
                        message: err.to_string(),
                        code: err.class_code(),
                        timestamp_millis,
                    });
                }
            }
        }

        result
    }
}
