//! Running usage statistics for the engine

use serde::{Deserialize, Serialize};

/// Counters and the running latency average maintained across the engine's
/// lifetime.
///
/// Invariants after every completed call:
/// - `total_operations == successful_operations + error_count`
/// - `average_execution_micros` is the arithmetic mean of all per-call
///   durations since the last reset, folded incrementally; a stored history
///   is never kept.
///
/// Owned exclusively by the engine; callers only ever see snapshot copies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineStatistics {
    pub total_operations: u64,
    pub successful_operations: u64,
    pub error_count: u64,
    pub average_execution_micros: f64,
}

impl EngineStatistics {
    /// Fold one completed call into the counters and the running average.
    ///
    /// The average divides by the post-increment total, so the first call
    /// divides by 1 and every call is weighted equally whether it succeeded
    /// or failed.
    pub fn record_call(&mut self, succeeded: bool, elapsed_micros: f64) {
        self.total_operations += 1;
        if succeeded {
            self.successful_operations += 1;
        } else {
            self.error_count += 1;
        }

        let n = self.total_operations as f64;
        self.average_execution_micros =
            (self.average_execution_micros * (n - 1.0) + elapsed_micros) / n;
    }

    /// Zero all four fields. Always succeeds.
    pub fn reset(&mut self) {
        *self = EngineStatistics::default();
    }
}
