//! Configuration for an optimization run.
//!
//! `Default` is batch mode: one unlimited step loop until complete.

use std::time::Duration;

/// Per-step budget used by interactive callers that do not pick their own.
pub const DEFAULT_STEP_BUDGET: Duration = Duration::from_millis(1000);

/// Convert a caller-supplied millisecond budget into a step budget.
///
/// Missing or NaN → [`DEFAULT_STEP_BUDGET`]. Negative → zero. Values too large
/// for a `Duration` (including infinity) → `None`, i.e. no budget.
pub fn step_budget_from_millis(budget_ms: Option<f64>) -> Option<Duration> {
    match budget_ms {
        None => Some(DEFAULT_STEP_BUDGET),
        Some(ms) if ms.is_nan() => Some(DEFAULT_STEP_BUDGET),
        Some(ms) => Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).ok(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptimizeConfig {
    /// Wall-clock budget for each step call. None = batch mode (no budget).
    pub step_budget: Option<Duration>,
    /// Stop after this many step calls even if the search is not complete.
    pub max_steps: Option<usize>,
}

impl OptimizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incremental mode with the given per-step budget.
    pub fn incremental(step_budget: Duration) -> Self {
        Self {
            step_budget: Some(step_budget),
            max_steps: None,
        }
    }

    pub fn is_batch(&self) -> bool {
        self.step_budget.is_none()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
