//! Local search driver: first-improvement search with restart over the
//! move space, resumable one step at a time.
//!
//! Batch mode calls [`step`] with no budget until the state is complete.
//! Incremental mode calls it once per external tick with a small budget.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::metrics::Score;
use super::moves::SearchCursor;
use crate::config::OptimizeConfig;
use crate::page::{PageData, RankedPage, annotate_display_order};

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Monotonic wall clock in milliseconds from an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// [`Clock`] backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

// ─── OptimizationState ───────────────────────────────────────────────────────

/// Resumable search state. Owned by one caller and passed to every step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationState {
    pub order: Vec<PageData>,
    #[serde(flatten)]
    pub cursor: SearchCursor,
    pub is_complete: bool,
    /// `floor(n / 2)`, fixed at creation.
    pub max_segment_size: usize,
}

impl OptimizationState {
    /// Fresh state at the top of the first epoch. Orders with fewer than two
    /// pages have no moves and start complete.
    pub fn new(order: Vec<PageData>) -> Self {
        let max_segment_size = order.len() / 2;
        Self {
            cursor: SearchCursor::epoch_start(max_segment_size),
            is_complete: order.len() < 2,
            max_segment_size,
            order,
        }
    }

    pub fn score(&self) -> Score {
        Score::of(&self.order)
    }

    pub fn display_order(&self) -> Vec<RankedPage> {
        annotate_display_order(&self.order)
    }

    fn finish(&mut self) {
        self.is_complete = true;
    }
}

// ─── StepOutcome ─────────────────────────────────────────────────────────────

/// Result of one step call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    pub improved: bool,
    /// The adopted order when `improved` is true.
    pub new_order: Option<Vec<PageData>>,
    pub complete: bool,
}

impl StepOutcome {
    /// The adopted order tagged with `display_order`, as handed to renderers.
    pub fn annotated_order(&self) -> Option<Vec<RankedPage>> {
        self.new_order.as_deref().map(annotate_display_order)
    }

    fn finished() -> Self {
        Self {
            improved: false,
            new_order: None,
            complete: true,
        }
    }
}

// ─── Step ────────────────────────────────────────────────────────────────────

/// Advance the search until one improving move is adopted, the move space is
/// exhausted, or `budget` runs out. `None` means no budget.
pub fn step(state: &mut OptimizationState, budget: Option<Duration>) -> StepOutcome {
    step_with_clock(state, budget, &SystemClock::new())
}

/// [`step`] with an explicit time source.
///
/// Running out of budget without an improvement completes the search, so a
/// slow first epoch is never retried by later calls. At least one candidate
/// is evaluated per call.
pub fn step_with_clock<C: Clock + ?Sized>(
    state: &mut OptimizationState,
    budget: Option<Duration>,
    clock: &C,
) -> StepOutcome {
    if state.is_complete {
        return StepOutcome::finished();
    }
    let n = state.order.len();
    if n < 2 {
        state.finish();
        return StepOutcome::finished();
    }

    let limit_ms = budget.map(|b| b.as_secs_f64() * 1000.0);
    let started = clock.now_ms();
    let current = state.score();
    let mut evaluated = 0usize;

    loop {
        if state.cursor.is_exhausted() {
            debug!(
                crossings = current.crossings,
                avg_distance = current.avg_distance,
                "move space exhausted, search complete"
            );
            state.finish();
            return StepOutcome::finished();
        }

        let mv = state.cursor.current();
        if mv.kind(n).is_some() {
            evaluated += 1;
            let candidate = mv.apply(&state.order);
            let score = Score::of(&candidate);
            if score.improves_on(&current) {
                debug!(
                    segment_size = mv.segment_size,
                    src_idx = mv.src_idx,
                    dest_idx = mv.dest_idx,
                    reversed = mv.reversed,
                    crossings = score.crossings,
                    avg_distance = score.avg_distance,
                    evaluated,
                    "accepted move"
                );
                state.order = candidate;
                state.cursor = SearchCursor::epoch_start(state.max_segment_size);
                return StepOutcome {
                    improved: true,
                    new_order: Some(state.order.clone()),
                    complete: false,
                };
            }
        }

        state.cursor.advance(n);

        if evaluated == 0 {
            continue;
        }
        if let Some(limit) = limit_ms {
            let elapsed = clock.now_ms() - started;
            if elapsed > limit {
                trace!(elapsed_ms = elapsed, evaluated, "step budget exhausted");
                debug!(
                    crossings = current.crossings,
                    avg_distance = current.avg_distance,
                    "no improvement within budget, search complete"
                );
                state.finish();
                return StepOutcome::finished();
            }
        }
    }
}

// ─── Drivers ─────────────────────────────────────────────────────────────────

/// Totals for a driven run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub improvements: usize,
}

/// Drive `state` per `config`: unlimited steps in batch mode, budgeted steps
/// in incremental mode, stopping early at `max_steps`.
pub fn run(state: &mut OptimizationState, config: &OptimizeConfig) -> RunSummary {
    let mut summary = RunSummary::default();
    while !state.is_complete {
        if config.max_steps.is_some_and(|max| summary.steps >= max) {
            break;
        }
        let outcome = step(state, config.step_budget);
        summary.steps += 1;
        if outcome.improved {
            summary.improvements += 1;
        }
    }
    debug!(
        steps = summary.steps,
        improvements = summary.improvements,
        complete = state.is_complete,
        "run finished"
    );
    summary
}

/// Batch mode: search from `pages` to convergence and return the final order.
pub fn optimize(pages: &[PageData]) -> Vec<PageData> {
    let mut state = OptimizationState::new(pages.to_vec());
    run(&mut state, &OptimizeConfig::default());
    state.order
}

#[cfg(test)]
#[path = "../../tests/rust/test_radial_search.rs"]
mod tests;
