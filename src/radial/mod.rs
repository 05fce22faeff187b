//! Radial ordering engine: metrics, moves, and the local search driver.

pub mod metrics;
pub mod moves;
pub mod search;

pub use metrics::{IndexMap, Score, average_link_distance, build_index_map, count_crossings};
pub use moves::{Move, MoveKind, SearchCursor};
pub use search::{
    Clock, OptimizationState, RunSummary, StepOutcome, SystemClock, optimize, run, step,
    step_with_clock,
};
