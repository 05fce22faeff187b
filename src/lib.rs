//! radial-order — crossing-minimizing circular ordering of linked pages.
//!
//! Public API: `optimize_json()` plus the `radial` engine modules.
//! Pages are placed on equally spaced circle positions; the search permutes
//! them to reduce crossing links, then shortens average link length.

pub mod config;
pub mod error;
pub mod page;
pub mod radial;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::{DEFAULT_STEP_BUDGET, OptimizeConfig};
pub use crate::error::{Error, Result};
pub use crate::page::{PageData, RankedPage, annotate_display_order, parse_pages};
pub use crate::radial::{OptimizationState, Score, StepOutcome, optimize, step};

/// Parse a JSON page list, optimize its circular order, and return the
/// annotated order as pretty-printed JSON.
///
/// This is the build-step entry point: run it once and ship the output.
pub fn optimize_json(src: &str, config: &OptimizeConfig) -> Result<String> {
    let pages = parse_pages(src)?;
    let mut state = OptimizationState::new(pages);
    radial::run(&mut state, config);
    let ranked = state.display_order();
    Ok(serde_json::to_string_pretty(&ranked)?)
}
