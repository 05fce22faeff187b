//! WASM bindings for radial-order.
//!
//! `optimizeOrder` runs batch mode; `RadialOptimizer` exposes the stepwise
//! search for one-step-per-frame animation.

use wasm_bindgen::prelude::*;

use crate::config::step_budget_from_millis;
use crate::radial::{self, Clock, OptimizationState};
use crate::{OptimizeConfig, parse_pages};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// `Instant` is unavailable on wasm32-unknown-unknown; use `Date.now()`.
struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        date_now()
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Optimize a JSON page list to convergence and return the annotated order.
#[wasm_bindgen(js_name = "optimizeOrder")]
pub fn optimize_order(json: &str) -> Result<String, JsError> {
    crate::optimize_json(json, &OptimizeConfig::default()).map_err(to_js_error)
}

/// Stepwise optimizer owned by one JavaScript caller.
#[wasm_bindgen]
pub struct RadialOptimizer {
    state: OptimizationState,
}

#[wasm_bindgen]
impl RadialOptimizer {
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<RadialOptimizer, JsError> {
        let pages = parse_pages(json).map_err(to_js_error)?;
        Ok(Self {
            state: OptimizationState::new(pages),
        })
    }

    /// Run one budgeted step. Returns `{ improved, newOrder, complete }`
    /// where `newOrder` has the same shape as [`RadialOptimizer::order`],
    /// or is null.
    ///
    /// An omitted or NaN budget uses the default step budget; `Infinity`
    /// runs without a budget.
    pub fn step(&mut self, budget_ms: Option<f64>) -> Result<String, JsError> {
        let budget = step_budget_from_millis(budget_ms);
        let outcome = radial::step_with_clock(&mut self.state, budget, &JsClock);
        let new_order = outcome.annotated_order();
        let value = serde_json::json!({
            "improved": outcome.improved,
            "newOrder": new_order,
            "complete": outcome.complete,
        });
        Ok(value.to_string())
    }

    #[wasm_bindgen(js_name = "isComplete")]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    /// Current order annotated with `displayOrder`.
    pub fn order(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.state.display_order()).map_err(to_js_error)
    }

    pub fn crossings(&self) -> usize {
        self.state.score().crossings
    }

    #[wasm_bindgen(js_name = "averageDistance")]
    pub fn average_distance(&self) -> f64 {
        self.state.score().avg_distance
    }
}
