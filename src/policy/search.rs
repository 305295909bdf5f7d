// src/policy/search.rs

use rayon::prelude::*;
use serde::Serialize;

use crate::policy::SsPolicy;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{simulate_single_echelon, SimulationResult};

/// Candidate grid for the exhaustive (s, S) search.
///
/// Order-up-to candidates are expressed as offsets above each reorder
/// point, so `S = s + offset`. Non-positive offsets would yield
/// `S <= s` and are skipped rather than treated as failures.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    pub s_values: Vec<i64>,
    pub s_offsets: Vec<i64>,
    /// Minimum acceptable fill rate for the feasible table.
    pub target_fill_rate: f64,
}

impl Default for SearchGrid {
    fn default() -> Self {
        Self {
            s_values: (80..=400).step_by(20).collect(),
            s_offsets: (40..=400).step_by(20).collect(),
            target_fill_rate: 0.95,
        }
    }
}

/// One evaluated candidate, flattened for ranking and CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct PolicySummary {
    #[serde(rename = "s")]
    pub reorder_point: i64,
    #[serde(rename = "S")]
    pub order_up_to: i64,
    pub fill_rate: f64,
    pub holding_cost: f64,
    pub backorder_cost: f64,
    pub ordering_cost: f64,
    pub total_cost: f64,
}

impl From<&SimulationResult> for PolicySummary {
    fn from(result: &SimulationResult) -> Self {
        Self {
            reorder_point: result.reorder_point,
            order_up_to: result.order_up_to,
            fill_rate: result.fill_rate,
            holding_cost: result.holding_cost,
            backorder_cost: result.backorder_cost,
            ordering_cost: result.ordering_cost,
            total_cost: result.total_cost,
        }
    }
}

/// Everything a search produced: all evaluated candidates ranked by
/// total cost, plus the subset meeting the service target.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub all: Vec<PolicySummary>,
    pub feasible: Vec<PolicySummary>,
}

impl SearchOutcome {
    /// The cheapest candidate meeting the fill-rate target, if any.
    pub fn recommended(&self) -> Option<&PolicySummary> {
        self.feasible.first()
    }
}

/// Evaluates every (s, S) candidate on the grid against the scenario in
/// `base` (its own s and S are ignored) and ranks the outcomes.
///
/// Every candidate runs with the same seed, so each evaluation is an
/// independent pure function of its parameters. That makes the grid an
/// embarrassingly parallel workload, handed to rayon as-is.
pub fn grid_search(grid: &SearchGrid, base: &SimulationConfig) -> SearchOutcome {
    let candidates: Vec<SsPolicy> = grid
        .s_values
        .iter()
        .flat_map(|&s| {
            grid.s_offsets
                .iter()
                .map(move |&offset| SsPolicy::new(s, s + offset))
        })
        .filter(|policy| policy.order_up_to > policy.reorder_point)
        .collect();

    tracing::info!(
        candidates = candidates.len(),
        target_fill_rate = grid.target_fill_rate,
        "starting policy grid search"
    );

    let mut all: Vec<PolicySummary> = candidates
        .par_iter()
        .filter_map(|policy| {
            let config = SimulationConfig {
                reorder_point: policy.reorder_point,
                order_up_to: policy.order_up_to,
                ..base.clone()
            };
            match simulate_single_echelon(&config) {
                Ok(result) => Some(PolicySummary::from(&result)),
                Err(err) => {
                    tracing::debug!(
                        s = policy.reorder_point,
                        order_up_to = policy.order_up_to,
                        %err,
                        "skipping invalid candidate"
                    );
                    None
                }
            }
        })
        .collect();

    all.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));

    let feasible: Vec<PolicySummary> = all
        .iter()
        .filter(|row| row.fill_rate >= grid.target_fill_rate)
        .cloned()
        .collect();

    tracing::info!(
        evaluated = all.len(),
        feasible = feasible.len(),
        "policy grid search finished"
    );

    SearchOutcome { all, feasible }
}
