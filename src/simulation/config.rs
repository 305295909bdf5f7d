// src/simulation/config.rs

use thiserror::Error;

use crate::policy::SsPolicy;

/// A rejected scenario. Raised synchronously, before the first
/// simulated day; a grid search treats these as candidates to skip
/// rather than failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("order-up-to level {order_up_to} must exceed reorder point {reorder_point}")]
    PolicyNotIncreasing {
        reorder_point: i64,
        order_up_to: i64,
    },
    #[error("horizon_days must be at least 1")]
    EmptyHorizon,
    #[error("warmup_days ({warmup_days}) must be shorter than horizon_days ({horizon_days})")]
    WarmupTooLong { warmup_days: u32, horizon_days: u32 },
    #[error("demand_mean_per_day must be positive, got {0}")]
    NonPositiveDemandMean(f64),
    #[error("leadtime_mean must be positive, got {0}")]
    NonPositiveLeadTimeMean(f64),
    #[error("leadtime_cv must be non-negative, got {0}")]
    NegativeLeadTimeCv(f64),
    #[error("{name} must be non-negative, got {value}")]
    NegativeCost { name: &'static str, value: f64 },
}

/// Scenario parameters for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Reorder point (s): review triggers when the inventory position
    /// falls to or below this.
    pub reorder_point: i64,
    /// Order-up-to level (S): each order restores the position to this.
    pub order_up_to: i64,
    pub horizon_days: u32,
    /// Leading days excluded from reported holding/backorder cost and
    /// fill rate, to keep transient start-up state out of the metrics.
    pub warmup_days: u32,
    pub demand_mean_per_day: f64,
    pub leadtime_mean: f64,
    pub leadtime_cv: f64,
    /// Cost per unit on hand per day.
    pub holding_cost_rate: f64,
    /// Cost per backordered unit per day.
    pub backorder_cost_rate: f64,
    pub order_fixed_cost: f64,
    pub order_unit_cost: f64,
    /// Opening stock; defaults to the order-up-to level when unset.
    pub initial_inventory: Option<u32>,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reorder_point: 150,
            order_up_to: 350,
            horizon_days: 365,
            warmup_days: 60,
            demand_mean_per_day: 30.0,
            leadtime_mean: 7.0,
            leadtime_cv: 0.4,
            holding_cost_rate: 0.02,
            backorder_cost_rate: 0.50,
            order_fixed_cost: 50.0,
            order_unit_cost: 0.0,
            initial_inventory: None,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter constraint up front. No partial run is
    /// ever attempted on an invalid scenario.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_up_to <= self.reorder_point {
            return Err(ConfigError::PolicyNotIncreasing {
                reorder_point: self.reorder_point,
                order_up_to: self.order_up_to,
            });
        }
        if self.horizon_days == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        if self.warmup_days >= self.horizon_days {
            return Err(ConfigError::WarmupTooLong {
                warmup_days: self.warmup_days,
                horizon_days: self.horizon_days,
            });
        }
        if self.demand_mean_per_day <= 0.0 {
            return Err(ConfigError::NonPositiveDemandMean(self.demand_mean_per_day));
        }
        if self.leadtime_mean <= 0.0 {
            return Err(ConfigError::NonPositiveLeadTimeMean(self.leadtime_mean));
        }
        if self.leadtime_cv < 0.0 {
            return Err(ConfigError::NegativeLeadTimeCv(self.leadtime_cv));
        }

        let cost_rates = [
            ("holding_cost_rate", self.holding_cost_rate),
            ("backorder_cost_rate", self.backorder_cost_rate),
            ("order_fixed_cost", self.order_fixed_cost),
            ("order_unit_cost", self.order_unit_cost),
        ];
        for (name, value) in cost_rates {
            if value < 0.0 {
                return Err(ConfigError::NegativeCost { name, value });
            }
        }

        Ok(())
    }

    pub fn policy(&self) -> SsPolicy {
        SsPolicy::new(self.reorder_point, self.order_up_to)
    }

    /// The system starts fully stocked at the order-up-to level unless
    /// an explicit opening inventory was given.
    pub fn opening_inventory(&self) -> u32 {
        self.initial_inventory
            .unwrap_or_else(|| self.order_up_to.max(0) as u32)
    }
}
