// src/simulation/engine.rs

use crate::model::deliveries::DeliverySchedule;
use crate::model::state::{DaySnapshot, InventoryState};
use crate::policy::SsPolicy;
use crate::sampling::Sampler;
use crate::simulation::config::{ConfigError, SimulationConfig};

/// Immutable summary of one completed run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub reorder_point: i64,
    pub order_up_to: i64,
    /// Fraction of post-warm-up demand filled from stock on the day it
    /// arrived. Defined as 0.0 when no demand fell after the warm-up.
    pub fill_rate: f64,
    pub holding_cost: f64,
    pub backorder_cost: f64,
    pub ordering_cost: f64,
    pub total_cost: f64,
    /// Days contributing to reported metrics (horizon minus warm-up).
    pub effective_horizon_days: u32,
    pub history: Vec<DaySnapshot>,
}

/// The day-stepping driver for a single-echelon run.
///
/// Owns the run's whole world: the inventory record, the pending
/// deliveries, the policy, and the seeded sampler. Strictly sequential;
/// one simulated day at a time. Parallelism belongs one level up, across
/// independent runs.
pub struct EchelonSimulation {
    config: SimulationConfig,
    policy: SsPolicy,
    sampler: Sampler,
    state: InventoryState,
    deliveries: DeliverySchedule,
    current_day: u32,
}

impl EchelonSimulation {
    /// Builds a run from a validated configuration. Fails fast on any
    /// invalid parameter; nothing is simulated for a bad scenario.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = Sampler::new(
            config.demand_mean_per_day,
            config.leadtime_mean,
            config.leadtime_cv,
            config.seed,
        );
        let state = InventoryState::new(config.opening_inventory());
        let policy = config.policy();

        Ok(Self {
            config,
            policy,
            sampler,
            state,
            deliveries: DeliverySchedule::new(),
            current_day: 0,
        })
    }

    /// Advances the clock one day at a time through the whole horizon,
    /// then folds the history into a result.
    pub fn run(mut self) -> SimulationResult {
        while self.current_day < self.config.horizon_days {
            self.step();
        }
        self.finalize()
    }

    fn step(&mut self) {
        self.current_day += 1;
        let day = self.current_day;

        // Arrivals land first: every delivery due today is applied
        // before demand is realized, so the reorder review later in the
        // day already sees the replenished pipeline.
        while let Some(delivery) = self.deliveries.next_due(day) {
            self.state.receive_delivery(delivery.quantity);
        }

        // Demand realization and fulfillment.
        let demand = self.sampler.sample_demand();
        let filled = self.state.apply_demand(demand);

        // One reorder review per day, on the position as it stands
        // after today's arrivals and fulfillment.
        if let Some(quantity) = self.policy.review(self.state.inventory_position()) {
            self.place_order(quantity);
        }

        // Holding and backorder cost only accrue once the warm-up
        // window has passed. Ordering cost is the exception: it was
        // already charged at placement, warm-up or not.
        if day >= self.config.warmup_days {
            self.state
                .accrue_daily_costs(self.config.holding_cost_rate, self.config.backorder_cost_rate);
        }

        self.state.record_day(day, demand, filled);
    }

    /// Books an order and schedules its delivery after a sampled lead
    /// time. Zero-quantity orders are a no-op: no cost, no event.
    fn place_order(&mut self, quantity: u32) {
        if quantity == 0 {
            return;
        }

        self.state.book_order(
            quantity,
            self.config.order_fixed_cost,
            self.config.order_unit_cost,
        );
        let lead_time = self.sampler.sample_lead_time();
        self.deliveries
            .schedule(self.current_day + lead_time, quantity);

        tracing::trace!(
            day = self.current_day,
            quantity,
            lead_time,
            outstanding = self.deliveries.outstanding(),
            "order placed"
        );
    }

    fn finalize(self) -> SimulationResult {
        let warmup_days = self.config.warmup_days;

        // The reporting window covers days strictly after the warm-up
        // boundary. Note the one-day offset against cost accrual, which
        // starts at the boundary day itself; both windows are kept
        // exactly as the accounting defines them.
        let mut demand_after_warmup: u64 = 0;
        let mut filled_after_warmup: u64 = 0;
        for snapshot in &self.state.history {
            if snapshot.day > warmup_days {
                demand_after_warmup += snapshot.demand as u64;
                filled_after_warmup += snapshot.filled as u64;
            }
        }

        let fill_rate = if demand_after_warmup == 0 {
            0.0
        } else {
            filled_after_warmup as f64 / demand_after_warmup as f64
        };

        let total_cost =
            self.state.cost_holding + self.state.cost_backorder + self.state.cost_ordering;

        SimulationResult {
            reorder_point: self.policy.reorder_point,
            order_up_to: self.policy.order_up_to,
            fill_rate,
            holding_cost: self.state.cost_holding,
            backorder_cost: self.state.cost_backorder,
            ordering_cost: self.state.cost_ordering,
            total_cost,
            effective_horizon_days: self.config.horizon_days - warmup_days,
            history: self.state.history,
        }
    }
}

/// Runs one scenario end to end. The single entry point used by the
/// policy search and by any presentation layer on top.
pub fn simulate_single_echelon(config: &SimulationConfig) -> Result<SimulationResult, ConfigError> {
    Ok(EchelonSimulation::new(config.clone())?.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_give_bit_identical_runs() {
        let config = SimulationConfig::default();
        let first = simulate_single_echelon(&config).unwrap();
        let second = simulate_single_echelon(&config).unwrap();

        assert_eq!(first.history, second.history);
        assert_eq!(first.fill_rate, second.fill_rate);
        assert_eq!(first.holding_cost, second.holding_cost);
        assert_eq!(first.backorder_cost, second.backorder_cost);
        assert_eq!(first.ordering_cost, second.ordering_cost);
        assert_eq!(first.total_cost, second.total_cost);
    }

    #[test]
    fn history_covers_every_day_in_order() {
        let result = simulate_single_echelon(&SimulationConfig::default()).unwrap();

        assert_eq!(result.history.len(), 365);
        for (i, snapshot) in result.history.iter().enumerate() {
            assert_eq!(snapshot.day, i as u32 + 1);
        }
        assert_eq!(result.effective_horizon_days, 305);
    }

    #[test]
    fn stock_and_backorders_are_never_simultaneously_positive() {
        let result = simulate_single_echelon(&SimulationConfig::default()).unwrap();

        for snapshot in &result.history {
            assert!(
                snapshot.on_hand == 0 || snapshot.backorders == 0,
                "day {}: on_hand {} with backorders {}",
                snapshot.day,
                snapshot.on_hand,
                snapshot.backorders
            );
        }
    }

    #[test]
    fn position_at_rest_always_sits_above_the_reorder_point() {
        // Reaching the reorder point triggers an order up to S the same
        // day, so no end-of-day snapshot can show a position at or
        // below s.
        let config = SimulationConfig::default();
        let result = simulate_single_echelon(&config).unwrap();

        for snapshot in &result.history {
            assert!(
                snapshot.inventory_position > config.reorder_point,
                "day {}: position {} at rest",
                snapshot.day,
                snapshot.inventory_position
            );
        }
    }

    #[test]
    fn first_day_review_orders_up_to_the_target() {
        // Starting empty, day one's review fires no matter what demand
        // was drawn, and the position lands exactly on S.
        let config = SimulationConfig {
            reorder_point: 10,
            order_up_to: 25,
            initial_inventory: Some(0),
            ..SimulationConfig::default()
        };
        let result = simulate_single_echelon(&config).unwrap();

        let first = &result.history[0];
        assert_eq!(first.inventory_position, 25);
        assert_eq!(first.pipeline_qty, 25 + first.backorders);
    }

    #[test]
    fn fill_rate_stays_within_bounds() {
        let result = simulate_single_echelon(&SimulationConfig::default()).unwrap();
        assert!((0.0..=1.0).contains(&result.fill_rate));
    }

    #[test]
    fn filled_never_exceeds_demand() {
        let result = simulate_single_echelon(&SimulationConfig::default()).unwrap();

        let mut demand: u64 = 0;
        let mut filled: u64 = 0;
        for snapshot in &result.history {
            assert!(snapshot.filled <= snapshot.demand);
            demand += snapshot.demand as u64;
            filled += snapshot.filled as u64;
        }
        assert!(filled <= demand);
    }

    #[test]
    fn warmup_gates_holding_but_not_ordering_cost() {
        // The trajectory is a pure function of the seed, so changing
        // only the warm-up length leaves history untouched and shrinks
        // just the warm-up-gated accumulators.
        let gated = SimulationConfig::default();
        let ungated = SimulationConfig {
            warmup_days: 0,
            ..SimulationConfig::default()
        };

        let with_warmup = simulate_single_echelon(&gated).unwrap();
        let without_warmup = simulate_single_echelon(&ungated).unwrap();

        assert_eq!(with_warmup.history, without_warmup.history);
        assert_eq!(with_warmup.ordering_cost, without_warmup.ordering_cost);
        assert!(with_warmup.holding_cost <= without_warmup.holding_cost);
        assert!(with_warmup.backorder_cost <= without_warmup.backorder_cost);
    }

    #[test]
    fn total_cost_is_the_sum_of_the_breakdown() {
        let result = simulate_single_echelon(&SimulationConfig::default()).unwrap();
        let sum = result.holding_cost + result.backorder_cost + result.ordering_cost;
        assert!((result.total_cost - sum).abs() < 1e-9);
    }

    #[test]
    fn constant_lead_time_delivers_on_schedule() {
        // cv = 0 pins every lead time at exactly 7 days. With light
        // demand against a large order, the day-1 order is the only one
        // in flight for the first week: it must sit in the pipeline
        // through day 7 and land on day 8, clearing every backorder.
        let config = SimulationConfig {
            reorder_point: 10,
            order_up_to: 100,
            initial_inventory: Some(0),
            demand_mean_per_day: 2.0,
            leadtime_cv: 0.0,
            ..SimulationConfig::default()
        };
        let result = simulate_single_echelon(&config).unwrap();

        let day7 = &result.history[6];
        let day8 = &result.history[7];
        assert!(day7.pipeline_qty >= 100);
        assert_eq!(day7.on_hand, 0);
        assert_eq!(day8.pipeline_qty, 0);
        assert_eq!(day8.backorders, 0);
        assert!(day8.on_hand > 0);
    }

    #[test]
    fn invalid_scenarios_never_start() {
        let config = SimulationConfig {
            reorder_point: 200,
            order_up_to: 100,
            ..SimulationConfig::default()
        };
        assert!(simulate_single_echelon(&config).is_err());
    }
}
