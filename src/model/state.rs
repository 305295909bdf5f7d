use serde::Serialize;

/// One day's observation of the system, recorded after that day's
/// deliveries, demand, and reorder decision have all been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub on_hand: u32,
    pub backorders: u32,
    pub pipeline_qty: u32,
    pub demand: u32,
    pub filled: u32,
    pub inventory_position: i64,
}

/// The mutable inventory record for one simulation run.
///
/// `on_hand`, `backorders`, and `pipeline_qty` are the three base
/// fields; the inventory position is always derived from them, never
/// stored, so the reorder decision can never act on a stale cache.
pub struct InventoryState {
    pub on_hand: u32,
    pub backorders: u32,
    pub pipeline_qty: u32,

    // Cumulative service counters.
    pub total_demand: u64,
    pub total_filled: u64,

    // Cost accumulators. Holding and backorder cost are only accrued
    // once the warm-up window has passed; ordering cost is charged at
    // placement for the whole run.
    pub cost_holding: f64,
    pub cost_backorder: f64,
    pub cost_ordering: f64,

    /// Append-only, one entry per simulated day, in day order.
    pub history: Vec<DaySnapshot>,
}

impl InventoryState {
    pub fn new(initial_inventory: u32) -> Self {
        Self {
            on_hand: initial_inventory,
            backorders: 0,
            pipeline_qty: 0,
            total_demand: 0,
            total_filled: 0,
            cost_holding: 0.0,
            cost_backorder: 0.0,
            cost_ordering: 0.0,
            history: Vec::new(),
        }
    }

    /// On-hand plus pipeline minus backorders. Signed: a system deep in
    /// backorder territory has a negative position.
    pub fn inventory_position(&self) -> i64 {
        self.on_hand as i64 + self.pipeline_qty as i64 - self.backorders as i64
    }

    /// Books a placed order: the quantity enters the pipeline and the
    /// ordering cost is charged immediately, at order time rather than
    /// delivery time.
    pub fn book_order(&mut self, quantity: u32, fixed_cost: f64, unit_cost: f64) {
        self.pipeline_qty += quantity;
        self.cost_ordering += fixed_cost + unit_cost * quantity as f64;
    }

    /// Applies an arrived delivery: the quantity leaves the pipeline,
    /// pays down outstanding backorders first, and only the remainder
    /// reaches the shelf. Backorder relief does not count as filled
    /// demand.
    pub fn receive_delivery(&mut self, quantity: u32) {
        if self.pipeline_qty >= quantity {
            self.pipeline_qty -= quantity;
        } else {
            self.pipeline_qty = 0;
        }

        let relieved = quantity.min(self.backorders);
        self.backorders -= relieved;
        self.on_hand += quantity - relieved;
    }

    /// Realizes one day of demand: fill what on-hand stock allows, carry
    /// the shortfall forward as backorders.
    ///
    /// Returns the quantity filled.
    pub fn apply_demand(&mut self, demand: u32) -> u32 {
        self.total_demand += demand as u64;

        let filled = demand.min(self.on_hand);
        self.on_hand -= filled;
        self.backorders += demand - filled;
        self.total_filled += filled as u64;
        filled
    }

    /// Accrues one day of holding and backorder cost at end-of-day
    /// stock levels.
    pub fn accrue_daily_costs(&mut self, holding_rate: f64, backorder_rate: f64) {
        self.cost_holding += self.on_hand as f64 * holding_rate;
        self.cost_backorder += self.backorders as f64 * backorder_rate;
    }

    pub fn record_day(&mut self, day: u32, demand: u32, filled: u32) {
        self.history.push(DaySnapshot {
            day,
            on_hand: self.on_hand,
            backorders: self.backorders,
            pipeline_qty: self.pipeline_qty,
            demand,
            filled,
            inventory_position: self.inventory_position(),
        });
    }
}
