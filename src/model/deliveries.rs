// src/model/deliveries.rs

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A replenishment order in transit: `quantity` units due on
/// `arrival_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelivery {
    pub arrival_day: u32,
    pub quantity: u32,
}

impl Ord for PendingDelivery {
    fn cmp(&self, other: &Self) -> Ordering {
        // Same-day arrivals commute, so the quantity tiebreak only
        // exists to make the ordering total.
        self.arrival_day
            .cmp(&other.arrival_day)
            .then(self.quantity.cmp(&other.quantity))
    }
}

impl PartialOrd for PendingDelivery {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outstanding deliveries, keyed by arrival day.
///
/// A min-heap of pending arrivals stands in for per-order timers: the
/// driver drains everything due at the top of each daily step, so all
/// arrivals for a day land together before demand is realized.
#[derive(Debug, Default)]
pub struct DeliverySchedule {
    pending: BinaryHeap<Reverse<PendingDelivery>>,
}

impl DeliverySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, arrival_day: u32, quantity: u32) {
        self.pending.push(Reverse(PendingDelivery {
            arrival_day,
            quantity,
        }));
    }

    /// Removes and returns the earliest pending delivery due on or
    /// before `day`, or `None` once nothing else is due.
    pub fn next_due(&mut self, day: u32) -> Option<PendingDelivery> {
        match self.pending.peek() {
            Some(Reverse(delivery)) if delivery.arrival_day <= day => {
                self.pending.pop().map(|Reverse(delivery)| delivery)
            }
            _ => None,
        }
    }

    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }
}
