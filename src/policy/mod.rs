// src/policy/mod.rs

pub mod search;

/// Periodic-review reorder-point / order-up-to policy.
///
/// Reviewed once per simulated day: when the inventory position has
/// fallen to or below `reorder_point` (s), order enough to bring the
/// position back up to `order_up_to` (S). Above the reorder point the
/// review does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsPolicy {
    pub reorder_point: i64,
    pub order_up_to: i64,
}

impl SsPolicy {
    pub fn new(reorder_point: i64, order_up_to: i64) -> Self {
        Self {
            reorder_point,
            order_up_to,
        }
    }

    /// Today's reorder decision for the given inventory position.
    ///
    /// Returns the order quantity when the position has reached the
    /// reorder point, `None` otherwise. The quantity is clamped at
    /// zero, and a zero-quantity order is a no-op downstream.
    pub fn review(&self, inventory_position: i64) -> Option<u32> {
        if inventory_position > self.reorder_point {
            return None;
        }
        let gap = self.order_up_to - inventory_position;
        Some(gap.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_order_above_the_reorder_point() {
        let policy = SsPolicy::new(150, 350);
        assert_eq!(policy.review(151), None);
        assert_eq!(policy.review(350), None);
    }

    #[test]
    fn orders_up_to_the_target_at_the_reorder_point() {
        let policy = SsPolicy::new(150, 350);
        assert_eq!(policy.review(150), Some(200));
    }

    #[test]
    fn negative_positions_order_past_the_target_gap() {
        let policy = SsPolicy::new(150, 350);
        assert_eq!(policy.review(-30), Some(380));
    }

    #[test]
    fn order_quantity_never_goes_negative() {
        // Unreachable under a validated S > s, but the clamp holds
        // regardless of how the policy is constructed.
        let policy = SsPolicy::new(10, 5);
        assert_eq!(policy.review(8), Some(0));
    }
}
