//! Summary statistics for the orders dashboard

use super::pricing::PriceTier;
use crate::contract::model::{Order, OrderStatus};

/// Aggregates shown on the dashboard stat cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStats {
    pub total_orders: usize,
    /// Sum of all order prices, in whole rupees
    pub total_revenue: i64,
    /// Tier of the revenue sum, for color coding
    pub revenue_tier: PriceTier,
    pub pending: usize,
    pub completed: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let total_revenue = orders.iter().map(|o| o.price).sum();
        Self {
            total_orders: orders.len(),
            total_revenue,
            revenue_tier: PriceTier::classify(total_revenue),
            pending: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            completed: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Completed)
                .count(),
        }
    }
}
