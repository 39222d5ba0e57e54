//! Order-level totals.

use crate::calc;
use crate::config::G_PER_KG;
use crate::model::{Order, OrderItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sum of line weights in grams under the given order coefficient.
pub fn total_weight_g(items: &[OrderItem], coefficient: f64) -> f64 {
    items
        .iter()
        .map(|item| calc::total_weight_g(item, coefficient))
        .sum()
}

/// Sum of line quantities.
pub fn total_items_count(items: &[OrderItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Number of distinct linked materials; lines without a material are not counted.
pub fn materials_count(items: &[OrderItem]) -> usize {
    items
        .iter()
        .filter_map(|item| item.material_id())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Aggregates shown in the order header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Total mass in grams.
    pub total_weight_g: f64,
    /// Total mass in kilograms.
    pub total_weight_kg: f64,
    /// Number of parts over all lines.
    pub total_items_count: u64,
    /// Number of distinct materials.
    pub materials_count: usize,
}

impl OrderTotals {
    /// Compute the totals of an order.
    pub fn compute(order: &Order) -> Self {
        let total_weight_g = total_weight_g(&order.items, order.coefficient);
        Self {
            total_weight_g,
            total_weight_kg: total_weight_g / G_PER_KG,
            total_items_count: total_items_count(&order.items),
            materials_count: materials_count(&order.items),
        }
    }
}
