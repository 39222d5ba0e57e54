//! Grouped report by material and stock item.

use super::sequence::{sort_items, SequenceKey};
use crate::calc;
use crate::config::G_PER_KG;
use crate::model::{Material, Order, OrderItem, StockItem};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Identity of a report group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupKey {
    /// Regular lines sharing material and stock item.
    Stock { material_id: i32, stock_item_id: i32 },
    /// A single special line, never merged with anything else.
    Special { item_id: i32 },
}

/// Lines of one material/stock combination, or one special line.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialStockGroup<'a> {
    pub key: GroupKey,
    /// Material of the group's representative line.
    pub material: Option<&'a Material>,
    /// Stock item of the group's representative line.
    pub stock_item: Option<&'a StockItem>,
    /// Sum of line weights in grams.
    pub total_weight_g: f64,
    /// Sum of line quantities.
    pub quantity: u64,
    /// Single-part weight in grams, taken from the first line of the group.
    ///
    /// Lines are grouped by material and stock item only, so a group may mix
    /// parts of different lengths; this value then describes the first one.
    pub weight_per_item_g: f64,
    /// Lines of the group in sequence order.
    pub items: Vec<&'a OrderItem>,
}

impl<'a> MaterialStockGroup<'a> {
    fn start(key: GroupKey, item: &'a OrderItem) -> Self {
        Self {
            key,
            material: item.material.as_ref(),
            stock_item: item.stock_item.as_ref(),
            total_weight_g: 0.0,
            quantity: 0,
            weight_per_item_g: calc::weight_g(item),
            items: Vec::new(),
        }
    }

    fn add(&mut self, item: &'a OrderItem, coefficient: f64) {
        self.total_weight_g += calc::total_weight_g(item, coefficient);
        self.quantity += u64::from(item.quantity);
        self.items.push(item);
    }

    /// Whether this group is a single special line.
    pub fn is_special(&self) -> bool {
        matches!(self.key, GroupKey::Special { .. })
    }

    /// Total weight in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_g / G_PER_KG
    }

    /// Single-part weight in kilograms.
    pub fn weight_per_item_kg(&self) -> f64 {
        self.weight_per_item_g / G_PER_KG
    }

    fn cmp_report_order(&self, other: &Self) -> Ordering {
        let material_name = |g: &Self| g.material.map(|m| m.name.as_str());
        let kind_rank = |g: &Self| u8::from(g.is_special());

        self.material
            .is_none()
            .cmp(&other.material.is_none())
            .then_with(|| material_name(self).cmp(&material_name(other)))
            .then_with(|| self.material.map(|m| m.id).cmp(&other.material.map(|m| m.id)))
            .then_with(|| self.stock_item.is_none().cmp(&other.stock_item.is_none()))
            .then_with(|| {
                self.stock_item
                    .map(|s| s.id)
                    .cmp(&other.stock_item.map(|s| s.id))
            })
            .then_with(|| kind_rank(self).cmp(&kind_rank(other)))
            .then_with(|| self.first_sequence_key().cmp(&other.first_sequence_key()))
            .then_with(|| self.first_item_id().cmp(&other.first_item_id()))
    }

    fn first_sequence_key(&self) -> Option<SequenceKey> {
        self.items.first().map(|i| SequenceKey::new(&i.sequence_number))
    }

    fn first_item_id(&self) -> Option<i32> {
        self.items.first().map(|i| i.id)
    }
}

/// Grouped view of an order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedReport<'a> {
    /// Groups sorted by material name, then stock item.
    pub groups: Vec<MaterialStockGroup<'a>>,
    /// Regular lines missing a material or stock item; they weigh nothing.
    pub incomplete: Vec<&'a OrderItem>,
}

impl GroupedReport<'_> {
    /// Sum of group weights in grams.
    pub fn total_weight_g(&self) -> f64 {
        self.groups.iter().map(|g| g.total_weight_g).sum()
    }

    /// Sum of group weights in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_g() / G_PER_KG
    }
}

/// Group the lines of an order by `(material, stock item)`.
///
/// Each special line becomes its own group. Regular lines without a material
/// or stock item are listed in `incomplete` instead of any group.
pub fn group_by_material_and_stock(order: &Order) -> GroupedReport<'_> {
    let mut report = GroupedReport::default();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for item in sort_items(&order.items) {
        let key = if item.is_special {
            GroupKey::Special { item_id: item.id }
        } else {
            match (item.material_id(), item.stock_item_id()) {
                (Some(material_id), Some(stock_item_id)) => GroupKey::Stock {
                    material_id,
                    stock_item_id,
                },
                _ => {
                    tracing::warn!(
                        "Order {}: item {} (#{}) has no material or stock item, left out of grouped report",
                        order.id,
                        item.id,
                        item.sequence_number
                    );
                    report.incomplete.push(item);
                    continue;
                }
            }
        };

        let slot = *index.entry(key).or_insert_with(|| {
            report.groups.push(MaterialStockGroup::start(key, item));
            report.groups.len() - 1
        });
        report.groups[slot].add(item, order.coefficient);
    }

    report.groups.sort_by(|a, b| a.cmp_report_order(b));

    tracing::debug!(
        "Order {}: {} group(s), {} incomplete item(s)",
        order.id,
        report.groups.len(),
        report.incomplete.len()
    );

    report
}
