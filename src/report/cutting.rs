//! Cutting task: regular lines bucketed by stock section type.

use super::sequence::sort_items;
use crate::model::{Order, OrderItem, SectionType};
use serde::Serialize;

/// Lines to prepare from sheet, round bar and hexagon bar stock.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CuttingTask<'a> {
    pub sheet: Vec<&'a OrderItem>,
    pub round: Vec<&'a OrderItem>,
    pub hexagon: Vec<&'a OrderItem>,
}

impl<'a> CuttingTask<'a> {
    /// Lines of one section type, in sequence order.
    pub fn bucket(&self, section_type: SectionType) -> &[&'a OrderItem] {
        match section_type {
            SectionType::Sheet => &self.sheet,
            SectionType::Round => &self.round,
            SectionType::Hexagon => &self.hexagon,
        }
    }

    fn bucket_mut(&mut self, section_type: SectionType) -> &mut Vec<&'a OrderItem> {
        match section_type {
            SectionType::Sheet => &mut self.sheet,
            SectionType::Round => &mut self.round,
            SectionType::Hexagon => &mut self.hexagon,
        }
    }

    /// All buckets in report order (sheet, round, hexagon).
    pub fn sections(&self) -> impl Iterator<Item = (SectionType, &[&'a OrderItem])> + '_ {
        SectionType::ALL.into_iter().map(move |st| (st, self.bucket(st)))
    }

    /// Number of lines over all buckets.
    pub fn len(&self) -> usize {
        self.sheet.len() + self.round.len() + self.hexagon.len()
    }

    /// Whether there is nothing to cut.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the cutting task of an order.
///
/// Special lines are left out entirely, as are lines without a stock item.
pub fn cutting_task(order: &Order) -> CuttingTask<'_> {
    let mut task = CuttingTask::default();

    for item in sort_items(&order.items) {
        if item.is_special {
            continue;
        }
        match item.section_type() {
            Some(section_type) => task.bucket_mut(section_type).push(item),
            None => {
                tracing::warn!(
                    "Order {}: item {} (#{}) has no stock item, left out of cutting task",
                    order.id,
                    item.id,
                    item.sequence_number
                );
            }
        }
    }

    task
}
