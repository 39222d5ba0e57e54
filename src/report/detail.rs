//! Order detail view: every line with its computed volume and weights.

use super::sequence::sort_items;
use super::totals::OrderTotals;
use crate::calc::ItemMetrics;
use crate::model::{Order, OrderItem};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One order line together with its computed metrics.
#[derive(Debug, Clone, Serialize)]
pub struct DetailLine<'a> {
    #[serde(flatten)]
    pub item: &'a OrderItem,
    #[serde(flatten)]
    pub metrics: ItemMetrics,
}

/// Order header, lines in sequence order and order totals.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail<'a> {
    pub id: i32,
    pub order_number: &'a str,
    pub order_name: &'a str,
    pub drawing_number: Option<&'a str>,
    pub owner: &'a str,
    pub coefficient: f64,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<DetailLine<'a>>,
    pub totals: OrderTotals,
}

/// Build the detail view of an order.
pub fn order_detail(order: &Order) -> OrderDetail<'_> {
    let lines = sort_items(&order.items)
        .into_iter()
        .map(|item| DetailLine {
            item,
            metrics: ItemMetrics::compute(item, order.coefficient),
        })
        .collect();

    OrderDetail {
        id: order.id,
        order_number: &order.order_number,
        order_name: &order.order_name,
        drawing_number: order.drawing_number.as_deref(),
        owner: &order.owner,
        coefficient: order.coefficient,
        created_at: order.created_at,
        lines,
        totals: order.totals(),
    }
}
