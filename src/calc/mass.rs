//! Volume and weight of order line items.

use super::PartGeometry;
use crate::config::{G_PER_KG, MM3_PER_CM3};
use crate::model::OrderItem;
use serde::{Deserialize, Serialize};

/// Geometry of the item, or `None` when it carries no mass (special or no stock).
pub fn geometry(item: &OrderItem) -> Option<PartGeometry> {
    if item.is_special {
        return None;
    }
    item.stock_item
        .as_ref()
        .map(|stock| PartGeometry::from_dimensions(stock.section_type(), &item.dimensions))
}

/// Volume of one part in mm³.
pub fn volume_mm3(item: &OrderItem) -> f64 {
    geometry(item).map_or(0.0, |g| g.volume_mm3())
}

/// Volume of one part in cm³.
pub fn volume_cm3(item: &OrderItem) -> f64 {
    volume_mm3(item) / MM3_PER_CM3
}

/// Weight of one part in grams.
pub fn weight_g(item: &OrderItem) -> f64 {
    if item.is_special {
        return 0.0;
    }
    match &item.material {
        Some(material) => volume_cm3(item) * material.density,
        None => 0.0,
    }
}

/// Weight of one part in kilograms.
pub fn weight_kg(item: &OrderItem) -> f64 {
    weight_g(item) / G_PER_KG
}

/// Weight of the whole line in grams: single weight × quantity × coefficient.
pub fn total_weight_g(item: &OrderItem, coefficient: f64) -> f64 {
    if item.is_special {
        return 0.0;
    }
    weight_g(item) * f64::from(item.quantity) * coefficient
}

/// Weight of the whole line in kilograms.
pub fn total_weight_kg(item: &OrderItem, coefficient: f64) -> f64 {
    total_weight_g(item, coefficient) / G_PER_KG
}

/// All derived values of one line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetrics {
    pub volume_mm3: f64,
    pub volume_cm3: f64,
    pub weight_g: f64,
    pub weight_kg: f64,
    pub total_weight_g: f64,
    pub total_weight_kg: f64,
}

impl ItemMetrics {
    /// Compute the metrics of an item under the given order coefficient.
    pub fn compute(item: &OrderItem, coefficient: f64) -> Self {
        let volume_mm3 = volume_mm3(item);
        let weight_g = weight_g(item);
        let total_weight_g = total_weight_g(item, coefficient);
        Self {
            volume_mm3,
            volume_cm3: volume_mm3 / MM3_PER_CM3,
            weight_g,
            weight_kg: weight_g / G_PER_KG,
            total_weight_g,
            total_weight_kg: total_weight_g / G_PER_KG,
        }
    }
}
