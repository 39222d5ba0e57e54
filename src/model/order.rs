//! Orders and their line items.

use super::{Dimensions, Material, PartName, SectionType, StockItem};
use crate::calc;
use crate::config::{DEFAULT_COEFFICIENT, G_PER_KG};
use crate::report::{self, OrderTotals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an order: a quantity of identical parts cut from one stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line item identifier.
    pub id: i32,
    /// Owning order.
    pub order_id: i32,
    /// Position number, free text but usually numeric ("1", "2", "10a").
    pub sequence_number: String,
    /// Part name.
    pub part_name: PartName,
    /// Material grade used for the weight.
    pub material: Option<Material>,
    /// Number of identical parts.
    pub quantity: u32,
    /// Stock the part is cut from.
    pub stock_item: Option<StockItem>,
    /// Part measurements.
    pub dimensions: Dimensions,
    /// Documentation-only line (e.g. purchased part), excluded from mass totals.
    pub is_special: bool,
}

impl OrderItem {
    /// Create a new line item without material, stock or dimensions.
    pub fn new(id: i32, order_id: i32, sequence_number: impl Into<String>, part_name: PartName) -> Self {
        Self {
            id,
            order_id,
            sequence_number: sequence_number.into(),
            part_name,
            material: None,
            quantity: 1,
            stock_item: None,
            dimensions: Dimensions::default(),
            is_special: false,
        }
    }

    /// Material identifier, if linked.
    pub fn material_id(&self) -> Option<i32> {
        self.material.as_ref().map(|m| m.id)
    }

    /// Stock item identifier, if linked.
    pub fn stock_item_id(&self) -> Option<i32> {
        self.stock_item.as_ref().map(|s| s.id)
    }

    /// Section type of the linked stock item.
    pub fn section_type(&self) -> Option<SectionType> {
        self.stock_item.as_ref().map(|s| s.section_type())
    }

    /// Whether a non-special item lacks the links needed for a weight.
    pub fn is_incomplete(&self) -> bool {
        !self.is_special && (self.material.is_none() || self.stock_item.is_none())
    }

    /// Volume of one part in mm³.
    pub fn volume_mm3(&self) -> f64 {
        calc::volume_mm3(self)
    }

    /// Volume of one part in cm³.
    pub fn volume_cm3(&self) -> f64 {
        calc::volume_cm3(self)
    }

    /// Weight of one part in grams.
    pub fn weight_g(&self) -> f64 {
        calc::weight_g(self)
    }

    /// Weight of one part in kilograms.
    pub fn weight_kg(&self) -> f64 {
        calc::weight_kg(self)
    }

    /// Weight of the whole line in grams, given the order coefficient.
    pub fn total_weight_g(&self, coefficient: f64) -> f64 {
        calc::total_weight_g(self, coefficient)
    }

    /// Weight of the whole line in kilograms, given the order coefficient.
    pub fn total_weight_kg(&self, coefficient: f64) -> f64 {
        calc::total_weight_kg(self, coefficient)
    }
}

impl std::fmt::Display for OrderItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} - {} pcs",
            self.sequence_number, self.part_name, self.quantity
        )
    }
}

/// Customer/production order with its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: i32,
    /// Order number as printed on documents.
    pub order_number: String,
    /// Order name.
    pub order_name: String,
    /// Drawing reference.
    pub drawing_number: Option<String>,
    /// User who owns the order.
    pub owner: String,
    /// Mass coefficient in [1.0, 2.0] covering scrap and process loss.
    pub coefficient: f64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Line items.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Create a new empty order with the default coefficient.
    pub fn new(id: i32, order_number: impl Into<String>, order_name: impl Into<String>) -> Self {
        Self {
            id,
            order_number: order_number.into(),
            order_name: order_name.into(),
            drawing_number: None,
            owner: String::new(),
            coefficient: DEFAULT_COEFFICIENT,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Display label, e.g. "Order #A-17 - Pump housing".
    pub fn label(&self) -> String {
        format!("Order #{} - {}", self.order_number, self.order_name)
    }

    /// Total weight of all lines in grams.
    pub fn total_weight_g(&self) -> f64 {
        report::total_weight_g(&self.items, self.coefficient)
    }

    /// Total weight of all lines in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_g() / G_PER_KG
    }

    /// Number of parts over all lines.
    pub fn total_items_count(&self) -> u64 {
        report::total_items_count(&self.items)
    }

    /// Number of distinct materials used by the lines.
    pub fn materials_count(&self) -> usize {
        report::materials_count(&self.items)
    }

    /// All order-level aggregates.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(self)
    }

    /// Line items in sequence-number order.
    pub fn sorted_items(&self) -> Vec<&OrderItem> {
        report::sort_items(&self.items)
    }

    /// Find a line item by ID.
    pub fn find_item(&self, item_id: i32) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionProfile;

    fn steel() -> Material {
        Material::new(1, "Steel 45", 7.85)
    }

    fn sheet_item(id: i32, seq: &str, quantity: u32) -> OrderItem {
        let mut item = OrderItem::new(id, 1, seq, PartName::new(1, "Plate"));
        item.material = Some(steel());
        item.stock_item = Some(StockItem::new(
            1,
            steel(),
            SectionProfile::Sheet { width: 20.0 },
        ));
        item.dimensions = Dimensions::sheet(10.0, 20.0, 2.0);
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_order_new_defaults() {
        let order = Order::new(1, "A-17", "Pump housing");
        assert_eq!(order.coefficient, 1.0);
        assert!(order.items.is_empty());
        assert_eq!(order.label(), "Order #A-17 - Pump housing");
        assert_eq!(order.total_weight_g(), 0.0);
    }

    #[test]
    fn test_item_links() {
        let item = sheet_item(5, "1", 3);
        assert_eq!(item.material_id(), Some(1));
        assert_eq!(item.stock_item_id(), Some(1));
        assert_eq!(item.section_type(), Some(SectionType::Sheet));
        assert!(!item.is_incomplete());
        assert_eq!(item.to_string(), "1. Plate - 3 pcs");
    }

    #[test]
    fn test_incomplete_item() {
        let mut item = sheet_item(5, "1", 3);
        item.material = None;
        assert!(item.is_incomplete());

        item.is_special = true;
        assert!(!item.is_incomplete());
    }

    #[test]
    fn test_order_totals_delegate() {
        let mut order = Order::new(1, "A-17", "Pump housing");
        order.coefficient = 1.2;
        order.items.push(sheet_item(1, "1", 3));
        order.items.push(sheet_item(2, "2", 1));

        assert!((order.total_weight_g() - 3.14 * 4.0 * 1.2).abs() < 1e-9);
        assert!((order.total_weight_kg() - 0.015072).abs() < 1e-9);
        assert_eq!(order.total_items_count(), 4);
        assert_eq!(order.materials_count(), 1);
        assert_eq!(order.find_item(2).map(|i| i.quantity), Some(1));
        assert!(order.find_item(9).is_none());
    }
}
