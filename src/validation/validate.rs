//! Input acceptance rules for reference data, orders and line items.
//!
//! The calculator accepts anything; these checks decide what a form may save.

use crate::config::{
    coefficient_in_range, float_cmp, COEFFICIENT_MAX, COEFFICIENT_MIN, COEFFICIENT_STEP,
};
use crate::model::{Material, Order, OrderItem, StockItem};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

fn is_positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v > 0.0)
}

/// Validate a material.
pub fn validate_material(material: &Material) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if material.name.trim().is_empty() {
        result.add_error(format!("Material {}: Name is empty", material.id));
    }
    if !is_positive(Some(material.density)) {
        result.add_error(format!(
            "Material {}: Density must be positive, got {}",
            material.id, material.density
        ));
    }

    result
}

/// Validate a stock item.
pub fn validate_stock_item(stock: &StockItem) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !is_positive(Some(stock.profile.dimension())) {
        result.add_error(format!(
            "Stock item {}: {} must be positive for {}",
            stock.id,
            stock.profile.dimension_field(),
            stock.section_type().label().to_lowercase()
        ));
    }

    result
}

/// Validate order header fields.
pub fn validate_order_header(order: &Order) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if order.order_number.trim().is_empty() {
        result.add_error(format!("Order {}: Order number is empty", order.id));
    }
    if order.order_name.trim().is_empty() {
        result.add_error(format!("Order {}: Order name is empty", order.id));
    }

    let c = order.coefficient;
    if !coefficient_in_range(c) {
        result.add_error(format!(
            "Order {}: Coefficient {} is outside [{}, {}]",
            order.id, c, COEFFICIENT_MIN, COEFFICIENT_MAX
        ));
    } else if !float_cmp::is_multiple_of(c, COEFFICIENT_STEP) {
        result.add_warning(format!(
            "Order {}: Coefficient {} is not a multiple of {}",
            order.id, c, COEFFICIENT_STEP
        ));
    }

    result
}

/// Validate a single line item.
pub fn validate_item(item: &OrderItem) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = format!("Item #{}", item.sequence_number);

    if item.sequence_number.trim().is_empty() {
        result.add_error(format!("Item {}: Sequence number is empty", item.id));
    }
    if item.quantity < 1 {
        result.add_error(format!("{}: Quantity must be at least 1", label));
    }

    // Special lines are documentation only, nothing else is required.
    if item.is_special {
        return result;
    }

    if item.material.is_none() {
        result.add_error(format!("{}: Material is required", label));
    }

    let Some(stock) = &item.stock_item else {
        result.add_error(format!("{}: Stock item is required", label));
        return result;
    };

    let section_type = stock.section_type();
    for field in section_type.required_fields() {
        if !is_positive(item.dimensions.get(*field)) {
            result.add_error(format!(
                "{}: {} is required for {}",
                label,
                field,
                section_type.label().to_lowercase()
            ));
        }
    }

    let unused = item.dimensions.irrelevant_fields(section_type);
    if !unused.is_empty() {
        let names: Vec<&str> = unused.iter().map(|f| f.name()).collect();
        result.add_warning(format!(
            "{}: {} ignored for {}",
            label,
            names.join(", "),
            section_type.label().to_lowercase()
        ));
    }

    if let Some(material) = &item.material {
        if material.id != stock.material.id {
            result.add_warning(format!(
                "{}: Material {} differs from stock material {}",
                label, material.name, stock.material.name
            ));
        }
    }

    result
}

/// Validate an order header and all its lines.
pub fn validate_order(order: &Order) -> ValidationResult {
    let mut result = validate_order_header(order);
    for item in &order.items {
        result.merge(validate_item(item));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, PartName, SectionProfile};

    fn steel() -> Material {
        Material::new(1, "Steel", 7.85)
    }

    fn round_item(dims: Dimensions) -> OrderItem {
        let mut item = OrderItem::new(1, 1, "1", PartName::new(1, "Pin"));
        item.material = Some(steel());
        item.stock_item = Some(StockItem::new(
            1,
            steel(),
            SectionProfile::Round { diameter: 12.0 },
        ));
        item.dimensions = dims;
        item
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_merge() {
        let mut a = ValidationResult::ok();
        a.add_warning("w1");
        let mut b = ValidationResult::ok();
        b.add_error("e1");
        a.merge(b);
        assert!(!a.passed);
        assert_eq!(a.warnings, vec!["w1"]);
        assert_eq!(a.errors, vec!["e1"]);
    }

    // ==================== Reference data tests ====================

    #[test]
    fn test_validate_material() {
        assert!(validate_material(&steel()).passed);

        let bad = Material::new(2, " ", 0.0);
        let result = validate_material(&bad);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_stock_item() {
        let good = StockItem::new(1, steel(), SectionProfile::Hexagon { key_size: 10.0 });
        assert!(validate_stock_item(&good).passed);

        let bad = StockItem::new(2, steel(), SectionProfile::Sheet { width: -1.0 });
        let result = validate_stock_item(&bad);
        assert!(!result.passed);
        assert!(result.errors[0].contains("width"));
    }

    // ==================== Order tests ====================

    #[test]
    fn test_validate_order_coefficient() {
        let mut order = Order::new(1, "17", "Pump");
        assert!(validate_order_header(&order).passed);

        order.coefficient = 2.5;
        assert!(!validate_order_header(&order).passed);

        order.coefficient = 1.25;
        let result = validate_order_header(&order);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_order_coefficient_just_outside_bounds() {
        let mut order = Order::new(1, "17", "Pump");
        for c in [0.99991, 2.00009] {
            order.coefficient = c;
            let result = validate_order_header(&order);
            assert!(!result.passed, "coefficient {} accepted", c);
            assert_eq!(result.errors.len(), 1);
        }
    }

    #[test]
    fn test_validate_order_empty_fields() {
        let order = Order::new(1, "", "");
        assert_eq!(validate_order_header(&order).errors.len(), 2);
    }

    // ==================== Item tests ====================

    #[test]
    fn test_validate_item_ok() {
        let result = validate_item(&round_item(Dimensions::round(10.0, 100.0)));
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_item_missing_dimensions() {
        let result = validate_item(&round_item(Dimensions {
            length: Some(100.0),
            ..Default::default()
        }));
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Item #1: diameter is required for round"]);
    }

    #[test]
    fn test_validate_item_sheet_needs_three() {
        let mut item = round_item(Dimensions::default());
        item.stock_item = Some(StockItem::new(
            2,
            steel(),
            SectionProfile::Sheet { width: 20.0 },
        ));
        let result = validate_item(&item);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_validate_item_irrelevant_fields_warn() {
        let mut dims = Dimensions::round(10.0, 100.0);
        dims.width = Some(20.0);
        let result = validate_item(&round_item(dims));
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["Item #1: width ignored for round"]);
    }

    #[test]
    fn test_validate_item_material_mismatch_warns() {
        let mut item = round_item(Dimensions::round(10.0, 100.0));
        item.material = Some(Material::new(2, "Brass", 8.5));
        let result = validate_item(&item);
        assert!(result.passed);
        assert!(result.warnings[0].contains("differs from stock material Steel"));
    }

    #[test]
    fn test_validate_item_missing_links() {
        let mut item = OrderItem::new(1, 1, "3", PartName::new(1, "Pin"));
        item.quantity = 0;
        let result = validate_item(&item);
        assert_eq!(
            result.errors,
            vec![
                "Item #3: Quantity must be at least 1",
                "Item #3: Material is required",
                "Item #3: Stock item is required",
            ]
        );
    }

    #[test]
    fn test_validate_special_item_needs_nothing() {
        let mut item = OrderItem::new(1, 1, "4", PartName::new(1, "Bearing"));
        item.is_special = true;
        assert!(validate_item(&item).passed);
    }

    #[test]
    fn test_validate_order_merges_items() {
        let mut order = Order::new(1, "17", "Pump");
        order.items.push(round_item(Dimensions::round(10.0, 100.0)));
        order.items.push(round_item(Dimensions::default()));
        let result = validate_order(&order);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }
}
