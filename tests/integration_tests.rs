//! End-to-end tests over the workshop fixture snapshot.

use chrono::{DateTime, Utc};
use fabcalc_rs::render::{render_cutting_task, render_grouped_report, render_order_detail};
use fabcalc_rs::{
    cutting_task, group_by_material_and_stock, order_detail, validate_order, Dimensions, FabError,
    GroupKey, MassUnit, OrderItemRecord, ReportConfig, SectionType, Workshop,
};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workshop.json")
}

fn load_fixture() -> Workshop {
    Workshop::load(&fixture_path()).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn grams() -> ReportConfig {
    ReportConfig::new(MassUnit::Grams)
}

// ==================== Loading tests ====================

#[test]
fn test_load_fixture() {
    let w = load_fixture();
    assert_eq!(w.materials.len(), 4);
    assert_eq!(w.stock_items.len(), 4);
    assert_eq!(w.orders.len(), 2);

    let order = w.order(1).unwrap();
    assert_eq!(order.label(), "Order #17 - Bracket assembly");
    assert_eq!(order.items.len(), 6);
    assert_eq!(order.coefficient, 1.2);
}

#[test]
fn test_load_missing_file() {
    let result = Workshop::load(Path::new("/nonexistent/workshop.json"));
    assert!(matches!(result, Err(FabError::FileNotFound { .. })));
}

#[test]
fn test_defaults_for_sparse_order() {
    let order = load_fixture().order(2).unwrap();
    assert_eq!(order.coefficient, 1.0);
    assert!(order.items.is_empty());
    assert_eq!(order.total_weight_g(), 0.0);
    assert_eq!(order.materials_count(), 0);
}

// ==================== Totals tests ====================

#[test]
fn test_order_totals() {
    let order = load_fixture().order(1).unwrap();
    let totals = order.totals();

    // 11.304 + 25.446879 + 249.4152 + 3.768, special and incomplete lines weigh nothing
    assert!(approx(totals.total_weight_g, 289.934079));
    assert!(approx(totals.total_weight_kg, 0.289934079));
    assert_eq!(totals.total_items_count, 12);
    assert_eq!(totals.materials_count, 3);
}

#[test]
fn test_sequence_order() {
    let order = load_fixture().order(1).unwrap();
    let seq: Vec<&str> = order
        .sorted_items()
        .iter()
        .map(|i| i.sequence_number.as_str())
        .collect();
    assert_eq!(seq, vec!["1", "02", "2", "3", "10", "1a"]);
}

// ==================== Report tests ====================

#[test]
fn test_grouped_report() {
    let order = load_fixture().order(1).unwrap();
    let report = group_by_material_and_stock(&order);

    let keys: Vec<GroupKey> = report.groups.iter().map(|g| g.key).collect();
    assert_eq!(
        keys,
        vec![
            GroupKey::Stock {
                material_id: 2,
                stock_item_id: 2
            },
            GroupKey::Stock {
                material_id: 3,
                stock_item_id: 3
            },
            GroupKey::Stock {
                material_id: 1,
                stock_item_id: 1
            },
            GroupKey::Special { item_id: 4 },
        ]
    );

    let steel = &report.groups[2];
    assert_eq!(steel.quantity, 4);
    assert!(approx(steel.weight_per_item_g, 3.14));
    assert!(approx(steel.total_weight_g, 15.072));

    let incomplete: Vec<i32> = report.incomplete.iter().map(|i| i.id).collect();
    assert_eq!(incomplete, vec![6]);

    assert!(approx(report.total_weight_g(), order.total_weight_g()));
}

#[test]
fn test_grouped_report_text() {
    let order = load_fixture().order(1).unwrap();
    let report = group_by_material_and_stock(&order);
    let text = render_grouped_report(&order, &report, &grams());

    insta::assert_snapshot!(text.trim_end(), @r"
Order #17 - Bracket assembly
Drawing: DR-100
Owner: ivanov
Coefficient: 1.2

Material | Stock | Qty | Per item | Total
AMg6 | AMg6 - Round Ø10 mm | 1 | 21.206 g | 25.447 g
Brass | Brass - Hexagon S10 mm | 2 | 103.923 g | 249.415 g
Steel 45 | Steel 45 - Sheet 20 mm | 4 | 3.140 g | 15.072 g
- | special: Bearing | 4 | 0.000 g | 0.000 g

Incomplete items (not weighed):
3. Bracket - 1 pcs

Total: 289.934 g
");
}

#[test]
fn test_cutting_task() {
    let order = load_fixture().order(1).unwrap();
    let task = cutting_task(&order);

    let ids = |st: SectionType| -> Vec<i32> { task.bucket(st).iter().map(|i| i.id).collect() };
    assert_eq!(ids(SectionType::Sheet), vec![1, 6, 5]);
    assert_eq!(ids(SectionType::Round), vec![2]);
    assert_eq!(ids(SectionType::Hexagon), vec![3]);
    assert_eq!(task.len(), 5);

    let text = render_cutting_task(&order, &task);
    assert!(text.contains(
        "[Sheet]\n1 | Plate | Steel 45 | 10 x 20 x 2 | 3\n3 | Bracket | - | 10 x 20 x 2 | 1\n1a | Plate | Steel 45 | 10 x 20 x 2 | 1\n\n"
    ));
    assert!(text.contains("[Round]\n2 | Pin | AMg6 | Ø10 x 100 | 1\n"));
    assert!(text.contains("[Hexagon]\n10 | Nut | Brass | S10 x 50 | 2\n"));
    assert!(!text.contains("Bearing"));
}

#[test]
fn test_order_detail_text() {
    let order = load_fixture().order(1).unwrap();
    let text = render_order_detail(&order, &grams());
    assert!(text.contains("02 | Bearing | - | - | - | 4 | special | special\n"));
    assert!(text.contains("10 | Nut | Brass | Brass - Hexagon S10 mm | S10 x 50 | 2 | 103.923 g | 249.415 g\n"));
    assert!(text.ends_with("Items: 12 | Materials: 3 | Total: 289.934 g\n"));
}

#[test]
fn test_order_detail_json_carries_weights() {
    let order = load_fixture().order(1).unwrap();
    let json = serde_json::to_value(order_detail(&order)).unwrap();

    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 6);
    // "10" is the fifth line in sequence order
    let nut = &lines[4];
    assert_eq!(nut["sequence_number"], "10");
    assert!(approx(nut["weight_g"].as_f64().unwrap(), 103.923));
    assert!(approx(nut["total_weight_g"].as_f64().unwrap(), 249.4152));
    assert!(approx(nut["volume_cm3"].as_f64().unwrap(), 12.990375));
    assert!(approx(
        json["totals"]["total_weight_g"].as_f64().unwrap(),
        289.934079
    ));
}

#[test]
fn test_validation_flags_missing_material() {
    let order = load_fixture().order(1).unwrap();
    let result = validate_order(&order);
    assert!(!result.passed);
    assert_eq!(result.errors, vec!["Item #3: Material is required".to_string()]);
}

// ==================== Edit and persistence tests ====================

#[test]
fn test_copy_order_and_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workshop.json");

    let mut w = load_fixture();
    let created: DateTime<Utc> = "2026-04-10T12:00:00Z".parse().unwrap();
    let copy_id = w.copy_order(1, "17-B", created).unwrap();
    w.save(&path).unwrap();

    let reloaded = Workshop::load(&path).unwrap();
    assert_eq!(reloaded, w);

    let original = reloaded.order(1).unwrap();
    let copy = reloaded.order(copy_id).unwrap();
    assert_eq!(copy.order_number, "17-B");
    assert_eq!(copy.created_at, created);
    assert_eq!(copy.items.len(), original.items.len());
    assert!(approx(copy.total_weight_g(), original.total_weight_g()));

    let newest: Vec<&str> = reloaded
        .orders_for("ivanov")
        .iter()
        .map(|o| o.order_number.as_str())
        .collect();
    assert_eq!(newest, vec!["17-B", "17"]);
}

#[test]
fn test_add_line_changes_totals() {
    let mut w = load_fixture();
    let before = w.order(1).unwrap().total_weight_g();

    // Copper round bar, Ø30 x 20: 14137.155 mm³ at 8.96 g/cm³
    let mut line = OrderItemRecord::new(w.next_sequence_number(1).unwrap().to_string(), 2, 1);
    line.material_id = Some(4);
    line.stock_item_id = Some(4);
    line.dimensions = Dimensions::round(30.0, 20.0);
    let id = w.add_order_item(1, line).unwrap();
    assert_eq!(id, 7);

    let order = w.order(1).unwrap();
    let added = order.find_item(id).unwrap();
    assert_eq!(added.sequence_number, "7");
    assert!(approx(added.weight_g(), 126.6689088));
    assert!(approx(order.total_weight_g() - before, 126.6689088 * 1.2));
    assert_eq!(order.materials_count(), 4);
}

#[test]
fn test_reference_data_in_use() {
    let mut w = load_fixture();
    assert!(matches!(
        w.delete_material(3),
        Err(FabError::MaterialInUse { id: 3, .. })
    ));

    // Copper is only referenced by its stock item
    w.delete_stock_item(4).unwrap();
    w.delete_material(4).unwrap();
    assert!(w.search_materials("copper").is_empty());
}
