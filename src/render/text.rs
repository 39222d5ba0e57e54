//! Text layouts for the order detail, grouped report and cutting task.

use crate::calc::PartGeometry;
use crate::config::ReportConfig;
use crate::model::{Order, OrderItem};
use crate::report::{order_detail, CuttingTask, GroupedReport, OrderTotals};
use std::fmt::Write;

/// Format part dimensions for display, e.g. "Ø10 x 100".
pub fn format_dimensions(item: &OrderItem) -> String {
    let Some(stock) = &item.stock_item else {
        return "-".to_string();
    };
    match PartGeometry::from_dimensions(stock.section_type(), &item.dimensions) {
        PartGeometry::Sheet {
            length,
            width,
            height,
        } => format!("{} x {} x {}", length, width, height),
        PartGeometry::Round { diameter, length } => format!("Ø{} x {}", diameter, length),
        PartGeometry::Hexagon { key_size, length } => format!("S{} x {}", key_size, length),
    }
}

fn write_header(output: &mut String, order: &Order) {
    writeln!(output, "{}", order.label()).unwrap();
    if let Some(drawing) = &order.drawing_number {
        writeln!(output, "Drawing: {}", drawing).unwrap();
    }
    if !order.owner.is_empty() {
        writeln!(output, "Owner: {}", order.owner).unwrap();
    }
    writeln!(output, "Coefficient: {:.1}", order.coefficient).unwrap();
    writeln!(output).unwrap();
}

/// Render the totals line.
pub fn render_totals(totals: &OrderTotals, config: &ReportConfig) -> String {
    format!(
        "Items: {} | Materials: {} | Total: {}",
        totals.total_items_count,
        totals.materials_count,
        config.format_mass(totals.total_weight_g)
    )
}

/// Render every line of an order with its weights.
pub fn render_order_detail(order: &Order, config: &ReportConfig) -> String {
    let mut output = String::new();
    write_header(&mut output, order);

    writeln!(output, "# | Part | Material | Stock | Size | Qty | Weight | Total").unwrap();
    let detail = order_detail(order);
    for line in &detail.lines {
        let item = line.item;
        let material = item.material.as_ref().map_or("-".to_string(), |m| m.name.clone());
        let stock = item.stock_item.as_ref().map_or("-".to_string(), |s| s.label());
        let (weight, total) = if item.is_special {
            ("special".to_string(), "special".to_string())
        } else {
            (
                config.format_mass(line.metrics.weight_g),
                config.format_mass(line.metrics.total_weight_g),
            )
        };
        writeln!(
            output,
            "{} | {} | {} | {} | {} | {} | {} | {}",
            item.sequence_number,
            item.part_name,
            material,
            stock,
            format_dimensions(item),
            item.quantity,
            weight,
            total
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{}", render_totals(&detail.totals, config)).unwrap();
    output
}

/// Render the material/stock grouped report.
pub fn render_grouped_report(order: &Order, report: &GroupedReport<'_>, config: &ReportConfig) -> String {
    let mut output = String::new();
    write_header(&mut output, order);

    writeln!(output, "Material | Stock | Qty | Per item | Total").unwrap();
    for group in &report.groups {
        let material = group.material.map_or("-".to_string(), |m| m.name.clone());
        let stock = if group.is_special() {
            let name = group
                .items
                .first()
                .map_or(String::new(), |i| i.part_name.name.clone());
            format!("special: {}", name)
        } else {
            group.stock_item.map_or("-".to_string(), |s| s.label())
        };
        writeln!(
            output,
            "{} | {} | {} | {} | {}",
            material,
            stock,
            group.quantity,
            config.format_mass(group.weight_per_item_g),
            config.format_mass(group.total_weight_g)
        )
        .unwrap();
    }

    if !report.incomplete.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "Incomplete items (not weighed):").unwrap();
        for item in &report.incomplete {
            writeln!(output, "{}", item).unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "Total: {}", config.format_mass(report.total_weight_g())).unwrap();
    output
}

/// Render the cutting task, one block per section type.
pub fn render_cutting_task(order: &Order, task: &CuttingTask<'_>) -> String {
    let mut output = String::new();
    write_header(&mut output, order);

    for (section_type, items) in task.sections() {
        if items.is_empty() {
            continue;
        }
        writeln!(output, "[{}]", section_type.label()).unwrap();
        for item in items {
            let material = item.material.as_ref().map_or("-".to_string(), |m| m.name.clone());
            writeln!(
                output,
                "{} | {} | {} | {} | {}",
                item.sequence_number,
                item.part_name,
                material,
                format_dimensions(item),
                item.quantity
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    output
}
