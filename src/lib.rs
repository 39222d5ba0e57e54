//! fabcalc-rs - Stock, order and part-weight calculator for a metal fabrication shop.
//!
//! Parts are cut from sheet, round bar or hexagon bar stock. Given a part's
//! dimensions and its material density this library computes the part volume
//! and weight, the weight of each order line (with the order's mass
//! coefficient) and order-level totals and grouped reports.
//!
//! # Example
//!
//! ```no_run
//! use fabcalc_rs::{group_by_material_and_stock, Workshop};
//! use std::path::Path;
//!
//! let workshop = Workshop::load(Path::new("workshop.json")).unwrap();
//! let order = workshop.order(7).unwrap();
//! println!("{:.3} kg", order.total_weight_kg());
//! for group in group_by_material_and_stock(&order).groups {
//!     println!("{:?}: {:.3} g", group.key, group.total_weight_g);
//! }
//! ```

pub mod calc;
pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod render;
pub mod report;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use calc::{ItemMetrics, PartGeometry};
pub use config::{MassUnit, ReportConfig};
pub use entry::{EntryContext, ItemDraft};
pub use error::{ErrorCode, FabError, Result};
pub use model::{
    DimensionField, Dimensions, Material, Order, OrderItem, PartName, SectionProfile, SectionType,
    StockItem,
};
pub use report::{
    cutting_task, group_by_material_and_stock, order_detail, sort_items, CuttingTask, DetailLine,
    GroupKey, GroupedReport, MaterialStockGroup, OrderDetail, OrderTotals, SequenceKey,
};
pub use store::{OrderItemRecord, OrderRecord, StockItemRecord, Workshop};
pub use validation::{validate_order, ValidationResult};
