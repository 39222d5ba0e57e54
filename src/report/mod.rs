//! Order aggregation and grouped report views.

mod cutting;
mod detail;
mod grouped;
mod sequence;
mod totals;

pub use cutting::{cutting_task, CuttingTask};
pub use detail::{order_detail, DetailLine, OrderDetail};
pub use grouped::{group_by_material_and_stock, GroupKey, GroupedReport, MaterialStockGroup};
pub use sequence::{sort_items, SequenceKey};
pub use totals::{materials_count, total_items_count, total_weight_g, OrderTotals};
