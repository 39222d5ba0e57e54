//! JSON snapshot of workshop data and id resolution into linked objects.

mod records;
mod workshop;

pub use records::{OrderItemRecord, OrderRecord, StockItemRecord};
pub use workshop::Workshop;
