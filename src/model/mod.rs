//! Data model types for materials, stock and orders.

mod dimensions;
mod material;
mod order;
mod stock;

pub use dimensions::{DimensionField, Dimensions};
pub use material::{Material, PartName};
pub use order::{Order, OrderItem};
pub use stock::{SectionProfile, SectionType, StockItem};
