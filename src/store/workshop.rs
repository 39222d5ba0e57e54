//! In-memory workshop snapshot: reference data and orders.

use super::records::{OrderItemRecord, OrderRecord, StockItemRecord};
use crate::config::{coefficient_in_range, COEFFICIENT_MAX, COEFFICIENT_MIN};
use crate::error::{FabError, Result};
use crate::model::{Material, Order, OrderItem, PartName, SectionProfile, SectionType, StockItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Snapshot of all workshop data, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub part_names: Vec<PartName>,
    #[serde(default)]
    pub stock_items: Vec<StockItemRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl Workshop {
    /// Create an empty workshop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FabError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let workshop = Self::from_json(&content)?;
        debug!(
            "Loaded {}: {} material(s), {} stock item(s), {} order(s)",
            path.display(),
            workshop.materials.len(),
            workshop.stock_items.len(),
            workshop.orders.len()
        );
        Ok(workshop)
    }

    /// Parse a snapshot from JSON and check the stock records.
    pub fn from_json(content: &str) -> Result<Self> {
        let workshop: Self = serde_json::from_str(content)?;
        for record in &workshop.stock_items {
            record.profile()?;
        }
        Ok(workshop)
    }

    /// Serialize the snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        debug!("Saved {}", path.display());
        Ok(())
    }

    // === Lookups ===

    /// Find a material by ID.
    pub fn material(&self, id: i32) -> Result<&Material> {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .ok_or(FabError::MaterialNotFound { id })
    }

    /// Find a part name by ID.
    pub fn part_name(&self, id: i32) -> Result<&PartName> {
        self.part_names
            .iter()
            .find(|p| p.id == id)
            .ok_or(FabError::PartNameNotFound { id })
    }

    /// Find a stock item by ID and link its material.
    pub fn stock_item(&self, id: i32) -> Result<StockItem> {
        let record = self
            .stock_items
            .iter()
            .find(|s| s.id == id)
            .ok_or(FabError::StockItemNotFound { id })?;
        self.link_stock_item(record)
    }

    fn link_stock_item(&self, record: &StockItemRecord) -> Result<StockItem> {
        Ok(StockItem::new(
            record.id,
            self.material(record.material_id)?.clone(),
            record.profile()?,
        ))
    }

    fn order_record(&self, id: i32) -> Result<&OrderRecord> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or(FabError::OrderNotFound { id })
    }

    fn order_record_mut(&mut self, id: i32) -> Result<&mut OrderRecord> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(FabError::OrderNotFound { id })
    }

    /// Resolve an order with all its lines linked to reference data.
    pub fn order(&self, id: i32) -> Result<Order> {
        let record = self.order_record(id)?;
        let items = record
            .items
            .iter()
            .map(|r| self.link_item(record.id, r))
            .collect::<Result<Vec<_>>>()?;

        debug!("Resolved order {} with {} item(s)", id, items.len());

        Ok(Order {
            id: record.id,
            order_number: record.order_number.clone(),
            order_name: record.order_name.clone(),
            drawing_number: record.drawing_number.clone(),
            owner: record.owner.clone(),
            coefficient: record.coefficient,
            created_at: record.created_at,
            items,
        })
    }

    fn link_item(&self, order_id: i32, record: &OrderItemRecord) -> Result<OrderItem> {
        Ok(OrderItem {
            id: record.id,
            order_id,
            sequence_number: record.sequence_number.clone(),
            part_name: self.part_name(record.part_name_id)?.clone(),
            material: record
                .material_id
                .map(|id| self.material(id).cloned())
                .transpose()?,
            quantity: record.quantity,
            stock_item: record
                .stock_item_id
                .map(|id| self.stock_item(id))
                .transpose()?,
            dimensions: record.dimensions,
            is_special: record.is_special,
        })
    }

    // === Listings and search ===

    /// Materials sorted by name.
    pub fn materials_sorted(&self) -> Vec<&Material> {
        let mut materials: Vec<&Material> = self.materials.iter().collect();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        materials
    }

    /// Part names sorted by name.
    pub fn part_names_sorted(&self) -> Vec<&PartName> {
        let mut parts: Vec<&PartName> = self.part_names.iter().collect();
        parts.sort_by(|a, b| a.name.cmp(&b.name));
        parts
    }

    /// Stock items sorted by material name, then section type.
    pub fn stock_items_sorted(&self) -> Result<Vec<StockItem>> {
        let mut items = self.stock_items_for(None, None)?;
        items.sort_by(|a, b| {
            a.material
                .name
                .cmp(&b.material.name)
                .then_with(|| a.section_type().cmp(&b.section_type()))
        });
        Ok(items)
    }

    /// Stock items, optionally restricted to a material and/or section type.
    pub fn stock_items_for(
        &self,
        material_id: Option<i32>,
        section_type: Option<SectionType>,
    ) -> Result<Vec<StockItem>> {
        let mut found = Vec::new();
        for record in &self.stock_items {
            if material_id.is_some_and(|id| id != record.material_id) {
                continue;
            }
            let item = self.link_stock_item(record)?;
            if section_type.is_some_and(|st| st != item.section_type()) {
                continue;
            }
            found.push(item);
        }
        Ok(found)
    }

    /// Materials whose name contains the query, ignoring case.
    pub fn search_materials(&self, query: &str) -> Vec<&Material> {
        let query = query.trim().to_lowercase();
        self.materials_sorted()
            .into_iter()
            .filter(|m| m.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Part names containing the query, ignoring case.
    pub fn search_part_names(&self, query: &str) -> Vec<&PartName> {
        let query = query.trim().to_lowercase();
        self.part_names_sorted()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Orders of one owner, newest first.
    pub fn orders_for(&self, owner: &str) -> Vec<&OrderRecord> {
        let mut orders: Vec<&OrderRecord> = self.orders.iter().filter(|o| o.owner == owner).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        orders
    }

    /// Sequence number suggested for the next line of an order.
    pub fn next_sequence_number(&self, order_id: i32) -> Result<usize> {
        Ok(self.order_record(order_id)?.items.len() + 1)
    }

    // === Reference data edits ===

    /// Add a material and return its ID.
    pub fn add_material(&mut self, name: impl Into<String>, density: f64) -> Result<i32> {
        let id = next_id("material", self.materials.iter().map(|m| m.id))?;
        self.materials.push(Material::new(id, name, density));
        Ok(id)
    }

    /// Add a part name and return its ID.
    pub fn add_part_name(&mut self, name: impl Into<String>) -> Result<i32> {
        let id = next_id("part name", self.part_names.iter().map(|p| p.id))?;
        self.part_names.push(PartName::new(id, name));
        Ok(id)
    }

    /// Add a stock item and return its ID.
    pub fn add_stock_item(&mut self, material_id: i32, profile: SectionProfile) -> Result<i32> {
        self.material(material_id)?;
        let id = next_id("stock item", self.stock_items.iter().map(|s| s.id))?;
        let record = StockItemRecord::from_profile(id, material_id, profile);
        record.profile()?;
        self.stock_items.push(record);
        Ok(id)
    }

    /// Delete a material that nothing references.
    pub fn delete_material(&mut self, id: i32) -> Result<()> {
        self.material(id)?;
        let count = self
            .stock_items
            .iter()
            .filter(|s| s.material_id == id)
            .count()
            + self.items().filter(|i| i.material_id == Some(id)).count();
        if count > 0 {
            return Err(FabError::MaterialInUse { id, count });
        }
        self.materials.retain(|m| m.id != id);
        Ok(())
    }

    /// Delete a stock item that no order line references.
    pub fn delete_stock_item(&mut self, id: i32) -> Result<()> {
        self.stock_item(id)?;
        let count = self.items().filter(|i| i.stock_item_id == Some(id)).count();
        if count > 0 {
            return Err(FabError::StockItemInUse { id, count });
        }
        self.stock_items.retain(|s| s.id != id);
        Ok(())
    }

    /// Delete a part name that no order line references.
    pub fn delete_part_name(&mut self, id: i32) -> Result<()> {
        self.part_name(id)?;
        let count = self.items().filter(|i| i.part_name_id == id).count();
        if count > 0 {
            return Err(FabError::PartNameInUse { id, count });
        }
        self.part_names.retain(|p| p.id != id);
        Ok(())
    }

    fn items(&self) -> impl Iterator<Item = &OrderItemRecord> {
        self.orders.iter().flat_map(|o| o.items.iter())
    }

    // === Order edits ===

    /// Create an empty order and return its ID.
    pub fn create_order(
        &mut self,
        order_number: impl Into<String>,
        order_name: impl Into<String>,
        owner: impl Into<String>,
        coefficient: f64,
        created_at: DateTime<Utc>,
    ) -> Result<i32> {
        check_coefficient(coefficient)?;
        let id = next_id("order", self.orders.iter().map(|o| o.id))?;
        self.orders.push(OrderRecord {
            id,
            order_number: order_number.into(),
            order_name: order_name.into(),
            drawing_number: None,
            owner: owner.into(),
            coefficient,
            created_at,
            items: Vec::new(),
        });
        Ok(id)
    }

    /// Change the mass coefficient of an order.
    pub fn set_coefficient(&mut self, order_id: i32, coefficient: f64) -> Result<()> {
        check_coefficient(coefficient)?;
        self.order_record_mut(order_id)?.coefficient = coefficient;
        Ok(())
    }

    /// Add a line to an order and return the new line ID.
    ///
    /// Referenced part name, material and stock item must exist.
    pub fn add_order_item(&mut self, order_id: i32, mut record: OrderItemRecord) -> Result<i32> {
        self.order_record(order_id)?;
        self.part_name(record.part_name_id)?;
        if let Some(material_id) = record.material_id {
            self.material(material_id)?;
        }
        if let Some(stock_item_id) = record.stock_item_id {
            self.stock_item(stock_item_id)?;
        }

        record.id = next_id("order item", self.items().map(|i| i.id))?;
        let id = record.id;
        self.order_record_mut(order_id)?.items.push(record);
        Ok(id)
    }

    /// Remove one line from an order.
    pub fn delete_order_item(&mut self, order_id: i32, item_id: i32) -> Result<()> {
        let order = self.order_record_mut(order_id)?;
        let before = order.items.len();
        order.items.retain(|i| i.id != item_id);
        if order.items.len() == before {
            return Err(FabError::OrderItemNotFound { order_id, item_id });
        }
        Ok(())
    }

    /// Delete an order together with its lines.
    pub fn delete_order(&mut self, order_id: i32) -> Result<()> {
        self.order_record(order_id)?;
        self.orders.retain(|o| o.id != order_id);
        Ok(())
    }

    /// Duplicate an order and all its lines under a new order number.
    ///
    /// Returns the ID of the copy. Lines get fresh IDs, everything else is kept.
    pub fn copy_order(
        &mut self,
        order_id: i32,
        order_number: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<i32> {
        let source = self.order_record(order_id)?.clone();
        let new_id = next_id("order", self.orders.iter().map(|o| o.id))?;
        let last_item = self.items().map(|i| i.id).max().unwrap_or(0);

        let items = source
            .items
            .into_iter()
            .zip(1..)
            .map(|(mut item, offset)| -> Result<OrderItemRecord> {
                item.id = last_item
                    .checked_add(offset)
                    .ok_or(FabError::IdExhausted {
                        kind: "order item",
                        last: last_item,
                    })?;
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;

        self.orders.push(OrderRecord {
            id: new_id,
            order_number: order_number.into(),
            created_at,
            items,
            ..source
        });

        debug!("Copied order {} to {}", order_id, new_id);
        Ok(new_id)
    }
}

fn next_id(kind: &'static str, ids: impl Iterator<Item = i32>) -> Result<i32> {
    let last = ids.max().unwrap_or(0);
    last.checked_add(1).ok_or(FabError::IdExhausted { kind, last })
}

fn check_coefficient(value: f64) -> Result<()> {
    if coefficient_in_range(value) {
        Ok(())
    } else {
        Err(FabError::InvalidCoefficient {
            value,
            min: COEFFICIENT_MIN,
            max: COEFFICIENT_MAX,
        })
    }
}
