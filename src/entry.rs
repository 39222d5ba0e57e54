//! Item entry workflow: remembers the last line a user entered.
//!
//! The context is owned by the caller (one per user session or form), so
//! repeated entries of similar parts start from the previous values.

use crate::model::{Dimensions, Order, SectionType};
use crate::store::OrderItemRecord;
use serde::{Deserialize, Serialize};

/// Values of a line item form before it is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub sequence_number: String,
    pub part_name_id: Option<i32>,
    pub material_id: Option<i32>,
    pub quantity: u32,
    pub stock_item_id: Option<i32>,
    pub dimensions: Dimensions,
    pub is_special: bool,
}

impl ItemDraft {
    /// Keep only the dimensions the given section type uses.
    pub fn normalize(&mut self, section_type: SectionType) {
        self.dimensions.retain_for(section_type);
    }

    /// Turn the draft into a record ready to store, if a part name is chosen.
    pub fn into_record(self) -> Option<OrderItemRecord> {
        let part_name_id = self.part_name_id?;
        let mut record = OrderItemRecord::new(self.sequence_number, part_name_id, self.quantity);
        record.material_id = self.material_id;
        record.stock_item_id = self.stock_item_id;
        record.dimensions = self.dimensions;
        record.is_special = self.is_special;
        Some(record)
    }
}

/// Short-lived memory of the last accepted draft.
#[derive(Debug, Clone, Default)]
pub struct EntryContext {
    last: Option<ItemDraft>,
}

impl EntryContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a draft that was just saved.
    pub fn remember(&mut self, draft: &ItemDraft) {
        self.last = Some(draft.clone());
    }

    /// Forget the remembered draft.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Last remembered draft.
    pub fn last(&self) -> Option<&ItemDraft> {
        self.last.as_ref()
    }

    /// Draft for the next line of an order.
    ///
    /// The sequence number is the next free position; everything else comes
    /// from the remembered draft, except the special flag which always resets.
    pub fn prefill(&self, order: &Order) -> ItemDraft {
        let mut draft = self.last.clone().unwrap_or_else(|| ItemDraft {
            quantity: 1,
            ..Default::default()
        });
        draft.sequence_number = (order.items.len() + 1).to_string();
        draft.is_special = false;
        draft
    }
}
