//! Stored record shapes, holding ids instead of linked objects.

use crate::config::DEFAULT_COEFFICIENT;
use crate::error::{FabError, Result};
use crate::model::{Dimensions, SectionProfile, SectionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored stock item.
///
/// Keeps the flat record shape: a section type string and one nullable column
/// per possible dimension, of which only the one matching the type is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItemRecord {
    pub id: i32,
    pub material_id: i32,
    pub section_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<f64>,
}

impl StockItemRecord {
    /// Build a record from a profile.
    pub fn from_profile(id: i32, material_id: i32, profile: SectionProfile) -> Self {
        let mut record = Self {
            id,
            material_id,
            section_type: profile.section_type().as_str().to_string(),
            width: None,
            diameter: None,
            key_size: None,
        };
        match profile {
            SectionProfile::Sheet { width } => record.width = Some(width),
            SectionProfile::Round { diameter } => record.diameter = Some(diameter),
            SectionProfile::Hexagon { key_size } => record.key_size = Some(key_size),
        }
        record
    }

    /// Convert the flat record into a profile.
    ///
    /// The dimension matching the section type must be present and positive;
    /// the other dimension columns are ignored.
    pub fn profile(&self) -> Result<SectionProfile> {
        let section_type =
            SectionType::parse(&self.section_type).ok_or_else(|| FabError::InvalidSectionType {
                id: self.id,
                section_type: self.section_type.clone(),
            })?;

        let (field, value) = match section_type {
            SectionType::Sheet => ("width", self.width),
            SectionType::Round => ("diameter", self.diameter),
            SectionType::Hexagon => ("key_size", self.key_size),
        };

        let value = value
            .filter(|v| *v > 0.0)
            .ok_or_else(|| FabError::InvalidStockDimension {
                id: self.id,
                section_type: section_type.to_string(),
                field: field.to_string(),
            })?;

        Ok(match section_type {
            SectionType::Sheet => SectionProfile::Sheet { width: value },
            SectionType::Round => SectionProfile::Round { diameter: value },
            SectionType::Hexagon => SectionProfile::Hexagon { key_size: value },
        })
    }
}

/// Stored order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: i32,
    pub sequence_number: String,
    pub part_name_id: i32,
    #[serde(default)]
    pub material_id: Option<i32>,
    pub quantity: u32,
    #[serde(default)]
    pub stock_item_id: Option<i32>,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub is_special: bool,
}

impl OrderItemRecord {
    /// Create a record for a part; the id is assigned when it is stored.
    pub fn new(sequence_number: impl Into<String>, part_name_id: i32, quantity: u32) -> Self {
        Self {
            id: 0,
            sequence_number: sequence_number.into(),
            part_name_id,
            material_id: None,
            quantity,
            stock_item_id: None,
            dimensions: Dimensions::default(),
            is_special: false,
        }
    }
}

fn default_coefficient() -> f64 {
    DEFAULT_COEFFICIENT
}

/// Stored order with its line items nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i32,
    pub order_number: String,
    pub order_name: String,
    #[serde(default)]
    pub drawing_number: Option<String>,
    pub owner: String,
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,
}
