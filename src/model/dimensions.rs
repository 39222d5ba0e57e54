//! Measured dimensions of an order line item.

use super::SectionType;
use serde::{Deserialize, Serialize};

/// One of the measurements an order item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionField {
    Length,
    Width,
    Height,
    Diameter,
    KeySize,
}

impl DimensionField {
    /// All fields, in form order.
    pub const ALL: [DimensionField; 5] = [
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Height,
        DimensionField::Diameter,
        DimensionField::KeySize,
    ];

    /// Field name as used in records and messages.
    pub fn name(&self) -> &'static str {
        match self {
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Height => "height",
            DimensionField::Diameter => "diameter",
            DimensionField::KeySize => "key_size",
        }
    }
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Part measurements in millimeters.
///
/// Every field is optional; which ones matter depends on the section type of
/// the stock item the part is cut from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub key_size: Option<f64>,
}

impl Dimensions {
    /// Dimensions of a sheet part.
    pub fn sheet(length: f64, width: f64, height: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Dimensions of a round bar part.
    pub fn round(diameter: f64, length: f64) -> Self {
        Self {
            diameter: Some(diameter),
            length: Some(length),
            ..Default::default()
        }
    }

    /// Dimensions of a hexagon bar part.
    pub fn hexagon(key_size: f64, length: f64) -> Self {
        Self {
            key_size: Some(key_size),
            length: Some(length),
            ..Default::default()
        }
    }

    /// Get a field, if set.
    pub fn get(&self, field: DimensionField) -> Option<f64> {
        match field {
            DimensionField::Length => self.length,
            DimensionField::Width => self.width,
            DimensionField::Height => self.height,
            DimensionField::Diameter => self.diameter,
            DimensionField::KeySize => self.key_size,
        }
    }

    /// Get a field, missing values read as zero.
    pub fn value(&self, field: DimensionField) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    /// Set or clear a field.
    pub fn set(&mut self, field: DimensionField, value: Option<f64>) {
        let slot = match field {
            DimensionField::Length => &mut self.length,
            DimensionField::Width => &mut self.width,
            DimensionField::Height => &mut self.height,
            DimensionField::Diameter => &mut self.diameter,
            DimensionField::KeySize => &mut self.key_size,
        };
        *slot = value;
    }

    /// Clear every field that the given section type does not use.
    pub fn retain_for(&mut self, section_type: SectionType) {
        for field in DimensionField::ALL {
            if !section_type.required_fields().contains(&field) {
                self.set(field, None);
            }
        }
    }

    /// Fields that are set but not used by the given section type.
    pub fn irrelevant_fields(&self, section_type: SectionType) -> Vec<DimensionField> {
        DimensionField::ALL
            .into_iter()
            .filter(|f| !section_type.required_fields().contains(f) && self.get(*f).is_some())
            .collect()
    }
}
