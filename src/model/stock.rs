//! Stock catalog: cross-section types and the stock items available in the shop.

use super::{DimensionField, Material};
use serde::{Deserialize, Serialize};

/// Cross-section shape of raw stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Flat sheet/plate.
    Sheet,
    /// Round bar.
    Round,
    /// Hexagon bar.
    Hexagon,
}

impl SectionType {
    /// All section types, in report order.
    pub const ALL: [SectionType; 3] = [SectionType::Sheet, SectionType::Round, SectionType::Hexagon];

    /// Parse the stored section type string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sheet" => Some(SectionType::Sheet),
            "round" => Some(SectionType::Round),
            "hexagon" => Some(SectionType::Hexagon),
            _ => None,
        }
    }

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Sheet => "sheet",
            SectionType::Round => "round",
            SectionType::Hexagon => "hexagon",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Sheet => "Sheet",
            SectionType::Round => "Round",
            SectionType::Hexagon => "Hexagon",
        }
    }

    /// Part dimensions a line item needs when cut from this section type.
    pub fn required_fields(&self) -> &'static [DimensionField] {
        match self {
            SectionType::Sheet => &[
                DimensionField::Length,
                DimensionField::Width,
                DimensionField::Height,
            ],
            SectionType::Round => &[DimensionField::Diameter, DimensionField::Length],
            SectionType::Hexagon => &[DimensionField::KeySize, DimensionField::Length],
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cross-section of a stock item with the one dimension that describes it (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section_type", rename_all = "lowercase")]
pub enum SectionProfile {
    Sheet { width: f64 },
    Round { diameter: f64 },
    Hexagon { key_size: f64 },
}

impl SectionProfile {
    /// Section type of this profile.
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionProfile::Sheet { .. } => SectionType::Sheet,
            SectionProfile::Round { .. } => SectionType::Round,
            SectionProfile::Hexagon { .. } => SectionType::Hexagon,
        }
    }

    /// The characteristic dimension (width, diameter or key size).
    pub fn dimension(&self) -> f64 {
        match *self {
            SectionProfile::Sheet { width } => width,
            SectionProfile::Round { diameter } => diameter,
            SectionProfile::Hexagon { key_size } => key_size,
        }
    }

    /// Name of the characteristic dimension field.
    pub fn dimension_field(&self) -> &'static str {
        match self {
            SectionProfile::Sheet { .. } => "width",
            SectionProfile::Round { .. } => "diameter",
            SectionProfile::Hexagon { .. } => "key_size",
        }
    }
}

impl std::fmt::Display for SectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SectionProfile::Sheet { width } => write!(f, "Sheet {} mm", width),
            SectionProfile::Round { diameter } => write!(f, "Round Ø{} mm", diameter),
            SectionProfile::Hexagon { key_size } => write!(f, "Hexagon S{} mm", key_size),
        }
    }
}

/// Catalog entry of raw stock available in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stock item identifier.
    pub id: i32,
    /// Material the stock is made of.
    pub material: Material,
    /// Cross-section and its dimension.
    pub profile: SectionProfile,
}

impl StockItem {
    /// Create a new stock item.
    pub fn new(id: i32, material: Material, profile: SectionProfile) -> Self {
        Self {
            id,
            material,
            profile,
        }
    }

    /// Section type of this stock item.
    pub fn section_type(&self) -> SectionType {
        self.profile.section_type()
    }

    /// Display label, e.g. "Steel 45 - Round Ø20 mm".
    pub fn label(&self) -> String {
        format!("{} - {}", self.material.name, self.profile)
    }
}

impl std::fmt::Display for StockItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
