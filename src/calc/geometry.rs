//! Shape-specific part geometry.

use crate::config::{PI_LEGACY, SQRT3_LEGACY};
use crate::model::{DimensionField, Dimensions, SectionType};
use serde::{Deserialize, Serialize};

/// Geometry of one part, carrying only the dimensions its shape uses (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PartGeometry {
    /// Rectangular block cut from sheet.
    Sheet { length: f64, width: f64, height: f64 },
    /// Cylinder cut from round bar.
    Round { diameter: f64, length: f64 },
    /// Hexagonal prism cut from hex bar; `key_size` is the across-flats size.
    Hexagon { key_size: f64, length: f64 },
}

impl PartGeometry {
    /// Build the geometry for a section type, reading missing dimensions as zero.
    pub fn from_dimensions(section_type: SectionType, dims: &Dimensions) -> Self {
        let length = dims.value(DimensionField::Length);
        match section_type {
            SectionType::Sheet => PartGeometry::Sheet {
                length,
                width: dims.value(DimensionField::Width),
                height: dims.value(DimensionField::Height),
            },
            SectionType::Round => PartGeometry::Round {
                diameter: dims.value(DimensionField::Diameter),
                length,
            },
            SectionType::Hexagon => PartGeometry::Hexagon {
                key_size: dims.value(DimensionField::KeySize),
                length,
            },
        }
    }

    /// Section type this geometry belongs to.
    pub fn section_type(&self) -> SectionType {
        match self {
            PartGeometry::Sheet { .. } => SectionType::Sheet,
            PartGeometry::Round { .. } => SectionType::Round,
            PartGeometry::Hexagon { .. } => SectionType::Hexagon,
        }
    }

    /// Cross-section area in mm².
    pub fn section_area_mm2(&self) -> f64 {
        match *self {
            PartGeometry::Sheet { width, height, .. } => width * height,
            PartGeometry::Round { diameter, .. } => {
                let r = diameter / 2.0;
                PI_LEGACY * r * r
            }
            PartGeometry::Hexagon { key_size, .. } => (3.0 * SQRT3_LEGACY / 2.0) * key_size * key_size,
        }
    }

    /// Part length along the bar/sheet in mm.
    pub fn length(&self) -> f64 {
        match *self {
            PartGeometry::Sheet { length, .. }
            | PartGeometry::Round { length, .. }
            | PartGeometry::Hexagon { length, .. } => length,
        }
    }

    /// Volume in mm³.
    pub fn volume_mm3(&self) -> f64 {
        self.section_area_mm2() * self.length()
    }
}
