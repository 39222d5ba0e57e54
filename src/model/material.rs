//! Material and part-name reference data.

use serde::{Deserialize, Serialize};

/// Raw material grade with its density.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material identifier.
    pub id: i32,
    /// Grade name (e.g. "Steel 45", "AMg6").
    pub name: String,
    /// Density in g/cm³.
    pub density: f64,
}

impl Material {
    /// Create a new material.
    pub fn new(id: i32, name: impl Into<String>, density: f64) -> Self {
        Self {
            id,
            name: name.into(),
            density,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Catalog name of a part (e.g. "Flange", "Bushing").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartName {
    /// Part name identifier.
    pub id: i32,
    /// Display name, unique within the catalog.
    pub name: String,
}

impl PartName {
    /// Create a new part name.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
