//! Configuration constants and settings for the calculator.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Legacy value of π used by the volume formulas.
///
/// Existing order totals were computed with this precision, do not replace it
/// with `std::f64::consts::PI`.
pub const PI_LEGACY: f64 = 3.14159;

/// Legacy value of √3 used by the hexagon formula.
pub const SQRT3_LEGACY: f64 = 1.73205;

/// Cubic millimeters in one cubic centimeter.
pub const MM3_PER_CM3: f64 = 1000.0;

/// Grams in one kilogram.
pub const G_PER_KG: f64 = 1000.0;

/// Lowest allowed order mass coefficient.
pub const COEFFICIENT_MIN: f64 = 1.0;

/// Highest allowed order mass coefficient.
pub const COEFFICIENT_MAX: f64 = 2.0;

/// Coefficient step offered by the order form.
pub const COEFFICIENT_STEP: f64 = 0.1;

/// Coefficient given to new orders.
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Default number of decimals when printing masses.
pub const DEFAULT_PRECISION: usize = 3;

/// Unit used when presenting masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MassUnit {
    Grams,
    #[default]
    Kilograms,
}

impl MassUnit {
    /// Parse unit from a CLI/config string.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(MassUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Some(MassUnit::Kilograms),
            _ => None,
        }
    }

    /// Convert a mass in grams to this unit.
    pub fn from_grams(&self, grams: f64) -> f64 {
        match self {
            MassUnit::Grams => grams,
            MassUnit::Kilograms => grams / G_PER_KG,
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MassUnit::Grams => write!(f, "g"),
            MassUnit::Kilograms => write!(f, "kg"),
        }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Unit for every printed mass.
    pub unit: MassUnit,
    /// Decimals for every printed mass.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit: MassUnit::Kilograms,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ReportConfig {
    /// Create a report configuration for the given unit.
    pub fn new(unit: MassUnit) -> Self {
        Self {
            unit,
            ..Default::default()
        }
    }

    /// Format a mass given in grams, e.g. `11.304 g` or `0.011 kg`.
    pub fn format_mass(&self, grams: f64) -> String {
        format!(
            "{:.*} {}",
            self.precision,
            self.unit.from_grams(grams),
            self.unit
        )
    }
}

/// Whether an order coefficient lies in `[COEFFICIENT_MIN, COEFFICIENT_MAX]`.
///
/// The bounds are exact, no epsilon: the coefficient scales every line weight.
pub fn coefficient_in_range(value: f64) -> bool {
    (COEFFICIENT_MIN..=COEFFICIENT_MAX).contains(&value)
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a is a whole multiple of step (within epsilon).
    #[inline]
    pub fn is_multiple_of(a: f64, step: f64) -> bool {
        let ratio = a / step;
        approx_eq(ratio, ratio.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_unit_parse() {
        assert_eq!(MassUnit::from_str_loose("KG"), Some(MassUnit::Kilograms));
        assert_eq!(MassUnit::from_str_loose(" g "), Some(MassUnit::Grams));
        assert_eq!(MassUnit::from_str_loose("lb"), None);
    }

    #[test]
    fn test_format_mass() {
        let kg = ReportConfig::default();
        assert_eq!(kg.format_mass(11_304.0), "11.304 kg");

        let g = ReportConfig {
            unit: MassUnit::Grams,
            precision: 1,
        };
        assert_eq!(g.format_mass(11.304), "11.3 g");
    }

    #[test]
    fn test_coefficient_steps() {
        assert!(float_cmp::is_multiple_of(1.2, COEFFICIENT_STEP));
        assert!(float_cmp::is_multiple_of(2.0, COEFFICIENT_STEP));
        assert!(!float_cmp::is_multiple_of(1.25, COEFFICIENT_STEP));
    }

    #[test]
    fn test_coefficient_bounds_exact() {
        assert!(coefficient_in_range(1.0));
        assert!(coefficient_in_range(2.0));
        assert!(coefficient_in_range(1.55));
        assert!(!coefficient_in_range(0.99991));
        assert!(!coefficient_in_range(2.00009));
        assert!(!coefficient_in_range(f64::NAN));
        assert!(!coefficient_in_range(f64::INFINITY));
    }
}
