//! Error types for loading, resolving and editing workshop data.
//!
//! The weight calculator and the report engine never fail; these errors only
//! come from the storage side (missing records, broken references, protected
//! deletes) and from rejected edits.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes, used as process exit status by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Snapshot file not found (-1)
    FileNotFound = -1,
    /// Snapshot could not be decoded (-2)
    ParseError = -2,
    /// Snapshot could not be read or written (-3)
    Io = -3,
    /// A referenced record does not exist (E100)
    NotFound = 100,
    /// A stock item record is malformed (E101)
    InvalidStock = 101,
    /// A value was rejected by an edit (E102)
    InvalidValue = 102,
    /// No identifier left for a new record (E103)
    IdExhausted = 103,
    /// The record is still referenced (E200)
    InUse = 200,
}

/// Main error type for workshop data access.
#[derive(Debug, Error)]
pub enum FabError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order not found: id={id}")]
    OrderNotFound { id: i32 },

    #[error("Order item not found: order={order_id}, item={item_id}")]
    OrderItemNotFound { order_id: i32, item_id: i32 },

    #[error("Material reference not found: Material={id}")]
    MaterialNotFound { id: i32 },

    #[error("Stock item reference not found: StockItem={id}")]
    StockItemNotFound { id: i32 },

    #[error("Part name reference not found: PartName={id}")]
    PartNameNotFound { id: i32 },

    #[error("Stock item {id}: unknown section type '{section_type}'")]
    InvalidSectionType { id: i32, section_type: String },

    #[error("Stock item {id}: '{field}' must be a positive number for section type {section_type}")]
    InvalidStockDimension {
        id: i32,
        section_type: String,
        field: String,
    },

    #[error("Coefficient {value} is outside the allowed range [{min}, {max}]")]
    InvalidCoefficient { value: f64, min: f64, max: f64 },

    #[error("No free {kind} id left after {last}")]
    IdExhausted { kind: &'static str, last: i32 },

    #[error("Material {id} is referenced by {count} record(s)")]
    MaterialInUse { id: i32, count: usize },

    #[error("Stock item {id} is referenced by {count} order item(s)")]
    StockItemInUse { id: i32, count: usize },

    #[error("Part name {id} is referenced by {count} order item(s)")]
    PartNameInUse { id: i32, count: usize },
}

impl FabError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FabError::FileNotFound { .. } => ErrorCode::FileNotFound,
            FabError::Io(_) => ErrorCode::Io,
            FabError::Json(_) => ErrorCode::ParseError,
            FabError::OrderNotFound { .. }
            | FabError::OrderItemNotFound { .. }
            | FabError::MaterialNotFound { .. }
            | FabError::StockItemNotFound { .. }
            | FabError::PartNameNotFound { .. } => ErrorCode::NotFound,
            FabError::InvalidSectionType { .. } | FabError::InvalidStockDimension { .. } => {
                ErrorCode::InvalidStock
            }
            FabError::InvalidCoefficient { .. } => ErrorCode::InvalidValue,
            FabError::IdExhausted { .. } => ErrorCode::IdExhausted,
            FabError::MaterialInUse { .. }
            | FabError::StockItemInUse { .. }
            | FabError::PartNameInUse { .. } => ErrorCode::InUse,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for workshop operations.
pub type Result<T> = std::result::Result<T, FabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(FabError::OrderNotFound { id: 3 }.code(), ErrorCode::NotFound);
        assert_eq!(
            FabError::MaterialInUse { id: 1, count: 2 }.code_value(),
            200
        );
        assert_eq!(
            FabError::FileNotFound {
                path: PathBuf::from("x.json")
            }
            .code_value(),
            -1
        );
    }

    #[test]
    fn test_io_error_code() {
        let err = FabError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.code(), ErrorCode::Io);
        assert_eq!(err.code_value(), -3);
        assert_eq!(
            FabError::IdExhausted {
                kind: "material",
                last: i32::MAX
            }
            .code_value(),
            103
        );
    }

    #[test]
    fn test_error_messages() {
        let err = FabError::InvalidStockDimension {
            id: 4,
            section_type: "round".to_string(),
            field: "diameter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stock item 4: 'diameter' must be a positive number for section type round"
        );
    }
}
