use thiserror::Error;

use crate::domain::a001_product::ProductId;
use crate::domain::a003_regional_manager::RegionalManagerId;
use crate::domain::common::FieldErrors;

/// Reasons the order form refuses an edit or a submission.
///
/// `Display` renders the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFormError {
    /// Schema-level failures, shown inline next to each field
    #[error("{0}")]
    Fields(FieldErrors),

    #[error("Error: Product quantity cannot be zero.")]
    ZeroQuantity { dropped_rows: usize },

    #[error("Error: Duplicate product entries found.")]
    DuplicateProducts { product_ids: Vec<ProductId> },

    #[error("Product {product} is out of stock in this region.")]
    OutOfStock { row: usize, product: String },

    #[error("Row {index} does not exist (draft has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Reference data inconsistencies met while resolving stock ceilings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("Regional manager {0} not found in reference data")]
    UnknownRegionalManager(RegionalManagerId),
}

/// Unknown enum spelling in a select value or wire field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown order status: {0}")]
    OrderStatus(String),

    #[error("Unknown order type: {0}")]
    OrderType(String),
}
