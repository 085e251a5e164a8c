use serde::{Deserialize, Serialize};

use super::error::OrderFormError;

/// Category of a transient form notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// A product is unavailable in the requester's region
    OutOfStock,
    /// Duplicate product or zero quantity at submit time
    BusinessRule,
    /// Reference data or the edited order could not be loaded
    LoadFailed,
    /// The create/update request failed
    SubmitFailed,
}

/// Toast-style message shown above the order form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn out_of_stock(product_label: &str) -> Self {
        Self::new(
            NoticeKind::OutOfStock,
            format!("Product {} is out of stock in this region.", product_label),
        )
    }

    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::LoadFailed, message)
    }

    pub fn submit_failed(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::SubmitFailed, message)
    }

    /// Notice for a submit-time error; field errors are shown inline instead.
    pub fn from_error(error: &OrderFormError) -> Option<Self> {
        match error {
            OrderFormError::Fields(_) | OrderFormError::RowOutOfRange { .. } => None,
            OrderFormError::OutOfStock { product, .. } => Some(Self::out_of_stock(product)),
            OrderFormError::ZeroQuantity { .. } | OrderFormError::DuplicateProducts { .. } => {
                Some(Self::new(NoticeKind::BusinessRule, error.to_string()))
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
