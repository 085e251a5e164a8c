use serde::{Deserialize, Serialize};

use super::AggregateId;

/// Reference data that can back a selection control.
pub trait LookupItem {
    type Id: AggregateId;

    fn lookup_id(&self) -> &Self::Id;
    fn lookup_label(&self) -> &str;
}

/// Generic `{value, label}` pair for plain `<select>` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn from_item<T: LookupItem>(item: &T) -> Self {
        Self::new(item.lookup_id().as_string(), item.lookup_label())
    }
}
