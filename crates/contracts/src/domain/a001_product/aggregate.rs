use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, LookupItem};

crate::string_id!(
    /// Product id as issued by the back office
    ProductId
);

/// Orderable product (reference data, read only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,

    #[serde(rename = "productName")]
    pub product_name: String,
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.product_name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

/// Product as shown in the order form's product selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: ProductId,
    pub label: String,
}

impl From<&Product> for ProductOption {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            label: p.product_name.clone(),
        }
    }
}

impl LookupItem for ProductOption {
    type Id = ProductId;

    fn lookup_id(&self) -> &ProductId {
        &self.id
    }

    fn lookup_label(&self) -> &str {
        &self.label
    }
}
