use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;
use crate::domain::common::AggregateRoot;

crate::string_id!(
    /// Regional manager id
    RegionalManagerId
);

/// Regional manager with the stock available in the managed region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalManager {
    #[serde(rename = "_id")]
    pub id: RegionalManagerId,

    #[serde(default)]
    pub name: Option<String>,

    pub region: Region,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "product", alias = "products", default)]
    pub products: Vec<RegionProduct>,
}

/// Stock ceiling of one product within a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProduct {
    #[serde(rename = "_id", alias = "productId")]
    pub product_id: ProductId,

    pub quantity: i64,
}

impl AggregateRoot for RegionalManager {
    type Id = RegionalManagerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.0.as_str())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "regional-manager"
    }

    fn element_name() -> &'static str {
        "Regional manager"
    }

    fn list_name() -> &'static str {
        "Regional managers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_shape() {
        let rm: RegionalManager = serde_json::from_value(json!({
            "_id": "rm1",
            "region": { "product": [ { "_id": "p1", "quantity": 0 }, { "_id": "p2", "quantity": 7 } ] }
        }))
        .unwrap();
        assert_eq!(rm.region.products.len(), 2);
        assert_eq!(rm.region.products[1].product_id, ProductId::new("p2"));
        assert_eq!(rm.region.products[1].quantity, 7);
    }

    #[test]
    fn test_deserialize_alternate_spelling() {
        let rm: RegionalManager = serde_json::from_value(json!({
            "_id": "rm1",
            "region": { "products": [ { "productId": "p1", "quantity": 3 } ] }
        }))
        .unwrap();
        assert_eq!(rm.region.products[0].product_id, ProductId::new("p1"));
    }
}
