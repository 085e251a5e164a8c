use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, LookupItem};

crate::string_id!(
    /// Delivery address id
    AddressId
);

/// Delivery address (reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: AddressId,

    #[serde(rename = "addressDetails")]
    pub address_details: String,
}

impl AggregateRoot for Address {
    type Id = AddressId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.address_details
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "address"
    }

    fn element_name() -> &'static str {
        "Address"
    }

    fn list_name() -> &'static str {
        "Addresses"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressOption {
    pub id: AddressId,
    pub label: String,
}

impl From<&Address> for AddressOption {
    fn from(a: &Address) -> Self {
        Self {
            id: a.id.clone(),
            label: a.address_details.clone(),
        }
    }
}

impl From<Address> for AddressOption {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            label: a.address_details,
        }
    }
}

impl LookupItem for AddressOption {
    type Id = AddressId;

    fn lookup_id(&self) -> &AddressId {
        &self.id
    }

    fn lookup_label(&self) -> &str {
        &self.label
    }
}
