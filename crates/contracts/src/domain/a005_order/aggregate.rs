use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseError;
use crate::domain::a001_product::ProductId;
use crate::domain::a002_employee::{Employee, EmployeeId};
use crate::domain::a004_address::{Address, AddressId};
use crate::domain::common::AggregateRoot;

crate::string_id!(
    /// Order id
    OrderId
);

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "dispatched")]
    Dispatched,
    #[serde(rename = "in transit")]
    InTransit,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "rejected")]
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Dispatched,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Rejected,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Dispatched => "dispatched",
            OrderStatus::InTransit => "in transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// UI label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::OrderStatus(s.to_string()))
    }
}

/// Kind of order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "ASSET")]
    Asset,
    #[serde(rename = "POSM")]
    Posm,
}

impl OrderType {
    pub const ALL: [OrderType; 2] = [OrderType::Asset, OrderType::Posm];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Asset => "ASSET",
            OrderType::Posm => "POSM",
        }
    }
}

impl FromStr for OrderType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::OrderType(s.to_string()))
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// One product line as sent to and returned by `/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "_id")]
    pub product_id: ProductId,

    #[serde(rename = "productName")]
    pub product_name: String,

    pub quantity: i64,

    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

/// Body of `POST /orders` and `PUT /orders/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub product: Vec<OrderLine>,

    #[serde(rename = "orderStatus")]
    pub order_status: OrderStatus,

    pub address: AddressId,

    #[serde(rename = "requestFrom")]
    pub request_from: EmployeeId,
}

/// Order as returned by `GET /orders/:id` (references populated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,

    #[serde(default)]
    pub product: Vec<OrderLine>,

    #[serde(rename = "orderStatus")]
    pub order_status: OrderStatus,

    #[serde(rename = "requestFrom")]
    pub request_from: Employee,

    pub address: Address,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Order {
    pub fn total_quantity(&self) -> i64 {
        self.product.iter().map(|line| line.quantity).sum()
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.id.0
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_value(OrderStatus::InTransit).unwrap(),
            json!("in transit")
        );
        assert_eq!("in transit".parse::<OrderStatus>(), Ok(OrderStatus::InTransit));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_deserialize() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "product": [
                { "_id": "p1", "productName": "Fridge", "quantity": 2, "orderType": "ASSET" },
                { "_id": "p2", "productName": "Banner", "quantity": 5, "orderType": "POSM" }
            ],
            "orderStatus": "approved",
            "requestFrom": { "_id": "e1", "employeeName": "Asha", "regionalManager": "rm1" },
            "address": { "_id": "a1", "addressDetails": "12 Mill Road" }
        }))
        .unwrap();

        assert_eq!(order.order_status, OrderStatus::Approved);
        assert_eq!(order.product[1].order_type, OrderType::Posm);
        assert_eq!(order.total_quantity(), 7);
        assert_eq!(Order::item_path(&order.id), "/orders/o1");
    }
}
