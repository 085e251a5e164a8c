use super::aggregate::{Order, OrderId, OrderLine, OrderPayload};
use super::validator::ValidatedOrder;
use crate::domain::common::{AggregateId, AggregateRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

/// Whether the form creates a new order or updates an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(OrderId),
}

impl SubmitTarget {
    /// Target for the id found in the current route (`None` or "new" = create)
    pub fn from_route_id(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            None | Some("") | Some("new") => SubmitTarget::Create,
            Some(id) => OrderId::from_string(id)
                .map(SubmitTarget::Update)
                .unwrap_or(SubmitTarget::Create),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, SubmitTarget::Update(_))
    }

    pub fn method(&self) -> SubmitMethod {
        match self {
            SubmitTarget::Create => SubmitMethod::Post,
            SubmitTarget::Update(_) => SubmitMethod::Put,
        }
    }

    pub fn path(&self) -> String {
        match self {
            SubmitTarget::Create => Order::collection_path(),
            SubmitTarget::Update(id) => Order::item_path(id),
        }
    }

    /// Toast text when the request fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            SubmitTarget::Create => "Error adding order.",
            SubmitTarget::Update(_) => "Error updating order.",
        }
    }
}

impl From<ValidatedOrder> for OrderPayload {
    fn from(order: ValidatedOrder) -> Self {
        let product = order
            .lines
            .into_iter()
            .map(|line| OrderLine {
                product_id: line.product.id,
                product_name: line.product.label,
                quantity: line.quantity,
                order_type: line.order_type,
            })
            .collect();

        OrderPayload {
            product,
            order_status: order.status,
            address: order.address,
            request_from: order.requester,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductId, ProductOption};
    use crate::domain::a002_employee::EmployeeId;
    use crate::domain::a004_address::AddressId;
    use crate::domain::a005_order::aggregate::{OrderStatus, OrderType};
    use crate::domain::a005_order::validator::ValidatedLine;
    use serde_json::json;

    #[test]
    fn test_target_from_route() {
        assert_eq!(SubmitTarget::from_route_id(None), SubmitTarget::Create);
        assert_eq!(SubmitTarget::from_route_id(Some("new")), SubmitTarget::Create);
        let target = SubmitTarget::from_route_id(Some("o42"));
        assert_eq!(target, SubmitTarget::Update(OrderId::new("o42")));
        assert_eq!(target.method(), SubmitMethod::Put);
        assert_eq!(target.path(), "/orders/o42");
        assert_eq!(SubmitTarget::Create.path(), "/orders");
        assert_eq!(SubmitTarget::Create.method(), SubmitMethod::Post);
    }

    #[test]
    fn test_payload_wire_shape() {
        let validated = ValidatedOrder {
            lines: vec![ValidatedLine {
                product: ProductOption {
                    id: ProductId::new("p1"),
                    label: "Fridge".into(),
                },
                quantity: 3,
                order_type: OrderType::Asset,
            }],
            status: OrderStatus::InTransit,
            requester: EmployeeId::new("e1"),
            address: AddressId::new("a1"),
        };

        let payload = OrderPayload::from(validated);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "product": [ { "_id": "p1", "productName": "Fridge", "quantity": 3, "orderType": "ASSET" } ],
                "orderStatus": "in transit",
                "address": "a1",
                "requestFrom": "e1"
            })
        );
    }
}
