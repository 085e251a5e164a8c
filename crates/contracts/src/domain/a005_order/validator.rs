use std::collections::HashSet;

use super::aggregate::{OrderStatus, OrderType};
use super::draft::{OrderDraft, Quantity};
use super::error::OrderFormError;
use crate::domain::a001_product::{ProductId, ProductOption};
use crate::domain::a002_employee::EmployeeId;
use crate::domain::a004_address::AddressId;
use crate::domain::common::FieldErrors;

/// Row that passed every submit-time rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLine {
    pub product: ProductOption,
    pub quantity: i64,
    pub order_type: OrderType,
}

/// Draft that passed every submit-time rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub lines: Vec<ValidatedLine>,
    pub status: OrderStatus,
    pub requester: EmployeeId,
    pub address: AddressId,
}

pub fn row_field(index: usize, field: &str) -> String {
    format!("rows[{}].{}", index, field)
}

/// Required-field rules for rows, status, requester and address.
pub fn schema_errors(draft: &OrderDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.rows.is_empty() {
        errors.add("rows", "Please select at least one product");
    }

    for (index, row) in draft.rows.iter().enumerate() {
        if row.product.is_none() {
            errors.add(row_field(index, "product"), "Please select a product");
        }
        match row.quantity {
            Quantity::NotANumber => errors.add(
                row_field(index, "quantity"),
                "Please enter quantity and it must be a number.",
            ),
            Quantity::Value(q) if q < 0 => errors.add(
                row_field(index, "quantity"),
                "Quantity must be greater than zero",
            ),
            Quantity::Value(_) => {}
        }
        if row.order_type.is_none() {
            errors.add(row_field(index, "orderType"), "Please select order type");
        }
    }

    if draft.status.is_none() {
        errors.add("status", "Order Status can't be empty.");
    }
    if draft.requester.is_none() {
        errors.add("requester", "Request from can't be empty.");
    }
    if draft.address.is_none() {
        errors.add("address", "Please select an address.");
    }

    errors
}

/// Runs the submit-time rules in order, stopping at the first failing one:
///
/// 1. required fields (rows, status, requester, address)
/// 2. rows with quantity <= 0 are dropped; any drop fails the submission
/// 3. product ids must be pairwise distinct
pub fn validate(draft: &OrderDraft) -> Result<ValidatedOrder, OrderFormError> {
    schema_errors(draft)
        .into_result()
        .map_err(OrderFormError::Fields)?;

    let lines: Vec<ValidatedLine> = draft
        .rows
        .iter()
        .filter_map(|row| match (&row.product, row.quantity, row.order_type) {
            (Some(product), Quantity::Value(q), Some(order_type)) if q > 0 => Some(ValidatedLine {
                product: product.clone(),
                quantity: q,
                order_type,
            }),
            _ => None,
        })
        .collect();

    if lines.len() != draft.rows.len() {
        return Err(OrderFormError::ZeroQuantity {
            dropped_rows: draft.rows.len() - lines.len(),
        });
    }

    let mut seen: HashSet<&ProductId> = HashSet::new();
    let mut duplicates: Vec<ProductId> = Vec::new();
    for line in &lines {
        if !seen.insert(&line.product.id) && !duplicates.contains(&line.product.id) {
            duplicates.push(line.product.id.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(OrderFormError::DuplicateProducts {
            product_ids: duplicates,
        });
    }

    // schema_errors guarantees these are set
    let (Some(status), Some(requester), Some(address)) =
        (draft.status, draft.requester.as_ref(), draft.address.as_ref())
    else {
        return Err(OrderFormError::Fields(schema_errors(draft)));
    };

    Ok(ValidatedOrder {
        lines,
        status,
        requester: requester.id.clone(),
        address: address.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_employee::RequesterOption;
    use crate::domain::a003_regional_manager::RegionalManagerId;
    use crate::domain::a004_address::AddressOption;
    use crate::domain::a005_order::draft::OrderRow;

    fn product(id: &str) -> ProductOption {
        ProductOption {
            id: ProductId::new(id),
            label: id.to_uppercase(),
        }
    }

    fn draft_with(rows: Vec<OrderRow>) -> OrderDraft {
        OrderDraft {
            rows,
            status: Some(OrderStatus::Pending),
            requester: Some(RequesterOption {
                id: EmployeeId::new("e1"),
                label: "Asha".into(),
                regional_manager: RegionalManagerId::new("rm1"),
            }),
            address: Some(AddressOption {
                id: AddressId::new("a1"),
                label: "12 Mill Road".into(),
            }),
        }
    }

    #[test]
    fn test_valid_draft() {
        let draft = draft_with(vec![
            OrderRow::new(product("p1"), 2, OrderType::Asset),
            OrderRow::new(product("p2"), 1, OrderType::Posm),
        ]);
        let validated = validate(&draft).unwrap();
        assert_eq!(validated.lines.len(), 2);
        assert_eq!(validated.requester, EmployeeId::new("e1"));
        assert_eq!(validated.status, OrderStatus::Pending);
    }

    #[test]
    fn test_missing_row_fields_block_submission() {
        let mut draft = draft_with(vec![OrderRow::new(product("p1"), 2, OrderType::Asset)]);
        draft.add_row();

        let Err(OrderFormError::Fields(errors)) = validate(&draft) else {
            panic!("expected field errors");
        };
        assert_eq!(errors.get("rows[1].product"), Some("Please select a product"));
        assert_eq!(errors.get("rows[1].orderType"), Some("Please select order type"));
        assert!(!errors.contains("rows[0].product"));
    }

    #[test]
    fn test_not_a_number_and_negative_quantity() {
        let mut nan = OrderRow::new(product("p1"), 1, OrderType::Asset);
        nan.quantity = Quantity::NotANumber;
        let negative = OrderRow::new(product("p2"), -1, OrderType::Asset);
        let draft = draft_with(vec![nan, negative]);

        let Err(OrderFormError::Fields(errors)) = validate(&draft) else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.get("rows[0].quantity"),
            Some("Please enter quantity and it must be a number.")
        );
        assert_eq!(errors.get("rows[1].quantity"), Some("Quantity must be greater than zero"));
    }

    #[test]
    fn test_header_fields_required() {
        let mut draft = draft_with(vec![OrderRow::new(product("p1"), 2, OrderType::Asset)]);
        draft.status = None;
        draft.requester = None;
        draft.address = None;

        let Err(OrderFormError::Fields(errors)) = validate(&draft) else {
            panic!("expected field errors");
        };
        assert!(errors.contains("status"));
        assert!(errors.contains("requester"));
        assert!(errors.contains("address"));
    }

    #[test]
    fn test_empty_rows_rejected() {
        let draft = draft_with(vec![]);
        let Err(OrderFormError::Fields(errors)) = validate(&draft) else {
            panic!("expected field errors");
        };
        assert!(errors.contains("rows"));
    }

    #[test]
    fn test_zero_quantity_row_rejects_submission() {
        let draft = draft_with(vec![OrderRow::new(product("p1"), 0, OrderType::Asset)]);
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, OrderFormError::ZeroQuantity { dropped_rows: 1 });
        assert_eq!(err.to_string(), "Error: Product quantity cannot be zero.");
    }

    #[test]
    fn test_duplicate_products_rejected_even_with_different_types() {
        let draft = draft_with(vec![
            OrderRow::new(product("p1"), 2, OrderType::Asset),
            OrderRow::new(product("p1"), 1, OrderType::Posm),
        ]);
        let err = validate(&draft).unwrap_err();
        assert_eq!(
            err,
            OrderFormError::DuplicateProducts {
                product_ids: vec![ProductId::new("p1")]
            }
        );
        assert_eq!(err.to_string(), "Error: Duplicate product entries found.");
    }

    #[test]
    fn test_zero_quantity_checked_before_duplicates() {
        let draft = draft_with(vec![
            OrderRow::new(product("p1"), 2, OrderType::Asset),
            OrderRow::new(product("p1"), 0, OrderType::Asset),
        ]);
        assert!(matches!(
            validate(&draft),
            Err(OrderFormError::ZeroQuantity { dropped_rows: 1 })
        ));
    }
}
