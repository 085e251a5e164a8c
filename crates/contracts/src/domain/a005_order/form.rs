use super::aggregate::{Order, OrderPayload, OrderStatus, OrderType};
use super::catalog::Catalog;
use super::draft::{OrderDraft, Quantity, RequesterChange};
use super::error::OrderFormError;
use super::notice::{Notice, NoticeKind};
use super::stock::{resolve_ceilings, StockCeilingMap};
use super::submission::SubmitTarget;
use super::validator::{row_field, schema_errors, validate};
use crate::domain::a001_product::{Product, ProductId};
use crate::domain::a002_employee::{Employee, EmployeeId};
use crate::domain::a003_regional_manager::RegionalManager;
use crate::domain::a004_address::{Address, AddressId};
use crate::domain::common::FieldErrors;

pub const REFERENCE_LOAD_FAILED: &str = "Error fetching dropdown data.";
pub const ADDRESS_LOAD_FAILED: &str = "Error fetching addresses.";
pub const ORDER_LOAD_FAILED: &str = "Error fetching order details.";

/// State of one order form session.
///
/// The ceiling map lives here as a plain value and is handed to every row
/// edit; it only changes when a requester is committed. The notice is
/// recomputed after every edit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub target: SubmitTarget,
    pub catalog: Catalog,
    pub draft: OrderDraft,
    pub ceilings: Option<StockCeilingMap>,
    pub notice: Option<Notice>,
    pub field_errors: FieldErrors,
    /// Set by the first submit attempt; from then on field errors follow edits
    pub submit_attempted: bool,
}

impl OrderForm {
    pub fn new(target: SubmitTarget) -> Self {
        Self {
            target,
            catalog: Catalog::new(),
            draft: OrderDraft::new(),
            ceilings: None,
            notice: None,
            field_errors: FieldErrors::new(),
            submit_attempted: false,
        }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    pub fn set_reference_data(
        &mut self,
        products: Vec<Product>,
        employees: Vec<Employee>,
        regional_managers: Vec<RegionalManager>,
    ) {
        self.catalog
            .set_reference_data(products, employees, regional_managers);
        if self.ceilings.is_none() {
            self.refresh_ceilings();
            self.refresh_stock_notice();
        }
    }

    pub fn reference_data_failed(&mut self) {
        self.notice = Some(Notice::load_failed(REFERENCE_LOAD_FAILED));
    }

    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.catalog.set_addresses(addresses);
    }

    pub fn addresses_failed(&mut self) {
        self.notice = Some(Notice::load_failed(ADDRESS_LOAD_FAILED));
    }

    /// Replaces the draft with an existing order being edited.
    pub fn load_order(&mut self, order: &Order) {
        self.draft = OrderDraft::from_order(order);
        self.ceilings = None;
        self.refresh_ceilings();
        self.refresh_stock_notice();
    }

    pub fn order_load_failed(&mut self) {
        self.notice = Some(Notice::load_failed(ORDER_LOAD_FAILED));
    }

    /// Computes the ceilings of an already chosen requester once the
    /// regional managers are known.
    fn refresh_ceilings(&mut self) {
        let Some(requester) = self.draft.requester.as_ref() else {
            return;
        };
        if !self.catalog.is_loaded() {
            return;
        }
        match resolve_ceilings(requester, &self.catalog.regional_managers) {
            Ok(map) => self.ceilings = Some(map),
            Err(e) => log::error!("order form: {}", e),
        }
    }

    /// Stock notice for freshly loaded data; load failures stay visible
    fn refresh_stock_notice(&mut self) {
        match self.draft.stock_notice(self.ceilings.as_ref()) {
            Some(notice) => self.notice = Some(notice),
            None => {
                if self.notice.as_ref().map(|n| n.kind) == Some(NoticeKind::OutOfStock) {
                    self.notice = None;
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    fn after_edit(&mut self, notice: Option<Notice>) {
        self.notice = notice;
        if self.submit_attempted {
            self.field_errors = schema_errors(&self.draft);
        }
    }

    fn report_edit_error(&self, error: OrderFormError) {
        log::error!("order form edit ignored: {}", error);
    }

    pub fn add_row(&mut self) {
        self.draft.add_row();
        let notice = self.draft.stock_notice(self.ceilings.as_ref());
        self.after_edit(notice);
    }

    pub fn remove_row(&mut self, index: usize) {
        let notice = self.draft.remove_row(index, self.ceilings.as_ref());
        self.after_edit(notice);
    }

    pub fn set_product(&mut self, index: usize, product_id: Option<&ProductId>) {
        let product = product_id.and_then(|id| self.catalog.product(id)).cloned();
        if product_id.is_some() && product.is_none() {
            log::warn!("order form: unknown product {:?}", product_id);
            return;
        }
        match self
            .draft
            .set_product(index, product, self.ceilings.as_ref())
        {
            Ok(notice) => self.after_edit(notice),
            Err(e) => self.report_edit_error(e),
        }
    }

    /// Quantity straight from the input field
    pub fn set_quantity(&mut self, index: usize, input: &str) {
        match self
            .draft
            .set_quantity(index, Quantity::parse(input), self.ceilings.as_ref())
        {
            Ok(notice) => self.after_edit(notice),
            Err(e) => self.report_edit_error(e),
        }
    }

    pub fn set_order_type(&mut self, index: usize, order_type: Option<OrderType>) {
        match self.draft.set_order_type(index, order_type) {
            Ok(()) => {
                let notice = self.notice.clone();
                self.after_edit(notice);
            }
            Err(e) => self.report_edit_error(e),
        }
    }

    pub fn set_status(&mut self, status: Option<OrderStatus>) {
        self.draft.set_status(status);
        let notice = self.notice.clone();
        self.after_edit(notice);
    }

    pub fn set_address(&mut self, address_id: Option<&AddressId>) {
        let address = address_id.and_then(|id| self.catalog.address(id)).cloned();
        self.draft.set_address(address);
        let notice = self.notice.clone();
        self.after_edit(notice);
    }

    /// Selects (or clears) the requester; see [`OrderDraft::select_requester`].
    pub fn select_requester(&mut self, requester_id: Option<&EmployeeId>) {
        let Some(id) = requester_id else {
            self.draft.clear_requester();
            self.ceilings = None;
            self.after_edit(None);
            return;
        };
        let Some(requester) = self.catalog.requester(id).cloned() else {
            log::warn!("order form: unknown requester {}", id);
            return;
        };

        match self
            .draft
            .select_requester(requester, &self.catalog.regional_managers)
        {
            Ok(RequesterChange::Committed(map)) => {
                self.ceilings = Some(map);
                let notice = self.draft.stock_notice(self.ceilings.as_ref());
                self.after_edit(notice);
            }
            Ok(RequesterChange::RolledBack(notice)) => self.after_edit(Some(notice)),
            Err(e) => log::error!("order form: {}", e),
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Ceiling for the product of a row, used as the quantity input's max
    pub fn max_quantity(&self, index: usize) -> Option<i64> {
        let product = self.draft.rows.get(index)?.product.as_ref()?;
        self.ceilings.as_ref()?.ceiling(&product.id)
    }

    /// First inline error of a row (product, then quantity, then order type)
    pub fn row_error(&self, index: usize) -> Option<&str> {
        ["product", "quantity", "orderType"]
            .iter()
            .find_map(|field| self.field_errors.get(&row_field(index, field)))
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field)
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Validates the draft and shapes the request body.
    ///
    /// On failure the field errors or the notice are updated and `None` is
    /// returned; nothing may be sent.
    pub fn prepare_submit(&mut self) -> Option<OrderPayload> {
        self.submit_attempted = true;
        match validate(&self.draft) {
            Ok(validated) => {
                self.field_errors = FieldErrors::new();
                self.notice = None;
                Some(OrderPayload::from(validated))
            }
            Err(OrderFormError::Fields(errors)) => {
                self.field_errors = errors;
                None
            }
            Err(e) => {
                self.field_errors = FieldErrors::new();
                self.notice = Notice::from_error(&e);
                None
            }
        }
    }

    /// The create/update request failed; the draft stays for a retry.
    pub fn submit_failed(&mut self) {
        self.notice = Some(Notice::submit_failed(self.target.failure_message()));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_regional_manager::{Region, RegionProduct, RegionalManagerId};
    use crate::domain::a005_order::OrderId;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            product_name: id.to_uppercase(),
        }
    }

    fn employee(id: &str, rm: &str) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            employee_name: id.to_string(),
            regional_manager: RegionalManagerId::new(rm),
        }
    }

    fn manager(id: &str, stock: &[(&str, i64)]) -> RegionalManager {
        RegionalManager {
            id: RegionalManagerId::new(id),
            name: None,
            region: Region {
                name: None,
                products: stock
                    .iter()
                    .map(|(p, q)| RegionProduct {
                        product_id: ProductId::new(*p),
                        quantity: *q,
                    })
                    .collect(),
            },
        }
    }

    fn loaded_form() -> OrderForm {
        let mut form = OrderForm::new(SubmitTarget::Create);
        form.set_reference_data(
            vec![product("p1"), product("p2")],
            vec![employee("e1", "rm1"), employee("e2", "rm2")],
            vec![
                manager("rm1", &[("p1", 0), ("p2", 10)]),
                manager("rm2", &[("p1", 3), ("p2", 10)]),
            ],
        );
        form.set_addresses(vec![Address {
            id: AddressId::new("a1"),
            address_details: "12 Mill Road".into(),
        }]);
        form
    }

    fn fill_header(form: &mut OrderForm) {
        form.set_status(Some(OrderStatus::Pending));
        form.set_address(Some(&AddressId::new("a1")));
    }

    #[test]
    fn test_happy_path_payload() {
        let mut form = loaded_form();
        fill_header(&mut form);
        form.select_requester(Some(&EmployeeId::new("e1")));
        form.set_product(0, Some(&ProductId::new("p2")));
        form.set_quantity(0, "4");
        form.set_order_type(0, Some(OrderType::Posm));

        assert_eq!(form.max_quantity(0), Some(10));
        let payload = form.prepare_submit().expect("payload");
        assert_eq!(payload.product.len(), 1);
        assert_eq!(payload.product[0].quantity, 4);
        assert_eq!(payload.request_from, EmployeeId::new("e1"));
        assert_eq!(form.notice, None);
    }

    #[test]
    fn test_out_of_stock_product_cleared_with_notice() {
        let mut form = loaded_form();
        form.select_requester(Some(&EmployeeId::new("e1")));
        form.set_product(0, Some(&ProductId::new("p1")));

        assert_eq!(form.draft.rows[0].product, None);
        let notice = form.notice.clone().expect("notice");
        assert_eq!(notice.kind, NoticeKind::OutOfStock);
        assert_eq!(notice.message, "Product P1 is out of stock in this region.");

        form.set_product(0, Some(&ProductId::new("p2")));
        assert_eq!(form.notice, None);
    }

    #[test]
    fn test_requester_change_rolled_back_keeps_previous_ceilings() {
        let mut form = loaded_form();
        form.select_requester(Some(&EmployeeId::new("e2")));
        form.set_product(0, Some(&ProductId::new("p1")));
        assert_eq!(form.max_quantity(0), Some(3));

        form.select_requester(Some(&EmployeeId::new("e1")));
        assert_eq!(
            form.draft.requester.as_ref().map(|r| r.id.clone()),
            Some(EmployeeId::new("e2"))
        );
        assert_eq!(form.max_quantity(0), Some(3));
        assert!(form.notice.is_some());
    }

    #[test]
    fn test_quantity_edit_clears_notice() {
        let mut form = loaded_form();
        form.select_requester(Some(&EmployeeId::new("e1")));
        form.set_product(0, Some(&ProductId::new("p1")));
        assert!(form.notice.is_some());

        form.set_quantity(0, "2");
        assert_eq!(form.notice, None);
    }

    #[test]
    fn test_missing_fields_never_produce_payload() {
        let mut form = loaded_form();
        assert!(form.prepare_submit().is_none());
        assert_eq!(form.row_error(0), Some("Please select a product"));
        assert!(form.field_error("requester").is_some());

        // errors follow edits once a submit was attempted
        form.set_product(0, Some(&ProductId::new("p2")));
        assert_eq!(form.row_error(0), Some("Please select order type"));
    }

    #[test]
    fn test_business_rule_failures_become_notices() {
        let mut form = loaded_form();
        fill_header(&mut form);
        form.select_requester(Some(&EmployeeId::new("e2")));
        form.set_product(0, Some(&ProductId::new("p1")));
        form.set_order_type(0, Some(OrderType::Asset));
        form.set_quantity(0, "0");

        assert!(form.prepare_submit().is_none());
        assert_eq!(
            form.notice.as_ref().map(|n| n.message.as_str()),
            Some("Error: Product quantity cannot be zero.")
        );

        form.set_quantity(0, "2");
        form.add_row();
        form.set_product(1, Some(&ProductId::new("p1")));
        form.set_order_type(1, Some(OrderType::Posm));
        form.set_quantity(1, "1");
        assert!(form.prepare_submit().is_none());
        assert_eq!(
            form.notice.as_ref().map(|n| n.message.as_str()),
            Some("Error: Duplicate product entries found.")
        );
        assert_eq!(form.draft.rows.len(), 2);
    }

    #[test]
    fn test_load_order_for_edit() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "_id": "o1",
            "product": [ { "_id": "p1", "productName": "P1", "quantity": 2, "orderType": "ASSET" } ],
            "orderStatus": "dispatched",
            "requestFrom": { "_id": "e2", "employeeName": "e2", "regionalManager": "rm2" },
            "address": { "_id": "a1", "addressDetails": "12 Mill Road" }
        }))
        .unwrap();

        let mut form = OrderForm::new(SubmitTarget::Update(OrderId::new("o1")));
        form.load_order(&order);
        assert!(form.ceilings.is_none());

        form.set_reference_data(
            vec![product("p1")],
            vec![employee("e2", "rm2")],
            vec![manager("rm2", &[("p1", 3)])],
        );
        assert_eq!(form.max_quantity(0), Some(3));
        assert_eq!(form.draft.status, Some(OrderStatus::Dispatched));
        assert!(form.prepare_submit().is_some());
    }

    #[test]
    fn test_loaded_order_with_unavailable_product_shows_notice() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "_id": "o2",
            "product": [
                { "_id": "p2", "productName": "P2", "quantity": 1, "orderType": "POSM" },
                { "_id": "p1", "productName": "P1", "quantity": 2, "orderType": "ASSET" }
            ],
            "orderStatus": "pending",
            "requestFrom": { "_id": "e1", "employeeName": "e1", "regionalManager": "rm1" },
            "address": { "_id": "a1", "addressDetails": "12 Mill Road" }
        }))
        .unwrap();

        let mut form = loaded_form();
        form.addresses_failed();
        form.load_order(&order);
        assert_eq!(
            form.notice.as_ref().map(|n| n.message.as_str()),
            Some("Product P1 is out of stock in this region.")
        );

        // Reference data arriving after the order derives the same notice
        let mut late = OrderForm::new(SubmitTarget::Update(OrderId::new("o2")));
        late.load_order(&order);
        assert!(late.notice.is_none());
        late.set_reference_data(
            vec![product("p1"), product("p2")],
            vec![employee("e1", "rm1")],
            vec![manager("rm1", &[("p2", 10)])],
        );
        assert_eq!(late.notice.map(|n| n.kind), Some(NoticeKind::OutOfStock));
    }

    #[test]
    fn test_load_failure_notice_survives_clean_order() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "_id": "o3",
            "product": [ { "_id": "p2", "productName": "P2", "quantity": 1, "orderType": "POSM" } ],
            "orderStatus": "pending",
            "requestFrom": { "_id": "e1", "employeeName": "e1", "regionalManager": "rm1" },
            "address": { "_id": "a1", "addressDetails": "12 Mill Road" }
        }))
        .unwrap();

        let mut form = loaded_form();
        form.addresses_failed();
        form.load_order(&order);
        assert_eq!(form.notice.map(|n| n.kind), Some(NoticeKind::LoadFailed));
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut form = OrderForm::new(SubmitTarget::Update(OrderId::new("o1")));
        form.add_row();
        form.submit_failed();
        assert_eq!(form.draft.rows.len(), 2);
        assert_eq!(
            form.notice.map(|n| n.message),
            Some("Error updating order.".to_string())
        );
    }

    #[test]
    fn test_reference_failure_notice() {
        let mut form = OrderForm::new(SubmitTarget::Create);
        form.reference_data_failed();
        assert_eq!(form.notice.map(|n| n.kind), Some(NoticeKind::LoadFailed));
        assert!(form.catalog.products.is_empty());
    }
}
