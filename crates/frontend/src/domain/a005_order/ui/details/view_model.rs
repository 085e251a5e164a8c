use super::model;
use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_employee::EmployeeId;
use contracts::domain::a004_address::AddressId;
use contracts::domain::a005_order::{Notice, OrderForm, OrderStatus, OrderType, SubmitTarget};
use contracts::domain::common::{AggregateId, SelectOption};
use leptos::prelude::*;
use std::rc::Rc;
use uuid::Uuid;

/// ViewModel for the order form.
///
/// All rules live in `OrderForm`; this type only moves browser events and
/// API results into it.
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<OrderForm>,
    pub is_saving: RwSignal<bool>,
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

impl OrderDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(OrderForm::new(SubmitTarget::from_route_id(id.as_deref()))),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.target.is_edit())
    }

    /// Load reference data, addresses and, when editing, the order itself
    pub fn load(&self) {
        let form = self.form;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_reference_data().await {
                Ok(data) => {
                    log::debug!(
                        "Order form reference data: {} products, {} employees, {} regional managers",
                        data.products.len(),
                        data.employees.len(),
                        data.regional_managers.len()
                    );
                    form.try_update(|f| {
                        f.set_reference_data(data.products, data.employees, data.regional_managers)
                    });
                }
                Err(e) => {
                    log::error!("Error fetching dropdown data: {}", e);
                    form.try_update(|f| f.reference_data_failed());
                }
            }
        });

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_addresses().await {
                Ok(addresses) => {
                    form.try_update(|f| f.set_addresses(addresses));
                }
                Err(e) => {
                    log::error!("Error fetching addresses: {}", e);
                    form.try_update(|f| f.addresses_failed());
                }
            }
        });

        if let SubmitTarget::Update(id) = self.form.with_untracked(|f| f.target.clone()) {
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(&id).await {
                    Ok(order) => {
                        form.try_update(|f| f.load_order(&order));
                    }
                    Err(e) => {
                        log::error!("Error fetching order {}: {}", id, e);
                        form.try_update(|f| f.order_load_failed());
                    }
                }
            });
        }
    }

    // ------------------------------------------------------------------------
    // Rows are addressed by key; indexes shift when rows are removed
    // ------------------------------------------------------------------------

    fn row_index(&self, key: Uuid) -> Option<usize> {
        self.form
            .with_untracked(|f| f.draft.rows.iter().position(|row| row.key == key))
    }

    pub fn row_keys(&self) -> Vec<Uuid> {
        self.form.with(|f| f.draft.rows.iter().map(|row| row.key).collect())
    }

    pub fn add_row(&self) {
        self.form.update(|f| f.add_row());
    }

    pub fn remove_row(&self, key: Uuid) {
        if let Some(index) = self.row_index(key) {
            self.form.update(|f| f.remove_row(index));
        }
    }

    pub fn set_product(&self, key: Uuid, value: String) {
        if let Some(index) = self.row_index(key) {
            let product_id = non_empty(value).map(ProductId::new);
            self.form.update(|f| f.set_product(index, product_id.as_ref()));
        }
    }

    pub fn set_quantity(&self, key: Uuid, value: String) {
        if let Some(index) = self.row_index(key) {
            self.form.update(|f| f.set_quantity(index, &value));
        }
    }

    pub fn set_order_type(&self, key: Uuid, value: String) {
        if let Some(index) = self.row_index(key) {
            let order_type = non_empty(value).and_then(|v| v.parse::<OrderType>().ok());
            self.form.update(|f| f.set_order_type(index, order_type));
        }
    }

    pub fn set_status(&self, value: String) {
        let status = non_empty(value).and_then(|v| v.parse::<OrderStatus>().ok());
        self.form.update(|f| f.set_status(status));
    }

    pub fn set_address(&self, value: String) {
        let address_id = non_empty(value).map(AddressId::new);
        self.form.update(|f| f.set_address(address_id.as_ref()));
    }

    pub fn select_requester(&self, value: String) {
        let requester_id = non_empty(value).map(EmployeeId::new);
        self.form.update(|f| f.select_requester(requester_id.as_ref()));
    }

    pub fn dismiss_notice(&self) {
        self.form.update(|f| f.dismiss_notice());
    }

    // ------------------------------------------------------------------------
    // Derived values for the view
    // ------------------------------------------------------------------------

    pub fn product_options(&self) -> Vec<SelectOption> {
        self.form
            .with(|f| f.catalog.products.iter().map(SelectOption::from_item).collect())
    }

    pub fn requester_options(&self) -> Vec<SelectOption> {
        self.form
            .with(|f| f.catalog.requesters.iter().map(SelectOption::from_item).collect())
    }

    pub fn address_options(&self) -> Vec<SelectOption> {
        self.form
            .with(|f| f.catalog.addresses.iter().map(SelectOption::from_item).collect())
    }

    pub fn status_options() -> Vec<SelectOption> {
        OrderStatus::ALL
            .iter()
            .map(|s| SelectOption::new(s.as_str(), s.label()))
            .collect()
    }

    pub fn order_type_options() -> Vec<SelectOption> {
        OrderType::ALL
            .iter()
            .map(|t| SelectOption::new(t.as_str(), t.as_str()))
            .collect()
    }

    pub fn requester_value(&self) -> String {
        self.form.with(|f| {
            f.draft
                .requester
                .as_ref()
                .map(|r| r.id.as_string())
                .unwrap_or_default()
        })
    }

    pub fn status_value(&self) -> String {
        self.form.with(|f| {
            f.draft
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default()
        })
    }

    pub fn address_value(&self) -> String {
        self.form.with(|f| {
            f.draft
                .address
                .as_ref()
                .map(|a| a.id.as_string())
                .unwrap_or_default()
        })
    }

    fn with_row<T>(&self, key: Uuid, read: impl FnOnce(usize, &OrderForm) -> T) -> Option<T> {
        self.form.with(|f| {
            f.draft
                .rows
                .iter()
                .position(|row| row.key == key)
                .map(|index| read(index, f))
        })
    }

    pub fn row_product_value(&self, key: Uuid) -> String {
        self.with_row(key, |i, f| {
            f.draft.rows[i]
                .product
                .as_ref()
                .map(|p| p.id.as_string())
                .unwrap_or_default()
        })
        .unwrap_or_default()
    }

    pub fn row_quantity_value(&self, key: Uuid) -> String {
        self.with_row(key, |i, f| f.draft.rows[i].quantity.to_input())
            .unwrap_or_default()
    }

    pub fn row_order_type_value(&self, key: Uuid) -> String {
        self.with_row(key, |i, f| {
            f.draft.rows[i]
                .order_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default()
        })
        .unwrap_or_default()
    }

    pub fn row_max_quantity(&self, key: Uuid) -> Option<String> {
        self.with_row(key, |i, f| f.max_quantity(i))
            .flatten()
            .map(|max| max.to_string())
    }

    pub fn row_error(&self, key: Uuid) -> Option<String> {
        self.with_row(key, |i, f| f.row_error(i).map(str::to_string))
            .flatten()
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.form.with(|f| f.field_error(field).map(str::to_string))
    }

    pub fn notice(&self) -> Option<Notice> {
        self.form.with(|f| f.notice.clone())
    }

    /// Validate and send the order; the draft stays on failure
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.is_saving.get_untracked() {
            return;
        }

        let Some(payload) = self.form.try_update(|f| f.prepare_submit()).flatten() else {
            log::debug!("Order submission blocked by validation");
            return;
        };
        let target = self.form.with_untracked(|f| f.target.clone());

        let form = self.form;
        let is_saving = self.is_saving;
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::submit(&target, &payload).await {
                Ok(()) => {
                    log::info!("Order saved ({} lines)", payload.product.len());
                    let _ = is_saving.try_set(false);
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("{} {}", target.failure_message(), e);
                    let _ = is_saving.try_set(false);
                    form.try_update(|f| f.submit_failed());
                }
            }
        });
    }
}
