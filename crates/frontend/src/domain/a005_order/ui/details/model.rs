use contracts::domain::a001_product::Product;
use contracts::domain::a002_employee::Employee;
use contracts::domain::a003_regional_manager::RegionalManager;
use contracts::domain::a004_address::Address;
use contracts::domain::a005_order::{Order, OrderId, OrderPayload, SubmitMethod, SubmitTarget};
use contracts::domain::common::AggregateRoot;

use crate::shared::api::{self, Method};

/// Lookups the order form needs before rows can be edited
pub struct ReferenceData {
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
    pub regional_managers: Vec<RegionalManager>,
}

/// Fetch products, employees and regional managers in parallel.
///
/// Fails as soon as one request fails; the other results are dropped.
pub async fn fetch_reference_data() -> Result<ReferenceData, String> {
    let product_path = Product::collection_path();
    let employee_path = Employee::collection_path();
    let regionalmanager_path = RegionalManager::collection_path();
    let (products, employees, regional_managers) = futures::try_join!(
        api::get_list::<Product>(&product_path),
        api::get_list::<Employee>(&employee_path),
        api::get_list::<RegionalManager>(&regionalmanager_path),
    )?;

    Ok(ReferenceData {
        products,
        employees,
        regional_managers,
    })
}

pub async fn fetch_addresses() -> Result<Vec<Address>, String> {
    api::get_list::<Address>(&Address::collection_path()).await
}

pub async fn fetch_by_id(id: &OrderId) -> Result<Order, String> {
    api::get_json::<Order>(&Order::item_path(id)).await
}

/// POST for a new order, PUT for an existing one
pub async fn submit(target: &SubmitTarget, payload: &OrderPayload) -> Result<(), String> {
    let method = match target.method() {
        SubmitMethod::Post => Method::Post,
        SubmitMethod::Put => Method::Put,
    };
    api::send_json(method, &target.path(), payload).await
}
