use crate::domain::a001_product::{Product, ProductId, ProductOption};
use crate::domain::a002_employee::{Employee, EmployeeId, RequesterOption};
use crate::domain::a003_regional_manager::RegionalManager;
use crate::domain::a004_address::{Address, AddressId, AddressOption};

/// Reference lists backing the order form's selectors.
///
/// Products, requesters and regional managers are loaded together; addresses
/// arrive from their own request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<ProductOption>,
    pub requesters: Vec<RequesterOption>,
    pub regional_managers: Vec<RegionalManager>,
    pub addresses: Vec<AddressOption>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills products, requesters and regional managers in one step.
    pub fn set_reference_data(
        &mut self,
        products: Vec<Product>,
        employees: Vec<Employee>,
        regional_managers: Vec<RegionalManager>,
    ) {
        self.products = products.iter().map(ProductOption::from).collect();
        self.requesters = employees.into_iter().map(RequesterOption::from).collect();
        self.regional_managers = regional_managers;
    }

    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses.into_iter().map(AddressOption::from).collect();
    }

    pub fn product(&self, id: &ProductId) -> Option<&ProductOption> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn requester(&self, id: &EmployeeId) -> Option<&RequesterOption> {
        self.requesters.iter().find(|r| &r.id == id)
    }

    pub fn address(&self, id: &AddressId) -> Option<&AddressOption> {
        self.addresses.iter().find(|a| &a.id == id)
    }

    /// Reference data loaded (the regional managers are what the stock checks need)
    pub fn is_loaded(&self) -> bool {
        !self.regional_managers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_regional_manager::{Region, RegionalManagerId};

    #[test]
    fn test_reference_data_to_options() {
        let mut catalog = Catalog::new();
        catalog.set_reference_data(
            vec![Product {
                id: ProductId::new("p1"),
                product_name: "Fridge".into(),
            }],
            vec![Employee {
                id: EmployeeId::new("e1"),
                employee_name: "Asha".into(),
                regional_manager: RegionalManagerId::new("rm1"),
            }],
            vec![RegionalManager {
                id: RegionalManagerId::new("rm1"),
                name: None,
                region: Region::default(),
            }],
        );
        catalog.set_addresses(vec![Address {
            id: AddressId::new("a1"),
            address_details: "12 Mill Road".into(),
        }]);

        assert!(catalog.is_loaded());
        assert_eq!(catalog.product(&ProductId::new("p1")).map(|p| p.label.as_str()), Some("Fridge"));
        assert_eq!(
            catalog.requester(&EmployeeId::new("e1")).map(|r| &r.regional_manager),
            Some(&RegionalManagerId::new("rm1"))
        );
        assert_eq!(catalog.address(&AddressId::new("a1")).map(|a| a.label.as_str()), Some("12 Mill Road"));
        assert!(catalog.product(&ProductId::new("p2")).is_none());
    }
}
