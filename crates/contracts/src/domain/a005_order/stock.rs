use std::collections::HashMap;

use super::draft::OrderRow;
use super::error::StockError;
use crate::domain::a001_product::{ProductId, ProductOption};
use crate::domain::a002_employee::RequesterOption;
use crate::domain::a003_regional_manager::RegionalManager;

/// Per-product stock ceilings of one region.
///
/// Built from the regional manager of the selected requester and rebuilt on
/// every requester change; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockCeilingMap {
    ceilings: HashMap<ProductId, i64>,
}

impl StockCeilingMap {
    pub fn from_manager(manager: &RegionalManager) -> Self {
        let ceilings = manager
            .region
            .products
            .iter()
            .map(|p| (p.product_id.clone(), p.quantity))
            .collect();
        Self { ceilings }
    }

    /// Ceiling of a product, `None` when the region does not list it.
    pub fn ceiling(&self, product_id: &ProductId) -> Option<i64> {
        self.ceilings.get(product_id).copied()
    }

    /// A product is orderable when the region lists it with a positive ceiling.
    pub fn is_available(&self, product_id: &ProductId) -> bool {
        matches!(self.ceiling(product_id), Some(c) if c > 0)
    }

    /// First row whose product is not orderable in this region.
    pub fn first_out_of_stock<'a>(
        &self,
        rows: &'a [OrderRow],
    ) -> Option<(usize, &'a ProductOption)> {
        rows.iter().enumerate().find_map(|(index, row)| {
            row.product
                .as_ref()
                .filter(|product| !self.is_available(&product.id))
                .map(|product| (index, product))
        })
    }

    pub fn len(&self) -> usize {
        self.ceilings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ceilings.is_empty()
    }
}

impl FromIterator<(ProductId, i64)> for StockCeilingMap {
    fn from_iter<I: IntoIterator<Item = (ProductId, i64)>>(iter: I) -> Self {
        Self {
            ceilings: iter.into_iter().collect(),
        }
    }
}

/// Builds the ceiling map for a requester from the regional manager list.
///
/// The manager must exist: employees and managers come from the same back
/// office, so a dangling link is a data error rather than a user error.
pub fn resolve_ceilings(
    requester: &RequesterOption,
    managers: &[RegionalManager],
) -> Result<StockCeilingMap, StockError> {
    managers
        .iter()
        .find(|m| m.id == requester.regional_manager)
        .map(StockCeilingMap::from_manager)
        .ok_or_else(|| StockError::UnknownRegionalManager(requester.regional_manager.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_employee::EmployeeId;
    use crate::domain::a003_regional_manager::{Region, RegionProduct, RegionalManagerId};

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

    fn requester(rm: &str) -> RequesterOption {
        RequesterOption {
            id: EmployeeId::new("e1"),
            label: "Asha".into(),
            regional_manager: RegionalManagerId::new(rm),
        }
    }

    #[test]
    fn test_resolve_picks_requesters_manager() {
        let managers = vec![manager("rm1", &[("p1", 0)]), manager("rm2", &[("p1", 9)])];
        let map = resolve_ceilings(&requester("rm2"), &managers).unwrap();
        assert_eq!(map.ceiling(&ProductId::new("p1")), Some(9));
        assert!(map.is_available(&ProductId::new("p1")));
    }

    #[test]
    fn test_zero_and_missing_are_unavailable() {
        let map = StockCeilingMap::from_manager(&manager("rm1", &[("p1", 0), ("p2", 4)]));
        assert!(!map.is_available(&ProductId::new("p1")));
        assert!(!map.is_available(&ProductId::new("p3")));
        assert!(map.is_available(&ProductId::new("p2")));
    }

    #[test]
    fn test_unknown_manager_is_an_error() {
        let err = resolve_ceilings(&requester("ghost"), &[manager("rm1", &[])]).unwrap_err();
        assert_eq!(
            err,
            StockError::UnknownRegionalManager(RegionalManagerId::new("ghost"))
        );
    }
}
