use uuid::Uuid;

use super::aggregate::{Order, OrderStatus, OrderType};
use super::error::{OrderFormError, StockError};
use super::notice::Notice;
use super::stock::{resolve_ceilings, StockCeilingMap};
use crate::domain::a001_product::ProductOption;
use crate::domain::a002_employee::RequesterOption;
use crate::domain::a003_regional_manager::RegionalManager;
use crate::domain::a004_address::AddressOption;

// ============================================================================
// Quantity
// ============================================================================

/// Quantity as typed into a row.
///
/// Unparsable input is kept as `NotANumber` so the submit-time validator can
/// report it; editing never rejects a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Value(i64),
    NotANumber,
}

impl Quantity {
    /// Parses the leading base-10 integer of `input`.
    ///
    /// Leading whitespace and one sign are accepted, trailing garbage is
    /// ignored (`"12 pcs"` is 12); no digits at all yields `NotANumber`.
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut seen_digit = false;
        let mut value: i64 = 0;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            seen_digit = true;
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(b - b'0'));
        }

        if !seen_digit {
            return Quantity::NotANumber;
        }
        Quantity::Value(if negative { -value } else { value })
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Quantity::Value(v) => Some(*v),
            Quantity::NotANumber => None,
        }
    }

    /// Input text for the quantity field
    pub fn to_input(&self) -> String {
        match self {
            Quantity::Value(v) => v.to_string(),
            Quantity::NotANumber => String::new(),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Value(0)
    }
}

impl From<i64> for Quantity {
    fn from(v: i64) -> Self {
        Quantity::Value(v)
    }
}

// ============================================================================
// Draft
// ============================================================================

/// One product line of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    /// Stable key for keyed rendering; survives removal of other rows
    pub key: Uuid,
    pub product: Option<ProductOption>,
    pub quantity: Quantity,
    pub order_type: Option<OrderType>,
}

impl OrderRow {
    pub fn empty() -> Self {
        Self {
            key: Uuid::new_v4(),
            product: None,
            quantity: Quantity::default(),
            order_type: None,
        }
    }

    pub fn new(product: ProductOption, quantity: i64, order_type: OrderType) -> Self {
        Self {
            key: Uuid::new_v4(),
            product: Some(product),
            quantity: Quantity::Value(quantity),
            order_type: Some(order_type),
        }
    }

    /// All fields set and a positive quantity
    pub fn is_submittable(&self) -> bool {
        self.product.is_some()
            && self.order_type.is_some()
            && matches!(self.quantity, Quantity::Value(q) if q > 0)
    }
}

/// Outcome of selecting a requester
#[derive(Debug, Clone, PartialEq)]
pub enum RequesterChange {
    /// Requester committed; the caller replaces its ceiling map with this one
    Committed(StockCeilingMap),
    /// A selected product is unavailable in the new region; previous
    /// requester and ceiling map stay in place
    RolledBack(Notice),
}

/// In-memory order form state, owned by one form session
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub rows: Vec<OrderRow>,
    pub status: Option<OrderStatus>,
    pub requester: Option<RequesterOption>,
    pub address: Option<AddressOption>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            rows: vec![OrderRow::empty()],
            status: None,
            requester: None,
            address: None,
        }
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing order
    pub fn from_order(order: &Order) -> Self {
        let rows = order
            .product
            .iter()
            .map(|line| OrderRow {
                key: Uuid::new_v4(),
                product: Some(ProductOption {
                    id: line.product_id.clone(),
                    label: line.product_name.clone(),
                }),
                quantity: Quantity::Value(line.quantity),
                order_type: Some(line.order_type),
            })
            .collect();

        Self {
            rows,
            status: Some(order.order_status),
            requester: Some(RequesterOption::from(&order.request_from)),
            address: Some((&order.address).into()),
        }
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut OrderRow, OrderFormError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(OrderFormError::RowOutOfRange { index, len })
    }

    /// Notice derived from the current rows and ceilings, if any
    pub fn stock_notice(&self, ceilings: Option<&StockCeilingMap>) -> Option<Notice> {
        let ceilings = ceilings?;
        self.requester.as_ref()?;
        ceilings
            .first_out_of_stock(&self.rows)
            .map(|(_, product)| Notice::out_of_stock(&product.label))
    }

    // ------------------------------------------------------------------------
    // Row editor
    // ------------------------------------------------------------------------

    pub fn add_row(&mut self) {
        self.rows.push(OrderRow::empty());
    }

    /// Removes the row at `index`; an out-of-range index leaves the rows as is.
    pub fn remove_row(&mut self, index: usize, ceilings: Option<&StockCeilingMap>) -> Option<Notice> {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        self.stock_notice(ceilings)
    }

    /// Assigns a product to a row.
    ///
    /// With a requester selected, a product the region cannot supply is
    /// cleared again and reported.
    pub fn set_product(
        &mut self,
        index: usize,
        product: Option<ProductOption>,
        ceilings: Option<&StockCeilingMap>,
    ) -> Result<Option<Notice>, OrderFormError> {
        let active_ceilings = ceilings.filter(|_| self.requester.is_some());
        let row = self.row_mut(index)?;
        row.product = product;

        let rejected = match (active_ceilings, row.product.as_ref()) {
            (Some(map), Some(chosen)) if !map.is_available(&chosen.id) => Some(chosen.clone()),
            _ => None,
        };
        if let Some(chosen) = rejected {
            log::debug!("row {}: {} rejected, out of stock", index, chosen.id);
            row.product = None;
            return Ok(Some(Notice::out_of_stock(&chosen.label)));
        }

        Ok(self.stock_notice(ceilings))
    }

    pub fn set_quantity(
        &mut self,
        index: usize,
        quantity: Quantity,
        ceilings: Option<&StockCeilingMap>,
    ) -> Result<Option<Notice>, OrderFormError> {
        self.row_mut(index)?.quantity = quantity;
        Ok(self.stock_notice(ceilings))
    }

    pub fn set_order_type(
        &mut self,
        index: usize,
        order_type: Option<OrderType>,
    ) -> Result<(), OrderFormError> {
        self.row_mut(index)?.order_type = order_type;
        Ok(())
    }

    pub fn set_status(&mut self, status: Option<OrderStatus>) {
        self.status = status;
    }

    pub fn set_address(&mut self, address: Option<AddressOption>) {
        self.address = address;
    }

    // ------------------------------------------------------------------------
    // Requester / region
    // ------------------------------------------------------------------------

    /// Selects a requester and re-checks every row against its region.
    ///
    /// The requester is committed only when all selected products are
    /// available in the new region.
    pub fn select_requester(
        &mut self,
        requester: RequesterOption,
        managers: &[RegionalManager],
    ) -> Result<RequesterChange, StockError> {
        let ceilings = resolve_ceilings(&requester, managers)?;

        if let Some((index, product)) = ceilings.first_out_of_stock(&self.rows) {
            log::warn!(
                "requester {} not applied: row {} product {} is out of stock in region",
                requester.id,
                index,
                product.id
            );
            return Ok(RequesterChange::RolledBack(Notice::out_of_stock(&product.label)));
        }

        self.requester = Some(requester);
        Ok(RequesterChange::Committed(ceilings))
    }

    pub fn clear_requester(&mut self) {
        self.requester = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;
    use crate::domain::a002_employee::EmployeeId;
    use crate::domain::a003_regional_manager::{Region, RegionProduct, RegionalManagerId};

    fn product(id: &str) -> ProductOption {
        ProductOption {
            id: ProductId::new(id),
            label: id.to_uppercase(),
        }
    }

    fn requester(id: &str, rm: &str) -> RequesterOption {
        RequesterOption {
            id: EmployeeId::new(id),
            label: id.to_string(),
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

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse("12"), Quantity::Value(12));
        assert_eq!(Quantity::parse("  7 pcs"), Quantity::Value(7));
        assert_eq!(Quantity::parse("-3"), Quantity::Value(-3));
        assert_eq!(Quantity::parse(""), Quantity::NotANumber);
        assert_eq!(Quantity::parse("abc"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("-"), Quantity::NotANumber);
    }

    #[test]
    fn test_new_draft_has_one_empty_row() {
        let draft = OrderDraft::new();
        assert_eq!(draft.rows.len(), 1);
        assert_eq!(draft.rows[0].product, None);
        assert_eq!(draft.rows[0].quantity, Quantity::Value(0));
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut draft = OrderDraft::new();
        draft.add_row();
        draft.add_row();
        let kept_key = draft.rows[2].key;
        assert_eq!(draft.remove_row(1, None), None);
        assert_eq!(draft.rows.len(), 2);
        assert_eq!(draft.rows[1].key, kept_key);

        draft.remove_row(10, None);
        assert_eq!(draft.rows.len(), 2);
    }

    #[test]
    fn test_set_product_without_requester_is_unchecked() {
        let mut draft = OrderDraft::new();
        let ceilings: StockCeilingMap = [(ProductId::new("p1"), 0)].into_iter().collect();
        let notice = draft.set_product(0, Some(product("p1")), Some(&ceilings)).unwrap();
        assert_eq!(notice, None);
        assert_eq!(draft.rows[0].product, Some(product("p1")));
    }

    #[test]
    fn test_set_product_out_of_stock_is_cleared() {
        let managers = vec![manager("rm1", &[("p1", 0), ("p2", 5)])];
        let mut draft = OrderDraft::new();
        let ceilings = match draft.select_requester(requester("e1", "rm1"), &managers).unwrap() {
            RequesterChange::Committed(map) => map,
            other => panic!("unexpected {:?}", other),
        };

        let notice = draft.set_product(0, Some(product("p1")), Some(&ceilings)).unwrap();
        assert_eq!(draft.rows[0].product, None);
        assert_eq!(
            notice.map(|n| n.message),
            Some("Product P1 is out of stock in this region.".to_string())
        );

        let notice = draft.set_product(0, Some(product("p2")), Some(&ceilings)).unwrap();
        assert_eq!(notice, None);
        assert_eq!(draft.rows[0].product, Some(product("p2")));
    }

    #[test]
    fn test_missing_ceiling_counts_as_out_of_stock() {
        let managers = vec![manager("rm1", &[("p2", 5)])];
        let mut draft = OrderDraft::new();
        let RequesterChange::Committed(ceilings) =
            draft.select_requester(requester("e1", "rm1"), &managers).unwrap()
        else {
            panic!("requester should be committed");
        };
        let notice = draft.set_product(0, Some(product("p9")), Some(&ceilings)).unwrap();
        assert!(notice.is_some());
        assert_eq!(draft.rows[0].product, None);
    }

    #[test]
    fn test_requester_rolled_back_when_selected_product_unavailable() {
        let managers = vec![manager("rm1", &[("p1", 4)]), manager("rm2", &[("p1", 0)])];
        let mut draft = OrderDraft::new();
        assert!(matches!(
            draft.select_requester(requester("e1", "rm1"), &managers),
            Ok(RequesterChange::Committed(_))
        ));
        draft.set_product(0, Some(product("p1")), None).unwrap();

        let change = draft.select_requester(requester("e2", "rm2"), &managers).unwrap();
        match change {
            RequesterChange::RolledBack(notice) => {
                assert_eq!(notice.message, "Product P1 is out of stock in this region.")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(draft.requester.as_ref().map(|r| r.id.0.as_str()), Some("e1"));
        assert_eq!(draft.rows[0].product, Some(product("p1")));
    }

    #[test]
    fn test_requester_rolled_back_when_region_does_not_list_product() {
        let managers = vec![manager("rm1", &[("p1", 4), ("p2", 2)]), manager("rm3", &[("p2", 9)])];
        let mut draft = OrderDraft::new();
        assert!(matches!(
            draft.select_requester(requester("e1", "rm1"), &managers),
            Ok(RequesterChange::Committed(_))
        ));
        draft.set_product(0, Some(product("p1")), None).unwrap();

        let change = draft.select_requester(requester("e3", "rm3"), &managers).unwrap();
        match change {
            RequesterChange::RolledBack(notice) => {
                assert_eq!(notice.message, "Product P1 is out of stock in this region.")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(draft.requester.as_ref().map(|r| r.id.0.as_str()), Some("e1"));
        assert_eq!(draft.rows[0].product, Some(product("p1")));
    }

    #[test]
    fn test_first_requester_rolled_back_leaves_none() {
        let managers = vec![manager("rm2", &[("p1", 0)])];
        let mut draft = OrderDraft::new();
        draft.set_product(0, Some(product("p1")), None).unwrap();
        let change = draft.select_requester(requester("e2", "rm2"), &managers).unwrap();
        assert!(matches!(change, RequesterChange::RolledBack(_)));
        assert!(draft.requester.is_none());
    }

    #[test]
    fn test_unknown_regional_manager() {
        let mut draft = OrderDraft::new();
        let result = draft.select_requester(requester("e1", "nobody"), &[]);
        assert!(matches!(result, Err(StockError::UnknownRegionalManager(_))));
        assert!(draft.requester.is_none());
    }

    #[test]
    fn test_set_quantity_stores_not_a_number() {
        let mut draft = OrderDraft::new();
        draft.set_quantity(0, Quantity::parse("x"), None).unwrap();
        assert_eq!(draft.rows[0].quantity, Quantity::NotANumber);
    }

    #[test]
    fn test_row_out_of_range() {
        let mut draft = OrderDraft::new();
        assert_eq!(
            draft.set_order_type(3, Some(OrderType::Asset)),
            Err(OrderFormError::RowOutOfRange { index: 3, len: 1 })
        );
    }
}
