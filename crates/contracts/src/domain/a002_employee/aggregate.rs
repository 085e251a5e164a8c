use serde::{Deserialize, Serialize};

use crate::domain::a003_regional_manager::RegionalManagerId;
use crate::domain::common::{AggregateRoot, LookupItem};

crate::string_id!(
    /// Employee id
    EmployeeId
);

/// Employee on whose behalf orders are placed (the requester)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,

    #[serde(rename = "employeeName")]
    pub employee_name: String,

    #[serde(rename = "regionalManager")]
    pub regional_manager: RegionalManagerId,
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.employee_name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

/// Requester entry of the order form.
///
/// Keeps the regional manager link explicit so the stock resolver never has
/// to dig it out of an untyped option object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequesterOption {
    pub id: EmployeeId,
    pub label: String,
    pub regional_manager: RegionalManagerId,
}

impl From<&Employee> for RequesterOption {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.clone(),
            label: e.employee_name.clone(),
            regional_manager: e.regional_manager.clone(),
        }
    }
}

impl From<Employee> for RequesterOption {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            label: e.employee_name,
            regional_manager: e.regional_manager,
        }
    }
}

impl LookupItem for RequesterOption {
    type Id = EmployeeId;

    fn lookup_id(&self) -> &EmployeeId {
        &self.id
    }

    fn lookup_label(&self) -> &str {
        &self.label
    }
}
