pub mod aggregate;

pub use aggregate::{Employee, EmployeeId, RequesterOption};
