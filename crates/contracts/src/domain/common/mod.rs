//! Common types and traits shared by all records

pub mod aggregate_id;
pub mod aggregate_root;
pub mod field_errors;
pub mod list_response;
pub mod lookup;
pub mod media;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use field_errors::FieldErrors;
pub use list_response::ListResponse;
pub use lookup::{LookupItem, SelectOption};
