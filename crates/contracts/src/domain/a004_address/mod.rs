pub mod aggregate;

pub use aggregate::{Address, AddressId, AddressOption};
