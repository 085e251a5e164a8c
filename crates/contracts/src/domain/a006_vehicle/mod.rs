pub mod aggregate;

pub use aggregate::{Vehicle, VehicleDto, VehicleId};
