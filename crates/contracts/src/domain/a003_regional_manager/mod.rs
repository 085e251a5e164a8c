pub mod aggregate;

pub use aggregate::{Region, RegionProduct, RegionalManager, RegionalManagerId};
