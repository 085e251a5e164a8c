pub mod aggregate;

pub use aggregate::{Camera, CameraDto, CameraId};
