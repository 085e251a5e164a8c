//! Camera Details UI Module

mod model;
mod view;
mod view_model;

pub use view::CameraDetails;
pub use view_model::CameraDetailsViewModel;
