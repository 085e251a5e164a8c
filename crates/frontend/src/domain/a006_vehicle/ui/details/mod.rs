//! Vehicle Details UI Module
//!
//! - model.rs: API functions (fetch, multipart save)
//! - view_model.rs: ViewModel with commands and state
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::VehicleDetails;
pub use view_model::VehicleDetailsViewModel;
