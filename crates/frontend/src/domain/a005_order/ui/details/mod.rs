//! Order Details UI Module
//!
//! MVVM split:
//! - model.rs: API functions (reference data, order, submit)
//! - view_model.rs: ViewModel over the `OrderForm` session state
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
