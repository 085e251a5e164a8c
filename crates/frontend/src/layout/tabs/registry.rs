//! Tab content registry: the single mapping from `tab.key` to a view.
//!
//! Detail tabs are keyed `<aggregate>_detail_<id>`; the suffix `new` opens
//! the create form.

use super::tab_labels::NEW_SUFFIX;
use crate::dashboards::OverviewDashboard;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::domain::a005_order::ui::list::OrderList;
use crate::domain::a006_vehicle::ui::details::VehicleDetails;
use crate::domain::a006_vehicle::ui::list::VehicleList;
use crate::domain::a007_camera::ui::details::CameraDetails;
use crate::domain::a007_camera::ui::list::CameraList;
use crate::domain::a008_access_log::ui::list::AccessLogList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use std::rc::Rc;

/// Record id addressed by a detail tab key.
///
/// `None` when `key` is not a detail key of `aggregate_key`,
/// `Some(None)` for the create form.
fn detail_id(key: &str, aggregate_key: &str) -> Option<Option<String>> {
    let id = key.strip_prefix(aggregate_key)?.strip_prefix("_detail_")?;
    if id.is_empty() {
        return None;
    }
    Some((id != NEW_SUFFIX).then(|| id.to_string()))
}

/// Close callbacks for a detail tab: saving also refreshes open lists
fn detail_callbacks(key: &str, tabs_store: AppGlobalContext) -> (Rc<dyn Fn(())>, Rc<dyn Fn(())>) {
    let saved_key = key.to_string();
    let cancel_key = key.to_string();
    (
        Rc::new(move |_| tabs_store.close_saved(&saved_key)),
        Rc::new(move |_| tabs_store.close_tab(&cancel_key)),
    )
}

/// Renders the content of a tab by its key.
///
/// Unknown keys render a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // a005: Orders
        "a005_order" => view! { <OrderList /> }.into_any(),
        k if detail_id(k, "a005_order").is_some() => {
            let id = detail_id(k, "a005_order").flatten();
            let (on_saved, on_cancel) = detail_callbacks(k, tabs_store);
            view! { <OrderDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }

        // a006: Vehicles
        "a006_vehicle" => view! { <VehicleList /> }.into_any(),
        k if detail_id(k, "a006_vehicle").is_some() => {
            let id = detail_id(k, "a006_vehicle").flatten();
            let (on_saved, on_cancel) = detail_callbacks(k, tabs_store);
            view! { <VehicleDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }

        // a007: Cameras
        "a007_camera" => view! { <CameraList /> }.into_any(),
        k if detail_id(k, "a007_camera").is_some() => {
            let id = detail_id(k, "a007_camera").flatten();
            let (on_saved, on_cancel) = detail_callbacks(k, tabs_store);
            view! { <CameraDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }

        // a008: Access logs
        "a008_access_log" => view! { <AccessLogList /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! {
                <div class="placeholder">
                    {format!("Unknown page: {}", key)}
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_id() {
        assert_eq!(detail_id("a005_order_detail_new", "a005_order"), Some(None));
        assert_eq!(
            detail_id("a005_order_detail_64f0c2", "a005_order"),
            Some(Some("64f0c2".to_string()))
        );
        assert_eq!(detail_id("a005_order", "a005_order"), None);
        assert_eq!(detail_id("a005_order_detail_", "a005_order"), None);
        assert_eq!(detail_id("a006_vehicle_detail_new", "a005_order"), None);
    }
}
