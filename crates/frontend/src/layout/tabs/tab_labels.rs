//! Tab titles

use contracts::domain::a005_order::Order;
use contracts::domain::a006_vehicle::Vehicle;
use contracts::domain::a007_camera::Camera;
use contracts::domain::a008_access_log::AccessLog;
use contracts::domain::common::AggregateRoot;

pub const NEW_SUFFIX: &str = "new";

/// Human readable title for a list/dashboard tab key. Empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Dashboard",
        "a005_order" => Order::list_name(),
        "a006_vehicle" => Vehicle::list_name(),
        "a007_camera" => Camera::list_name(),
        "a008_access_log" => AccessLog::list_name(),
        _ => "",
    }
}

/// Element name for an aggregate key, used in detail tab titles
pub fn entity_element_name(aggregate_key: &str) -> &'static str {
    match aggregate_key {
        "a005_order" => Order::element_name(),
        "a006_vehicle" => Vehicle::element_name(),
        "a007_camera" => Camera::element_name(),
        _ => "",
    }
}

/// `"<entity> · <identifier>"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Detail tab key for an aggregate; `None` opens the create form
pub fn detail_tab_key(aggregate_key: &str, id: Option<&str>) -> String {
    format!("{}_detail_{}", aggregate_key, id.unwrap_or(NEW_SUFFIX))
}

/// Title for any key, including restored detail tabs
pub fn title_for_key(key: &str) -> String {
    let label = tab_label_for_key(key);
    if !label.is_empty() {
        return label.to_string();
    }
    if let Some((aggregate_key, id)) = key.split_once("_detail_") {
        let entity = entity_element_name(aggregate_key);
        if !entity.is_empty() {
            return if id == NEW_SUFFIX {
                format!("New {}", entity.to_lowercase())
            } else {
                detail_tab_label(entity, id)
            };
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys() {
        assert_eq!(detail_tab_key("a005_order", None), "a005_order_detail_new");
        assert_eq!(detail_tab_key("a005_order", Some("42")), "a005_order_detail_42");
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_for_key("a007_camera"), "Cameras");
        assert_eq!(title_for_key("a005_order_detail_new"), "New order");
        assert_eq!(title_for_key("a006_vehicle_detail_v1"), "Vehicle · v1");
        assert_eq!(title_for_key("unknown"), "unknown");
    }
}
