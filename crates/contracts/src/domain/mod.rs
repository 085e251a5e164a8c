pub mod common;

pub mod a001_product;
pub mod a002_employee;
pub mod a003_regional_manager;
pub mod a004_address;
pub mod a005_order;
pub mod a006_vehicle;
pub mod a007_camera;
pub mod a008_access_log;
