pub mod a005_order;
pub mod a006_vehicle;
pub mod a007_camera;
pub mod a008_access_log;
