pub mod app_state;
pub mod bounding_box;
pub mod ridership;
pub mod stop_info;
