pub mod access_denied;
pub mod home;
pub mod not_found;
pub mod vehicle_detail;
pub mod vehicles;

pub use access_denied::{access_denied_page, reference_id};
pub use home::home_page;
pub use not_found::{not_found_page, vehicle_not_found_page};
pub use vehicle_detail::{vehicle_detail_page, vehicle_error_page, VehicleDetailVm};
pub use vehicles::{vehicles_error_page, vehicles_page, VehiclesVm};
