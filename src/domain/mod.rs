pub mod filter;
pub mod format;
pub mod vehicle;

pub use filter::{derive_brand_options, filter_and_sort, FilterCriteria, SortKey};
pub use vehicle::{Vehicle, VehicleStatus, VehicleType};
