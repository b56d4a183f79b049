pub mod card;
pub mod filters;
pub mod footer;
pub mod navbar;
pub mod vehicle;

pub use card::feature_card;
pub use filters::{filter_panel, sort_select};
pub use footer::footer;
pub use navbar::navbar;
pub use vehicle::{image_fallback, image_url, status_badge, vehicle_card};

