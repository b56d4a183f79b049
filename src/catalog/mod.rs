mod client;
mod models;

pub use client::CatalogClient;
pub use models::Envelope;

use crate::auth::CurrentUser;
use crate::domain::Vehicle;
use crate::errors::CatalogError;

/// Read side of the external catalog REST API.
pub trait Catalog: Send + Sync {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, CatalogError>;

    /// `Ok(None)` when the API reports the vehicle does not exist.
    fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, CatalogError>;

    /// `Ok(None)` when the token is rejected.
    fn current_user(&self, token: &str) -> Result<Option<CurrentUser>, CatalogError>;
}
