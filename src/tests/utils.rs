use crate::auth::{CurrentUser, Role};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::domain::Vehicle;
use crate::errors::CatalogError;
use crate::state::Storefront;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;

/// In-memory stand-in for the catalog API.
#[derive(Default)]
pub struct StubCatalog {
    pub vehicles: Vec<Vehicle>,
    /// When set, every vehicle call fails as if the API were down.
    pub unavailable: bool,
    pub users: HashMap<String, CurrentUser>,
}

impl Catalog for StubCatalog {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, CatalogError> {
        if self.unavailable {
            return Err(CatalogError::Network("connection refused".into()));
        }
        Ok(self.vehicles.clone())
    }

    fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, CatalogError> {
        if self.unavailable {
            return Err(CatalogError::Network("connection refused".into()));
        }
        Ok(self.vehicles.iter().find(|v| v.id == id).cloned())
    }

    fn current_user(&self, token: &str) -> Result<Option<CurrentUser>, CatalogError> {
        Ok(self.users.get(token).cloned())
    }
}

pub fn vehicle(value: Value) -> Vehicle {
    serde_json::from_value(value).unwrap_or_else(|e| panic!("bad test vehicle: {e}"))
}

pub fn user(username: &str, role: Role) -> CurrentUser {
    CurrentUser {
        username: username.to_string(),
        email: Some(format!("{username}@charaka.lk")),
        role,
        permissions: Vec::new(),
    }
}

pub fn storefront(catalog: StubCatalog) -> Storefront {
    Storefront::new(StorefrontConfig::default(), Box::new(catalog))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_as(uri: &str, token: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", format!("theme=dark; token={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers().get("Location").unwrap().to_str().unwrap()
}
