// src/catalog/client.rs
use crate::auth::CurrentUser;
use crate::catalog::{Catalog, Envelope};
use crate::domain::Vehicle;
use crate::errors::CatalogError;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("charaka-storefront/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the catalog API.
pub struct CatalogClient {
    client: Client,
    base: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url).map_err(|e| CatalogError::Network(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(CatalogError::Network(format!(
                "{base_url} cannot be used as an API base"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in new(), so this always yields segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get(&self, url: Url, bearer: Option<&str>) -> Result<Response, CatalogError> {
        log::debug!("catalog GET {url}");
        let mut req = self.client.get(url);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        req.send().map_err(|e| CatalogError::Network(e.to_string()))
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CatalogError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    resp.json::<Envelope<T>>()
        .map(|env| env.data)
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

impl Catalog for CatalogClient {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, CatalogError> {
        let resp = self.get(self.endpoint(&["vehicles"]), None)?;
        let raw: Vec<Value> = decode(resp)?;

        // One bad record should not take the whole listing down.
        let vehicles = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Vehicle>(value) {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("skipping unreadable vehicle record: {e}");
                    None
                }
            })
            .collect();

        Ok(vehicles)
    }

    fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, CatalogError> {
        let resp = self.get(self.endpoint(&["vehicles", id]), None)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(resp).map(Some)
    }

    fn current_user(&self, token: &str) -> Result<Option<CurrentUser>, CatalogError> {
        let resp = self.get(self.endpoint(&["auth", "me"]), Some(token))?;
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => decode(resp).map(Some),
        }
    }
}
