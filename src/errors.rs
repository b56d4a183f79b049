use astra::Response;
use thiserror::Error;

/// Failures talking to the external catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Catalog API returned status {0}")]
    Status(u16),
    #[error("Could not decode catalog response: {0}")]
    Decode(String),
}

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the catalog API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Forbidden")]
    Forbidden,
    #[error("Upstream error: {0}")]
    Upstream(#[from] CatalogError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Forbidden => 403,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
