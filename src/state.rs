use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Everything a request handler needs, shared across astra's worker threads.
pub struct Storefront {
    pub config: StorefrontConfig,
    pub catalog: Box<dyn Catalog>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig, catalog: Box<dyn Catalog>) -> Self {
        Self { config, catalog }
    }
}
