use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::responses::plain_error_response;
use crate::router::handle;
use crate::state::Storefront;
use astra::Server;

mod auth;
mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration (a `.env` file is honoured when present)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the catalog API client
    let catalog = match CatalogClient::new(&config.catalog_api_url, config.catalog_timeout) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Could not build catalog client: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    log::info!(
        "Starting storefront at http://{addr} (catalog: {})",
        config.catalog_api_url
    );

    let app = Storefront::new(config, Box::new(catalog));

    // 3️⃣ Serve requests, sharing the app state with every worker
    let server = Server::bind(&addr).max_workers(workers);
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            log::error!("Request failed: {err}");
            plain_error_response(&err)
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
