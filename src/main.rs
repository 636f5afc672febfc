use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::{Request, Server};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;

mod app;
mod config;
mod dataset;
mod domain;
mod errors;
mod logger;
mod map;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::setup_logger(config.log_level) {
        eprintln!("❌ Logger initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let workers = config.workers;
    info!(
        "Serving {} ({} format, max {} entries) at http://{addr}",
        config.dataset_uri, config.dataset_format, config.max_entries
    );

    let app = Arc::new(App::new(config));
    let server = Server::bind(addr).max_workers(workers);

    // 3️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &app) {
            Ok(resp) => {
                info!("{method} {path} -> {}", resp.status());
                resp
            }
            Err(err) => {
                if err.status() >= 500 {
                    error!("{method} {path} -> {}: {err}", err.status());
                } else {
                    warn!("{method} {path} -> {}: {err}", err.status());
                }
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
