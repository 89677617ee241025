use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod suggestions;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,plateshare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the app (listing store + suggestion client)
    let app = match App::from_config(&config) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            tracing::error!("❌ App initialization failed: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(listings = app.store.len(), "listing store ready");

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.addr);
    let server = Server::bind(config.addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        };

        tracing::debug!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
