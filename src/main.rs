mod routes;
mod controllers;
mod services;
mod models;
mod views;
mod api_docs;
mod shared_state;
mod config;
mod error;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::{Router, routing::get, response::Html};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::calculator_routes::{api_routes, form_routes};
use crate::shared_state::SharedState;

#[derive(Parser)]
#[command(author, version, about = "Size a PV array for a solar water pump", long_about = None)]
struct Opt {
    /// JSON configuration file; built-in defaults are used when it is absent
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
    /// Port to listen on, overriding the configuration file
    #[arg(long)]
    port: Option<u16>,
}

fn app(state: SharedState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .merge(form_routes(state.clone()))
        .nest("/api", api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opts = Opt::parse();

    // 1. Load configuration
    let mut config = match Config::load_or_default(&opts.config) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    if let Some(port) = opts.port {
        config.server.port = port;
    }
    info!(
        "Configuration loaded: defaults {} CV / {} h, losses AC {} DC {} inverter {}",
        config.defaults.pump_power_cv,
        config.defaults.operation_hours,
        config.losses.ac_loss,
        config.losses.dc_loss,
        config.losses.inverter_efficiency
    );

    let host: IpAddr = match config.server.host.parse() {
        Ok(h) => h,
        Err(e) => {
            error!("Invalid server.host {:?}: {}", config.server.host, e);
            return;
        }
    };
    let addr = SocketAddr::new(host, config.server.port);

    // 2. Shared state + router
    let app = app(SharedState::new(config));

    info!("Calculator listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    // 3. Serve
    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        error!("HTTP server error: {}", e);
    }
}
