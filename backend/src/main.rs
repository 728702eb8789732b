//! Service entry point: environment configuration, tracing, and bootstrap.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use camino::Utf8PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lectern::inbound::http::health::HealthState;
use server::ServerConfig;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_DIR: &str = "data";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let port = match env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| {
            std::io::Error::other(format!("invalid PORT value '{raw}': {e}"))
        })?,
        Err(_) => DEFAULT_PORT,
    };
    let data_dir = env::var("DATA_DIR")
        .map_or_else(|_| Utf8PathBuf::from(DEFAULT_DATA_DIR), Utf8PathBuf::from);

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%bind_addr, data_dir = %data_dir, "starting records service");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, data_dir);
    let http_server = server::create_server(health_state, config)?;
    http_server.await
}
